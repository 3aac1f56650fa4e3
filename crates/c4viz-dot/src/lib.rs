//! Graphviz DOT primitives used by c4viz.
//!
//! This crate holds attribute maps for nodes, edges and clusters and writes
//! them out as DOT text. It does no layout of its own; the output is meant for
//! the `dot` program.
//!
//! # Module Structure
//!
//! - [`attrs`]: ordered, last-write-wins attribute maps
//! - [`dot`]: DOT quoting helpers and the [`DotBuilder`] writer
//! - [`graph`]: [`Node`], [`Edge`] and [`Cluster`] values
//! - [`diagram`]: an owned [`Diagram`] that renders to a string or a file

pub mod attrs;
pub mod diagram;
pub mod dot;
pub mod graph;

pub use attrs::{AttrValue, Attrs};
pub use diagram::{Diagram, Direction};
pub use dot::{DotBuilder, escape_label, format_value, sanitize_id};
pub use graph::{Cluster, Edge, Node, NodeId};
