//! C4-model architecture elements as styled Graphviz nodes, edges and clusters.
//!
//! Each builder computes a category key and a set of style attributes for its
//! element kind, formats an HTML-like label, layers the caller's attribute
//! overrides on top, and hands the result to [`c4viz_dot`].
//!
//! ```rust
//! use c4viz::{Diagram, container, database, relationship, system_boundary};
//!
//! let mut diagram = Diagram::new("Orders");
//! let mut boundary = system_boundary("Order Service").build();
//! let api = boundary.add_node(container("API").technology("Rust").build());
//! let db = boundary.add_node(
//!     database("Orders DB")
//!         .technology("Postgres")
//!         .description("Stores orders and invoices")
//!         .build(),
//! );
//! diagram.add_cluster(boundary);
//! diagram.connect(&api, &db, relationship("Reads and writes").build());
//!
//! assert!(diagram.render().contains("[Database: Postgres]"));
//! ```
//!
//! # Module Structure
//!
//! - [`label`]: escaping, wrapping and label markup
//! - [`element`]: Person, System, Container, Database
//! - [`boundary`]: SystemBoundary
//! - [`relationship`]: Relationship
//! - [`theme`]: colors, sizes and wrap widths, loadable from TOML

pub mod boundary;
pub mod element;
pub mod label;
pub mod relationship;
pub mod theme;

pub use boundary::{SystemBoundary, system_boundary};
pub use element::{Element, ElementKind, ElementPolicy, container, database, person, system};
pub use relationship::{Relationship, relationship};
pub use theme::{ColorTheme, SizeTheme, TextTheme, Theme};

pub use c4viz_dot::{Attrs, Cluster, Diagram, Direction, Edge, Node, NodeId};
pub use c4viz_error::{Error, ErrorKind, Result};
