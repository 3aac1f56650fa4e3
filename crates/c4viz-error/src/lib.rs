//! # c4viz-error
//!
//! The error type shared by the c4viz crates.
//!
//! Building nodes, edges and clusters never fails. Errors only come from the
//! edges of the system: reading a theme file, decoding or encoding TOML, and
//! writing rendered DOT to disk.
//!
//! ```rust
//! use c4viz_error::{Error, ErrorKind};
//!
//! fn load() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::ConfigInvalid, "unknown color section")
//!         .with_operation("theme::from_path")
//!         .with_context("path", "theme.toml"))
//! }
//!
//! assert_eq!(load().unwrap_err().kind(), ErrorKind::ConfigInvalid);
//! ```
//!
//! External errors are attached with `set_source(err)`; callers further up only
//! append context instead of wrapping again.

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using the c4viz [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
