//! Writing command output to a file or stdout.

use std::path::Path;

use c4viz::{Error, Result};
use tracing::info;

/// Write `text` to `path`, or print it when no path is given.
pub fn emit(text: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, text).map_err(|err| {
                Error::io_at(path.display().to_string(), err).with_operation("output::emit")
            })?;
            info!(path = %path.display(), bytes = text.len(), "output written");
        }
        None => print!("{text}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn writes_to_file() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("node.dot");
        emit("digraph {}\n", Some(&path)).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "digraph {}\n");
    }

    #[test]
    fn missing_parent_is_an_error() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("a").join("node.dot");
        let err = emit("x", Some(&path)).unwrap_err();
        assert_eq!(err.operation(), "output::emit");
    }
}
