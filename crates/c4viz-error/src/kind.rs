//! Error kinds for c4viz operations

use strum_macros::Display;

/// The kind of error that occurred.
///
/// Callers match on this to tell a bad theme file apart from a failed write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // Configuration errors
    // =========================================================================
    /// Theme or option values are present but not usable
    ConfigInvalid,

    /// Failed to decode a theme document
    DeserializationFailed,

    /// Failed to encode a theme document
    SerializationFailed,

    // =========================================================================
    // File/IO errors
    // =========================================================================
    /// File not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,
}
