//! # Error Types
//!
//! Errors shared by store implementations, the hashed-name cache, and the
//! HTTP layer. All errors use `thiserror` for derive-based `Display` and
//! `Error` implementations.
//!
//! A digest mismatch is deliberately absent: a tampered or stale hashed
//! name is served through the unverified path and normally surfaces as
//! [`StoreError::NotFound`].

use std::io;

use thiserror::Error;

/// Error from an underlying read-only store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The path does not exist in the store.
    #[error("not found: {0}")]
    NotFound(String),

    /// The path is not a valid store-relative name.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// The store refused access to the path.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// A byte read was attempted on a directory.
    #[error("is a directory: {0}")]
    IsDirectory(String),

    /// Any other I/O failure.
    #[error("io error on {path}: {source}")]
    Io {
        /// Store-relative path being accessed.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    /// Classify an I/O error raised while accessing `path`.
    pub fn from_io(path: &str, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path.to_string()),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_string()),
            _ => Self::Io {
                path: path.to_string(),
                source: err,
            },
        }
    }

    /// Whether this error means the path does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Error decoding hashed-name components.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The string is not a 64-character lowercase hex digest.
    #[error("invalid digest: expected 64 lowercase hex characters, got {0:?}")]
    InvalidDigest(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_io_classifies_not_found() {
        let err = StoreError::from_io("a.js", io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(err.is_not_found());
        assert!(format!("{err}").contains("a.js"));
    }

    #[test]
    fn from_io_classifies_permission_denied() {
        let err = StoreError::from_io(
            "secret.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "nope"),
        );
        assert!(matches!(err, StoreError::PermissionDenied(_)));
        assert!(!err.is_not_found());
    }

    #[test]
    fn from_io_keeps_other_errors() {
        let err = StoreError::from_io("b.css", io::Error::other("disk on fire"));
        let msg = format!("{err}");
        assert!(msg.contains("b.css"));
        assert!(msg.contains("disk on fire"));
    }

    #[test]
    fn invalid_digest_display() {
        let err = CodecError::InvalidDigest("xyz".to_string());
        assert!(format!("{err}").contains("64 lowercase hex"));
    }
}
