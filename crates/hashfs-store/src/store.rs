//! # Store Traits
//!
//! The capabilities hashfs needs from an underlying file tree: open by path,
//! read a whole file, and stat an open handle. Stores are read-only from
//! hashfs' point of view.

use std::io::Read;

use chrono::{DateTime, Utc};
use hashfs_core::StoreError;

/// File metadata returned by [`StoreFile::stat`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    /// Size in bytes. Zero for directories.
    pub size: u64,
    /// Whether the handle refers to a directory.
    pub is_dir: bool,
    /// Last modification time, when the store tracks one.
    pub modified: Option<DateTime<Utc>>,
}

impl Metadata {
    /// Metadata for a regular file.
    pub fn file(size: u64, modified: Option<DateTime<Utc>>) -> Self {
        Self {
            size,
            is_dir: false,
            modified,
        }
    }

    /// Metadata for a directory.
    pub fn dir(modified: Option<DateTime<Utc>>) -> Self {
        Self {
            size: 0,
            is_dir: true,
            modified,
        }
    }
}

/// An open handle from a [`Store`].
///
/// Reading a directory handle fails; callers are expected to `stat` first.
pub trait StoreFile: Read + Send {
    /// Stat the open handle.
    fn stat(&self) -> Result<Metadata, StoreError>;
}

/// A read-only file tree addressed by slash-separated relative paths.
///
/// The root is named `"."`.
pub trait Store: Send + Sync + 'static {
    /// Open `path` for reading.
    fn open(&self, path: &str) -> Result<Box<dyn StoreFile>, StoreError>;

    /// Read the full content of `path`.
    fn read_all(&self, path: &str) -> Result<Vec<u8>, StoreError> {
        let mut file = self.open(path)?;
        if file.stat()?.is_dir {
            return Err(StoreError::IsDirectory(path.to_string()));
        }
        let mut buf = Vec::new();
        file.read_to_end(&mut buf)
            .map_err(|e| StoreError::from_io(path, e))?;
        Ok(buf)
    }
}
