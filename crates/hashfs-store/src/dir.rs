//! # Directory Store
//!
//! A [`Store`] backed by a directory on the local filesystem. Paths are
//! validated before they reach the filesystem: they must be relative,
//! slash-separated, and free of empty, `.` or `..` elements (the lone
//! root name `"."` excepted), so no name can escape the root. NUL is always
//! rejected; backslash and `:` only on Windows, where they are separators.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use hashfs_core::{StoreError, ROOT};

use crate::store::{Metadata, Store, StoreFile};

/// A read-only store rooted at a filesystem directory.
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    /// Create a store rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the root directory of this store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn full_path(&self, path: &str) -> Result<PathBuf, StoreError> {
        if !is_valid_path(path) {
            return Err(StoreError::InvalidPath(path.to_string()));
        }
        if path == ROOT {
            return Ok(self.root.clone());
        }
        Ok(path.split('/').fold(self.root.clone(), |acc, seg| acc.join(seg)))
    }
}

/// Whether `path` is an acceptable store-relative name.
pub fn is_valid_path(path: &str) -> bool {
    if path == ROOT {
        return true;
    }
    if path.contains('\0') {
        return false;
    }
    if cfg!(windows) && path.contains(|c: char| c == '\\' || c == ':') {
        return false;
    }
    path.split('/')
        .all(|seg| !seg.is_empty() && seg != "." && seg != "..")
}

fn to_metadata(meta: &std::fs::Metadata) -> Metadata {
    let modified = meta.modified().ok().map(DateTime::<Utc>::from);
    if meta.is_dir() {
        Metadata::dir(modified)
    } else {
        Metadata::file(meta.len(), modified)
    }
}

impl Store for DirStore {
    fn open(&self, path: &str) -> Result<Box<dyn StoreFile>, StoreError> {
        let full = self.full_path(path)?;
        let meta = std::fs::metadata(&full).map_err(|e| StoreError::from_io(path, e))?;
        if meta.is_dir() {
            return Ok(Box::new(DirHandle {
                path: path.to_string(),
                meta: to_metadata(&meta),
            }));
        }
        let file = File::open(&full).map_err(|e| StoreError::from_io(path, e))?;
        Ok(Box::new(DirFile {
            path: path.to_string(),
            file,
        }))
    }
}

/// Open regular file.
struct DirFile {
    path: String,
    file: File,
}

impl Read for DirFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}

impl StoreFile for DirFile {
    fn stat(&self) -> Result<Metadata, StoreError> {
        self.file
            .metadata()
            .map(|m| to_metadata(&m))
            .map_err(|e| StoreError::from_io(&self.path, e))
    }
}

/// Open directory. Stat-only; reads fail.
struct DirHandle {
    path: String,
    meta: Metadata,
}

impl Read for DirHandle {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other(format!("{} is a directory", self.path)))
    }
}

impl StoreFile for DirHandle {
    fn stat(&self) -> Result<Metadata, StoreError> {
        Ok(self.meta.clone())
    }
}
