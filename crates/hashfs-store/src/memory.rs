//! # In-Memory Store
//!
//! A [`Store`] over a map of path → bytes. Directories are implied: a name
//! is a directory if it is the root `"."` or some file lives beneath it.

use std::collections::BTreeMap;
use std::io::{self, Cursor, Read};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use hashfs_core::{StoreError, ROOT};

use crate::store::{Metadata, Store, StoreFile};

/// A read-only in-memory file tree.
#[derive(Debug, Clone, Default)]
pub struct MemStore {
    files: BTreeMap<String, Arc<[u8]>>,
    modified: Option<DateTime<Utc>>,
}

impl MemStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, replacing any previous content at `path`.
    pub fn with_file(mut self, path: impl Into<String>, content: impl AsRef<[u8]>) -> Self {
        self.files.insert(path.into(), Arc::from(content.as_ref()));
        self
    }

    /// Report `modified` as the modification time of every entry.
    pub fn with_modified(mut self, modified: DateTime<Utc>) -> Self {
        self.modified = Some(modified);
        self
    }

    /// Number of files in the store.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the store holds no files.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    fn is_dir(&self, path: &str) -> bool {
        if path == ROOT {
            return true;
        }
        let prefix = format!("{path}/");
        self.files
            .range(prefix.clone()..)
            .next()
            .is_some_and(|(k, _)| k.starts_with(&prefix))
    }
}

impl Store for MemStore {
    fn open(&self, path: &str) -> Result<Box<dyn StoreFile>, StoreError> {
        if let Some(data) = self.files.get(path) {
            return Ok(Box::new(MemFile {
                meta: Metadata::file(data.len() as u64, self.modified),
                data: Cursor::new(Arc::clone(data)),
            }));
        }
        if self.is_dir(path) {
            return Ok(Box::new(MemDir {
                path: path.to_string(),
                meta: Metadata::dir(self.modified),
            }));
        }
        Err(StoreError::NotFound(path.to_string()))
    }

    fn read_all(&self, path: &str) -> Result<Vec<u8>, StoreError> {
        match self.files.get(path) {
            Some(data) => Ok(data.to_vec()),
            None if self.is_dir(path) => Err(StoreError::IsDirectory(path.to_string())),
            None => Err(StoreError::NotFound(path.to_string())),
        }
    }
}

struct MemFile {
    meta: Metadata,
    data: Cursor<Arc<[u8]>>,
}

impl Read for MemFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.data.read(buf)
    }
}

impl StoreFile for MemFile {
    fn stat(&self) -> Result<Metadata, StoreError> {
        Ok(self.meta.clone())
    }
}

struct MemDir {
    path: String,
    meta: Metadata,
}

impl Read for MemDir {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other(format!("{} is a directory", self.path)))
    }
}

impl StoreFile for MemDir {
    fn stat(&self) -> Result<Metadata, StoreError> {
        Ok(self.meta.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> MemStore {
        MemStore::new()
            .with_file("baz.html", "<html></html>")
            .with_file("js/app.js", "console.log(1)")
            .with_file("js2.txt", "not a child of js")
    }

    #[test]
    fn open_and_read_file() {
        let mut f = store().open("baz.html").unwrap();
        let mut buf = String::new();
        f.read_to_string(&mut buf).unwrap();
        assert_eq!(buf, "<html></html>");
        assert_eq!(f.stat().unwrap().size, 13);
    }

    #[test]
    fn implied_directories() {
        let s = store();
        assert!(s.open("js").unwrap().stat().unwrap().is_dir);
        assert!(s.open(".").unwrap().stat().unwrap().is_dir);
        assert!(s.open("j").err().unwrap().is_not_found());
    }

    #[test]
    fn read_all_on_directory_fails() {
        assert!(matches!(
            store().read_all("js"),
            Err(StoreError::IsDirectory(_))
        ));
    }

    #[test]
    fn missing_path_is_not_found() {
        assert!(store().read_all("missing.css").unwrap_err().is_not_found());
    }

    #[test]
    fn default_read_all_agrees() {
        // Exercise the trait's provided read_all through a wrapper.
        struct Plain(MemStore);
        impl Store for Plain {
            fn open(&self, path: &str) -> Result<Box<dyn StoreFile>, StoreError> {
                self.0.open(path)
            }
        }
        let plain = Plain(store());
        assert_eq!(plain.read_all("js/app.js").unwrap(), b"console.log(1)");
        assert!(matches!(
            plain.read_all("js"),
            Err(StoreError::IsDirectory(_))
        ));
    }
}
