//! # Hashed-Name Cache
//!
//! [`HashFs`] wraps a [`Store`] and memoizes two lookups:
//!
//! - *forward*: plain path → hashed path
//! - *reverse*: hashed path → (plain path, digest hex)
//!
//! Both maps sit behind a single `parking_lot::RwLock`. Entries are created
//! lazily the first time a plain or hashed name is requested and are never
//! evicted: published content is assumed immutable for the lifetime of the
//! cache. The lock is never held across store I/O.
//!
//! ## Invariant
//!
//! If forward maps `P → H` then reverse maps `H → (P, d)`, where `d` is the
//! SHA-256 of `P`'s content when the entry was created. Both entries are
//! written under one write-lock acquisition.
//!
//! Two requests that miss on the same path concurrently both read and hash
//! it; the values they write are identical, so the second write is a no-op
//! in effect.

use std::collections::HashMap;
use std::sync::Arc;

use hashfs_core::{format_name, parse_name, sha256_hex, StoreError};
use parking_lot::RwLock;

use crate::store::{Store, StoreFile};

#[derive(Debug, Default)]
struct Lookup {
    forward: HashMap<String, String>,
    reverse: HashMap<String, (String, String)>,
}

/// A store wrapper that addresses files by content-hashed names.
///
/// Cloning is cheap and shares both the store and the memoized lookups.
pub struct HashFs<S> {
    store: Arc<S>,
    lookup: Arc<RwLock<Lookup>>,
}

impl<S> Clone for HashFs<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            lookup: Arc::clone(&self.lookup),
        }
    }
}

impl<S> std::fmt::Debug for HashFs<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashFs")
            .field("entries", &self.lookup.read().forward.len())
            .finish()
    }
}

/// A file opened through [`HashFs::resolve`].
pub struct Resolved {
    /// The open handle.
    pub file: Box<dyn StoreFile>,
    /// The store path that was actually opened.
    pub path: String,
    /// The verified digest, present only when the requested name carried a
    /// digest matching the current content of its plain path.
    pub digest: Option<String>,
}

impl Resolved {
    /// Whether the requested name was a verified hashed name.
    pub fn is_verified(&self) -> bool {
        self.digest.is_some()
    }
}

impl std::fmt::Debug for Resolved {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolved")
            .field("path", &self.path)
            .field("digest", &self.digest)
            .finish_non_exhaustive()
    }
}

impl<S: Store> HashFs<S> {
    /// Wrap `store` with an empty cache.
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
            lookup: Arc::new(RwLock::new(Lookup::default())),
        }
    }

    /// The wrapped store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Number of memoized plain paths.
    pub fn len(&self) -> usize {
        self.lookup.read().forward.len()
    }

    /// Whether nothing has been memoized yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the hashed name for `name`.
    ///
    /// If `name` cannot be read from the store it has no hashed name and is
    /// returned unchanged.
    pub fn hash_name(&self, name: &str) -> String {
        if let Some(hashed) = self.lookup.read().forward.get(name) {
            return hashed.clone();
        }

        let data = match self.store.read_all(name) {
            Ok(data) => data,
            Err(e) => {
                tracing::debug!(path = name, error = %e, "no hash name: read failed");
                return name.to_string();
            }
        };

        let digest = sha256_hex(&data);
        let hashed = format_name(name, &digest);

        {
            let mut lookup = self.lookup.write();
            lookup.forward.insert(name.to_string(), hashed.clone());
            lookup
                .reverse
                .insert(hashed.clone(), (name.to_string(), digest));
        }
        metrics::counter!("hashfs_cache_fills_total").increment(1);
        tracing::debug!(path = name, hashed = %hashed, "cached hash name");

        hashed
    }

    /// Split `filename` into plain path and digest, answering previously
    /// issued hashed names from the reverse map.
    pub fn parse_name(&self, filename: &str) -> (String, String) {
        if let Some((base, digest)) = self.lookup.read().reverse.get(filename) {
            return (base.clone(), digest.clone());
        }
        parse_name(filename)
    }

    /// Open `requested`, which may be a plain or a hashed name.
    ///
    /// A hashed name is verified when its digest matches the current content
    /// of its plain path; the plain path is then opened. A hashed name whose
    /// digest does not match is opened literally and unverified, which
    /// normally fails with [`StoreError::NotFound`]. Store errors are
    /// returned unchanged.
    pub fn resolve(&self, requested: &str) -> Result<Resolved, StoreError> {
        let known = self.lookup.read().reverse.get(requested).cloned();

        let (path, digest) = match known {
            Some((base, digest)) => (base, Some(digest)),
            None => {
                let (base, digest) = parse_name(requested);
                if !digest.is_empty() && self.hash_name(&base) == requested {
                    (base, Some(digest))
                } else {
                    if !digest.is_empty() {
                        tracing::debug!(requested, "hashed name does not match content");
                    }
                    (requested.to_string(), None)
                }
            }
        };

        let file = self.store.open(&path)?;
        Ok(Resolved { file, path, digest })
    }
}

impl<S: Store> Store for HashFs<S> {
    fn open(&self, path: &str) -> Result<Box<dyn StoreFile>, StoreError> {
        self.resolve(path).map(|r| r.file)
    }
}
