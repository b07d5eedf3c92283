//! # hashfs-store — Read-Only Stores and the Hashed-Name Cache
//!
//! The [`Store`] trait is the seam between hashfs and whatever file tree
//! holds the assets. Two backends ship with the crate:
//!
//! - [`DirStore`]: a directory on the local filesystem.
//! - [`MemStore`]: an in-memory map, handy for embedded assets and tests.
//!
//! [`HashFs`] wraps any store and memoizes the mapping between plain paths
//! and content-hashed paths. It implements [`Store`] itself, so a hashed
//! name can be opened exactly like a plain one.

pub mod cache;
pub mod dir;
pub mod memory;
pub mod store;

pub use cache::{HashFs, Resolved};
pub use dir::DirStore;
pub use memory::MemStore;
pub use store::{Metadata, Store, StoreFile};

pub use hashfs_core::StoreError;
