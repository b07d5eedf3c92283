//! # hashfs-cli — Content-Hashed Asset Names from the Command Line
//!
//! Build-time companion to the asset server: computes the same hashed names
//! the server verifies, so templates and deploy scripts can reference them.
//!
//! ## Subcommands
//!
//! - `name` — hashed name for one or more files under a root
//! - `parse` — split hashed names into plain path and digest
//! - `format` — build a hashed name from a path and digest
//! - `manifest` — JSON map of every file under a root to its hashed name
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the handlers, which write to any
//!   `io::Write` so they can be tested without a process.
//! - Naming logic lives in `hashfs-core` / `hashfs-store`, never here.

pub mod manifest;
pub mod names;

use std::path::{Path, PathBuf};

/// Resolve a path relative to the working directory.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
