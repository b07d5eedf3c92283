//! # Manifest Subcommand
//!
//! Walks an asset root and emits a JSON object mapping every file's plain
//! path to its hashed name. Keys are sorted, so the output is byte-stable
//! for unchanged content and can be diffed or committed.
//!
//! Hashed names come from the same [`HashFs`] the server uses, so the
//! manifest and the server always agree.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;

use hashfs_store::{DirStore, HashFs};

/// Arguments for `hashfs manifest`.
#[derive(Args, Debug)]
pub struct ManifestArgs {
    /// Asset root directory.
    #[arg(value_name = "ROOT")]
    pub root: PathBuf,

    /// Write the manifest to a file instead of stdout.
    #[arg(long, short)]
    pub out: Option<PathBuf>,

    /// Include dotfiles and files inside dot-directories.
    #[arg(long)]
    pub hidden: bool,
}

/// Build the plain → hashed manifest for every file under `root`.
pub fn build_manifest(root: &Path, hidden: bool) -> Result<BTreeMap<String, String>> {
    if !root.is_dir() {
        bail!("asset root is not a directory: {}", root.display());
    }

    let mut files = Vec::new();
    collect_files(root, "", hidden, &mut files)?;
    tracing::debug!(count = files.len(), root = %root.display(), "collected asset files");

    let fs = HashFs::new(DirStore::new(root));
    let mut manifest = BTreeMap::new();
    for path in files {
        let hashed = fs.hash_name(&path);
        if hashed == path {
            bail!("failed to read {path} under {}", root.display());
        }
        manifest.insert(path, hashed);
    }
    Ok(manifest)
}

/// Recursively collect store-relative, slash-separated file paths.
fn collect_files(dir: &Path, prefix: &str, hidden: bool, out: &mut Vec<String>) -> Result<()> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to list directory: {}", dir.display()))?;

    for entry in entries {
        let entry = entry.with_context(|| format!("failed to list directory: {}", dir.display()))?;
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            tracing::warn!(path = %entry.path().display(), "skipping non UTF-8 file name");
            continue;
        };
        if !hidden && name.starts_with('.') {
            continue;
        }

        let rel = if prefix.is_empty() {
            name
        } else {
            format!("{prefix}/{name}")
        };
        let file_type = entry
            .file_type()
            .with_context(|| format!("failed to stat {}", entry.path().display()))?;

        if file_type.is_dir() {
            collect_files(&entry.path(), &rel, hidden, out)?;
        } else if entry.path().is_file() {
            out.push(rel);
        }
    }
    Ok(())
}

/// Execute the manifest subcommand.
pub fn run_manifest(args: &ManifestArgs, out: &mut impl Write) -> Result<()> {
    let manifest = build_manifest(&args.root, args.hidden)?;
    let json = serde_json::to_string_pretty(&manifest).context("failed to encode manifest")?;

    match &args.out {
        Some(path) => {
            std::fs::write(path, format!("{json}\n"))
                .with_context(|| format!("failed to write manifest: {}", path.display()))?;
            tracing::info!(entries = manifest.len(), path = %path.display(), "wrote manifest");
        }
        None => writeln!(out, "{json}")?,
    }
    Ok(())
}
