//! # Name Subcommands
//!
//! `hashfs name`, `hashfs parse`, and `hashfs format`.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use serde::Serialize;

use hashfs_core::{format_name, is_digest_hex, parse_name};
use hashfs_store::{DirStore, HashFs};

/// Arguments for `hashfs name`.
#[derive(Args, Debug)]
pub struct NameArgs {
    /// Asset root directory.
    #[arg(value_name = "ROOT")]
    pub root: PathBuf,

    /// Store-relative paths to hash (e.g. `css/site.css`).
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Fail if any path cannot be read instead of echoing it unchanged.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for `hashfs parse`.
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Hashed filenames to split.
    #[arg(value_name = "NAME", required = true)]
    pub names: Vec<String>,

    /// Emit one JSON object per line.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `hashfs format`.
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Plain path.
    #[arg(value_name = "PATH")]
    pub path: String,

    /// 64-character lowercase hex digest.
    #[arg(value_name = "DIGEST")]
    pub digest: String,
}

#[derive(Debug, Serialize)]
struct Parsed<'a> {
    name: &'a str,
    path: String,
    digest: Option<String>,
}

/// Print the hashed name of each path, one per line.
pub fn run_name(args: &NameArgs, out: &mut impl Write) -> Result<()> {
    if !args.root.is_dir() {
        bail!("asset root is not a directory: {}", args.root.display());
    }
    let fs = HashFs::new(DirStore::new(&args.root));

    for path in &args.paths {
        let hashed = fs.hash_name(path);
        if args.strict && hashed == *path {
            bail!("cannot hash {path}: not a readable file under {}", args.root.display());
        }
        writeln!(out, "{hashed}")?;
    }
    Ok(())
}

/// Print the plain path and digest of each name.
///
/// Plain output is `<path>\t<digest>`, with `-` when no digest is present.
pub fn run_parse(args: &ParseArgs, out: &mut impl Write) -> Result<()> {
    for name in &args.names {
        let (path, digest) = parse_name(name);
        if args.json {
            let parsed = Parsed {
                name,
                path,
                digest: (!digest.is_empty()).then_some(digest),
            };
            let line = serde_json::to_string(&parsed).context("failed to encode JSON")?;
            writeln!(out, "{line}")?;
        } else {
            let digest = if digest.is_empty() { "-" } else { digest.as_str() };
            writeln!(out, "{path}\t{digest}")?;
        }
    }
    Ok(())
}

/// Print the hashed name built from a path and digest.
pub fn run_format(args: &FormatArgs, out: &mut impl Write) -> Result<()> {
    if !is_digest_hex(&args.digest) {
        bail!(
            "invalid digest {:?}: expected 64 lowercase hex characters",
            args.digest
        );
    }
    writeln!(out, "{}", format_name(&args.path, &args.digest))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH: &str = "b633a587c652d02386c4f16f8c6f6aab7352d97f16367c3c40576214372dd628";

    fn output(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn name_prints_hashed_paths() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("baz.html"), "<html></html>").unwrap();
        let args = NameArgs {
            root: dir.path().to_path_buf(),
            paths: vec!["baz.html".into(), "missing.js".into()],
            strict: false,
        };
        let out = output(|b| run_name(&args, b));
        assert_eq!(out, format!("baz-{HASH}.html\nmissing.js\n"));
    }

    #[test]
    fn name_strict_rejects_missing() {
        let dir = tempfile::tempdir().unwrap();
        let args = NameArgs {
            root: dir.path().to_path_buf(),
            paths: vec!["missing.js".into()],
            strict: true,
        };
        assert!(run_name(&args, &mut Vec::new()).is_err());
    }

    #[test]
    fn parse_plain_output() {
        let args = ParseArgs {
            names: vec![format!("baz-{HASH}.html"), "app.js".into()],
            json: false,
        };
        let out = output(|b| run_parse(&args, b));
        assert_eq!(out, format!("baz.html\t{HASH}\napp.js\t-\n"));
    }

    #[test]
    fn parse_json_output() {
        let args = ParseArgs {
            names: vec!["app.js".into()],
            json: true,
        };
        let out = output(|b| run_parse(&args, b));
        let v: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(v["path"], "app.js");
        assert!(v["digest"].is_null());
    }

    #[test]
    fn format_builds_name() {
        let args = FormatArgs {
            path: "js/app.min.js".into(),
            digest: HASH.into(),
        };
        assert_eq!(output(|b| run_format(&args, b)), format!("js/app-{HASH}.min.js\n"));
    }

    #[test]
    fn format_rejects_bad_digest() {
        let args = FormatArgs {
            path: "a.js".into(),
            digest: "abc".into(),
        };
        assert!(run_format(&args, &mut Vec::new()).is_err());
    }
}
