//! # hashfs-core — Foundational Types for hashfs
//!
//! This crate defines the pure, stateless pieces of the content-hashed asset
//! pipeline. Every other crate in the workspace depends on `hashfs-core`; it
//! depends on nothing internal.
//!
//! ## Contents
//!
//! - **Naming codec** ([`codec`]): `format_name` embeds a 64-character hex
//!   digest into a filename before its first extension; `parse_name` splits
//!   it back out. Both are total functions; neither touches a store.
//! - **Content digests** ([`digest`]): SHA-256 over raw file bytes, rendered
//!   as lowercase hex.
//! - **Path cleaning** ([`path`]): lexical canonicalization of request paths
//!   into store-relative names, plus `%XX` decoding.
//! - **Errors** ([`error`]): the error vocabulary shared by store
//!   implementations and the HTTP layer.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `hashfs-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod codec;
pub mod digest;
pub mod error;
pub mod path;

// Re-export primary types for ergonomic imports.
pub use codec::{format_name, is_digest_hex, parse_name, DIGEST_HEX_LEN};
pub use digest::{sha256_digest, sha256_hex, sha256_reader, ContentDigest};
pub use error::{CodecError, StoreError};
pub use path::{clean_request_path, percent_decode, ROOT};
