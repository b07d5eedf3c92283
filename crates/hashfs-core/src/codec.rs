//! # Hashed Filename Codec
//!
//! Converts between a plain path and its content-hashed form:
//!
//! ```text
//! scripts/app.min.js  +  <64 hex>  →  scripts/app-<64 hex>.min.js
//! LICENSE             +  <64 hex>  →  LICENSE-<64 hex>
//! ```
//!
//! The digest is inserted immediately before the *first* dot of the base
//! name, so multi-part extensions such as `.tar.gz` stay intact. Directory
//! components are carried through verbatim, which makes
//! `parse_name(format_name(p, h)) == (p, h)` hold for every non-empty `p`.
//!
//! Suffix detection is a fixed-length check: a dash followed by exactly
//! [`DIGEST_HEX_LEN`] lowercase hex characters at the tail of the stem.

/// Length of a hex-encoded SHA-256 digest.
pub const DIGEST_HEX_LEN: usize = 64;

/// Returns true if `s` is exactly [`DIGEST_HEX_LEN`] lowercase hex characters.
pub fn is_digest_hex(s: &str) -> bool {
    s.len() == DIGEST_HEX_LEN && s.bytes().all(is_lower_hex)
}

fn is_lower_hex(b: u8) -> bool {
    b.is_ascii_digit() || (b'a'..=b'f').contains(&b)
}

/// Split a path into its directory prefix (including the trailing `/`) and
/// base name.
fn split_dir(path: &str) -> (&str, &str) {
    match path.rfind('/') {
        Some(i) => path.split_at(i + 1),
        None => ("", path),
    }
}

/// Split a base name at its first `.` into stem and extension.
fn split_ext(base: &str) -> (&str, &str) {
    match base.find('.') {
        Some(i) => base.split_at(i),
        None => (base, ""),
    }
}

/// Build the hashed name for `path` by inserting `-digest_hex` before the
/// first extension of its base name, or appending it when there is none.
///
/// Returns an empty string for an empty path and `path` unchanged for an
/// empty digest.
pub fn format_name(path: &str, digest_hex: &str) -> String {
    if path.is_empty() {
        return String::new();
    }
    if digest_hex.is_empty() {
        return path.to_string();
    }

    let (dir, base) = split_dir(path);
    let (stem, ext) = split_ext(base);
    format!("{dir}{stem}-{digest_hex}{ext}")
}

/// Split a hashed filename into its plain path and embedded digest.
///
/// When no digest suffix is present the original filename is returned
/// unchanged with an empty digest. Empty input yields two empty strings.
pub fn parse_name(filename: &str) -> (String, String) {
    if filename.is_empty() {
        return (String::new(), String::new());
    }

    let (dir, base) = split_dir(filename);
    let (stem, ext) = split_ext(base);

    let bytes = stem.as_bytes();
    let suffix_len = DIGEST_HEX_LEN + 1;
    if bytes.len() < suffix_len || bytes[bytes.len() - suffix_len] != b'-' {
        return (filename.to_string(), String::new());
    }

    // The byte at `split` is an ASCII dash, so both slices fall on char
    // boundaries.
    let split = bytes.len() - suffix_len;
    let digest = &stem[split + 1..];
    if !is_digest_hex(digest) {
        return (filename.to_string(), String::new());
    }

    (format!("{dir}{}{ext}", &stem[..split]), digest.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH: &str = "b633a587c652d02386c4f16f8c6f6aab7352d97f16367c3c40576214372dd628";

    #[test]
    fn format_inserts_before_extension() {
        assert_eq!(format_name("baz.html", HASH), format!("baz-{HASH}.html"));
    }

    #[test]
    fn format_keeps_multi_part_extension() {
        assert_eq!(
            format_name("dist/x.tar.gz", HASH),
            format!("dist/x-{HASH}.tar.gz")
        );
    }

    #[test]
    fn format_appends_without_extension() {
        assert_eq!(format_name("a/b/LICENSE", HASH), format!("a/b/LICENSE-{HASH}"));
    }

    #[test]
    fn format_only_splits_base_name() {
        // Dots in directory names are not extensions.
        assert_eq!(
            format_name("v1.2/readme", HASH),
            format!("v1.2/readme-{HASH}")
        );
    }

    #[test]
    fn format_empty_inputs() {
        assert_eq!(format_name("", HASH), "");
        assert_eq!(format_name("baz.html", ""), "baz.html");
        assert_eq!(format_name("", ""), "");
    }

    #[test]
    fn parse_extracts_digest() {
        let (base, hash) = parse_name(&format!("css/site-{HASH}.min.css"));
        assert_eq!(base, "css/site.min.css");
        assert_eq!(hash, HASH);
    }

    #[test]
    fn parse_without_extension() {
        let (base, hash) = parse_name(&format!("LICENSE-{HASH}"));
        assert_eq!(base, "LICENSE");
        assert_eq!(hash, HASH);
    }

    #[test]
    fn parse_plain_name_is_unchanged() {
        assert_eq!(
            parse_name("js/app.js"),
            ("js/app.js".to_string(), String::new())
        );
    }

    #[test]
    fn parse_empty_input() {
        assert_eq!(parse_name(""), (String::new(), String::new()));
    }

    #[test]
    fn parse_short_digest_is_not_a_hash() {
        let name = format!("baz-{}.html", &HASH[..63]);
        assert_eq!(parse_name(&name), (name.clone(), String::new()));
        assert_eq!(
            parse_name("baz-deadbeef.html"),
            ("baz-deadbeef.html".to_string(), String::new())
        );
    }

    #[test]
    fn parse_long_hex_run_is_not_a_hash() {
        // 65 hex chars after the dash: the 64-char tail is not dash-prefixed.
        let name = format!("baz-a{HASH}.html");
        assert_eq!(parse_name(&name), (name.clone(), String::new()));
    }

    #[test]
    fn parse_rejects_uppercase_digest() {
        let name = format!("baz-{}.html", HASH.to_uppercase());
        assert_eq!(parse_name(&name), (name.clone(), String::new()));
    }

    #[test]
    fn parse_ignores_digest_not_at_stem_tail() {
        let name = format!("baz-{HASH}x.html");
        assert_eq!(parse_name(&name), (name.clone(), String::new()));
    }

    #[test]
    fn parse_handles_non_ascii_stems() {
        let (base, hash) = parse_name(&format!("ünïcødé-{HASH}.txt"));
        assert_eq!(base, "ünïcødé.txt");
        assert_eq!(hash, HASH);
        assert_eq!(
            parse_name("ünïcødé.txt"),
            ("ünïcødé.txt".to_string(), String::new())
        );
    }

    #[test]
    fn digest_hex_check() {
        assert!(is_digest_hex(HASH));
        assert!(!is_digest_hex(&HASH[..63]));
        assert!(!is_digest_hex(&HASH.to_uppercase()));
        assert!(!is_digest_hex(&format!("{}g", &HASH[..63])));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Formatting then parsing recovers the original path and digest.
        #[test]
        fn parse_inverts_format(
            path in "[a-zA-Z0-9_./-]{1,40}",
            digest in "[0-9a-f]{64}",
        ) {
            let hashed = format_name(&path, &digest);
            prop_assert_eq!(parse_name(&hashed), (path, digest));
        }

        /// Names without an embedded digest round-trip through parse unchanged.
        #[test]
        fn parse_without_digest_is_identity(name in "[a-zA-Z0-9_./]{1,40}") {
            prop_assert_eq!(parse_name(&name), (name.clone(), String::new()));
        }

        /// Parsing never panics on arbitrary input.
        #[test]
        fn parse_is_total(name in "\\PC{0,120}") {
            let (base, digest) = parse_name(&name);
            prop_assert!(digest.is_empty() || is_digest_hex(&digest));
            if digest.is_empty() {
                prop_assert_eq!(base, name);
            }
        }
    }
}
