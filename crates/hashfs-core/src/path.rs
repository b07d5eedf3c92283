//! # Request Path Cleaning
//!
//! Turns a URL path into a store-relative name: `/` maps to the root marker
//! [`ROOT`], one leading slash is stripped, and `.`, `..` and repeated
//! separators are collapsed lexically. `..` never climbs above the root.

/// Name of the store root.
pub const ROOT: &str = ".";

/// Decode `%XX` escapes in a URL path.
///
/// Malformed escapes are kept literally; invalid UTF-8 is replaced.
pub fn percent_decode(path: &str) -> String {
    if !path.contains('%') {
        return path.to_string();
    }
    let bytes = path.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_val(bytes[i + 1]), hex_val(bytes[i + 2])) {
                out.push((hi << 4) | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_val(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Canonicalize a request path into a store-relative name.
pub fn clean_request_path(path: &str) -> String {
    if path == "/" {
        return ROOT.to_string();
    }
    let path = path.strip_prefix('/').unwrap_or(path);

    let mut parts: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            s => parts.push(s),
        }
    }

    if parts.is_empty() {
        ROOT.to_string()
    } else {
        parts.join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_maps_to_marker() {
        assert_eq!(clean_request_path("/"), ".");
        assert_eq!(clean_request_path(""), ".");
        assert_eq!(clean_request_path("/./"), ".");
    }

    #[test]
    fn strips_leading_slash() {
        assert_eq!(clean_request_path("/baz.html"), "baz.html");
        assert_eq!(clean_request_path("/css/site.css"), "css/site.css");
    }

    #[test]
    fn collapses_redundant_segments() {
        assert_eq!(clean_request_path("/a//b/./c.js"), "a/b/c.js");
        assert_eq!(clean_request_path("/a/b/../c.js"), "a/c.js");
        assert_eq!(clean_request_path("/dir/"), "dir");
    }

    #[test]
    fn decodes_percent_escapes() {
        assert_eq!(percent_decode("/my%20file.txt"), "/my file.txt");
        assert_eq!(percent_decode("/caf%C3%A9.css"), "/café.css");
        assert_eq!(percent_decode("/100%.txt"), "/100%.txt");
        assert_eq!(percent_decode("/bad%zz"), "/bad%zz");
        assert_eq!(percent_decode("/plain.js"), "/plain.js");
    }

    #[test]
    fn dot_dot_cannot_escape_root() {
        assert_eq!(clean_request_path("/../../etc/passwd"), "etc/passwd");
        assert_eq!(clean_request_path("/.."), ".");
    }
}
