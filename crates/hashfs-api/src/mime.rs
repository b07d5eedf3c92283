//! Extension → MIME type lookup for `Content-Type`.

/// Content type for `path`, judged by its last extension.
///
/// Returns `None` for unknown or missing extensions, in which case no
/// `Content-Type` header is sent.
pub fn content_type(path: &str) -> Option<&'static str> {
    let base = path.rsplit('/').next().unwrap_or(path);
    let (_, ext) = base.rsplit_once('.')?;
    let ext = ext.to_ascii_lowercase();
    let mime = match ext.as_str() {
        // Text
        "html" | "htm" => "text/html; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "js" | "mjs" => "text/javascript; charset=utf-8",
        "json" | "map" => "application/json",
        "txt" => "text/plain; charset=utf-8",
        "xml" => "text/xml; charset=utf-8",
        "csv" => "text/csv; charset=utf-8",
        "md" => "text/markdown; charset=utf-8",
        "webmanifest" => "application/manifest+json",
        "wasm" => "application/wasm",
        "pdf" => "application/pdf",

        // Images
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "avif" => "image/avif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",

        // Fonts
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "otf" => "font/otf",

        // Media
        "mp3" => "audio/mpeg",
        "ogg" => "audio/ogg",
        "wav" => "audio/wav",
        "mp4" => "video/mp4",
        "webm" => "video/webm",

        // Archives
        "gz" => "application/gzip",
        "zip" => "application/zip",
        "tar" => "application/x-tar",
        _ => return None,
    };
    Some(mime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions() {
        assert_eq!(content_type("baz.html"), Some("text/html; charset=utf-8"));
        assert_eq!(content_type("css/site.CSS"), Some("text/css; charset=utf-8"));
        assert_eq!(content_type("img/logo.svg"), Some("image/svg+xml"));
    }

    #[test]
    fn uses_last_extension() {
        assert_eq!(content_type("dist/x.tar.gz"), Some("application/gzip"));
        assert_eq!(
            content_type("js/app-0123.min.js"),
            Some("text/javascript; charset=utf-8")
        );
    }

    #[test]
    fn unknown_or_missing_extension() {
        assert_eq!(content_type("LICENSE"), None);
        assert_eq!(content_type("data.unknownext"), None);
        assert_eq!(content_type("v1.2/README"), None);
    }
}
