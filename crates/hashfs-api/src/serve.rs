//! # Asset Handler
//!
//! One linear pass per request:
//!
//! 1. Decode and clean the URL path into a store name.
//! 2. Resolve it through [`HashFs`] (404 if missing, 500 otherwise).
//! 3. Stat the handle (500 on failure, 403 for directories).
//! 4. Read the body unless the request is HEAD.
//! 5. Emit headers; add the immutable caching directive and `ETag` only
//!    for verified hashed names.
//!
//! Store I/O is synchronous and runs on the blocking pool. The body is read
//! completely before the response is built, so a failure never produces a
//! truncated body.

use std::io::Read;

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, HeaderValue, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use hashfs_core::{clean_request_path, percent_decode, StoreError};
use hashfs_store::{HashFs, Metadata, Store};

use crate::error::ServeError;
use crate::mime;

/// `Cache-Control` value for verified hashed names.
pub const IMMUTABLE_CACHE_CONTROL: &str = "public, max-age=31536000, immutable";

/// A loaded asset, ready to become a response.
#[derive(Debug)]
pub struct Asset {
    /// Store path that was opened.
    pub path: String,
    /// Metadata of the opened file.
    pub meta: Metadata,
    /// Verified digest, if the request named a verified hashed path.
    pub digest: Option<String>,
    /// File content; `None` for HEAD requests.
    pub body: Option<Vec<u8>>,
}

/// GET/HEAD handler for every path.
pub async fn serve_asset<S: Store>(
    State(fs): State<HashFs<S>>,
    method: Method,
    uri: Uri,
) -> Response {
    let name = clean_request_path(&percent_decode(uri.path()));
    let with_body = method != Method::HEAD;

    match tokio::task::spawn_blocking(move || load_asset(&fs, &name, with_body)).await {
        Ok(Ok(asset)) => asset.into_response(),
        Ok(Err(err)) => err.into_response(),
        Err(join) => ServeError::Internal(format!("asset task failed: {join}")).into_response(),
    }
}

/// Resolve, stat, and (optionally) read the asset named `name`.
pub fn load_asset<S: Store>(
    fs: &HashFs<S>,
    name: &str,
    with_body: bool,
) -> Result<Asset, ServeError> {
    let resolved = fs.resolve(name).map_err(ServeError::from_open)?;
    let path = resolved.path;
    let mut file = resolved.file;

    let meta = file
        .stat()
        .map_err(|e| ServeError::Internal(format!("stat {path}: {e}")))?;
    if meta.is_dir {
        return Err(ServeError::Forbidden(path));
    }

    let body = if with_body {
        let mut buf = Vec::new();
        file.read_to_end(&mut buf)
            .map_err(|e| ServeError::Internal(StoreError::from_io(&path, e).to_string()))?;
        if buf.len() as u64 != meta.size {
            return Err(ServeError::Internal(format!(
                "{path}: read {} bytes, stat reported {}",
                buf.len(),
                meta.size
            )));
        }
        Some(buf)
    } else {
        None
    };

    Ok(Asset {
        path,
        meta,
        digest: resolved.digest,
        body,
    })
}

impl IntoResponse for Asset {
    fn into_response(self) -> Response {
        let mut response = match self.body {
            Some(bytes) => Body::from(bytes).into_response(),
            None => Body::empty().into_response(),
        };
        *response.status_mut() = StatusCode::OK;

        let headers = response.headers_mut();
        if let Some(mime) = mime::content_type(&self.path) {
            headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(mime));
        }
        if let Some(digest) = &self.digest {
            headers.insert(
                header::CACHE_CONTROL,
                HeaderValue::from_static(IMMUTABLE_CACHE_CONTROL),
            );
            if let Ok(etag) = HeaderValue::from_str(&format!("\"{digest}\"")) {
                headers.insert(header::ETAG, etag);
            }
        }
        if let Some(modified) = self.meta.modified {
            let stamp = modified.format("%a, %d %b %Y %H:%M:%S GMT").to_string();
            if let Ok(value) = HeaderValue::from_str(&stamp) {
                headers.insert(header::LAST_MODIFIED, value);
            }
        }
        headers.insert(header::CONTENT_LENGTH, HeaderValue::from(self.meta.size));

        response
    }
}
