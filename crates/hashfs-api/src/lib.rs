//! # hashfs-api — Content-Hashed Asset Server
//!
//! Serves files from a [`HashFs`] over HTTP. A request for a verified hashed
//! name (`app-<sha256>.js`) is answered with headers that let clients cache
//! the response for a year; a plain name (`app.js`) is served without any
//! caching directive.
//!
//! ## Responses
//!
//! | Outcome                                      | Status | Extra headers           |
//! |----------------------------------------------|--------|-------------------------|
//! | verified hashed name                         | 200    | `Cache-Control`, `ETag` |
//! | plain name                                   | 200    |                         |
//! | mismatched digest, literal name exists       | 200    |                         |
//! | missing, or mismatched digest, no literal    | 404    |                         |
//! | directory                                    | 403    |                         |
//! | stat or read failure                         | 500    |                         |
//!
//! A mismatched digest is never verified: the literal requested name is
//! opened, and if such a file exists it is served like a plain name.
//!
//! Every 200 carries `Content-Length` and, when known, `Content-Type` and
//! `Last-Modified`. HEAD requests get the same headers with no body.
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → MetricsMiddleware → serve_asset
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod mime;
pub mod serve;

use axum::middleware::from_fn;
use axum::routing::get;
use axum::Router;
use hashfs_store::{HashFs, Store};

pub use config::AppConfig;
pub use error::ServeError;

/// Router serving every path from `fs`, without middleware.
///
/// Suitable for nesting under a prefix in a larger application; the nested
/// router sees paths with the prefix already stripped.
pub fn router<S: Store>(fs: HashFs<S>) -> Router {
    Router::new()
        .route("/", get(serve::serve_asset::<S>))
        .route("/{*path}", get(serve::serve_asset::<S>))
        .with_state(fs)
}

/// Assemble the full asset application with tracing and metrics middleware.
pub fn app<S: Store>(fs: HashFs<S>) -> Router {
    router(fs)
        .layer(from_fn(middleware::metrics::metrics_middleware))
        .layer(middleware::tracing_layer::layer())
}
