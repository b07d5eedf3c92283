//! # Serve Errors
//!
//! Maps store failures to the plain-text error responses of the asset
//! server. Internal details are logged, never returned to clients.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use hashfs_core::StoreError;
use thiserror::Error;

/// Error produced while serving an asset.
#[derive(Error, Debug)]
pub enum ServeError {
    /// The requested name does not exist (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// The requested name is a directory (403).
    #[error("forbidden: {0} is a directory")]
    Forbidden(String),

    /// Stat, read, or any other store failure (500).
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServeError {
    /// Translate an open failure: missing paths are 404, the rest 500.
    pub fn from_open(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(path) => Self::NotFound(path),
            other => Self::Internal(other.to_string()),
        }
    }

    /// The HTTP status code for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "404 page not found\n",
            Self::Forbidden(_) => "403 Forbidden\n",
            Self::Internal(_) => "500 Internal Server Error\n",
        }
    }
}

impl IntoResponse for ServeError {
    fn into_response(self) -> Response {
        if let Self::Internal(detail) = &self {
            tracing::warn!(error = %detail, "asset request failed");
        }
        (
            self.status(),
            [
                (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
                (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
            ],
            self.body(),
        )
            .into_response()
    }
}
