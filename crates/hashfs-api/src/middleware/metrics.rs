//! # Response Metrics
//!
//! Records per-status response counts and request latency through the
//! `metrics` facade. Without an installed recorder the macros are no-ops;
//! the `hashfs-api` binary installs the Prometheus exporter when
//! `HASHFS_METRICS_PORT` is set.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Counter of responses, labelled by status code and method.
pub const RESPONSES_TOTAL: &str = "hashfs_responses_total";

/// Histogram of request handling time in seconds.
pub const REQUEST_DURATION_SECONDS: &str = "hashfs_request_duration_seconds";

/// Axum middleware recording response status and latency.
pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    let method = req.method().as_str().to_string();
    let start = Instant::now();

    let response = next.run(req).await;

    let status = response.status().as_u16().to_string();
    metrics::counter!(RESPONSES_TOTAL, "method" => method.clone(), "status" => status)
        .increment(1);
    metrics::histogram!(REQUEST_DURATION_SECONDS, "method" => method)
        .record(start.elapsed().as_secs_f64());

    response
}
