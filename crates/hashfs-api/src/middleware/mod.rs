//! # Middleware Stack
//!
//! Tower middleware for the asset server:
//! - [`tracing_layer`]: request/response tracing with `TraceLayer`.
//! - [`metrics`]: response counters and latency via the `metrics` facade.

pub mod metrics;
pub mod tracing_layer;
