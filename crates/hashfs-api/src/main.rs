//! # hashfs-api — Binary Entry Point
//!
//! Serves a directory over HTTP with content-hashed names.
//! Configured from the environment; see [`hashfs_api::config`].

use hashfs_api::AppConfig;
use hashfs_store::{DirStore, HashFs};
use metrics_exporter_prometheus::PrometheusBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!("Configuration error: {e}");
        e
    })?;

    if !config.root.is_dir() {
        tracing::error!("Asset root {} is not a directory", config.root.display());
        return Err(format!("asset root {} is not a directory", config.root.display()).into());
    }

    if let Some(metrics_port) = config.metrics_port {
        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], metrics_port));
        PrometheusBuilder::new()
            .with_http_listener(addr)
            .install()
            .map_err(|e| {
                tracing::error!("Failed to install Prometheus exporter: {e}");
                e
            })?;
        tracing::info!("Prometheus metrics on {}", addr);
    }

    let fs = HashFs::new(DirStore::new(&config.root));
    let app = hashfs_api::app(fs);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("hashfs serving {} on {}", config.root.display(), addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
