//! Prometheus exporter for the request metrics recorded by service-core.

use metrics_exporter_prometheus::PrometheusBuilder;
use service_core::error::AppError;
use std::net::SocketAddr;

/// Install the global recorder and serve `/metrics` on its own listener.
///
/// Must be called from inside the Tokio runtime.
pub fn init_metrics(host: &str, port: u16) -> Result<SocketAddr, AppError> {
    let addr: SocketAddr = format!("{}:{}", host, port).parse().map_err(|e| {
        AppError::ConfigError(anyhow::anyhow!(
            "Invalid metrics address {}:{}: {}",
            host,
            port,
            e
        ))
    })?;

    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| {
            AppError::InternalError(anyhow::anyhow!(
                "Failed to install Prometheus exporter on {}: {}",
                addr,
                e
            ))
        })?;

    tracing::info!("Prometheus exporter listening on {}", addr);
    Ok(addr)
}
