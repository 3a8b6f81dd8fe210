use hello_service::config::HelloConfig;
use hello_service::models::SERVICE_NAME;
use hello_service::services::init_metrics;
use hello_service::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = HelloConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        SERVICE_NAME,
        &config.common.log_level,
        config.common.otlp_endpoint.as_deref(),
    )?;

    if let Some(metrics_port) = config.common.metrics_port {
        init_metrics(&config.common.host, metrics_port)?;
    }

    let app = Application::build(config).await?;
    app.run_until_stopped().await?;

    tracing::info!("Hello service stopped");
    Ok(())
}
