use std::path::PathBuf;
use std::sync::Arc;

use signup::config::Configuration;
use signup::telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::var("CONFIG_PATH")
        .map(PathBuf::from)
        .unwrap_or_default();
    let config = Configuration::default().path(path).read()?;

    telemetry::init_logging(&config.log_level);

    let telemetry_config = config.telemetry.clone().unwrap_or_default();
    let tracer = match &telemetry_config.otlp {
        Some(endpoint) => Some(telemetry::setup_tracer(endpoint)?),
        None => None,
    };

    let mut state = signup::initialize_state(Arc::clone(&config)).await?;
    if telemetry_config.metrics {
        state.metrics = Some(telemetry::setup_metrics_recorder()?);
    }

    let listener = tokio::net::TcpListener::bind(&config.address).await?;
    tracing::info!(
        name = %config.name,
        version = config.version(),
        address = %config.address,
        "server started"
    );

    axum::serve(listener, signup::app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(provider) = tracer {
        provider.shutdown()?;
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "cannot listen for shutdown signal");
    }
    tracing::info!("shutting down");
}
