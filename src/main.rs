use anyhow::Context;
use climate_sense::appstate::AppState;
use climate_sense::config::Config;
use climate_sense::device::DeviceState;
use climate_sense::http;
use tracing::*;
use tracing_subscriber::EnvFilter;

/// Application & Tokio executor entrypoint
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("unable to load configuration")?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default tracing subscriber failed")?;

    // Initialize application state, a single device shared by every request
    let state = AppState::new(DeviceState::default());
    info!("Simulated device initialised: {:?}", state.device.snapshot());

    let app = http::router(state);

    // Start serving webrequests
    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("unable to bind {bind_addr}"))?;
    info!("Listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("http server failed")?;

    info!("Shut down cleanly");
    Ok(())
}

/// Resolves once the process receives ctrl-c
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Unable to listen for shutdown signal: {}", err);
        // Never resolve, keep serving
        std::future::pending::<()>().await;
    }
    warn!("Shutdown signal received, draining connections");
}
