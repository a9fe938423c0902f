//! Launchclock - A state-managed HTTP server that counts down to a launch instant
//!
//! This is the main entry point for the launchclock application.

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::info;

use launchclock::{
    api::create_router,
    config::Config,
    countdown::CountdownController,
    state::{AppState, CountdownSnapshot},
    tasks::spawn_countdown_ticker,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "launchclock={},tower_http=info",
            config.log_level()
        ))
        .init();

    let target = config.target_time()?;

    info!("Starting launchclock server v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: host={}, port={}, target={}",
        config.host, config.port, target
    );

    // Snapshot channel: ticker writes, handlers read
    let (snapshot_tx, snapshot_rx) = watch::channel(CountdownSnapshot::default());

    // Create application state
    let state = Arc::new(AppState::new(
        target,
        config.host.clone(),
        config.port,
        snapshot_rx,
    ));

    // Start the countdown ticker background task
    let controller = CountdownController::new(target).on_complete(|| {
        info!("Launch time reached");
    });
    let ticker = spawn_countdown_ticker(controller, snapshot_tx);

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /countdown - Current countdown snapshot");
    info!("  GET  /health    - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    ticker.stop();
    ticker.join().await;

    info!("Server shutdown complete");
    Ok(())
}
