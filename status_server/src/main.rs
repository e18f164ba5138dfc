mod page;
mod routes;

use std::net::SocketAddr;

use tracing::{error, info, Level};

use status_core::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return Err(e.into());
        }
    };

    let state = routes::AppState::new(&config);
    let app = routes::router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            // Port in use or insufficient privilege. Refusing to run
            // half-initialized; the exit status tells the supervisor.
            error!("Failed to bind {}: {}", addr, e);
            return Err(e.into());
        }
    };

    info!("Server is running on port {}", config.port);
    info!("Access the application at http://localhost:{}", config.port);
    info!(
        "Health check available at http://localhost:{}/health",
        config.port
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
}
