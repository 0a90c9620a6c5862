//! Trivia API server

use trivia_api::config::{load_config, print_config, AppConfig};
use trivia_api::infrastructure::http::{AppState, HttpServer};
use trivia_api::infrastructure::persistence::Repositories;

fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},trivia_api={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for ctrl-c");
        return;
    }
    tracing::info!("Received shutdown signal");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // env vars > config file > defaults
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("Trivia API v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    let repos = Repositories::open(&config.database).await?;
    let state = AppState::from_repositories(&repos);

    let server = HttpServer::new(config.server.clone(), state);

    server.run_with_shutdown(shutdown_signal()).await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
