use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use workout_gateway::api::{create_routes, AppState};
use workout_gateway::config::AppConfig;
use workout_gateway::models::Catalog;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let catalog = Arc::new(Catalog::embedded()?);
    info!(
        "Loaded workout catalog: {} exercises across {} categories",
        catalog.len(),
        catalog.category_names().count()
    );

    if !config.index_file().is_file() {
        warn!("Front-end entry document not found at {}", config.index_file().display());
    }

    let state = AppState::new(catalog, &config)?;
    info!("Proxying profile recommendations to {}", state.recommender.base_url());
    let app = create_routes(state, &config);

    let address = config.server_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!("Workout gateway listening on http://{}", address);
    info!("Serving front-end bundle from {}", config.frontend_dir.display());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Workout gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
