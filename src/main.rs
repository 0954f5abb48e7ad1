// ABOUTME: Entry point for the vente binary.
// ABOUTME: Parses CLI arguments, initializes tracing, opens the store and serves the HTTP API.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use vente_server::{AppState, VenteConfig, create_router};
use vente_store::Store;

/// Inventory and order management REST backend.
#[derive(Parser, Debug)]
#[command(name = "vente")]
#[command(version, about, long_about = None)]
struct Cli {
    /// SQLite database file (overrides VENTE_DATABASE)
    #[arg(long)]
    database: Option<PathBuf>,

    /// Socket address to listen on (overrides VENTE_BIND)
    #[arg(long)]
    bind: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(
                    "vente=debug,vente_server=debug,vente_store=debug,tower_http=debug",
                )
            }),
        )
        .init();

    let cli = Cli::parse();
    let mut config = VenteConfig::from_env()?;
    if let Some(database) = cli.database {
        config.database = database;
    }
    if let Some(bind) = cli.bind {
        config.bind = bind;
    }

    let store = Store::open(&config.database)
        .with_context(|| format!("failed to open database {}", config.database.display()))?;
    let state = Arc::new(AppState::new(store));

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    tracing::info!(bind = %config.bind, database = %config.database.display(), "vente listening");

    axum::serve(listener, create_router(Arc::clone(&state)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    match Arc::try_unwrap(state) {
        Ok(state) => state.into_store().close()?,
        Err(_) => tracing::warn!("store still shared at shutdown; leaving it to drop"),
    }
    tracing::info!("vente stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
