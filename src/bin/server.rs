//! Tic-tac-toe API server
//!
//! Serves move recommendations at `POST /v1/tictactoe` and the plugin
//! assets (`/.well-known/ai-plugin.json`, `/openapi.yaml`, `/logo.png`)
//! from the configured asset directory.

use std::net::{Ipv6Addr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tictactoe_api::http::{AppConfig, router};

#[derive(Parser)]
#[command(name = "server")]
#[command(version, about = "Move-recommendation API for generalized tic-tac-toe", long_about = None)]
struct Cli {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8080)]
    port: u16,

    /// Directory holding ai-plugin.json, openapi.yaml and logo.png
    #[arg(long, default_value = ".well-known")]
    assets_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let app = router(AppConfig {
        assets_dir: cli.assets_dir,
    });

    let addr = SocketAddr::from((Ipv6Addr::UNSPECIFIED, cli.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to install shutdown handler");
    }
}
