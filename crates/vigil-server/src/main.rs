// SPDX-License-Identifier: Apache-2.0

//! Vigil webhook server.
//!
//! Binds the webhook receiver and drives the scan pipeline for incoming
//! `pull_request` deliveries.

mod logging;
mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use secrecy::SecretString;
use tokio::net::TcpListener;
use tracing::info;

use vigil_core::{MockScanner, TokenClientProvider};

use crate::routes::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_logging();

    let config = vigil_core::load_config().context("Failed to load configuration")?;

    let provider = match &config.github.token {
        Some(token) => TokenClientProvider::new(SecretString::from(token.clone())),
        None => TokenClientProvider::from_env()
            .context("No GitHub token configured - set github.token or GITHUB_TOKEN")?,
    };

    let state = AppState::new(Arc::new(provider), Arc::new(MockScanner::new()));
    let router = routes::router(state);

    // Handle both IPv4 and IPv6 addresses
    let addr: SocketAddr = if config.server.host.contains(':') {
        // IPv6 address - needs brackets
        format!("[{}]:{}", config.server.host, config.server.port)
    } else {
        // IPv4 address or hostname
        format!("{}:{}", config.server.host, config.server.port)
    }
    .parse()
    .context("Invalid server host/port")?;

    let listener = TcpListener::bind(addr).await?;
    info!("Webhook server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to install Ctrl+C handler");
            info!("Received Ctrl+C, shutting down gracefully");
        })
        .await?;

    Ok(())
}
