// SPDX-License-Identifier: MIT

//! Shoebox API Server
//!
//! Serves the user account and session token API over HTTP. TLS
//! termination is left to the deployment in front of this binary.

use axum::ServiceExt;
use shoebox::{config::Config, db::FileDb, routes, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(
        environment = %config.environment,
        port = config.port,
        "Starting Shoebox API"
    );

    // Open the record store, creating the data directory if needed
    let db = FileDb::open(&config.data_dir).await?;
    tracing::info!(data_dir = %config.data_dir.display(), "Record store ready");

    // Build router
    let app = routes::create_router(Arc::new(AppState { config: config.clone(), db }));

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(
        listener,
        ServiceExt::<axum::extract::Request>::into_make_service(app),
    )
    .await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("shoebox=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
