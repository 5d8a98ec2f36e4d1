//! cinemap - Main entry point
//!
//! Startup sequence: resolve the data folder, fetch the dataset if no local
//! copy exists, normalize and aggregate it into the read-only tables, then
//! serve the dashboard over HTTP until shutdown.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinemap::config::{self, Args};
use cinemap::dataset::{aggregate, fetch, normalize};
use cinemap::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cinemap=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting cinemap v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    let data_folder = config::resolve_data_folder(args.data_folder.as_deref());
    config::ensure_data_folder(&data_folder).context("Failed to create data folder")?;
    info!("Data folder: {}", data_folder.display());

    let dataset_path = data_folder.join(config::DATASET_FILE_NAME);
    let dataset_url = args.dataset_url.as_deref().unwrap_or(config::DATASET_URL);
    fetch::ensure_dataset(&dataset_path, dataset_url)
        .await
        .context("Failed to fetch dataset")?;

    let (records, report) = normalize::load_records(&dataset_path)
        .context("Failed to load dataset")?;
    info!(
        "Normalized {} rows into {} records ({} parse errors, {} bad-title, {} empty-country)",
        report.total_rows,
        report.expanded_records,
        report.parse_errors,
        report.dropped_bad_title,
        report.dropped_empty_country
    );

    let tables = aggregate::build_tables(&records);
    info!(
        "{} countries on the map, {} (country, genre) pairs",
        tables.summary.len(),
        tables.genre_counts.len()
    );

    let state = AppState::new(tables);
    let app = build_router(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .context("Invalid host/port")?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("cinemap listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
