//! cinemap library - interactive movie-production choropleth dashboard
//!
//! The dataset is fetched and aggregated once at startup; the HTTP layer
//! serves an embedded page plus the figure/popup JSON it renders from.

use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod config;
pub mod dataset;
pub mod error;
pub mod figures;
pub mod popup;

pub use error::{Error, Result};

use dataset::Tables;

/// Application state shared across HTTP handlers.
///
/// The tables are built once in `main` and never mutated; handlers share
/// them through the `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub tables: Arc<Tables>,
}

impl AppState {
    /// Create new application state
    pub fn new(tables: Tables) -> Self {
        Self {
            tables: Arc::new(tables),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .route("/api/map", get(api::map_figure))
        .route("/api/popup", post(api::popup_event))
        .route("/api/buildinfo", get(api::get_build_info))
        .merge(api::health_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
