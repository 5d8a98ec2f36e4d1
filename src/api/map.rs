//! Choropleth figure endpoint

use axum::{extract::State, Json};
use serde_json::Value;

use crate::{figures, AppState};

/// GET /api/map
///
/// Returns the world choropleth figure built from the country summary table.
/// The tables are immutable, so the figure is the same for every request.
pub async fn map_figure(State(state): State<AppState>) -> Json<Value> {
    Json(figures::choropleth(&state.tables))
}
