//! Popup event endpoint
//!
//! The embedded page forwards every map click and close click here and
//! renders whatever comes back. Unknown region codes are not errors: the
//! derived state simply hides the panel.

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::Value;

use crate::popup::{self, PopupEvent, PopupState};
use crate::{figures, AppState};

/// Response to a popup event: the new panel state plus its bar figure
/// (absent while the panel is hidden).
#[derive(Debug, Serialize)]
pub struct PopupResponse {
    pub popup: PopupState,
    pub figure: Option<Value>,
}

/// POST /api/popup
///
/// Body: `{"event": "select", "region_code": "USA"}` or `{"event": "close"}`.
pub async fn popup_event(
    State(state): State<AppState>,
    Json(event): Json<PopupEvent>,
) -> Json<PopupResponse> {
    let popup = popup::derive(&event, &state.tables);
    let figure = figures::genre_bar(&popup);
    Json(PopupResponse { popup, figure })
}
