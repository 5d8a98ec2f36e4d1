//! Popup view-state derivation
//!
//! A two-event state machine: selecting a map region shows the genre
//! breakdown panel for that country, closing hides it. Derivation is a pure
//! function of the event and the tables; nothing here touches the UI.

use serde::{Deserialize, Serialize};

use crate::dataset::Tables;

/// Most genres shown in the breakdown panel.
pub const TOP_GENRE_LIMIT: usize = 10;

/// Events the panel reacts to.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum PopupEvent {
    /// A map region was clicked, carrying its alpha-3 code.
    Select { region_code: String },
    /// The close control was clicked.
    Close,
}

/// Genre tally entry in the panel, highest counts first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreTally {
    pub genre: String,
    pub count: u64,
}

/// Derived panel state. Recomputed per interaction, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopupState {
    pub visible: bool,
    pub country: Option<String>,
    pub top_genres: Vec<GenreTally>,
}

impl PopupState {
    /// The initial state, and the result of any close action.
    pub fn hidden() -> Self {
        Self {
            visible: false,
            country: None,
            top_genres: Vec::new(),
        }
    }
}

/// Derive the next panel state from a UI event.
///
/// A region code with no summary row behaves exactly like a close: the click
/// came from an unmapped area or a stale payload, and the panel hides. A
/// mapped country with no genre rows still shows the panel, with an empty
/// tally.
pub fn derive(event: &PopupEvent, tables: &Tables) -> PopupState {
    match event {
        PopupEvent::Close => PopupState::hidden(),
        PopupEvent::Select { region_code } => {
            let Some(summary) = tables.country_for_region(region_code) else {
                return PopupState::hidden();
            };

            let mut top_genres: Vec<GenreTally> = tables
                .genres_for_country(&summary.country)
                .map(|row| GenreTally {
                    genre: row.genre.clone(),
                    count: row.count,
                })
                .collect();
            // Stable sort: ties keep their grouping order.
            top_genres.sort_by(|a, b| b.count.cmp(&a.count));
            top_genres.truncate(TOP_GENRE_LIMIT);

            PopupState {
                visible: true,
                country: Some(summary.country.clone()),
                top_genres,
            }
        }
    }
}
