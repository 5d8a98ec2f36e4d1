//! Plotly figure construction
//!
//! The server never renders anything itself: these builders produce the
//! `{data, layout}` JSON that plotly.js consumes in the browser.

use serde_json::{json, Value};

use crate::dataset::Tables;
use crate::popup::PopupState;

/// World choropleth keyed by region code, colored by log10(movies + 1).
pub fn choropleth(tables: &Tables) -> Value {
    let locations: Vec<&str> = tables.summary.iter().map(|row| row.region_code).collect();
    let z: Vec<f64> = tables.summary.iter().map(|row| row.log_movie_count).collect();
    let text: Vec<&str> = tables.summary.iter().map(|row| row.country.as_str()).collect();
    let customdata: Vec<u64> = tables.summary.iter().map(|row| row.movie_count).collect();

    json!({
        "data": [{
            "type": "choropleth",
            "locations": locations,
            "z": z,
            "text": text,
            "customdata": customdata,
            "colorscale": "Plasma",
            "hovertemplate": "<b>%{text}</b><br><br>\u{1F3AC} Movies Produced: <b>%{customdata:,}</b><br>\u{1F4C8} Log Scale: %{z:.2f}<extra></extra>",
            "colorbar": {
                "title": "Log(Movies + 1)",
                "tickvals": [0, 1, 2, 3, 4],
                "ticktext": ["1", "10", "100", "1K", "10K"]
            }
        }],
        "layout": {
            "title": "Global Movie Production (Log Scale)",
            "geo": {
                "showframe": false,
                "showcoastlines": true,
                "projection": { "type": "natural earth" },
                "landcolor": "rgb(243,243,243)"
            },
            "margin": { "t": 60, "b": 20, "l": 10, "r": 10 }
        }
    })
}

/// Genre bar chart for a visible panel; `None` while the panel is hidden.
///
/// A visible panel with no genres still gets a figure, with empty axes.
pub fn genre_bar(state: &PopupState) -> Option<Value> {
    if !state.visible {
        return None;
    }
    let country = state.country.as_deref()?;

    let genres: Vec<&str> = state.top_genres.iter().map(|g| g.genre.as_str()).collect();
    let counts: Vec<u64> = state.top_genres.iter().map(|g| g.count).collect();

    Some(json!({
        "data": [{
            "type": "bar",
            "x": genres,
            "y": counts,
            "marker": { "color": counts, "colorscale": "Inferno" }
        }],
        "layout": {
            "title": format!("Top Genres in {country}"),
            "yaxis": { "title": "Movies" },
            "margin": { "t": 50, "l": 30, "r": 10, "b": 70 },
            "paper_bgcolor": "white",
            "plot_bgcolor": "white"
        }
    }))
}
