//! HTTP API handlers for cinemap

pub mod buildinfo;
pub mod health;
pub mod map;
pub mod popup;
pub mod ui;

pub use buildinfo::get_build_info;
pub use health::health_routes;
pub use map::map_figure;
pub use popup::popup_event;
pub use ui::{serve_app_js, serve_index};
