//! Integration tests for the cinemap API endpoints
//!
//! Tests cover:
//! - Health and build-info endpoints
//! - Choropleth figure structure
//! - Popup derivation: select, unknown region, close, malformed payloads
//!
//! The router runs against tables built from a small in-memory dataset,
//! driven with `tower::util::ServiceExt::oneshot`.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;
use tower::util::ServiceExt; // for `oneshot` method

use cinemap::dataset::{aggregate, normalize};
use cinemap::{build_router, AppState};

const TEST_CSV: &str = "\
title,production_countries,genres
A,\"USA, France\",Drama
B,United States,\"Drama, Comedy\"
C,France,\"Comedy, Romance\"
D,Atlantis,Drama
E,South Korea,Thriller
IPL 2025,India,Sport
";

/// Test helper: build the app over tables from the in-memory dataset
fn setup_app() -> axum::Router {
    let (records, _report) = normalize::normalize_csv(TEST_CSV.as_bytes());
    let tables = aggregate::build_tables(&records);
    build_router(AppState::new(tables))
}

/// Test helper: create a GET request
fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Test helper: create a JSON POST request
fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Test helper: Extract JSON body from response
async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

// =============================================================================
// Health and build info
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let app = setup_app();

    let response = app.oneshot(get_request("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "cinemap");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_buildinfo_endpoint() {
    let app = setup_app();

    let response = app.oneshot(get_request("/api/buildinfo")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert!(body["version"].is_string());
    assert!(body["git_hash"].is_string());
    assert!(body["build_timestamp"].is_string());
}

// =============================================================================
// UI pages
// =============================================================================

#[tokio::test]
async fn test_index_page_served() {
    let app = setup_app();

    let response = app.oneshot(get_request("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("Movie Choropleth Popup"));
    assert!(html.contains("choropleth"));
}

#[tokio::test]
async fn test_app_js_served() {
    let app = setup_app();

    let response = app.oneshot(get_request("/static/app.js")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"],
        "application/javascript"
    );
}

// =============================================================================
// Choropleth figure
// =============================================================================

#[tokio::test]
async fn test_map_figure_structure() {
    let app = setup_app();

    let response = app.oneshot(get_request("/api/map")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    let trace = &body["data"][0];
    assert_eq!(trace["type"], "choropleth");

    let locations = trace["locations"].as_array().unwrap();
    let z = trace["z"].as_array().unwrap();
    assert_eq!(locations.len(), z.len());

    // Resolved countries are keyed by alpha-3 code
    assert!(locations.contains(&Value::String("USA".to_string())));
    assert!(locations.contains(&Value::String("FRA".to_string())));
    assert!(locations.contains(&Value::String("KOR".to_string())));
    // Unresolvable country names never reach the map
    assert!(!locations.contains(&Value::String("Atlantis".to_string())));

    assert_eq!(
        body["layout"]["title"],
        "Global Movie Production (Log Scale)"
    );
}

// =============================================================================
// Popup events
// =============================================================================

#[tokio::test]
async fn test_popup_select_known_region() {
    let app = setup_app();

    let request = post_json("/api/popup", r#"{"event":"select","region_code":"FRA"}"#);
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["popup"]["visible"], true);
    assert_eq!(body["popup"]["country"], "France");

    // France: Drama 1, Comedy 1, Romance 1 (count-desc, ties in grouping order)
    let genres = body["popup"]["top_genres"].as_array().unwrap();
    assert_eq!(genres.len(), 3);
    assert_eq!(genres[0]["genre"], "Comedy");
    assert_eq!(genres[0]["count"], 1);

    let figure = &body["figure"];
    assert_eq!(figure["data"][0]["type"], "bar");
    assert_eq!(figure["layout"]["title"], "Top Genres in France");
}

#[tokio::test]
async fn test_popup_select_unknown_region_hides_panel() {
    let app = setup_app();

    let request = post_json("/api/popup", r#"{"event":"select","region_code":"ZZZ"}"#);
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["popup"]["visible"], false);
    assert!(body["popup"]["country"].is_null());
    assert!(body["figure"].is_null());
}

#[tokio::test]
async fn test_popup_close_hides_panel() {
    let app = setup_app();

    let request = post_json("/api/popup", r#"{"event":"close"}"#);
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["popup"]["visible"], false);
    assert!(body["figure"].is_null());
}

#[tokio::test]
async fn test_popup_unknown_event_rejected() {
    let app = setup_app();

    let request = post_json("/api/popup", r#"{"event":"explode"}"#);
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_popup_select_without_region_code_rejected() {
    let app = setup_app();

    let request = post_json("/api/popup", r#"{"event":"select"}"#);
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// =============================================================================
// End-to-end dataset semantics through the API
// =============================================================================

#[tokio::test]
async fn test_bad_title_row_absent_from_tables() {
    let app = setup_app();

    // "IPL 2025" was India's only row, so IND never reaches the map.
    let request = post_json("/api/popup", r#"{"event":"select","region_code":"IND"}"#);
    let response = app.oneshot(request).await.unwrap();

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["popup"]["visible"], false);
}

#[tokio::test]
async fn test_manual_alias_applies_through_api() {
    let app = setup_app();

    let request = post_json("/api/popup", r#"{"event":"select","region_code":"KOR"}"#);
    let response = app.oneshot(request).await.unwrap();

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["popup"]["visible"], true);
    assert_eq!(body["popup"]["country"], "South Korea");
    let genres = body["popup"]["top_genres"].as_array().unwrap();
    assert_eq!(genres.len(), 1);
    assert_eq!(genres[0]["genre"], "Thriller");
}
