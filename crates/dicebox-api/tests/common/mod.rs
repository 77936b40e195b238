//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use dicebox_core::clock::Clock;
use dicebox_core::rng::RandomSource;
use dicebox_test_support::{FixedClock, RecordingRollLogStore, SequenceRng};
use http_body_util::BodyExt;
use tower::ServiceExt;

use dicebox_api::routes;
use dicebox_api::state::AppState;

/// Fixed timestamp used across all integration tests.
pub fn fixed_time() -> chrono::DateTime<chrono::Utc> {
    chrono::TimeZone::with_ymd_and_hms(&chrono::Utc, 2026, 1, 15, 10, 0, 0).unwrap()
}

/// Build the full app router backed by an in-memory store, a fixed clock,
/// and a recorded die sequence. Uses the same route structure as `main.rs`.
/// Returns the store handle so tests can assert on persisted entries.
pub fn build_test_app(rolls: Vec<u32>) -> (Router, Arc<RecordingRollLogStore>) {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock(fixed_time()));
    let rng: Arc<Mutex<dyn RandomSource>> = Arc::new(Mutex::new(SequenceRng::new(rolls)));
    let store = Arc::new(RecordingRollLogStore::new());
    let app_state = AppState::new(clock, rng, store.clone());

    let app = Router::new()
        .merge(routes::health::router())
        .merge(routes::roll::router())
        .merge(routes::logs::router())
        .with_state(app_state);

    (app, store)
}

/// Send a GET request and return the status plus parsed JSON body.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return only the status. Used for requests whose
/// error body is not JSON (e.g. path extraction failures).
pub async fn get_status(app: &Router, uri: &str) -> StatusCode {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    app.clone().oneshot(request).await.unwrap().status()
}
