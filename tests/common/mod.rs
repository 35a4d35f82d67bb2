#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::json;
use std::sync::Arc;
use string_analyzer::infrastructure::persistence::MemoryStringRepository;
use string_analyzer::state::AppState;

/// Application state backed by an empty in-memory store.
pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(MemoryStringRepository::new()))
}

/// Test server running the string analysis routes over an empty
/// in-memory store.
pub fn create_test_server() -> TestServer {
    let app = string_analyzer::api::routes::string_routes().with_state(create_test_state());
    TestServer::new(app).unwrap()
}

/// Stores `value` through the API, asserting success.
pub async fn create_string(server: &TestServer, value: &str) {
    server
        .post("/strings")
        .json(&json!({ "value": value }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);
}

/// Values of the `items` array in a list response, in order.
pub fn item_values(body: &serde_json::Value) -> Vec<String> {
    body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["value"].as_str().unwrap().to_string())
        .collect()
}
