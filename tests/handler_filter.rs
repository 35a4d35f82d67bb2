mod common;

use axum_test::TestServer;

/// Server preloaded with a fixed set of records covering palindromes and a
/// spread of lengths: "ada" (3), "hello" (5), "racecar" (7), "rotator" (7),
/// "long string here" (16).
async fn seeded_server() -> TestServer {
    let server = common::create_test_server();

    common::create_string(&server, "ada").await;
    common::create_string(&server, "hello").await;
    common::create_string(&server, "racecar").await;
    common::create_string(&server, "rotator").await;
    common::create_string(&server, "long string here").await;

    server
}

#[tokio::test]
async fn test_filter_without_query_returns_everything() {
    let server = seeded_server().await;

    let response = server.get("/strings/filter-by-natural-language").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["items"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_filter_palindromes() {
    let server = seeded_server().await;

    let response = server
        .get("/strings/filter-by-natural-language")
        .add_query_param("query", "all palindromes")
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(common::item_values(&body), ["ada", "racecar", "rotator"]);
}

#[tokio::test]
async fn test_filter_longer_than_is_strict() {
    let server = seeded_server().await;

    let response = server
        .get("/strings/filter-by-natural-language")
        .add_query_param("query", "strings longer than 7")
        .await;

    response.assert_status_ok();

    // Both 7-character palindromes are excluded by the strict bound
    let body = response.json::<serde_json::Value>();
    assert_eq!(common::item_values(&body), ["long string here"]);
}

#[tokio::test]
async fn test_filter_shorter_than_is_strict() {
    let server = seeded_server().await;

    let response = server
        .get("/strings/filter-by-natural-language")
        .add_query_param("query", "shorter than 5")
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(common::item_values(&body), ["ada"]);
}

#[tokio::test]
async fn test_filter_range_combines_conditions() {
    let server = seeded_server().await;

    let response = server
        .get("/strings/filter-by-natural-language")
        .add_query_param("query", "longer than 3 and shorter than 7")
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(common::item_values(&body), ["hello"]);
}

#[tokio::test]
async fn test_filter_palindromes_with_length_condition() {
    let server = seeded_server().await;

    let response = server
        .get("/strings/filter-by-natural-language")
        .add_query_param("query", "palindromes longer than 3")
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(common::item_values(&body), ["racecar", "rotator"]);
}

#[tokio::test]
async fn test_filter_unparseable_number_is_dropped() {
    let server = seeded_server().await;

    let response = server
        .get("/strings/filter-by-natural-language")
        .add_query_param("query", "longer than five")
        .await;

    response.assert_status_ok();

    // The malformed condition contributes nothing; no error either
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["items"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_filter_unrecognized_query_returns_everything() {
    let server = seeded_server().await;

    let response = server
        .get("/strings/filter-by-natural-language")
        .add_query_param("query", "show me the good ones")
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["items"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_filter_is_case_insensitive() {
    let server = seeded_server().await;

    let response = server
        .get("/strings/filter-by-natural-language")
        .add_query_param("query", "PALINDROMES Longer Than 3")
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(common::item_values(&body), ["racecar", "rotator"]);
}

#[tokio::test]
async fn test_filter_first_occurrence_wins() {
    let server = seeded_server().await;

    let response = server
        .get("/strings/filter-by-natural-language")
        .add_query_param("query", "longer than 7 or longer than 2")
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(common::item_values(&body), ["long string here"]);
}

#[tokio::test]
async fn test_filter_empty_store() {
    let server = common::create_test_server();

    let response = server
        .get("/strings/filter-by-natural-language")
        .add_query_param("query", "palindrome")
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["items"].as_array().unwrap().len(), 0);
}
