//! Tests for HttpSearchBackend

use super::*;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn backend_for(server: &MockServer) -> HttpSearchBackend {
    let config = ApiConfig {
        base_url: server.uri(),
        token: Some("secret".to_string()),
        ..ApiConfig::default()
    };
    HttpSearchBackend::from_config(&config).unwrap()
}

#[tokio::test]
async fn test_search_returns_backend_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search/guards"))
        .and(query_param("text", "Jo"))
        .and(header("authorization", "Bearer secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "2", "firstName": "Joan", "lastName": "Baez", "licenseNumber": "L2", "state": "NY"},
            {"id": "1", "firstName": "John", "lastName": "Doe", "licenseNumber": "L1", "state": "CA"}
        ])))
        .mount(&server)
        .await;

    let results = backend_for(&server).search("Jo").await.unwrap();

    let ids: Vec<&str> = results.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "1"]);
    assert_eq!(results[1].first_name, "John");
}

#[tokio::test]
async fn test_search_passes_whitespace_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("text", "  "))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let results = backend_for(&server).search("  ").await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_search_error_carries_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(504).set_body_json(json!({"error": "timeout"})))
        .mount(&server)
        .await;

    let err = backend_for(&server).search("Jo").await.unwrap_err();
    assert_eq!(err.to_string(), "timeout");
}

#[tokio::test]
async fn test_malformed_suggestion_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "1"}])))
        .mount(&server)
        .await;

    let err = backend_for(&server).search("Jo").await.unwrap_err();
    assert!(matches!(err, ApiError::Parse(_)));
}
