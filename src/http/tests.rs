//! Tests for the HTTP transport module

use super::*;
use crate::config::ClientConfig;
use crate::types::RequestParams;
use serde_json::json;
use std::time::{Duration, Instant};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(base_url: &str) -> ClientConfig {
    ClientConfig::builder()
        .base_url(format!("{base_url}/v1/"))
        .build()
}

#[tokio::test]
async fn test_transport_get_with_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/observations"))
        .and(query_param("taxon_id", "1,2"))
        .and(query_param("per_page", "200"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_results": 0, "results": []
        })))
        .mount(&mock_server)
        .await;

    let transport = HttpTransport::new(test_config(&mock_server.uri())).unwrap();
    let params = RequestParams::new()
        .with("taxon_id", vec![1, 2])
        .with("per_page", 200);

    let response = transport
        .request(Method::Get, "observations", &params, None)
        .await
        .unwrap();

    assert!(response.is_success());
    assert_eq!(response.body["total_results"], 0);
}

#[tokio::test]
async fn test_transport_attaches_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/observations"))
        .and(header("Authorization", "Bearer secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .mount(&mock_server)
        .await;

    let transport = HttpTransport::new(test_config(&mock_server.uri())).unwrap();
    let response = transport
        .request(Method::Get, "observations", &RequestParams::new(), Some("secret"))
        .await
        .unwrap();

    assert!(response.is_success());
}

#[tokio::test]
async fn test_transport_returns_non_success_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/observations"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "boom"})))
        .mount(&mock_server)
        .await;

    let transport = HttpTransport::new(test_config(&mock_server.uri())).unwrap();
    let response = transport
        .request(Method::Get, "observations", &RequestParams::new(), None)
        .await
        .unwrap();

    // Status classification is the fetcher's job, not the transport's
    assert_eq!(response.status, 500);
    assert_eq!(response.body["error"], "boom");
}

#[tokio::test]
async fn test_transport_dry_run_skips_network() {
    // No mock server: a real request would fail
    let config = ClientConfig::builder()
        .base_url("http://localhost:1/v1/")
        .dry_run(true)
        .build();
    let transport = HttpTransport::new(config).unwrap();

    let response = transport
        .request(Method::Get, "observations", &RequestParams::new(), None)
        .await
        .unwrap();

    assert!(response.is_success());
    assert_eq!(response.body["results"], json!([]));
}

#[tokio::test]
async fn test_throttle_first_acquisition_is_immediate() {
    let throttle = Throttle::with_interval(Duration::from_millis(200));

    let start = Instant::now();
    throttle.wait().await;
    assert!(start.elapsed() < Duration::from_millis(50));

    // Second acquisition must wait out the interval
    assert!(!throttle.check());
    throttle.wait().await;
    assert!(start.elapsed() >= Duration::from_millis(150));
}
