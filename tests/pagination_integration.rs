//! Integration tests using a mock HTTP server
//!
//! Tests the full end-to-end flow: client call → throttled page fetches →
//! cursor advancement → normalization → assembled output.

use inat_client::http::Throttle;
use inat_client::{Client, ClientConfig, RequestParams};
use serde_json::json;
use std::time::{Duration, Instant};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const THROTTLE: Duration = Duration::from_millis(200);

fn test_client(mock_server: &MockServer, per_page: u32) -> Client {
    let config = ClientConfig::builder()
        .base_url(format!("{}/v1/", mock_server.uri()))
        .per_page(per_page)
        .build();
    Client::with_config(config)
        .unwrap()
        .with_throttle(Throttle::with_interval(THROTTLE))
}

fn observation_page(remaining: u64, start_id: u64, count: u64) -> serde_json::Value {
    let results: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            json!({
                "id": start_id + i,
                "location": "50.646894,4.360086",
                "observed_on_string": "2018-09-05 14:06:00",
                "time_zone_offset": "+01:00",
            })
        })
        .collect();
    json!({"total_results": remaining, "results": results})
}

// ============================================================================
// Full observation fetch
// ============================================================================

/// 1200 matching observations at 500 per page must drain in exactly three
/// round trips, with the delay applied between fetches but not before the
/// first one.
#[tokio::test]
async fn test_get_all_observations_three_pages() {
    let mock_server = MockServer::start().await;

    // The server recomputes `total_results` against the cursor filter, so
    // each page reports how many results remain above the cursor.
    Mock::given(method("GET"))
        .and(path("/v1/observations"))
        .and(query_param("id_above", "500"))
        .respond_with(ResponseTemplate::new(200).set_body_json(observation_page(700, 501, 500)))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/observations"))
        .and(query_param("id_above", "1000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(observation_page(200, 1001, 200)))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/observations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(observation_page(1200, 1, 500)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server, 500);
    let started = Instant::now();
    let items = client
        .get_all_observations(RequestParams::new().with("taxon_id", 48662))
        .await
        .unwrap();
    let elapsed = started.elapsed();

    assert_eq!(items.len(), 1200);

    // Three fetches means two inter-fetch delays, no leading delay
    assert!(elapsed >= THROTTLE * 2, "elapsed {elapsed:?}");
    assert!(elapsed < THROTTLE * 4, "elapsed {elapsed:?}");

    // Items arrive in id order with no duplicates across page boundaries
    let ids: Vec<u64> = items.iter().map(|o| o["id"].as_u64().unwrap()).collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(ids[0], 1);
    assert_eq!(ids[1199], 1200);

    // Every item passed through normalization
    assert_eq!(items[0]["location"], json!([50.646894, 4.360086]));
    assert_eq!(items[0]["observed_on"], "2018-09-05T14:06:00+01:00");

    // Keyset ordering was requested from the server
    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);
    for request in &requests {
        assert!(request
            .url
            .query_pairs()
            .any(|(k, v)| k == "order_by" && v == "id"));
    }
    // The first fetch carries no cursor at all
    assert!(!requests[0].url.query_pairs().any(|(k, _)| k == "id_above"));
}

/// A single short page completes in one round trip with no delay.
#[tokio::test]
async fn test_get_all_observations_single_page_no_delay() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/observations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(observation_page(3, 10, 3)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server, 500);
    let started = Instant::now();
    let items = client
        .get_all_observations(RequestParams::new())
        .await
        .unwrap();

    assert_eq!(items.len(), 3);
    assert!(started.elapsed() < THROTTLE);
}

// ============================================================================
// Error propagation
// ============================================================================

/// A server failure mid-sequence surfaces as an error, not a short list.
#[tokio::test]
async fn test_server_error_mid_sequence_propagates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/observations"))
        .and(query_param("id_above", "500"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({"error": "unavailable"})))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/observations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(observation_page(1200, 1, 500)))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server, 500);
    let err = client
        .get_all_observations(RequestParams::new())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        inat_client::Error::ApiStatus { status: 503, .. }
    ));
}

// ============================================================================
// GeoJSON assembly
// ============================================================================

#[tokio::test]
async fn test_geojson_end_to_end() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/observations"))
        .and(query_param("mappable", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_results": 1,
            "results": [{
                "id": 16227955,
                "location": "50.646894,4.360086",
                "species_guess": "Lixus bardanae",
                "taxon": {"name": "Lixus bardanae"},
            }],
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server, 500);
    let collection = client
        .get_geojson_observations(RequestParams::new(), Some(&["species_guess", "taxon.name"]))
        .await
        .unwrap();

    assert_eq!(collection.len(), 1);
    let feature = &collection.features[0];
    // GeoJSON positions are [longitude, latitude]
    assert_eq!(feature.geometry.coordinates, [4.360086, 50.646894]);
    assert_eq!(feature.properties["taxon.name"], "Lixus bardanae");

    let rendered = serde_json::to_value(&collection).unwrap();
    assert_eq!(rendered["type"], "FeatureCollection");
    assert_eq!(rendered["features"][0]["geometry"]["type"], "Point");
}
