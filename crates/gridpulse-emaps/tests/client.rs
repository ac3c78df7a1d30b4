//! Integration tests for `EmapsClient` using wiremock HTTP mocks.

use gridpulse_emaps::EmapsClient;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> EmapsClient {
    EmapsClient::with_base_url("test-token", 30, "gridpulse-test/0.1", base_url)
        .expect("client construction should not fail")
}

#[tokio::test]
async fn latest_carbon_intensity_parses_reading() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "zone": "DE",
        "carbonIntensity": 312,
        "datetime": "2024-06-01T12:00:00Z",
        "updatedAt": "2024-06-01T12:05:00Z"
    });

    Mock::given(method("GET"))
        .and(path("/carbon-intensity/latest"))
        .and(query_param("zone", "DE"))
        .and(header("auth-token", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let reading = client
        .latest_carbon_intensity("DE")
        .await
        .expect("should parse latest reading");

    assert_eq!(reading.zone, "DE");
    assert_eq!(reading.carbon_intensity, 312.0);
}

#[tokio::test]
async fn history_is_sorted_ascending_by_datetime() {
    let server = MockServer::start().await;

    // Deliberately out of order to exercise the sort.
    let body = serde_json::json!({
        "zone": "FR",
        "history": [
            { "carbonIntensity": 58, "datetime": "2024-06-01T02:00:00Z" },
            { "carbonIntensity": 52, "datetime": "2024-06-01T00:00:00Z" },
            { "carbonIntensity": 55, "datetime": "2024-06-01T01:00:00Z" }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/carbon-intensity/history"))
        .and(query_param("zone", "FR"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let points = client
        .carbon_intensity_history("FR", "2024-06-01T00:00:00Z", "2024-06-02T00:00:00Z")
        .await
        .expect("should parse history");

    assert_eq!(points.len(), 3);
    assert!(points.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
    assert_eq!(points[0].value, 52.0);
    assert_eq!(points[0].unit, "gCO2eq/kWh");
}

#[tokio::test]
async fn power_breakdown_normalizes_to_shares() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "zone": "DE",
        "renewablePercentage": 48,
        "fossilFreePercentage": 61,
        "powerProductionBreakdown": {
            "wind": 200.0,
            "solar": 100.0,
            "coal": 700.0,
            "geothermal": null
        }
    });

    Mock::given(method("GET"))
        .and(path("/power-breakdown/latest"))
        .and(query_param("zone", "DE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let breakdown = client
        .power_breakdown("DE")
        .await
        .expect("should parse breakdown");

    assert_eq!(breakdown.zone, "DE");
    assert_eq!(breakdown.renewable_percentage, Some(48.0));
    assert_eq!(breakdown.mix.len(), 3);
    assert_eq!(breakdown.mix[0].source, "coal");
    assert!((breakdown.mix[0].share_pct - 70.0).abs() < 1e-9);
}

#[tokio::test]
async fn forbidden_status_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.latest_carbon_intensity("DE").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn malformed_body_is_a_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.latest_carbon_intensity("DE").await;
    let err = result.expect_err("expected deserialize error");
    assert!(err.to_string().contains("deserialization"));
}
