//! Integration tests for `EntsoeClient` using wiremock HTTP mocks.

use chrono::{TimeZone, Utc};
use gridpulse_entsoe::EntsoeClient;
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> EntsoeClient {
    EntsoeClient::with_base_url("test-token", 30, "gridpulse-test/0.1", base_url)
        .expect("client construction should not fail")
}

const GENERATION_DOCUMENT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<GL_MarketDocument xmlns="urn:iec62325.351:tc57wg16:451-6:generationloaddocument:3:0">
  <TimeSeries>
    <Period>
      <timeInterval>
        <start>2024-06-01T00:00Z</start>
        <end>2024-06-01T02:00Z</end>
      </timeInterval>
      <resolution>PT60M</resolution>
      <Point><position>1</position><quantity>51230</quantity></Point>
      <Point><position>2</position><quantity>50844</quantity></Point>
    </Period>
  </TimeSeries>
</GL_MarketDocument>"#;

const ACKNOWLEDGEMENT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Acknowledgement_MarketDocument xmlns="urn:iec62325.351:tc57wg16:451-1:acknowledgementdocument:7:0">
  <Reason><code>999</code><text>No matching data found</text></Reason>
</Acknowledgement_MarketDocument>"#;

#[tokio::test]
async fn generation_forecast_parses_points() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("securityToken", "test-token"))
        .and(query_param("documentType", "A71"))
        .and(query_param("in_Domain", "10YDE-VE-------2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(GENERATION_DOCUMENT))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let start = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 6, 2, 0, 0, 0).unwrap();
    let points = client
        .generation_forecast("10YDE-VE-------2", start, end)
        .await
        .expect("should parse generation document");

    assert_eq!(points.len(), 2);
    assert_eq!(points[0].value, 51230.0);
    assert_eq!(points[0].unit, "MW");
    assert!(points[0].timestamp < points[1].timestamp);
}

#[tokio::test]
async fn flows_request_carries_both_domains() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("documentType", "A11"))
        .and(query_param("in_Domain", "10YDE-VE-------2"))
        .and(query_param("out_Domain", "10YFR-RTE------C"))
        .respond_with(ResponseTemplate::new(200).set_body_string(GENERATION_DOCUMENT))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let start = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 6, 2, 0, 0, 0).unwrap();
    let points = client
        .cross_border_flows("10YDE-VE-------2", "10YFR-RTE------C", start, end)
        .await
        .expect("should parse flows document");

    assert_eq!(points.len(), 2);
}

#[tokio::test]
async fn acknowledgement_yields_empty_point_set() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("documentType", "A65"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ACKNOWLEDGEMENT))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let start = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 6, 2, 0, 0, 0).unwrap();
    let points = client
        .load_forecast("10YDE-VE-------2", start, end)
        .await
        .expect("acknowledgement should not be an error");

    assert!(points.is_empty());
}

#[tokio::test]
async fn unauthorized_status_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let start = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 6, 2, 0, 0, 0).unwrap();
    let result = client
        .generation_forecast("10YDE-VE-------2", start, end)
        .await;

    assert!(result.is_err());
}
