//! Integration tests for the commodity tier, using wiremock HTTP mocks.

use gridpulse_core::{AdapterChain, Category, Query};
use gridpulse_markets::{sample_prices, CommodityAdapter, CommodityClient};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn live_quotes_parse_when_endpoint_is_up() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "brent_usd_bbl": 85.10,
        "wti_usd_bbl": 80.25,
        "natural_gas_usd_mmbtu": 3.10,
        "coal_usd_per_ton": 101.00,
        "as_of": "2025-11-18"
    });
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = CommodityClient::new(&server.uri(), 30, "gridpulse-test/0.1")
        .expect("client construction should not fail");
    let prices = client.latest_prices().await.expect("should parse quotes");
    assert_eq!(prices.brent_usd_bbl, 85.10);
    assert_eq!(prices.as_of.to_string(), "2025-11-18");
}

#[tokio::test]
async fn dead_endpoint_serves_the_fixed_sample() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = CommodityClient::new(&server.uri(), 30, "gridpulse-test/0.1")
        .expect("client construction should not fail");
    let chain = AdapterChain::new(Category::CommodityPrices)
        .tier(Box::new(CommodityAdapter::new(Some(client))))
        .sample(vec![sample_prices()]);

    let prices = chain.resolve(&Query::new(Category::CommodityPrices)).await;
    assert_eq!(prices, vec![sample_prices()]);
}

#[tokio::test]
async fn garbage_body_also_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = CommodityClient::new(&server.uri(), 30, "gridpulse-test/0.1")
        .expect("client construction should not fail");
    let chain = AdapterChain::new(Category::CommodityPrices)
        .tier(Box::new(CommodityAdapter::new(Some(client))))
        .sample(vec![sample_prices()]);

    let prices = chain.resolve(&Query::new(Category::CommodityPrices)).await;
    assert_eq!(prices, vec![sample_prices()]);
}
