//! Marketplace client behavior against a mock HTTP server.

use ordinalsbot_client::MarketplaceClient;
use ordinalsbot_client::types::{
    MarketplaceCreatePaddingOutputsRequest, MarketplaceListOrdinalForSaleRequest,
    MarketplaceSellerOrdinal,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> MarketplaceClient {
    let base = format!("{}/marketplace/", server.uri());
    MarketplaceClient::with_base_url("test-key", base).expect("client builds")
}

#[tokio::test]
async fn post_bodies_are_wrapped_under_params() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/marketplace/create-listing"))
        .and(body_json(json!({
            "params": {
                "sellerOrdinals": [{"id": "abc123i0", "price": 50_000}],
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"psbt": "cHNidP8B"})))
        .expect(1)
        .mount(&server)
        .await;

    let request = MarketplaceListOrdinalForSaleRequest {
        seller_ordinals: vec![MarketplaceSellerOrdinal {
            id: "abc123i0".to_owned(),
            price: 50_000,
        }],
        ..Default::default()
    };
    let listing = client_for(&server)
        .list_ordinal_for_sale(&request)
        .await
        .expect("listing");
    assert_eq!(listing.psbt.as_deref(), Some("cHNidP8B"));
}

#[tokio::test]
async fn get_listing_unwraps_data_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/marketplace/get-listing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"ordinals": [{"id": "abc123i0"}]}
        })))
        .mount(&server)
        .await;

    let listing = client_for(&server).get_listing().await.expect("listing");
    let ordinals = listing.ordinals.expect("ordinals present");
    assert_eq!(ordinals.len(), 1);
    assert_eq!(ordinals[0], json!({"id": "abc123i0"}));
}

#[tokio::test]
async fn padding_output_setup_round_trips() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/marketplace/setup-padding-outputs"))
        .and(body_json(json!({
            "params": {"address": "bc1qbuyer", "numOfOuts": 3}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"psbt": "cHNidP8C"})))
        .mount(&server)
        .await;

    let request = MarketplaceCreatePaddingOutputsRequest {
        address: "bc1qbuyer".to_owned(),
        num_of_outs: Some(3),
        fee_rate: None,
    };
    let response = client_for(&server)
        .create_padding_output(&request)
        .await
        .expect("padding outputs");
    assert_eq!(response.psbt.as_deref(), Some("cHNidP8C"));
}

#[tokio::test]
async fn server_errors_normalize_with_status_details() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/marketplace/get-listing"))
        .respond_with(ResponseTemplate::new(500).set_body_string("marketplace unavailable"))
        .mount(&server)
        .await;

    let error = client_for(&server)
        .get_listing()
        .await
        .expect_err("should fail");
    assert!(error.is_transport());
    assert_eq!(error.status_code(), Some(500));
    assert_eq!(error.status_text(), Some("Internal Server Error"));
}
