//! Inscription client behavior against a mock HTTP server.

use ordinalsbot_client::types::{
    InscriptionCollectionCreateRequest, InscriptionFile, InscriptionPriceRequest,
};
use ordinalsbot_client::{InscriptionClient, InscriptionEnv};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> InscriptionClient {
    InscriptionClient::with_base_url("test-key", server.uri()).expect("client builds")
}

#[tokio::test]
async fn unwraps_data_envelope_from_successful_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/order"))
        .and(query_param("id", "order-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": "order-1", "state": "queued"}
        })))
        .mount(&server)
        .await;

    let order = client_for(&server).get_order("order-1").await.expect("order");
    assert_eq!(order.id, "order-1");
    assert_eq!(order.state.as_deref(), Some("queued"));
}

#[tokio::test]
async fn passes_through_body_without_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/price"))
        .and(query_param("size", "1000"))
        .and(query_param("fee", "15"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "chainFee": 4200,
            "serviceFee": 2500,
            "amount": 6700
        })))
        .mount(&server)
        .await;

    let request = InscriptionPriceRequest {
        size: 1000,
        fee: 15,
        ..Default::default()
    };
    let price = client_for(&server).get_price(&request).await.expect("price");
    assert_eq!(price.chain_fee, Some(4200));
    assert_eq!(price.service_fee, Some(2500));
    assert_eq!(price.amount, Some(6700));
}

#[tokio::test]
async fn non_success_status_surfaces_as_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/order"))
        .respond_with(ResponseTemplate::new(404).set_body_string("order not found"))
        .mount(&server)
        .await;

    let error = client_for(&server)
        .get_order("missing")
        .await
        .expect_err("should fail");
    assert!(error.is_transport());
    assert_eq!(error.status_code(), Some(404));
    assert_eq!(error.status_text(), Some("Not Found"));
    assert!(error.to_string().contains("order not found"));
}

#[tokio::test]
async fn connection_failure_yields_error_without_status() {
    // Reserved discard port, nothing listens there.
    let client = InscriptionClient::with_base_url("test-key", "http://127.0.0.1:9")
        .expect("client builds");

    let error = client.get_order("any").await.expect_err("should fail");
    assert!(error.is_transport());
    assert_eq!(error.status_code(), None);
    assert_eq!(error.status_text(), None);
}

#[tokio::test]
async fn collection_create_submits_flattened_form_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/collectioncreate"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let collection = InscriptionCollectionCreateRequest {
        name: "X".to_owned(),
        files: vec![
            InscriptionFile {
                name: "1.png".to_owned(),
                size: 11,
                content_type: "image/png".to_owned(),
                ..Default::default()
            },
            InscriptionFile {
                name: "2.png".to_owned(),
                size: 22,
                content_type: "image/png".to_owned(),
                ..Default::default()
            },
        ],
        ..Default::default()
    };
    let response = client_for(&server)
        .create_collection(&collection)
        .await
        .expect("collection");
    assert_eq!(response.status.as_deref(), Some("ok"));

    let requests = server.received_requests().await.expect("recording enabled");
    let sent: Vec<(String, String)> = url::form_urlencoded::parse(&requests[0].body)
        .into_owned()
        .collect();
    let value_of = |key: &str| {
        sent.iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    };

    assert_eq!(value_of("name"), Some("X"));
    assert_eq!(value_of("files[0][name]"), Some("1.png"));
    assert_eq!(value_of("files[0][size]"), Some("11"));
    assert_eq!(value_of("files[1][name]"), Some("2.png"));
    assert_eq!(value_of("files[1][size]"), Some("22"));
    assert_eq!(value_of("files"), None);
}

#[tokio::test]
async fn concurrent_calls_receive_their_own_responses() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/order"))
        .and(query_param("id", "a"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "a"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/order"))
        .and(query_param("id", "b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "b"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let (first, second) = tokio::join!(client.get_order("a"), client.get_order("b"));
    assert_eq!(first.expect("order a").id, "a");
    assert_eq!(second.expect("order b").id, "b");
}

#[tokio::test]
async fn api_key_and_user_agent_are_attached_to_every_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/inventory"))
        .and(header("x-api-key", "test-key"))
        .and(header("user-agent", ordinalsbot_client::user_agent().as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let inventory = client_for(&server).get_inventory().await.expect("inventory");
    assert!(inventory.is_empty());
}

#[tokio::test]
async fn raw_transport_requests_share_the_normalization() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/undocumented"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"ok": true}})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let body = client
        .transport()
        .request_json(reqwest::Method::GET, "/undocumented", None)
        .await
        .expect("raw request");
    assert_eq!(body, json!({"ok": true}));
}

#[test]
fn live_environment_selects_production_base_url() {
    let client = InscriptionClient::new("key", InscriptionEnv::Live).expect("client builds");
    assert_eq!(
        client.transport().base_url().as_str(),
        "https://api.ordinalsbot.com/"
    );

    let client = InscriptionClient::new("key", "staging".parse().expect("parses"))
        .expect("client builds");
    assert_eq!(
        client.transport().base_url().as_str(),
        "https://testnet-api.ordinalsbot.com/"
    );
}
