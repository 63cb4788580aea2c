use clicktodrink_client::{ApiClient, ApiConfig, ApiError, CommerceApi, LineItem, OrderRequest};
use httpmock::prelude::*;

fn client_for(server: &MockServer) -> ApiClient<ApiConfig> {
    ApiClient::new(ApiConfig::new(server.base_url(), "est-1"))
}

#[tokio::test]
async fn test_create_order_forwards_payload_unchanged() {
    let server = MockServer::start();
    let confirmation = serde_json::json!({"id": "o1", "status": "confirmed"});

    // The mock only matches when the transmitted body is structurally
    // equal to the request we built.
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/orders")
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "items": [{"productId": "p1", "quantity": 2}],
                "zoneId": "z9"
            }));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(confirmation.clone());
    });

    let order = OrderRequest::new(vec![LineItem::new("p1", 2)], "z9");
    let result = client_for(&server).create_order(&order).await.unwrap();

    mock.assert();
    assert_eq!(serde_json::to_value(&result).unwrap(), confirmation);
}

#[tokio::test]
async fn test_create_order_includes_variants_on_the_wire() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/orders").json_body(serde_json::json!({
            "items": [{"productId": "p7", "quantity": 1, "variants": {"size": "large"}}],
            "zoneId": "z2"
        }));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"id": "o2", "status": "pending"}));
    });

    let order = OrderRequest::new(
        vec![LineItem::new("p7", 1).with_variant("size", "large")],
        "z2",
    );
    client_for(&server).create_order(&order).await.unwrap();

    mock.assert();
}

#[tokio::test]
async fn test_invalid_order_is_forwarded_untouched() {
    // The gateway does not validate; the remote service is the one that
    // rejects an empty order.
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/orders")
            .json_body(serde_json::json!({"items": [], "zoneId": ""}));
        then.status(422).body("order has no items");
    });

    let order = OrderRequest::new(vec![], "");
    assert!(order.validate().is_err());

    let err = client_for(&server).create_order(&order).await.unwrap_err();

    mock.assert();
    match err {
        ApiError::Remote { status, body } => {
            assert_eq!(status.as_u16(), 422);
            assert_eq!(body, "order has no items");
        }
        other => panic!("expected Remote, got {:?}", other),
    }
}

#[tokio::test]
async fn test_remote_500_surfaces_as_rejection() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/orders");
        then.status(500).body("internal error");
    });

    let order = OrderRequest::new(vec![LineItem::new("p1", 1)], "z9");
    let err = client_for(&server).create_order(&order).await.unwrap_err();

    assert!(err.is_remote_rejection());
    match err {
        ApiError::Remote { status, body } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "internal error");
        }
        _ => unreachable!(),
    }
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let client = ApiClient::new(ApiConfig::new("http://127.0.0.1:1", "est-1"));
    let order = OrderRequest::new(vec![LineItem::new("p1", 1)], "z9");

    let err = client.create_order(&order).await.unwrap_err();
    assert!(err.is_network(), "expected Network, got {:?}", err);
}

#[tokio::test]
async fn test_malformed_success_body_is_serialization_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/orders");
        then.status(200).body("not json");
    });

    let order = OrderRequest::new(vec![LineItem::new("p1", 1)], "z9");
    let err = client_for(&server).create_order(&order).await.unwrap_err();

    assert!(
        matches!(err, ApiError::Serialization(_)),
        "expected Serialization, got {:?}",
        err
    );
}
