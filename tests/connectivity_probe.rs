use std::sync::Arc;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bitget_api_client::auth::StaticCredentials;
use bitget_api_client::spot::rest::SpotRestClient;
use bitget_api_client::spot::rest::market::ServerTime;

async fn client_for(base_url: impl Into<String>) -> SpotRestClient {
    let credentials = Arc::new(StaticCredentials::new("test_key", "test_secret", "test_pass"));
    SpotRestClient::builder(credentials)
        .base_url(base_url)
        .build()
        .await
}

async fn mount_time(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/api/v2/public/time"))
        .respond_with(template)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_probe_success() {
    let server = MockServer::start().await;
    mount_time(
        &server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": "00000",
            "msg": "success",
            "requestTime": 1_688_008_631_614u64,
            "data": { "serverTime": "1688008631614" }
        })),
    )
    .await;

    let client = client_for(server.uri()).await;
    assert!(client.is_connected());
    assert!(client.ping().await);

    // The probe is unauthenticated.
    let requests = server.received_requests().await.unwrap();
    assert!(requests.iter().all(|r| !r.headers.contains_key("access-sign")));
}

#[tokio::test]
async fn test_probe_error_code_is_false() {
    let server = MockServer::start().await;
    mount_time(
        &server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": "40001",
            "msg": "error",
            "data": null
        })),
    )
    .await;

    let client = client_for(server.uri()).await;
    assert!(!client.is_connected());
}

#[tokio::test]
async fn test_probe_non_200_is_false() {
    let server = MockServer::start().await;
    mount_time(
        &server,
        ResponseTemplate::new(503).set_body_json(serde_json::json!({ "code": "00000" })),
    )
    .await;

    let client = client_for(server.uri()).await;
    assert!(!client.is_connected());
}

#[tokio::test]
async fn test_probe_malformed_body_is_false() {
    let server = MockServer::start().await;
    mount_time(&server, ResponseTemplate::new(200).set_body_string("not json")).await;

    let client = client_for(server.uri()).await;
    assert!(!client.is_connected());
}

#[tokio::test]
async fn test_probe_unreachable_is_false() {
    let client = client_for("http://127.0.0.1:1").await;
    assert!(!client.is_connected());
    assert!(!client.ping().await);
}

#[tokio::test]
async fn test_ping_does_not_change_stored_flag() {
    let server = MockServer::start().await;
    let client = client_for(server.uri()).await;
    assert!(!client.is_connected());

    mount_time(
        &server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({ "code": "00000" })),
    )
    .await;

    assert!(client.ping().await);
    assert!(!client.is_connected());
}

#[tokio::test]
async fn test_server_time_wrapper() {
    let server = MockServer::start().await;
    mount_time(
        &server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": "00000",
            "msg": "success",
            "requestTime": 1_688_008_631_614u64,
            "data": { "serverTime": "1688008631614" }
        })),
    )
    .await;

    let client = client_for(server.uri()).await;
    let time = client
        .market()
        .server_time()
        .await
        .unwrap()
        .envelope::<ServerTime>()
        .unwrap()
        .into_result()
        .unwrap()
        .unwrap();
    assert_eq!(time.server_time, 1_688_008_631_614);
}
