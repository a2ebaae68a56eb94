//! End-to-end checks of `DashboardClient` against the in-memory mock.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use mock_modem::{router, MockConfig, MockModem};
use simdash_sdk::{DashboardClient, Direction, SdkError, SendRequest};

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn start(config: MockConfig) -> (DashboardClient, Arc<MockModem>) {
    let modem = Arc::new(MockModem::new(&config));
    let base = serve(router(modem.clone())).await;
    (DashboardClient::new(&base).unwrap(), modem)
}

#[tokio::test]
async fn status_messages_and_contacts() {
    let (client, modem) = start(MockConfig::default()).await;
    modem.receive("+15550100", "hello", "25/10/18,20:08:02+08").await;

    let status = client.status().await.unwrap();
    assert!(status.connected);
    assert_eq!(status.message_count, 1);

    let messages = client.messages().await.unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].direction, Direction::Received);
    assert_eq!(messages[0].counterpart(), "+15550100");

    let contacts = client.contacts().await.unwrap();
    assert_eq!(contacts.iter().collect::<Vec<_>>(), vec!["+15550100"]);
}

#[tokio::test]
async fn send_success_reports_preview() {
    let (client, modem) = start(MockConfig::default()).await;

    let req = SendRequest::new("+15550100", "café ☎ 123").unwrap();
    let res = client.send(&req).await.unwrap();
    assert!(res.success);
    assert_eq!(res.converted_preview(), Some("cafe ? 123"));

    let history = modem.history().await;
    assert_eq!(history.len(), 1);
    assert!(history[0].is_sent());
}

#[tokio::test]
async fn send_failure_body_is_ok_not_err() {
    let (client, modem) = start(MockConfig::default()).await;
    modem.fail_sends_with(Some("modem busy")).await;

    let req = SendRequest::new("+15550100", "hi").unwrap();
    let res = client.send(&req).await.unwrap();
    assert!(!res.success);
    assert_eq!(res.error.as_deref(), Some("modem busy"));
}

#[tokio::test]
async fn connect_modem_round_trip() {
    let (client, _) = start(MockConfig {
        auto_connect: false,
        ..MockConfig::default()
    })
    .await;

    assert!(!client.status().await.unwrap().connected);
    let res = client.connect_modem().await.unwrap();
    assert!(res.success);
    assert!(client.status().await.unwrap().connected);
}

#[tokio::test]
async fn non_success_status_is_status_error() {
    let base = serve(Router::new()).await;
    let client = DashboardClient::new(&base).unwrap();

    let err = client.status().await.unwrap_err();
    assert!(
        matches!(err, SdkError::Status { path: "/api/status", status: 404, .. }),
        "{err}"
    );
}

#[tokio::test]
async fn malformed_body_is_serialization_error() {
    let app = Router::new().route("/api/messages", get(|| async { "not json" }));
    let base = serve(app).await;
    let client = DashboardClient::new(&base).unwrap();

    let err = client.messages().await.unwrap_err();
    assert!(matches!(err, SdkError::Serialization(_)), "{err}");
}

#[tokio::test]
async fn unreachable_service_is_http_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = DashboardClient::new(&format!("http://{addr}")).unwrap();
    let req = SendRequest::new("+15550100", "hi").unwrap();
    let err = client.send(&req).await.unwrap_err();
    assert!(matches!(err, SdkError::Http(_)), "{err}");
}
