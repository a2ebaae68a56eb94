//! In-memory stand-in for the SMS dashboard service.
//!
//! Serves the same five endpoints as the real service without touching a
//! serial port: messages live in a bounded `Vec`, "connecting" flips a flag,
//! and sends are folded to ASCII and appended to the log. Used for local
//! development of the dashboard and by the SDK integration tests.

use std::collections::BTreeSet;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use chrono::Local;
use serde::Deserialize;
use serde_json::{json, Value};
use simdash_models::{
    is_ascii_only, transliteration_preview, ConnectResult, ConnectionStatus, ContactList,
    Direction, Message, MessageList, SendRequest, SendResult,
};
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Messages kept in memory; older ones are dropped.
pub const HISTORY_LIMIT: usize = 100;
/// Messages returned by `GET /api/messages`, newest first.
pub const FEED_LIMIT: usize = 50;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Start-up parameters of the mock.
#[derive(Debug, Clone)]
pub struct MockConfig {
    /// Port reported when a modem is "detected"; `None` simulates no modem.
    pub modem_port: Option<String>,
    /// Open the modem immediately instead of waiting for `POST /api/connect`.
    pub auto_connect: bool,
    /// Listen address of the binary.
    pub listen_addr: String,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            modem_port: Some("/dev/ttyUSB2".to_string()),
            auto_connect: true,
            listen_addr: "127.0.0.1:5000".to_string(),
        }
    }
}

impl MockConfig {
    /// Build the configuration from environment variables.
    ///
    /// | Variable                | Default          | Description                          |
    /// |-------------------------|------------------|--------------------------------------|
    /// | `MOCK_MODEM_ADDR`       | `127.0.0.1:5000` | HTTP listen address                  |
    /// | `MOCK_MODEM_PORT`       | `/dev/ttyUSB2`   | Reported port, `none` for no modem   |
    /// | `MOCK_MODEM_AUTOCONNECT`| `true`           | Connect at start-up                  |
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let listen_addr = std::env::var("MOCK_MODEM_ADDR").unwrap_or(defaults.listen_addr);
        let modem_port = match std::env::var("MOCK_MODEM_PORT") {
            Ok(v) if v.eq_ignore_ascii_case("none") || v.is_empty() => None,
            Ok(v) => Some(v),
            Err(_) => defaults.modem_port,
        };
        let auto_connect = std::env::var("MOCK_MODEM_AUTOCONNECT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.auto_connect);

        Self {
            modem_port,
            auto_connect,
            listen_addr,
        }
    }
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct Inner {
    connected_port: Option<String>,
    messages: Vec<Message>,
    send_failure: Option<String>,
}

/// Shared state behind every handler.
#[derive(Debug)]
pub struct MockModem {
    detectable_port: Option<String>,
    inner: Mutex<Inner>,
}

impl MockModem {
    /// Create the mock, connecting right away if configured to.
    pub fn new(config: &MockConfig) -> Self {
        let connected_port = if config.auto_connect {
            config.modem_port.clone()
        } else {
            None
        };
        Self {
            detectable_port: config.modem_port.clone(),
            inner: Mutex::new(Inner {
                connected_port,
                ..Inner::default()
            }),
        }
    }

    /// Record an incoming SMS as if the modem had pushed a `+CMT` line.
    pub async fn receive(&self, sender: &str, text: &str, modem_timestamp: &str) {
        let mut inner = self.inner.lock().await;
        push_bounded(
            &mut inner.messages,
            Message {
                direction: Direction::Received,
                sender: sender.to_string(),
                recipient: String::new(),
                text: text.to_string(),
                timestamp: modem_timestamp.to_string(),
            },
        );
    }

    /// Make every following send fail with `error` (`None` restores success).
    pub async fn fail_sends_with(&self, error: Option<&str>) {
        self.inner.lock().await.send_failure = error.map(str::to_string);
    }

    /// Copy of the full in-memory history, oldest first.
    pub async fn history(&self) -> Vec<Message> {
        self.inner.lock().await.messages.clone()
    }
}

fn push_bounded(messages: &mut Vec<Message>, message: Message) {
    messages.push(message);
    if messages.len() > HISTORY_LIMIT {
        let excess = messages.len() - HISTORY_LIMIT;
        messages.drain(..excess);
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the API router around shared state.
pub fn router(modem: Arc<MockModem>) -> Router {
    Router::new()
        .route("/api/status", get(status))
        .route("/api/messages", get(messages))
        .route("/api/contacts", get(contacts))
        .route("/api/send", post(send))
        .route("/api/connect", post(connect))
        .route("/mock/inbound", post(inbound))
        .with_state(modem)
}

// --- Endpoints ---

async fn status(State(modem): State<Arc<MockModem>>) -> Json<ConnectionStatus> {
    let inner = modem.inner.lock().await;
    Json(ConnectionStatus {
        connected: inner.connected_port.is_some(),
        port: inner.connected_port.clone(),
        message_count: inner.messages.len() as u64,
    })
}

async fn messages(State(modem): State<Arc<MockModem>>) -> Json<MessageList> {
    let inner = modem.inner.lock().await;
    let start = inner.messages.len().saturating_sub(FEED_LIMIT);
    let messages = inner.messages[start..].iter().rev().cloned().collect();
    Json(MessageList { messages })
}

async fn contacts(State(modem): State<Arc<MockModem>>) -> Json<ContactList> {
    let inner = modem.inner.lock().await;
    let unique: BTreeSet<&str> = inner
        .messages
        .iter()
        .map(Message::counterpart)
        .filter(|c| !c.is_empty())
        .collect();
    Json(ContactList {
        contacts: unique.into_iter().map(String::from).collect(),
    })
}

#[derive(Deserialize)]
struct SendBody {
    #[serde(default)]
    phone: String,
    #[serde(default)]
    message: String,
}

async fn send(
    State(modem): State<Arc<MockModem>>,
    Json(body): Json<SendBody>,
) -> (StatusCode, Json<SendResult>) {
    let Ok(request) = SendRequest::new(&body.phone, &body.message) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(SendResult::failed("Phone and message required")),
        );
    };

    let mut inner = modem.inner.lock().await;
    if inner.connected_port.is_none() {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(SendResult::failed("Modem not connected")),
        );
    }
    if let Some(error) = inner.send_failure.clone() {
        warn!(phone = %request.phone, %error, "simulated send failure");
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(SendResult::failed(error)));
    }

    let ascii_only = is_ascii_only(&request.message);
    let preview = transliteration_preview(&request.message);
    info!(phone = %request.phone, ascii_only, "SMS accepted");

    push_bounded(
        &mut inner.messages,
        Message {
            direction: Direction::Sent,
            sender: String::new(),
            recipient: request.phone,
            text: request.message,
            timestamp: Local::now()
                .naive_local()
                .format("%Y-%m-%dT%H:%M:%S%.6f")
                .to_string(),
        },
    );

    (StatusCode::OK, Json(SendResult::sent(ascii_only, preview)))
}

async fn connect(State(modem): State<Arc<MockModem>>) -> (StatusCode, Json<ConnectResult>) {
    let Some(port) = modem.detectable_port.clone() else {
        return (
            StatusCode::NOT_FOUND,
            Json(ConnectResult {
                success: false,
                port: None,
                error: Some("Modem not found".into()),
            }),
        );
    };

    modem.inner.lock().await.connected_port = Some(port.clone());
    info!(%port, "modem connected");
    (
        StatusCode::OK,
        Json(ConnectResult {
            success: true,
            port: Some(port),
            error: None,
        }),
    )
}

#[derive(Deserialize)]
struct InboundBody {
    sender: String,
    text: String,
    timestamp: Option<String>,
}

/// Development hook: inject an incoming SMS.
async fn inbound(
    State(modem): State<Arc<MockModem>>,
    Json(body): Json<InboundBody>,
) -> Json<Value> {
    let timestamp = body
        .timestamp
        .unwrap_or_else(|| Local::now().format("%d/%m/%y,%H:%M:%S+00").to_string());
    modem.receive(&body.sender, &body.text, &timestamp).await;
    Json(json!({ "success": true }))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;

    fn server_with(config: &MockConfig) -> (TestServer, Arc<MockModem>) {
        let modem = Arc::new(MockModem::new(config));
        let server = TestServer::new(router(modem.clone())).unwrap();
        (server, modem)
    }

    fn server() -> (TestServer, Arc<MockModem>) {
        server_with(&MockConfig::default())
    }

    #[tokio::test]
    async fn status_reports_port_and_count() {
        let (server, modem) = server();
        modem.receive("+15550100", "hi", "25/10/18,20:08:02+08").await;

        let status: ConnectionStatus = server.get("/api/status").await.json();
        assert!(status.connected);
        assert_eq!(status.port.as_deref(), Some("/dev/ttyUSB2"));
        assert_eq!(status.message_count, 1);
    }

    #[tokio::test]
    async fn disconnected_until_connect() {
        let (server, _) = server_with(&MockConfig {
            auto_connect: false,
            ..MockConfig::default()
        });

        let status: ConnectionStatus = server.get("/api/status").await.json();
        assert!(!status.connected);
        assert_eq!(status.port, None);

        let res = server.post("/api/connect").await;
        res.assert_status_ok();
        let body: ConnectResult = res.json();
        assert_eq!(body.port.as_deref(), Some("/dev/ttyUSB2"));

        let status: ConnectionStatus = server.get("/api/status").await.json();
        assert!(status.connected);
    }

    #[tokio::test]
    async fn connect_without_modem_is_not_found() {
        let (server, _) = server_with(&MockConfig {
            modem_port: None,
            auto_connect: false,
            ..MockConfig::default()
        });
        let res = server.post("/api/connect").await;
        res.assert_status(StatusCode::NOT_FOUND);
        let body: ConnectResult = res.json();
        assert!(!body.success);
        assert_eq!(body.error.as_deref(), Some("Modem not found"));
    }

    #[tokio::test]
    async fn send_validates_fields() {
        let (server, modem) = server();
        let res = server
            .post("/api/send")
            .json(&json!({"phone": "  ", "message": "hi"}))
            .await;
        res.assert_status(StatusCode::BAD_REQUEST);
        let body: SendResult = res.json();
        assert_eq!(body.error.as_deref(), Some("Phone and message required"));
        assert!(modem.history().await.is_empty());
    }

    #[tokio::test]
    async fn send_requires_connection() {
        let (server, _) = server_with(&MockConfig {
            auto_connect: false,
            ..MockConfig::default()
        });
        let res = server
            .post("/api/send")
            .json(&json!({"phone": "+15550100", "message": "hi"}))
            .await;
        res.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: SendResult = res.json();
        assert_eq!(body.error.as_deref(), Some("Modem not connected"));
    }

    #[tokio::test]
    async fn send_folds_non_ascii() {
        let (server, modem) = server();
        let res = server
            .post("/api/send")
            .json(&json!({"phone": "+15550100", "message": " café ☎ 123 "}))
            .await;
        res.assert_status_ok();
        let body: SendResult = res.json();
        assert!(body.success);
        assert!(!body.ascii_only);
        assert_eq!(body.preview.as_deref(), Some("cafe ? 123"));

        let history = modem.history().await;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].direction, Direction::Sent);
        assert_eq!(history[0].recipient, "+15550100");
        assert_eq!(history[0].text, "café ☎ 123");
    }

    #[tokio::test]
    async fn simulated_failure_is_reported() {
        let (server, modem) = server();
        modem.fail_sends_with(Some("modem busy")).await;
        let res = server
            .post("/api/send")
            .json(&json!({"phone": "+15550100", "message": "hi"}))
            .await;
        let body: SendResult = res.json();
        assert!(!body.success);
        assert_eq!(body.error.as_deref(), Some("modem busy"));
    }

    #[tokio::test]
    async fn feed_is_newest_first_and_capped() {
        let (server, modem) = server();
        for i in 0..120 {
            modem
                .receive(&format!("+1555{i:04}"), &format!("msg {i}"), "01/01/25,00:00:00+00")
                .await;
        }

        assert_eq!(modem.history().await.len(), HISTORY_LIMIT);

        let list: MessageList = server.get("/api/messages").await.json();
        assert_eq!(list.messages.len(), FEED_LIMIT);
        assert_eq!(list.messages[0].text, "msg 119");
        assert_eq!(list.messages[FEED_LIMIT - 1].text, "msg 70");
    }

    #[tokio::test]
    async fn contacts_are_sorted_and_unique() {
        let (server, modem) = server();
        modem.receive("+15550200", "a", "01/01/25,00:00:00+00").await;
        modem.receive("+15550100", "b", "01/01/25,00:00:01+00").await;
        modem.receive("+15550200", "c", "01/01/25,00:00:02+00").await;
        server
            .post("/api/send")
            .json(&json!({"phone": "+15550300", "message": "d"}))
            .await
            .assert_status_ok();

        let list: ContactList = server.get("/api/contacts").await.json();
        assert_eq!(list.contacts, vec!["+15550100", "+15550200", "+15550300"]);
    }

    #[tokio::test]
    async fn inbound_hook_appends_message() {
        let (server, modem) = server();
        server
            .post("/mock/inbound")
            .json(&json!({"sender": "+15550100", "text": "ping", "timestamp": "25/10/18,20:08:02+08"}))
            .await
            .assert_status_ok();
        let history = modem.history().await;
        assert_eq!(history[0].timestamp, "25/10/18,20:08:02+08");
    }

    #[test]
    fn default_config_connects_on_ttyusb2() {
        let cfg = MockConfig::default();
        assert!(cfg.auto_connect);
        assert_eq!(cfg.modem_port.as_deref(), Some("/dev/ttyUSB2"));
        assert_eq!(cfg.listen_addr, "127.0.0.1:5000");
    }
}
