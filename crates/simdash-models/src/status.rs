//! Modem connection status types.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ConnectionStatus
// ---------------------------------------------------------------------------

/// Body of `GET /api/status`.
///
/// Replaced wholesale on every poll; there are no partial updates.
///
/// # Examples
///
/// ```
/// use simdash_models::ConnectionStatus;
///
/// let status: ConnectionStatus =
///     serde_json::from_str(r#"{"connected":true,"port":"COM10","message_count":3}"#).unwrap();
/// assert!(status.connected);
/// assert_eq!(status.port.as_deref(), Some("COM10"));
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ConnectionStatus {
    /// Whether the service currently holds an open modem.
    pub connected: bool,
    /// Serial port of the modem, `null` when nothing is attached.
    #[serde(default)]
    pub port: Option<String>,
    /// Number of messages held by the service.
    #[serde(default)]
    pub message_count: u64,
}

// ---------------------------------------------------------------------------
// ConnectResult
// ---------------------------------------------------------------------------

/// Body of `POST /api/connect`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ConnectResult {
    /// Whether a modem was found and opened.
    pub success: bool,
    /// Port the modem was opened on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    /// Failure description when `success` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
