//! Outgoing SMS request / result types for `POST /api/send`.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

// ---------------------------------------------------------------------------
// SendRequest
// ---------------------------------------------------------------------------

/// Body of `POST /api/send`.
///
/// Built through [`SendRequest::new`], which trims both fields and rejects
/// empty values, so a request that reaches the wire is always well-formed.
///
/// # Examples
///
/// ```
/// use simdash_models::SendRequest;
///
/// let req = SendRequest::new("  +15550100 ", " hi\n").unwrap();
/// assert_eq!(req.phone, "+15550100");
/// assert_eq!(req.message, "hi");
///
/// assert!(SendRequest::new("+15550100", "   ").is_err());
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SendRequest {
    /// Recipient phone number, trimmed.
    pub phone: String,
    /// Message body, trimmed.
    pub message: String,
}

impl SendRequest {
    /// Trim and validate a phone/message pair.
    pub fn new(phone: &str, message: &str) -> Result<Self, ModelError> {
        let phone = phone.trim();
        let message = message.trim();

        if phone.is_empty() {
            return Err(ModelError::EmptyField {
                field: "phone".into(),
            });
        }
        if message.is_empty() {
            return Err(ModelError::EmptyField {
                field: "message".into(),
            });
        }

        Ok(Self {
            phone: phone.to_string(),
            message: message.to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// SendResult
// ---------------------------------------------------------------------------

fn default_ascii_only() -> bool {
    true
}

/// Body returned by `POST /api/send`, for success and failure alike.
///
/// The service answers 400/500 with the same shape, so callers parse it
/// regardless of HTTP status.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SendResult {
    /// Whether the modem accepted the message.
    pub success: bool,
    /// Failure description when `success` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Whether the submitted text was pure ASCII. Absent means `true`.
    #[serde(default = "default_ascii_only")]
    pub ascii_only: bool,
    /// ASCII-folded text actually transmitted, when it differs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}

impl SendResult {
    /// A successful result.
    pub fn sent(ascii_only: bool, preview: Option<String>) -> Self {
        Self {
            success: true,
            error: None,
            ascii_only,
            preview,
        }
    }

    /// A failed result carrying the service's description.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ascii_only: true,
            preview: None,
        }
    }

    /// The substituted text, if the service folded non-ASCII characters.
    pub fn converted_preview(&self) -> Option<&str> {
        if self.ascii_only {
            None
        } else {
            self.preview.as_deref().filter(|p| !p.is_empty())
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
