//! SMS message types returned by `GET /api/messages`.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// Whether a message left through the modem or arrived on it.
///
/// Anything other than `"sent"` on the wire is treated as received, the
/// same way the dashboard has always rendered it.
///
/// # Examples
///
/// ```
/// use simdash_models::Direction;
///
/// let d: Direction = serde_json::from_str("\"sent\"").unwrap();
/// assert_eq!(d, Direction::Sent);
/// assert_eq!(Direction::Received.to_string(), "received");
/// ```
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase", from = "String")]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    /// Outgoing message submitted through the dashboard.
    Sent,
    /// Incoming message pushed by the modem.
    #[default]
    Received,
}

impl From<String> for Direction {
    fn from(s: String) -> Self {
        if s == "sent" {
            Self::Sent
        } else {
            Self::Received
        }
    }
}

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

/// A single SMS as reported by the service.
///
/// Immutable once fetched. The service omits `sender` on sent messages and
/// `recipient` on received ones; absent fields become empty strings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
    /// Sent or received.
    #[serde(default)]
    pub direction: Direction,
    /// Originating number (received messages).
    #[serde(default)]
    pub sender: String,
    /// Destination number (sent messages).
    #[serde(default)]
    pub recipient: String,
    /// Message body.
    #[serde(default)]
    pub text: String,
    /// `DD/MM/YY,HH:MM:SS±TZ` for received messages, ISO-8601-like for sent.
    #[serde(default)]
    pub timestamp: String,
}

impl Message {
    /// Whether this message was sent from the dashboard.
    pub fn is_sent(&self) -> bool {
        self.direction == Direction::Sent
    }

    /// The other party: recipient for sent messages, sender otherwise.
    pub fn counterpart(&self) -> &str {
        if self.is_sent() {
            &self.recipient
        } else {
            &self.sender
        }
    }
}

// ---------------------------------------------------------------------------
// MessageList
// ---------------------------------------------------------------------------

/// Body of `GET /api/messages`, in server order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageList {
    /// The current message collection.
    pub messages: Vec<Message>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
