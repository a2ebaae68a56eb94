#![deny(missing_docs)]

//! # simdash models
//!
//! Wire types for the SIM7600 SMS dashboard HTTP API, plus the small text
//! helpers every consumer of that API needs (ASCII folding, modem timestamp
//! formatting).
//!
//! ## Endpoint → type map
//!
//! ```text
//! GET  /api/status    → ConnectionStatus
//! GET  /api/messages  → MessageList { messages: [Message] }
//! GET  /api/contacts  → ContactList { contacts: [String] } → ContactBook
//! POST /api/send      SendRequest → SendResult
//! POST /api/connect   → ConnectResult
//! ```
//!
//! ## Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`status`] | `ConnectionStatus`, `ConnectResult` |
//! | [`message`] | `Direction`, `Message`, `MessageList` |
//! | [`contact`] | `ContactList`, `ContactBook` snapshot |
//! | [`send`] | `SendRequest`, `SendResult` |
//! | [`charset`] | non-ASCII detection and ASCII folding |
//! | [`timestamp`] | modem and sent-time display formatting |

pub mod charset;
pub mod contact;
pub mod error;
pub mod message;
pub mod send;
pub mod status;
pub mod timestamp;

// Re-export all public types at crate root for convenience.
pub use charset::*;
pub use contact::*;
pub use error::*;
pub use message::*;
pub use send::*;
pub use status::*;
pub use timestamp::*;
