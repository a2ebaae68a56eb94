//! # simdash SDK
//!
//! Async client for the SIM7600 SMS dashboard service.
//!
//! The SDK provides:
//!
//! * [`DashboardClient`]: typed access to the status, messages, contacts,
//!   send and connect endpoints.
//! * [`ApiPaths`]: canonical endpoint paths shared by clients, the mock
//!   service and tests.
//! * [`SdkError`]: unified error type for all SDK operations.
//!
//! Wire types from [`simdash_models`] are re-exported for convenience.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use simdash_sdk::DashboardClient;
//!
//! # async fn run() -> Result<(), simdash_sdk::SdkError> {
//! let client = DashboardClient::new("http://127.0.0.1:5000")?;
//! for message in client.messages().await? {
//!     println!("{}: {}", message.counterpart(), message.text);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod endpoints;
pub mod error;

pub use client::DashboardClient;
pub use endpoints::ApiPaths;
pub use error::SdkError;

// Re-export wire types for ergonomic usage.
pub use simdash_models::{
    ConnectResult, ConnectionStatus, ContactBook, Direction, Message, SendRequest, SendResult,
};
