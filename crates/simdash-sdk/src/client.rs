//! High-level HTTP client for the SMS dashboard service.
//!
//! [`DashboardClient`] wraps a shared `reqwest::Client` and exposes one
//! typed method per API endpoint.  It is cheap to clone; every poll or
//! send task gets its own clone and runs independently.
//!
//! # Typical usage
//!
//! ```rust,no_run
//! use simdash_models::SendRequest;
//! use simdash_sdk::DashboardClient;
//!
//! # async fn run() -> Result<(), simdash_sdk::SdkError> {
//! let client = DashboardClient::new("http://127.0.0.1:5000")?;
//!
//! let status = client.status().await?;
//! println!("connected: {}", status.connected);
//!
//! let req = SendRequest::new("+15550100", "hello").expect("non-empty");
//! let result = client.send(&req).await?;
//! println!("sent: {}", result.success);
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use serde::de::DeserializeOwned;
use simdash_models::{
    ConnectResult, ConnectionStatus, ContactBook, ContactList, Message, MessageList, SendRequest,
    SendResult,
};
use tracing::debug;

use crate::endpoints::ApiPaths;
use crate::error::SdkError;

/// A client bound to one dashboard service.
#[derive(Clone, Debug)]
pub struct DashboardClient {
    http: reqwest::Client,
    base_url: String,
}

impl DashboardClient {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Create a client using the transport's default timeouts.
    pub fn new(base_url: &str) -> Result<Self, SdkError> {
        Self::with_timeout(base_url, None)
    }

    /// Create a client, optionally bounding every request by `timeout`.
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self, SdkError> {
        let base_url = ApiPaths::normalize_base(base_url).ok_or_else(|| {
            SdkError::Config(format!(
                "base URL must be http(s)://host[:port], got {base_url:?}"
            ))
        })?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self { http, base_url })
    }

    // ------------------------------------------------------------------
    // Read endpoints
    // ------------------------------------------------------------------

    /// `GET /api/status`.
    pub async fn status(&self) -> Result<ConnectionStatus, SdkError> {
        self.get_json(ApiPaths::STATUS).await
    }

    /// `GET /api/messages`, in server order.
    pub async fn messages(&self) -> Result<Vec<Message>, SdkError> {
        let list: MessageList = self.get_json(ApiPaths::MESSAGES).await?;
        Ok(list.messages)
    }

    /// `GET /api/contacts`, frozen into a read-only snapshot.
    pub async fn contacts(&self) -> Result<ContactBook, SdkError> {
        let list: ContactList = self.get_json(ApiPaths::CONTACTS).await?;
        Ok(list.into())
    }

    // ------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------

    /// `POST /api/send`.
    ///
    /// The service reports application failures (validation, modem not
    /// connected, modem error) as a [`SendResult`] with `success: false`
    /// and a 4xx/5xx status.  Those come back as `Ok`; only transport and
    /// parse failures are `Err`.
    pub async fn send(&self, request: &SendRequest) -> Result<SendResult, SdkError> {
        let url = ApiPaths::url(&self.base_url, ApiPaths::SEND);
        let res = self.http.post(&url).json(request).send().await?;
        debug!(%url, status = %res.status(), "send answered");
        let bytes = res.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// `POST /api/connect`: ask the service to detect and open the modem.
    ///
    /// Like [`send`](Self::send), failure bodies are returned as `Ok`.
    pub async fn connect_modem(&self) -> Result<ConnectResult, SdkError> {
        let url = ApiPaths::url(&self.base_url, ApiPaths::CONNECT);
        let res = self.http.post(&url).send().await?;
        debug!(%url, status = %res.status(), "connect answered");
        let bytes = res.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// The normalized base URL (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    async fn get_json<T: DeserializeOwned>(&self, path: &'static str) -> Result<T, SdkError> {
        let url = ApiPaths::url(&self.base_url, path);
        let res = self.http.get(&url).send().await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(SdkError::Status {
                path,
                status: status.as_u16(),
                body,
            });
        }

        let bytes = res.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let client = DashboardClient::new("http://127.0.0.1:5000/").unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:5000");
    }

    #[test]
    fn bad_base_url_is_config_error() {
        let err = DashboardClient::new("localhost:5000").unwrap_err();
        assert!(matches!(err, SdkError::Config(_)), "{err}");
    }

    #[test]
    fn timeout_is_accepted() {
        let client =
            DashboardClient::with_timeout("https://dash.example.com", Some(Duration::from_secs(2)))
                .unwrap();
        assert_eq!(client.base_url(), "https://dash.example.com");
    }
}
