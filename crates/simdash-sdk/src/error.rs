//! SDK error types.
//!
//! [`SdkError`] is the single error type returned by every fallible
//! operation in the SDK.  It wraps transport, status and serialization
//! failures into a unified enum.

/// Error type for all SDK operations.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    /// Invalid configuration (e.g. a base URL without `http://`).
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP transport failure: connection refused, timeout, bad TLS…
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A read endpoint answered with a non-success status.
    #[error("{path} returned HTTP {status}: {body}")]
    Status {
        /// Requested path.
        path: &'static str,
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_display() {
        let err = SdkError::Status {
            path: "/api/status",
            status: 502,
            body: "bad gateway".into(),
        };
        assert_eq!(err.to_string(), "/api/status returned HTTP 502: bad gateway");
    }

    #[test]
    fn serialization_error_wraps_serde() {
        let err: SdkError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(err.to_string().starts_with("serialization error:"));
    }
}
