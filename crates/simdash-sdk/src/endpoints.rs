//! Canonical HTTP paths of the dashboard API.
//!
//! Every URL the SDK requests is built through [`ApiPaths`], so the client,
//! the mock service and the tests agree on a single layout.
//!
//! # Path layout
//!
//! ```text
//! GET  {base}/api/status
//! GET  {base}/api/messages
//! GET  {base}/api/contacts
//! POST {base}/api/send
//! POST {base}/api/connect
//! ```

/// Central authority for all API paths.
///
/// # Examples
///
/// ```
/// use simdash_sdk::ApiPaths;
///
/// assert_eq!(ApiPaths::STATUS, "/api/status");
/// assert_eq!(
///     ApiPaths::url("http://127.0.0.1:5000", ApiPaths::SEND),
///     "http://127.0.0.1:5000/api/send",
/// );
/// ```
pub struct ApiPaths;

impl ApiPaths {
    /// Connection state and message count.
    pub const STATUS: &'static str = "/api/status";
    /// Current message collection.
    pub const MESSAGES: &'static str = "/api/messages";
    /// Known contacts for autocomplete.
    pub const CONTACTS: &'static str = "/api/contacts";
    /// Submit an outgoing SMS.
    pub const SEND: &'static str = "/api/send";
    /// Ask the service to detect and open the modem.
    pub const CONNECT: &'static str = "/api/connect";

    /// Join a normalized base URL and an API path.
    pub fn url(base: &str, path: &str) -> String {
        format!("{base}{path}")
    }

    /// Normalize a base URL: trimmed, no trailing slash.
    ///
    /// Returns `None` unless the scheme is `http` or `https` and a host
    /// follows it.
    pub fn normalize_base(base: &str) -> Option<String> {
        let base = base.trim().trim_end_matches('/');
        let rest = base
            .strip_prefix("http://")
            .or_else(|| base.strip_prefix("https://"))?;
        if rest.is_empty() || rest.starts_with('/') {
            return None;
        }
        Some(base.to_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_under_api() {
        for p in [
            ApiPaths::STATUS,
            ApiPaths::MESSAGES,
            ApiPaths::CONTACTS,
            ApiPaths::SEND,
            ApiPaths::CONNECT,
        ] {
            assert!(p.starts_with("/api/"), "{p}");
        }
    }

    #[test]
    fn trailing_slash_is_removed() {
        assert_eq!(
            ApiPaths::normalize_base("http://modem.local:5000/ "),
            Some("http://modem.local:5000".to_string())
        );
    }

    #[test]
    fn https_is_accepted() {
        assert!(ApiPaths::normalize_base("https://dash.example.com").is_some());
    }

    #[test]
    fn missing_scheme_or_host_is_rejected() {
        assert_eq!(ApiPaths::normalize_base("127.0.0.1:5000"), None);
        assert_eq!(ApiPaths::normalize_base("ftp://host"), None);
        assert_eq!(ApiPaths::normalize_base("http://"), None);
        assert_eq!(ApiPaths::normalize_base("http:///api"), None);
    }

    #[test]
    fn url_joins_base_and_path() {
        assert_eq!(
            ApiPaths::url("https://dash.example.com", ApiPaths::CONTACTS),
            "https://dash.example.com/api/contacts"
        );
    }
}
