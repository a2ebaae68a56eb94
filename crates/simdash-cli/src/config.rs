//! Dashboard configuration.
//!
//! Built from environment variables at startup; command-line flags are
//! applied on top by `main`.

use std::time::Duration;

/// Runtime settings for the dashboard and the one-shot commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Base URL of the dashboard service.
    pub base_url: String,
    /// How often the connection status is polled.
    pub status_interval: Duration,
    /// How often the message feed is reloaded.
    pub messages_interval: Duration,
    /// How long a notice stays visible.
    pub notice_ttl: Duration,
    /// Per-request timeout; `None` keeps the HTTP client default.
    pub request_timeout: Option<Duration>,
    /// UI redraw tick.
    pub tick_rate: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            status_interval: Duration::from_millis(3000),
            messages_interval: Duration::from_millis(5000),
            notice_ttl: Duration::from_millis(5000),
            request_timeout: None,
            tick_rate: Duration::from_millis(250),
        }
    }
}

impl DashboardConfig {
    /// Build the configuration from environment variables.
    ///
    /// | Variable                       | Default                 |
    /// |--------------------------------|-------------------------|
    /// | `SIMDASH_URL`                  | `http://127.0.0.1:5000` |
    /// | `SIMDASH_STATUS_INTERVAL_MS`   | `3000`                  |
    /// | `SIMDASH_MESSAGES_INTERVAL_MS` | `5000`                  |
    /// | `SIMDASH_NOTICE_MS`            | `5000`                  |
    /// | `SIMDASH_TIMEOUT_MS`           | unset (client default)  |
    ///
    /// Unparseable or zero durations fall back to the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let millis = |key: &str| {
            lookup(key)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .filter(|ms| *ms > 0)
                .map(Duration::from_millis)
        };

        Self {
            base_url: lookup("SIMDASH_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.base_url),
            status_interval: millis("SIMDASH_STATUS_INTERVAL_MS")
                .unwrap_or(defaults.status_interval),
            messages_interval: millis("SIMDASH_MESSAGES_INTERVAL_MS")
                .unwrap_or(defaults.messages_interval),
            notice_ttl: millis("SIMDASH_NOTICE_MS").unwrap_or(defaults.notice_ttl),
            request_timeout: millis("SIMDASH_TIMEOUT_MS"),
            tick_rate: defaults.tick_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let cfg = DashboardConfig::from_lookup(lookup_from(&[]));
        assert_eq!(cfg, DashboardConfig::default());
        assert_eq!(cfg.status_interval, Duration::from_secs(3));
        assert_eq!(cfg.messages_interval, Duration::from_secs(5));
        assert_eq!(cfg.notice_ttl, Duration::from_secs(5));
        assert!(cfg.request_timeout.is_none());
    }

    #[test]
    fn variables_override_defaults() {
        let cfg = DashboardConfig::from_lookup(lookup_from(&[
            ("SIMDASH_URL", "http://modem.local:8080"),
            ("SIMDASH_STATUS_INTERVAL_MS", "1000"),
            ("SIMDASH_MESSAGES_INTERVAL_MS", "2000"),
            ("SIMDASH_NOTICE_MS", "750"),
            ("SIMDASH_TIMEOUT_MS", "1500"),
        ]));
        assert_eq!(cfg.base_url, "http://modem.local:8080");
        assert_eq!(cfg.status_interval, Duration::from_millis(1000));
        assert_eq!(cfg.messages_interval, Duration::from_millis(2000));
        assert_eq!(cfg.notice_ttl, Duration::from_millis(750));
        assert_eq!(cfg.request_timeout, Some(Duration::from_millis(1500)));
    }

    #[test]
    fn bad_values_fall_back() {
        let cfg = DashboardConfig::from_lookup(lookup_from(&[
            ("SIMDASH_URL", "  "),
            ("SIMDASH_STATUS_INTERVAL_MS", "soon"),
            ("SIMDASH_NOTICE_MS", "0"),
        ]));
        assert_eq!(cfg.base_url, "http://127.0.0.1:5000");
        assert_eq!(cfg.status_interval, Duration::from_secs(3));
        assert_eq!(cfg.notice_ttl, Duration::from_secs(5));
    }
}
