use simdash_models::ConnectionStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Connectivity {
    /// No poll has completed yet.
    Unknown,
    Connected,
    Disconnected,
}

/// The header line: indicator, port label and message count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub connectivity: Connectivity,
    pub indicator: &'static str,
    pub port_label: String,
    pub count_label: String,
}

pub fn status_view(status: Option<&ConnectionStatus>) -> StatusView {
    let Some(status) = status else {
        return StatusView {
            connectivity: Connectivity::Unknown,
            indicator: "● Checking...",
            port_label: String::new(),
            count_label: String::new(),
        };
    };

    let (connectivity, indicator, port_label) = if status.connected {
        (
            Connectivity::Connected,
            "● Connected",
            format!("Port: {}", status.port.as_deref().unwrap_or("unknown")),
        )
    } else {
        (
            Connectivity::Disconnected,
            "● Disconnected",
            "No modem detected".to_string(),
        )
    };

    StatusView {
        connectivity,
        indicator,
        port_label,
        count_label: format!("{} messages", status.message_count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn before_first_poll_is_unknown() {
        let view = status_view(None);
        assert_eq!(view.connectivity, Connectivity::Unknown);
        assert!(view.count_label.is_empty());
    }

    #[test]
    fn connected_shows_port_and_count() {
        let view = status_view(Some(&ConnectionStatus {
            connected: true,
            port: Some("/dev/ttyUSB2".to_string()),
            message_count: 12,
        }));
        assert_eq!(view.connectivity, Connectivity::Connected);
        assert_eq!(view.indicator, "● Connected");
        assert_eq!(view.port_label, "Port: /dev/ttyUSB2");
        assert_eq!(view.count_label, "12 messages");
    }

    #[test]
    fn disconnected_shows_placeholder() {
        let view = status_view(Some(&ConnectionStatus::default()));
        assert_eq!(view.connectivity, Connectivity::Disconnected);
        assert_eq!(view.port_label, "No modem detected");
        assert_eq!(view.count_label, "0 messages");
    }
}
