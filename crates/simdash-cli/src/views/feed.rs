use simdash_models::{format_modem_timestamp, format_sent_timestamp, Message};

pub const NO_MESSAGES: &str = "No messages yet";

/// One rendered feed entry. Text fields are raw; escaping is the
/// renderer's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRow {
    pub sent: bool,
    pub icon: &'static str,
    /// `"To: "` for sent messages, empty otherwise.
    pub prefix: &'static str,
    pub contact: String,
    pub time: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedView {
    /// Placeholder row, shown for an empty collection.
    Empty,
    Rows(Vec<FeedRow>),
}

pub fn feed_view(messages: &[Message]) -> FeedView {
    if messages.is_empty() {
        return FeedView::Empty;
    }
    FeedView::Rows(messages.iter().map(feed_row).collect())
}

fn feed_row(msg: &Message) -> FeedRow {
    let sent = msg.is_sent();
    let time = if sent {
        format_sent_timestamp(&msg.timestamp)
    } else {
        format_modem_timestamp(&msg.timestamp)
    };
    FeedRow {
        sent,
        icon: if sent { "📤" } else { "📥" },
        prefix: if sent { "To: " } else { "" },
        contact: msg.counterpart().to_string(),
        time: time.into_owned(),
        text: msg.text.clone(),
    }
}

impl FeedRow {
    /// `"📤 To: +15550100"` / `"📥 +15550100"`.
    pub fn header(&self) -> String {
        format!("{} {}{}", self.icon, self.prefix, self.contact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simdash_models::Direction;

    fn received(sender: &str, text: &str, ts: &str) -> Message {
        Message {
            direction: Direction::Received,
            sender: sender.to_string(),
            text: text.to_string(),
            timestamp: ts.to_string(),
            ..Message::default()
        }
    }

    #[test]
    fn empty_feed_is_placeholder() {
        assert_eq!(feed_view(&[]), FeedView::Empty);
    }

    #[test]
    fn received_row_uses_short_modem_time() {
        let FeedView::Rows(rows) = feed_view(&[received("+15550100", "hi", "25/10/18,20:08:02+08")])
        else {
            panic!("expected rows");
        };
        let row = &rows[0];
        assert!(!row.sent);
        assert_eq!(row.header(), "📥 +15550100");
        assert_eq!(row.time, "25/10 20:08:02");
        assert_eq!(row.text, "hi");
    }

    #[test]
    fn sent_row_shows_recipient_with_prefix() {
        let msg = Message {
            direction: Direction::Sent,
            sender: "me".to_string(),
            recipient: "+15550199".to_string(),
            text: "on my way".to_string(),
            timestamp: "2025-10-18T20:08:02".to_string(),
        };
        let FeedView::Rows(rows) = feed_view(&[msg]) else {
            panic!("expected rows");
        };
        assert!(rows[0].sent);
        assert_eq!(rows[0].header(), "📤 To: +15550199");
        assert_eq!(rows[0].time, "18 October 2025, 20:08:02");
    }

    #[test]
    fn rows_keep_service_order() {
        let FeedView::Rows(rows) = feed_view(&[
            received("b", "newest", "x"),
            received("a", "older", "y"),
        ]) else {
            panic!("expected rows");
        };
        let texts: Vec<_> = rows.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, ["newest", "older"]);
    }
}
