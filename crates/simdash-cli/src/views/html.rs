//! HTML fragments for `simdash messages --html` and the warning preview.
//!
//! Every piece of remote text goes through [`escape_html`].

use std::fmt::Write;

use super::feed::{FeedView, NO_MESSAGES};

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

pub fn render_feed(view: &FeedView) -> String {
    let rows = match view {
        FeedView::Empty => return format!("<div class=\"no-messages\">{NO_MESSAGES}</div>\n"),
        FeedView::Rows(rows) => rows,
    };

    let mut out = String::new();
    for row in rows {
        let class = if row.sent {
            "message-item sent"
        } else {
            "message-item"
        };
        // Writing into a String cannot fail.
        let _ = write!(
            out,
            "<div class=\"{class}\">\n  \
             <div class=\"message-header\">\n    \
             <span class=\"message-sender\">{icon} {prefix}{contact}</span>\n    \
             <span class=\"message-time\">{time}</span>\n  \
             </div>\n  \
             <div class=\"message-text\">{text}</div>\n\
             </div>\n",
            icon = row.icon,
            prefix = row.prefix,
            contact = escape_html(&row.contact),
            time = escape_html(&row.time),
            text = escape_html(&row.text),
        );
    }
    out
}

pub fn render_warning(preview: &str) -> String {
    format!(
        "Message will be sent as: <strong>\"{}\"</strong>",
        escape_html(preview)
    )
}
