//! Pure view descriptions.
//!
//! Each function maps fetched state to a plain value describing what to
//! draw. The terminal and HTML renderers consume these; neither reaches
//! back into the controller.

use std::borrow::Cow;

pub mod feed;
pub mod html;
pub mod status;

pub use feed::{feed_view, FeedView, NO_MESSAGES};
pub use status::{status_view, Connectivity};

/// Removes control characters so remote text cannot move the cursor or
/// restyle the terminal. Newlines and tabs become spaces.
pub fn terminal_safe(text: &str) -> Cow<'_, str> {
    if !text.chars().any(char::is_control) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.chars()
            .filter_map(|c| match c {
                '\n' | '\t' => Some(' '),
                c if c.is_control() => None,
                c => Some(c),
            })
            .collect(),
    )
}
