//! Single-slot status notices.
//!
//! There is exactly one visible notice at a time. Showing a new one
//! replaces the old and restarts its timer; the latest write wins.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Error,
        }
    }
}

#[derive(Debug)]
pub struct NotificationSlot {
    current: Option<(Notice, Instant)>,
    ttl: Duration,
}

impl NotificationSlot {
    pub fn new(ttl: Duration) -> Self {
        Self { current: None, ttl }
    }

    pub fn show(&mut self, notice: Notice, now: Instant) {
        self.current = Some((notice, now));
    }

    /// Clears the notice once `ttl` has elapsed since the latest `show`.
    /// Returns `true` if something was cleared.
    pub fn expire(&mut self, now: Instant) -> bool {
        match &self.current {
            Some((_, shown_at)) if now.saturating_duration_since(*shown_at) >= self.ttl => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref().map(|(notice, _)| notice)
    }
}
