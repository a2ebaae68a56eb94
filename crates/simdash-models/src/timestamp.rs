//! Display formatting for message timestamps.
//!
//! Received messages carry the modem's own `DD/MM/YY,HH:MM:SS±TZ` stamp;
//! sent messages carry the service's ISO-8601 local time. Both helpers are
//! cosmetic: they never fail and fall back to the raw input.

use std::borrow::Cow;

use chrono::{DateTime, Local, NaiveDateTime};

/// `strftime` pattern for the long, localized form of sent timestamps.
pub const SENT_TIME_FORMAT: &str = "%-d %B %Y, %H:%M:%S";

/// Shorten a modem timestamp to `DD/MM HH:MM:SS`.
///
/// The year and the timezone suffix are dropped. Anything that is not two
/// comma-separated segments with a three-part date is returned unchanged.
///
/// # Examples
///
/// ```
/// use simdash_models::format_modem_timestamp;
///
/// assert_eq!(format_modem_timestamp("25/10/18,20:08:02+08"), "25/10 20:08:02");
/// assert_eq!(format_modem_timestamp("yesterday"), "yesterday");
/// ```
pub fn format_modem_timestamp(raw: &str) -> Cow<'_, str> {
    let mut segments = raw.split(',');
    let (Some(date), Some(time), None) = (segments.next(), segments.next(), segments.next()) else {
        return Cow::Borrowed(raw);
    };

    let mut date_parts = date.split('/');
    let (Some(day), Some(month), Some(_year), None) = (
        date_parts.next(),
        date_parts.next(),
        date_parts.next(),
        date_parts.next(),
    ) else {
        return Cow::Borrowed(raw);
    };

    let clock: String = time.chars().take(8).collect();
    Cow::Owned(format!("{day}/{month} {clock}"))
}

/// Render a sent-message timestamp in the long local form.
///
/// RFC 3339 stamps with an offset are converted to the local zone; naive
/// stamps (the service writes `datetime.now().isoformat()`) are already
/// local wall time and are formatted as-is. Unparseable input is returned
/// unchanged.
pub fn format_sent_timestamp(raw: &str) -> Cow<'_, str> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Cow::Owned(
            dt.with_timezone(&Local)
                .format(SENT_TIME_FORMAT)
                .to_string(),
        );
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map_or(Cow::Borrowed(raw), |naive| {
            Cow::Owned(naive.format(SENT_TIME_FORMAT).to_string())
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
