//! One-shot subcommands. Each prints to stdout and returns an error for a
//! non-zero exit.

use std::io::Write;

use anyhow::{bail, Context};
use simdash_models::{transliteration_preview, SendRequest};
use simdash_sdk::DashboardClient;
use tracing::info;

use crate::compose::{send_outcome_notices, MISSING_FIELDS};
use crate::notification::NoticeKind;
use crate::views::{feed_view, html, status_view, terminal_safe, FeedView, NO_MESSAGES};

pub async fn status(client: &DashboardClient, out: &mut impl Write) -> anyhow::Result<()> {
    let status = client.status().await.context("status request failed")?;
    let view = status_view(Some(&status));
    writeln!(
        out,
        "{}  {}  {}",
        view.indicator,
        terminal_safe(&view.port_label),
        view.count_label
    )?;
    Ok(())
}

pub async fn messages(
    client: &DashboardClient,
    as_html: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let messages = client.messages().await.context("messages request failed")?;
    let view = feed_view(&messages);

    if as_html {
        write!(out, "{}", html::render_feed(&view))?;
        return Ok(());
    }
    write_feed_text(&view, out)
}

pub fn write_feed_text(view: &FeedView, out: &mut impl Write) -> anyhow::Result<()> {
    match view {
        FeedView::Empty => writeln!(out, "{NO_MESSAGES}")?,
        FeedView::Rows(rows) => {
            for row in rows {
                writeln!(
                    out,
                    "{}  [{}]\n    {}",
                    terminal_safe(&row.header()),
                    terminal_safe(&row.time),
                    terminal_safe(&row.text)
                )?;
            }
        }
    }
    Ok(())
}

pub async fn contacts(client: &DashboardClient, out: &mut impl Write) -> anyhow::Result<()> {
    let book = client.contacts().await.context("contacts request failed")?;
    for contact in book.iter() {
        writeln!(out, "{}", terminal_safe(contact))?;
    }
    Ok(())
}

/// Prints the character count and, for non-ASCII text, what will
/// actually be transmitted.
pub fn preview(message: &str, as_html: bool, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "{} characters", message.chars().count())?;
    if let Some(folded) = transliteration_preview(message) {
        if as_html {
            writeln!(out, "{}", html::render_warning(&folded))?;
        } else {
            writeln!(out, "⚠ Message will be sent as: \"{}\"", terminal_safe(&folded))?;
        }
    }
    Ok(())
}

pub async fn send(
    client: &DashboardClient,
    phone: &str,
    message: &str,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let Ok(request) = SendRequest::new(phone, message) else {
        bail!(MISSING_FIELDS);
    };
    if let Some(folded) = transliteration_preview(&request.message) {
        writeln!(out, "⚠ Message will be sent as: \"{}\"", terminal_safe(&folded))?;
    }

    info!(phone = %request.phone, "sending message");
    let outcome = client.send(&request).await.map_err(|e| e.to_string());

    let mut failed = false;
    for notice in send_outcome_notices(&outcome) {
        failed |= notice.kind == NoticeKind::Error;
        writeln!(out, "{}", terminal_safe(&notice.text))?;
    }
    if failed {
        bail!("message was not sent");
    }
    Ok(())
}

pub async fn connect(client: &DashboardClient, out: &mut impl Write) -> anyhow::Result<()> {
    let res = client.connect_modem().await.context("connect request failed")?;
    if !res.success {
        bail!(
            "❌ Error: {}",
            res.error.as_deref().unwrap_or("Modem not found")
        );
    }
    writeln!(
        out,
        "Connected to modem on {}",
        res.port.as_deref().unwrap_or_default()
    )?;
    Ok(())
}
