mod app_state;
mod autocomplete;
mod commands;
mod compose;
mod config;
mod logging;
mod notification;
mod scheduler;
mod tui;
mod ui;
mod views;

use std::io;

use anyhow::Context;
use clap::{Parser, Subcommand};
use simdash_sdk::DashboardClient;
use tracing::{error, info};

use crate::app_state::AppController;
use crate::config::DashboardConfig;
use crate::scheduler::Scheduler;
use crate::tui::{EventHandler, Tui};
use crate::ui::dashboard::DashboardApp;

#[derive(Parser, Debug)]
#[command(name = "simdash")]
#[command(about = "Terminal dashboard for the SIM7600 SMS service")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Dashboard service URL (overrides SIMDASH_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive dashboard (default)
    Dashboard,
    /// Print the modem connection status
    Status,
    /// Print the recent message feed
    Messages {
        /// Emit an escaped HTML fragment instead of plain text
        #[arg(long)]
        html: bool,
    },
    /// Print the known contacts
    Contacts,
    /// Send one SMS
    Send {
        /// Recipient phone number
        phone: String,
        /// Message body
        message: String,
    },
    /// Show the character count and ASCII conversion of a message
    Preview {
        message: String,
        /// Emit the warning as HTML
        #[arg(long)]
        html: bool,
    },
    /// Ask the service to connect to the modem
    Connect,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = DashboardConfig::from_env();
    if let Some(url) = cli.base_url {
        config.base_url = url;
    }

    let command = cli.command.unwrap_or(Commands::Dashboard);
    if matches!(command, Commands::Dashboard) {
        let log_path = logging::init_file()?;
        info!(url = %config.base_url, log = %log_path.display(), "starting dashboard");
    } else {
        logging::init_stderr();
    }
    run(command, &config).await
}

async fn run(command: Commands, config: &DashboardConfig) -> anyhow::Result<()> {
    let client = DashboardClient::with_timeout(&config.base_url, config.request_timeout)
        .context("invalid service URL")?;
    let mut out = io::stdout();

    match command {
        Commands::Dashboard => run_dashboard(client, config).await,
        Commands::Status => commands::status(&client, &mut out).await,
        Commands::Messages { html } => commands::messages(&client, html, &mut out).await,
        Commands::Contacts => commands::contacts(&client, &mut out).await,
        Commands::Send { phone, message } => {
            commands::send(&client, &phone, &message, &mut out).await
        }
        Commands::Preview { message, html } => commands::preview(&message, html, &mut out),
        Commands::Connect => commands::connect(&client, &mut out).await,
    }
}

async fn run_dashboard(client: DashboardClient, config: &DashboardConfig) -> anyhow::Result<()> {
    let mut terminal = tui::init().context("failed to initialise terminal")?;
    let result = event_loop(&mut terminal, client, config).await;
    tui::restore().context("failed to restore terminal")?;

    if let Err(e) = &result {
        error!(error = %e, "dashboard stopped");
    }
    result
}

async fn event_loop(
    terminal: &mut Tui,
    client: DashboardClient,
    config: &DashboardConfig,
) -> anyhow::Result<()> {
    let mut events = EventHandler::new(config.tick_rate);
    let scheduler = Scheduler::new(client.clone(), events.get_sender());
    scheduler.start(config.status_interval, config.messages_interval);

    let mut app = DashboardApp::new(client.base_url(), config.notice_ttl);

    loop {
        terminal.draw(|f| app.render(f))?;

        let Some(action) = events.next_async().await else {
            return Ok(());
        };
        for command in app.update(action) {
            scheduler.execute(command);
        }
        if app.should_quit() {
            info!("dashboard quit");
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_dashboard() {
        let cli = Cli::try_parse_from(["simdash"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.base_url.is_none());
    }

    #[test]
    fn base_url_is_global() {
        let cli =
            Cli::try_parse_from(["simdash", "messages", "--html", "--base-url", "http://x:1"])
                .unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("http://x:1"));
        assert!(matches!(cli.command, Some(Commands::Messages { html: true })));
    }

    #[test]
    fn send_takes_phone_and_message() {
        let cli = Cli::try_parse_from(["simdash", "send", "+15550100", "hello there"]).unwrap();
        match cli.command {
            Some(Commands::Send { phone, message }) => {
                assert_eq!(phone, "+15550100");
                assert_eq!(message, "hello there");
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
