//! Background work for the dashboard.
//!
//! Polls run on their own intervals and every request is a spawned task
//! that reports back through the action channel. Nothing here touches UI
//! state; requests may overlap and are never cancelled.

use std::future::Future;
use std::time::Duration;

use simdash_sdk::{DashboardClient, SdkError};
use tokio::sync::mpsc::UnboundedSender;
use tokio::time::MissedTickBehavior;
use tracing::debug;

use crate::app_state::Command;
use crate::tui::Action;

#[derive(Clone)]
pub struct Scheduler {
    client: DashboardClient,
    tx: UnboundedSender<Action>,
}

impl Scheduler {
    pub fn new(client: DashboardClient, tx: UnboundedSender<Action>) -> Self {
        Self { client, tx }
    }

    /// Starts the status and message polls (first run immediately) and
    /// loads the contact snapshot once.
    pub fn start(&self, status_every: Duration, messages_every: Duration) {
        self.every(status_every, Self::fetch_status);
        self.every(messages_every, Self::fetch_messages);

        let client = self.client.clone();
        self.report(
            async move { client.contacts().await },
            Action::ContactsLoaded,
        );
    }

    pub fn execute(&self, command: Command) {
        debug!(?command, "executing command");
        match command {
            Command::FetchMessages => self.fetch_messages(),
            Command::Send(request) => {
                let client = self.client.clone();
                self.report(
                    async move { client.send(&request).await },
                    Action::SendFinished,
                );
            }
            Command::ConnectModem => {
                let client = self.client.clone();
                self.report(
                    async move { client.connect_modem().await },
                    Action::ConnectFinished,
                );
            }
        }
    }

    fn fetch_status(&self) {
        let client = self.client.clone();
        self.report(async move { client.status().await }, Action::StatusLoaded);
    }

    fn fetch_messages(&self) {
        let client = self.client.clone();
        self.report(async move { client.messages().await }, Action::MessagesLoaded);
    }

    fn every(&self, period: Duration, job: fn(&Self)) {
        let this = self.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if this.tx.is_closed() {
                    break;
                }
                job(&this);
            }
        });
    }

    fn report<T, F>(&self, request: F, wrap: fn(Result<T, String>) -> Action)
    where
        T: Send + 'static,
        F: Future<Output = Result<T, SdkError>> + Send + 'static,
    {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = request.await.map_err(|e| e.to_string());
            // The dashboard may already have quit.
            let _ = tx.send(wrap(outcome));
        });
    }
}
