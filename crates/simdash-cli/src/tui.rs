use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use simdash_models::{ConnectResult, ConnectionStatus, ContactBook, Message, SendResult};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

pub type Tui = Terminal<CrosstermBackend<io::Stdout>>;

pub fn init() -> io::Result<Tui> {
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    enable_raw_mode()?;
    Terminal::new(CrosstermBackend::new(io::stdout()))
}

pub fn restore() -> io::Result<()> {
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    disable_raw_mode()?;
    Ok(())
}

/// Everything the dashboard reacts to: terminal input, the UI tick and
/// the completion of background requests.
///
/// Request outcomes carry the error already rendered to a string so the
/// action stays `Clone` and the controller never sees transport types.
#[derive(Debug, Clone)]
pub enum Action {
    Tick,
    Resize,
    Key(event::KeyEvent),
    Mouse(event::MouseEvent),
    StatusLoaded(Result<ConnectionStatus, String>),
    MessagesLoaded(Result<Vec<Message>, String>),
    ContactsLoaded(Result<ContactBook, String>),
    SendFinished(Result<SendResult, String>),
    ConnectFinished(Result<ConnectResult, String>),
}

pub struct EventHandler {
    sender: mpsc::UnboundedSender<Action>,
    receiver: mpsc::UnboundedReceiver<Action>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();

        // 1. Tick Loop (Async)
        let tick_sender = sender.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(tick_rate);
            loop {
                interval.tick().await;
                if tick_sender.send(Action::Tick).is_err() {
                    break;
                }
            }
        });

        // 2. Input Loop (Blocking Thread)
        let event_sender = sender.clone();
        std::thread::spawn(move || loop {
            let action = match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => Action::Key(key),
                Ok(Event::Mouse(mouse)) => Action::Mouse(mouse),
                Ok(Event::Resize(..)) => Action::Resize,
                Ok(_) => continue,
                // On error, we exit the input loop
                Err(_) => break,
            };
            if event_sender.send(action).is_err() {
                break;
            }
        });

        Self { sender, receiver }
    }

    pub async fn next_async(&mut self) -> Option<Action> {
        self.receiver.recv().await
    }

    pub fn get_sender(&self) -> mpsc::UnboundedSender<Action> {
        self.sender.clone()
    }
}
