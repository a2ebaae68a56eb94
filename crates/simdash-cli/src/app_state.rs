use simdash_models::SendRequest;

/// Side effects requested by the controller. The runtime turns each one
/// into a spawned request whose outcome comes back as an `Action`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    FetchMessages,
    Send(SendRequest),
    ConnectModem,
}

/// Which widget receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Phone,
    /// The first suggestion row below the phone field.
    Suggestion,
    Message,
    SendButton,
}

impl Focus {
    /// Tab order: phone, message, send button, and around again.
    pub fn next(self) -> Self {
        match self {
            Focus::Phone | Focus::Suggestion => Focus::Message,
            Focus::Message => Focus::SendButton,
            Focus::SendButton => Focus::Phone,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Phone | Focus::Suggestion => Focus::SendButton,
            Focus::Message => Focus::Phone,
            Focus::SendButton => Focus::Message,
        }
    }
}

pub trait AppController {
    fn update(&mut self, action: super::tui::Action) -> Vec<Command>;
    fn render(&mut self, f: &mut ratatui::Frame);
    fn should_quit(&self) -> bool;
}
