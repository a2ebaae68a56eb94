use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use simdash_models::{ConnectResult, ConnectionStatus};
use tracing::{debug, info, warn};

use crate::app_state::{AppController, Command, Focus};
use crate::autocomplete::Autocomplete;
use crate::compose::{error_notice, ComposeForm, SubmitError, MISSING_FIELDS};
use crate::notification::{Notice, NoticeKind, NotificationSlot};
use crate::tui::Action;
use crate::views::{feed_view, status_view, terminal_safe, Connectivity, FeedView, NO_MESSAGES};

const HELP: &str =
    " Tab focus · Enter send · ↓ suggestions · Esc hide · F5 refresh · F2 connect · Ctrl-C quit";

/// Screen regions from the last frame, used to route mouse clicks.
#[derive(Debug, Default)]
struct HitMap {
    phone: Rect,
    message: Rect,
    button: Rect,
    suggestions: Vec<Rect>,
}

pub struct DashboardApp {
    service_url: String,
    should_quit: bool,
    focus: Focus,

    // Fetched state
    status: Option<ConnectionStatus>,
    feed: FeedView,

    // Local state
    compose: ComposeForm,
    autocomplete: Autocomplete,
    notices: NotificationSlot,
    hits: HitMap,
}

impl DashboardApp {
    pub fn new(service_url: impl Into<String>, notice_ttl: Duration) -> Self {
        Self {
            service_url: service_url.into(),
            should_quit: false,
            focus: Focus::Phone,
            status: None,
            feed: FeedView::Empty,
            compose: ComposeForm::default(),
            autocomplete: Autocomplete::default(),
            notices: NotificationSlot::new(notice_ttl),
            hits: HitMap::default(),
        }
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.show(notice, Instant::now());
    }

    fn submit(&mut self) -> Vec<Command> {
        match self.compose.begin_submit() {
            Ok(request) => {
                debug!(phone = %request.phone, "submitting message");
                vec![Command::Send(request)]
            }
            Err(SubmitError::InFlight) => Vec::new(),
            Err(SubmitError::MissingFields(e)) => {
                debug!(error = %e, "submit rejected");
                self.notify(Notice::error(MISSING_FIELDS));
                Vec::new()
            }
        }
    }

    fn pick_suggestion(&mut self, index: usize) {
        if let Some(contact) = self.autocomplete.select(index) {
            self.compose.set_phone(contact);
        }
        self.focus = Focus::Phone;
    }

    fn hide_suggestions(&mut self) {
        self.autocomplete.hide();
        if self.focus == Focus::Suggestion {
            self.focus = Focus::Phone;
        }
    }

    fn phone_edited(&mut self) {
        self.autocomplete.on_input(self.compose.phone());
    }

    fn on_key(&mut self, key: KeyEvent) -> Vec<Command> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return Vec::new();
        }

        match key.code {
            KeyCode::F(5) => {
                self.notify(Notice::success("Messages refreshed"));
                return vec![Command::FetchMessages];
            }
            KeyCode::F(2) => return vec![Command::ConnectModem],
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Esc => self.hide_suggestions(),
            _ => return self.on_focused_key(key.code),
        }
        Vec::new()
    }

    fn on_focused_key(&mut self, code: KeyCode) -> Vec<Command> {
        match (self.focus, code) {
            (Focus::Suggestion, KeyCode::Enter) => self.pick_suggestion(0),
            // Only the first row is reachable from the keyboard.
            (Focus::Suggestion, _) => {}
            (_, KeyCode::Enter) | (Focus::SendButton, KeyCode::Char(' ')) => return self.submit(),
            (Focus::SendButton, KeyCode::Char('q')) => self.should_quit = true,
            (Focus::Phone, KeyCode::Down) => {
                if !self.autocomplete.suggestions().is_empty() {
                    self.focus = Focus::Suggestion;
                }
            }
            (Focus::Phone, KeyCode::Char(c)) => {
                self.compose.push_phone(c);
                self.phone_edited();
            }
            (Focus::Phone, KeyCode::Backspace) => {
                self.compose.pop_phone();
                self.phone_edited();
            }
            (Focus::Message, KeyCode::Char(c)) => self.compose.push_message(c),
            (Focus::Message, KeyCode::Backspace) => self.compose.pop_message(),
            _ => {}
        }
        Vec::new()
    }

    fn on_mouse(&mut self, mouse: MouseEvent) -> Vec<Command> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let pos = Position::new(mouse.column, mouse.row);

        if let Some(index) = self.hits.suggestions.iter().position(|r| r.contains(pos)) {
            self.pick_suggestion(index);
            return Vec::new();
        }
        if self.hits.phone.contains(pos) {
            self.focus = Focus::Phone;
            return Vec::new();
        }

        self.hide_suggestions();
        if self.hits.message.contains(pos) {
            self.focus = Focus::Message;
        } else if self.hits.button.contains(pos) {
            self.focus = Focus::SendButton;
            return self.submit();
        }
        Vec::new()
    }

    fn on_connect(&mut self, outcome: Result<ConnectResult, String>) {
        match outcome {
            Ok(res) if res.success => {
                let port = res.port.unwrap_or_default();
                info!(%port, "modem connected");
                self.notify(Notice::success(format!("Connected to modem on {port}")));
            }
            Ok(res) => {
                let reason = res.error.unwrap_or_else(|| "Modem not found".to_string());
                warn!(error = %reason, "modem connect refused");
                self.notify(error_notice(&reason));
            }
            Err(e) => {
                warn!(error = %e, "modem connect failed");
                self.notify(error_notice(&e));
            }
        }
    }

    // -- rendering ----------------------------------------------------------

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let view = status_view(self.status.as_ref());
        let color = match view.connectivity {
            Connectivity::Unknown => Color::Yellow,
            Connectivity::Connected => Color::Green,
            Connectivity::Disconnected => Color::Red,
        };

        let mut spans = vec![Span::styled(
            view.indicator,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )];
        if !view.port_label.is_empty() {
            spans.push(Span::raw("   "));
            spans.push(Span::raw(terminal_safe(&view.port_label).into_owned()));
        }
        if !view.count_label.is_empty() {
            spans.push(Span::raw("   │   "));
            spans.push(Span::raw(view.count_label));
        }

        let header = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("SIM7600 SMS Dashboard ({})", self.service_url)),
        );
        f.render_widget(header, area);
    }

    fn field_block(&self, title: String, focused: bool) -> Block<'static> {
        let style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        Block::default()
            .borders(Borders::ALL)
            .border_style(style)
            .title(title)
    }

    fn input_text(&self, value: &str, focused: bool) -> Line<'static> {
        let mut spans = vec![Span::raw(terminal_safe(value).into_owned())];
        if focused {
            spans.push(Span::styled("▌", Style::default().fg(Color::Yellow)));
        }
        Line::from(spans)
    }

    fn render_compose(&mut self, f: &mut Frame, area: Rect) {
        let suggestions = self.autocomplete.suggestions().to_vec();
        let suggestion_height = if suggestions.is_empty() {
            0
        } else {
            u16::try_from(suggestions.len()).unwrap_or(u16::MAX).saturating_add(2)
        };
        let warning = self.compose.warning().map(str::to_owned);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(suggestion_height),
                Constraint::Min(5),
                Constraint::Length(1),
                Constraint::Length(if warning.is_some() { 4 } else { 0 }),
                Constraint::Length(3),
            ])
            .split(area);

        // Phone
        let focused = self.focus == Focus::Phone;
        let title = format!("Phone number ({} contacts)", self.autocomplete.contact_count());
        let phone = Paragraph::new(self.input_text(self.compose.phone(), focused))
            .block(self.field_block(title, focused));
        f.render_widget(phone, chunks[0]);
        self.hits.phone = chunks[0];

        // Suggestions
        self.hits.suggestions.clear();
        if !suggestions.is_empty() {
            let block = self.field_block("Suggestions".to_string(), self.focus == Focus::Suggestion);
            let inner = block.inner(chunks[1]);
            self.hits.suggestions = (0..inner.height)
                .map(|row| Rect {
                    y: inner.y + row,
                    height: 1,
                    ..inner
                })
                .collect();

            let items: Vec<ListItem> = suggestions
                .iter()
                .map(|c| ListItem::new(terminal_safe(c).into_owned()))
                .collect();
            let list = List::new(items)
                .block(block)
                .highlight_style(Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow))
                .highlight_symbol(">> ");
            let mut state = ListState::default();
            if self.focus == Focus::Suggestion {
                state.select(Some(0));
            }
            f.render_stateful_widget(list, chunks[1], &mut state);
        }

        // Message
        let focused = self.focus == Focus::Message;
        let message = Paragraph::new(self.input_text(self.compose.message(), focused))
            .wrap(Wrap { trim: false })
            .block(self.field_block("Message".to_string(), focused));
        f.render_widget(message, chunks[2]);
        self.hits.message = chunks[2];

        let counter = Paragraph::new(format!("{} characters", self.compose.char_count()))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Right);
        f.render_widget(counter, chunks[3]);

        if let Some(preview) = warning {
            let body = Paragraph::new(format!(
                "Message will be sent as: \"{}\"",
                terminal_safe(&preview)
            ))
            .wrap(Wrap { trim: false })
            .style(Style::default().fg(Color::Yellow))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("⚠ Special characters detected"),
            );
            f.render_widget(body, chunks[4]);
        }

        // Send button
        let style = if self.compose.is_sending() {
            Style::default().fg(Color::DarkGray)
        } else if self.focus == Focus::SendButton {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let button = Paragraph::new(self.compose.button_label())
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(button, chunks[5]);
        self.hits.button = chunks[5];
    }

    fn render_feed(&self, f: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Recent Messages");
        let rows = match &self.feed {
            FeedView::Empty => {
                let empty = Paragraph::new(NO_MESSAGES)
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center)
                    .block(block);
                f.render_widget(empty, area);
                return;
            }
            FeedView::Rows(rows) => rows,
        };

        let items: Vec<ListItem> = rows
            .iter()
            .map(|row| {
                let color = if row.sent { Color::Green } else { Color::Cyan };
                ListItem::new(Text::from(vec![
                    Line::from(vec![
                        Span::styled(
                            terminal_safe(&row.header()).into_owned(),
                            Style::default().fg(color).add_modifier(Modifier::BOLD),
                        ),
                        Span::raw("  "),
                        Span::styled(
                            terminal_safe(&row.time).into_owned(),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ]),
                    Line::from(terminal_safe(&row.text).into_owned()),
                    Line::from(""),
                ]))
            })
            .collect();
        f.render_widget(List::new(items).block(block), area);
    }

    fn render_notice(&self, f: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Status");
        let notice = match self.notices.current() {
            Some(n) => {
                let color = match n.kind {
                    NoticeKind::Success => Color::Green,
                    NoticeKind::Error => Color::Red,
                };
                Paragraph::new(terminal_safe(&n.text).into_owned())
                    .style(Style::default().fg(color))
                    .block(block)
            }
            None => Paragraph::new("").block(block),
        };
        f.render_widget(notice, area);
    }
}

impl AppController for DashboardApp {
    fn update(&mut self, action: Action) -> Vec<Command> {
        match action {
            Action::Tick => {
                self.notices.expire(Instant::now());
            }
            Action::Resize => {}
            Action::Key(key) => return self.on_key(key),
            Action::Mouse(mouse) => return self.on_mouse(mouse),
            Action::StatusLoaded(Ok(status)) => self.status = Some(status),
            Action::StatusLoaded(Err(e)) => warn!(error = %e, "status poll failed"),
            Action::MessagesLoaded(Ok(messages)) => self.feed = feed_view(&messages),
            Action::MessagesLoaded(Err(e)) => warn!(error = %e, "message poll failed"),
            Action::ContactsLoaded(Ok(book)) => {
                info!(contacts = book.len(), "contacts loaded");
                self.autocomplete.load(book);
            }
            Action::ContactsLoaded(Err(e)) => warn!(error = %e, "contact load failed"),
            Action::SendFinished(outcome) => {
                if let Err(e) = &outcome {
                    warn!(error = %e, "send failed");
                }
                let sent = matches!(&outcome, Ok(res) if res.success);
                for notice in self.compose.finish_submit(&outcome) {
                    self.notify(notice);
                }
                // The phone field was cleared; stale suggestions go with it.
                if sent {
                    self.hide_suggestions();
                }
            }
            Action::ConnectFinished(outcome) => self.on_connect(outcome),
        }
        Vec::new()
    }

    fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(f.area());

        self.render_header(f, chunks[0]);

        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[1]);
        self.render_compose(f, main_chunks[0]);
        self.render_feed(f, main_chunks[1]);

        self.render_notice(f, chunks[2]);
        f.render_widget(
            Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray)),
            chunks[3],
        );
    }

    fn should_quit(&self) -> bool {
        self.should_quit
    }
}
