//! Application state and core logic

use crate::config::PortfolioConfig;
use crate::state::{AppState, RevealState, Severity, SplashState, SubmitStatus, View};
use crate::submit::{MessageGateway, SubmissionError};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::sync::Mutex;

/// Toast shown after a successful send
const SEND_SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";
/// Toast shown after a failed send
const SEND_FAILURE_MESSAGE: &str =
    "Sorry, there was an error sending your message. Please try again.";

/// Completion events delivered back to the event loop from spawned work
#[derive(Debug)]
pub enum AppEvent {
    SubmissionFinished(Result<(), SubmissionError>),
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Submission gateway for the contact form
    gateway: Arc<Mutex<dyn MessageGateway>>,
    /// Sender handed to spawned tasks
    events_tx: UnboundedSender<AppEvent>,
    /// Completion events drained once per loop iteration
    events_rx: UnboundedReceiver<AppEvent>,
    /// Whether the app should quit
    quit: bool,
    /// Splash screen animation state
    pub splash_state: Option<SplashState>,
}

impl App {
    /// Create a new App instance with injected content and gateway
    pub fn new(content: PortfolioConfig, gateway: Arc<Mutex<dyn MessageGateway>>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(content),
            gateway,
            events_tx,
            events_rx,
            quit: false,
            splash_state: Some(SplashState::new()),
        }
    }

    /// Update splash animation state.
    /// Returns true if animation is complete and we should transition.
    pub fn update_splash(&mut self, terminal_height: u16) -> bool {
        if let Some(ref mut splash) = self.splash_state {
            splash.update(terminal_height);
            if splash.is_complete() {
                self.splash_state = None;
                self.state.current_view = View::Home;
                return true;
            }
        }
        false
    }

    /// Check if in splash screen
    pub fn in_splash(&self) -> bool {
        matches!(self.state.current_view, View::Splash)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// True while something on screen is moving (drives the faster poll)
    pub fn is_animating(&self) -> bool {
        self.in_splash()
            || self.state.reveal.is_some()
            || self.state.notifications.is_active()
            || self.state.contact_form.status == SubmitStatus::Submitting
    }

    /// Per-iteration timer tick: advance toast lifecycles, drop finished
    /// animations, and apply completed background work.
    pub fn tick(&mut self, now: Instant) {
        self.state.notifications.update(now);
        if let Some(reveal) = &self.state.reveal {
            if reveal.is_complete(now) {
                self.state.reveal = None;
            }
        }
        self.drain_events(now);
    }

    /// Apply every completion event queued by spawned tasks
    pub fn drain_events(&mut self, now: Instant) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event, now);
        }
    }

    fn handle_event(&mut self, event: AppEvent, now: Instant) {
        match event {
            AppEvent::SubmissionFinished(result) => self.finish_submission(result, now),
        }
    }

    /// Switch to a section and kick off its entrance animation
    pub fn navigate(&mut self, view: View, now: Instant) {
        if self.state.current_view == view {
            return;
        }
        self.state.current_view = view;
        if view == View::Projects {
            self.state.selected_project = 0;
            self.state.reveal = Some(RevealState::new(self.state.content.projects.len(), now));
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Result<()> {
        // Close the visible toast from anywhere
        if key.code == KeyCode::Delete {
            self.state.notifications.dismiss_front(now);
            return Ok(());
        }

        match self.state.current_view {
            View::Splash => self.handle_splash_key(key),
            View::Home => self.handle_home_key(key, now),
            View::Projects => self.handle_projects_key(key, now),
            View::Contact => self.handle_contact_key(key, now),
        }
    }

    fn handle_splash_key(&mut self, _key: KeyEvent) -> Result<()> {
        if let Some(ref mut splash) = self.splash_state {
            splash.skip();
        }
        Ok(())
    }

    /// Cycle to the section after (or before) the current one
    fn cycle_section(&mut self, backwards: bool, now: Instant) {
        let sections = View::SECTIONS;
        let current = sections
            .iter()
            .position(|v| *v == self.state.current_view)
            .unwrap_or(0);
        let next = if backwards {
            (current + sections.len() - 1) % sections.len()
        } else {
            (current + 1) % sections.len()
        };
        self.navigate(sections[next], now);
    }

    fn handle_section_jump(&mut self, key: &KeyEvent, now: Instant) -> bool {
        match key.code {
            KeyCode::Char('1') => self.navigate(View::Home, now),
            KeyCode::Char('2') => self.navigate(View::Projects, now),
            KeyCode::Char('3') => self.navigate(View::Contact, now),
            KeyCode::Tab => self.cycle_section(false, now),
            KeyCode::BackTab => self.cycle_section(true, now),
            _ => return false,
        }
        true
    }

    fn handle_home_key(&mut self, key: KeyEvent, now: Instant) -> Result<()> {
        if self.handle_section_jump(&key, now) {
            return Ok(());
        }
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Down | KeyCode::Char('j') => {
                self.state.home_scroll = self.state.home_scroll.saturating_add(1);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.home_scroll = self.state.home_scroll.saturating_sub(1);
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_projects_key(&mut self, key: KeyEvent, now: Instant) -> Result<()> {
        if self.handle_section_jump(&key, now) {
            return Ok(());
        }
        let project_count = self.state.content.projects.len();
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Down | KeyCode::Char('j') => {
                if project_count > 0 {
                    self.state.selected_project =
                        (self.state.selected_project + 1).min(project_count - 1);
                }
                self.skip_reveal();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.selected_project = self.state.selected_project.saturating_sub(1);
                self.skip_reveal();
            }
            KeyCode::Char('r') => {
                // Replay the entrance animation
                self.state.reveal = Some(RevealState::new(project_count, now));
            }
            _ => {}
        }
        Ok(())
    }

    fn skip_reveal(&mut self) {
        if let Some(ref mut reveal) = self.state.reveal {
            reveal.skip();
        }
    }

    fn handle_contact_key(&mut self, key: KeyEvent, now: Instant) -> Result<()> {
        let on_buttons = self.state.contact_form.is_buttons_row_active();

        match key.code {
            // Moving focus away from a field validates it
            KeyCode::Tab => {
                self.blur_active_field();
                self.state.contact_form.next_field();
            }
            KeyCode::BackTab => {
                self.blur_active_field();
                self.state.contact_form.prev_field();
            }
            KeyCode::Left if on_buttons => self.state.contact_form.prev_button(),
            KeyCode::Right if on_buttons => self.state.contact_form.next_button(),
            // Button order: 0=Clear, 1=Send
            KeyCode::Enter if on_buttons => match self.state.contact_form.selected_button {
                0 => self.state.contact_form.clear_values(),
                1 => self.submit_contact_form(),
                _ => {}
            },
            // Submit shortcut (works from any field)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_contact_form();
            }
            // Copy the contact address
            KeyCode::Char('y') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.copy_contact_address(now);
            }
            KeyCode::Esc => self.navigate(View::Home, now),
            // Field input (editing clears any displayed error)
            KeyCode::Char(c) if !on_buttons => {
                if let Some(field) = self.state.contact_form.get_active_field_mut() {
                    field.push_char(c);
                    field.clear_error();
                }
            }
            KeyCode::Backspace if !on_buttons => {
                if let Some(field) = self.state.contact_form.get_active_field_mut() {
                    field.pop_char();
                    field.clear_error();
                }
            }
            KeyCode::Enter if !on_buttons => {
                // Enter in the message field adds a newline
                if self.state.contact_form.is_active_field_multiline() {
                    if let Some(field) = self.state.contact_form.get_active_field_mut() {
                        field.push_char('\n');
                        field.clear_error();
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Validate the field losing focus; its annotation stays until the
    /// next input edit
    fn blur_active_field(&mut self) {
        if let Some(field) = self.state.contact_form.get_active_field_mut() {
            let _ = field.validate();
        }
    }

    /// Submit the contact form.
    ///
    /// Ignored while a send is in flight. Validates every field first;
    /// any failure aborts with the errors annotated and no status change.
    /// Otherwise the gateway call runs on a spawned task and its outcome
    /// comes back through the event channel.
    pub fn submit_contact_form(&mut self) {
        if self.state.contact_form.status == SubmitStatus::Submitting {
            tracing::debug!("ignoring submit while a send is in flight");
            return;
        }
        if !self.state.contact_form.validate_all() {
            return;
        }

        self.state.contact_form.status = SubmitStatus::Submitting;
        let fields = self.state.contact_form.values();
        let gateway = Arc::clone(&self.gateway);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = gateway.lock().await.send_message(fields).await;
            // The receiver lives as long as the app; a failed send here
            // only means we are already shutting down
            let _ = tx.send(AppEvent::SubmissionFinished(result));
        });
    }

    /// Apply the outcome of a finished submission. The send affordance is
    /// re-enabled on both paths because its state derives from the status.
    fn finish_submission(&mut self, result: Result<(), SubmissionError>, now: Instant) {
        match result {
            Ok(()) => {
                tracing::info!("contact message sent");
                self.state.contact_form.status = SubmitStatus::Succeeded;
                self.state.contact_form.clear_values();
                self.state
                    .notifications
                    .notify(SEND_SUCCESS_MESSAGE, Severity::Success, now);
            }
            Err(err) => {
                tracing::warn!("contact message failed to send: {err}");
                self.state.contact_form.status = SubmitStatus::Failed;
                self.state
                    .notifications
                    .notify(SEND_FAILURE_MESSAGE, Severity::Error, now);
            }
        }
    }

    /// Copy the configured contact address to the system clipboard
    fn copy_contact_address(&mut self, now: Instant) {
        let address = self.state.content.contact_address.clone();
        match self.copy_to_clipboard(&address) {
            Ok(()) => {
                self.state.notifications.notify(
                    format!("Copied {address} to clipboard"),
                    Severity::Success,
                    now,
                );
            }
            Err(err) => {
                tracing::warn!("clipboard copy failed: {err}");
                self.state.notifications.notify(
                    "Could not access the clipboard",
                    Severity::Error,
                    now,
                );
            }
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
