//! Application shell.
//!
//! `App` owns the auth controller (the single state owner), the UI-only
//! state (focus, spinner animation, dirty flag), and the message channel
//! that background tasks publish completions through.

pub mod messages;
pub mod types;

pub use messages::AppMessage;
pub use types::Focus;

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;
use tracing::info;

use crate::auth::{AuthController, AuthEvent, AuthState, Authenticator, StubAuthenticator};
use crate::config::Config;
use crate::ui::components::next_spinner_frame;

/// Top-level application state.
pub struct App {
    /// Reducer owning the authentication screen state.
    pub controller: AuthController,
    /// Which form element has keyboard focus.
    pub focus: Focus,
    /// Current spinner animation frame.
    pub spinner_frame: usize,
    /// Whether the UI needs to be redrawn.
    pub needs_redraw: bool,
    /// Whether the application should exit.
    pub should_quit: bool,
    /// Terminal width in columns.
    pub terminal_width: u16,
    /// Terminal height in rows.
    pub terminal_height: u16,
    /// Sender side of the app message channel (cloned into tasks).
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver side; taken by the event loop.
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Loaded configuration.
    pub config: Config,
}

impl App {
    /// Create the app with the stubbed backend at the configured latency.
    pub fn new(config: Config) -> Self {
        let backend = Arc::new(StubAuthenticator::new(config.latency()));
        Self::with_backend(config, backend)
    }

    /// Create the app with an explicit backend (used by tests).
    pub fn with_backend(config: Config, backend: Arc<dyn Authenticator>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let controller = AuthController::new(backend, message_tx.clone());
        Self {
            controller,
            focus: Focus::default(),
            spinner_frame: 0,
            needs_redraw: true,
            should_quit: false,
            terminal_width: 80,
            terminal_height: 24,
            message_tx,
            message_rx: Some(message_rx),
            config,
        }
    }

    /// The current screen state snapshot.
    pub fn state(&self) -> &AuthState {
        self.controller.state()
    }

    /// Flag the UI for redraw on the next loop iteration.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Request application exit.
    pub fn quit(&mut self) {
        info!("quit requested");
        self.should_quit = true;
    }

    /// Record new terminal dimensions after a resize.
    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.mark_dirty();
    }

    /// Animation tick: advance the spinner while an attempt is in flight.
    pub fn tick(&mut self) {
        if self.state().is_loading {
            self.spinner_frame = next_spinner_frame(self.spinner_frame);
            self.mark_dirty();
        }
    }

    /// Apply a message published by a background task.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::AuthFinished { outcome } => {
                self.controller.finish_authentication(outcome);
            }
        }
        self.mark_dirty();
    }

    /// Handle a key press. Ctrl+C is handled globally by the event loop.
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();

        // A visible error dialog captures all input until dismissed.
        if self.state().error.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.controller.handle_event(AuthEvent::ErrorDismissed);
            }
            return;
        }

        // While an attempt is in flight the form is inert.
        if self.state().is_loading {
            return;
        }

        // Mode toggle works from anywhere.
        if key.code == KeyCode::Char('t') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.controller.handle_event(AuthEvent::ToggleMode);
            return;
        }

        // Submit shortcut regardless of focus.
        if key.code == KeyCode::Enter && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.submit();
            return;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Enter => self.activate_focused(),
            KeyCode::Backspace => self.edit_focused_field(|text| {
                text.pop();
            }),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.edit_focused_field(|text| text.push(c));
            }
            _ => {}
        }
    }

    /// Enter on a field advances; on the submit row it authenticates; on
    /// the toggle row it flips the mode.
    fn activate_focused(&mut self) {
        match self.focus {
            Focus::Email | Focus::Password => self.focus = self.focus.next(),
            Focus::Submit => self.submit(),
            Focus::ModeToggle => self.controller.handle_event(AuthEvent::ToggleMode),
        }
    }

    /// Dispatch `Authenticate` if the form is valid; otherwise ignore
    /// (the submit affordance renders disabled).
    fn submit(&mut self) {
        if self.state().is_form_valid() {
            self.spinner_frame = 0;
            self.controller.handle_event(AuthEvent::Authenticate);
        }
    }

    /// Apply `edit` to the focused field's text and dispatch the change
    /// event. No-op when focus is not on a field.
    fn edit_focused_field(&mut self, edit: impl FnOnce(&mut String)) {
        let event = match self.focus {
            Focus::Email => {
                let mut text = self.state().email.clone().unwrap_or_default();
                edit(&mut text);
                AuthEvent::EmailChanged(text)
            }
            Focus::Password => {
                let mut text = self.state().password.clone().unwrap_or_default();
                edit(&mut text);
                AuthEvent::PasswordChanged(text)
            }
            Focus::Submit | Focus::ModeToggle => return,
        };
        self.controller.handle_event(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthMode;
    use crate::error::AuthFailure;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn app() -> App {
        App::new(Config::default())
    }

    #[tokio::test]
    async fn test_typing_into_email_field() {
        let mut app = app();
        type_text(&mut app, "a@b.c");
        assert_eq!(app.state().email.as_deref(), Some("a@b.c"));
        assert!(app.state().password.is_none());
    }

    #[tokio::test]
    async fn test_typing_into_password_field() {
        let mut app = app();
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Password);
        type_text(&mut app, "passworD1");
        assert_eq!(app.state().password.as_deref(), Some("passworD1"));
        assert_eq!(app.state().satisfied_requirements.len(), 3);
    }

    #[tokio::test]
    async fn test_backspace_edits_field() {
        let mut app = app();
        type_text(&mut app, "ab");
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.state().email.as_deref(), Some("a"));
    }

    #[tokio::test]
    async fn test_ctrl_t_toggles_mode() {
        let mut app = app();
        app.handle_key(ctrl('t'));
        assert_eq!(app.state().mode, AuthMode::SignUp);
        app.handle_key(ctrl('t'));
        assert_eq!(app.state().mode, AuthMode::SignIn);
    }

    #[tokio::test]
    async fn test_enter_on_invalid_form_does_not_submit() {
        let mut app = app();
        app.focus = Focus::Submit;
        app.handle_key(key(KeyCode::Enter));
        assert!(!app.state().is_loading);
    }

    #[tokio::test]
    async fn test_enter_on_valid_form_starts_loading() {
        let mut app = app();
        type_text(&mut app, "user@example.com");
        app.handle_key(key(KeyCode::Tab));
        type_text(&mut app, "secret");
        app.focus = Focus::Submit;
        app.handle_key(key(KeyCode::Enter));
        assert!(app.state().is_loading);
    }

    #[tokio::test]
    async fn test_ctrl_enter_submits_from_any_focus() {
        let mut app = app();
        type_text(&mut app, "user@example.com");
        app.handle_key(key(KeyCode::Tab));
        type_text(&mut app, "secret");
        app.focus = Focus::Email;
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::CONTROL));
        assert!(app.state().is_loading);
    }

    #[tokio::test]
    async fn test_form_inert_while_loading() {
        let mut app = app();
        type_text(&mut app, "user@example.com");
        app.handle_key(key(KeyCode::Tab));
        type_text(&mut app, "secret");
        app.focus = Focus::Submit;
        app.handle_key(key(KeyCode::Enter));
        assert!(app.state().is_loading);

        let email_before = app.state().email.clone();
        app.focus = Focus::Email;
        type_text(&mut app, "x");
        assert_eq!(app.state().email, email_before);
    }

    #[tokio::test]
    async fn test_error_dialog_captures_input_until_dismissed() {
        let mut app = app();
        type_text(&mut app, "user@example.com");
        app.handle_message(AppMessage::AuthFinished {
            outcome: Err(AuthFailure::SomethingWentWrong),
        });
        assert!(app.state().error.is_some());

        // Typing is swallowed while the dialog is up.
        type_text(&mut app, "x");
        assert_eq!(app.state().email.as_deref(), Some("user@example.com"));

        app.handle_key(key(KeyCode::Esc));
        assert!(app.state().error.is_none());
    }

    #[tokio::test]
    async fn test_tick_advances_spinner_only_while_loading() {
        let mut app = app();
        app.tick();
        assert_eq!(app.spinner_frame, 0);

        type_text(&mut app, "user@example.com");
        app.handle_key(key(KeyCode::Tab));
        type_text(&mut app, "secret");
        app.focus = Focus::Submit;
        app.handle_key(key(KeyCode::Enter));
        app.tick();
        assert_eq!(app.spinner_frame, 1);
    }

    #[tokio::test]
    async fn test_auth_finished_clears_loading_and_sets_error() {
        let mut app = app();
        app.handle_message(AppMessage::AuthFinished {
            outcome: Err(AuthFailure::SomethingWentWrong),
        });
        assert!(!app.state().is_loading);
        assert_eq!(app.state().error, Some(AuthFailure::SomethingWentWrong));
    }
}
