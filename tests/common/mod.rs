//! Common test utilities for integration tests.
//!
//! Provides a builder for `App` instances in various screen states and
//! helpers for inspecting rendered `TestBackend` buffers.

use ratatui::backend::TestBackend;
use ratatui::style::Color;
use ratatui::Terminal;

use vestibule::app::{App, AppMessage, Focus};
use vestibule::auth::{AuthEvent, AuthMode};
use vestibule::config::Config;
use vestibule::error::AuthFailure;

/// Builder for creating test App instances in specific screen states.
#[derive(Default)]
pub struct TestAppBuilder {
    mode: Option<AuthMode>,
    email: Option<String>,
    password: Option<String>,
    focus: Option<Focus>,
    loading: bool,
    failed: bool,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sign_up(mut self) -> Self {
        self.mode = Some(AuthMode::SignUp);
        self
    }

    pub fn email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }

    pub fn password(mut self, password: &str) -> Self {
        self.password = Some(password.to_string());
        self
    }

    pub fn focus(mut self, focus: Focus) -> Self {
        self.focus = Some(focus);
        self
    }

    /// Put the app mid-attempt (loading spinner visible).
    pub fn loading(mut self) -> Self {
        self.loading = true;
        self
    }

    /// Put the app in the failed state (error dialog visible).
    pub fn failed(mut self) -> Self {
        self.failed = true;
        self
    }

    pub fn build(self) -> App {
        let mut app = App::new(Config::default().with_latency_ms(0));
        if self.mode == Some(AuthMode::SignUp) {
            app.controller.handle_event(AuthEvent::ToggleMode);
        }
        if let Some(email) = self.email {
            app.controller.handle_event(AuthEvent::EmailChanged(email));
        }
        if let Some(password) = self.password {
            app.controller
                .handle_event(AuthEvent::PasswordChanged(password));
        }
        if let Some(focus) = self.focus {
            app.focus = focus;
        }
        if self.loading {
            app.controller.handle_event(AuthEvent::Authenticate);
        }
        if self.failed {
            app.handle_message(AppMessage::AuthFinished {
                outcome: Err(AuthFailure::SomethingWentWrong),
            });
        }
        app
    }
}

/// Draw the app into a fresh `TestBackend` terminal of the given size.
pub fn render_app(app: &App, width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| vestibule::ui::render(frame, app)).unwrap();
    terminal
}

/// Flatten the rendered buffer into one string, rows separated by newlines.
pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

/// Find the foreground color of the first cell where `needle` starts in
/// the rendered buffer.
pub fn fg_color_at_text(terminal: &Terminal<TestBackend>, needle: &str) -> Option<Color> {
    let buffer = terminal.backend().buffer();
    let needle_chars: Vec<char> = needle.chars().collect();
    for y in 0..buffer.area.height {
        let row: Vec<char> = (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().chars().next().unwrap_or(' '))
            .collect();
        for start in 0..=row.len().saturating_sub(needle_chars.len()) {
            if row[start..start + needle_chars.len()] == needle_chars[..] {
                return buffer[(start as u16, y)].style().fg;
            }
        }
    }
    None
}
