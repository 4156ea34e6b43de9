//! Status Indicator Component
//!
//! Renders spinner and error status lines. Used for the in-flight
//! authentication attempt and the failure dialog body.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::{COLOR_DIM, COLOR_ERROR, COLOR_LOADING};

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Status indicator types
#[derive(Debug, Clone)]
pub enum StatusIndicator {
    /// Spinning indicator with a message
    Spinner {
        /// Message to display (e.g., "Authenticating...")
        message: String,
        /// Current frame index (0-3, auto-cycles)
        frame: usize,
    },
    /// Error indicator with message and dismiss hint
    Error {
        /// Error message
        message: String,
        /// Hint shown below the message (e.g., "Press Esc to dismiss")
        hint: Option<String>,
    },
}

impl StatusIndicator {
    /// Create a new spinner indicator
    pub fn spinner(message: impl Into<String>, frame: usize) -> Self {
        Self::Spinner {
            message: message.into(),
            frame,
        }
    }

    /// Create a new error indicator
    pub fn error(message: impl Into<String>, hint: Option<String>) -> Self {
        Self::Error {
            message: message.into(),
            hint,
        }
    }
}

/// Get the current spinner character based on frame
pub fn get_spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Advance the spinner frame
pub fn next_spinner_frame(current: usize) -> usize {
    (current + 1) % SPINNER_FRAMES.len()
}

/// Render a status indicator as lines to be drawn by the caller.
pub fn render_status_indicator(indicator: &StatusIndicator) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();

    match indicator {
        StatusIndicator::Spinner { message, frame } => {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} ", get_spinner_char(*frame)),
                    Style::default().fg(COLOR_LOADING),
                ),
                Span::styled(
                    message.clone(),
                    Style::default()
                        .fg(COLOR_LOADING)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        }

        StatusIndicator::Error { message, hint } => {
            lines.push(Line::from(vec![
                Span::styled("\u{2717} ", Style::default().fg(COLOR_ERROR)),
                Span::styled(
                    message.clone(),
                    Style::default()
                        .fg(COLOR_ERROR)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));

            if let Some(hint) = hint {
                lines.push(Line::from(""));
                lines.push(Line::from(vec![Span::styled(
                    hint.clone(),
                    Style::default().fg(COLOR_DIM),
                )]));
            }
        }
    }

    lines
}

/// Calculate the height needed for a status indicator
pub fn calculate_status_height(indicator: &StatusIndicator) -> u16 {
    match indicator {
        StatusIndicator::Spinner { .. } => 1,
        StatusIndicator::Error { hint, .. } => {
            if hint.is_some() {
                3
            } else {
                1
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
