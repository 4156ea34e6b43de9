//! UI rendering for the vestibule authentication screen.
//!
//! ## Responsive Layout System
//!
//! Rendering goes through `LayoutContext`, which encapsulates terminal
//! dimensions and provides proportional sizing and size-state queries
//! (`is_compact()`, `is_narrow()`, `bounded_width()`, ...). The screen
//! renders a centered form column that shrinks on narrow terminals and
//! falls back to a guard message below the minimum size.

mod auth_screen;
pub mod components;
pub mod layout;
pub mod strings;
pub mod theme;

// Re-export theme colors for external use
pub use theme::{
    COLOR_BORDER, COLOR_DIALOG_BG, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_INPUT_BG,
    COLOR_LOADING, COLOR_SUCCESS,
};

// Re-export layout system for external use
pub use layout::{
    breakpoints, is_terminal_too_small, LayoutContext, SizeCategory, MIN_TERMINAL_HEIGHT,
    MIN_TERMINAL_WIDTH,
};

pub use auth_screen::render_auth_screen;

use ratatui::Frame;

use crate::app::App;

/// Render the UI.
pub fn render(frame: &mut Frame, app: &App) {
    render_auth_screen(frame, app);
}
