//! Color theme constants for the vestibule UI.
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Header text color - white for titles
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background for input areas
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

/// Satisfied requirement / positive state - green
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Error text and indicators - red
pub const COLOR_ERROR: Color = Color::Red;

/// In-flight state (spinner) - yellow
pub const COLOR_LOADING: Color = Color::Yellow;

/// Background color for dialog boxes
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);
