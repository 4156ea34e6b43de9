//! Input Field Component
//!
//! A single-line text input with focus handling, password masking, and
//! placeholder text. Rounded borders to match the rest of the screen.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_INPUT_BG};

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    /// Label displayed above the input
    pub label: &'a str,
    /// Current value of the input
    pub value: &'a str,
    /// Whether the input is currently focused
    pub focused: bool,
    /// Whether to mask the value (for passwords)
    pub is_password: bool,
    /// Optional placeholder text when empty
    pub placeholder: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    /// Create a new input field configuration
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            is_password: false,
            placeholder: None,
        }
    }

    /// Set whether the input is focused
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set whether to mask the value (for passwords)
    pub fn password(mut self, is_password: bool) -> Self {
        self.is_password = is_password;
        self
    }

    /// Set placeholder text
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

/// Rows consumed by an input field: label (1) + bordered input box (3).
pub const INPUT_FIELD_HEIGHT: u16 = 4;

/// Build the string shown inside the box: masked bullets for passwords,
/// placeholder when empty, otherwise the raw value. The tail is kept in
/// view when the content is wider than the box.
fn display_value(config: &InputFieldConfig, content_width: u16) -> String {
    let mut shown = if config.is_password {
        "\u{2022}".repeat(config.value.chars().count())
    } else if config.value.is_empty() {
        config.placeholder.unwrap_or_default().to_string()
    } else {
        config.value.to_string()
    };

    // Reserve one cell for the cursor when focused.
    let budget = content_width.saturating_sub(u16::from(config.focused)) as usize;
    while shown.width() > budget {
        shown.remove(0);
    }
    shown
}

/// Render an input field with label and input box.
///
/// # Returns
/// The height consumed by this input field
pub fn render_input_field(frame: &mut Frame, area: Rect, config: &InputFieldConfig) -> u16 {
    // Label
    let label_style = if config.focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    let label_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: 1,
    };
    let label = Paragraph::new(Line::from(Span::styled(config.label, label_style)));
    frame.render_widget(label, label_area);

    // Input box
    let input_area = Rect {
        x: area.x,
        y: area.y + 1,
        width: area.width,
        height: 3,
    };

    let border_color = if config.focused {
        Color::White
    } else {
        COLOR_BORDER
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(COLOR_INPUT_BG));

    let showing_placeholder = config.value.is_empty() && config.placeholder.is_some();
    let text_style = if showing_placeholder || !config.focused {
        Style::default().fg(COLOR_DIM)
    } else {
        Style::default().fg(Color::White)
    };

    let mut content = display_value(config, area.width.saturating_sub(2));
    if config.focused {
        content.push('\u{2588}'); // Block cursor
    }

    let input_text = Paragraph::new(Line::from(Span::styled(content, text_style))).block(block);
    frame.render_widget(input_text, input_area);

    INPUT_FIELD_HEIGHT
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_field_config_new() {
        let config = InputFieldConfig::new("Email", "user@example.com");
        assert_eq!(config.label, "Email");
        assert_eq!(config.value, "user@example.com");
        assert!(!config.focused);
        assert!(!config.is_password);
        assert!(config.placeholder.is_none());
    }

    #[test]
    fn test_input_field_config_builder() {
        let config = InputFieldConfig::new("Password", "secret")
            .focused(true)
            .password(true)
            .placeholder("Enter password");

        assert!(config.focused);
        assert!(config.is_password);
        assert_eq!(config.placeholder, Some("Enter password"));
    }

    #[test]
    fn test_password_masking() {
        let config = InputFieldConfig::new("Password", "secret").password(true);
        assert_eq!(display_value(&config, 40), "\u{2022}".repeat(6));
    }

    #[test]
    fn test_masking_counts_chars() {
        let config = InputFieldConfig::new("Password", "päss").password(true);
        assert_eq!(display_value(&config, 40), "\u{2022}".repeat(4));
    }

    #[test]
    fn test_placeholder_when_empty() {
        let config = InputFieldConfig::new("Email", "").placeholder("you@example.com");
        assert_eq!(display_value(&config, 40), "you@example.com");
    }

    #[test]
    fn test_tail_kept_in_view_when_overflowing() {
        let config = InputFieldConfig::new("Email", "abcdefghij").focused(true);
        // 8 columns minus 1 reserved for the cursor leaves 7 visible.
        assert_eq!(display_value(&config, 8), "defghij");
    }
}
