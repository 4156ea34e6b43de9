//! Dialog Frame Component
//!
//! A centered dialog frame with rounded borders. Handles background
//! clearing and responsive sizing.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_BORDER, COLOR_DIALOG_BG, COLOR_HEADER};

/// Configuration for rendering a dialog frame
#[derive(Debug, Clone)]
pub struct DialogFrameConfig<'a> {
    /// Title displayed in the border
    pub title: &'a str,
    /// Content height (not including borders)
    pub content_height: u16,
    /// Minimum width
    pub min_width: u16,
    /// Maximum width
    pub max_width: u16,
}

impl<'a> DialogFrameConfig<'a> {
    /// Create a new dialog frame configuration
    pub fn new(title: &'a str, content_height: u16) -> Self {
        Self {
            title,
            content_height,
            min_width: 30,
            max_width: 60,
        }
    }

    /// Set the minimum width
    pub fn min_width(mut self, width: u16) -> Self {
        self.min_width = width;
        self
    }

    /// Set the maximum width
    pub fn max_width(mut self, width: u16) -> Self {
        self.max_width = width;
        self
    }
}

/// Calculate dialog width based on terminal size and configuration
fn calculate_dialog_width(ctx: &LayoutContext, config: &DialogFrameConfig, area_width: u16) -> u16 {
    if ctx.is_extra_small() {
        // Extra small: take most of the screen width, leave 2 cols margin
        area_width.saturating_sub(4).min(config.max_width)
    } else if ctx.is_narrow() {
        // Narrow: 80% of width, within bounds
        ctx.bounded_width(80, config.min_width, config.max_width)
    } else {
        // Normal: 50% of width, within bounds
        ctx.bounded_width(50, config.min_width, config.max_width)
    }
}

/// Render a dialog frame and return the inner content area.
///
/// Centers the dialog, clears the backdrop behind it, draws the titled
/// border, and returns the inner `Rect` where content goes.
pub fn render_dialog_frame(
    frame: &mut Frame,
    area: Rect,
    ctx: &LayoutContext,
    config: &DialogFrameConfig,
) -> Rect {
    let dialog_width = calculate_dialog_width(ctx, config, area.width);
    let dialog_height = config.content_height + 2; // Borders

    let x = (area.width.saturating_sub(dialog_width)) / 2;
    let y = (area.height.saturating_sub(dialog_height)) / 2;

    let dialog_area = Rect {
        x,
        y,
        width: dialog_width,
        height: dialog_height,
    };

    frame.render_widget(Clear, dialog_area);

    let title = format!(" {} ", config.title);
    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_DIALOG_BG));

    frame.render_widget(block, dialog_area);

    Rect {
        x: dialog_area.x + 1,
        y: dialog_area.y + 1,
        width: dialog_area.width.saturating_sub(2),
        height: dialog_area.height.saturating_sub(2),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_frame_config_new() {
        let config = DialogFrameConfig::new("Error", 5);
        assert_eq!(config.title, "Error");
        assert_eq!(config.content_height, 5);
        assert_eq!(config.min_width, 30);
        assert_eq!(config.max_width, 60);
    }

    #[test]
    fn test_dialog_frame_config_builder() {
        let config = DialogFrameConfig::new("Error", 5).min_width(40).max_width(70);
        assert_eq!(config.min_width, 40);
        assert_eq!(config.max_width, 70);
    }

    #[test]
    fn test_calculate_dialog_width_extra_small() {
        let ctx = LayoutContext::new(50, 14);
        let config = DialogFrameConfig::new("Error", 5);
        let width = calculate_dialog_width(&ctx, &config, 50);
        assert!(width <= 60);
        assert_eq!(width, 46); // 50 - 4 margin
    }

    #[test]
    fn test_calculate_dialog_width_normal() {
        let ctx = LayoutContext::new(120, 40);
        let config = DialogFrameConfig::new("Error", 5);
        // 50% of 120 = 60, clamped to max 60
        assert_eq!(calculate_dialog_width(&ctx, &config, 120), 60);
    }

    #[test]
    fn test_calculate_dialog_width_narrow() {
        let ctx = LayoutContext::new(70, 24);
        let config = DialogFrameConfig::new("Error", 5);
        // 80% of 70 = 56, within [30, 60]
        assert_eq!(calculate_dialog_width(&ctx, &config, 70), 56);
    }
}
