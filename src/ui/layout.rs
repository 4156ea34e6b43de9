//! Responsive layout system.
//!
//! `LayoutContext` encapsulates terminal dimensions and provides fluid
//! sizing calculations for responsive rendering. It is passed to render
//! functions so they can make proportional sizing decisions.

// ============================================================================
// Screen Size Breakpoints
// ============================================================================

/// Terminal breakpoints for responsive layouts
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
    /// Medium terminal (< 120 columns)
    pub const MD_WIDTH: u16 = 120;

    /// Extra small terminal height (< 16 rows)
    pub const XS_HEIGHT: u16 = 16;
    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
    /// Medium terminal height (< 40 rows)
    pub const MD_HEIGHT: u16 = 40;
}

/// Smallest terminal the auth screen renders usefully in.
pub const MIN_TERMINAL_WIDTH: u16 = 34;
/// Smallest terminal height the auth screen renders usefully in. The
/// sign-up form (both fields, the requirement list, submit, and the
/// toggle prompt) needs 20 rows at minimum top padding.
pub const MIN_TERMINAL_HEIGHT: u16 = 20;

/// Whether the terminal is below the minimum renderable size.
pub fn is_terminal_too_small(width: u16, height: u16) -> bool {
    width < MIN_TERMINAL_WIDTH || height < MIN_TERMINAL_HEIGHT
}

/// Size category for responsive design decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeCategory {
    /// Extra small (< 60 cols or < 16 rows)
    ExtraSmall,
    /// Small (< 80 cols or < 24 rows)
    Small,
    /// Medium (< 120 cols or < 40 rows)
    Medium,
    /// Large (>= 120 cols and >= 40 rows)
    Large,
}

// ============================================================================
// Layout Context
// ============================================================================

/// Layout context holding terminal dimensions for responsive calculations.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    /// Create a new layout context with the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Calculate a width as a percentage of terminal width (minimum 1).
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Calculate a height as a percentage of terminal height (minimum 1).
    pub fn percent_height(&self, percentage: u16) -> u16 {
        ((self.height as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Calculate proportional width clamped to `[min, max]`.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max)
    }

    /// Get the width size category.
    pub fn width_category(&self) -> SizeCategory {
        if self.width < breakpoints::XS_WIDTH {
            SizeCategory::ExtraSmall
        } else if self.width < breakpoints::SM_WIDTH {
            SizeCategory::Small
        } else if self.width < breakpoints::MD_WIDTH {
            SizeCategory::Medium
        } else {
            SizeCategory::Large
        }
    }

    /// Get the height size category.
    pub fn height_category(&self) -> SizeCategory {
        if self.height < breakpoints::XS_HEIGHT {
            SizeCategory::ExtraSmall
        } else if self.height < breakpoints::SM_HEIGHT {
            SizeCategory::Small
        } else if self.height < breakpoints::MD_HEIGHT {
            SizeCategory::Medium
        } else {
            SizeCategory::Large
        }
    }

    /// Check if the terminal is in a "narrow" state (less than 80 columns).
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Check if the terminal is in a "short" state (less than 24 rows).
    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    /// Check if the terminal is in a "compact" state (narrow or short).
    ///
    /// Compact state indicates that UI elements should be condensed.
    pub fn is_compact(&self) -> bool {
        self.is_narrow() || self.is_short()
    }

    /// Check if the terminal is extra small (very constrained space).
    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH || self.height < breakpoints::XS_HEIGHT
    }

    /// Vertical padding above the form, shrinking on short terminals.
    pub fn form_top_padding(&self) -> u16 {
        if self.is_short() {
            1
        } else {
            self.height / 8
        }
    }
}

impl Default for LayoutContext {
    /// Returns a default layout context with standard 80x24 terminal size.
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
