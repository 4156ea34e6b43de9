//! Password Requirement List Component
//!
//! One row per password requirement: a check mark in green when the
//! current password satisfies it, a cross in dim gray when it doesn't.
//! Only shown in sign-up mode.

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::auth::requirement::PasswordRequirement;
use crate::auth::state::AuthState;
use crate::ui::strings::resolve;
use crate::ui::theme::{COLOR_DIM, COLOR_SUCCESS};

/// Marker shown next to a satisfied requirement.
const MARK_SATISFIED: &str = "\u{2713}"; // ✓
/// Marker shown next to an unsatisfied requirement.
const MARK_UNSATISFIED: &str = "\u{2717}"; // ✗

/// Rows consumed by the requirement list.
pub const REQUIREMENT_LIST_HEIGHT: u16 = PasswordRequirement::ALL.len() as u16;

/// Render one line per requirement, colored by satisfaction.
pub fn render_requirement_list(state: &AuthState) -> Vec<Line<'static>> {
    PasswordRequirement::ALL
        .into_iter()
        .map(|req| {
            let satisfied = state.is_requirement_met(req);
            let (mark, style) = if satisfied {
                (MARK_SATISFIED, Style::default().fg(COLOR_SUCCESS))
            } else {
                (MARK_UNSATISFIED, Style::default().fg(COLOR_DIM))
            };
            Line::from(vec![
                Span::styled(format!("{} ", mark), style),
                Span::styled(resolve(req.label()).to_string(), style),
            ])
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::requirement::satisfied_by;
    use crate::ui::theme::COLOR_SUCCESS;

    fn state_with_password(password: &str) -> AuthState {
        AuthState {
            password: Some(password.to_string()),
            satisfied_requirements: satisfied_by(password),
            ..AuthState::default()
        }
    }

    #[test]
    fn test_one_line_per_requirement() {
        let lines = render_requirement_list(&AuthState::default());
        assert_eq!(lines.len(), PasswordRequirement::ALL.len());
        assert_eq!(lines.len() as u16, REQUIREMENT_LIST_HEIGHT);
    }

    #[test]
    fn test_no_requirements_satisfied_shows_crosses() {
        let lines = render_requirement_list(&AuthState::default());
        for line in &lines {
            assert!(line.spans[0].content.starts_with(MARK_UNSATISFIED));
        }
    }

    #[test]
    fn test_all_satisfied_shows_green_checks() {
        let lines = render_requirement_list(&state_with_password("passworD1"));
        for line in &lines {
            assert!(line.spans[0].content.starts_with(MARK_SATISFIED));
            assert_eq!(line.spans[0].style.fg, Some(COLOR_SUCCESS));
        }
    }

    #[test]
    fn test_partial_satisfaction_mixes_marks() {
        // "password" satisfies only the length requirement (first row).
        let lines = render_requirement_list(&state_with_password("password"));
        assert!(lines[0].spans[0].content.starts_with(MARK_SATISFIED));
        assert!(lines[1].spans[0].content.starts_with(MARK_UNSATISFIED));
        assert!(lines[2].spans[0].content.starts_with(MARK_UNSATISFIED));
    }

    #[test]
    fn test_row_text_uses_requirement_labels() {
        let lines = render_requirement_list(&AuthState::default());
        let texts: Vec<String> = lines
            .iter()
            .map(|l| l.spans[1].content.to_string())
            .collect();
        assert!(texts.contains(&"At least 8 characters".to_string()));
        assert!(texts.contains(&"At least 1 uppercase letter".to_string()));
        assert!(texts.contains(&"At least 1 digit".to_string()));
    }
}
