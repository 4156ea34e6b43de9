//! Password strength requirements and their evaluator.
//!
//! Each requirement is a pure predicate over the password text. The
//! evaluator is total: every string, including the empty string, maps to a
//! (possibly empty) set of satisfied requirements.

use crate::ui::strings::MessageId;

/// A named password-strength check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordRequirement {
    /// At least eight characters.
    EightCharacters,
    /// At least one uppercase letter.
    CapitalLetter,
    /// At least one decimal digit.
    Number,
}

impl PasswordRequirement {
    /// All defined requirements, in display order.
    pub const ALL: [PasswordRequirement; 3] = [
        PasswordRequirement::EightCharacters,
        PasswordRequirement::CapitalLetter,
        PasswordRequirement::Number,
    ];

    /// Display label for this requirement.
    pub fn label(self) -> MessageId {
        match self {
            PasswordRequirement::EightCharacters => MessageId::RequirementEightCharacters,
            PasswordRequirement::CapitalLetter => MessageId::RequirementCapitalLetter,
            PasswordRequirement::Number => MessageId::RequirementNumber,
        }
    }

    /// Whether `password` satisfies this single requirement.
    pub fn is_met_by(self, password: &str) -> bool {
        match self {
            // Length counts Unicode scalar values, not bytes.
            PasswordRequirement::EightCharacters => password.chars().count() > 7,
            PasswordRequirement::CapitalLetter => password.chars().any(char::is_uppercase),
            PasswordRequirement::Number => password.chars().any(|c| c.is_ascii_digit()),
        }
    }
}

/// Evaluate which requirements `password` satisfies.
///
/// Order of the returned set follows [`PasswordRequirement::ALL`]; callers
/// should treat it as an unordered membership set.
pub fn satisfied_by(password: &str) -> Vec<PasswordRequirement> {
    PasswordRequirement::ALL
        .into_iter()
        .filter(|req| req.is_met_by(password))
        .collect()
}
