//! The authentication screen's state snapshot.
//!
//! The whole record is replaced on every event; nothing else in the
//! application mutates it. Readers always observe a consistent snapshot.

use crate::auth::mode::AuthMode;
use crate::auth::requirement::PasswordRequirement;
use crate::error::AuthFailure;

/// Snapshot of everything the authentication screen needs to render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    /// Whether the form is collecting a sign-in or sign-up submission.
    pub mode: AuthMode,
    /// Email as typed; `None` until the first edit.
    pub email: Option<String>,
    /// Password as typed; `None` until the first edit.
    pub password: Option<String>,
    /// Requirements the current password satisfies (membership set).
    pub satisfied_requirements: Vec<PasswordRequirement>,
    /// An authentication attempt is in flight.
    pub is_loading: bool,
    /// Failure from the last completed attempt, until dismissed.
    pub error: Option<AuthFailure>,
}

impl AuthState {
    /// Whether the form can be submitted.
    ///
    /// Both fields must be present and non-empty. Sign-up additionally
    /// requires every [`PasswordRequirement`] to be satisfied; sign-in does
    /// not care about password strength.
    pub fn is_form_valid(&self) -> bool {
        let has_email = self.email.as_deref().is_some_and(|e| !e.is_empty());
        let has_password = self.password.as_deref().is_some_and(|p| !p.is_empty());

        let strength_ok = match self.mode {
            AuthMode::SignIn => true,
            AuthMode::SignUp => PasswordRequirement::ALL
                .iter()
                .all(|req| self.satisfied_requirements.contains(req)),
        };

        has_email && has_password && strength_ok
    }

    /// Whether `requirement` is currently satisfied.
    pub fn is_requirement_met(&self, requirement: PasswordRequirement) -> bool {
        self.satisfied_requirements.contains(&requirement)
    }
}
