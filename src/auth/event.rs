//! Discrete user intents the authentication screen reacts to.

/// One event per user action; each deterministically produces the next
/// [`AuthState`](crate::auth::AuthState).
#[derive(Debug, Clone, PartialEq)]
pub enum AuthEvent {
    /// Switch between sign-in and sign-up.
    ToggleMode,
    /// The email field changed.
    EmailChanged(String),
    /// The password field changed.
    PasswordChanged(String),
    /// Submit the form.
    Authenticate,
    /// Dismiss the visible error.
    ErrorDismissed,
}
