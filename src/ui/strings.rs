//! Display-string resolution.
//!
//! Domain code never produces user-facing text; it selects a [`MessageId`]
//! and the UI resolves it here. Keeping the indirection makes the reducer
//! independent of wording and keeps all copy in one place.

/// Opaque identifier for a piece of user-facing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageId {
    SignInTitle,
    SignUpTitle,
    SignInAction,
    SignUpAction,
    NeedAccountPrompt,
    HaveAccountPrompt,
    EmailLabel,
    PasswordLabel,
    EmailPlaceholder,
    PasswordPlaceholder,
    RequirementEightCharacters,
    RequirementCapitalLetter,
    RequirementNumber,
    ErrorDialogTitle,
    ErrorSomethingWentWrong,
    ErrorDismissHint,
    AuthenticatingSpinner,
}

/// Resolve a message identifier to display text.
pub fn resolve(id: MessageId) -> &'static str {
    match id {
        MessageId::SignInTitle => "Sign In",
        MessageId::SignUpTitle => "Sign Up",
        MessageId::SignInAction => "Sign in",
        MessageId::SignUpAction => "Sign up",
        MessageId::NeedAccountPrompt => "Need an account? Press Ctrl+T to sign up",
        MessageId::HaveAccountPrompt => "Already have an account? Press Ctrl+T to sign in",
        MessageId::EmailLabel => "Email",
        MessageId::PasswordLabel => "Password",
        MessageId::EmailPlaceholder => "you@example.com",
        MessageId::PasswordPlaceholder => "Enter password",
        MessageId::RequirementEightCharacters => "At least 8 characters",
        MessageId::RequirementCapitalLetter => "At least 1 uppercase letter",
        MessageId::RequirementNumber => "At least 1 digit",
        MessageId::ErrorDialogTitle => "Error",
        MessageId::ErrorSomethingWentWrong => "Something went wrong!",
        MessageId::ErrorDismissHint => "Press Esc to dismiss",
        MessageId::AuthenticatingSpinner => "Authenticating...",
    }
}
