//! Authentication mode: whether the form collects a sign-in or sign-up
//! submission.

use crate::ui::strings::MessageId;

/// Which kind of submission the form is collecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    /// Flip between sign-in and sign-up.
    pub fn toggle(self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        }
    }

    /// Screen title for this mode.
    pub fn title(self) -> MessageId {
        match self {
            AuthMode::SignIn => MessageId::SignInTitle,
            AuthMode::SignUp => MessageId::SignUpTitle,
        }
    }

    /// Label for the submit button in this mode.
    pub fn submit_label(self) -> MessageId {
        match self {
            AuthMode::SignIn => MessageId::SignInAction,
            AuthMode::SignUp => MessageId::SignUpAction,
        }
    }

    /// Prompt inviting the user to switch to the other mode.
    pub fn toggle_prompt(self) -> MessageId {
        match self {
            AuthMode::SignIn => MessageId::NeedAccountPrompt,
            AuthMode::SignUp => MessageId::HaveAccountPrompt,
        }
    }
}
