//! Error types for vestibule.
//!
//! Two layers: [`AuthFailure`] is the symbolic, user-facing outcome of an
//! authentication attempt and lives inside the screen state until dismissed;
//! [`VestibuleError`] covers fatal shell errors (terminal, config) that end
//! the program.

use std::path::PathBuf;

use thiserror::Error;

use crate::ui::strings::MessageId;

/// Symbolic outcome of a failed authentication attempt.
///
/// Carries no display text; the UI resolves the [`MessageId`] through its
/// strings table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthFailure {
    /// The backend reported a failure with no further detail.
    #[error("authentication failed")]
    SomethingWentWrong,
}

impl AuthFailure {
    /// Display message identifier for this failure.
    pub fn message(self) -> MessageId {
        match self {
            AuthFailure::SomethingWentWrong => MessageId::ErrorSomethingWentWrong,
        }
    }
}

/// Fatal application errors.
#[derive(Debug, Error)]
pub enum VestibuleError {
    /// Terminal setup/teardown or drawing failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// The config file exists but could not be parsed.
    #[error("failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result alias for fallible vestibule operations.
pub type Result<T> = std::result::Result<T, VestibuleError>;
