//! Messages received from async operations.

use crate::error::AuthFailure;

/// Messages posted back to the UI-owned context by background tasks.
#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    /// An authentication attempt finished.
    AuthFinished {
        /// Outcome of the attempt. The stubbed backend only ever produces
        /// `Err(AuthFailure::SomethingWentWrong)`.
        outcome: Result<(), AuthFailure>,
    },
}
