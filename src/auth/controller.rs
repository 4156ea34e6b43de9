//! Reducer and effect handling for the authentication screen.
//!
//! `AuthController` is the single owner of the current [`AuthState`]. Every
//! [`AuthEvent`] is applied synchronously; the one asynchronous effect
//! (the authentication attempt) runs on a background task and publishes its
//! outcome back through the app message channel, so all state mutation stays
//! on the owner's context.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;

use crate::app::AppMessage;
use crate::auth::backend::Authenticator;
use crate::auth::event::AuthEvent;
use crate::auth::requirement::satisfied_by;
use crate::auth::state::AuthState;
use crate::error::AuthFailure;

/// Owns the authentication screen state and applies events to it.
pub struct AuthController {
    state: AuthState,
    backend: Arc<dyn Authenticator>,
    message_tx: mpsc::UnboundedSender<AppMessage>,
}

impl AuthController {
    /// Create a controller with the default (empty, sign-in) state.
    pub fn new(
        backend: Arc<dyn Authenticator>,
        message_tx: mpsc::UnboundedSender<AppMessage>,
    ) -> Self {
        Self {
            state: AuthState::default(),
            backend,
            message_tx,
        }
    }

    /// The current state snapshot.
    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// Apply a user event, replacing the state record.
    pub fn handle_event(&mut self, event: AuthEvent) {
        debug!(?event, "auth event");
        match event {
            AuthEvent::ToggleMode => {
                self.state = AuthState {
                    mode: self.state.mode.toggle(),
                    ..self.state.clone()
                };
            }
            AuthEvent::EmailChanged(email) => {
                self.state = AuthState {
                    email: Some(email),
                    ..self.state.clone()
                };
            }
            AuthEvent::PasswordChanged(password) => {
                self.state = AuthState {
                    satisfied_requirements: satisfied_by(&password),
                    password: Some(password),
                    ..self.state.clone()
                };
            }
            AuthEvent::Authenticate => self.authenticate(),
            AuthEvent::ErrorDismissed => {
                self.state = AuthState {
                    error: None,
                    ..self.state.clone()
                };
            }
        }
    }

    /// Apply the outcome of a completed attempt (delivered via the message
    /// channel). Loading ends and any failure becomes the visible error.
    pub fn finish_authentication(&mut self, outcome: Result<(), AuthFailure>) {
        debug!(?outcome, "authentication finished");
        self.state = AuthState {
            is_loading: false,
            error: outcome.err(),
            ..self.state.clone()
        };
    }

    /// Start an attempt: loading becomes observable synchronously, then one
    /// background task performs the timed call and posts the outcome back.
    ///
    /// A second `Authenticate` while one is in flight spawns its own task;
    /// nothing is coalesced. If the receiver is gone by completion time the
    /// pending update is dropped.
    fn authenticate(&mut self) {
        self.state = AuthState {
            is_loading: true,
            ..self.state.clone()
        };

        let email = self.state.email.clone().unwrap_or_default();
        let password = self.state.password.clone().unwrap_or_default();
        let backend = Arc::clone(&self.backend);
        let tx = self.message_tx.clone();

        tokio::spawn(async move {
            let outcome = backend.authenticate(&email, &password).await;
            let _ = tx.send(AppMessage::AuthFinished { outcome });
        });
    }
}
