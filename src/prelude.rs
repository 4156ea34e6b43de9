//! Prelude module for convenient imports.
//!
//! ```ignore
//! use vestibule::prelude::*;
//! ```

// Core application types
pub use crate::app::{App, AppMessage, Focus};

// Authentication domain
pub use crate::auth::{
    satisfied_by, AuthController, AuthEvent, AuthMode, AuthState, Authenticator,
    PasswordRequirement, StubAuthenticator,
};

// Configuration and errors
pub use crate::config::Config;
pub use crate::error::{AuthFailure, VestibuleError};

// UI types
pub use crate::ui::{render, LayoutContext};
