//! Authentication domain: mode, password requirements, screen state, events,
//! the reducer that ties them together, and the (stubbed) backend seam.

pub mod backend;
pub mod controller;
pub mod event;
pub mod mode;
pub mod requirement;
pub mod state;

pub use backend::{Authenticator, StubAuthenticator};
pub use controller::AuthController;
pub use event::AuthEvent;
pub use mode::AuthMode;
pub use requirement::{satisfied_by, PasswordRequirement};
pub use state::AuthState;
