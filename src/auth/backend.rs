//! Authentication backend abstraction.
//!
//! The trait exists so the screen can be wired to a real backend later and
//! mocked in tests. The shipped implementation is a deliberate stub: it
//! waits a fixed simulated latency and always fails, because no backend
//! exists yet.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::AuthFailure;

/// Performs an authentication attempt for the given credentials.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Attempt to authenticate. `Ok(())` would mean success; the stub
    /// implementation never produces it.
    async fn authenticate(&self, email: &str, password: &str) -> Result<(), AuthFailure>;
}

/// Simulated backend: fixed latency, then a fixed failure.
#[derive(Debug, Clone)]
pub struct StubAuthenticator {
    latency: Duration,
}

impl StubAuthenticator {
    /// Create a stub that waits `latency` before failing.
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// The configured simulated latency.
    pub fn latency(&self) -> Duration {
        self.latency
    }
}

#[async_trait]
impl Authenticator for StubAuthenticator {
    async fn authenticate(&self, _email: &str, _password: &str) -> Result<(), AuthFailure> {
        // Uses tokio's clock so tests can pause and advance time.
        tokio::time::sleep(self.latency).await;
        Err(AuthFailure::SomethingWentWrong)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_stub_always_fails_after_latency() {
        let backend = StubAuthenticator::new(Duration::from_millis(2000));
        let started = tokio::time::Instant::now();
        let result = backend.authenticate("user@example.com", "passworD1").await;
        assert_eq!(result, Err(AuthFailure::SomethingWentWrong));
        assert!(started.elapsed() >= Duration::from_millis(2000));
    }

    #[tokio::test]
    async fn test_zero_latency_stub() {
        let backend = StubAuthenticator::new(Duration::ZERO);
        let result = backend.authenticate("a@b.c", "x").await;
        assert_eq!(result, Err(AuthFailure::SomethingWentWrong));
    }
}
