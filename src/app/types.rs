//! Type definitions for the application shell.

/// Which form element has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Email,
    Password,
    Submit,
    ModeToggle,
}

impl Focus {
    /// Focus order, top to bottom.
    const ORDER: [Focus; 4] = [Focus::Email, Focus::Password, Focus::Submit, Focus::ModeToggle];

    /// Next element in the cycle (Tab / Down).
    pub fn next(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    /// Previous element in the cycle (Shift+Tab / Up).
    pub fn prev(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}
