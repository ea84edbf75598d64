//! Capabilities the gate needs from its host environment.
//!
//! DESIGN
//! ======
//! The browser implementations live in `client::browser`; the small value
//! types here cover native tools and tests.

use crate::error::GateError;

/// Read-only access to the cached ID token.
pub trait TokenReader {
    /// Current stored token, if any.
    fn read_token(&self) -> Option<String>;
}

/// Full-page navigation.
pub trait Navigator {
    /// Navigate the current page to `href`.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::Navigation`] when the host refuses the change.
    fn navigate(&self, href: &str) -> Result<(), GateError>;
}

/// Blocking user-visible notification.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Wall clock in Unix epoch milliseconds.
pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// Clock backed by the operating system.
///
/// Not usable on `wasm32-unknown-unknown`; the browser bundle injects its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[allow(clippy::cast_possible_truncation)]
    fn now_millis(&self) -> i64 {
        (time::OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
    }
}

/// Clock frozen at a fixed instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

/// Token reader over an already-known value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticTokenReader(pub Option<String>);

impl StaticTokenReader {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    #[must_use]
    pub fn empty() -> Self {
        Self(None)
    }
}

impl TokenReader for StaticTokenReader {
    fn read_token(&self) -> Option<String> {
        self.0.clone()
    }
}

#[cfg(test)]
#[path = "capability_test.rs"]
mod tests;
