//! Time source abstraction.
//!
//! The login throttle counts failures inside a rolling window, so anything
//! that reads the current time takes a [`Clock`] instead of calling
//! `Utc::now()` directly. Tests substitute a manually-advanced clock.

use chrono::{DateTime, Utc};

/// A source of the current UTC time.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// The production clock, backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
