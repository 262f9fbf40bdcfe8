//! Per-client login attempt throttling.
//!
//! The throttle owns the only piece of in-process shared mutable state in
//! the system: a map from client key (network address) to the timestamps
//! of recent failed logins. All access happens under one mutex so the
//! read-prune-append/clear sequence cannot lose updates under concurrent
//! logins from the same client.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;

use taskhub_core::clock::Clock;
use taskhub_core::config::auth::AuthConfig;
use taskhub_core::error::AppError;

/// Sliding-window login throttle keyed by client address.
///
/// A key moves from clear to locked once `max_attempts` failures land
/// inside the rolling window. Timestamps older than the window are pruned
/// lazily on each attempt for that key; a successful login clears the key
/// entirely. State is ephemeral and lost on restart.
pub struct LoginThrottle {
    /// Client key → failure timestamps within the window.
    attempts: Mutex<HashMap<String, Vec<DateTime<Utc>>>>,
    /// Failures tolerated before lockout.
    max_attempts: usize,
    /// Rolling window length.
    window: Duration,
    /// Time source, injected for deterministic tests.
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for LoginThrottle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginThrottle")
            .field("max_attempts", &self.max_attempts)
            .field("window", &self.window)
            .finish()
    }
}

impl LoginThrottle {
    /// Creates a new throttle from auth configuration.
    pub fn new(config: &AuthConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            attempts: Mutex::new(HashMap::new()),
            max_attempts: config.max_login_attempts,
            window: Duration::seconds(config.lockout_window_seconds as i64),
            clock,
        }
    }

    /// Checks whether a login attempt from this client may proceed.
    ///
    /// Prunes expired failures for the key first. When the key is locked
    /// the error carries a human-readable wait hint derived from the
    /// window; the check itself never consumes an attempt, so repeated
    /// checks while locked do not extend the lockout.
    pub async fn check(&self, key: &str) -> Result<(), AppError> {
        let mut attempts = self.attempts.lock().await;
        let now = self.clock.now();
        self.prune(&mut attempts, key, now);

        let recent = attempts.get(key).map_or(0, Vec::len);
        if recent >= self.max_attempts {
            return Err(AppError::rate_limited(format!(
                "Too many login attempts. Try again in {} minutes.",
                self.window.num_minutes()
            )));
        }
        Ok(())
    }

    /// Records a failed login for this client.
    pub async fn record_failure(&self, key: &str) {
        let mut attempts = self.attempts.lock().await;
        let now = self.clock.now();
        self.prune(&mut attempts, key, now);
        attempts.entry(key.to_string()).or_default().push(now);
    }

    /// Clears all recorded failures for this client (successful login).
    pub async fn clear(&self, key: &str) {
        self.attempts.lock().await.remove(key);
    }

    /// Drops timestamps older than the window; removes the key entirely
    /// when nothing recent remains, so the map only grows with the number
    /// of distinct recently-failing clients.
    fn prune(
        &self,
        attempts: &mut HashMap<String, Vec<DateTime<Utc>>>,
        key: &str,
        now: DateTime<Utc>,
    ) {
        if let Some(timestamps) = attempts.get_mut(key) {
            timestamps.retain(|t| now - *t < self.window);
            if timestamps.is_empty() {
                attempts.remove(key);
            }
        }
    }
}
