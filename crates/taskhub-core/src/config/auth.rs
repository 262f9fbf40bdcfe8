//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Token lifetime in days.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_days: u64,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Failed login attempts from one client before lockout.
    #[serde(default = "default_max_attempts")]
    pub max_login_attempts: usize,
    /// Rolling window in which failed attempts count, in seconds.
    #[serde(default = "default_lockout_window")]
    pub lockout_window_seconds: u64,
    /// Whether login/registration events may log usernames and emails.
    ///
    /// Password material is never logged regardless of this flag.
    #[serde(default = "default_true")]
    pub log_identifiers: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_days: default_token_ttl(),
            password_min_length: default_password_min(),
            max_login_attempts: default_max_attempts(),
            lockout_window_seconds: default_lockout_window(),
            log_identifiers: default_true(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_token_ttl() -> u64 {
    7
}

fn default_password_min() -> usize {
    6
}

fn default_max_attempts() -> usize {
    5
}

fn default_lockout_window() -> u64 {
    300
}

fn default_true() -> bool {
    true
}
