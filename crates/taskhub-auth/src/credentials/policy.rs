//! Registration credential shape rules.

use regex::Regex;

use taskhub_core::config::auth::AuthConfig;
use taskhub_core::error::AppError;

/// Validates registration input against the credential shape rules.
///
/// Runs before any store access: a violation fails fast with a
/// `Validation` error naming the offending field, and no side effects
/// have occurred.
#[derive(Debug, Clone)]
pub struct CredentialPolicy {
    /// Accepted username shape.
    username_re: Regex,
    /// Accepted email shape.
    email_re: Regex,
    /// Minimum password length.
    password_min_length: usize,
}

impl CredentialPolicy {
    /// Creates a new policy from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            username_re: Regex::new(r"^[A-Za-z0-9_]{3,30}$").expect("valid username regex"),
            email_re: Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
                .expect("valid email regex"),
            password_min_length: config.password_min_length,
        }
    }

    /// Validates a registration triple, reporting the first violation found.
    pub fn validate_registration(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), AppError> {
        if !self.username_re.is_match(username) {
            return Err(AppError::validation(
                "Username must be 3-30 characters (letters, numbers, and underscore only)",
            ));
        }

        if !self.email_re.is_match(email) {
            return Err(AppError::validation("Email is not a valid address"));
        }

        if password.len() < self.password_min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.password_min_length
            )));
        }

        Ok(())
    }
}
