//! Credential registration and verification.

use std::sync::Arc;

use tracing::{debug, info};

use taskhub_core::config::auth::AuthConfig;
use taskhub_core::error::AppError;
use taskhub_database::repositories::user::UserRepository;
use taskhub_entity::user::{NewUser, User};

use super::digest::PasswordDigest;

/// Persists user identities and verifies login credentials.
///
/// Cleartext passwords exist only transiently inside these two methods;
/// storage and logs only ever see the digest or the password's length.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    /// User persistence.
    users: Arc<UserRepository>,
    /// Password digest helper.
    digest: PasswordDigest,
    /// Whether log events may carry usernames and emails.
    log_identifiers: bool,
}

impl CredentialStore {
    /// Creates a new credential store.
    pub fn new(users: Arc<UserRepository>, config: &AuthConfig) -> Self {
        Self {
            users,
            digest: PasswordDigest::new(),
            log_identifiers: config.log_identifiers,
        }
    }

    /// Registers a new identity, digesting the password before storage.
    ///
    /// Duplicate usernames or emails surface as `Conflict` from the
    /// repository's unique-constraint mapping.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AppError> {
        if self.log_identifiers {
            debug!(
                username = %username,
                email = %email,
                password_len = password.len(),
                "Registration attempt"
            );
        } else {
            debug!(password_len = password.len(), "Registration attempt");
        }

        let user = self
            .users
            .create(&NewUser {
                username: username.to_string(),
                email: email.to_string(),
                password_hash: self.digest.digest(password),
            })
            .await?;

        if self.log_identifiers {
            info!(user_id = user.id, username = %user.username, "User registered");
        } else {
            info!(user_id = user.id, "User registered");
        }

        Ok(user)
    }

    /// Verifies a login credential pair.
    ///
    /// An unknown email and a wrong password produce the same error, so
    /// the caller cannot learn which factor failed. The digest comparison
    /// is constant-time.
    pub async fn verify(&self, email: &str, password: &str) -> Result<User, AppError> {
        if self.log_identifiers {
            debug!(email = %email, password_len = password.len(), "Login verification attempt");
        } else {
            debug!(password_len = password.len(), "Login verification attempt");
        }

        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid email or password"))?;

        if !self.digest.verify(password, &user.password_hash) {
            return Err(AppError::unauthorized("Invalid email or password"));
        }

        Ok(user)
    }
}
