//! Authentication service — registration, throttled login, token checks.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use taskhub_core::config::auth::AuthConfig;
use taskhub_core::error::{AppError, ErrorKind};
use taskhub_entity::user::User;

use crate::credentials::{CredentialPolicy, CredentialStore};
use crate::jwt::{Claims, JwtDecoder, JwtEncoder};
use crate::throttle::LoginThrottle;

/// Result of a successful registration or login.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AuthSession {
    /// The authenticated user.
    pub user: User,
    /// Signed bearer token.
    pub token: String,
    /// Absolute token expiry.
    pub expires_at: DateTime<Utc>,
}

/// Front door of the authentication subsystem.
///
/// Resolves caller identity (registration and login) and validates bearer
/// tokens for everything downstream.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// Identity storage and credential verification.
    credentials: Arc<CredentialStore>,
    /// Registration shape rules.
    policy: CredentialPolicy,
    /// Token issuance.
    jwt_encoder: Arc<JwtEncoder>,
    /// Token validation.
    jwt_decoder: Arc<JwtDecoder>,
    /// Per-client login throttle.
    throttle: Arc<LoginThrottle>,
}

impl AuthService {
    /// Creates a new auth service with all required dependencies.
    pub fn new(
        credentials: Arc<CredentialStore>,
        jwt_encoder: Arc<JwtEncoder>,
        jwt_decoder: Arc<JwtDecoder>,
        throttle: Arc<LoginThrottle>,
        config: &AuthConfig,
    ) -> Self {
        Self {
            credentials,
            policy: CredentialPolicy::new(config),
            jwt_encoder,
            jwt_decoder,
            throttle,
        }
    }

    /// Registers a new user and issues their first token.
    ///
    /// Shape validation runs before any store access, so a rejected
    /// request has no side effects.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, AppError> {
        self.policy
            .validate_registration(username, email, password)?;

        let user = self.credentials.register(username, email, password).await?;
        let issued = self.jwt_encoder.issue(user.id, &user.username)?;

        Ok(AuthSession {
            user,
            token: issued.token,
            expires_at: issued.expires_at,
        })
    }

    /// Performs the throttled login flow:
    ///
    /// 1. Check the client key against the throttle; a locked key fails
    ///    `RateLimited` without consulting the credential store or
    ///    consuming an attempt.
    /// 2. Verify credentials. A failure records one attempt against the
    ///    key and fails `Unauthorized`.
    /// 3. On success, clear the key's recorded failures and issue a token.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        client_key: &str,
    ) -> Result<AuthSession, AppError> {
        self.throttle.check(client_key).await.inspect_err(|_| {
            warn!(client_key = %client_key, "Login throttled");
        })?;

        let user = match self.credentials.verify(email, password).await {
            Ok(user) => user,
            Err(err) => {
                // Only credential mismatches count toward the lockout;
                // storage failures are not the client's doing.
                if err.kind == ErrorKind::Unauthorized {
                    self.throttle.record_failure(client_key).await;
                }
                return Err(err);
            }
        };

        self.throttle.clear(client_key).await;
        let issued = self.jwt_encoder.issue(user.id, &user.username)?;

        info!(user_id = user.id, "Login successful");

        Ok(AuthSession {
            user,
            token: issued.token,
            expires_at: issued.expires_at,
        })
    }

    /// Validates a bearer token and returns its claims.
    ///
    /// Absent, malformed, tampered, and expired tokens are all the same
    /// `Unauthorized` to the caller.
    pub fn authenticate(&self, token: &str) -> Result<Claims, AppError> {
        self.jwt_decoder.decode(token)
    }
}
