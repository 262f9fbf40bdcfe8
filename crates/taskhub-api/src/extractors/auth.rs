//! `AuthUser` extractor — pulls the bearer token from the Authorization
//! header, validates it, and injects the caller's identity.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use taskhub_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated caller identity available to handlers.
///
/// Extraction fails with a uniform `Unauthorized` whether the header is
/// missing, malformed, or the token is invalid or expired.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Resolved user id.
    pub user_id: i64,
    /// Username carried in the token claims.
    pub username: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))?;

        let claims = state.auth_service.authenticate(token)?;

        Ok(AuthUser {
            user_id: claims.user_id(),
            username: claims.username,
        })
    }
}
