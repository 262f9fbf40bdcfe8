//! Auth handlers — register, login, me.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use taskhub_core::error::AppError;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, AuthResponse, UserResponse};
use crate::dto::validation_error;
use crate::error::ApiError;
use crate::extractors::{AuthUser, ClientKey};
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    req.validate().map_err(validation_error)?;

    let session = state
        .auth_service
        .register(req.username.trim(), req.email.trim(), &req.password)
        .await?;

    Ok(Json(ApiResponse::ok(AuthResponse {
        user_id: session.user.id,
        username: session.user.username,
        email: session.user.email,
        token: session.token,
        expires_at: session.expires_at,
    })))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ClientKey(client_key): ClientKey,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    req.validate().map_err(validation_error)?;

    let session = state
        .auth_service
        .login(req.email.trim(), &req.password, &client_key)
        .await?;

    Ok(Json(ApiResponse::ok(AuthResponse {
        user_id: session.user.id,
        username: session.user.username,
        email: session.user.email,
        token: session.token,
        expires_at: session.expires_at,
    })))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state
        .user_repo
        .find_by_id(auth.user_id)
        .await?
        .ok_or_else(|| AppError::unauthorized("User no longer exists"))?;

    Ok(Json(ApiResponse::ok(UserResponse {
        id: user.id,
        username: user.username,
        email: user.email,
        created_at: user.created_at,
    })))
}
