//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use taskhub_auth::AuthService;
use taskhub_core::config::AppConfig;
use taskhub_database::repositories::user::UserRepository;
use taskhub_service::ProjectService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool (health checks).
    pub db_pool: PgPool,
    /// Authentication subsystem.
    pub auth_service: Arc<AuthService>,
    /// User lookups for `/auth/me`.
    pub user_repo: Arc<UserRepository>,
    /// Project list management.
    pub project_service: Arc<ProjectService>,
}
