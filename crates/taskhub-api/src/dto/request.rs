//! Request DTOs with validation.
//!
//! DTO-level validation covers required-ness only; shape rules (username
//! pattern, field length limits, priority coercion) belong to the auth
//! and project services.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Desired username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Cleartext password (digested before storage, never logged).
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Cleartext password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create project request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProjectRequest {
    /// Entry title.
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    /// Description; empty when omitted.
    #[serde(default)]
    pub description: String,
    /// Priority; anything unrecognized (or absent) becomes `medium`.
    #[serde(default)]
    pub priority: Option<String>,
    /// Optional base64 image payload.
    #[serde(default)]
    pub image: Option<String>,
    /// Pinned flag; defaults to unpinned.
    #[serde(default)]
    pub pinned: bool,
}

/// Update project request body.
///
/// All content fields are replaced as given; `order_index` is only
/// written when present.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProjectRequest {
    /// New title.
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    /// New description.
    #[serde(default)]
    pub description: String,
    /// New priority, coerced like create.
    #[serde(default)]
    pub priority: Option<String>,
    /// New image payload, if any.
    #[serde(default)]
    pub image: Option<String>,
    /// New pinned flag.
    #[serde(default)]
    pub pinned: bool,
    /// New ranking, when the caller wants to move the entry.
    #[serde(default)]
    pub order_index: Option<i32>,
}

/// Reorder request body: entry ids in the desired display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReorderRequest {
    /// Entry ids; position in this list becomes the entry's order index.
    #[serde(default)]
    pub order: Vec<i64>,
}
