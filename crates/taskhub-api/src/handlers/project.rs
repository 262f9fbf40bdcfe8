//! Project list handlers.

use axum::Json;
use axum::extract::{Path, State};
use validator::Validate;

use taskhub_entity::project::{NewProject, Priority, ProjectChanges};

use crate::dto::request::{CreateProjectRequest, ReorderRequest, UpdateProjectRequest};
use crate::dto::response::{
    ApiResponse, CreatedResponse, DeletedResponse, MessageResponse, ProjectListResponse,
};
use crate::dto::validation_error;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/projects
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<ProjectListResponse>>, ApiError> {
    let items = state.project_service.list(auth.user_id).await?;
    Ok(Json(ApiResponse::ok(ProjectListResponse { items })))
}

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateProjectRequest>,
) -> Result<Json<ApiResponse<CreatedResponse>>, ApiError> {
    req.validate().map_err(validation_error)?;

    let data = NewProject {
        title: req.title,
        description: req.description,
        priority: Priority::coerce(req.priority.as_deref().unwrap_or("medium")),
        image: req.image,
        pinned: req.pinned,
    };

    let project = state.project_service.create(auth.user_id, data).await?;

    Ok(Json(ApiResponse::ok(CreatedResponse {
        id: project.id,
        message: "Project created successfully".to_string(),
    })))
}

/// PUT /api/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(project_id): Path<i64>,
    Json(req): Json<UpdateProjectRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    req.validate().map_err(validation_error)?;

    let changes = ProjectChanges {
        title: req.title,
        description: req.description,
        priority: Priority::coerce(req.priority.as_deref().unwrap_or("medium")),
        image: req.image,
        pinned: req.pinned,
        order_index: req.order_index,
    };

    state
        .project_service
        .update(auth.user_id, project_id, changes)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Project updated".to_string(),
    })))
}

/// PUT /api/projects/reorder
pub async fn reorder(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<ReorderRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state
        .project_service
        .reorder(auth.user_id, req.order)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Order updated".to_string(),
    })))
}

/// DELETE /api/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(project_id): Path<i64>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state
        .project_service
        .delete(auth.user_id, project_id)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Project deleted".to_string(),
    })))
}

/// DELETE /api/projects
pub async fn delete_all(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<DeletedResponse>>, ApiError> {
    let deleted = state.project_service.delete_all(auth.user_id).await?;

    Ok(Json(ApiResponse::ok(DeletedResponse {
        deleted,
        message: format!("{deleted} project(s) deleted"),
    })))
}
