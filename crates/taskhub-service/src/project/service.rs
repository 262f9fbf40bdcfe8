//! Project entry CRUD and reordering.

use std::sync::Arc;

use tracing::{debug, info};

use taskhub_core::error::AppError;
use taskhub_database::repositories::project::ProjectRepository;
use taskhub_entity::project::{NewProject, Project, ProjectChanges};

use super::validate::validate_fields;

/// Manages one user's ordered project list.
///
/// Every operation takes the caller's resolved user id; the service never
/// looks identities up itself.
#[derive(Debug, Clone)]
pub struct ProjectService {
    /// Project repository.
    projects: Arc<ProjectRepository>,
}

impl ProjectService {
    /// Creates a new project service.
    pub fn new(projects: Arc<ProjectRepository>) -> Self {
        Self { projects }
    }

    /// Creates an entry at the tail of the user's list.
    pub async fn create(&self, user_id: i64, mut data: NewProject) -> Result<Project, AppError> {
        data.title = data.title.trim().to_string();
        data.description = data.description.trim().to_string();
        validate_fields(&data.title, &data.description, data.image.as_deref())?;

        let project = self.projects.create(user_id, &data).await?;

        info!(
            user_id = user_id,
            project_id = project.id,
            order_index = project.order_index,
            "Project created"
        );
        Ok(project)
    }

    /// Lists the user's entries in display order (pinned first, then
    /// ascending `order_index`). A user with no entries gets an empty
    /// list, not an error.
    pub async fn list(&self, user_id: i64) -> Result<Vec<Project>, AppError> {
        self.projects.list_by_user(user_id).await
    }

    /// Updates an entry owned by the user.
    ///
    /// Field validation matches `create`. A foreign or missing entry id
    /// fails `NotFound` either way.
    pub async fn update(
        &self,
        user_id: i64,
        project_id: i64,
        mut changes: ProjectChanges,
    ) -> Result<Project, AppError> {
        changes.title = changes.title.trim().to_string();
        changes.description = changes.description.trim().to_string();
        validate_fields(&changes.title, &changes.description, changes.image.as_deref())?;

        self.projects.update(user_id, project_id, &changes).await
    }

    /// Deletes one entry owned by the user.
    pub async fn delete(&self, user_id: i64, project_id: i64) -> Result<(), AppError> {
        self.projects.delete(user_id, project_id).await?;
        info!(user_id = user_id, project_id = project_id, "Project deleted");
        Ok(())
    }

    /// Deletes every entry owned by the user, returning the count.
    pub async fn delete_all(&self, user_id: i64) -> Result<u64, AppError> {
        let deleted = self.projects.delete_all(user_id).await?;
        info!(user_id = user_id, deleted = deleted, "All projects deleted");
        Ok(deleted)
    }

    /// Applies a manual ordering: each listed id gets its position in the
    /// sequence as `order_index`, scoped to the user's own entries.
    ///
    /// Best-effort by design: foreign ids are silent no-ops, omitted
    /// entries keep their index, repeated ids resolve last-wins.
    pub async fn reorder(&self, user_id: i64, ordered_ids: Vec<i64>) -> Result<(), AppError> {
        debug!(
            user_id = user_id,
            count = ordered_ids.len(),
            "Reordering projects"
        );
        self.projects.reorder(user_id, &ordered_ids).await
    }
}
