//! Project entry repository implementation.
//!
//! Every mutating statement is scoped by `(id, user_id)` so that an entry
//! belonging to another user is indistinguishable from a missing one.

use sqlx::PgPool;

use taskhub_core::error::{AppError, ErrorKind};
use taskhub_core::result::AppResult;
use taskhub_entity::project::{NewProject, Project, ProjectChanges};

/// Repository for project entry storage and ordering.
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

impl ProjectRepository {
    /// Create a new project repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new entry at the tail of the owner's list.
    ///
    /// The tail position is computed and written in a single statement, so
    /// the read-max-then-insert sequence cannot interleave with itself
    /// inside this process. Two creates racing across connections may still
    /// observe the same maximum; duplicate `order_index` values are
    /// tolerated by the display ordering.
    pub async fn create(&self, user_id: i64, data: &NewProject) -> AppResult<Project> {
        sqlx::query_as::<_, Project>(
            "INSERT INTO projects (user_id, title, description, priority, image, pinned, order_index) \
             VALUES ($1, $2, $3, $4, $5, $6, \
                     (SELECT COALESCE(MAX(order_index), 0) + 1 FROM projects WHERE user_id = $1)) \
             RETURNING *",
        )
        .bind(user_id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.priority)
        .bind(&data.image)
        .bind(data.pinned)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create project", e))
    }

    /// List all entries owned by a user in display order: pinned first,
    /// then ascending by `order_index`.
    pub async fn list_by_user(&self, user_id: i64) -> AppResult<Vec<Project>> {
        sqlx::query_as::<_, Project>(
            "SELECT * FROM projects WHERE user_id = $1 \
             ORDER BY pinned DESC, order_index ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list projects", e))
    }

    /// Overwrite an entry's mutable fields.
    ///
    /// `order_index` is only written when the caller supplied one. Returns
    /// `NotFound` when no row matched the `(id, user_id)` pair.
    pub async fn update(
        &self,
        user_id: i64,
        project_id: i64,
        changes: &ProjectChanges,
    ) -> AppResult<Project> {
        let updated = if let Some(order_index) = changes.order_index {
            sqlx::query_as::<_, Project>(
                "UPDATE projects \
                 SET title = $3, description = $4, priority = $5, image = $6, pinned = $7, \
                     order_index = $8 \
                 WHERE id = $1 AND user_id = $2 \
                 RETURNING *",
            )
            .bind(project_id)
            .bind(user_id)
            .bind(&changes.title)
            .bind(&changes.description)
            .bind(changes.priority)
            .bind(&changes.image)
            .bind(changes.pinned)
            .bind(order_index)
            .fetch_optional(&self.pool)
            .await
        } else {
            sqlx::query_as::<_, Project>(
                "UPDATE projects \
                 SET title = $3, description = $4, priority = $5, image = $6, pinned = $7 \
                 WHERE id = $1 AND user_id = $2 \
                 RETURNING *",
            )
            .bind(project_id)
            .bind(user_id)
            .bind(&changes.title)
            .bind(&changes.description)
            .bind(changes.priority)
            .bind(&changes.image)
            .bind(changes.pinned)
            .fetch_optional(&self.pool)
            .await
        };

        updated
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update project", e))?
            .ok_or_else(|| AppError::not_found("Project not found"))
    }

    /// Delete a single entry. Returns `NotFound` when no row matched.
    pub async fn delete(&self, user_id: i64, project_id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1 AND user_id = $2")
            .bind(project_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete project", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Project not found"));
        }
        Ok(())
    }

    /// Delete every entry owned by a user, returning the count removed.
    ///
    /// Zero deletions is a success, not an error.
    pub async fn delete_all(&self, user_id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM projects WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete projects", e)
            })?;

        Ok(result.rows_affected())
    }

    /// Assign each listed entry the `order_index` matching its position
    /// (0-based) in the supplied sequence.
    ///
    /// Ids not owned by the user match zero rows and are skipped without
    /// error; entries omitted from the sequence keep their stored index;
    /// repeated ids are overwritten last-wins. The batch runs inside one
    /// transaction so a partial write never becomes visible, but the input
    /// is deliberately not validated as a permutation of the user's
    /// entries.
    pub async fn reorder(&self, user_id: i64, ordered_ids: &[i64]) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        for (position, project_id) in ordered_ids.iter().enumerate() {
            sqlx::query("UPDATE projects SET order_index = $1 WHERE id = $2 AND user_id = $3")
                .bind(position as i32)
                .bind(project_id)
                .bind(user_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to reorder projects", e)
                })?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit reorder", e)
        })
    }
}
