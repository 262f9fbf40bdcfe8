//! Project entry model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::priority::Priority;

/// A single entry in a user's project list.
///
/// Entries are displayed pinned-first, then ascending by `order_index`.
/// `order_index` is a pure ranking value; it is not required to stay
/// contiguous or unique across concurrent updates.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Project {
    /// Unique entry identifier.
    pub id: i64,
    /// Owning user.
    pub user_id: i64,
    /// Entry title, 3–500 characters.
    pub title: String,
    /// Free-form description, at most 1000 characters.
    pub description: String,
    /// Priority level.
    pub priority: Priority,
    /// Optional base64-encoded image payload.
    pub image: Option<String>,
    /// Pinned entries sort before all unpinned ones.
    pub pinned: bool,
    /// Manual ranking among the owner's unpinned entries.
    pub order_index: i32,
    /// When the entry was created.
    pub created_at: DateTime<Utc>,
}

/// Data for creating a new project entry.
///
/// The `order_index` is not part of this payload: new entries are always
/// appended at the tail of the owner's list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProject {
    /// Entry title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Priority level.
    pub priority: Priority,
    /// Optional base64 image payload.
    pub image: Option<String>,
    /// Whether the entry is pinned.
    pub pinned: bool,
}

/// Full set of mutable fields for an update.
///
/// `order_index` is the only optional member: when `None` the stored
/// ranking is left untouched; every other field is written as given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectChanges {
    /// New title.
    pub title: String,
    /// New description.
    pub description: String,
    /// New priority.
    pub priority: Priority,
    /// New image payload, if any.
    pub image: Option<String>,
    /// New pinned state.
    pub pinned: bool,
    /// New ranking, when the caller supplies one.
    pub order_index: Option<i32>,
}
