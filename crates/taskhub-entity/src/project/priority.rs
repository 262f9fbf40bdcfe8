//! Project priority enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority level of a project entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "project_priority", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Low priority.
    Low,
    /// Default priority.
    Medium,
    /// High priority.
    High,
}

impl Priority {
    /// Parse a client-supplied priority, normalizing anything unrecognized
    /// to [`Priority::Medium`].
    ///
    /// Matching is exact: only the lowercase spellings `"low"`, `"medium"`,
    /// and `"high"` are recognized; everything else (including uppercase
    /// variants) silently becomes `Medium`. Callers never see a rejection
    /// for a bad priority.
    pub fn coerce(value: &str) -> Self {
        match value {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            _ => Self::Medium,
        }
    }

    /// Return the priority as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
