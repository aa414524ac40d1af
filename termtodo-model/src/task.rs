//! Task record for the `TermTodo` list.
//!
//! A [`Task`] is a single to-do entry. Its serialized field names follow the
//! persisted layout (`id`, `text`, `completed`, `createdAt`), so the same type
//! is used both in memory and on disk.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a task, based on a random UUID v4.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new random task identifier (UUID v4).
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a `TaskId` from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID value.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique task identifier.
    pub id: TaskId,
    /// Task text, trimmed and non-empty.
    pub text: String,
    /// Whether the task has been completed.
    pub completed: bool,
    /// When the task was created.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new, incomplete task from already-normalized text.
    ///
    /// Callers are responsible for trimming and rejecting empty text;
    /// see [`normalize_text`].
    #[must_use]
    pub fn new(text: String) -> Self {
        Self {
            id: TaskId::new(),
            text,
            completed: false,
            created_at: Utc::now(),
        }
    }
}

/// Trims `raw` and returns it, or `None` if nothing is left.
#[must_use]
pub fn normalize_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
