//! Task list persistence over a [`KeyValueStore`].
//!
//! The whole list is stored as one JSON array under a fixed key. Failures
//! never reach the caller:
//! - `save` logs and drops write or encode errors.
//! - `load` logs read or parse errors and yields an empty list.
//!
//! Loaded entries that break the task invariants (repeated id, blank text)
//! are dropped with a warning; surviving text is trimmed.

use std::collections::HashSet;

use termtodo_model::Task;
use termtodo_model::codec::{decode_tasks, encode_tasks};
use termtodo_model::task::normalize_text;

use super::KeyValueStore;

/// Key the task list is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "todos";

/// Maps the task list to a single key in a [`KeyValueStore`].
#[derive(Debug)]
pub struct TaskPersistence<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> TaskPersistence<S> {
    /// Wraps `store`, using [`DEFAULT_STORAGE_KEY`].
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    /// Wraps `store`, persisting under `key`.
    #[must_use]
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Overwrites the stored list with `tasks`.
    pub fn save(&mut self, tasks: &[Task]) {
        let encoded = match encode_tasks(tasks) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "could not encode task list");
                return;
            }
        };
        match self.store.set(&self.key, &encoded) {
            Ok(()) => tracing::debug!(key = %self.key, count = tasks.len(), "saved task list"),
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "could not save task list");
            }
        }
    }

    /// Reads the stored list.
    ///
    /// Returns an empty list if the key is absent, unreadable, or holds
    /// something that is not a task list.
    #[must_use]
    pub fn load(&self) -> Vec<Task> {
        let stored = match self.store.get(&self.key) {
            Ok(Some(text)) => text,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "could not read task list");
                return Vec::new();
            }
        };
        match decode_tasks(&stored) {
            Ok(tasks) => {
                let tasks = sanitize(tasks);
                tracing::debug!(key = %self.key, count = tasks.len(), "loaded task list");
                tasks
            }
            Err(err) => {
                tracing::warn!(
                    key = %self.key,
                    error = %err,
                    "stored task list is malformed, starting empty"
                );
                Vec::new()
            }
        }
    }

    /// Key the list is stored under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }
}

/// Keeps the first task for each id and drops tasks whose text is blank.
fn sanitize(tasks: Vec<Task>) -> Vec<Task> {
    let mut seen = HashSet::with_capacity(tasks.len());
    tasks
        .into_iter()
        .filter_map(|mut task| {
            if !seen.insert(task.id.clone()) {
                tracing::warn!(id = %task.id, "dropping stored task with repeated id");
                return None;
            }
            let Some(text) = normalize_text(&task.text) else {
                tracing::warn!(id = %task.id, "dropping stored task with blank text");
                return None;
            };
            task.text = text;
            Some(task)
        })
        .collect()
}
