//! Task list state for `TermTodo`.
//!
//! Provides the in-memory [`TaskStore`] and the [`Action`]s the UI layer
//! dispatches against it.

pub mod store;

pub use store::TaskStore;

use termtodo_model::{Filter, TaskId};

/// A user-initiated change to the task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Add a new task with the given text.
    Add(String),
    /// Flip the completion flag of a task.
    Toggle(TaskId),
    /// Remove a task.
    Delete(TaskId),
    /// Replace a task's text.
    Edit(TaskId, String),
    /// Complete every task, or reopen all if every task is complete.
    ToggleAll,
    /// Remove every completed task.
    ClearCompleted,
    /// Change which tasks are shown.
    SetFilter(Filter),
}

impl Action {
    /// Whether a successful application of this action must be persisted.
    #[must_use]
    pub const fn persists(&self) -> bool {
        !matches!(self, Self::SetFilter(_))
    }

    /// Applies this action to `store`, returning whether anything changed.
    pub fn apply(&self, store: &mut TaskStore) -> bool {
        match self {
            Self::Add(text) => store.add(text).is_some(),
            Self::Toggle(id) => store.toggle(id),
            Self::Delete(id) => store.delete(id),
            Self::Edit(id, text) => store.edit(id, text),
            Self::ToggleAll => store.toggle_all(),
            Self::ClearCompleted => store.clear_completed() > 0,
            Self::SetFilter(filter) => {
                let changed = store.filter() != *filter;
                store.set_filter(*filter);
                changed
            }
        }
    }
}
