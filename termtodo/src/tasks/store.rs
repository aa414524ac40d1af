//! In-memory task store.
//!
//! `TaskStore` owns the ordered task sequence (newest first) and the current
//! filter. Every operation on an unknown id or blank text is a silent no-op;
//! callers learn whether anything changed from the return value and decide
//! whether to persist.

use termtodo_model::task::normalize_text;
use termtodo_model::{Filter, Task, TaskId};

/// Ordered task list plus the active filter.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    /// Tasks in insertion order, newest first.
    tasks: Vec<Task>,
    /// Current view filter (not persisted).
    filter: Filter,
}

impl TaskStore {
    /// Creates an empty store showing all tasks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store hydrated from a previously persisted sequence.
    #[must_use]
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            filter: Filter::All,
        }
    }

    /// Adds a task at the front of the list.
    ///
    /// Returns the new task's id, or `None` if `text` is blank after
    /// trimming (nothing is added).
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        let text = normalize_text(text)?;
        let task = Task::new(text);
        let id = task.id.clone();
        self.tasks.insert(0, task);
        Some(id)
    }

    /// Flips the completion flag of the matching task.
    ///
    /// Returns `false` if no task has this id.
    pub fn toggle(&mut self, id: &TaskId) -> bool {
        match self.get_mut(id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Removes the matching task.
    ///
    /// Returns `false` if no task has this id.
    pub fn delete(&mut self, id: &TaskId) -> bool {
        let Some(pos) = self.tasks.iter().position(|t| t.id == *id) else {
            return false;
        };
        self.tasks.remove(pos);
        true
    }

    /// Replaces the text of the matching task.
    ///
    /// Blank replacement text, an unknown id, or unchanged text are no-ops
    /// and return `false`.
    pub fn edit(&mut self, id: &TaskId, text: &str) -> bool {
        let Some(text) = normalize_text(text) else {
            return false;
        };
        match self.get_mut(id) {
            Some(task) if task.text != text => {
                task.text = text;
                true
            }
            _ => false,
        }
    }

    /// Marks every task completed, or every task active if all are
    /// already completed.
    ///
    /// Returns `false` on an empty store.
    pub fn toggle_all(&mut self) -> bool {
        if self.tasks.is_empty() {
            return false;
        }
        let target = self.tasks.iter().any(|t| !t.completed);
        for task in &mut self.tasks {
            task.completed = target;
        }
        true
    }

    /// Removes every completed task, returning how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        before - self.tasks.len()
    }

    /// Replaces the current filter.
    pub const fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Returns the current filter.
    #[must_use]
    pub const fn filter(&self) -> Filter {
        self.filter
    }

    /// Returns the tasks matching the current filter, in list order.
    #[must_use]
    pub fn filtered_view(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| self.filter.matches(t))
            .collect()
    }

    /// Returns the full task sequence, newest first.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == *id)
    }

    /// Number of tasks not yet completed.
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }

    /// Number of completed tasks.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.len() - self.remaining_count()
    }

    /// Total number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the store holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn get_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == *id)
    }
}
