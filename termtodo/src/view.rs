//! Pure projection from task state to what the UI shows.
//!
//! [`project`] turns a task list and filter into a [`ViewModel`]. The ratatui
//! layer only reads the view model, so every rendering rule lives here and
//! can be tested without a terminal.

use chrono::Local;
use termtodo_model::{Filter, Task, TaskId};

/// Default `chrono` format for the creation timestamp of each item.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One visible row of the task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    /// Id the row's toggle and delete controls act on.
    pub id: TaskId,
    /// Task text with control characters escaped.
    pub text: String,
    /// Checkbox state.
    pub completed: bool,
    /// Creation time formatted in local time.
    pub created: String,
}

impl ItemView {
    /// Checkbox glyph for this row.
    #[must_use]
    pub const fn checkbox(&self) -> &'static str {
        if self.completed { "[\u{2713}]" } else { "[ ]" }
    }
}

/// Everything the UI needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    /// Rows matching the current filter, in list order.
    pub items: Vec<ItemView>,
    /// Current filter.
    pub filter: Filter,
    /// Whether to show the list container.
    pub show_list: bool,
    /// Whether to show the empty-state indicator instead of the list.
    pub show_empty_state: bool,
    /// Text for the empty-state indicator.
    pub empty_message: &'static str,
    /// Number of incomplete tasks across the whole list.
    pub remaining: usize,
    /// Count display, e.g. "1 task" or "3 tasks".
    pub remaining_label: String,
    /// Whether the "clear completed" control is visible.
    pub show_clear_completed: bool,
    /// Number of completed tasks across the whole list.
    pub completed: usize,
}

impl ViewModel {
    /// Id of the row at `index`, if there is one.
    #[must_use]
    pub fn id_at(&self, index: usize) -> Option<&TaskId> {
        self.items.get(index).map(|item| &item.id)
    }
}

/// Projects `tasks` under `filter` into a [`ViewModel`].
#[must_use]
pub fn project(tasks: &[Task], filter: Filter, timestamp_format: &str) -> ViewModel {
    let items: Vec<ItemView> = tasks
        .iter()
        .filter(|t| filter.matches(t))
        .map(|t| ItemView {
            id: t.id.clone(),
            text: escape_text(&t.text),
            completed: t.completed,
            created: t
                .created_at
                .with_timezone(&Local)
                .format(timestamp_format)
                .to_string(),
        })
        .collect();

    let remaining = tasks.iter().filter(|t| !t.completed).count();
    let completed = tasks.len() - remaining;
    let has_items = !items.is_empty();

    ViewModel {
        items,
        filter,
        show_list: has_items,
        show_empty_state: !has_items,
        empty_message: empty_message(filter),
        remaining,
        remaining_label: count_label(remaining),
        show_clear_completed: completed > 0,
        completed,
    }
}

/// Formats a task count with singular wording for exactly one.
#[must_use]
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 task".to_string()
    } else {
        format!("{count} tasks")
    }
}

/// Empty-state text for each filter.
#[must_use]
pub const fn empty_message(filter: Filter) -> &'static str {
    match filter {
        Filter::All => "Nothing to do yet. Type a task and press Enter.",
        Filter::Active => "No active tasks.",
        Filter::Completed => "No completed tasks.",
    }
}

/// Escapes control characters so task text is never interpreted by the
/// terminal.
///
/// Printable characters (including markup like `<b>`) pass through
/// unchanged; control characters become their `\u{..}` form.
#[must_use]
pub fn escape_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_control() {
            out.extend(c.escape_unicode());
        } else {
            out.push(c);
        }
    }
    out
}
