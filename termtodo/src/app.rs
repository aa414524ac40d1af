//! Application state and event handling.
//!
//! [`App`] owns the task store and its persistence, plus UI-local state
//! (input buffer, selection, focus). Every user action goes through
//! [`App::dispatch`]: mutate the store, persist if something changed, and
//! let the next frame redraw from state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use termtodo_model::{Filter, TaskId};

use crate::storage::{KeyValueStore, TaskPersistence};
use crate::tasks::{Action, TaskStore};
use crate::view::{self, DEFAULT_TIMESTAMP_FORMAT, ViewModel};

/// Which panel is currently focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    /// Input box is focused (default).
    Input,
    /// Task list is focused.
    List,
}

/// Main application state.
pub struct App<S: KeyValueStore> {
    /// Task list and current filter.
    store: TaskStore,
    /// Mirror of the task list in local storage.
    persistence: TaskPersistence<S>,
    /// Current text input.
    pub input: String,
    /// Cursor position in input (character index).
    pub cursor_position: usize,
    /// Which panel is focused.
    pub focus: PanelFocus,
    /// Selected row in the filtered list.
    pub selected: usize,
    /// Task whose text is being edited in the input box.
    pub editing: Option<TaskId>,
    /// `chrono` format for item timestamps.
    pub timestamp_format: String,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl<S: KeyValueStore> App<S> {
    /// Create an application, hydrating the task list from `persistence`.
    #[must_use]
    pub fn load(persistence: TaskPersistence<S>) -> Self {
        let tasks = persistence.load();
        tracing::info!(count = tasks.len(), "task list loaded");
        Self {
            store: TaskStore::from_tasks(tasks),
            persistence,
            input: String::new(),
            cursor_position: 0,
            focus: PanelFocus::Input,
            selected: 0,
            editing: None,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            should_quit: false,
        }
    }

    /// Set the timestamp display format.
    #[must_use]
    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    /// The task store.
    #[must_use]
    pub const fn store(&self) -> &TaskStore {
        &self.store
    }

    /// The persistence adapter.
    #[must_use]
    pub const fn persistence(&self) -> &TaskPersistence<S> {
        &self.persistence
    }

    /// Project current state for rendering.
    #[must_use]
    pub fn view(&self) -> ViewModel {
        view::project(self.store.tasks(), self.store.filter(), &self.timestamp_format)
    }

    /// Apply an action: mutate, persist on change, then fix up selection.
    ///
    /// Returns whether the task list or filter changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let changed = action.apply(&mut self.store);
        if changed && action.persists() {
            self.persistence.save(self.store.tasks());
        }
        if let Action::Add(_) = action
            && changed
        {
            self.selected = 0;
        }
        if let Some(id) = &self.editing
            && self.store.get(id).is_none()
        {
            self.cancel_edit();
        }
        tracing::debug!(?action, changed, "dispatched action");
        self.clamp_selection();
        changed
    }

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Global shortcuts
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            (KeyCode::Esc, _) => {
                if self.editing.is_some() {
                    self.cancel_edit();
                } else {
                    self.should_quit = true;
                }
                return;
            }
            (KeyCode::Tab | KeyCode::BackTab, _) => {
                self.toggle_focus();
                return;
            }
            _ => {}
        }

        // Focus-specific shortcuts
        match self.focus {
            PanelFocus::Input => self.handle_input_key(key),
            PanelFocus::List => self.handle_list_key(key),
        }
    }

    /// Handle key event when input is focused.
    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_input(),
            KeyCode::Char(c) if is_plain(key.modifiers) => self.enter_char(c),
            KeyCode::Backspace => self.delete_char_before(),
            KeyCode::Delete => self.delete_char_at(),
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Home => self.cursor_position = 0,
            KeyCode::End => self.cursor_position = self.input.chars().count(),
            _ => {}
        }
    }

    /// Insert pasted text at the cursor as a single line.
    ///
    /// Line breaks and other control characters become spaces, so a
    /// multi-line paste never submits anything on its own.
    pub fn handle_paste(&mut self, text: &str) {
        if self.focus != PanelFocus::Input {
            return;
        }
        for c in text.trim_end_matches(['\r', '\n']).chars() {
            self.enter_char(if c.is_control() { ' ' } else { c });
        }
    }

    /// Handle key event when the task list is focused.
    fn handle_list_key(&mut self, key: KeyEvent) {
        if !is_plain(key.modifiers) {
            return;
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Char(' ') | KeyCode::Enter => {
                if let Some(id) = self.selected_id() {
                    self.dispatch(Action::Toggle(id));
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(id) = self.selected_id() {
                    self.dispatch(Action::Delete(id));
                }
            }
            KeyCode::Char('e') => self.begin_edit(),
            KeyCode::Char('t') => {
                self.dispatch(Action::ToggleAll);
            }
            KeyCode::Char('x') => {
                self.dispatch(Action::ClearCompleted);
            }
            KeyCode::Char('1') => {
                self.dispatch(Action::SetFilter(Filter::All));
            }
            KeyCode::Char('2') => {
                self.dispatch(Action::SetFilter(Filter::Active));
            }
            KeyCode::Char('3') => {
                self.dispatch(Action::SetFilter(Filter::Completed));
            }
            KeyCode::Left => {
                self.dispatch(Action::SetFilter(self.store.filter().prev()));
            }
            KeyCode::Right => {
                self.dispatch(Action::SetFilter(self.store.filter().next()));
            }
            _ => {}
        }
    }

    /// Switch focus between the input box and the list.
    const fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            PanelFocus::Input => PanelFocus::List,
            PanelFocus::List => PanelFocus::Input,
        };
    }

    /// Submit the input as a new task, or as the edited text.
    ///
    /// The input is only cleared when the submission changed something.
    fn submit_input(&mut self) {
        let text = self.input.clone();
        match self.editing.clone() {
            Some(id) => {
                // Blank text keeps the edit open.
                if text.trim().is_empty() {
                    return;
                }
                self.dispatch(Action::Edit(id, text));
                self.cancel_edit();
                self.focus = PanelFocus::List;
            }
            None => {
                if self.dispatch(Action::Add(text)) {
                    self.input.clear();
                    self.cursor_position = 0;
                }
            }
        }
    }

    /// Load the selected task's text into the input for editing.
    fn begin_edit(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        let Some(task) = self.store.get(&id) else {
            return;
        };
        self.input = task.text.clone();
        self.cursor_position = self.input.chars().count();
        self.editing = Some(id);
        self.focus = PanelFocus::Input;
    }

    /// Abandon an in-progress edit.
    fn cancel_edit(&mut self) {
        self.editing = None;
        self.input.clear();
        self.cursor_position = 0;
    }

    /// Id of the selected row in the current view.
    #[must_use]
    pub fn selected_id(&self) -> Option<TaskId> {
        self.store
            .filtered_view()
            .get(self.selected)
            .map(|t| t.id.clone())
    }

    /// Byte offset of a character index in the input.
    fn byte_index(&self, char_index: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_index)
            .map_or(self.input.len(), |(i, _)| i)
    }

    /// Insert a character at the cursor position.
    fn enter_char(&mut self, c: char) {
        let idx = self.byte_index(self.cursor_position);
        self.input.insert(idx, c);
        self.cursor_position += 1;
    }

    /// Delete the character before the cursor.
    fn delete_char_before(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let idx = self.byte_index(self.cursor_position);
            self.input.remove(idx);
        }
    }

    /// Delete the character under the cursor.
    fn delete_char_at(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            let idx = self.byte_index(self.cursor_position);
            self.input.remove(idx);
        }
    }

    /// Move cursor left.
    const fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    /// Move cursor right.
    fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }

    /// Select the previous row.
    const fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Select the next row.
    fn select_next(&mut self) {
        if self.selected + 1 < self.store.filtered_view().len() {
            self.selected += 1;
        }
    }

    /// Keep the selection inside the filtered view.
    fn clamp_selection(&mut self) {
        let len = self.store.filtered_view().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

/// No modifier other than Shift is held.
const fn is_plain(modifiers: KeyModifiers) -> bool {
    modifiers.difference(KeyModifiers::SHIFT).is_empty()
}
