//! Integration tests for the ratatui frame drawn from app state.
//!
//! Renders into a `TestBackend` buffer and checks the visible text.
//!
//! # Verification Focus
//!
//! - Empty-state panel replaces the list when nothing matches
//! - Count display wording in the footer
//! - Clear-completed control appears only with completed tasks
//! - Checkboxes reflect completion
//! - Task text with terminal escape sequences is shown escaped

use ratatui::{Terminal, backend::TestBackend};
use termtodo::app::App;
use termtodo::storage::{MemoryStore, TaskPersistence};
use termtodo::tasks::Action;
use termtodo::ui;
use termtodo_model::Filter;

fn make_app() -> App<MemoryStore> {
    App::load(TaskPersistence::new(MemoryStore::new()))
}

/// Draw one frame and return the buffer as one string per row.
fn render(app: &App<MemoryStore>) -> Vec<String> {
    let backend = TestBackend::new(100, 16);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| ui::draw(frame, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let width = usize::from(buffer.area.width);
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect())
        .collect()
}

fn screen_contains(rows: &[String], needle: &str) -> bool {
    rows.iter().any(|row| row.contains(needle))
}

// =============================================================================
// Empty state
// =============================================================================

#[test]
fn test_empty_app_shows_empty_state() {
    let app = make_app();
    let rows = render(&app);
    assert!(screen_contains(&rows, "Nothing to do yet"));
    assert!(screen_contains(&rows, "0 tasks"));
    assert!(!screen_contains(&rows, "Clear completed"));
}

#[test]
fn test_filter_with_no_matches_shows_filter_message() {
    let mut app = make_app();
    app.dispatch(Action::Add("Walk dog".to_string()));
    app.dispatch(Action::SetFilter(Filter::Completed));

    let rows = render(&app);
    assert!(screen_contains(&rows, "No completed tasks."));
    assert!(!screen_contains(&rows, "Walk dog"));
}

// =============================================================================
// List and footer
// =============================================================================

#[test]
fn test_items_and_count_render() {
    let mut app = make_app();
    app.dispatch(Action::Add("Buy milk".to_string()));
    app.dispatch(Action::Add("Walk dog".to_string()));

    let rows = render(&app);
    assert!(screen_contains(&rows, "[ ] Walk dog"));
    assert!(screen_contains(&rows, "[ ] Buy milk"));
    assert!(screen_contains(&rows, "2 tasks"));
    assert!(!screen_contains(&rows, "Nothing to do yet"));

    // Newest first on screen as well.
    let walk = rows.iter().position(|r| r.contains("Walk dog")).unwrap();
    let milk = rows.iter().position(|r| r.contains("Buy milk")).unwrap();
    assert!(walk < milk);
}

#[test]
fn test_completed_item_shows_check_and_clear_control() {
    let mut app = make_app();
    app.dispatch(Action::Add("Buy milk".to_string()));
    app.dispatch(Action::Add("Walk dog".to_string()));
    let milk = app.store().tasks()[1].id.clone();
    app.dispatch(Action::Toggle(milk));

    let rows = render(&app);
    assert!(screen_contains(&rows, "[\u{2713}] Buy milk"));
    assert!(screen_contains(&rows, "1 task "));
    assert!(screen_contains(&rows, "Clear completed (1)"));
}

#[test]
fn test_filter_tabs_render() {
    let app = make_app();
    let rows = render(&app);
    assert!(screen_contains(&rows, "1:All 2:Active 3:Completed"));
    assert!(screen_contains(&rows, "Tasks \u{b7} All"));
}

// =============================================================================
// Escaping
// =============================================================================

#[test]
fn test_escape_sequences_render_literally() {
    let mut app = make_app();
    app.dispatch(Action::Add("\u{1b}[2Jwipe<script>".to_string()));

    let rows = render(&app);
    assert!(screen_contains(&rows, "\\u{1b}[2Jwipe<script>"));
}
