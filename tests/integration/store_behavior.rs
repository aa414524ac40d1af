//! Integration tests for task list behavior through the `App` dispatch path.
//!
//! # Verification Focus
//!
//! - Add / toggle / delete / clear-completed semantics
//! - Silent no-ops for blank text and unknown ids
//! - Filtered views preserve list order
//! - Count wording and clear-completed visibility
//! - Every persisting change reaches storage; filter changes do not

use termtodo::app::App;
use termtodo::storage::{KeyValueStore, MemoryStore, TaskPersistence};
use termtodo::tasks::Action;
use termtodo_model::{Filter, TaskId};

fn make_app() -> App<MemoryStore> {
    App::load(TaskPersistence::new(MemoryStore::new()))
}

fn texts(app: &App<MemoryStore>) -> Vec<String> {
    app.store().tasks().iter().map(|t| t.text.clone()).collect()
}

fn id_of(app: &App<MemoryStore>, text: &str) -> TaskId {
    app.store()
        .tasks()
        .iter()
        .find(|t| t.text == text)
        .map(|t| t.id.clone())
        .unwrap()
}

// =============================================================================
// Worked example: Buy milk / Walk dog
// =============================================================================

#[test]
fn test_buy_milk_walk_dog_walkthrough() {
    let mut app = make_app();

    app.dispatch(Action::Add("Buy milk".to_string()));
    assert_eq!(texts(&app), ["Buy milk"]);
    assert!(!app.store().tasks()[0].completed);
    assert_eq!(app.view().remaining_label, "1 task");

    app.dispatch(Action::Add("Walk dog".to_string()));
    assert_eq!(texts(&app), ["Walk dog", "Buy milk"]);
    assert_eq!(app.view().remaining_label, "2 tasks");
    assert!(!app.view().show_clear_completed);

    let milk = id_of(&app, "Buy milk");
    app.dispatch(Action::Toggle(milk));
    let vm = app.view();
    assert_eq!(vm.remaining_label, "1 task");
    assert!(vm.show_clear_completed);

    app.dispatch(Action::ClearCompleted);
    assert_eq!(texts(&app), ["Walk dog"]);
    assert!(!app.view().show_clear_completed);

    // Storage mirrors memory after every step.
    let persisted: Vec<String> = app
        .persistence()
        .load()
        .into_iter()
        .map(|t| t.text)
        .collect();
    assert_eq!(persisted, ["Walk dog"]);
}

// =============================================================================
// Add
// =============================================================================

#[test]
fn test_add_grows_by_one_at_front() {
    let mut app = make_app();
    for text in ["one", "two", "three"] {
        let before = app.store().len();
        assert!(app.dispatch(Action::Add(text.to_string())));
        assert_eq!(app.store().len(), before + 1);
        assert_eq!(app.store().tasks()[0].text, text);
    }
}

#[test]
fn test_add_blank_leaves_sequence_unchanged() {
    let mut app = make_app();
    app.dispatch(Action::Add("keep".to_string()));
    let before = app.store().tasks().to_vec();

    for blank in ["", " ", "\t\n", "   \r\n  "] {
        assert!(!app.dispatch(Action::Add(blank.to_string())));
    }
    assert_eq!(app.store().tasks(), before.as_slice());
}

#[test]
fn test_add_stores_trimmed_text() {
    let mut app = make_app();
    app.dispatch(Action::Add("   padded   ".to_string()));
    assert_eq!(texts(&app), ["padded"]);
}

#[test]
fn test_rapid_adds_get_unique_ids() {
    let mut app = make_app();
    for i in 0..200 {
        app.dispatch(Action::Add(format!("task {i}")));
    }
    let mut ids: Vec<String> = app
        .store()
        .tasks()
        .iter()
        .map(|t| t.id.to_string())
        .collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 200);
}

// =============================================================================
// Toggle / delete
// =============================================================================

#[test]
fn test_toggle_flips_exactly_one() {
    let mut app = make_app();
    app.dispatch(Action::Add("a".to_string()));
    app.dispatch(Action::Add("b".to_string()));
    app.dispatch(Action::Add("c".to_string()));

    let b = id_of(&app, "b");
    app.dispatch(Action::Toggle(b.clone()));

    for task in app.store().tasks() {
        assert_eq!(task.completed, task.id == b, "only b should be completed");
    }
}

#[test]
fn test_toggle_and_delete_unknown_id_are_noops() {
    let mut app = make_app();
    app.dispatch(Action::Add("a".to_string()));
    let before = app.store().tasks().to_vec();

    assert!(!app.dispatch(Action::Toggle(TaskId::new())));
    assert!(!app.dispatch(Action::Delete(TaskId::new())));
    assert_eq!(app.store().tasks(), before.as_slice());
}

#[test]
fn test_delete_removes_exactly_one() {
    let mut app = make_app();
    app.dispatch(Action::Add("a".to_string()));
    app.dispatch(Action::Add("b".to_string()));
    app.dispatch(Action::Add("c".to_string()));

    app.dispatch(Action::Delete(id_of(&app, "b")));
    assert_eq!(texts(&app), ["c", "a"]);
}

// =============================================================================
// Clear completed / toggle all
// =============================================================================

#[test]
fn test_clear_completed_removes_all_and_only_completed() {
    let mut app = make_app();
    for text in ["a", "b", "c", "d", "e"] {
        app.dispatch(Action::Add(text.to_string()));
    }
    for text in ["a", "c", "e"] {
        let id = id_of(&app, text);
        app.dispatch(Action::Toggle(id));
    }

    assert!(app.dispatch(Action::ClearCompleted));
    assert_eq!(texts(&app), ["d", "b"]);
    assert!(app.store().tasks().iter().all(|t| !t.completed));
}

#[test]
fn test_toggle_all_round_trip() {
    let mut app = make_app();
    app.dispatch(Action::Add("a".to_string()));
    app.dispatch(Action::Add("b".to_string()));

    app.dispatch(Action::ToggleAll);
    assert_eq!(app.view().remaining_label, "0 tasks");
    app.dispatch(Action::ToggleAll);
    assert_eq!(app.view().remaining_label, "2 tasks");
}

// =============================================================================
// Filters
// =============================================================================

#[test]
fn test_filtered_views_match_completion_in_order() {
    let mut app = make_app();
    for text in ["a", "b", "c", "d"] {
        app.dispatch(Action::Add(text.to_string()));
    }
    for text in ["b", "d"] {
        let id = id_of(&app, text);
        app.dispatch(Action::Toggle(id));
    }

    let visible = |app: &App<MemoryStore>| -> Vec<String> {
        app.view().items.iter().map(|i| i.text.clone()).collect()
    };

    assert_eq!(visible(&app), ["d", "c", "b", "a"]);

    app.dispatch(Action::SetFilter(Filter::Active));
    assert_eq!(visible(&app), ["c", "a"]);

    app.dispatch(Action::SetFilter(Filter::Completed));
    assert_eq!(visible(&app), ["d", "b"]);
}

#[test]
fn test_set_filter_does_not_persist() {
    let mut app = make_app();
    app.dispatch(Action::Add("a".to_string()));
    let stored_before = app.persistence().store().get("todos").unwrap();

    app.dispatch(Action::SetFilter(Filter::Completed));
    let stored_after = app.persistence().store().get("todos").unwrap();
    assert_eq!(stored_before, stored_after);
}

#[test]
fn test_empty_state_tracks_filtered_view() {
    let mut app = make_app();
    assert!(app.view().show_empty_state);

    app.dispatch(Action::Add("a".to_string()));
    assert!(app.view().show_list);

    app.dispatch(Action::SetFilter(Filter::Completed));
    let vm = app.view();
    assert!(vm.show_empty_state);
    assert!(!vm.show_list);
}

// =============================================================================
// Edit
// =============================================================================

#[test]
fn test_edit_updates_text_and_persists() {
    let mut app = make_app();
    app.dispatch(Action::Add("Buy milk".to_string()));
    let id = id_of(&app, "Buy milk");

    assert!(app.dispatch(Action::Edit(id.clone(), "Buy oat milk".to_string())));
    assert_eq!(app.store().get(&id).unwrap().text, "Buy oat milk");
    assert_eq!(app.persistence().load()[0].text, "Buy oat milk");

    assert!(!app.dispatch(Action::Edit(id, "  ".to_string())));
}
