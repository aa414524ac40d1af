//! Terminal UI rendering.
//!
//! Every frame is drawn from scratch from the app's [`ViewModel`]; there is
//! no retained widget state to keep in sync.

pub mod input;
pub mod status_bar;
pub mod task_list;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::App;
use crate::storage::KeyValueStore;
use crate::view::ViewModel;

/// Main draw function for the entire UI.
pub fn draw<S: KeyValueStore>(frame: &mut Frame, app: &App<S>) {
    let vm: ViewModel = app.view();

    // Input on top, list in the middle, footer and help bar at the bottom
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    input::render(frame, chunks[0], app);
    task_list::render(frame, chunks[1], app, &vm);
    status_bar::render_footer(frame, chunks[2], &vm);
    status_bar::render_help(frame, chunks[3], app);
}
