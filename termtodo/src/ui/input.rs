//! Input box rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::theme;
use crate::app::{App, PanelFocus};
use crate::storage::KeyValueStore;
use crate::view::escape_text;

/// Render the input box.
pub fn render<S: KeyValueStore>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let is_focused = app.focus == PanelFocus::Input;

    // Insert cursor character at cursor position
    let mut display_text = app.input.clone();
    if is_focused {
        let idx = display_text
            .char_indices()
            .nth(app.cursor_position)
            .map_or(display_text.len(), |(i, _)| i);
        display_text.insert(idx, '█');
    }

    let input_line = if display_text.is_empty() && !is_focused {
        Line::from(Span::styled("What needs to be done?", theme::dimmed()))
    } else {
        Line::from(Span::styled(escape_text(&display_text), theme::normal()))
    };

    let (title, title_style) = if app.editing.is_some() {
        ("Edit task", theme::panel_title(theme::WARNING))
    } else {
        ("New task", theme::bold())
    };

    let block = Block::default()
        .title(Span::styled(title, title_style))
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });

    let paragraph = Paragraph::new(input_line).block(block);

    frame.render_widget(paragraph, area);
}
