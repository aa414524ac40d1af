//! Footer (count, filters, clear completed) and key help rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use termtodo_model::Filter;

use super::theme;
use crate::app::{App, PanelFocus};
use crate::storage::KeyValueStore;
use crate::view::ViewModel;

/// Render the footer: remaining count, filter tabs, and the
/// "clear completed" control when it applies.
pub fn render_footer(frame: &mut Frame, area: Rect, vm: &ViewModel) {
    let mut spans = vec![
        Span::styled(format!(" {}", vm.remaining_label), theme::bold()),
        Span::raw(" | "),
    ];

    for (idx, filter) in Filter::ALL.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if *filter == vm.filter {
            theme::active_filter()
        } else {
            theme::dimmed()
        };
        spans.push(Span::styled(format!("{}:{filter}", idx + 1), style));
    }

    if vm.show_clear_completed {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("x: Clear completed ({})", vm.completed),
            theme::normal().fg(theme::WARNING),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the key help bar at the bottom of the screen.
pub fn render_help<S: KeyValueStore>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let help_text = match (app.focus, app.editing.is_some()) {
        (PanelFocus::Input, true) => "Enter: save edit | Esc: cancel edit",
        (PanelFocus::Input, false) => "Enter: add | Tab: list | Esc: quit | \u{2190}\u{2192}: move cursor",
        (PanelFocus::List, _) => {
            "Space: toggle | d: delete | e: edit | t: toggle all | 1-3/\u{2190}\u{2192}: filter | Tab: input | Esc: quit"
        }
    };

    let status_line = Line::from(vec![
        Span::styled("TermTodo", theme::bold()),
        Span::raw(" | "),
        Span::styled(help_text, theme::dimmed()),
    ]);

    let paragraph = Paragraph::new(status_line).style(theme::status_bar_bg());
    frame.render_widget(paragraph, area);
}
