//! Task list rendering (items or the empty-state panel).

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use super::theme;
use crate::app::{App, PanelFocus};
use crate::storage::KeyValueStore;
use crate::view::ViewModel;

/// Render the task list, or the empty-state message when nothing matches.
pub fn render<S: KeyValueStore>(frame: &mut Frame, area: Rect, app: &App<S>, vm: &ViewModel) {
    let is_focused = app.focus == PanelFocus::List;

    let block = Block::default()
        .title(Span::styled(
            format!("Tasks \u{b7} {}", vm.filter),
            theme::panel_title(theme::TASKS_TITLE),
        ))
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });

    if vm.show_empty_state {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            vm.empty_message,
            theme::empty_state(),
        )))
        .wrap(Wrap { trim: true })
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = vm
        .items
        .iter()
        .map(|item| {
            let (check_style, text_style) = if item.completed {
                (theme::normal().fg(theme::SUCCESS), theme::completed())
            } else {
                (theme::normal(), theme::normal())
            };

            let line = Line::from(vec![
                Span::styled(item.checkbox(), check_style),
                Span::raw(" "),
                Span::styled(item.text.as_str(), text_style),
                Span::raw("  "),
                Span::styled(item.created.as_str(), theme::dimmed()),
                Span::raw(" "),
                Span::styled("\u{2717}", theme::dimmed()),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(if is_focused {
            theme::selected()
        } else {
            theme::bold()
        })
        .highlight_symbol("\u{25b8} ");

    let mut state = ListState::default().with_selected(Some(app.selected));
    frame.render_stateful_widget(list, area, &mut state);
}
