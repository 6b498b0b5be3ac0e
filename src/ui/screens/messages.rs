//! Messages screen: conversation list

use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem};

use crate::app::AppState;
use crate::content::CONVERSATIONS;
use crate::ui::layout::{app_header, render_help_footer};
use crate::ui::Theme;

/// Render the conversation list.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let content = app_header(frame, area, "Messages", theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(content);

    let items: Vec<ListItem> = CONVERSATIONS
        .iter()
        .enumerate()
        .map(|(i, conversation)| {
            let selected = i == state.message_index;
            let initial = conversation.name.chars().next().unwrap_or('?');

            let name_width = chunks[0].width.saturating_sub(16) as usize;
            let header = Line::from(vec![
                Span::styled(format!(" ({}) ", initial), theme.text_secondary()),
                Span::styled(
                    format!("{:<width$}", conversation.name, width = name_width),
                    theme.menu_item(selected),
                ),
                Span::styled(conversation.time, theme.text_muted()),
            ]);

            let unread_marker = if conversation.unread {
                Span::styled(" \u{25CF}", theme.unread())
            } else {
                Span::raw("  ")
            };
            let preview = Line::from(vec![
                Span::raw("     "),
                Span::styled(conversation.preview, theme.text_muted()),
                unread_marker,
            ]);

            ListItem::new(vec![header, preview, Line::default()])
        })
        .collect();

    let list = List::new(items);
    frame.render_widget(list, chunks[0]);

    render_help_footer(
        frame,
        chunks[1],
        &[("\u{2191}\u{2193}", "Select"), ("Enter", "Open"), ("Esc", "Back")],
        theme,
    );
}
