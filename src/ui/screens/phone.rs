//! Phone screen: recent calls

use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem};

use crate::content::{CallKind, CALLS};
use crate::ui::layout::{app_header, render_help_footer};
use crate::ui::Theme;

/// Render the call log.
pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
    let content = app_header(frame, area, "Recent Calls", theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(content);

    let items: Vec<ListItem> = CALLS
        .iter()
        .map(|call| {
            let (glyph, glyph_style) = match call.kind {
                CallKind::Missed => ("\u{2715}", theme.danger()),
                CallKind::Incoming => ("\u{2199}", theme.border_focused()),
                CallKind::Outgoing => ("\u{2197}", theme.border_focused()),
            };

            let name_width = chunks[0].width.saturating_sub(14) as usize;
            let header = Line::from(vec![
                Span::styled(format!(" {} ", glyph), glyph_style),
                Span::styled(
                    format!("{:<width$}", call.name, width = name_width),
                    theme.text(),
                ),
                Span::styled(call.time, theme.text_muted()),
            ]);
            let detail = Line::from(vec![
                Span::raw("   "),
                Span::styled(call.duration, theme.text_muted()),
            ]);

            ListItem::new(vec![header, detail, Line::default()])
        })
        .collect();

    frame.render_widget(List::new(items), chunks[0]);

    render_help_footer(frame, chunks[1], &[("Esc", "Back")], theme);
}
