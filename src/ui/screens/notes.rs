//! Notes screen

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::content::NOTES;
use crate::ui::layout::{app_header, render_help_footer};
use crate::ui::Theme;

const CARD_HEIGHT: u16 = 5;

/// Render the notes list.
pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
    let content = app_header(frame, area, "Notes", theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(content);

    let mut y = chunks[0].y;
    for note in NOTES {
        if y + CARD_HEIGHT > chunks[0].bottom() {
            break;
        }
        let card_area = Rect::new(chunks[0].x, y, chunks[0].width, CARD_HEIGHT);
        render_card(frame, card_area, note.title, note.date, note.content, theme);
        y += CARD_HEIGHT + 1;
    }

    render_help_footer(frame, chunks[1], &[("Esc", "Back")], theme);
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    title: &'static str,
    date: &'static str,
    content: &'static str,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    let date_width = date.len() as u16 + 1;
    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(4), Constraint::Length(date_width)])
        .split(rows[0]);

    frame.render_widget(
        Paragraph::new(Span::styled(title, theme.text())),
        header[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(date, theme.text_muted())).alignment(Alignment::Right),
        header[1],
    );

    let body = Paragraph::new(Span::styled(content, theme.text_secondary()))
        .wrap(Wrap { trim: true });
    frame.render_widget(body, rows[1]);
}
