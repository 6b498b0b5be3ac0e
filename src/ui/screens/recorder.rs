//! Recorder screen: saved voice recordings

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::content::RECORDINGS;
use crate::ui::layout::{app_header, render_help_footer};
use crate::ui::Theme;

const CARD_HEIGHT: u16 = 5;

/// Render the recordings list.
pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
    let content = app_header(frame, area, "Voice Recorder", theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(content);

    let mut y = chunks[0].y;
    for recording in RECORDINGS {
        if y + CARD_HEIGHT > chunks[0].bottom() {
            break;
        }
        let card_area = Rect::new(chunks[0].x, y, chunks[0].width, CARD_HEIGHT);

        let border_style = if recording.corrupted {
            theme.danger()
        } else {
            theme.border()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(card_area);
        frame.render_widget(block, card_area);

        let title_style = if recording.corrupted {
            theme.danger()
        } else {
            theme.text()
        };
        let mut lines = vec![
            Line::from(vec![
                Span::styled("\u{25CF} ", theme.warning()),
                Span::styled(recording.title, title_style),
                Span::raw("  "),
                Span::styled(recording.duration, theme.text_secondary()),
            ]),
            Line::from(Span::styled(recording.date, theme.text_muted())),
        ];
        if recording.corrupted {
            lines.push(Line::from(Span::styled(
                "\u{2715} File corrupted - Unable to play",
                theme.danger(),
            )));
        }
        frame.render_widget(Paragraph::new(lines), inner);

        y += CARD_HEIGHT + 1;
    }

    render_help_footer(frame, chunks[1], &[("Esc", "Back")], theme);
}
