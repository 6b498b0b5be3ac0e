//! PIN dot row and keypad for the lock screen

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::auth::PIN_LENGTH;
use crate::ui::Theme;

/// Render the four-dot entry indicator.
pub fn render_dots(frame: &mut Frame, area: Rect, entered: usize, theme: &Theme) {
    let mut spans = Vec::with_capacity(PIN_LENGTH * 2);
    for i in 0..PIN_LENGTH {
        let (glyph, style) = if i < entered {
            ("\u{25CF}", theme.pin_dot())
        } else {
            ("\u{25CB}", theme.pin_placeholder())
        };
        spans.push(Span::styled(glyph, style));
        if i < PIN_LENGTH - 1 {
            spans.push(Span::raw("  "));
        }
    }

    let dots = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(dots, area);
}

/// Render the 3x4 number pad.
pub fn render_keypad(frame: &mut Frame, area: Rect, theme: &Theme) {
    let rows: [[&str; 3]; 4] = [
        ["1", "2", "3"],
        ["4", "5", "6"],
        ["7", "8", "9"],
        [" ", "0", "\u{232B}"],
    ];

    let mut lines: Vec<Line> = Vec::with_capacity(rows.len() * 2);
    for (i, row) in rows.iter().enumerate() {
        let mut spans = Vec::with_capacity(row.len() * 2);
        for (j, cap) in row.iter().enumerate() {
            let style = if *cap == " " {
                Style::default()
            } else {
                theme.keycap()
            };
            spans.push(Span::styled(format!("  {}  ", cap), style));
            if j < row.len() - 1 {
                spans.push(Span::raw("  "));
            }
        }
        lines.push(Line::from(spans));
        if i < rows.len() - 1 {
            lines.push(Line::default());
        }
    }

    let keypad = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(keypad, area);
}
