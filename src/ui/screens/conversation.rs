//! Conversation screen: one message thread as chat bubbles

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::content::{Conversation, Message};
use crate::ui::layout::{app_header, render_help_footer};
use crate::ui::Theme;

/// Widest a bubble may grow relative to the screen.
const BUBBLE_MAX_RATIO: f32 = 0.75;

/// Render one conversation thread.
pub fn render(frame: &mut Frame, area: Rect, conversation: &Conversation, theme: &Theme) {
    let content = app_header(frame, area, conversation.name, theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Thread
            Constraint::Length(1), // Disabled composer
            Constraint::Length(1), // Footer
        ])
        .split(content);

    let max_bubble = (chunks[0].width as f32 * BUBBLE_MAX_RATIO) as usize;
    let mut lines: Vec<Line> = vec![Line::default()];
    for message in conversation.messages {
        lines.extend(bubble_lines(message, chunks[0].width as usize, max_bubble, theme));
        lines.push(Line::default());
    }
    frame.render_widget(Paragraph::new(lines), chunks[0]);

    let composer = Paragraph::new(" Message (disabled)")
        .style(theme.text_muted())
        .alignment(Alignment::Left);
    frame.render_widget(composer, chunks[1]);

    render_help_footer(frame, chunks[2], &[("Esc", "Back")], theme);
}

/// Build the padded bubble rows plus the timestamp row for one message.
fn bubble_lines(
    message: &Message,
    screen_width: usize,
    max_bubble: usize,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let style = if message.sent {
        theme.bubble_sent()
    } else {
        theme.bubble_incoming()
    };

    let rows = wrap_words(message.text, max_bubble.saturating_sub(2));
    let bubble_width = rows
        .iter()
        .map(|row| row.width())
        .max()
        .unwrap_or(0)
        .saturating_add(2);

    let mut lines = Vec::with_capacity(rows.len() + 1);
    for row in rows {
        let fill = bubble_width.saturating_sub(row.width() + 2);
        let text = format!(" {}{} ", row, " ".repeat(fill));
        lines.push(aligned(Span::styled(text, style), message.sent, screen_width, bubble_width));
    }
    lines.push(aligned(
        Span::styled(message.time.to_string(), theme.text_muted()),
        message.sent,
        screen_width,
        message.time.width(),
    ));
    lines
}

/// Right-align sent content, left-align received content.
fn aligned(span: Span<'static>, sent: bool, screen_width: usize, content_width: usize) -> Line<'static> {
    if sent {
        let indent = screen_width.saturating_sub(content_width + 1);
        Line::from(vec![Span::raw(" ".repeat(indent)), span])
    } else {
        Line::from(vec![Span::raw(" "), span])
    }
}

/// Greedy word wrap by display width.
fn wrap_words(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut rows: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed > max_width && !current.is_empty() {
            rows.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_at_display_width() {
        let rows = wrap_words("I KNOW YOUR SECRET AND I WON'T LET YOU GO", 16);
        assert!(rows.iter().all(|row| row.width() <= 16));
        assert_eq!(rows.join(" "), "I KNOW YOUR SECRET AND I WON'T LET YOU GO");
    }

    #[test]
    fn short_text_stays_on_one_row() {
        assert_eq!(wrap_words("hello", 20), vec!["hello".to_string()]);
    }

    #[test]
    fn oversized_word_gets_its_own_row() {
        let rows = wrap_words("a extraordinarily b", 6);
        assert_eq!(rows.len(), 3);
    }
}
