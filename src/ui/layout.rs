//! Layout helpers for the device frame

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use super::Theme;

/// Bezel width in terminal cells.
pub const FRAME_WIDTH: u16 = 46;
/// Bezel height in terminal cells.
pub const FRAME_HEIGHT: u16 = 44;

/// Areas inside the device bezel.
pub struct DeviceFrame {
    /// One-line status bar at the top of the glass
    pub status_bar: Rect,
    /// Everything below the status bar
    pub screen: Rect,
}

/// Create a fixed-size centered box
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Render the handset bezel centered in `area` and carve out the glass.
pub fn device_frame(frame: &mut Frame, area: Rect, theme: &Theme) -> DeviceFrame {
    let outer = centered_rect_fixed(FRAME_WIDTH, FRAME_HEIGHT.min(area.height), area);

    let bezel = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border())
        .style(Style::default().bg(theme.bg));

    let inner = bezel.inner(outer);
    frame.render_widget(bezel, outer);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status bar
            Constraint::Min(1),    // Screen
        ])
        .split(inner);

    DeviceFrame {
        status_bar: chunks[0],
        screen: chunks[1],
    }
}

/// Render an app header with the back affordance; returns the content area.
pub fn app_header(frame: &mut Frame, area: Rect, title: &str, theme: &Theme) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(1),    // Content
        ])
        .split(area);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.border());
    let inner = block.inner(chunks[0]);
    frame.render_widget(block, chunks[0]);

    let line = Line::from(vec![
        Span::styled(" \u{2190} ", theme.title()),
        Span::styled(title.to_string(), theme.clock()),
    ]);
    frame.render_widget(Paragraph::new(line), inner);

    chunks[1]
}

/// Render help hints in a single footer line.
pub fn render_help_footer(frame: &mut Frame, area: Rect, hints: &[(&str, &str)], theme: &Theme) {
    let hint_spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, action)| {
            vec![
                Span::styled(format!("[{}]", key), theme.text_secondary()),
                Span::styled(format!(" {}  ", action), theme.text_muted()),
            ]
        })
        .collect();

    let line = Line::from(hint_spans);
    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
