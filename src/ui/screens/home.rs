//! Home screen: clock and device widgets plus the app grid

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::AppState;
use crate::content::{DEVICE, HOME_APPS};
use crate::ui::layout::render_help_footer;
use crate::ui::Theme;

/// Grid column count; keep in sync with the key handler's row math.
const COLUMNS: usize = 4;
const CELL_WIDTH: usize = 10;

/// Render the home screen.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Clock widget
            Constraint::Length(4), // Battery / wifi widget
            Constraint::Length(1), // Spacer
            Constraint::Min(6),    // App grid
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_clock_widget(frame, chunks[0], theme);
    render_info_widget(frame, chunks[1], theme);
    render_app_grid(frame, chunks[3], state, theme);

    render_help_footer(
        frame,
        chunks[4],
        &[("\u{2190}\u{2191}\u{2193}\u{2192}", "Select"), ("Enter", "Open"), ("q", "Power off")],
        theme,
    );
}

fn render_clock_widget(frame: &mut Frame, area: Rect, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let now = chrono::Local::now();
    let widget = Paragraph::new(vec![
        Line::from(Span::styled(now.format("%H:%M").to_string(), theme.clock())),
        Line::from(Span::styled(
            now.format("%A, %B %-d").to_string(),
            theme.text_secondary(),
        )),
    ]);
    frame.render_widget(widget, inner);
}

fn render_info_widget(frame: &mut Frame, area: Rect, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let battery = Paragraph::new(vec![
        Line::from(Span::styled("Battery", theme.text_muted())),
        Line::from(Span::styled(
            format!("{}%", DEVICE.battery_percent),
            theme.success(),
        )),
    ]);
    frame.render_widget(battery, halves[0]);

    let wifi_status = if DEVICE.wifi_connected {
        Span::styled("Connected", theme.text())
    } else {
        Span::styled("Off", theme.text_muted())
    };
    let wifi = Paragraph::new(vec![
        Line::from(Span::styled("WiFi", theme.text_muted())),
        Line::from(wifi_status),
    ]);
    frame.render_widget(wifi, halves[1]);
}

fn render_app_grid(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let mut lines: Vec<Line> = Vec::new();
    for (row_index, row) in HOME_APPS.chunks(COLUMNS).enumerate() {
        let mut spans = Vec::with_capacity(row.len());
        for (col_index, app) in row.iter().enumerate() {
            let index = row_index * COLUMNS + col_index;
            let style = if index == state.home_index {
                theme.menu_item(true)
            } else if app.target.is_some() {
                theme.text()
            } else {
                theme.text_muted()
            };
            spans.push(Span::styled(center_cell(app.name), style));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(grid, area);
}

fn center_cell(name: &str) -> String {
    let pad = CELL_WIDTH.saturating_sub(name.len());
    let left = pad / 2;
    format!(
        "{}{}{}",
        " ".repeat(left),
        name,
        " ".repeat(pad - left)
    )
}
