//! Device status bar: clock, signal, wifi, battery

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::content::DEVICE;
use crate::ui::Theme;

/// Render the one-line status bar at the top of the glass.
pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(8), Constraint::Min(4)])
        .split(area);

    // Left: clock
    let time = chrono::Local::now().format("%H:%M").to_string();
    let clock = Paragraph::new(format!(" {}", time)).style(theme.text());
    frame.render_widget(clock, chunks[0]);

    // Right: signal, wifi, battery
    let wifi_style = if DEVICE.wifi_connected {
        theme.success()
    } else {
        theme.text_muted()
    };
    let wifi_indicator = if DEVICE.wifi_connected { "●" } else { "○" };

    let right = Line::from(vec![
        Span::styled("\u{2582}\u{2584}\u{2586} ", theme.text_secondary()),
        Span::styled(format!("{} ", wifi_indicator), wifi_style),
        Span::styled(format!("\u{25AE} {}% ", DEVICE.battery_percent), theme.text_secondary()),
    ]);
    let status = Paragraph::new(right).alignment(Alignment::Right);
    frame.render_widget(status, chunks[1]);
}
