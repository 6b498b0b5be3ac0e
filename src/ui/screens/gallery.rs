//! Gallery screen: metadata tiles for the "lost" photos

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::content::{PhotoTone, PHOTOS};
use crate::ui::layout::{app_header, render_help_footer};
use crate::ui::Theme;

const TILE_HEIGHT: u16 = 5;

/// Render the gallery grid.
pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
    let content = app_header(frame, area, "Gallery", theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(content);

    let grid = chunks[0];
    for (i, photo) in PHOTOS.iter().enumerate() {
        let col = (i % 2) as u16;
        let row = (i / 2) as u16;
        let tile_width = grid.width / 2;
        let tile = Rect::new(
            grid.x + col * tile_width,
            grid.y + row * TILE_HEIGHT,
            tile_width,
            TILE_HEIGHT,
        );
        if tile.bottom() > grid.bottom() {
            break;
        }
        render_tile(frame, tile, photo.title, photo.subtitle, photo.tone, theme);
    }

    render_help_footer(frame, chunks[1], &[("Esc", "Back")], theme);
}

fn render_tile(
    frame: &mut Frame,
    area: Rect,
    title: &'static str,
    subtitle: &'static str,
    tone: PhotoTone,
    theme: &Theme,
) {
    let border_style = match tone {
        PhotoTone::Danger => theme.danger(),
        PhotoTone::Neutral => theme.border(),
        PhotoTone::Info => theme.border_focused(),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let body = Paragraph::new(vec![
        Line::from(Span::styled("\u{25A8}", theme.text_muted())),
        Line::from(Span::styled(title, theme.text())),
        Line::from(Span::styled(subtitle, theme.text_muted())),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(body, inner);
}
