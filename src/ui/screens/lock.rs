//! Lock screen: clock, notification card, PIN keypad, lockout panel

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::AppState;
use crate::content::LOCK_NOTIFICATION;
use crate::ui::components::keypad;
use crate::ui::layout::render_help_footer;
use crate::ui::Theme;

/// Render the lock screen.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme, tick: u64) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Clock
            Constraint::Length(1), // Date
            Constraint::Length(1), // Spacer
            Constraint::Length(4), // Notification card
            Constraint::Length(1), // Swipe hint
            Constraint::Min(1),    // Keypad / lockout panel
            Constraint::Length(1), // Owner label
            Constraint::Length(1), // Footer
        ])
        .split(area);

    // Clock and date
    let now = chrono::Local::now();
    let clock = Paragraph::new(now.format("%H:%M").to_string())
        .style(theme.clock())
        .alignment(Alignment::Center);
    frame.render_widget(clock, chunks[1]);

    let date = Paragraph::new(now.format("%A, %B %-d").to_string())
        .style(theme.text_secondary())
        .alignment(Alignment::Center);
    frame.render_widget(date, chunks[2]);

    // Notification card
    let card_area = centered_card(chunks[4]);
    let card = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border());
    let card_inner = card.inner(card_area);
    frame.render_widget(card, card_area);

    let notification = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("\u{25CF} ", Style::default().fg(theme.phone_green)),
            Span::styled(LOCK_NOTIFICATION.title, theme.text()),
        ]),
        Line::from(Span::styled(LOCK_NOTIFICATION.preview, theme.text_muted())),
    ]);
    frame.render_widget(notification, card_inner);

    // Blinking swipe hint
    if (tick / 5) % 2 == 0 {
        let hint = Paragraph::new("\u{2014} Swipe up to unlock \u{2014}")
            .style(theme.text_muted())
            .alignment(Alignment::Center);
        frame.render_widget(hint, chunks[5]);
    }

    if state.pin().is_locked() {
        render_lockout_panel(frame, chunks[6], state, theme);
    } else {
        render_pin_pad(frame, chunks[6], state, theme);
    }

    // Owner label
    let owner = Paragraph::new(state.owner_label.as_str())
        .style(theme.text_muted())
        .alignment(Alignment::Center);
    frame.render_widget(owner, chunks[7]);

    render_help_footer(
        frame,
        chunks[8],
        &[("0-9", "Enter PIN"), ("\u{232B}", "Delete"), ("Esc", "Power off")],
        theme,
    );
}

fn render_pin_pad(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Dots
            Constraint::Length(1), // Error line
            Constraint::Length(1), // Spacer
            Constraint::Min(7),    // Keypad
        ])
        .split(area);

    keypad::render_dots(frame, chunks[1], state.pin().entry_len(), theme);

    let attempts = state.pin().failed_attempts();
    if attempts > 0 {
        let detail = match state.pin().hint() {
            Some(code) => format!("Hint: Try {}", code),
            None => format!("{} attempt(s)", attempts),
        };
        let error = Paragraph::new(format!("Incorrect PIN. {}", detail))
            .style(theme.danger())
            .alignment(Alignment::Center);
        frame.render_widget(error, chunks[2]);
    }

    keypad::render_keypad(frame, chunks[4], theme);
}

/// Countdown panel shown instead of the keypad while locked out.
fn render_lockout_panel(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let Some(lockout) = state.pin().lockout() else {
        return;
    };

    let panel_area = centered_card(area);
    let panel = Block::default()
        .title(" Locked ")
        .title_style(theme.danger())
        .borders(Borders::ALL)
        .border_style(theme.danger());
    let inner = panel.inner(panel_area);
    frame.render_widget(panel, panel_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Message
            Constraint::Length(1), // Countdown
            Constraint::Length(1), // Progress bar
        ])
        .split(inner);

    let message = Paragraph::new("Too many failed attempts.\nPlease wait before trying again.")
        .style(theme.text())
        .alignment(Alignment::Center);
    frame.render_widget(message, chunks[0]);

    let countdown = Paragraph::new(format!("Time remaining: {}", lockout.remaining_formatted()))
        .style(theme.warning())
        .alignment(Alignment::Center);
    frame.render_widget(countdown, chunks[1]);

    let bar_width = chunks[2].width.saturating_sub(2) as usize;
    let filled = (lockout.progress() * bar_width as f64) as usize;
    let bar = format!(
        "{}{}",
        "\u{2588}".repeat(filled),
        "\u{2591}".repeat(bar_width.saturating_sub(filled))
    );
    let bar_widget = Paragraph::new(bar)
        .style(theme.danger())
        .alignment(Alignment::Center);
    frame.render_widget(bar_widget, chunks[2]);
}

fn centered_card(area: Rect) -> Rect {
    let width = area.width.saturating_sub(6).min(34);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    Rect::new(x, area.y, width, area.height.min(7))
}
