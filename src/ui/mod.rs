//! UI rendering

pub mod components;
pub mod layout;
pub mod screens;
mod theme;

pub use theme::Theme;

use ratatui::prelude::*;

use crate::app::{AppState, Screen};

/// Main render function - draws the bezel and delegates to the active screen.
pub fn render(frame: &mut Frame, state: &AppState, tick: u64) {
    let theme = Theme::default();
    let device = layout::device_frame(frame, frame.area(), &theme);

    components::status_bar::render(frame, device.status_bar, &theme);

    // Mid-fade the glass goes dark, like the original's opacity dip
    if state.is_transitioning() {
        return;
    }

    match state.current_screen() {
        Screen::Lock => screens::lock::render(frame, device.screen, state, &theme, tick),
        Screen::Home => screens::home::render(frame, device.screen, state, &theme),
        Screen::Messages => screens::messages::render(frame, device.screen, state, &theme),
        Screen::Conversation(id) => {
            screens::conversation::render(frame, device.screen, id.conversation(), &theme)
        }
        Screen::Gallery => screens::gallery::render(frame, device.screen, &theme),
        Screen::Notes => screens::notes::render(frame, device.screen, &theme),
        Screen::Phone => screens::phone::render(frame, device.screen, &theme),
        Screen::Recorder => screens::recorder::render(frame, device.screen, &theme),
    }
}
