//! Application shell and event handling

pub mod config;
mod state;

pub use config::PropConfig;
pub use state::{AppState, Screen};

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;

use crate::content::{CONVERSATIONS, HOME_APPS};
use crate::ui;

/// Application result type
pub type AppResult<T> = Result<T, Box<dyn std::error::Error>>;

/// UI tick rate; fades advance on this clock.
const TICK_RATE: Duration = Duration::from_millis(100);

/// Home grid column count.
const HOME_COLUMNS: usize = 4;

/// Main application struct
pub struct App {
    /// Application state
    pub state: AppState,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Tick counter for animations
    pub tick: u64,

    /// Last tick time
    last_tick: Instant,

    /// One-second clock for the lockout countdown. Armed only while the
    /// lock screen is locked out; disarmed the moment the lockout ends.
    lockout_clock: Option<Instant>,
}

impl App {
    /// Create a new application instance
    pub fn new(config: &PropConfig) -> Self {
        Self {
            state: AppState::new(config),
            should_quit: false,
            tick: 0,
            last_tick: Instant::now(),
            lockout_clock: None,
        }
    }

    /// Run the application main loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> AppResult<()> {
        while !self.should_quit {
            // Draw UI
            terminal.draw(|frame| ui::render(frame, &self.state, self.tick))?;

            // Handle events
            let timeout = TICK_RATE
                .checked_sub(self.last_tick.elapsed())
                .unwrap_or(Duration::ZERO);

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }

            // Update tick
            if self.last_tick.elapsed() >= TICK_RATE {
                self.tick = self.tick.wrapping_add(1);
                self.last_tick = Instant::now();
                self.state.transition_tick();
                self.advance_lockout_clock();
            }
        }

        Ok(())
    }

    /// Drive the lockout countdown once per second while it is active.
    fn advance_lockout_clock(&mut self) {
        if !self.state.pin().is_locked() {
            self.lockout_clock = None;
            return;
        }

        let clock = self.lockout_clock.get_or_insert_with(Instant::now);
        if clock.elapsed() >= Duration::from_secs(1) {
            *clock += Duration::from_secs(1);
            self.state.lockout_tick();
            if !self.state.pin().is_locked() {
                self.lockout_clock = None;
            }
        }
    }

    /// Handle key press events
    fn handle_key(&mut self, key: KeyCode) {
        // Let fades finish before taking the next input
        if self.state.is_transitioning() {
            return;
        }

        // Delegate to screen-specific handlers
        match self.state.current_screen() {
            Screen::Lock => self.handle_lock_key(key),
            Screen::Home => self.handle_home_key(key),
            Screen::Messages => self.handle_messages_key(key),
            Screen::Conversation(_)
            | Screen::Gallery
            | Screen::Notes
            | Screen::Phone
            | Screen::Recorder => self.handle_app_key(key),
        }
    }

    fn handle_lock_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Backspace | KeyCode::Delete => {
                self.state.delete_digit();
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                self.state.press_digit(c);
            }
            _ => {}
        }
    }

    fn handle_home_key(&mut self, key: KeyCode) {
        let index = self.state.home_index;
        match key {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Left | KeyCode::Char('h') => {
                if index > 0 {
                    self.state.home_index -= 1;
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if index < HOME_APPS.len() - 1 {
                    self.state.home_index += 1;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if index >= HOME_COLUMNS {
                    self.state.home_index -= HOME_COLUMNS;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if index + HOME_COLUMNS < HOME_APPS.len() {
                    self.state.home_index += HOME_COLUMNS;
                }
            }
            KeyCode::Enter => {
                // Inert apps (Camera, Chrome, ...) swallow the press
                if let Some(target) = HOME_APPS[index].target {
                    self.state.open(target);
                }
            }
            _ => {}
        }
    }

    fn handle_messages_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Backspace => {
                self.state.go_back();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if self.state.message_index > 0 {
                    self.state.message_index -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.state.message_index < CONVERSATIONS.len() - 1 {
                    self.state.message_index += 1;
                }
            }
            KeyCode::Enter => {
                let id = CONVERSATIONS[self.state.message_index].id;
                self.state.open_conversation(id);
            }
            _ => {}
        }
    }

    fn handle_app_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Backspace => {
                self.state.go_back();
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::AppTarget;

    fn unlocked_app() -> App {
        let mut app = App::new(&PropConfig::default());
        for digit in "0712".chars() {
            app.handle_key(KeyCode::Char(digit));
        }
        app.state.settle();
        app
    }

    #[test]
    fn digits_typed_on_lock_screen_unlock() {
        let app = unlocked_app();
        assert_eq!(app.state.current_screen(), Screen::Home);
    }

    #[test]
    fn esc_quits_from_lock_screen() {
        let mut app = App::new(&PropConfig::default());
        app.handle_key(KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn home_grid_selection_stays_in_bounds() {
        let mut app = unlocked_app();
        app.handle_key(KeyCode::Left);
        assert_eq!(app.state.home_index, 0);
        app.handle_key(KeyCode::Up);
        assert_eq!(app.state.home_index, 0);

        for _ in 0..HOME_APPS.len() * 2 {
            app.handle_key(KeyCode::Right);
        }
        assert_eq!(app.state.home_index, HOME_APPS.len() - 1);
        app.handle_key(KeyCode::Down);
        assert_eq!(app.state.home_index, HOME_APPS.len() - 1);
    }

    #[test]
    fn enter_on_inert_app_does_nothing() {
        let mut app = unlocked_app();
        // Index 2 is Camera, which has no target
        app.state.home_index = 2;
        app.handle_key(KeyCode::Enter);
        assert!(!app.state.is_transitioning());
        assert_eq!(app.state.current_screen(), Screen::Home);
    }

    #[test]
    fn enter_opens_selected_conversation() {
        let mut app = unlocked_app();
        app.state.open(AppTarget::Messages);
        app.state.settle();

        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Enter);
        app.state.settle();
        assert_eq!(
            app.state.current_screen(),
            Screen::Conversation(CONVERSATIONS[1].id)
        );
    }

    #[test]
    fn keys_are_dropped_mid_fade() {
        let mut app = unlocked_app();
        app.state.open(AppTarget::Gallery);
        assert!(app.state.is_transitioning());
        app.handle_key(KeyCode::Esc);
        app.state.settle();
        assert_eq!(app.state.current_screen(), Screen::Gallery);
    }
}
