//! Application state and the screen-navigation state machine

use crate::app::config::PropConfig;
use crate::auth::{PinOutcome, PinPad};
use crate::content::{AppTarget, ConversationId};

/// Current screen/view. Exactly one is active at a time.
///
/// The open conversation travels inside its variant, so there is no separate
/// "active conversation" field that could survive leaving the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// PIN lock screen
    #[default]
    Lock,

    /// Home screen with the app grid
    Home,

    /// Conversation list
    Messages,

    /// One message thread
    Conversation(ConversationId),

    /// Photo grid
    Gallery,

    /// Notes list
    Notes,

    /// Recent calls
    Phone,

    /// Voice recordings
    Recorder,
}

impl From<AppTarget> for Screen {
    fn from(target: AppTarget) -> Self {
        match target {
            AppTarget::Phone => Screen::Phone,
            AppTarget::Messages => Screen::Messages,
            AppTarget::Gallery => Screen::Gallery,
            AppTarget::Notes => Screen::Notes,
            AppTarget::Recorder => Screen::Recorder,
        }
    }
}

/// Fade-out phase length, in UI ticks (~100 ms each).
const FADE_OUT_TICKS: u8 = 2;
/// Fade-in phase length after the screen swap.
const FADE_IN_TICKS: u8 = 1;

/// An in-flight screen change. The visible screen only swaps once the
/// fade-out completes; the flag clears after the fade-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    FadeOut { to: Screen, ticks_left: u8 },
    FadeIn { ticks_left: u8 },
}

/// Application state
///
/// All mutation goes through the transition methods below; rendering only
/// ever reads. Navigation input arriving while a fade is in flight is
/// dropped, so a transition always reaches its target screen.
pub struct AppState {
    /// Current screen
    current_screen: Screen,

    /// In-flight screen change, if any
    transition: Option<Transition>,

    /// Lock-screen PIN pad
    pin: PinPad,

    /// Label under the lock-screen keypad
    pub owner_label: String,

    /// Home grid selection index
    pub home_index: usize,

    /// Conversation list selection index
    pub message_index: usize,
}

impl AppState {
    /// Create the state for a configured prop, starting on the lock screen.
    pub fn new(config: &PropConfig) -> Self {
        Self {
            current_screen: Screen::Lock,
            transition: None,
            pin: PinPad::new(config.pin_code.clone(), config.lockout.policy()),
            owner_label: config.owner_label.clone(),
            home_index: 0,
            message_index: 0,
        }
    }

    /// The screen currently rendered.
    pub fn current_screen(&self) -> Screen {
        self.current_screen
    }

    /// Whether a fade is in flight.
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// The open conversation, while on the conversation screen.
    pub fn active_conversation(&self) -> Option<ConversationId> {
        match self.current_screen {
            Screen::Conversation(id) => Some(id),
            _ => None,
        }
    }

    /// Read access to the PIN pad for rendering.
    pub fn pin(&self) -> &PinPad {
        &self.pin
    }

    /// Feed one digit to the lock screen.
    pub fn press_digit(&mut self, digit: char) {
        if self.current_screen != Screen::Lock || self.transition.is_some() {
            return;
        }
        match self.pin.press_digit(digit) {
            PinOutcome::Accepted => {
                tracing::info!("Unlocked");
                self.begin_transition(Screen::Home);
            }
            PinOutcome::Rejected { attempts } => {
                tracing::debug!(attempts, "Wrong PIN");
            }
            PinOutcome::LockedOut { seconds } => {
                tracing::warn!(seconds, "Lock screen locked out");
            }
            PinOutcome::Pending | PinOutcome::Ignored => {}
        }
    }

    /// Remove the last entered digit.
    pub fn delete_digit(&mut self) {
        if self.current_screen == Screen::Lock {
            self.pin.delete_digit();
        }
    }

    /// Advance the lockout countdown by one second.
    pub fn lockout_tick(&mut self) {
        if self.pin.tick() {
            tracing::info!("Lockout expired, attempts reset");
        }
    }

    /// Open an app from the home screen.
    pub fn open(&mut self, target: AppTarget) {
        if self.current_screen == Screen::Home {
            self.begin_transition(target.into());
        }
    }

    /// Open a conversation from the messages list.
    pub fn open_conversation(&mut self, id: ConversationId) {
        if self.current_screen == Screen::Messages {
            self.begin_transition(Screen::Conversation(id));
        }
    }

    /// Navigate back: conversation → messages, any other app → home.
    pub fn go_back(&mut self) {
        match self.current_screen {
            Screen::Conversation(_) => self.begin_transition(Screen::Messages),
            Screen::Messages
            | Screen::Gallery
            | Screen::Notes
            | Screen::Phone
            | Screen::Recorder => self.begin_transition(Screen::Home),
            Screen::Lock | Screen::Home => {}
        }
    }

    /// Advance an in-flight fade by one UI tick.
    pub fn transition_tick(&mut self) {
        self.transition = match self.transition.take() {
            Some(Transition::FadeOut { to, ticks_left }) => {
                if ticks_left > 1 {
                    Some(Transition::FadeOut {
                        to,
                        ticks_left: ticks_left - 1,
                    })
                } else {
                    tracing::debug!(from = ?self.current_screen, ?to, "Screen swap");
                    self.current_screen = to;
                    Some(Transition::FadeIn {
                        ticks_left: FADE_IN_TICKS,
                    })
                }
            }
            Some(Transition::FadeIn { ticks_left }) => {
                if ticks_left > 1 {
                    Some(Transition::FadeIn {
                        ticks_left: ticks_left - 1,
                    })
                } else {
                    None
                }
            }
            None => None,
        };
    }

    fn begin_transition(&mut self, to: Screen) {
        if self.transition.is_some() || to == self.current_screen {
            return;
        }
        self.transition = Some(Transition::FadeOut {
            to,
            ticks_left: FADE_OUT_TICKS,
        });
    }

    /// Run any pending fade to completion.
    pub fn settle(&mut self) {
        while self.transition.is_some() {
            self.transition_tick();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(&PropConfig::default())
    }

    fn unlocked_state() -> AppState {
        let mut state = state();
        for digit in "0712".chars() {
            state.press_digit(digit);
        }
        state.settle();
        state
    }

    #[test]
    fn starts_on_lock_screen() {
        let state = state();
        assert_eq!(state.current_screen(), Screen::Lock);
        assert!(!state.is_transitioning());
        assert!(state.active_conversation().is_none());
    }

    #[test]
    fn correct_pin_reaches_home_after_fade() {
        let mut state = state();
        for digit in "0712".chars() {
            state.press_digit(digit);
        }

        // Fade-out keeps the lock screen visible for two ticks
        assert_eq!(state.current_screen(), Screen::Lock);
        assert!(state.is_transitioning());
        state.transition_tick();
        assert_eq!(state.current_screen(), Screen::Lock);
        state.transition_tick();
        assert_eq!(state.current_screen(), Screen::Home);
        assert!(state.is_transitioning());
        state.transition_tick();
        assert!(!state.is_transitioning());
    }

    #[test]
    fn open_only_works_from_home() {
        let mut state = state();
        state.open(AppTarget::Gallery);
        assert_eq!(state.current_screen(), Screen::Lock);
        assert!(!state.is_transitioning());

        let mut state = unlocked_state();
        state.open(AppTarget::Gallery);
        state.settle();
        assert_eq!(state.current_screen(), Screen::Gallery);

        // Not from inside another app either
        state.open(AppTarget::Notes);
        state.settle();
        assert_eq!(state.current_screen(), Screen::Gallery);
    }

    #[test]
    fn conversation_id_travels_with_the_screen() {
        let mut state = unlocked_state();
        state.open(AppTarget::Messages);
        state.settle();

        state.open_conversation(ConversationId::Meenakshi);
        assert!(state.active_conversation().is_none());
        state.settle();
        assert_eq!(
            state.active_conversation(),
            Some(ConversationId::Meenakshi)
        );

        state.go_back();
        state.settle();
        assert_eq!(state.current_screen(), Screen::Messages);
        assert!(state.active_conversation().is_none());
    }

    #[test]
    fn open_conversation_only_works_from_messages() {
        let mut state = unlocked_state();
        state.open_conversation(ConversationId::Unknown);
        state.settle();
        assert_eq!(state.current_screen(), Screen::Home);
    }

    #[test]
    fn go_back_from_apps_returns_home() {
        for target in [
            AppTarget::Messages,
            AppTarget::Gallery,
            AppTarget::Notes,
            AppTarget::Phone,
            AppTarget::Recorder,
        ] {
            let mut state = unlocked_state();
            state.open(target);
            state.settle();
            state.go_back();
            state.settle();
            assert_eq!(state.current_screen(), Screen::Home);
        }
    }

    #[test]
    fn go_back_is_noop_on_home_and_lock() {
        let mut state = state();
        state.go_back();
        assert!(!state.is_transitioning());

        let mut state = unlocked_state();
        state.go_back();
        assert!(!state.is_transitioning());
    }

    #[test]
    fn navigation_is_dropped_mid_fade() {
        let mut state = unlocked_state();
        state.open(AppTarget::Gallery);
        assert!(state.is_transitioning());
        state.go_back();
        state.settle();
        assert_eq!(state.current_screen(), Screen::Gallery);
    }

    #[test]
    fn digits_outside_lock_screen_are_ignored() {
        let mut state = unlocked_state();
        state.press_digit('1');
        assert_eq!(state.pin().entry_len(), 0);
    }

}
