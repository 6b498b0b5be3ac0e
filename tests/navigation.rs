//! End-to-end scenarios for the phone's navigation and lock state machine

use akriti_phone::app::{AppState, PropConfig, Screen};
use akriti_phone::content::{AppTarget, ConversationId};
use rstest::rstest;

fn phone() -> AppState {
    AppState::new(&PropConfig::default())
}

fn enter(state: &mut AppState, code: &str) {
    for digit in code.chars() {
        state.press_digit(digit);
    }
    state.settle();
}

fn unlocked_phone() -> AppState {
    let mut state = phone();
    enter(&mut state, "0712");
    state
}

#[test]
fn unlocks_with_the_correct_code() {
    let mut state = phone();
    enter(&mut state, "0712");

    assert_eq!(state.current_screen(), Screen::Home);
    assert_eq!(state.pin().failed_attempts(), 0);
}

#[rstest]
#[case("1111")]
#[case("9999")]
#[case("0721")]
fn wrong_code_adds_one_attempt_and_clears_the_buffer(#[case] code: &str) {
    let mut state = phone();
    enter(&mut state, code);

    assert_eq!(state.current_screen(), Screen::Lock);
    assert_eq!(state.pin().failed_attempts(), 1);
    assert_eq!(state.pin().entry_len(), 0);
}

#[test]
fn five_wrong_codes_lock_the_phone_for_five_minutes() {
    let mut state = phone();
    for _ in 0..5 {
        enter(&mut state, "1111");
    }

    assert!(state.pin().is_locked());
    assert_eq!(state.pin().lockout().unwrap().remaining_secs(), 300);

    // PIN entry is rejected while locked
    state.press_digit('0');
    assert_eq!(state.pin().entry_len(), 0);
}

#[test]
fn lockout_counts_down_and_resets_attempts() {
    let mut state = phone();
    for _ in 0..5 {
        enter(&mut state, "1111");
    }

    for expected in (0..300).rev() {
        state.lockout_tick();
        let remaining = state
            .pin()
            .lockout()
            .map(|l| l.remaining_secs())
            .unwrap_or(0);
        assert_eq!(remaining, expected);
    }

    assert!(!state.pin().is_locked());
    assert_eq!(state.pin().failed_attempts(), 0);

    // The phone unlocks normally afterwards
    enter(&mut state, "0712");
    assert_eq!(state.current_screen(), Screen::Home);
}

#[test]
fn no_lockout_variant_takes_endless_wrong_codes() {
    let mut config = PropConfig::default();
    config.lockout.enabled = false;

    let mut state = AppState::new(&config);
    for _ in 0..25 {
        enter(&mut state, "1111");
    }

    assert!(!state.pin().is_locked());
    assert_eq!(state.pin().failed_attempts(), 25);

    enter(&mut state, "0712");
    assert_eq!(state.current_screen(), Screen::Home);
}

#[test]
fn messages_conversation_and_back_again() {
    let mut state = unlocked_phone();

    state.open(AppTarget::Messages);
    state.settle();
    assert_eq!(state.current_screen(), Screen::Messages);

    state.open_conversation(ConversationId::Meenakshi);
    state.settle();
    assert_eq!(
        state.current_screen(),
        Screen::Conversation(ConversationId::Meenakshi)
    );
    assert_eq!(
        state.active_conversation(),
        Some(ConversationId::Meenakshi)
    );

    state.go_back();
    state.settle();
    assert_eq!(state.current_screen(), Screen::Messages);
    assert!(state.active_conversation().is_none());

    state.go_back();
    state.settle();
    assert_eq!(state.current_screen(), Screen::Home);
}

#[rstest]
#[case(AppTarget::Gallery, Screen::Gallery)]
#[case(AppTarget::Notes, Screen::Notes)]
#[case(AppTarget::Phone, Screen::Phone)]
#[case(AppTarget::Recorder, Screen::Recorder)]
fn every_app_opens_from_home_and_returns_home(
    #[case] target: AppTarget,
    #[case] screen: Screen,
) {
    let mut state = unlocked_phone();

    state.open(target);
    state.settle();
    assert_eq!(state.current_screen(), screen);

    state.go_back();
    state.settle();
    assert_eq!(state.current_screen(), Screen::Home);
}

#[test]
fn delete_digit_edits_the_entry() {
    // A deleted digit does not count toward the submitted code
    let mut state = phone();
    state.press_digit('0');
    state.press_digit('7');
    state.press_digit('1');
    state.delete_digit();
    state.press_digit('9');
    state.press_digit('9');
    state.settle();
    assert_eq!(state.current_screen(), Screen::Lock);
    assert_eq!(state.pin().failed_attempts(), 1);

    // Correcting a typo still unlocks
    let mut state = phone();
    state.press_digit('0');
    state.press_digit('9');
    state.delete_digit();
    enter(&mut state, "712");
    assert_eq!(state.current_screen(), Screen::Home);
}

#[test]
fn custom_code_from_config_is_honored() {
    let config = PropConfig {
        pin_code: "4321".to_string(),
        ..PropConfig::default()
    };

    let mut state = AppState::new(&config);
    enter(&mut state, "0712");
    assert_eq!(state.current_screen(), Screen::Lock);

    enter(&mut state, "4321");
    assert_eq!(state.current_screen(), Screen::Home);
}
