//! PIN entry state machine for the lock screen

use zeroize::Zeroizing;

use super::lockout::{Lockout, LockoutPolicy};

/// Unlock codes are always four digits.
pub const PIN_LENGTH: usize = 4;

/// Result of feeding one digit to the pad.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PinOutcome {
    /// Input was dropped (locked, non-digit, or buffer already full).
    Ignored,
    /// Digit accepted, code not yet complete.
    Pending,
    /// Fourth digit matched the unlock code.
    Accepted,
    /// Fourth digit completed a wrong code.
    Rejected { attempts: u32 },
    /// The wrong code crossed the lockout threshold.
    LockedOut { seconds: u32 },
}

/// The lock screen's PIN pad.
///
/// A wrong code is a normal transition, never an error: the buffer clears,
/// the failed-attempt counter grows, and the policy decides whether the pad
/// locks. While locked every key is dropped until the countdown, driven by
/// [`PinPad::tick`], reaches zero and resets the counter.
pub struct PinPad {
    /// The correct unlock code.
    code: String,
    /// Digits entered so far.
    entry: Zeroizing<String>,
    /// Wrong codes submitted since the last success or lockout expiry.
    failed_attempts: u32,
    /// Active lockout, if the threshold was reached.
    lockout: Option<Lockout>,
    /// Ruleset for when lockouts start.
    policy: LockoutPolicy,
}

impl PinPad {
    /// Create a pad expecting `code`, governed by `policy`.
    pub fn new(code: impl Into<String>, policy: LockoutPolicy) -> Self {
        Self {
            code: code.into(),
            entry: Zeroizing::new(String::with_capacity(PIN_LENGTH)),
            failed_attempts: 0,
            lockout: None,
            policy,
        }
    }

    /// Append one digit; evaluates the code once four digits are in.
    pub fn press_digit(&mut self, digit: char) -> PinOutcome {
        if self.lockout.is_some() || !digit.is_ascii_digit() {
            return PinOutcome::Ignored;
        }
        if self.entry.len() >= PIN_LENGTH {
            return PinOutcome::Ignored;
        }

        self.entry.push(digit);
        if self.entry.len() < PIN_LENGTH {
            return PinOutcome::Pending;
        }

        self.evaluate()
    }

    /// Drop the last digit; no-op while empty or locked.
    pub fn delete_digit(&mut self) {
        if self.lockout.is_none() {
            self.entry.pop();
        }
    }

    /// Advance an active lockout by one second.
    ///
    /// Returns `true` when the countdown just cleared, which also resets the
    /// failed-attempt counter. No-op while unlocked.
    pub fn tick(&mut self) -> bool {
        let Some(lockout) = self.lockout.as_mut() else {
            return false;
        };
        if lockout.tick() {
            self.lockout = None;
            self.failed_attempts = 0;
            return true;
        }
        false
    }

    fn evaluate(&mut self) -> PinOutcome {
        let correct = *self.entry == self.code;
        self.entry.clear();

        if correct {
            self.failed_attempts = 0;
            return PinOutcome::Accepted;
        }

        self.failed_attempts += 1;
        if let Some(lockout) = self.policy.trigger(self.failed_attempts) {
            let seconds = lockout.remaining_secs();
            self.lockout = Some(lockout);
            return PinOutcome::LockedOut { seconds };
        }

        PinOutcome::Rejected {
            attempts: self.failed_attempts,
        }
    }

    /// Digits currently in the buffer.
    pub fn entry_len(&self) -> usize {
        self.entry.len()
    }

    /// Wrong codes since the last success or lockout expiry.
    pub fn failed_attempts(&self) -> u32 {
        self.failed_attempts
    }

    /// Whether the pad is currently locked out.
    pub fn is_locked(&self) -> bool {
        self.lockout.is_some()
    }

    /// The active lockout, while one is running.
    pub fn lockout(&self) -> Option<&Lockout> {
        self.lockout.as_ref()
    }

    /// Attempts left before a lockout, if the policy locks at all.
    pub fn attempts_remaining(&self) -> Option<u32> {
        self.policy.attempts_remaining(self.failed_attempts)
    }

    /// The prop reveals its own code after the third wrong attempt.
    pub fn hint(&self) -> Option<&str> {
        (self.failed_attempts >= 3).then_some(self.code.as_str())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn pad() -> PinPad {
        PinPad::new("0712", LockoutPolicy::standard())
    }

    fn submit(pad: &mut PinPad, code: &str) -> PinOutcome {
        let mut outcome = PinOutcome::Ignored;
        for digit in code.chars() {
            outcome = pad.press_digit(digit);
        }
        outcome
    }

    #[test]
    fn correct_code_unlocks_and_resets() {
        let mut pad = pad();
        submit(&mut pad, "1111");
        assert_eq!(pad.failed_attempts(), 1);

        assert_eq!(submit(&mut pad, "0712"), PinOutcome::Accepted);
        assert_eq!(pad.failed_attempts(), 0);
        assert_eq!(pad.entry_len(), 0);
    }

    #[rstest]
    #[case("1111")]
    #[case("0000")]
    #[case("0713")]
    #[case("2170")]
    fn wrong_code_counts_one_attempt_and_clears(#[case] code: &str) {
        let mut pad = pad();
        assert_eq!(submit(&mut pad, code), PinOutcome::Rejected { attempts: 1 });
        assert_eq!(pad.failed_attempts(), 1);
        assert_eq!(pad.entry_len(), 0);
    }

    #[test]
    fn partial_entry_stays_pending() {
        let mut pad = pad();
        assert_eq!(pad.press_digit('0'), PinOutcome::Pending);
        assert_eq!(pad.press_digit('7'), PinOutcome::Pending);
        assert_eq!(pad.entry_len(), 2);
        assert_eq!(pad.failed_attempts(), 0);
    }

    #[test]
    fn delete_digit_pops_and_is_noop_when_empty() {
        let mut pad = pad();
        pad.delete_digit();
        assert_eq!(pad.entry_len(), 0);

        pad.press_digit('9');
        pad.delete_digit();
        assert_eq!(pad.entry_len(), 0);
    }

    #[test]
    fn non_digits_are_ignored() {
        let mut pad = pad();
        assert_eq!(pad.press_digit('a'), PinOutcome::Ignored);
        assert_eq!(pad.press_digit('#'), PinOutcome::Ignored);
        assert_eq!(pad.entry_len(), 0);
    }

    #[test]
    fn fifth_wrong_code_locks_for_five_minutes() {
        let mut pad = pad();
        for _ in 0..4 {
            submit(&mut pad, "1111");
        }
        assert!(!pad.is_locked());

        assert_eq!(
            submit(&mut pad, "1111"),
            PinOutcome::LockedOut { seconds: 300 }
        );
        assert!(pad.is_locked());
        assert_eq!(pad.lockout().unwrap().remaining_secs(), 300);
    }

    #[test]
    fn input_is_rejected_while_locked() {
        let mut pad = pad();
        for _ in 0..5 {
            submit(&mut pad, "1111");
        }

        assert_eq!(pad.press_digit('0'), PinOutcome::Ignored);
        assert_eq!(pad.entry_len(), 0);
        pad.delete_digit();
        assert!(pad.is_locked());
    }

    #[test]
    fn lockout_expiry_resets_attempts() {
        let mut pad = pad();
        for _ in 0..5 {
            submit(&mut pad, "1111");
        }

        for _ in 0..299 {
            assert!(!pad.tick());
        }
        assert!(pad.tick());
        assert!(!pad.is_locked());
        assert_eq!(pad.failed_attempts(), 0);

        // The pad accepts input again
        assert_eq!(submit(&mut pad, "0712"), PinOutcome::Accepted);
    }

    #[test]
    fn tick_is_noop_while_unlocked() {
        let mut pad = pad();
        assert!(!pad.tick());
        assert_eq!(pad.failed_attempts(), 0);
    }

    #[test]
    fn no_lockout_variant_never_locks() {
        let mut pad = PinPad::new("0712", LockoutPolicy::disabled());
        for i in 1..=20 {
            assert_eq!(
                submit(&mut pad, "9999"),
                PinOutcome::Rejected { attempts: i }
            );
        }
        assert!(!pad.is_locked());
    }

    #[test]
    fn hint_appears_after_third_attempt() {
        let mut pad = pad();
        submit(&mut pad, "1111");
        submit(&mut pad, "2222");
        assert_eq!(pad.hint(), None);
        submit(&mut pad, "3333");
        assert_eq!(pad.hint(), Some("0712"));
    }
}
