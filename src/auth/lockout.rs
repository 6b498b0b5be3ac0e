//! Brute-force protection for the lock screen

/// Lockout ruleset applied after repeated failed PIN attempts.
///
/// The prop historically shipped in two variants: one that never locks and
/// one that locks for five minutes after the fifth wrong code. Both are
/// expressible here; [`LockoutPolicy::standard`] is the five-strike variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LockoutPolicy {
    /// Failed attempts that trigger a lockout. `None` disables lockouts.
    max_attempts: Option<u32>,
    /// Lockout length in whole seconds.
    duration_secs: u32,
}

impl Default for LockoutPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

impl LockoutPolicy {
    /// Five failed attempts, five-minute lockout.
    pub fn standard() -> Self {
        Self {
            max_attempts: Some(5),
            duration_secs: 300,
        }
    }

    /// Variant that never locks, regardless of failed attempts.
    pub fn disabled() -> Self {
        Self {
            max_attempts: None,
            duration_secs: 0,
        }
    }

    /// Custom ruleset.
    pub fn custom(max_attempts: u32, duration_secs: u32) -> Self {
        Self {
            max_attempts: Some(max_attempts),
            duration_secs,
        }
    }

    /// Attempts that trigger a lockout, if the policy locks at all.
    pub fn max_attempts(&self) -> Option<u32> {
        self.max_attempts
    }

    /// Lockout to start after `failed_attempts`, if the threshold is reached.
    pub fn trigger(&self, failed_attempts: u32) -> Option<Lockout> {
        let max = self.max_attempts?;
        (failed_attempts >= max).then(|| Lockout::new(self.duration_secs))
    }

    /// Attempts left before a lockout would start.
    pub fn attempts_remaining(&self, failed_attempts: u32) -> Option<u32> {
        self.max_attempts
            .map(|max| max.saturating_sub(failed_attempts))
    }
}

/// An active lockout counting down to zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lockout {
    total_secs: u32,
    remaining_secs: u32,
}

impl Lockout {
    /// Start a lockout of `secs` seconds.
    pub fn new(secs: u32) -> Self {
        Self {
            total_secs: secs,
            remaining_secs: secs,
        }
    }

    /// Seconds left until the lockout clears.
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// Fraction of the lockout already served, in 0.0..=1.0.
    pub fn progress(&self) -> f64 {
        let total = self.total_secs.max(1) as f64;
        1.0 - (self.remaining_secs as f64 / total)
    }

    /// Advance the countdown by one second. Returns `true` once expired.
    pub fn tick(&mut self) -> bool {
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        self.remaining_secs == 0
    }

    /// Format remaining time as MM:SS.
    pub fn remaining_formatted(&self) -> String {
        let mins = self.remaining_secs / 60;
        let secs = self.remaining_secs % 60;
        format!("{:02}:{:02}", mins, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_policy_triggers_at_five() {
        let policy = LockoutPolicy::standard();

        assert!(policy.trigger(0).is_none());
        assert!(policy.trigger(4).is_none());

        let lockout = policy.trigger(5).expect("fifth failure locks");
        assert_eq!(lockout.remaining_secs(), 300);

        // Anything past the threshold locks too
        assert!(policy.trigger(6).is_some());
    }

    #[test]
    fn disabled_policy_never_triggers() {
        let policy = LockoutPolicy::disabled();
        assert!(policy.trigger(5).is_none());
        assert!(policy.trigger(100).is_none());
        assert!(policy.attempts_remaining(50).is_none());
    }

    #[test]
    fn countdown_reaches_zero_exactly_once() {
        let mut lockout = Lockout::new(3);
        assert!(!lockout.tick());
        assert!(!lockout.tick());
        assert!(lockout.tick());
        assert_eq!(lockout.remaining_secs(), 0);

        // Further ticks stay at zero
        assert!(lockout.tick());
    }

    #[test]
    fn progress_runs_from_zero_to_one() {
        let mut lockout = Lockout::new(4);
        assert_eq!(lockout.progress(), 0.0);
        lockout.tick();
        lockout.tick();
        assert_eq!(lockout.progress(), 0.5);
        lockout.tick();
        lockout.tick();
        assert_eq!(lockout.progress(), 1.0);
    }

    #[test]
    fn remaining_formatted_is_mm_ss() {
        assert_eq!(Lockout::new(300).remaining_formatted(), "05:00");
        assert_eq!(Lockout::new(59).remaining_formatted(), "00:59");
        assert_eq!(Lockout::new(0).remaining_formatted(), "00:00");
    }

    #[test]
    fn attempts_remaining_saturates() {
        let policy = LockoutPolicy::standard();
        assert_eq!(policy.attempts_remaining(3), Some(2));
        assert_eq!(policy.attempts_remaining(7), Some(0));
    }
}
