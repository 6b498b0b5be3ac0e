//! Lock-screen authentication: PIN entry and lockout

mod lockout;
mod pin;

pub use lockout::{Lockout, LockoutPolicy};
pub use pin::{PinOutcome, PinPad, PIN_LENGTH};
