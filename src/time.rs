use std::ops::{Add, AddAssign, Sub};

/// Logical timestamp in seconds. Not tied to a wall clock.
///
/// Arithmetic saturates at `u64::MAX` and at zero instead of wrapping, so a
/// timeline pushed past the end stays pinned at the last representable second.
#[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, PartialOrd)]
pub struct Time(pub u64);

impl Time {
    pub const MAX: Time = Time(u64::MAX);

    pub const fn from_minutes(minutes: u64) -> Time {
        Time(minutes.saturating_mul(60))
    }

    /// `None` when `minutes` does not fit in a `Time`.
    pub const fn checked_from_minutes(minutes: u64) -> Option<Time> {
        match minutes.checked_mul(60) {
            Some(secs) => Some(Time(secs)),
            None => None,
        }
    }
}

impl std::fmt::Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let days = self.0 / 86_400;
        let remaining = self.0 % 86_400;
        let hours = remaining / 3600;
        let mins = (remaining % 3600) / 60;
        let secs = remaining % 60;
        if secs == 0 {
            write!(f, "DAY{} {:02}:{:02}", days + 1, hours, mins)
        } else {
            write!(f, "DAY{} {:02}:{:02}:{:02}", days + 1, hours, mins, secs)
        }
    }
}

impl Add<u64> for Time {
    type Output = Self;

    fn add(self, rhs: u64) -> Self::Output {
        Time(self.0.saturating_add(rhs))
    }
}

impl Add<Time> for Time {
    type Output = Self;

    fn add(self, rhs: Time) -> Self::Output {
        Time(self.0.saturating_add(rhs.0))
    }
}

impl Sub<Time> for Time {
    type Output = Self;

    fn sub(self, rhs: Time) -> Self::Output {
        Time(self.0.saturating_sub(rhs.0))
    }
}

impl AddAssign<u64> for Time {
    fn add_assign(&mut self, rhs: u64) {
        self.0 = self.0.saturating_add(rhs);
    }
}

impl AddAssign<Time> for Time {
    fn add_assign(&mut self, rhs: Time) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}
