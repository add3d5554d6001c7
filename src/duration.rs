//! Lengths of time on the timeline.

use std::ops::{Add, Sub, Mul};


/// A **duration** is a length of time on the timeline, irrespective of
/// time zone or calendar format, with millisecond precision. It may be
/// negative.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Copy)]
pub struct Duration {
    milliseconds: i64,
}

impl Duration {

    /// Create a new zero-length duration.
    pub fn zero() -> Self {
        Self { milliseconds: 0 }
    }

    /// Create a new duration that’s the given number of seconds long.
    pub fn of(seconds: i64) -> Self {
        Self { milliseconds: seconds * 1000 }
    }

    /// Create a new duration that’s the given number of seconds and
    /// milliseconds long. The milliseconds carry the sign of the seconds.
    pub fn of_ms(seconds: i64, milliseconds: i16) -> Self {
        let milliseconds = if seconds < 0 { -(milliseconds as i64) } else { milliseconds as i64 };
        Self { milliseconds: seconds * 1000 + milliseconds }
    }

    /// Create a new duration from a total number of milliseconds.
    pub fn of_total_ms(milliseconds: i64) -> Self {
        Self { milliseconds }
    }

    /// The total length of this duration, in milliseconds.
    pub fn milliseconds(&self) -> i64 {
        self.milliseconds
    }

    /// Return the seconds and milliseconds portions of the duration as
    /// a 2-element tuple. The milliseconds portion is never negative.
    pub fn lengths(&self) -> (i64, i16) {
        (self.milliseconds.div_euclid(1000), self.milliseconds.rem_euclid(1000) as i16)
    }

    /// The same length of time, going forwards.
    pub fn abs(&self) -> Self {
        Self { milliseconds: self.milliseconds.abs() }
    }
}

impl Add<Duration> for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self { milliseconds: self.milliseconds + rhs.milliseconds }
    }
}

impl Sub<Duration> for Duration {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self { milliseconds: self.milliseconds - rhs.milliseconds }
    }
}

impl Mul<i64> for Duration {
    type Output = Self;

    fn mul(self, amount: i64) -> Self {
        Self { milliseconds: self.milliseconds * amount }
    }
}


#[cfg(test)]
mod test {
    use super::Duration;

    #[test]
    fn lengths_of_negative() {
        assert_eq!(Duration::of_total_ms(-1500).lengths(), (-2, 500));
    }

    #[test]
    fn negative_seconds_and_milliseconds() {
        assert_eq!(Duration::of_ms(-1, 250).milliseconds(), -1250);
    }

    #[test]
    fn abs() {
        assert_eq!(Duration::of_total_ms(-3_600_001).abs(), Duration::of_ms(3600, 1));
    }

    #[test]
    fn multiply() {
        assert_eq!(Duration::of_ms(1, 500) * 3, Duration::of_total_ms(4500));
        assert_eq!(Duration::of(60) * -2, Duration::of(-120));
    }
}
