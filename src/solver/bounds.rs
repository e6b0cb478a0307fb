//! Range of secrets still consistent with the feedback seen so far

use crate::core::{Feedback, MAX_NUMBER, MIN_NUMBER};
use std::fmt;

/// Inclusive range `[low, high]` that may still hold the secret
///
/// Empty once `low > high`, which only happens if the feedback fed in was
/// contradictory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    low: i64,
    high: i64,
}

impl Bounds {
    /// The full playable range
    pub const FULL: Self = Self {
        low: MIN_NUMBER,
        high: MAX_NUMBER,
    };

    #[must_use]
    pub const fn new(low: i64, high: i64) -> Self {
        Self { low, high }
    }

    #[inline]
    #[must_use]
    pub const fn low(&self) -> i64 {
        self.low
    }

    #[inline]
    #[must_use]
    pub const fn high(&self) -> i64 {
        self.high
    }

    /// Number of values still possible
    #[inline]
    #[must_use]
    pub const fn len(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            self.high.abs_diff(self.low) + 1
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.low > self.high
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, value: i64) -> bool {
        value >= self.low && value <= self.high
    }

    /// Middle value, rounding down
    #[inline]
    #[must_use]
    pub const fn midpoint(&self) -> i64 {
        self.low + (self.high - self.low) / 2
    }

    /// Shrink the range using the feedback for `guess`
    ///
    /// Feedback that carries no direction leaves the range unchanged.
    ///
    /// # Examples
    /// ```
    /// use guess_the_number::core::Feedback;
    /// use guess_the_number::solver::Bounds;
    ///
    /// let mut bounds = Bounds::FULL;
    /// bounds.narrow(60, Feedback::TooHigh);
    /// bounds.narrow(20, Feedback::TooLow);
    /// assert_eq!((bounds.low(), bounds.high()), (21, 59));
    /// ```
    pub fn narrow(&mut self, guess: i64, feedback: Feedback) {
        match feedback {
            Feedback::TooHigh => self.high = self.high.min(guess - 1),
            Feedback::TooLow => self.low = self.low.max(guess + 1),
            Feedback::Won => {
                self.low = guess;
                self.high = guess;
            }
            Feedback::Empty | Feedback::OutOfRange | Feedback::Lost { .. } => {}
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::FULL
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "(none)")
        } else if self.low == self.high {
            write!(f, "{}", self.low)
        } else {
            write!(f, "{}-{}", self.low, self.high)
        }
    }
}
