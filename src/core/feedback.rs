//! Feedback shown to the player after each submission

use super::game::MAX_NUMBER;
use std::fmt;

/// Outcome of the most recent submission
///
/// `Display` renders the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Feedback {
    /// Nothing submitted yet in this round
    #[default]
    Empty,
    /// Guess was absent or outside the playable range; no attempt consumed
    OutOfRange,
    /// Guess was above the secret
    TooHigh,
    /// Guess was below the secret
    TooLow,
    /// Guess matched the secret
    Won,
    /// Attempts ran out; carries the secret to reveal
    Lost { secret: i64 },
}

impl Feedback {
    /// True for the two feedbacks that close a round
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost { .. })
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::OutOfRange => write!(f, "Enter a number between 1 and {MAX_NUMBER}."),
            Self::TooHigh => write!(f, "Too high! Try again."),
            Self::TooLow => write!(f, "Too low! Try again."),
            Self::Won => write!(f, "Congratulations! You guessed the correct number!"),
            Self::Lost { secret } => write!(f, "Game over! The correct number was {secret}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_renders_nothing() {
        assert_eq!(Feedback::Empty.to_string(), "");
        assert_eq!(Feedback::default(), Feedback::Empty);
    }

    #[test]
    fn out_of_range_prompt_names_bounds() {
        assert_eq!(
            Feedback::OutOfRange.to_string(),
            "Enter a number between 1 and 100."
        );
    }

    #[test]
    fn lost_reveals_secret() {
        let text = Feedback::Lost { secret: 7 }.to_string();
        assert!(text.contains('7'));
        assert!(text.starts_with("Game over!"));
    }

    #[test]
    fn terminal_classification() {
        assert!(Feedback::Won.is_terminal());
        assert!(Feedback::Lost { secret: 1 }.is_terminal());
        assert!(!Feedback::TooHigh.is_terminal());
        assert!(!Feedback::OutOfRange.is_terminal());
        assert!(!Feedback::Empty.is_terminal());
    }
}
