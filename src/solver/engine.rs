//! Automated player driving a `Game` round to completion

use super::bounds::Bounds;
use super::strategy::Strategy;
use crate::core::{Feedback, Game};
use rand::Rng;

/// One submitted guess and what came back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub guess: i64,
    pub feedback: Feedback,
    pub bounds_before: Bounds,
    pub attempts_left: u32,
}

/// Full record of an automated round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundTrace {
    pub secret: i64,
    pub won: bool,
    pub steps: Vec<Step>,
}

impl RoundTrace {
    /// Attempts consumed in the round
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.steps.len()
    }
}

/// Plays rounds with a given strategy
///
/// Coordinates the guessing process; the `Game` enforces the rules.
pub struct Solver<S: Strategy> {
    strategy: S,
}

impl<S: Strategy> Solver<S> {
    pub const fn new(strategy: S) -> Self {
        Self { strategy }
    }

    /// Play the current round of `game` until it is over
    ///
    /// The game is left in its finished state.
    ///
    /// # Examples
    /// ```
    /// use guess_the_number::core::Game;
    /// use guess_the_number::solver::{BisectionStrategy, Solver};
    ///
    /// let mut game = Game::with_secret(37).unwrap();
    /// let trace = Solver::new(BisectionStrategy).play_round(&mut game, &mut rand::rng());
    /// assert!(trace.won);
    /// assert!(trace.attempts() <= 7);
    /// ```
    pub fn play_round<R: Rng + ?Sized>(&self, game: &mut Game, rng: &mut R) -> RoundTrace {
        let mut bounds = Bounds::FULL;
        let mut steps = Vec::new();

        while !game.is_over() && !bounds.is_empty() {
            let guess = self.strategy.next_guess(&bounds, rng);
            let feedback = game.guess(guess);

            steps.push(Step {
                guess,
                feedback,
                bounds_before: bounds,
                attempts_left: game.attempts_left(),
            });
            bounds.narrow(guess, feedback);
        }

        RoundTrace {
            secret: game.secret(),
            won: game.is_win(),
            steps,
        }
    }
}
