//! Round state for Guess the Number
//!
//! A `Game` owns the secret, the attempts counter, the staged guess and the
//! feedback from the last submission. The caller stages a candidate with
//! [`Game::stage_guess`], submits it with [`Game::submit_guess`] and reads the
//! updated state back for rendering.

use super::feedback::Feedback;
use super::secret::{SecretError, draw_secret, validate_secret};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::cmp::Ordering;

/// Smallest playable number
pub const MIN_NUMBER: i64 = 1;

/// Largest playable number
pub const MAX_NUMBER: i64 = 100;

/// Attempts granted at the start of each round
pub const MAX_ATTEMPTS: u32 = 10;

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    Over { won: bool },
}

/// A single-player round of Guess the Number
#[derive(Debug, Clone)]
pub struct Game {
    secret: i64,
    attempts_left: u32,
    last_guess: Option<i64>,
    feedback: Feedback,
    is_over: bool,
    is_win: bool,
    rng: StdRng,
}

impl Game {
    /// Start a round seeded from the thread RNG
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_rng(&mut rand::rng()))
    }

    /// Start a round with a deterministic secret sequence
    ///
    /// # Examples
    /// ```
    /// use guess_the_number::core::Game;
    ///
    /// let a = Game::seeded(3);
    /// let b = Game::seeded(3);
    /// assert_eq!(a.secret(), b.secret());
    /// ```
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    /// Seeded when `seed` is given, otherwise from the thread RNG
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::seeded)
    }

    /// Start a round with a fixed first secret
    ///
    /// Later rounds (after [`Game::reset`]) draw randomly as usual.
    ///
    /// # Errors
    /// Returns `SecretError::OutOfRange` if `secret` is outside `1..=100`.
    ///
    /// # Examples
    /// ```
    /// use guess_the_number::core::{Feedback, Game};
    ///
    /// let mut game = Game::with_secret(50).unwrap();
    /// assert_eq!(game.guess(10), Feedback::TooLow);
    /// assert_eq!(game.guess(90), Feedback::TooHigh);
    /// assert_eq!(game.guess(50), Feedback::Won);
    /// assert_eq!(game.attempts_left(), 7);
    ///
    /// assert!(Game::with_secret(0).is_err());
    /// ```
    pub fn with_secret(secret: i64) -> Result<Self, SecretError> {
        Self::new().fix_secret(secret)
    }

    /// Fixed first secret, later rounds drawn from `seed`
    ///
    /// Rounds after the first match those of [`Game::seeded`] with the same seed.
    ///
    /// # Errors
    /// Returns `SecretError::OutOfRange` if `secret` is outside `1..=100`.
    pub fn with_secret_seeded(secret: i64, seed: u64) -> Result<Self, SecretError> {
        Self::seeded(seed).fix_secret(secret)
    }

    fn fix_secret(mut self, secret: i64) -> Result<Self, SecretError> {
        self.secret = validate_secret(secret)?;
        Ok(self)
    }

    fn from_rng(mut rng: StdRng) -> Self {
        let secret = draw_secret(&mut rng);
        Self {
            secret,
            attempts_left: MAX_ATTEMPTS,
            last_guess: None,
            feedback: Feedback::Empty,
            is_over: false,
            is_win: false,
            rng,
        }
    }

    /// True iff `candidate` is present and inside `1..=100`
    #[inline]
    #[must_use]
    pub const fn is_valid_guess(candidate: Option<i64>) -> bool {
        match candidate {
            Some(value) => value >= MIN_NUMBER && value <= MAX_NUMBER,
            None => false,
        }
    }

    /// Stage the value the next [`Game::submit_guess`] will evaluate
    pub const fn stage_guess(&mut self, candidate: Option<i64>) {
        self.last_guess = candidate;
    }

    /// Evaluate the staged guess
    ///
    /// An invalid or missing guess only updates the feedback. A valid guess
    /// consumes one attempt before it is compared, so the last attempt can
    /// still win. Once the round is over this does nothing until
    /// [`Game::reset`].
    pub fn submit_guess(&mut self) -> Feedback {
        if self.is_over {
            return self.feedback;
        }

        let Some(guess) = self.last_guess.filter(|&g| Self::is_valid_guess(Some(g))) else {
            debug!("rejected guess {:?}", self.last_guess);
            self.feedback = Feedback::OutOfRange;
            return self.feedback;
        };

        self.attempts_left -= 1;
        self.evaluate(guess);
        self.feedback
    }

    /// Stage `value` and submit it
    pub fn guess(&mut self, value: i64) -> Feedback {
        self.stage_guess(Some(value));
        self.submit_guess()
    }

    fn evaluate(&mut self, guess: i64) {
        if guess == self.secret {
            self.is_win = true;
            self.end();
        } else if self.attempts_left == 0 {
            self.is_win = false;
            self.end();
        } else {
            self.feedback = match guess.cmp(&self.secret) {
                Ordering::Greater => Feedback::TooHigh,
                _ => Feedback::TooLow,
            };
            debug!(
                "guess {guess}: {:?}, {} left",
                self.feedback, self.attempts_left
            );
        }
    }

    fn end(&mut self) {
        self.is_over = true;
        self.feedback = if self.is_win {
            Feedback::Won
        } else {
            Feedback::Lost {
                secret: self.secret,
            }
        };
        debug!(
            "round over (won: {}, attempts left: {})",
            self.is_win, self.attempts_left
        );
    }

    /// Start a fresh round with a new secret
    pub fn reset(&mut self) {
        self.secret = draw_secret(&mut self.rng);
        self.attempts_left = MAX_ATTEMPTS;
        self.last_guess = None;
        self.feedback = Feedback::Empty;
        self.is_over = false;
        self.is_win = false;
        debug!("round reset");
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> i64 {
        self.secret
    }

    #[inline]
    #[must_use]
    pub const fn attempts_left(&self) -> u32 {
        self.attempts_left
    }

    /// Attempts consumed so far this round
    #[inline]
    #[must_use]
    pub const fn attempts_used(&self) -> u32 {
        MAX_ATTEMPTS - self.attempts_left
    }

    /// The staged guess, retained after submission
    #[inline]
    #[must_use]
    pub const fn last_guess(&self) -> Option<i64> {
        self.last_guess
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.is_over
    }

    /// Only meaningful once [`Game::is_over`] is true
    #[inline]
    #[must_use]
    pub const fn is_win(&self) -> bool {
        self.is_win
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        if self.is_over {
            Phase::Over { won: self.is_win }
        } else {
            Phase::InProgress
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn game_with(secret: i64) -> Game {
        Game::with_secret(secret).unwrap()
    }

    #[test]
    fn new_game_initial_state() {
        let game = Game::seeded(1);
        assert!((1..=100).contains(&game.secret()));
        assert_eq!(game.attempts_left(), 10);
        assert_eq!(game.last_guess(), None);
        assert_eq!(game.feedback(), Feedback::Empty);
        assert!(!game.is_over());
        assert!(!game.is_win());
        assert_eq!(game.phase(), Phase::InProgress);
    }

    #[test]
    fn is_valid_guess_bounds() {
        assert!(Game::is_valid_guess(Some(1)));
        assert!(Game::is_valid_guess(Some(50)));
        assert!(Game::is_valid_guess(Some(100)));
        assert!(!Game::is_valid_guess(Some(0)));
        assert!(!Game::is_valid_guess(Some(101)));
        assert!(!Game::is_valid_guess(Some(-1)));
        assert!(!Game::is_valid_guess(None));
    }

    #[test]
    fn scenario_low_high_win() {
        let mut game = game_with(50);
        let feedbacks: Vec<Feedback> = [10, 90, 50].iter().map(|&g| game.guess(g)).collect();

        assert_eq!(
            feedbacks,
            vec![Feedback::TooLow, Feedback::TooHigh, Feedback::Won]
        );
        assert_eq!(game.attempts_left(), 7);
        assert!(game.is_over());
        assert!(game.is_win());
        assert_eq!(game.phase(), Phase::Over { won: true });
    }

    #[test]
    fn scenario_ten_misses_loses() {
        let mut game = game_with(7);
        for _ in 0..9 {
            assert_eq!(game.guess(1), Feedback::TooLow);
            assert!(!game.is_over());
        }
        let last = game.guess(1);

        assert_eq!(last, Feedback::Lost { secret: 7 });
        assert!(last.to_string().contains('7'));
        assert!(game.is_over());
        assert!(!game.is_win());
        assert_eq!(game.attempts_left(), 0);
    }

    #[test]
    fn scenario_out_of_range_keeps_attempts() {
        let mut game = game_with(30);
        game.guess(40);
        let before = game.attempts_left();

        assert_eq!(game.guess(150), Feedback::OutOfRange);
        assert_eq!(game.attempts_left(), before);
        assert!(!game.is_over());
    }

    #[test]
    fn missing_guess_is_rejected() {
        let mut game = game_with(30);
        game.stage_guess(None);
        assert_eq!(game.submit_guess(), Feedback::OutOfRange);
        assert_eq!(game.attempts_left(), 10);
    }

    #[test]
    fn win_on_last_attempt() {
        let mut game = game_with(100);
        for _ in 0..9 {
            game.guess(1);
        }
        assert_eq!(game.attempts_left(), 1);
        assert_eq!(game.guess(100), Feedback::Won);
        assert!(game.is_win());
        assert_eq!(game.attempts_left(), 0);
    }

    #[test]
    fn submit_after_over_changes_nothing() {
        let mut game = game_with(20);
        game.guess(20);
        let secret = game.secret();

        assert_eq!(game.guess(5), Feedback::Won);
        assert_eq!(game.attempts_left(), 9);
        assert_eq!(game.secret(), secret);
    }

    #[test]
    fn staged_guess_is_retained() {
        let mut game = game_with(20);
        game.guess(33);
        assert_eq!(game.last_guess(), Some(33));
    }

    #[test]
    fn reset_restores_fresh_round() {
        let mut game = game_with(20);
        game.guess(20);
        game.reset();

        assert_eq!(game.attempts_left(), 10);
        assert_eq!(game.last_guess(), None);
        assert_eq!(game.feedback(), Feedback::Empty);
        assert!(!game.is_over());
        assert!(!game.is_win());
        assert!((1..=100).contains(&game.secret()));
    }

    #[test]
    fn seeded_games_replay_identically() {
        let mut a = Game::seeded(2024);
        let mut b = Game::seeded(2024);
        for _ in 0..5 {
            assert_eq!(a.secret(), b.secret());
            a.reset();
            b.reset();
        }
    }

    #[test]
    fn with_secret_rejects_out_of_range() {
        assert_eq!(
            Game::with_secret(101).unwrap_err(),
            SecretError::OutOfRange(101)
        );
    }

    #[test]
    fn fixed_secret_with_seed_replays_later_rounds() {
        let mut a = Game::with_secret_seeded(12, 77).unwrap();
        let mut b = Game::with_secret_seeded(12, 77).unwrap();
        let mut plain = Game::seeded(77);
        assert_eq!(a.secret(), 12);

        for _ in 0..5 {
            a.reset();
            b.reset();
            plain.reset();
            assert_eq!(a.secret(), b.secret());
            assert_eq!(a.secret(), plain.secret());
        }
    }

    #[test]
    fn fixed_secret_with_seed_rejects_out_of_range() {
        assert_eq!(
            Game::with_secret_seeded(0, 77).unwrap_err(),
            SecretError::OutOfRange(0)
        );
    }

    proptest! {
        #[test]
        fn invalid_guess_leaves_round_untouched(
            guess in prop_oneof![i64::MIN..1_i64, 101_i64..i64::MAX],
            secret in 1_i64..=100,
        ) {
            let mut game = game_with(secret);
            prop_assert_eq!(game.guess(guess), Feedback::OutOfRange);
            prop_assert_eq!(game.attempts_left(), MAX_ATTEMPTS);
            prop_assert!(!game.is_over());
        }

        #[test]
        fn correct_guess_always_wins(secret in 1_i64..=100, misses in 0_u32..10) {
            let wrong = if secret == 1 { 2 } else { 1 };
            let mut game = game_with(secret);
            for _ in 0..misses {
                game.guess(wrong);
            }
            prop_assert_eq!(game.guess(secret), Feedback::Won);
            prop_assert!(game.is_over());
            prop_assert!(game.is_win());
        }

        #[test]
        fn wrong_guess_hints_direction(secret in 1_i64..=100, guess in 1_i64..=100) {
            prop_assume!(guess != secret);
            let mut game = game_with(secret);
            let feedback = game.guess(guess);
            prop_assert!(!game.is_over());
            if guess > secret {
                prop_assert_eq!(feedback, Feedback::TooHigh);
            } else {
                prop_assert_eq!(feedback, Feedback::TooLow);
            }
        }

        #[test]
        fn exhausting_attempts_loses(secret in 1_i64..=100, guess in 1_i64..=100) {
            prop_assume!(guess != secret);
            let mut game = game_with(secret);
            for _ in 0..MAX_ATTEMPTS {
                game.guess(guess);
            }
            prop_assert!(game.is_over());
            prop_assert!(!game.is_win());
            prop_assert_eq!(game.attempts_left(), 0);
            prop_assert_eq!(game.feedback(), Feedback::Lost { secret });
        }

        #[test]
        fn reset_always_yields_fresh_round(
            seed in any::<u64>(),
            guesses in prop::collection::vec(-10_i64..120, 0..15),
        ) {
            let mut game = Game::seeded(seed);
            for g in guesses {
                game.guess(g);
            }
            game.reset();
            prop_assert_eq!(game.attempts_left(), MAX_ATTEMPTS);
            prop_assert!(!game.is_over());
            prop_assert_eq!(game.feedback().to_string(), "");
            prop_assert!((1..=100).contains(&game.secret()));
        }
    }
}
