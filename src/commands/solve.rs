//! Solve command
//!
//! Plays one round against a known secret and returns the guess path.

use crate::core::{Game, SecretError};
use crate::solver::{RoundTrace, Solver, StrategyType};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for solving a number
pub struct SolveConfig {
    pub secret: i64,
    pub seed: Option<u64>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: i64) -> Self {
        Self { secret, seed: None }
    }
}

/// Result of solving a number
pub struct SolveResult {
    pub strategy: &'static str,
    pub trace: RoundTrace,
}

/// Solve `config.secret` with the given strategy
///
/// # Errors
///
/// Returns `SecretError::OutOfRange` if the secret is outside `1..=100`.
pub fn solve_number(
    config: &SolveConfig,
    strategy: StrategyType,
) -> Result<SolveResult, SecretError> {
    let (mut game, mut rng) = match config.seed {
        Some(seed) => (
            Game::with_secret_seeded(config.secret, seed)?,
            StdRng::seed_from_u64(seed),
        ),
        None => (
            Game::with_secret(config.secret)?,
            StdRng::from_rng(&mut rand::rng()),
        ),
    };

    let trace = Solver::new(strategy).play_round(&mut game, &mut rng);
    info!(
        "solved {} with {}: won={} in {} attempts",
        trace.secret,
        strategy.name(),
        trace.won,
        trace.attempts()
    );

    Ok(SolveResult {
        strategy: strategy.name(),
        trace,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;

    #[test]
    fn solve_with_bisection() {
        let result = solve_number(&SolveConfig::new(50), StrategyType::default()).unwrap();

        assert_eq!(result.strategy, "bisection");
        assert!(result.trace.won);
        assert_eq!(result.trace.attempts(), 1);
        assert_eq!(result.trace.steps[0].feedback, Feedback::Won);
    }

    #[test]
    fn solve_reports_loss() {
        let result = solve_number(&SolveConfig::new(77), StrategyType::from_name("sweep")).unwrap();

        assert!(!result.trace.won);
        assert_eq!(result.trace.attempts(), 10);
        let guesses: Vec<i64> = result.trace.steps.iter().map(|s| s.guess).collect();
        assert_eq!(guesses, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn solve_rejects_invalid_secret() {
        let err = solve_number(&SolveConfig::new(0), StrategyType::default())
            .err()
            .unwrap();
        assert_eq!(err, SecretError::OutOfRange(0));
    }

    #[test]
    fn seeded_random_solve_repeats() {
        let config = SolveConfig {
            secret: 63,
            seed: Some(17),
        };
        let a = solve_number(&config, StrategyType::from_name("random")).unwrap();
        let b = solve_number(&config, StrategyType::from_name("random")).unwrap();
        assert_eq!(a.trace, b.trace);
    }
}
