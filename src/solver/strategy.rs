//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::bounds::Bounds;
use rand::Rng;

/// A strategy for picking the next guess from the range still possible
pub trait Strategy {
    /// Pick a guess inside `bounds`
    ///
    /// `bounds` is never empty when called by [`Solver`](super::Solver).
    fn next_guess<R: Rng + ?Sized>(&self, bounds: &Bounds, rng: &mut R) -> i64;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Halve the range every turn (default, always wins)
    Bisection(BisectionStrategy),
    /// Uniform pick inside the range
    Random(RandomStrategy),
    /// Walk upwards from the lowest possible value
    Sweep(SweepStrategy),
}

impl Strategy for StrategyType {
    fn next_guess<R: Rng + ?Sized>(&self, bounds: &Bounds, rng: &mut R) -> i64 {
        match self {
            Self::Bisection(s) => s.next_guess(bounds, rng),
            Self::Random(s) => s.next_guess(bounds, rng),
            Self::Sweep(s) => s.next_guess(bounds, rng),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "bisection", "binary", "random", "sweep", "linear"
    /// Defaults to bisection if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            "sweep" | "linear" => Self::Sweep(SweepStrategy),
            _ => Self::Bisection(BisectionStrategy),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bisection(_) => "bisection",
            Self::Random(_) => "random",
            Self::Sweep(_) => "sweep",
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Bisection(BisectionStrategy)
    }
}

/// Binary search over the remaining range
///
/// Needs at most 7 attempts for 100 values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BisectionStrategy;

impl Strategy for BisectionStrategy {
    fn next_guess<R: Rng + ?Sized>(&self, bounds: &Bounds, _rng: &mut R) -> i64 {
        bounds.midpoint()
    }
}

/// Random strategy
///
/// Uniformly picks any value still possible. Wins most rounds but not all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn next_guess<R: Rng + ?Sized>(&self, bounds: &Bounds, rng: &mut R) -> i64 {
        rng.random_range(bounds.low()..=bounds.high())
    }
}

/// Guess the lowest possible value each turn
///
/// Only wins when the secret is among the first ten values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SweepStrategy;

impl Strategy for SweepStrategy {
    fn next_guess<R: Rng + ?Sized>(&self, bounds: &Bounds, _rng: &mut R) -> i64 {
        bounds.low()
    }
}
