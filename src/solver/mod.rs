//! Automated players
//!
//! Range tracking, guess strategies and the round driver that plays a `Game`.

mod bounds;
mod engine;
pub mod strategy;

pub use bounds::Bounds;
pub use engine::{RoundTrace, Solver, Step};
pub use strategy::{BisectionStrategy, RandomStrategy, Strategy, StrategyType, SweepStrategy};
