//! Benchmark command
//!
//! Plays many rounds with one strategy and collects win/attempt statistics.

use crate::core::{Game, MAX_ATTEMPTS};
use crate::solver::{Solver, StrategyType};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    pub rounds: usize,
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(rounds: usize) -> Self {
        Self {
            rounds,
            seed: None,
            show_progress: true,
        }
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub const fn quiet(mut self) -> Self {
        self.show_progress = false;
        self
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub strategy: &'static str,
    pub total_rounds: usize,
    pub wins: usize,
    pub losses: usize,
    /// Mean attempts over won rounds
    pub average_attempts: f64,
    pub min_attempts: Option<usize>,
    pub max_attempts: Option<usize>,
    /// Won rounds indexed by attempts used
    pub distribution: [usize; MAX_ATTEMPTS as usize + 1],
    pub duration: Duration,
    pub rounds_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_rounds == 0 {
            0.0
        } else {
            self.wins as f64 / self.total_rounds as f64
        }
    }
}

/// Run `config.rounds` rounds against secrets drawn from one game
///
/// With a seed both the secrets and any random strategy choices repeat
/// exactly across runs.
#[must_use]
pub fn run_benchmark(config: &BenchmarkConfig, strategy: StrategyType) -> BenchmarkResult {
    let solver = Solver::new(strategy);
    let mut game = Game::from_seed(config.seed);
    // Strategy draws use their own stream so secrets match `Game::seeded`
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let pb = if config.show_progress {
        ProgressBar::new(config.rounds as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    info!(
        "benchmarking {} over {} rounds",
        strategy.name(),
        config.rounds
    );

    let start = Instant::now();
    let mut wins = 0;
    let mut won_attempts = 0;
    let mut min_attempts: Option<usize> = None;
    let mut max_attempts: Option<usize> = None;
    let mut distribution = [0; MAX_ATTEMPTS as usize + 1];

    for round in 0..config.rounds {
        if round > 0 {
            game.reset();
        }
        let trace = solver.play_round(&mut game, &mut rng);

        if trace.won {
            let attempts = trace.attempts();
            wins += 1;
            won_attempts += attempts;
            distribution[attempts] += 1;
            min_attempts = Some(min_attempts.map_or(attempts, |m| m.min(attempts)));
            max_attempts = Some(max_attempts.map_or(attempts, |m| m.max(attempts)));
        }

        if round % 100 == 0 {
            pb.set_message(format!("Wins: {wins}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_rounds = config.rounds;
    let secs = duration.as_secs_f64();

    BenchmarkResult {
        strategy: strategy.name(),
        total_rounds,
        wins,
        losses: total_rounds - wins,
        average_attempts: if wins == 0 {
            0.0
        } else {
            won_attempts as f64 / wins as f64
        },
        min_attempts,
        max_attempts,
        distribution,
        duration,
        rounds_per_second: if secs > 0.0 {
            total_rounds as f64 / secs
        } else {
            0.0
        },
    }
}
