//! Guess the Number - CLI
//!
//! Play in a TUI or a plain terminal, or watch automated players solve rounds.

use anyhow::Result;
use clap::{Parser, Subcommand};
use guess_the_number::{
    commands::{BenchmarkConfig, SolveConfig, run_benchmark, run_simple, solve_number},
    core::Game,
    interactive::{App, run_tui},
    output::{print_benchmark_result, print_solve_result},
    solver::StrategyType,
};
use log::info;

#[derive(Parser)]
#[command(
    name = "guess_the_number",
    about = "Guess a number between 1 and 100 in 10 attempts",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for reproducible secrets
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Strategy for automated play: bisection (default), random, sweep
    #[arg(short, long, global = true, default_value = "bisection")]
    strategy: String,

    /// Show the secret number (debugging)
    #[arg(long, global = true)]
    reveal: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Let a strategy solve a specific secret
    Solve {
        /// The secret number to solve
        secret: i64,

        /// Show range and attempts for each step
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark a strategy over many rounds
    Benchmark {
        /// Number of rounds to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    let strategy = StrategyType::from_name(&cli.strategy);

    match command {
        Commands::Play => {
            info!("starting TUI");
            run_tui(App::new(Game::from_seed(cli.seed), cli.reveal))
        }
        Commands::Simple => {
            let mut game = Game::from_seed(cli.seed);
            run_simple(&mut game, cli.reveal).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Solve { secret, verbose } => {
            let config = SolveConfig {
                secret,
                seed: cli.seed,
            };
            let result = solve_number(&config, strategy)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Benchmark { count } => {
            println!(
                "Running benchmark on {count} rounds with {}...",
                strategy.name()
            );
            let config = BenchmarkConfig::new(count).with_seed(cli.seed);
            let result = run_benchmark(&config, strategy);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}
