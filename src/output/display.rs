//! Display functions for command results

use super::formatters::{attempts_bar, create_progress_bar, feedback_glyph};
use crate::commands::{BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a number
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let trace = &result.trace;

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} with {}",
        trace.secret.to_string().bright_yellow().bold(),
        result.strategy
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in trace.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {:>3} {} {}",
            i + 1,
            step.guess,
            feedback_glyph(step.feedback),
            step.feedback
        );

        if verbose {
            println!(
                "  Range:        {} ({} possible)",
                step.bounds_before,
                step.bounds_before.len()
            );
            println!(
                "  Attempts left: {} {}",
                attempts_bar(step.attempts_left),
                step.attempts_left
            );
        }
    }

    println!();
    if trace.won {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", trace.attempts())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", trace.attempts())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Strategy:         {}", result.strategy);
    println!("   Rounds played:    {}", result.total_rounds);
    println!(
        "   Won:              {} {}",
        result.wins,
        format!("({:.1}%)", result.win_rate() * 100.0).green()
    );
    if result.losses > 0 {
        println!(
            "   Lost:             {} {}",
            result.losses,
            format!("({:.1}%)", (1.0 - result.win_rate()) * 100.0).red()
        );
    }
    println!(
        "   Average attempts: {}",
        format!("{:.2}", result.average_attempts)
            .bright_yellow()
            .bold()
    );
    if let (Some(min), Some(max)) = (result.min_attempts, result.max_attempts) {
        println!("   Best case:        {}", format!("{min}").green());
        println!("   Worst case:       {}", format!("{max}").yellow());
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Rounds/second:    {:.1}", result.rounds_per_second);

    if result.total_rounds == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution (won rounds):".bright_cyan().bold());
    for (attempts, &count) in result.distribution.iter().enumerate().skip(1) {
        if count == 0 {
            continue;
        }
        let pct = (count as f64 / result.total_rounds as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {attempts:2}: {} {count:5} ({pct:5.1}%)", bar.green());
    }
}
