//! Guess the Number
//!
//! A 1-100 guessing game: ten attempts, high/low feedback, and automated
//! players for benchmarking.
//!
//! # Quick Start
//!
//! ```rust
//! use guess_the_number::core::{Feedback, Game};
//!
//! let mut game = Game::with_secret(42).unwrap();
//! assert_eq!(game.guess(60), Feedback::TooHigh);
//! assert_eq!(game.guess(42), Feedback::Won);
//! println!("{}", game.feedback());
//! ```

// Core domain types
pub mod core;

// Automated players
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
