//! Core domain types for Guess the Number
//!
//! Round state, feedback and secret drawing. Everything here is synchronous
//! and free of terminal I/O.

mod feedback;
mod game;
mod input;
mod secret;

pub use feedback::Feedback;
pub use game::{Game, MAX_ATTEMPTS, MAX_NUMBER, MIN_NUMBER, Phase};
pub use input::parse_guess;
pub use secret::{SecretError, draw_secret, validate_secret};
