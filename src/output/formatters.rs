//! Formatting utilities for terminal output

use crate::core::{Feedback, MAX_ATTEMPTS};

/// Short marker for a feedback value
#[must_use]
pub const fn feedback_glyph(feedback: Feedback) -> &'static str {
    match feedback {
        Feedback::Empty => " ",
        Feedback::OutOfRange => "⚠️",
        Feedback::TooHigh => "🔽",
        Feedback::TooLow => "🔼",
        Feedback::Won => "🎯",
        Feedback::Lost { .. } => "💀",
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// One cell per attempt, filled for the attempts still available
#[must_use]
pub fn attempts_bar(attempts_left: u32) -> String {
    create_progress_bar(
        f64::from(attempts_left),
        f64::from(MAX_ATTEMPTS),
        MAX_ATTEMPTS as usize,
    )
}
