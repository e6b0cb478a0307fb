//! Secret number drawing and validation

use super::game::{MAX_NUMBER, MIN_NUMBER};
use log::trace;
use rand::Rng;
use std::fmt;

/// Error type for a secret that cannot be played
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretError {
    OutOfRange(i64),
}

impl fmt::Display for SecretError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange(value) => {
                write!(
                    f,
                    "Secret must be between {MIN_NUMBER} and {MAX_NUMBER}, got {value}"
                )
            }
        }
    }
}

impl std::error::Error for SecretError {}

/// Draw a secret uniformly from the playable range
pub fn draw_secret<R: Rng + ?Sized>(rng: &mut R) -> i64 {
    let secret = rng.random_range(MIN_NUMBER..=MAX_NUMBER);
    trace!("drew secret {secret}");
    secret
}

/// Check that a caller-supplied secret lies in the playable range
///
/// # Errors
/// Returns `SecretError::OutOfRange` if `value` is outside `1..=100`.
pub const fn validate_secret(value: i64) -> Result<i64, SecretError> {
    if value >= MIN_NUMBER && value <= MAX_NUMBER {
        Ok(value)
    } else {
        Err(SecretError::OutOfRange(value))
    }
}
