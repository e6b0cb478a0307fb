//! Raw user text to candidate guess

/// Parse a line of user input into an optional guess
///
/// Surrounding whitespace is ignored. Anything that is not an integer is
/// treated as no entry, which [`Game::is_valid_guess`](super::Game::is_valid_guess)
/// rejects.
///
/// # Examples
/// ```
/// use guess_the_number::core::parse_guess;
///
/// assert_eq!(parse_guess(" 42\n"), Some(42));
/// assert_eq!(parse_guess("-3"), Some(-3));
/// assert_eq!(parse_guess("forty"), None);
/// assert_eq!(parse_guess(""), None);
/// ```
#[must_use]
pub fn parse_guess(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}
