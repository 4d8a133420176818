//! Parsing raw guess text.

use crate::core::error::GuessError;

use super::engine::validate_guess;

/// Parse user-entered text into a guess.
///
/// Surrounding whitespace is ignored. Text that doesn't fit a 32-bit
/// integer is `NotANumber`; a 32-bit integer outside the playable range
/// is `OutOfRange`.
pub fn parse_guess(text: &str) -> Result<i64, GuessError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(GuessError::Empty);
    }

    let guess = text
        .parse::<i32>()
        .map(i64::from)
        .map_err(|_| GuessError::NotANumber(text.to_string()))?;
    validate_guess(guess)?;
    Ok(guess)
}
