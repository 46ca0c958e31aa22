//! Caller-side validation of passages before they are sent for analysis.
//!
//! The inference client does not re-check length; callers run
//! [`validate_passage`] first so that trivially short input never costs a
//! network round trip.

use thiserror::Error;

/// Minimum passage length, in characters, after trimming whitespace.
pub const MIN_PASSAGE_CHARS: usize = 20;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("passage too short: {chars} characters, need at least {min}")]
    TooShort { chars: usize, min: usize },
}

/// Check a passage against [`MIN_PASSAGE_CHARS`], returning the trimmed text.
pub fn validate_passage(text: &str) -> Result<&str, InputError> {
    let trimmed = text.trim();
    let chars = trimmed.chars().count();
    if chars < MIN_PASSAGE_CHARS {
        return Err(InputError::TooShort {
            chars,
            min: MIN_PASSAGE_CHARS,
        });
    }
    Ok(trimmed)
}
