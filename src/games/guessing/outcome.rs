//! Classification of a single guess.

use serde::{Deserialize, Serialize};

/// What the engine made of one guess.
///
/// The `Display` impl renders the hint shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GuessOutcome {
    /// The input was not an integer. Does not count as an attempt.
    #[display("\"{}\" is not a valid guess", _0)]
    Invalid(String),

    /// The guess lies outside `[1, upper_bound]`.
    #[display("Impossible! The secret is 1 - {}", upper_bound)]
    OutOfRange {
        /// The guessed value.
        guess: i64,
        /// Upper bound of the round.
        upper_bound: u32,
    },

    /// The guess is below the secret.
    #[display("{} is too small.", _0)]
    TooSmall(i64),

    /// The guess is above the secret.
    #[display("{} is too large.", _0)]
    TooLarge(i64),

    /// The guess equals the secret.
    #[display("Right! You guessed it.")]
    Correct(i64),
}

impl GuessOutcome {
    /// Returns true for the guess that ends the round.
    pub fn is_correct(&self) -> bool {
        matches!(self, GuessOutcome::Correct(_))
    }

    /// Returns true if the guess was counted as an attempt.
    pub fn counts_as_attempt(&self) -> bool {
        !matches!(self, GuessOutcome::Invalid(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_text() {
        assert_eq!(
            GuessOutcome::Invalid("abc".to_string()).to_string(),
            "\"abc\" is not a valid guess"
        );
        assert_eq!(
            GuessOutcome::OutOfRange {
                guess: 0,
                upper_bound: 10
            }
            .to_string(),
            "Impossible! The secret is 1 - 10"
        );
        assert_eq!(GuessOutcome::TooSmall(3).to_string(), "3 is too small.");
        assert_eq!(GuessOutcome::TooLarge(9).to_string(), "9 is too large.");
        assert_eq!(GuessOutcome::Correct(5).to_string(), "Right! You guessed it.");
    }

    #[test]
    fn test_only_invalid_skips_attempt() {
        assert!(!GuessOutcome::Invalid(String::new()).counts_as_attempt());
        assert!(GuessOutcome::TooSmall(1).counts_as_attempt());
        assert!(GuessOutcome::Correct(1).is_correct());
        assert!(!GuessOutcome::TooLarge(1).is_correct());
    }
}
