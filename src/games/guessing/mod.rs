//! Guess-the-number game.

mod game;
mod outcome;

pub use game::{DEFAULT_UPPER_BOUND, GuessingGame};
pub use outcome::GuessOutcome;
