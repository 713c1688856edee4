//! Guess-the-secret-number engine.

use super::outcome::GuessOutcome;
use crate::ArgumentError;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, instrument};

/// Upper bound used when none is given.
pub const DEFAULT_UPPER_BOUND: u32 = 100;

/// One round of the guessing game.
///
/// The secret is drawn once at construction and never exposed. A round
/// ends on the first correct guess; the next round is a new engine built
/// by the caller, usually with [`GuessingGame::next_upper_bound`].
#[derive(Debug, Clone)]
pub struct GuessingGame {
    secret: u32,
    upper_bound: u32,
    attempts: u32,
    last_outcome: Option<GuessOutcome>,
}

impl GuessingGame {
    /// Starts a round with a secret in `[1, upper_bound]` drawn from the
    /// thread-local entropy-seeded generator.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError`] if `upper_bound` is zero.
    #[track_caller]
    #[instrument]
    pub fn new(upper_bound: u32) -> Result<Self, ArgumentError> {
        Self::with_rng(upper_bound, &mut rand::thread_rng())
    }

    /// Starts a round whose secret is reproducible from `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError`] if `upper_bound` is zero.
    #[track_caller]
    #[instrument]
    pub fn with_seed(upper_bound: u32, seed: u64) -> Result<Self, ArgumentError> {
        Self::with_rng(upper_bound, &mut ChaCha8Rng::seed_from_u64(seed))
    }

    /// Starts a round drawing the secret from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError`] if `upper_bound` is zero.
    #[track_caller]
    pub fn with_rng<R: Rng + ?Sized>(upper_bound: u32, rng: &mut R) -> Result<Self, ArgumentError> {
        if upper_bound == 0 {
            return Err(ArgumentError::new("Upper bound must be positive, got 0"));
        }
        let secret = rng.gen_range(1..=upper_bound);
        info!(upper_bound, "Starting guessing round");
        Ok(Self {
            secret,
            upper_bound,
            attempts: 0,
            last_outcome: None,
        })
    }

    /// Title shown above the game.
    pub fn title(&self) -> &'static str {
        "Guessing Game"
    }

    /// Largest possible secret for this round.
    pub fn upper_bound(&self) -> u32 {
        self.upper_bound
    }

    /// Number of well-formed guesses so far.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Classification of the most recent guess, if any.
    pub fn last_outcome(&self) -> Option<&GuessOutcome> {
        self.last_outcome.as_ref()
    }

    /// Returns true once the secret has been guessed.
    pub fn is_solved(&self) -> bool {
        self.last_outcome
            .as_ref()
            .is_some_and(GuessOutcome::is_correct)
    }

    /// Upper bound for the round after this one.
    pub fn next_upper_bound(&self) -> u32 {
        self.upper_bound.saturating_mul(2)
    }

    /// Message for the player: the hint for the latest guess, or the
    /// opening line before any guess.
    pub fn message(&self) -> String {
        match &self.last_outcome {
            Some(outcome) => outcome.to_string(),
            None => format!(
                "I'm thinking of a number between 1 and {}",
                self.upper_bound
            ),
        }
    }

    /// Evaluates one guess.
    ///
    /// Surrounding whitespace is ignored. Input that is not an integer is
    /// reported as [`GuessOutcome::Invalid`] and is not counted; every
    /// other guess increments the attempt counter. The range check comes
    /// before the comparison with the secret.
    #[instrument(skip(self), fields(attempts = self.attempts))]
    pub fn guess(&mut self, raw_input: &str) -> GuessOutcome {
        let outcome = match raw_input.trim().parse::<i64>() {
            Err(_) => GuessOutcome::Invalid(raw_input.to_string()),
            Ok(guess) => self.classify(guess),
        };
        if outcome.counts_as_attempt() {
            self.attempts += 1;
        }
        debug!(?outcome, attempts = self.attempts, "Guess evaluated");
        if outcome.is_correct() {
            info!(attempts = self.attempts, "Secret guessed");
        }
        self.last_outcome = Some(outcome.clone());
        outcome
    }

    fn classify(&self, guess: i64) -> GuessOutcome {
        let secret = i64::from(self.secret);
        if guess < 1 || guess > i64::from(self.upper_bound) {
            GuessOutcome::OutOfRange {
                guess,
                upper_bound: self.upper_bound,
            }
        } else if guess < secret {
            GuessOutcome::TooSmall(guess)
        } else if guess > secret {
            GuessOutcome::TooLarge(guess)
        } else {
            GuessOutcome::Correct(guess)
        }
    }

    #[cfg(test)]
    pub(crate) fn secret(&self) -> u32 {
        self.secret
    }
}

impl Default for GuessingGame {
    fn default() -> Self {
        Self {
            secret: rand::thread_rng().gen_range(1..=DEFAULT_UPPER_BOUND),
            upper_bound: DEFAULT_UPPER_BOUND,
            attempts: 0,
            last_outcome: None,
        }
    }
}
