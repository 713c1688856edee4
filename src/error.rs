//! Construction-time error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// An argument passed to a constructor was outside its accepted domain.
///
/// Carries the caller's location so misuse can be traced back to the
/// call site that supplied the bad value.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid argument: {} at {}:{}", message, file, line)]
pub struct ArgumentError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ArgumentError {
    /// Creates a new argument error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
