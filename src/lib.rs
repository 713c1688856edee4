//! Strictly Arcade library - tic-tac-toe and guessing game engines
//!
//! The engines are pure, synchronous state machines. A presentation layer
//! calls into them on user input and renders whatever they return; the
//! engines never hold a reference back to it.
//!
//! # Architecture
//!
//! - **Games**: [`TicTacToe`] on an `N`x`N` board and [`GuessingGame`]
//! - **Scenes**: [`SceneRegistry`], a case-insensitive name-to-scene cache
//! - **Shell**: a line-oriented console front end built on the registry
//!
//! # Example
//!
//! ```
//! use strictly_arcade::{GameStatus, GuessOutcome, GuessingGame, TicTacToe, TicTacToePlayer};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut game = TicTacToe::new(3)?;
//! for (col, row) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
//!     game.place(col, row)?;
//! }
//! assert_eq!(game.place(2, 0)?, GameStatus::Won(TicTacToePlayer::X));
//!
//! let mut round = GuessingGame::new(10)?;
//! assert!(matches!(round.guess("eleven"), GuessOutcome::Invalid(_)));
//! assert_eq!(round.attempts(), 0);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod error;
mod games;
mod scene;
mod shell;

// Crate-level exports - Errors and configuration
pub use config::{ConfigError, MAX_BOARD_SIZE, ShellConfig};
pub use error::ArgumentError;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Cell, DEFAULT_BOARD_SIZE, GameStatus, MoveError, Player as TicTacToePlayer,
    Square, TicTacToe, rules,
};

// Crate-level exports - Game types (guessing game)
pub use games::guessing::{DEFAULT_UPPER_BOUND, GuessOutcome, GuessingGame};

// Crate-level exports - Scene switching
pub use scene::{SceneFactory, SceneKind, SceneRegistry, unknown_scene_text};

// Crate-level exports - Console shell
pub use shell::{
    GuessingScene, MainMenuScene, Scene, SceneTransition, Shell, ShellScene, ShellSceneFactory,
    TicTacToeScene, UnknownScene,
};
