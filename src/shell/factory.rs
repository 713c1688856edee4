//! Builds shell scenes by name.

use tracing::{instrument, warn};

use crate::games::guessing::GuessingGame;
use crate::games::tictactoe::TicTacToe;
use crate::scene::{SceneFactory, SceneKind};
use crate::shell::scene::{Scene, SceneTransition};
use crate::shell::scenes::{GuessingScene, MainMenuScene, TicTacToeScene, UnknownScene};
use crate::{ArgumentError, ShellConfig};

/// Any scene the shell can show.
#[derive(Debug, Clone)]
pub enum ShellScene {
    /// The main menu.
    Main(MainMenuScene),
    /// A tic-tac-toe game.
    TicTacToe(TicTacToeScene),
    /// A guessing game round.
    Guessing(GuessingScene),
    /// Placeholder for an unrecognised name.
    Unknown(UnknownScene),
}

impl Scene for ShellScene {
    fn render(&self) -> String {
        match self {
            ShellScene::Main(s) => s.render(),
            ShellScene::TicTacToe(s) => s.render(),
            ShellScene::Guessing(s) => s.render(),
            ShellScene::Unknown(s) => s.render(),
        }
    }

    fn handle_line(&mut self, line: &str) -> SceneTransition {
        match self {
            ShellScene::Main(s) => s.handle_line(line),
            ShellScene::TicTacToe(s) => s.handle_line(line),
            ShellScene::Guessing(s) => s.handle_line(line),
            ShellScene::Unknown(s) => s.handle_line(line),
        }
    }
}

/// Scene factory configured with the board size and first guessing bound.
#[derive(Debug, Clone)]
pub struct ShellSceneFactory {
    board: TicTacToe,
    upper_bound: u32,
}

impl ShellSceneFactory {
    /// Creates a factory, checking both game parameters up front.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError`] if the board size or upper bound is zero.
    #[instrument]
    pub fn new(board_size: usize, upper_bound: u32) -> Result<Self, ArgumentError> {
        let board = TicTacToe::new(board_size)?;
        if upper_bound == 0 {
            return Err(ArgumentError::new("Upper bound must be positive, got 0"));
        }
        Ok(Self { board, upper_bound })
    }

    /// Creates a factory from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError`] if the configured values are out of range.
    pub fn from_config(config: &ShellConfig) -> Result<Self, ArgumentError> {
        Self::new(*config.board_size(), *config.upper_bound())
    }
}

impl SceneFactory for ShellSceneFactory {
    type Scene = ShellScene;

    #[instrument(skip(self))]
    fn make_scene(&self, name: &str) -> ShellScene {
        match SceneKind::from_name(name) {
            Some(SceneKind::Main) => ShellScene::Main(MainMenuScene::new()),
            Some(SceneKind::TicTacToe) => {
                ShellScene::TicTacToe(TicTacToeScene::new(self.board.clone()))
            }
            Some(SceneKind::GuessingGame) => {
                let game = GuessingGame::new(self.upper_bound).unwrap_or_else(|e| {
                    warn!(error = %e, "Falling back to default guessing bound");
                    GuessingGame::default()
                });
                ShellScene::Guessing(GuessingScene::new(game))
            }
            None => {
                warn!(scene = %name, "Unknown scene requested");
                ShellScene::Unknown(UnknownScene::new(name))
            }
        }
    }
}
