//! Tic-tac-toe scene — renders the board and forwards moves to the engine.

use tracing::{debug, instrument};

use crate::games::tictactoe::{Cell, GameStatus, TicTacToe};
use crate::shell::scene::{Scene, SceneTransition, is_back};

/// State for the tic-tac-toe scene.
#[derive(Debug, Clone)]
pub struct TicTacToeScene {
    game: TicTacToe,
    notice: Option<String>,
}

impl TicTacToeScene {
    /// Wraps a fresh game.
    pub fn new(game: TicTacToe) -> Self {
        Self { game, notice: None }
    }

    /// The game being played.
    pub fn game(&self) -> &TicTacToe {
        &self.game
    }

    /// Headline describing whose turn it is or how the game ended.
    pub fn headline(&self) -> String {
        match self.game.status() {
            GameStatus::Won(winner) => format!("Player {} wins!", winner),
            GameStatus::Draw => "Draw. No winner.".to_string(),
            GameStatus::InProgress => format!("Next Player: {}", self.game.turn()),
        }
    }
}

impl Scene for TicTacToeScene {
    fn render(&self) -> String {
        let mut out = format!("{}\n{}\n", self.headline(), self.game.board().display());
        if let Some(notice) = &self.notice {
            out.push_str(notice);
            out.push('\n');
        }
        out.push_str("Enter '<col> <row>', 'new', or 'back':");
        out
    }

    #[instrument(skip(self))]
    fn handle_line(&mut self, line: &str) -> SceneTransition {
        let input = line.trim();
        self.notice = None;
        if is_back(input) {
            return SceneTransition::main();
        }
        if input.eq_ignore_ascii_case("new") {
            self.game.reset();
            return SceneTransition::Stay;
        }
        match Cell::parse(input) {
            Some(cell) if self.game.can_place(cell.col, cell.row) => {
                if let Err(e) = self.game.place(cell.col, cell.row) {
                    self.notice = Some(e.to_string());
                }
            }
            Some(cell) => {
                debug!(%cell, "Cell not playable");
                self.notice = Some(format!("Can't move to {}", cell));
            }
            None => {
                self.notice = Some("Enter a column and row, for example: 0 2".to_string());
            }
        }
        SceneTransition::Stay
    }
}
