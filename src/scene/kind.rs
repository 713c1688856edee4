//! Well-known scene names.

use tracing::instrument;

/// Scenes the shell knows how to build.
///
/// Names are matched without regard to ASCII case, so `"TicTacToe"` and
/// `"tictactoe"` both parse to [`SceneKind::TicTacToe`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SceneKind {
    /// The main menu.
    Main,
    /// The tic-tac-toe board.
    TicTacToe,
    /// The number guessing game.
    GuessingGame,
}

impl SceneKind {
    /// Parses a scene name, returning `None` for names the shell does not know.
    #[instrument]
    pub fn from_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    /// Menu label for this scene.
    pub fn label(self) -> &'static str {
        match self {
            Self::Main => "Main",
            Self::TicTacToe => "TicTacToe",
            Self::GuessingGame => "Guessing Game",
        }
    }
}

/// Text shown by the placeholder scene built for an unrecognised name.
pub fn unknown_scene_text(name: &str) -> String {
    format!("Unknown scenename {}", name)
}
