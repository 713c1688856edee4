//! Scene implementations for the console shell.

mod guessing;
mod main_menu;
mod tictactoe;
mod unknown;

pub use guessing::GuessingScene;
pub use main_menu::MainMenuScene;
pub use tictactoe::TicTacToeScene;
pub use unknown::UnknownScene;
