//! Line-oriented console shell around the game engines.

mod controller;
mod factory;
mod scene;
mod scenes;

pub use controller::Shell;
pub use factory::{ShellScene, ShellSceneFactory};
pub use scene::{Scene, SceneTransition};
pub use scenes::{GuessingScene, MainMenuScene, TicTacToeScene, UnknownScene};
