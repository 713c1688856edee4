//! Main menu — the hub for choosing a game.

use tracing::{debug, instrument};

use crate::scene::SceneKind;
use crate::shell::scene::{Scene, SceneTransition};

/// Games listed on the main menu, in display order.
const GAMES: [SceneKind; 2] = [SceneKind::TicTacToe, SceneKind::GuessingGame];

/// State for the main menu scene.
#[derive(Debug, Clone, Default)]
pub struct MainMenuScene;

impl MainMenuScene {
    /// Creates the main menu.
    pub fn new() -> Self {
        Self
    }
}

impl Scene for MainMenuScene {
    fn render(&self) -> String {
        let mut out = String::from("Main\n");
        for (idx, kind) in GAMES.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", idx + 1, kind.label()));
        }
        out.push_str("  exit\n");
        out.push_str("Choose a game:");
        out
    }

    #[instrument(skip(self))]
    fn handle_line(&mut self, line: &str) -> SceneTransition {
        let choice = line.trim();
        if choice.is_empty() {
            return SceneTransition::Stay;
        }
        if matches!(choice.to_ascii_lowercase().as_str(), "exit" | "quit") {
            return SceneTransition::Quit;
        }
        let by_number = choice
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| GAMES.get(idx));
        match by_number {
            Some(kind) => {
                debug!(scene = %kind, "Menu selection");
                SceneTransition::Show(kind.to_string())
            }
            None => SceneTransition::Show(choice.to_string()),
        }
    }
}
