//! Guessing game scene — reads guesses and shows the engine's hints.

use tracing::{info, instrument};

use crate::games::guessing::GuessingGame;
use crate::shell::scene::{Scene, SceneTransition, is_back};

/// State for the guessing game scene.
#[derive(Debug, Clone)]
pub struct GuessingScene {
    game: GuessingGame,
    status: Option<String>,
    awaiting_replay: bool,
}

impl GuessingScene {
    /// Wraps a fresh round.
    pub fn new(game: GuessingGame) -> Self {
        Self {
            game,
            status: None,
            awaiting_replay: false,
        }
    }

    /// The round being played.
    pub fn game(&self) -> &GuessingGame {
        &self.game
    }

    /// Replaces the finished round with a new one at double the bound.
    #[instrument(skip(self), fields(bound = self.game.upper_bound()))]
    fn next_round(&mut self) {
        match GuessingGame::new(self.game.next_upper_bound()) {
            Ok(game) => {
                info!(upper_bound = game.upper_bound(), "Starting next round");
                self.game = game;
            }
            Err(e) => self.status = Some(e.message),
        }
        self.awaiting_replay = false;
    }

    fn handle_replay(&mut self, answer: &str) -> SceneTransition {
        match answer.to_ascii_lowercase().as_str() {
            "y" | "yes" => {
                self.next_round();
                SceneTransition::Stay
            }
            "n" | "no" => SceneTransition::Quit,
            _ => {
                self.status = Some("Please answer y or n".to_string());
                SceneTransition::Stay
            }
        }
    }
}

impl Scene for GuessingScene {
    fn render(&self) -> String {
        let mut out = format!("Guess the Secret Number\n{}\n", self.game.message());
        if let Some(status) = &self.status {
            out.push_str(status);
            out.push('\n');
        }
        if self.awaiting_replay {
            out.push_str("Play again? (y/n)");
        } else {
            out.push_str("Your guess?");
        }
        out
    }

    #[instrument(skip(self))]
    fn handle_line(&mut self, line: &str) -> SceneTransition {
        let input = line.trim();
        self.status = None;
        if is_back(input) {
            return SceneTransition::main();
        }
        if self.awaiting_replay {
            return self.handle_replay(input);
        }
        if input.is_empty() {
            self.status = Some(format!(
                "Please enter a number between 1 and {}",
                self.game.upper_bound()
            ));
            return SceneTransition::Stay;
        }
        if input.eq_ignore_ascii_case("give up") {
            self.status = Some(format!(
                "You gave up after {} guesses.",
                self.game.attempts()
            ));
            return SceneTransition::Stay;
        }
        if self.game.guess(input).is_correct() {
            self.status = Some("Right! You guessed the secret number.".to_string());
            self.awaiting_replay = true;
        }
        SceneTransition::Stay
    }
}
