//! Placeholder scene for names the shell does not recognise.

use crate::scene::unknown_scene_text;
use crate::shell::scene::{Scene, SceneTransition, is_back};

/// Scene that only shows which name was not found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownScene {
    name: String,
}

impl UnknownScene {
    /// Creates the placeholder for `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The name that was asked for.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Scene for UnknownScene {
    fn render(&self) -> String {
        format!("{}\n(type 'back' to return)", unknown_scene_text(&self.name))
    }

    fn handle_line(&mut self, line: &str) -> SceneTransition {
        if is_back(line.trim()) {
            SceneTransition::main()
        } else {
            SceneTransition::Stay
        }
    }
}
