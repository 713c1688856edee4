//! Scene trait and transition type for the console shell.

/// The result of handling one line of input on a scene.
///
/// Scenes return this from [`Scene::handle_line`] to drive the
/// [`Shell`](crate::Shell) controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneTransition {
    /// Stay on the current scene.
    Stay,
    /// Switch to the scene registered under this name.
    Show(String),
    /// Leave the shell.
    Quit,
}

impl SceneTransition {
    /// Shorthand for switching back to the main menu.
    pub fn main() -> Self {
        Self::Show("main".to_string())
    }
}

/// Trait implemented by each scene the shell can show.
///
/// A scene owns its own state, renders it as text, and turns input lines
/// into calls on its engine.
pub trait Scene {
    /// Renders the scene as display text.
    fn render(&self) -> String;

    /// Handles one line of input and returns the resulting transition.
    fn handle_line(&mut self, line: &str) -> SceneTransition;
}

/// Returns true for the words that leave a game scene.
pub(crate) fn is_back(line: &str) -> bool {
    matches!(line.to_ascii_lowercase().as_str(), "back" | "main")
}
