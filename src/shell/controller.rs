//! Shell controller — the loop that feeds input lines to the current scene.

use std::io::{BufRead, Write};

use tracing::{debug, info, instrument};

use crate::scene::SceneRegistry;
use crate::shell::factory::{ShellScene, ShellSceneFactory};
use crate::shell::scene::{Scene, SceneTransition};
use crate::shell::scenes::MainMenuScene;
use crate::{ArgumentError, ShellConfig};

/// Controller that owns the scene registry and drives the current scene.
///
/// Call [`Shell::run`] to start the read-eval loop, or
/// [`Shell::handle_line`] to feed input one line at a time.
#[derive(Debug)]
pub struct Shell {
    registry: SceneRegistry<ShellSceneFactory>,
}

impl Shell {
    /// Creates a shell showing the configured start scene.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError`] if the configured game parameters are invalid.
    #[instrument(skip(config))]
    pub fn new(config: &ShellConfig) -> Result<Self, ArgumentError> {
        let factory = ShellSceneFactory::from_config(config)?;
        let mut registry = SceneRegistry::new(factory);
        registry.register("main", ShellScene::Main(MainMenuScene::new()));
        registry.show(config.start_scene());
        info!(scene = ?registry.current_name(), "Shell ready");
        Ok(Self { registry })
    }

    /// The scene registry.
    pub fn registry(&self) -> &SceneRegistry<ShellSceneFactory> {
        &self.registry
    }

    /// Case-folded name of the scene being shown.
    pub fn current_name(&self) -> Option<&str> {
        self.registry.current_name()
    }

    /// Renders the current scene.
    pub fn render(&self) -> String {
        self.registry
            .current()
            .map(Scene::render)
            .unwrap_or_default()
    }

    /// Feeds one input line to the current scene.
    ///
    /// Returns `false` once the shell should exit.
    #[instrument(skip(self))]
    pub fn handle_line(&mut self, line: &str) -> bool {
        let transition = match self.registry.current_mut() {
            Some(scene) => scene.handle_line(line),
            None => SceneTransition::main(),
        };
        debug!(transition = ?transition, "Applying scene transition");
        match transition {
            SceneTransition::Stay => true,
            SceneTransition::Show(name) => {
                self.registry.show(&name);
                true
            }
            SceneTransition::Quit => false,
        }
    }

    /// Runs the shell until the user quits or input ends.
    ///
    /// Each scene is rendered to `output` before a line is read.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, output: &mut W) -> anyhow::Result<()> {
        info!("Starting shell loop");
        let mut line = String::new();
        loop {
            writeln!(output, "{}", self.render())?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                info!("Input closed");
                return Ok(());
            }
            if !self.handle_line(line.trim_end_matches(['\r', '\n'])) {
                info!("Shell quitting");
                return Ok(());
            }
        }
    }
}
