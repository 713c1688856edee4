//! Shell configuration loaded from TOML.

use crate::games::guessing::DEFAULT_UPPER_BOUND;
use crate::games::tictactoe::DEFAULT_BOARD_SIZE;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Largest board side length the shell will build.
pub const MAX_BOARD_SIZE: usize = 64;

/// Settings for the console shell.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Side length of the tic-tac-toe board.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Upper bound of the first guessing round.
    #[serde(default = "default_upper_bound")]
    upper_bound: u32,

    /// Scene shown at startup.
    #[serde(default = "default_start_scene")]
    start_scene: String,
}

fn default_board_size() -> usize {
    DEFAULT_BOARD_SIZE
}

fn default_upper_bound() -> u32 {
    DEFAULT_UPPER_BOUND
}

fn default_start_scene() -> String {
    "main".to_string()
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            upper_bound: default_upper_bound(),
            start_scene: default_start_scene(),
        }
    }
}

impl ShellConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(
            board_size = config.board_size,
            upper_bound = config.upper_bound,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides and re-validates.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        board_size: Option<usize>,
        upper_bound: Option<u32>,
        start_scene: Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(size) = board_size {
            self.board_size = size;
        }
        if let Some(bound) = upper_bound {
            self.upper_bound = bound;
        }
        if let Some(scene) = start_scene {
            self.start_scene = scene;
        }
        self.validate()?;
        Ok(self)
    }

    /// Rejects values the engines cannot be built with.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::new("board_size must be at least 1".to_string()));
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::new(format!(
                "board_size must be at most {}, got {}",
                MAX_BOARD_SIZE, self.board_size
            )));
        }
        if self.upper_bound == 0 {
            return Err(ConfigError::new("upper_bound must be at least 1".to_string()));
        }
        if self.start_scene.trim().is_empty() {
            return Err(ConfigError::new("start_scene must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
