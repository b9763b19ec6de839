//! Match configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictac_engine::{Difficulty, Player};
use tracing::{debug, info, instrument};

/// Who controls the two sides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Two humans share the board.
    #[display("two player")]
    TwoPlayer,
    /// One human against the computer.
    #[default]
    #[display("single player")]
    SinglePlayer,
}

/// Setup for a match: a series of games between the same two players.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[serde(default)]
#[setters(prefix = "with_")]
pub struct MatchConfig {
    /// Display name for X.
    #[setters(into)]
    player_x_name: String,

    /// Display name for O.
    #[setters(into)]
    player_o_name: String,

    /// Human vs human or human vs computer.
    mode: GameMode,

    /// Computer strength in single-player mode.
    difficulty: Difficulty,

    /// Side that moves first in every game.
    starting_player: Player,

    /// Side the computer plays in single-player mode.
    computer_player: Player,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            player_x_name: "Player 1".to_string(),
            player_o_name: "Player 2".to_string(),
            mode: GameMode::default(),
            difficulty: Difficulty::default(),
            starting_player: Player::X,
            computer_player: Player::O,
        }
    }
}

impl MatchConfig {
    /// Loads configuration from TOML file.
    ///
    /// Missing keys take their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(mode = %config.mode, difficulty = %config.difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Display name for `player`.
    pub fn name_of(&self, player: Player) -> &str {
        match player {
            Player::X => &self.player_x_name,
            Player::O => &self.player_o_name,
        }
    }

    /// True when the computer controls `player`.
    pub fn is_computer(&self, player: Player) -> bool {
        self.mode == GameMode::SinglePlayer && player == self.computer_player
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
