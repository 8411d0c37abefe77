use std::path::Path;

use crate::error::ConfigError;
use crate::game::MIN_DIMENSION;

/// Top-level game configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board: BoardConfig,
    pub players: PlayersConfig,
}

/// Board dimensions; both must be at least 4.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub columns: usize,
    pub rows: usize,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub one: PlayerConfig,
    pub two: PlayerConfig,
}

/// A player's display name and color. The engine passes the color through
/// untouched; it only needs to be non-empty.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub color: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board: BoardConfig::default(),
            players: PlayersConfig::default(),
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            columns: 7,
            rows: 6,
        }
    }
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            one: PlayerConfig {
                name: "player1".to_string(),
                color: "red".to_string(),
            },
            two: PlayerConfig {
                name: "player2".to_string(),
                color: "yellow".to_string(),
            },
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.columns < MIN_DIMENSION {
            return Err(ConfigError::Validation(
                "board.columns must be >= 4".into(),
            ));
        }
        if self.board.rows < MIN_DIMENSION {
            return Err(ConfigError::Validation("board.rows must be >= 4".into()));
        }
        if self.players.one.name.is_empty() || self.players.two.name.is_empty() {
            return Err(ConfigError::Validation(
                "players.*.name must not be empty".into(),
            ));
        }
        if self.players.one.name == self.players.two.name {
            return Err(ConfigError::Validation(
                "players.one.name and players.two.name must differ".into(),
            ));
        }
        if self.players.one.color.is_empty() || self.players.two.color.is_empty() {
            return Err(ConfigError::Validation(
                "players.*.color must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&GameConfig::default()).expect("default config serializes")
    }
}
