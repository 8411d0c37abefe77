use std::path::PathBuf;

/// Errors from board construction and cell access.
///
/// These are contract violations, not in-game conditions: recoverable
/// situations (a full column, a move after the game ended) are reported as
/// [`crate::game::MoveOutcome`] variants and leave the game unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board dimensions {width}x{height} are below the 4x4 minimum")]
    InvalidDimensions { width: usize, height: usize },

    #[error("cell ({row}, {column}) is outside the board")]
    OutOfBounds { row: usize, column: usize },

    #[error("cell {cell_id} is already filled")]
    AlreadyFilled { cell_id: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
