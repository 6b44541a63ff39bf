use std::path::PathBuf;

use crate::outcome::Outcome;

/// Errors raised by board mutation, the search and the game controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid move, column {column} out of range")]
    InvalidColumn { column: usize },

    #[error("invalid move, column {column} full")]
    ColumnFull { column: usize },

    #[error("no legal moves, the board is full")]
    NoLegalMoves,

    #[error("the game is already over ({0})")]
    GameOver(Outcome),
}

/// Errors that can occur when loading configuration
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_error_display() {
        assert_eq!(
            GameError::ColumnFull { column: 3 }.to_string(),
            "invalid move, column 3 full"
        );
        assert_eq!(
            GameError::GameOver(Outcome::Draw).to_string(),
            "the game is already over (draw)"
        );
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::Validation("search.depth must be >= 1".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: search.depth must be >= 1"
        );
    }
}
