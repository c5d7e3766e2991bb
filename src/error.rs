use std::path::PathBuf;

/// Errors from dropping a piece into the board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range (board has {cols} columns)")]
    InvalidColumn { column: usize, cols: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },
}

/// Errors locating the board region inside a document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegionError {
    #[error("start marker {marker:?} not found in document")]
    NotFound { marker: String },

    #[error("start marker found but end marker {marker:?} missing after it")]
    Unterminated { marker: String },
}

/// Errors interpreting the external move trigger.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("invalid column {input:?} (expected an integer in 0..{cols})")]
    InvalidColumn { input: String, cols: usize },
}

/// Errors advancing the game by one move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayError {
    #[error(transparent)]
    Region(#[from] RegionError),

    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Errors reading or writing the document file.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read document {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write document {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors from one full run: parse the trigger, update the document.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Play(#[from] PlayError),

    #[error(transparent)]
    Region(#[from] RegionError),

    #[error(transparent)]
    Store(#[from] StoreError),
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
