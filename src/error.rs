use std::path::PathBuf;

/// Errors raised while decoding boards and players at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("El tablero debe tener {expected} posiciones.")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid cell value {value:?} at index {index} (expected 0, 1 or 2)")]
    InvalidCell { index: usize, value: String },

    #[error("invalid player {0:?} (expected 1 or 2)")]
    InvalidPlayer(String),

    #[error("malformed board: {0}")]
    Malformed(String),
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
