//! Engine configuration: board geometry, win length and search limits

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};
use crate::error::ConfigError;

/// Deepest search the engine accepts. The tree is full-width, so anything
/// beyond this is impractical on a 5x5 board.
pub const MAX_SEARCH_DEPTH: u8 = 16;

/// The two deployed rule sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// 4 in a row wins, depth 4
    Four,
    /// 5 in a row wins, depth 5
    Five,
}

impl Variant {
    #[inline]
    pub fn win_length(self) -> usize {
        match self {
            Variant::Four => 4,
            Variant::Five => 5,
        }
    }

    #[inline]
    pub fn max_depth(self) -> u8 {
        match self {
            Variant::Four => 4,
            Variant::Five => 5,
        }
    }

    pub fn config(self) -> EngineConfig {
        EngineConfig {
            board_size: DEFAULT_BOARD_SIZE,
            win_length: self.win_length(),
            max_depth: self.max_depth(),
            threads: 1,
            time_limit_ms: None,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Four => write!(f, "four"),
            Variant::Five => write!(f, "five"),
        }
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "four" | "4" => Ok(Variant::Four),
            "five" | "5" => Ok(Variant::Five),
            other => Err(ConfigError::Validation(format!(
                "unknown variant '{other}' (expected four or five)"
            ))),
        }
    }
}

/// Engine configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Side length N of the N x N board
    pub board_size: usize,
    /// Marks in a row needed to win (K)
    pub win_length: usize,
    /// Plies searched below each candidate move
    pub max_depth: u8,
    /// Worker threads for the root split; 1 searches on the calling thread
    pub threads: usize,
    /// Optional budget for iterative deepening. `None` searches to `max_depth`.
    pub time_limit_ms: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Variant::Four.config()
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: EngineConfig = toml::from_str(&content)?;
        config.validate()?;
        tracing::info!(path = %path.display(), ?config, "loaded engine config");
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Switch win length and depth to a preset, keeping everything else.
    pub fn apply_variant(&mut self, variant: Variant) {
        self.win_length = variant.win_length();
        self.max_depth = variant.max_depth();
    }

    #[inline]
    pub fn total_cells(&self) -> usize {
        self.board_size * self.board_size
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < 3 || self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::Validation(format!(
                "board_size must be in [3, {MAX_BOARD_SIZE}], got {}",
                self.board_size
            )));
        }
        if self.win_length < 3 {
            return Err(ConfigError::Validation(format!(
                "win_length must be >= 3, got {}",
                self.win_length
            )));
        }
        if self.win_length > self.board_size {
            return Err(ConfigError::Validation(format!(
                "win_length ({}) must be <= board_size ({})",
                self.win_length, self.board_size
            )));
        }
        if self.max_depth == 0 || self.max_depth > MAX_SEARCH_DEPTH {
            return Err(ConfigError::Validation(format!(
                "max_depth must be in [1, {MAX_SEARCH_DEPTH}], got {}",
                self.max_depth
            )));
        }
        if self.threads == 0 {
            return Err(ConfigError::Validation("threads must be > 0".into()));
        }
        if self.time_limit_ms == Some(0) {
            return Err(ConfigError::Validation("time_limit_ms must be > 0".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_is_four_in_row() {
        let config = EngineConfig::default();
        assert_eq!(config.board_size, 5);
        assert_eq!(config.win_length, 4);
        assert_eq!(config.max_depth, 4);
        assert_eq!(config.threads, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_five_variant() {
        let config = Variant::Five.config();
        assert_eq!(config.win_length, 5);
        assert_eq!(config.max_depth, 5);
        assert_eq!(config.total_cells(), 25);
    }

    #[test]
    fn test_variant_from_str() {
        assert_eq!("four".parse::<Variant>().unwrap(), Variant::Four);
        assert_eq!("5".parse::<Variant>().unwrap(), Variant::Five);
        assert_eq!(" FIVE ".parse::<Variant>().unwrap(), Variant::Five);
        assert!("six".parse::<Variant>().is_err());
    }

    #[test]
    fn test_apply_variant_keeps_other_fields() {
        let mut config = EngineConfig {
            threads: 4,
            ..EngineConfig::default()
        };
        config.apply_variant(Variant::Five);
        assert_eq!(config.win_length, 5);
        assert_eq!(config.max_depth, 5);
        assert_eq!(config.threads, 4);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let base = EngineConfig::default();

        let config = EngineConfig { win_length: 6, ..base.clone() };
        assert!(config.validate().is_err());

        let config = EngineConfig { board_size: 2, win_length: 2, ..base.clone() };
        assert!(config.validate().is_err());

        let config = EngineConfig { max_depth: 0, ..base.clone() };
        assert!(config.validate().is_err());

        let config = EngineConfig { threads: 0, ..base.clone() };
        assert!(config.validate().is_err());

        let config = EngineConfig { time_limit_ms: Some(0), ..base };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_partial_toml_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "win_length = 5\nmax_depth = 3\ntime_limit_ms = 250").unwrap();

        let config = EngineConfig::load(file.path()).unwrap();
        assert_eq!(config.board_size, 5);
        assert_eq!(config.win_length, 5);
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.time_limit_ms, Some(250));
    }

    #[test]
    fn test_load_rejects_invalid_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "board_size = 5\nwin_length = 7").unwrap();

        let err = EngineConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "win_length = \"four\"").unwrap();

        let err = EngineConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = EngineConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, EngineConfig::default());
    }
}
