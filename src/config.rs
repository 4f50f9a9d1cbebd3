use std::path::Path;
use std::time::Duration;

use log::warn;

use crate::board::DEFAULT_BOARD_SIZE;
use crate::error::ConfigError;

/// Game configuration, loadable from TOML.
///
/// Every field has a default, so a partial (or empty) file is valid.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Rows on the board; each row has `3 * board_size - 2` cells
    pub board_size: usize,
    /// Run length that wins a line
    pub win_threshold: usize,
    /// Search depth in plies
    pub search_depth: u8,
    /// An AI turn taking longer than this forfeits the round
    pub ai_time_limit_ms: u64,
    /// Seed for the tie-break random source; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: DEFAULT_BOARD_SIZE,
            win_threshold: 4,
            search_depth: 2,
            ai_time_limit_ms: 10_000,
            seed: None,
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

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < 2 {
            return Err(ConfigError::Validation("board_size must be >= 2".into()));
        }
        if self.win_threshold < 2 {
            return Err(ConfigError::Validation("win_threshold must be >= 2".into()));
        }
        if self.win_threshold > self.board_size {
            return Err(ConfigError::Validation(
                "win_threshold must be <= board_size".into(),
            ));
        }
        if self.search_depth == 0 {
            return Err(ConfigError::Validation("search_depth must be >= 1".into()));
        }
        if self.ai_time_limit_ms == 0 {
            return Err(ConfigError::Validation("ai_time_limit_ms must be > 0".into()));
        }
        Ok(())
    }

    #[inline]
    pub fn ai_time_limit(&self) -> Duration {
        Duration::from_millis(self.ai_time_limit_ms)
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&GameConfig::default()).unwrap_or_default()
    }
}
