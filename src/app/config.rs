//! Configuration for the display

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::{BlockChar, DEFAULT_BLOCK_CHAR};
use crate::render::SevenSegment;

/// Number rendered when none is given on the command line
pub const DEMO_NUMBER: u64 = 1234567890;

/// Display configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Glyph drawn for lit segment pixels
    pub block_char: char,
    /// Number shown when no number is given
    pub number: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            block_char: DEFAULT_BLOCK_CHAR,
            number: DEMO_NUMBER,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.block()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from default location or return default config
    pub fn load_or_default() -> Self {
        // Try to load from ~/.config/segmino/config.json
        if let Some(config_dir) = dirs_config_path() {
            let config_path = config_dir.join("config.json");
            if config_path.exists() {
                match Self::load(&config_path) {
                    Ok(config) => return config,
                    Err(e) => tracing::warn!(
                        "Ignoring config {}: {}",
                        config_path.display(),
                        e
                    ),
                }
            }
        }
        Self::default()
    }

    /// The configured block character, validated
    pub fn block(&self) -> Result<BlockChar, ConfigError> {
        Ok(BlockChar::new(self.block_char)?)
    }

    /// Build a renderer from this configuration
    pub fn display(&self) -> Result<SevenSegment, ConfigError> {
        Ok(SevenSegment::new(self.block()?))
    }
}

/// Get the configuration directory path
fn dirs_config_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config").join("segmino"))
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid block character: {0}")]
    Block(#[from] crate::error::Error),
}
