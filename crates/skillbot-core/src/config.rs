//! Store configuration for skillbot
//!
//! Configuration is stored in `.skillbot/config.toml`. Every setting is
//! optional; a missing file yields the built-in banks and weight table.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SkillbotError};

/// Current store format version
pub const STORE_FORMAT_VERSION: u32 = 1;

fn default_version() -> u32 {
    STORE_FORMAT_VERSION
}

/// Store configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// RIASEC question bank CSV (relative paths resolve against the store)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub riasec_bank: Option<PathBuf>,

    /// TCI question bank CSV
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tci_bank: Option<PathBuf>,

    /// Career suggestions CSV
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub careers: Option<PathBuf>,

    /// Field weight table TOML
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            version: STORE_FORMAT_VERSION,
            riasec_bank: None,
            tci_bank: None,
            careers: None,
            weights: None,
        }
    }
}

impl StoreConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| SkillbotError::io_operation("read config", path.display(), e))?;
        let config: StoreConfig = toml::from_str(&content)?;

        if config.version > STORE_FORMAT_VERSION {
            tracing::warn!(
                version = config.version,
                supported = STORE_FORMAT_VERSION,
                "config written by a newer skillbot"
            );
        }

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SkillbotError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)
            .map_err(|e| SkillbotError::io_operation("write config", path.display(), e))?;
        Ok(())
    }
}

/// Resolve a configured path against the store root
pub fn resolve(store_root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        store_root.join(path)
    }
}
