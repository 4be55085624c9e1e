//! Workspace configuration loaded from TOML.
//!
//! ```toml
//! [luck]
//! cycle_count = 10
//!
//! [display]
//! locale = "en"
//!
//! [capability]
//! amplification_factor = 2.0
//! smooth = false
//! ```
//!
//! Every table and key is optional; omitted values take their defaults.

pub mod error;

use std::fs;
use std::path::{Path, PathBuf};

use bazi_base::Locale;
use bazi_capability::CapabilityConfig;
use bazi_luck::DEFAULT_CYCLE_COUNT;
pub use bazi_luck::MAX_CYCLE_COUNT;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub use error::{ConfigError, Result};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "bazi.toml";

/// `[luck]` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LuckSettings {
    pub cycle_count: usize,
}

impl Default for LuckSettings {
    fn default() -> Self {
        Self {
            cycle_count: DEFAULT_CYCLE_COUNT,
        }
    }
}

/// `[display]` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub locale: Locale,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BaziConfig {
    pub luck: LuckSettings,
    pub display: DisplaySettings,
    pub capability: CapabilityConfig,
}

impl BaziConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate the file at `path`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content, path)?;
        info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Load from an explicit path, or from [`DEFAULT_CONFIG_FILE`] if it
    /// exists, or fall back to defaults.
    ///
    /// An explicit path that cannot be read is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::from_file(&fallback)
                } else {
                    debug!("no configuration file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_CYCLE_COUNT).contains(&self.luck.cycle_count) {
            return Err(ConfigError::Invalid(format!(
                "luck.cycle_count {} outside 1..={MAX_CYCLE_COUNT}",
                self.luck.cycle_count
            )));
        }
        self.capability.validate()?;
        Ok(())
    }
}
