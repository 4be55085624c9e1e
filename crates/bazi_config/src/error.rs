//! Configuration loading errors.

use std::path::PathBuf;

use bazi_capability::CapabilityError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error(transparent)]
    Capability(#[from] CapabilityError),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
