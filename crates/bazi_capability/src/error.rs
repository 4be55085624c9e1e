//! Errors raised while assessing capabilities.

use bazi_base::{BaziError, TenGod};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum CapabilityError {
    #[error(transparent)]
    Base(#[from] BaziError),

    /// A strength is NaN, infinite, negative or above 1.
    #[error("invalid strength for {god}: {value}")]
    InvalidStrength { god: TenGod, value: f64 },

    /// Score bounds or factors that cannot produce a score.
    #[error("invalid capability config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, CapabilityError>;
