//! Error types for stem/branch parsing and table lookups.

use thiserror::Error;

use crate::branch::Branch;
use crate::stem::Stem;

/// Errors from parsing raw symbols or resolving out-of-domain values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BaziError {
    /// Symbol is not one of the 10 heavenly stems.
    #[error("unknown heavenly stem symbol: {0:?}")]
    UnknownStem(String),
    /// Symbol is not one of the 12 earthly branches.
    #[error("unknown earthly branch symbol: {0:?}")]
    UnknownBranch(String),
    /// Wrong number of symbols in an input record.
    #[error("expected {expected} symbols, got {actual}")]
    InputLength { expected: usize, actual: usize },
    /// Stem and branch differ in polarity, so they never meet in the 60-cycle.
    #[error("{stem}{branch} is not a sexagenary pair")]
    MismatchedGanZhi { stem: Stem, branch: Branch },
    /// Lunar day outside 1..=30.
    #[error("lunar day {0} outside 1..=30")]
    LunarDayOutOfRange(u8),
    /// Lunar month outside 1..=12.
    #[error("lunar month {0} outside 1..=12")]
    LunarMonthOutOfRange(u8),
    /// Bureau number outside 2..=6.
    #[error("bureau number {0} outside 2..=6")]
    BureauNumberOutOfRange(u8),
    /// Gender label other than male/female.
    #[error("unknown gender: {0:?}")]
    UnknownGender(String),
    /// Unsupported display locale tag.
    #[error("unknown locale: {0:?}")]
    UnknownLocale(String),
}

/// Result alias for base calculations.
pub type Result<T> = std::result::Result<T, BaziError>;
