//! Error types for luck-cycle projection.

use thiserror::Error;

use crate::types::{MAX_CYCLE_COUNT, MAX_START_AGE};

/// Projection parameters outside the supported range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LuckError {
    #[error("start age {0} outside 0..={MAX_START_AGE}")]
    StartAgeOutOfRange(u32),
    #[error("cycle count {0} outside 1..={MAX_CYCLE_COUNT}")]
    CycleCountOutOfRange(usize),
    /// Birth year plus a cycle age leaves the representable year range.
    #[error("birth year {0} cannot be projected")]
    BirthYearOutOfRange(i32),
}

/// Result alias for luck projection.
pub type Result<T> = std::result::Result<T, LuckError>;
