//! Ten-God strength and six-capability assessment.
//!
//! This crate provides:
//! - Seasonally weighted Ten-God strengths of a chart
//! - Pattern (格局) detection from the strength distribution
//! - Scores for execution, innovation, management, sales, coordination
//!   and stability, with polarization
//!
//! Scoring parameters live in [`CapabilityConfig`] and can be loaded from
//! the `[capability]` table of the workspace configuration file.

pub mod capability;
pub mod error;
pub mod pattern;
pub mod scorer;
pub mod strength;

pub use capability::{ALL_CAPABILITIES, CAPABILITY_WEIGHTS, Capability};
pub use error::{CapabilityError, Result};
pub use pattern::{Pattern, PatternDetection, detect_pattern};
pub use scorer::{
    CapabilityAssessment, CapabilityConfig, CapabilityScore, Contribution, Polarization, assess,
    score_strengths,
};
pub use strength::{SEASONAL_MATRIX, TenGodStrengths, seasonal_factors, ten_god_strengths};
