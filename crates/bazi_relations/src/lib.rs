//! Relation analysis (干支关系) for an 8-character BaZi chart.
//!
//! `analyze` returns typed findings in twelve categories; `report` renders
//! them as text for a chosen locale.

pub mod analyzer;
pub mod findings;
pub mod tables;

pub use analyzer::{BaziRelations, RelationsReport, analyze, arched_middle};
pub use findings::{
    ArmsLengthHarmony, BranchCombination, BranchPair, BranchTrio, HiddenArch, Placed, Punishment,
    StemCombination,
};
pub use tables::{Direction, clash_partner};
