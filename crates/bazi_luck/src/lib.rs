//! Luck-cycle (大运) and fleeting-year (流年) projection.
//!
//! This crate provides:
//! - Direction of travel from the year stem and gender
//! - Start age from the distance to the governing solar term
//! - Luck-cycle sequences stepped from the month pillar
//! - Cycle strength against the natal chart, NaYin and transitions
//! - Fleeting years inside a selected cycle
//! - Scoring of a fleeting year against its luck cycle
//!
//! Every projected pillar carries its stem and branch Ten Gods relative to
//! the day master.

pub mod cycles;
pub mod error;
pub mod fleeting;
pub mod period;
pub mod types;

pub use cycles::{active_cycle, luck_cycles, next_cycle, select_cycle, start_age_from_term_distance};
pub use error::{LuckError, Result};
pub use fleeting::{YearInteraction, fleeting_year, fleeting_years, year_interaction};
pub use period::{
    CycleTransition, Season, Significance, cycle_strength, cycle_transitions, seasonal_bonus,
};
pub use types::{
    DEFAULT_CYCLE_COUNT, Direction, FleetingYear, LuckCycle, LuckOptions, MAX_CYCLE_COUNT,
    MAX_START_AGE, PillarGods, Tendency, YEARS_PER_CYCLE,
};
