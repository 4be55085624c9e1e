//! Luck-cycle sequence generation and selection.

use bazi_base::BaziChart;
use tracing::debug;

use crate::error::{LuckError, Result};
use crate::period::cycle_strength;
use crate::types::{
    DAYS_PER_START_YEAR, Direction, LuckCycle, LuckOptions, PillarGods, Tendency, YEARS_PER_CYCLE,
};

/// Start age from the distance in days between birth and the governing
/// solar term: three days per year, rounded down, never below 1.
pub const fn start_age_from_term_distance(days: u32) -> u32 {
    let age = days / DAYS_PER_START_YEAR;
    if age < 1 { 1 } else { age }
}

/// Project `options.count` luck cycles from the month pillar.
///
/// Cycle `i` (0-based) carries the month GanZhi stepped `i + 1` places in
/// the chart's direction, and spans ages `start + 10i ..= start + 10i + 9`.
/// Fails when the start age or count is out of range, or when the cycle
/// years overflow.
pub fn luck_cycles(chart: &BaziChart, options: &LuckOptions) -> Result<Vec<LuckCycle>> {
    options.validate()?;
    let direction = Direction::of(chart.year.stem(), options.gender);
    let day_master = chart.day_master();
    let month = chart.month.ganzhi;
    let year_at = |age: u32| {
        i32::try_from(age)
            .ok()
            .and_then(|a| options.birth_year.checked_add(a))
            .ok_or(LuckError::BirthYearOutOfRange(options.birth_year))
    };

    let mut cycles = Vec::with_capacity(options.count);
    for (i, number) in (0..options.count as u32).zip(1u8..) {
        let ganzhi = month.offset(direction.step() * (i as i64 + 1));
        let start_age = options.start_age + YEARS_PER_CYCLE * i;
        let end_age = start_age + YEARS_PER_CYCLE - 1;
        cycles.push(LuckCycle {
            number,
            ganzhi,
            element: ganzhi.stem().element(),
            nayin: ganzhi.nayin(),
            start_age,
            end_age,
            start_year: year_at(start_age)?,
            end_year: year_at(end_age)?,
            ten_gods: PillarGods::of(day_master, ganzhi),
            relationship: Tendency::of(day_master.element(), ganzhi.stem().element()),
            strength: cycle_strength(chart, ganzhi.stem()),
        });
    }

    debug!(
        direction = direction.name(),
        start_age = options.start_age,
        count = cycles.len(),
        "luck cycles projected"
    );
    Ok(cycles)
}

/// The cycle covering `age`.
pub fn active_cycle(cycles: &[LuckCycle], age: u32) -> Option<&LuckCycle> {
    cycles.iter().find(|c| c.contains_age(age))
}

/// The first cycle starting after `age`.
pub fn next_cycle(cycles: &[LuckCycle], age: u32) -> Option<&LuckCycle> {
    cycles.iter().find(|c| c.start_age > age)
}

/// Cycle at a 0-based index.
pub fn select_cycle(cycles: &[LuckCycle], index: usize) -> Option<&LuckCycle> {
    cycles.get(index)
}
