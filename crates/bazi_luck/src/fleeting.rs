//! Fleeting years (流年) inside a luck cycle, and how a year's pillar meets
//! the cycle's pillar.

use bazi_base::{BaziChart, Element, GanZhi, Locale, Stem};
use bazi_relations::tables::{clashes, six_harmony, stem_combination};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::types::{FleetingYear, LuckCycle, PillarGods, Tendency};

/// Neutral interaction strength before adjustments.
pub const BASE_INTERACTION_STRENGTH: i32 = 50;
const STEM_COMBINATION_BONUS: i32 = 15;
const BRANCH_CLASH_PENALTY: i32 = 20;
const SIX_HARMONY_BONUS: i32 = 10;
const MIN_STRENGTH: i32 = 10;
const MAX_STRENGTH: i32 = 100;

/// The pillar of `year` for a chart with the given day master.
pub fn fleeting_year(day_master: Stem, birth_year: i32, year: i32) -> FleetingYear {
    let ganzhi = GanZhi::of_year(year);
    FleetingYear {
        year,
        age: year - birth_year,
        ganzhi,
        ten_gods: PillarGods::of(day_master, ganzhi),
    }
}

/// One entry per calendar year of `cycle`.
pub fn fleeting_years(chart: &BaziChart, birth_year: i32, cycle: &LuckCycle) -> Vec<FleetingYear> {
    let day_master = chart.day_master();
    let years: Vec<FleetingYear> = (cycle.start_year..=cycle.end_year)
        .map(|y| fleeting_year(day_master, birth_year, y))
        .collect();
    trace!(cycle = cycle.number, years = years.len(), "fleeting years projected");
    years
}

/// A luck-cycle pillar meeting a fleeting-year pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearInteraction {
    /// 1-based number of the luck cycle.
    pub cycle_number: u8,
    pub cycle: GanZhi,
    pub year: GanZhi,
    /// Element when the two stems five-combine.
    pub stem_combination: Option<Element>,
    pub branch_clash: bool,
    /// Element when the two branches six-harmonize.
    pub branch_harmony: Option<Element>,
    pub tendency: Tendency,
    /// Clamped to 10..=100.
    pub strength: u8,
}

impl YearInteraction {
    /// Warning lines for combinations and clashes.
    pub fn warnings(&self, locale: Locale) -> Vec<String> {
        let (cs, ys) = (self.cycle.stem(), self.year.stem());
        let (cb, yb) = (self.cycle.branch(), self.year.branch());
        let mut out = Vec::new();
        if let Some(e) = self.stem_combination {
            out.push(match locale {
                Locale::Zh => format!("大运天干{cs}与流年天干{ys}化{}", e.name()),
                Locale::En => format!(
                    "cycle stem {} combines with year stem {} into {}",
                    cs.pinyin(),
                    ys.pinyin(),
                    e.english_name()
                ),
            });
        }
        if self.branch_clash {
            out.push(match locale {
                Locale::Zh => format!("大运地支{cb}与流年地支{yb}相冲"),
                Locale::En => format!(
                    "cycle branch {} clashes with year branch {}",
                    cb.pinyin(),
                    yb.pinyin()
                ),
            });
        }
        out
    }

    /// One-line summary: "1运遇甲辰年，有利发展。".
    pub fn describe(&self, locale: Locale) -> String {
        match locale {
            Locale::Zh => format!(
                "{}运遇{}年，{}。",
                self.cycle_number,
                self.year,
                self.tendency.name()
            ),
            Locale::En => format!(
                "cycle {} ({}) meets {} year: {}",
                self.cycle_number,
                self.cycle,
                self.year,
                self.tendency.label(locale)
            ),
        }
    }
}

/// Score how a fleeting year meets its luck cycle.
///
/// Starts at 50: +15 for a stem five-combination, -20 for a branch clash,
/// otherwise +10 for a six-harmony; clamped to 10..=100.
pub fn year_interaction(day_master: Stem, luck: &LuckCycle, year: GanZhi) -> YearInteraction {
    let cycle = luck.ganzhi;
    let stem_combo = stem_combination(cycle.stem(), year.stem());
    let clash = clashes(cycle.branch(), year.branch());
    let harmony = if clash {
        None
    } else {
        six_harmony(cycle.branch(), year.branch())
    };

    let mut strength = BASE_INTERACTION_STRENGTH;
    if stem_combo.is_some() {
        strength += STEM_COMBINATION_BONUS;
    }
    if clash {
        strength -= BRANCH_CLASH_PENALTY;
    } else if harmony.is_some() {
        strength += SIX_HARMONY_BONUS;
    }

    YearInteraction {
        cycle_number: luck.number,
        cycle,
        year,
        stem_combination: stem_combo,
        branch_clash: clash,
        branch_harmony: harmony,
        tendency: Tendency::of(day_master.element(), year.stem().element()),
        strength: strength.clamp(MIN_STRENGTH, MAX_STRENGTH) as u8,
    }
}
