//! Cycle strength against the natal chart, and transitions between
//! consecutive cycles.

use bazi_base::{BaziChart, Branch, Element, Locale, Stem};
use serde::{Deserialize, Serialize};

use crate::types::{LuckCycle, Tendency};

/// Cycle strength before adjustments.
pub const BASE_CYCLE_STRENGTH: i32 = 50;
const FAVORABLE_BONUS: i32 = 30;
const UNFAVORABLE_PENALTY: i32 = 20;
const MONTH_ELEMENT_BONUS: i32 = 15;

/// Season of a month branch. The four 库 months form their own season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
    /// 辰, 未, 戌 and 丑.
    EarthMonth,
}

impl Season {
    pub const fn of(month_branch: Branch) -> Self {
        match month_branch {
            Branch::Yin | Branch::Mao => Self::Spring,
            Branch::Si | Branch::Wu => Self::Summer,
            Branch::Shen | Branch::You => Self::Autumn,
            Branch::Hai | Branch::Zi => Self::Winter,
            Branch::Chen | Branch::Wei | Branch::Xu | Branch::Chou => Self::EarthMonth,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Spring => "春",
            Self::Summer => "夏",
            Self::Autumn => "秋",
            Self::Winter => "冬",
            Self::EarthMonth => "土月",
        }
    }

    pub const fn label(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::Zh, _) => self.name(),
            (Locale::En, Self::Spring) => "spring",
            (Locale::En, Self::Summer) => "summer",
            (Locale::En, Self::Autumn) => "autumn",
            (Locale::En, Self::Winter) => "winter",
            (Locale::En, Self::EarthMonth) => "earth month",
        }
    }
}

/// Seasonal adjustment, rows by element (木火土金水), columns by season.
const SEASONAL_BONUS: [[i32; 5]; 5] = [
    [20, 10, -10, 5, -5],
    [10, 20, -5, -10, 5],
    [-5, 5, 10, -5, 20],
    [-10, -5, 20, 10, 5],
    [5, -10, 10, 20, -5],
];

pub const fn seasonal_bonus(element: Element, season: Season) -> i32 {
    SEASONAL_BONUS[element.index() as usize][season.index()]
}

/// Strength of a cycle stem in a natal chart.
///
/// Starts at 50: +30 when favorable to the day master, -20 when
/// unfavorable, +15 when it shares the month stem's element, plus the
/// seasonal adjustment of the month branch; clamped to 10..=100.
pub fn cycle_strength(chart: &BaziChart, stem: Stem) -> u8 {
    let element = stem.element();
    let mut strength = BASE_CYCLE_STRENGTH;
    match Tendency::of(chart.day_master().element(), element) {
        Tendency::Favorable => strength += FAVORABLE_BONUS,
        Tendency::Unfavorable => strength -= UNFAVORABLE_PENALTY,
        Tendency::Neutral => {}
    }
    if chart.month.stem_element() == element {
        strength += MONTH_ELEMENT_BONUS;
    }
    strength += seasonal_bonus(element, Season::of(chart.month.branch()));
    strength.clamp(10, 100) as u8
}

/// How much changes between two consecutive cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Significance {
    /// Element and relationship both change.
    Major,
    /// Element or stem Ten God changes.
    Moderate,
    Minor,
}

impl Significance {
    pub const fn label(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::Zh, Self::Major) => "重大",
            (Locale::Zh, Self::Moderate) => "中等",
            (Locale::Zh, Self::Minor) => "轻微",
            (Locale::En, Self::Major) => "major",
            (Locale::En, Self::Moderate) => "moderate",
            (Locale::En, Self::Minor) => "minor",
        }
    }
}

/// Hand-over from one cycle to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleTransition {
    pub from: LuckCycle,
    pub to: LuckCycle,
    /// Start age of the incoming cycle.
    pub age: u32,
    pub significance: Significance,
}

impl CycleTransition {
    pub fn between(from: &LuckCycle, to: &LuckCycle) -> Self {
        let element_change = from.element != to.element;
        let god_change = from.ten_gods.stem != to.ten_gods.stem;
        let relationship_change = from.relationship != to.relationship;
        let significance = if element_change && relationship_change {
            Significance::Major
        } else if element_change || god_change {
            Significance::Moderate
        } else {
            Significance::Minor
        };
        Self {
            from: *from,
            to: *to,
            age: to.start_age,
            significance,
        }
    }

    pub fn describe(&self, locale: Locale) -> String {
        match (locale, self.significance) {
            (Locale::Zh, Significance::Major) => format!(
                "从{}转向{}，运势性质从{}转为{}，是重要转折点。",
                self.from.element.name(),
                self.to.element.name(),
                self.from.relationship.short_name(),
                self.to.relationship.short_name()
            ),
            (Locale::Zh, Significance::Moderate) => "运势特质发生变化，需要调整应对策略。".into(),
            (Locale::Zh, Significance::Minor) => "运势延续，保持稳定发展。".into(),
            (Locale::En, Significance::Major) => format!(
                "turns from {} to {}, from {} to {}: a key turning point",
                self.from.element.english_name(),
                self.to.element.english_name(),
                self.from.relationship.label(locale),
                self.to.relationship.label(locale)
            ),
            (Locale::En, Significance::Moderate) => {
                "the character of the period changes; adjust accordingly".into()
            }
            (Locale::En, Significance::Minor) => "the trend continues steadily".into(),
        }
    }
}

/// Transitions between each pair of consecutive cycles.
pub fn cycle_transitions(cycles: &[LuckCycle]) -> Vec<CycleTransition> {
    cycles
        .windows(2)
        .map(|w| CycleTransition::between(&w[0], &w[1]))
        .collect()
}
