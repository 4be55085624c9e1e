//! Core types for luck-cycle and fleeting-year projection.
//!
//! A luck cycle (大运) is a ten-year pillar stepped from the month pillar
//! through the sexagenary cycle. A fleeting year (流年) is the pillar of a
//! single calendar year inside one luck cycle.

use bazi_base::{
    Element, Gender, GanZhi, Locale, NaYin, Stem, TenGod, branch_ten_god, ten_god,
};
use serde::{Deserialize, Serialize};

use crate::error::{LuckError, Result};

/// Years governed by one luck cycle.
pub const YEARS_PER_CYCLE: u32 = 10;

/// Default number of luck cycles to project.
pub const DEFAULT_CYCLE_COUNT: usize = 8;

/// Largest number of cycles projected at once.
pub const MAX_CYCLE_COUNT: usize = 12;

/// Largest accepted age for the first cycle.
pub const MAX_START_AGE: u32 = 120;

/// Days of distance to the governing solar term per year of start age.
pub const DAYS_PER_START_YEAR: u32 = 3;

/// Direction of travel through the sexagenary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// 顺行
    Forward,
    /// 逆行
    Backward,
}

impl Direction {
    /// Forward for yang-year male or yin-year female.
    pub const fn of(year_stem: Stem, gender: Gender) -> Self {
        if gender.runs_forward(year_stem) {
            Self::Forward
        } else {
            Self::Backward
        }
    }

    /// +1 or -1.
    pub const fn step(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Forward => "顺行",
            Self::Backward => "逆行",
        }
    }

    pub const fn label(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::Zh, _) => self.name(),
            (Locale::En, Self::Forward) => "forward",
            (Locale::En, Self::Backward) => "backward",
        }
    }
}

/// Ten Gods of a projected pillar relative to the day master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PillarGods {
    pub stem: TenGod,
    /// Ten God of the branch's primary hidden stem.
    pub branch: TenGod,
}

impl PillarGods {
    pub fn of(day_master: Stem, ganzhi: GanZhi) -> Self {
        Self {
            stem: ten_god(day_master, ganzhi.stem()),
            branch: branch_ten_god(day_master, ganzhi.branch()),
        }
    }
}

/// How a projected stem's element bears on the day master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tendency {
    /// Same element or producing the day master.
    Favorable,
    /// Controlling the day master.
    Unfavorable,
    Neutral,
}

impl Tendency {
    pub const fn of(day_master: Element, other: Element) -> Self {
        if other.index() == day_master.index() || other.generates().index() == day_master.index()
        {
            Self::Favorable
        } else if other.controls().index() == day_master.index() {
            Self::Unfavorable
        } else {
            Self::Neutral
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Favorable => "有利发展",
            Self::Unfavorable => "需要谨慎",
            Self::Neutral => "平稳过渡",
        }
    }

    /// Two-character form (有利, 不利, 中性).
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Favorable => "有利",
            Self::Unfavorable => "不利",
            Self::Neutral => "中性",
        }
    }

    pub const fn label(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::Zh, _) => self.name(),
            (Locale::En, Self::Favorable) => "favorable",
            (Locale::En, Self::Unfavorable) => "unfavorable",
            (Locale::En, Self::Neutral) => "neutral",
        }
    }
}

/// One ten-year luck cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LuckCycle {
    /// 1-based order of the cycle.
    pub number: u8,
    pub ganzhi: GanZhi,
    /// Element of the cycle stem.
    pub element: Element,
    pub nayin: NaYin,
    pub start_age: u32,
    pub end_age: u32,
    pub start_year: i32,
    pub end_year: i32,
    pub ten_gods: PillarGods,
    /// Cycle stem against the day master.
    pub relationship: Tendency,
    /// Clamped to 10..=100.
    pub strength: u8,
}

impl LuckCycle {
    pub fn contains_age(&self, age: u32) -> bool {
        (self.start_age..=self.end_age).contains(&age)
    }

    pub fn contains_year(&self, year: i32) -> bool {
        (self.start_year..=self.end_year).contains(&year)
    }

    /// "第1步大运：丁卯，五行属火，纳音炉中火。"
    pub fn describe(&self, locale: Locale) -> String {
        match locale {
            Locale::Zh => format!(
                "第{}步大运：{}，五行属{}，纳音{}。",
                self.number,
                self.ganzhi,
                self.element.name(),
                self.nayin.name()
            ),
            Locale::En => format!(
                "Cycle {}: {}-{}, {} stem, NaYin {}",
                self.number,
                self.ganzhi.stem().pinyin(),
                self.ganzhi.branch().pinyin(),
                self.element.english_name(),
                self.nayin.english_name()
            ),
        }
    }
}

/// The pillar of one calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetingYear {
    pub year: i32,
    /// Year minus birth year.
    pub age: i32,
    pub ganzhi: GanZhi,
    pub ten_gods: PillarGods,
}

/// Parameters of a luck-cycle projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LuckOptions {
    pub gender: Gender,
    pub birth_year: i32,
    /// Age at which the first cycle begins.
    pub start_age: u32,
    pub count: usize,
}

impl LuckOptions {
    pub const fn new(gender: Gender, birth_year: i32, start_age: u32) -> Self {
        Self {
            gender,
            birth_year,
            start_age,
            count: DEFAULT_CYCLE_COUNT,
        }
    }

    pub const fn with_count(self, count: usize) -> Self {
        Self { count, ..self }
    }

    /// Start age within 0..=120 and count within 1..=12.
    pub fn validate(&self) -> Result<()> {
        if self.start_age > MAX_START_AGE {
            return Err(LuckError::StartAgeOutOfRange(self.start_age));
        }
        if self.count == 0 || self.count > MAX_CYCLE_COUNT {
            return Err(LuckError::CycleCountOutOfRange(self.count));
        }
        Ok(())
    }
}
