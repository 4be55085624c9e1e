//! Twelve-palace layout: life and body palaces, palace stems and decades.
//!
//! Months count from 寅 (month 1) clockwise. The life palace counts the hour
//! back from the month palace, the body palace counts it forward. Hours use
//! the branch ordinal (子 = 0), so the month palace itself is the first step.

use std::fmt::{Display, Formatter};

use bazi_base::{ALL_BRANCHES, BaziError, Branch, Gender, Locale, Result, Stem, tiger_seed};
use serde::{Deserialize, Serialize};

use crate::bureau::FiveElementsBureau;

/// The twelve palaces, counter-clockwise from the life palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PalaceName {
    Life,
    Siblings,
    Spouse,
    Children,
    Wealth,
    Health,
    Travel,
    Friends,
    Career,
    Property,
    Fortune,
    Parents,
}

pub const ALL_PALACE_NAMES: [PalaceName; 12] = [
    PalaceName::Life,
    PalaceName::Siblings,
    PalaceName::Spouse,
    PalaceName::Children,
    PalaceName::Wealth,
    PalaceName::Health,
    PalaceName::Travel,
    PalaceName::Friends,
    PalaceName::Career,
    PalaceName::Property,
    PalaceName::Fortune,
    PalaceName::Parents,
];

impl PalaceName {
    pub const fn index(self) -> u8 {
        match self {
            Self::Life => 0,
            Self::Siblings => 1,
            Self::Spouse => 2,
            Self::Children => 3,
            Self::Wealth => 4,
            Self::Health => 5,
            Self::Travel => 6,
            Self::Friends => 7,
            Self::Career => 8,
            Self::Property => 9,
            Self::Fortune => 10,
            Self::Parents => 11,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Life => "命宫",
            Self::Siblings => "兄弟",
            Self::Spouse => "夫妻",
            Self::Children => "子女",
            Self::Wealth => "财帛",
            Self::Health => "疾厄",
            Self::Travel => "迁移",
            Self::Friends => "交友",
            Self::Career => "官禄",
            Self::Property => "田宅",
            Self::Fortune => "福德",
            Self::Parents => "父母",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Life => "Life",
            Self::Siblings => "Siblings",
            Self::Spouse => "Spouse",
            Self::Children => "Children",
            Self::Wealth => "Wealth",
            Self::Health => "Health",
            Self::Travel => "Travel",
            Self::Friends => "Friends",
            Self::Career => "Career",
            Self::Property => "Property",
            Self::Fortune => "Fortune",
            Self::Parents => "Parents",
        }
    }

    pub const fn label(self, locale: Locale) -> &'static str {
        match locale {
            Locale::Zh => self.name(),
            Locale::En => self.english_name(),
        }
    }

    /// Name of the palace at `branch` given the life palace.
    pub const fn at(life_palace: Branch, branch: Branch) -> Self {
        ALL_PALACE_NAMES[branch.distance_to(life_palace) as usize]
    }
}

impl Display for PalaceName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Branch of the month palace: 寅 for month 1, clockwise.
pub fn month_palace(lunar_month: u8) -> Result<Branch> {
    if !(1..=12).contains(&lunar_month) {
        return Err(BaziError::LunarMonthOutOfRange(lunar_month));
    }
    Ok(Branch::Yin.offset(lunar_month as i32 - 1))
}

/// Life palace (命宫): month palace, counted back by the hour ordinal.
pub fn life_palace(lunar_month: u8, hour: Branch) -> Result<Branch> {
    Ok(month_palace(lunar_month)?.offset(-(hour.index() as i32)))
}

/// Body palace (身宫): month palace, counted forward by the hour ordinal.
pub fn body_palace(lunar_month: u8, hour: Branch) -> Result<Branch> {
    Ok(month_palace(lunar_month)?.offset(hour.index() as i32))
}

/// Palace stems indexed by branch ordinal.
///
/// 寅 takes the Five-Tiger seed; 子 and 丑 repeat the stems of 寅 and 卯.
pub fn palace_stems(year_stem: Stem) -> [Stem; 12] {
    let seed = tiger_seed(year_stem);
    ALL_BRANCHES.map(|b| seed.offset(b.month_ordinal() as i32))
}

/// Age span governed by one palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecadeRange {
    /// Steps from the life palace in the direction of travel (0..=11).
    pub index: u8,
    pub start_age: u32,
    pub end_age: u32,
}

impl DecadeRange {
    pub fn contains(&self, age: u32) -> bool {
        (self.start_age..=self.end_age).contains(&age)
    }
}

impl Display for DecadeRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start_age, self.end_age)
    }
}

/// Decade governed by the palace at `branch`.
pub fn decade_range(
    bureau: FiveElementsBureau,
    life_palace: Branch,
    branch: Branch,
    forward: bool,
) -> DecadeRange {
    let steps = if forward {
        life_palace.distance_to(branch)
    } else {
        branch.distance_to(life_palace)
    };
    let start_age = bureau.number() as u32 + steps as u32 * 10;
    DecadeRange {
        index: steps,
        start_age,
        end_age: start_age + 9,
    }
}

/// One palace of the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palace {
    pub name: PalaceName,
    pub branch: Branch,
    pub stem: Stem,
    pub decade: DecadeRange,
    pub is_body_palace: bool,
    /// 来因宫: palace stem equals the year stem (子 and 丑 excluded).
    pub is_lai_yin: bool,
}

/// Build all twelve palaces in branch order (子 first).
pub fn palace_layout(
    year_stem: Stem,
    gender: Gender,
    bureau: FiveElementsBureau,
    life: Branch,
    body: Branch,
) -> [Palace; 12] {
    let stems = palace_stems(year_stem);
    let forward = gender.runs_forward(year_stem);
    ALL_BRANCHES.map(|branch| {
        let stem = stems[branch.index() as usize];
        Palace {
            name: PalaceName::at(life, branch),
            branch,
            stem,
            decade: decade_range(bureau, life, branch, forward),
            is_body_palace: branch == body,
            is_lai_yin: stem == year_stem && !matches!(branch, Branch::Zi | Branch::Chou),
        }
    })
}
