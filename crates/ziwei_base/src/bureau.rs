//! Five-Elements Bureau (五行局).
//!
//! The year stem selects one of five stem pairs (甲己, 乙庚, 丙辛, 丁壬, 戊癸)
//! and the life-palace branch one of six palace pairs (子丑, 寅卯, 辰巳, 午未,
//! 申酉, 戌亥). The 5×6 table below is the classical 纳音 assignment.

use std::fmt::{Display, Formatter};

use bazi_base::{BaziError, Branch, Element, Locale, Result, Stem};
use serde::{Deserialize, Serialize};

/// The five bureaus, named by element and number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FiveElementsBureau {
    /// 水二局
    Water2,
    /// 木三局
    Wood3,
    /// 金四局
    Metal4,
    /// 土五局
    Earth5,
    /// 火六局
    Fire6,
}

/// All bureaus in ascending number order.
pub const ALL_BUREAUS: [FiveElementsBureau; 5] = [
    FiveElementsBureau::Water2,
    FiveElementsBureau::Wood3,
    FiveElementsBureau::Metal4,
    FiveElementsBureau::Earth5,
    FiveElementsBureau::Fire6,
];

impl FiveElementsBureau {
    /// Bureau number (2..=6); also the starting age of the first decade.
    pub const fn number(self) -> u8 {
        match self {
            Self::Water2 => 2,
            Self::Wood3 => 3,
            Self::Metal4 => 4,
            Self::Earth5 => 5,
            Self::Fire6 => 6,
        }
    }

    /// Bureau for a raw number, `None` outside 2..=6.
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            2 => Some(Self::Water2),
            3 => Some(Self::Wood3),
            4 => Some(Self::Metal4),
            5 => Some(Self::Earth5),
            6 => Some(Self::Fire6),
            _ => None,
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Water2 => Element::Water,
            Self::Wood3 => Element::Wood,
            Self::Metal4 => Element::Metal,
            Self::Earth5 => Element::Earth,
            Self::Fire6 => Element::Fire,
        }
    }

    /// Chinese name, e.g. "水二局".
    pub const fn name(self) -> &'static str {
        match self {
            Self::Water2 => "水二局",
            Self::Wood3 => "木三局",
            Self::Metal4 => "金四局",
            Self::Earth5 => "土五局",
            Self::Fire6 => "火六局",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Water2 => "Water 2",
            Self::Wood3 => "Wood 3",
            Self::Metal4 => "Metal 4",
            Self::Earth5 => "Earth 5",
            Self::Fire6 => "Fire 6",
        }
    }

    pub const fn label(self, locale: Locale) -> &'static str {
        match locale {
            Locale::Zh => self.name(),
            Locale::En => self.english_name(),
        }
    }
}

impl Display for FiveElementsBureau {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

use FiveElementsBureau::{Earth5 as E5, Fire6 as F6, Metal4 as M4, Water2 as W2, Wood3 as T3};

/// Rows: stem pairs 甲己, 乙庚, 丙辛, 丁壬, 戊癸.
/// Columns: palace pairs 子丑, 寅卯, 辰巳, 午未, 申酉, 戌亥.
static BUREAU_TABLE: [[FiveElementsBureau; 6]; 5] = [
    [W2, F6, T3, E5, M4, F6],
    [F6, E5, M4, T3, W2, E5],
    [E5, T3, W2, M4, F6, T3],
    [T3, M4, F6, W2, E5, M4],
    [M4, W2, E5, F6, T3, W2],
];

/// Bureau for a year stem and life-palace branch.
pub fn five_elements_bureau(year_stem: Stem, life_palace: Branch) -> FiveElementsBureau {
    let row = year_stem.pair_group() as usize;
    let col = (life_palace.index() / 2) as usize;
    BUREAU_TABLE[row][col]
}

/// Bureau from raw symbols; unknown symbols are an error.
pub fn bureau_from_symbols(year_stem: &str, life_palace: &str) -> Result<FiveElementsBureau> {
    let stem: Stem = year_stem.parse()?;
    let branch: Branch = life_palace.parse()?;
    Ok(five_elements_bureau(stem, branch))
}

/// Bureau for a raw number, as an error when out of range.
pub fn bureau_from_number(number: u8) -> Result<FiveElementsBureau> {
    FiveElementsBureau::from_number(number).ok_or(BaziError::BureauNumberOutOfRange(number))
}
