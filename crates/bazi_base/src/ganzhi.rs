//! Sexagenary cycle (六十甲子).
//!
//! Stems advance mod 10 and branches mod 12 in lockstep, so only the 60
//! pairs of equal polarity occur. Index 0 is 甲子, 59 is 癸亥.
//!
//! Reference epoch: CE 4 = 甲子 year, so year Y maps to index (Y - 4) mod 60.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::error::{BaziError, Result};
use crate::stem::Stem;

/// Reference epoch: CE 4 is a 甲子 year.
pub const GANZHI_EPOCH_YEAR: i32 = 4;

/// A stem/branch pair that occurs in the 60-term cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GanZhi {
    stem: Stem,
    branch: Branch,
}

impl GanZhi {
    /// 甲子, the first term of the cycle.
    pub const JIAZI: Self = Self {
        stem: Stem::Jia,
        branch: Branch::Zi,
    };

    /// Pair a stem with a branch. Fails when their polarities differ.
    pub fn new(stem: Stem, branch: Branch) -> Result<Self> {
        if stem.index() % 2 != branch.index() % 2 {
            return Err(BaziError::MismatchedGanZhi { stem, branch });
        }
        Ok(Self { stem, branch })
    }

    /// Term at a cycle index, `None` outside 0..=59.
    pub const fn from_cycle_index(index: u8) -> Option<Self> {
        if index >= 60 {
            return None;
        }
        Some(Self::from_cycle_index_wrapping(index as i64))
    }

    /// Term at any integer position, wrapped into the cycle.
    pub const fn from_cycle_index_wrapping(index: i64) -> Self {
        let i = index.rem_euclid(60);
        match (Stem::from_index((i % 10) as u8), Branch::from_index((i % 12) as u8)) {
            (Some(stem), Some(branch)) => Self { stem, branch },
            _ => Self::JIAZI,
        }
    }

    /// Term of a calendar year (the year boundary is the caller's concern).
    pub const fn of_year(year: i32) -> Self {
        Self::from_cycle_index_wrapping(year as i64 - GANZHI_EPOCH_YEAR as i64)
    }

    /// 0-based position in the cycle (甲子=0 .. 癸亥=59).
    pub const fn cycle_index(self) -> u8 {
        // i ≡ s (mod 10), i ≡ b (mod 12) → i = 6s - 5b (mod 60)
        let s = self.stem.index() as i32;
        let b = self.branch.index() as i32;
        (6 * s - 5 * b).rem_euclid(60) as u8
    }

    /// Term reached by moving `steps` positions through the cycle.
    pub const fn offset(self, steps: i64) -> Self {
        Self::from_cycle_index_wrapping(self.cycle_index() as i64 + steps)
    }

    pub const fn stem(self) -> Stem {
        self.stem
    }

    pub const fn branch(self) -> Branch {
        self.branch
    }

    /// Two-character name, e.g. "甲子".
    pub fn name(self) -> String {
        format!("{}{}", self.stem.symbol(), self.branch.symbol())
    }
}

impl Display for GanZhi {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

impl FromStr for GanZhi {
    type Err = BaziError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != 2 {
            return Err(BaziError::InputLength {
                expected: 2,
                actual: chars.len(),
            });
        }
        let stem = Stem::from_symbol(chars[0])
            .ok_or_else(|| BaziError::UnknownStem(chars[0].to_string()))?;
        let branch = Branch::from_symbol(chars[1])
            .ok_or_else(|| BaziError::UnknownBranch(chars[1].to_string()))?;
        Self::new(stem, branch)
    }
}

impl TryFrom<String> for GanZhi {
    type Error = BaziError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<GanZhi> for String {
    fn from(gz: GanZhi) -> Self {
        gz.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_round_trip() {
        for i in 0..60u8 {
            let gz = GanZhi::from_cycle_index(i).unwrap();
            assert_eq!(gz.cycle_index(), i);
        }
        assert_eq!(GanZhi::from_cycle_index(60), None);
    }

    #[test]
    fn known_terms() {
        assert_eq!(GanZhi::from_cycle_index(0).unwrap().name(), "甲子");
        assert_eq!(GanZhi::from_cycle_index(10).unwrap().name(), "甲戌");
        assert_eq!(GanZhi::from_cycle_index(59).unwrap().name(), "癸亥");
    }

    #[test]
    fn mismatched_parity_rejected() {
        assert_eq!(
            GanZhi::new(Stem::Jia, Branch::Chou),
            Err(BaziError::MismatchedGanZhi {
                stem: Stem::Jia,
                branch: Branch::Chou
            })
        );
    }

    #[test]
    fn years() {
        assert_eq!(GanZhi::of_year(1984).name(), "甲子");
        assert_eq!(GanZhi::of_year(2024).name(), "甲辰");
        assert_eq!(GanZhi::of_year(1998).name(), "戊寅");
        assert_eq!(GanZhi::of_year(3).name(), "癸亥");
    }

    #[test]
    fn offset_wraps_both_ways() {
        let gz: GanZhi = "癸亥".parse().unwrap();
        assert_eq!(gz.offset(1), GanZhi::JIAZI);
        assert_eq!(GanZhi::JIAZI.offset(-1), gz);
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            "甲".parse::<GanZhi>(),
            Err(BaziError::InputLength { .. })
        ));
        assert!(matches!(
            "甲丑".parse::<GanZhi>(),
            Err(BaziError::MismatchedGanZhi { .. })
        ));
        assert!(matches!(
            "子甲".parse::<GanZhi>(),
            Err(BaziError::UnknownStem(_))
        ));
    }

    #[test]
    fn serde_uses_symbols() {
        let gz: GanZhi = "丙午".parse().unwrap();
        let json = serde_json::to_string(&gz).unwrap();
        assert_eq!(json, "\"丙午\"");
        assert!(serde_json::from_str::<GanZhi>("\"丙未\"").is_err());
    }
}
