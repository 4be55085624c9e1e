//! Pillars, the 8-character input record and the assembled chart.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::element::Element;
use crate::error::{BaziError, Result};
use crate::ganzhi::GanZhi;
use crate::hidden_stems::{HiddenStem, hidden_stems};
use crate::locale::Locale;
use crate::stem::Stem;
use crate::ten_god::{TenGod, branch_ten_god, ten_god};

/// Position of a pillar within the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

/// The four positions in chart order.
pub const ALL_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Year,
    PillarPosition::Month,
    PillarPosition::Day,
    PillarPosition::Hour,
];

impl PillarPosition {
    pub const fn index(self) -> usize {
        match self {
            Self::Year => 0,
            Self::Month => 1,
            Self::Day => 2,
            Self::Hour => 3,
        }
    }

    /// Single-character Chinese name (年, 月, 日, 时).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "年",
            Self::Month => "月",
            Self::Day => "日",
            Self::Hour => "时",
        }
    }

    pub const fn label(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::Zh, _) => self.name(),
            (Locale::En, Self::Year) => "year",
            (Locale::En, Self::Month) => "month",
            (Locale::En, Self::Day) => "day",
            (Locale::En, Self::Hour) => "hour",
        }
    }
}

/// One pillar: a sexagenary term at a chart position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pillar {
    pub position: PillarPosition,
    pub ganzhi: GanZhi,
}

impl Pillar {
    pub const fn new(position: PillarPosition, ganzhi: GanZhi) -> Self {
        Self { position, ganzhi }
    }

    pub const fn stem(&self) -> Stem {
        self.ganzhi.stem()
    }

    pub const fn branch(&self) -> Branch {
        self.ganzhi.branch()
    }

    pub const fn stem_element(&self) -> Element {
        self.ganzhi.stem().element()
    }

    pub const fn branch_element(&self) -> Element {
        self.ganzhi.branch().element()
    }

    pub fn hidden_stems(&self) -> &'static [HiddenStem] {
        hidden_stems(self.branch())
    }

    pub const fn animal(&self) -> &'static str {
        self.ganzhi.branch().animal()
    }
}

/// The 8-character input record, in year/month/day/hour order.
///
/// Symbols are validated individually; stem/branch parity is not checked
/// here so that the relations analyzer stays total over any 8 symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaziInput {
    pub year_stem: Stem,
    pub year_branch: Branch,
    pub month_stem: Stem,
    pub month_branch: Branch,
    pub day_stem: Stem,
    pub day_branch: Branch,
    pub hour_stem: Stem,
    pub hour_branch: Branch,
}

impl BaziInput {
    /// Parse from exactly 8 symbols, alternating stem and branch.
    pub fn from_symbols<S: AsRef<str>>(symbols: &[S]) -> Result<Self> {
        if symbols.len() != 8 {
            return Err(BaziError::InputLength {
                expected: 8,
                actual: symbols.len(),
            });
        }
        let stem = |i: usize| symbols[i].as_ref().parse::<Stem>();
        let branch = |i: usize| symbols[i].as_ref().parse::<Branch>();
        Ok(Self {
            year_stem: stem(0)?,
            year_branch: branch(1)?,
            month_stem: stem(2)?,
            month_branch: branch(3)?,
            day_stem: stem(4)?,
            day_branch: branch(5)?,
            hour_stem: stem(6)?,
            hour_branch: branch(7)?,
        })
    }

    /// Stems in year/month/day/hour order.
    pub const fn stems(&self) -> [Stem; 4] {
        [self.year_stem, self.month_stem, self.day_stem, self.hour_stem]
    }

    /// Branches in year/month/day/hour order.
    pub const fn branches(&self) -> [Branch; 4] {
        [
            self.year_branch,
            self.month_branch,
            self.day_branch,
            self.hour_branch,
        ]
    }

    pub const fn day_master(&self) -> Stem {
        self.day_stem
    }
}

impl FromStr for BaziInput {
    type Err = BaziError;

    /// Parse an 8-character string such as "甲子乙丑丙寅丁卯". Whitespace is
    /// ignored.
    fn from_str(s: &str) -> Result<Self> {
        let symbols: Vec<String> = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(String::from)
            .collect();
        Self::from_symbols(&symbols)
    }
}

impl Display for BaziInput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let stems = self.stems();
        let branches = self.branches();
        for i in 0..4 {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}{}", stems[i], branches[i])?;
        }
        Ok(())
    }
}

/// A full chart of four parity-checked pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BaziChart {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl BaziChart {
    pub fn new(year: GanZhi, month: GanZhi, day: GanZhi, hour: GanZhi) -> Self {
        Self {
            year: Pillar::new(PillarPosition::Year, year),
            month: Pillar::new(PillarPosition::Month, month),
            day: Pillar::new(PillarPosition::Day, day),
            hour: Pillar::new(PillarPosition::Hour, hour),
        }
    }

    /// Build from an input record, rejecting any stem/branch pair of
    /// mismatched polarity.
    pub fn from_input(input: &BaziInput) -> Result<Self> {
        Ok(Self::new(
            GanZhi::new(input.year_stem, input.year_branch)?,
            GanZhi::new(input.month_stem, input.month_branch)?,
            GanZhi::new(input.day_stem, input.day_branch)?,
            GanZhi::new(input.hour_stem, input.hour_branch)?,
        ))
    }

    pub const fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    pub const fn pillar(&self, position: PillarPosition) -> Pillar {
        match position {
            PillarPosition::Year => self.year,
            PillarPosition::Month => self.month,
            PillarPosition::Day => self.day,
            PillarPosition::Hour => self.hour,
        }
    }

    pub const fn day_master(&self) -> Stem {
        self.day.stem()
    }

    pub const fn stems(&self) -> [Stem; 4] {
        [
            self.year.stem(),
            self.month.stem(),
            self.day.stem(),
            self.hour.stem(),
        ]
    }

    pub const fn branches(&self) -> [Branch; 4] {
        [
            self.year.branch(),
            self.month.branch(),
            self.day.branch(),
            self.hour.branch(),
        ]
    }

    pub const fn to_input(&self) -> BaziInput {
        BaziInput {
            year_stem: self.year.stem(),
            year_branch: self.year.branch(),
            month_stem: self.month.stem(),
            month_branch: self.month.branch(),
            day_stem: self.day.stem(),
            day_branch: self.day.branch(),
            hour_stem: self.hour.stem(),
            hour_branch: self.hour.branch(),
        }
    }

    /// Ten God of a pillar's stem; `None` for the day master itself.
    pub fn stem_ten_god(&self, position: PillarPosition) -> Option<TenGod> {
        match position {
            PillarPosition::Day => None,
            _ => Some(ten_god(self.day_master(), self.pillar(position).stem())),
        }
    }

    /// Ten God of a pillar's branch.
    pub fn branch_ten_god(&self, position: PillarPosition) -> TenGod {
        branch_ten_god(self.day_master(), self.pillar(position).branch())
    }

    /// Count of stems and branches per element, indexed by `Element::index`.
    pub fn element_counts(&self) -> [u8; 5] {
        let mut counts = [0u8; 5];
        for p in self.pillars() {
            counts[p.stem_element().index() as usize] += 1;
            counts[p.branch_element().index() as usize] += 1;
        }
        counts
    }
}

impl FromStr for BaziChart {
    type Err = BaziError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_input(&s.parse()?)
    }
}

impl Display for BaziChart {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_input())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_eight_characters() {
        let input: BaziInput = "甲子 乙丑 丙寅 丁卯".parse().unwrap();
        assert_eq!(input.year_stem, Stem::Jia);
        assert_eq!(input.hour_branch, Branch::Mao);
        assert_eq!(input.day_master(), Stem::Bing);
        assert_eq!(input.to_string(), "甲子 乙丑 丙寅 丁卯");
    }

    #[test]
    fn wrong_length_rejected() {
        assert_eq!(
            "甲子乙丑丙寅丁".parse::<BaziInput>(),
            Err(BaziError::InputLength {
                expected: 8,
                actual: 7
            })
        );
    }

    #[test]
    fn stem_in_branch_slot_rejected() {
        assert!(matches!(
            "甲甲乙丑丙寅丁卯".parse::<BaziInput>(),
            Err(BaziError::UnknownBranch(_))
        ));
    }

    #[test]
    fn input_allows_mismatched_parity_chart_does_not() {
        let input: BaziInput = "甲丑乙丑丙寅丁卯".parse().unwrap();
        assert!(matches!(
            BaziChart::from_input(&input),
            Err(BaziError::MismatchedGanZhi { .. })
        ));
    }

    #[test]
    fn chart_ten_gods() {
        let chart: BaziChart = "甲子丙寅庚午戊寅".parse().unwrap();
        assert_eq!(chart.day_master(), Stem::Geng);
        assert_eq!(chart.stem_ten_god(PillarPosition::Year), Some(TenGod::PianCai));
        assert_eq!(chart.stem_ten_god(PillarPosition::Month), Some(TenGod::QiSha));
        assert_eq!(chart.stem_ten_god(PillarPosition::Day), None);
        assert_eq!(chart.stem_ten_god(PillarPosition::Hour), Some(TenGod::PianYin));
        assert_eq!(chart.branch_ten_god(PillarPosition::Day), TenGod::ZhengGuan);
    }

    #[test]
    fn element_counts_total_eight() {
        let chart: BaziChart = "甲子丙寅庚午戊寅".parse().unwrap();
        let counts = chart.element_counts();
        assert_eq!(counts.iter().map(|&c| c as u32).sum::<u32>(), 8);
        // 甲 寅 寅 → three wood
        assert_eq!(counts[Element::Wood.index() as usize], 3);
    }

    #[test]
    fn input_serde_camel_case() {
        let input: BaziInput = "甲子乙丑丙寅丁卯".parse().unwrap();
        let json = serde_json::to_value(input).unwrap();
        assert_eq!(json["yearStem"], "甲");
        assert_eq!(json["hourBranch"], "卯");
        let back: BaziInput = serde_json::from_value(json).unwrap();
        assert_eq!(back, input);
    }
}
