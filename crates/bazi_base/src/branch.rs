//! Earthly branches (地支).
//!
//! The 12 branches sit on a circle 子丑寅卯辰巳午未申酉戌亥; ordinals 0..=11
//! drive all circular-distance arithmetic (clash partners sit 6 apart).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};
use crate::error::BaziError;
use crate::locale::Locale;

/// The 12 earthly branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in circle order (index 0 = 子).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

/// Month branches in calendar order, starting from the 寅 month.
pub const MONTH_ORDER: [Branch; 12] = [
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
    Branch::Zi,
    Branch::Chou,
];

const BRANCH_SYMBOLS: [char; 12] = [
    '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
];

const BRANCH_PINYIN: [&str; 12] = [
    "Zi", "Chou", "Yin", "Mao", "Chen", "Si", "Wu", "Wei", "Shen", "You", "Xu", "Hai",
];

const ANIMALS: [&str; 12] = [
    "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪",
];

const ANIMALS_EN: [&str; 12] = [
    "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey", "Rooster",
    "Dog", "Pig",
];

impl Branch {
    /// 0-based ordinal (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Branch at a 0-based ordinal, `None` outside 0..=11.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 12 {
            Some(ALL_BRANCHES[index as usize])
        } else {
            None
        }
    }

    /// Branch reached by moving `steps` positions clockwise (mod 12).
    pub const fn offset(self, steps: i32) -> Self {
        let idx = (self.index() as i32 + steps).rem_euclid(12);
        ALL_BRANCHES[idx as usize]
    }

    /// Clockwise distance from `self` to `other` (0..=11).
    pub const fn distance_to(self, other: Self) -> u8 {
        ((other.index() as i32 - self.index() as i32).rem_euclid(12)) as u8
    }

    /// The Chinese character of the branch.
    pub const fn symbol(self) -> char {
        BRANCH_SYMBOLS[self.index() as usize]
    }

    /// Pinyin romanization.
    pub const fn pinyin(self) -> &'static str {
        BRANCH_PINYIN[self.index() as usize]
    }

    /// Zodiac animal (生肖).
    pub const fn animal(self) -> &'static str {
        ANIMALS[self.index() as usize]
    }

    /// Zodiac animal in the requested locale.
    pub const fn animal_label(self, locale: Locale) -> &'static str {
        match locale {
            Locale::Zh => self.animal(),
            Locale::En => ANIMALS_EN[self.index() as usize],
        }
    }

    /// Label in the requested locale (character or pinyin).
    pub fn label(self, locale: Locale) -> String {
        match locale {
            Locale::Zh => self.symbol().to_string(),
            Locale::En => self.pinyin().to_string(),
        }
    }

    /// Look up a branch by its character.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        BRANCH_SYMBOLS
            .iter()
            .position(|&c| c == symbol)
            .map(|i| ALL_BRANCHES[i])
    }

    /// Five-element assignment.
    pub const fn element(self) -> Element {
        match self {
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Chen | Self::Xu | Self::Chou | Self::Wei => Element::Earth,
            Self::Shen | Self::You => Element::Metal,
            Self::Hai | Self::Zi => Element::Water,
        }
    }

    /// Yin/yang polarity.
    pub const fn polarity(self) -> Polarity {
        Polarity::from_ordinal(self.index())
    }

    /// Position in the 寅-first month order (寅=0 .. 丑=11).
    pub const fn month_ordinal(self) -> u8 {
        ((self.index() as i32 - 2).rem_euclid(12)) as u8
    }
}

impl Display for Branch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Branch {
    type Err = BaziError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(branch) = Self::from_symbol(c) {
                return Ok(branch);
            }
        }
        BRANCH_PINYIN
            .iter()
            .position(|p| p.eq_ignore_ascii_case(trimmed))
            .map(|i| ALL_BRANCHES[i])
            .ok_or_else(|| BaziError::UnknownBranch(s.to_string()))
    }
}

impl TryFrom<String> for Branch {
    type Error = BaziError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Branch> for String {
    fn from(branch: Branch) -> Self {
        branch.symbol().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
            assert_eq!(Branch::from_index(i as u8), Some(*b));
        }
        assert_eq!(Branch::from_index(12), None);
    }

    #[test]
    fn symbols_round_trip() {
        for b in ALL_BRANCHES {
            assert_eq!(Branch::from_symbol(b.symbol()), Some(b));
        }
        assert_eq!(Branch::from_symbol('甲'), None);
    }

    #[test]
    fn earth_branches() {
        let earth: Vec<Branch> = ALL_BRANCHES
            .into_iter()
            .filter(|b| b.element() == Element::Earth)
            .collect();
        assert_eq!(
            earth,
            vec![Branch::Chou, Branch::Chen, Branch::Wei, Branch::Xu]
        );
    }

    #[test]
    fn distance_is_clockwise() {
        assert_eq!(Branch::Zi.distance_to(Branch::Wu), 6);
        assert_eq!(Branch::Hai.distance_to(Branch::Chou), 2);
        assert_eq!(Branch::Chou.distance_to(Branch::Hai), 10);
        assert_eq!(Branch::Mao.distance_to(Branch::Mao), 0);
    }

    #[test]
    fn month_order_starts_at_yin() {
        for (i, b) in MONTH_ORDER.iter().enumerate() {
            assert_eq!(b.month_ordinal() as usize, i);
        }
    }

    #[test]
    fn animals() {
        assert_eq!(Branch::Chen.animal(), "龙");
        assert_eq!(Branch::Chen.animal_label(Locale::En), "Dragon");
    }

    #[test]
    fn parse_branch() {
        assert_eq!("酉".parse::<Branch>().unwrap(), Branch::You);
        assert_eq!("hai".parse::<Branch>().unwrap(), Branch::Hai);
        assert!(matches!(
            "甲".parse::<Branch>(),
            Err(BaziError::UnknownBranch(_))
        ));
    }
}
