//! Heavenly stems (天干).
//!
//! The 10 stems cycle 甲乙丙丁戊己庚辛壬癸. Odd positions (1st, 3rd, ...) are
//! yang; each consecutive pair shares an element.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};
use crate::error::BaziError;
use crate::locale::Locale;

/// The 10 heavenly stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in cycle order (index 0 = 甲).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

const STEM_SYMBOLS: [char; 10] = ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];

const STEM_PINYIN: [&str; 10] = [
    "Jia", "Yi", "Bing", "Ding", "Wu", "Ji", "Geng", "Xin", "Ren", "Gui",
];

impl Stem {
    /// 0-based index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Stem at a 0-based index, `None` outside 0..=9.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 10 {
            Some(ALL_STEMS[index as usize])
        } else {
            None
        }
    }

    /// Stem reached by moving `steps` positions through the cycle (mod 10).
    pub const fn offset(self, steps: i32) -> Self {
        let idx = (self.index() as i32 + steps).rem_euclid(10);
        ALL_STEMS[idx as usize]
    }

    /// The Chinese character of the stem.
    pub const fn symbol(self) -> char {
        STEM_SYMBOLS[self.index() as usize]
    }

    /// Pinyin romanization.
    pub const fn pinyin(self) -> &'static str {
        STEM_PINYIN[self.index() as usize]
    }

    /// Label in the requested locale (character or pinyin).
    pub fn label(self, locale: Locale) -> String {
        match locale {
            Locale::Zh => self.symbol().to_string(),
            Locale::En => self.pinyin().to_string(),
        }
    }

    /// Look up a stem by its character.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        STEM_SYMBOLS
            .iter()
            .position(|&c| c == symbol)
            .map(|i| ALL_STEMS[i])
    }

    /// Five-element assignment.
    pub const fn element(self) -> Element {
        match self {
            Self::Jia | Self::Yi => Element::Wood,
            Self::Bing | Self::Ding => Element::Fire,
            Self::Wu | Self::Ji => Element::Earth,
            Self::Geng | Self::Xin => Element::Metal,
            Self::Ren | Self::Gui => Element::Water,
        }
    }

    /// Yin/yang polarity.
    pub const fn polarity(self) -> Polarity {
        Polarity::from_ordinal(self.index())
    }

    pub const fn is_yang(self) -> bool {
        matches!(self.polarity(), Polarity::Yang)
    }

    /// Index (0..=4) of the combining pair this stem belongs to:
    /// 甲己, 乙庚, 丙辛, 丁壬, 戊癸.
    pub const fn pair_group(self) -> u8 {
        self.index() % 5
    }
}

impl Display for Stem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Stem {
    type Err = BaziError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(stem) = Self::from_symbol(c) {
                return Ok(stem);
            }
        }
        STEM_PINYIN
            .iter()
            .position(|p| p.eq_ignore_ascii_case(trimmed))
            .map(|i| ALL_STEMS[i])
            .ok_or_else(|| BaziError::UnknownStem(s.to_string()))
    }
}

impl TryFrom<String> for Stem {
    type Error = BaziError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Stem> for String {
    fn from(stem: Stem) -> Self {
        stem.symbol().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
            assert_eq!(Stem::from_index(i as u8), Some(*s));
        }
        assert_eq!(Stem::from_index(10), None);
    }

    #[test]
    fn symbols_round_trip() {
        for s in ALL_STEMS {
            assert_eq!(Stem::from_symbol(s.symbol()), Some(s));
        }
        assert_eq!(Stem::from_symbol('子'), None);
    }

    #[test]
    fn elements_pairwise() {
        assert_eq!(Stem::Jia.element(), Element::Wood);
        assert_eq!(Stem::Ding.element(), Element::Fire);
        assert_eq!(Stem::Ji.element(), Element::Earth);
        assert_eq!(Stem::Xin.element(), Element::Metal);
        assert_eq!(Stem::Ren.element(), Element::Water);
    }

    #[test]
    fn yang_stems() {
        let yang: Vec<Stem> = ALL_STEMS.into_iter().filter(|s| s.is_yang()).collect();
        assert_eq!(
            yang,
            vec![Stem::Jia, Stem::Bing, Stem::Wu, Stem::Geng, Stem::Ren]
        );
    }

    #[test]
    fn offset_wraps() {
        assert_eq!(Stem::Gui.offset(1), Stem::Jia);
        assert_eq!(Stem::Jia.offset(-1), Stem::Gui);
        assert_eq!(Stem::Bing.offset(23), Stem::Ji);
    }

    #[test]
    fn parse_symbol_and_pinyin() {
        assert_eq!("庚".parse::<Stem>().unwrap(), Stem::Geng);
        assert_eq!("geng".parse::<Stem>().unwrap(), Stem::Geng);
        assert!(matches!("x".parse::<Stem>(), Err(BaziError::UnknownStem(_))));
        assert!("甲乙".parse::<Stem>().is_err());
    }

    #[test]
    fn pair_groups() {
        assert_eq!(Stem::Jia.pair_group(), Stem::Ji.pair_group());
        assert_eq!(Stem::Wu.pair_group(), Stem::Gui.pair_group());
        assert_ne!(Stem::Jia.pair_group(), Stem::Yi.pair_group());
    }
}
