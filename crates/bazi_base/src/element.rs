//! Five elements (五行) and yin/yang polarity.
//!
//! The generating cycle runs 木→火→土→金→水→木; the controlling cycle
//! runs 木→土→水→火→金→木.

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// The five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All 5 elements in generating-cycle order (index 0 = Wood).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// Chinese name (木, 火, 土, 金, 水).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// English name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Name in the requested locale.
    pub const fn label(self, locale: Locale) -> &'static str {
        match locale {
            Locale::Zh => self.name(),
            Locale::En => self.english_name(),
        }
    }

    /// 0-based index in generating-cycle order.
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Element produced by this one (相生).
    pub const fn generates(self) -> Self {
        ALL_ELEMENTS[((self.index() + 1) % 5) as usize]
    }

    /// Element controlled by this one (相克).
    pub const fn controls(self) -> Self {
        ALL_ELEMENTS[((self.index() + 2) % 5) as usize]
    }
}

/// Yin/yang polarity of a stem or branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// Chinese name (阳 / 阴).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "阳",
            Self::Yin => "阴",
        }
    }

    /// Name in the requested locale.
    pub const fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (_, Locale::Zh) => self.name(),
            (Self::Yang, Locale::En) => "Yang",
            (Self::Yin, Locale::En) => "Yin",
        }
    }

    /// Polarity of an ordinal in a stem or branch cycle (even = yang).
    pub const fn from_ordinal(ordinal: u8) -> Self {
        if ordinal % 2 == 0 { Self::Yang } else { Self::Yin }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generating_cycle_closes() {
        let mut e = Element::Wood;
        for _ in 0..5 {
            e = e.generates();
        }
        assert_eq!(e, Element::Wood);
        assert_eq!(Element::Water.generates(), Element::Wood);
    }

    #[test]
    fn controlling_cycle() {
        assert_eq!(Element::Wood.controls(), Element::Earth);
        assert_eq!(Element::Earth.controls(), Element::Water);
        assert_eq!(Element::Water.controls(), Element::Fire);
        assert_eq!(Element::Fire.controls(), Element::Metal);
        assert_eq!(Element::Metal.controls(), Element::Wood);
    }

    #[test]
    fn polarity_from_ordinal() {
        assert_eq!(Polarity::from_ordinal(0), Polarity::Yang);
        assert_eq!(Polarity::from_ordinal(7), Polarity::Yin);
    }
}
