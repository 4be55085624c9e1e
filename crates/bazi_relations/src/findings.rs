//! Typed relation findings and their localized descriptions.
//!
//! Findings carry positions and symbols only. Text is produced by
//! `describe`, which reproduces the traditional Chinese phrasing for
//! `Locale::Zh` and an English gloss for `Locale::En`.

use bazi_base::{Branch, Element, Locale, PillarPosition, Stem};
use serde::{Deserialize, Serialize};

use crate::tables::Direction;

/// A symbol at a pillar position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placed<T> {
    pub position: PillarPosition,
    pub value: T,
}

impl<T> Placed<T> {
    pub const fn new(position: PillarPosition, value: T) -> Self {
        Self { position, value }
    }
}

/// Two stems of a five-combination (天干五合).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemCombination {
    pub first: Placed<Stem>,
    pub second: Placed<Stem>,
    pub element: Element,
}

/// Two branches at their positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchPair {
    pub first: Placed<Branch>,
    pub second: Placed<Branch>,
}

/// A branch pair that combines into an element (六合, 半合).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchCombination {
    pub pair: BranchPair,
    pub element: Element,
}

/// Two outer branches arching the absent center (拱合).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmsLengthHarmony {
    pub pair: BranchPair,
    pub center: Branch,
    pub element: Element,
}

/// Three branches present together (三会, 三合).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchTrio {
    pub branches: [Branch; 3],
    pub element: Element,
    /// Set for seasonal meetings only.
    pub direction: Option<Direction>,
}

/// Punishment (刑) patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Punishment {
    /// 子卯刑
    ZiMao,
    /// 寅巳申三刑
    YinSiShen,
    /// 丑戌未三刑
    ChouXuWei,
    /// 自刑 of a doubled branch.
    SelfPunishment(Branch),
}

/// Adjacent pillars with equal stems whose branches arch a middle branch (暗拱).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiddenArch {
    pub first: PillarPosition,
    pub second: PillarPosition,
    pub middle: Branch,
}

fn stem_label(p: Placed<Stem>, locale: Locale) -> String {
    match locale {
        Locale::Zh => format!("{}干{}", p.position.name(), p.value),
        Locale::En => format!("{} stem {}", p.position.label(locale), p.value.pinyin()),
    }
}

fn branch_label(p: Placed<Branch>, locale: Locale) -> String {
    match locale {
        Locale::Zh => format!("{}支{}", p.position.name(), p.value),
        Locale::En => format!("{} branch {}", p.position.label(locale), p.value.pinyin()),
    }
}

fn joined(branches: &[Branch], locale: Locale) -> String {
    match locale {
        Locale::Zh => branches.iter().map(|b| b.symbol()).collect(),
        Locale::En => branches
            .iter()
            .map(|b| b.pinyin())
            .collect::<Vec<_>>()
            .join("-"),
    }
}

impl StemCombination {
    pub fn describe(&self, locale: Locale) -> String {
        let (a, b) = (stem_label(self.first, locale), stem_label(self.second, locale));
        match locale {
            Locale::Zh => format!("{a}与{b}合{}", self.element.name()),
            Locale::En => format!("{a} combines with {b} into {}", self.element.english_name()),
        }
    }
}

impl BranchPair {
    pub const fn branches(&self) -> [Branch; 2] {
        [self.first.value, self.second.value]
    }

    /// Positional form: "年支子与月支午相冲".
    fn describe_positional(
        &self,
        zh_suffix: &str,
        en_verb: &str,
        en_tail: &str,
        locale: Locale,
    ) -> String {
        let (a, b) = (branch_label(self.first, locale), branch_label(self.second, locale));
        match locale {
            Locale::Zh => format!("{a}与{b}{zh_suffix}"),
            Locale::En => format!("{a} {en_verb} {b}{en_tail}"),
        }
    }

    /// Bare form: "子酉相破".
    fn describe_bare(&self, zh_suffix: &str, en_noun: &str, locale: Locale) -> String {
        let names = joined(&self.branches(), locale);
        match locale {
            Locale::Zh => format!("{names}{zh_suffix}"),
            Locale::En => format!("{names} {en_noun}"),
        }
    }

    pub fn describe_clash(&self, locale: Locale) -> String {
        self.describe_positional("相冲", "clashes with", "", locale)
    }

    pub fn describe_piercing(&self, locale: Locale) -> String {
        self.describe_positional("相穿", "pierces", "", locale)
    }

    pub fn describe_break(&self, locale: Locale) -> String {
        self.describe_bare("相破", "break", locale)
    }

    pub fn describe_extinction(&self, locale: Locale) -> String {
        self.describe_bare("相绝", "extinction", locale)
    }
}

impl BranchCombination {
    pub fn describe_six_harmony(&self, locale: Locale) -> String {
        let zh = format!("合{}", self.element.name());
        let en = format!(" into {}", self.element.english_name());
        self.pair.describe_positional(&zh, "combines with", &en, locale)
    }

    pub fn describe_half_harmony(&self, locale: Locale) -> String {
        let zh = format!("半合{}", self.element.name());
        let en = format!(" into {}", self.element.english_name());
        self.pair.describe_positional(&zh, "half-combines with", &en, locale)
    }
}

impl ArmsLengthHarmony {
    pub fn describe(&self, locale: Locale) -> String {
        let names = joined(&self.pair.branches(), locale);
        match locale {
            Locale::Zh => format!("{names}拱{}合{}", self.center, self.element.name()),
            Locale::En => format!(
                "{names} arch {}, combining into {}",
                self.center.pinyin(),
                self.element.english_name()
            ),
        }
    }
}

impl BranchTrio {
    pub fn describe(&self, locale: Locale) -> String {
        let names = joined(&self.branches, locale);
        match (locale, self.direction) {
            (Locale::Zh, Some(d)) => format!("{names}会{}{}", d.name(), self.element.name()),
            (Locale::Zh, None) => format!("{names}合{}", self.element.name()),
            (Locale::En, Some(d)) => format!(
                "{names} meet as {} {}",
                d.english_name(),
                self.element.english_name()
            ),
            (Locale::En, None) => {
                format!("{names} combine into {}", self.element.english_name())
            }
        }
    }
}

impl Punishment {
    pub fn describe(&self, locale: Locale) -> String {
        match (locale, self) {
            (Locale::Zh, Self::ZiMao) => "子卯刑".to_string(),
            (Locale::Zh, Self::YinSiShen) => "寅巳申三刑".to_string(),
            (Locale::Zh, Self::ChouXuWei) => "丑戌未三刑".to_string(),
            (Locale::Zh, Self::SelfPunishment(b)) => format!("{b}自刑"),
            (Locale::En, Self::ZiMao) => "Zi-Mao punishment".to_string(),
            (Locale::En, Self::YinSiShen) => "Yin-Si-Shen triple punishment".to_string(),
            (Locale::En, Self::ChouXuWei) => "Chou-Xu-Wei triple punishment".to_string(),
            (Locale::En, Self::SelfPunishment(b)) => format!("{} self-punishment", b.pinyin()),
        }
    }
}

impl HiddenArch {
    pub fn describe(&self, locale: Locale) -> String {
        match locale {
            Locale::Zh => format!(
                "{}{}拱出{}",
                self.first.name(),
                self.second.name(),
                self.middle
            ),
            Locale::En => format!(
                "{}-{} pillars arch {}",
                self.first.label(locale),
                self.second.label(locale),
                self.middle.pinyin()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(a: (PillarPosition, Branch), b: (PillarPosition, Branch)) -> BranchPair {
        BranchPair {
            first: Placed::new(a.0, a.1),
            second: Placed::new(b.0, b.1),
        }
    }

    #[test]
    fn chinese_phrasing() {
        let combo = StemCombination {
            first: Placed::new(PillarPosition::Year, Stem::Jia),
            second: Placed::new(PillarPosition::Month, Stem::Ji),
            element: Element::Earth,
        };
        assert_eq!(combo.describe(Locale::Zh), "年干甲与月干己合土");

        let p = pair(
            (PillarPosition::Year, Branch::Zi),
            (PillarPosition::Day, Branch::Wu),
        );
        assert_eq!(p.describe_clash(Locale::Zh), "年支子与日支午相冲");
        assert_eq!(p.describe_break(Locale::Zh), "子午相破");

        let half = BranchCombination {
            pair: pair(
                (PillarPosition::Month, Branch::Yin),
                (PillarPosition::Hour, Branch::Wu),
            ),
            element: Element::Fire,
        };
        assert_eq!(half.describe_half_harmony(Locale::Zh), "月支寅与时支午半合火");

        let arch = HiddenArch {
            first: PillarPosition::Day,
            second: PillarPosition::Hour,
            middle: Branch::Hai,
        };
        assert_eq!(arch.describe(Locale::Zh), "日时拱出亥");
    }

    #[test]
    fn trio_phrasing() {
        let meeting = BranchTrio {
            branches: [Branch::Yin, Branch::Mao, Branch::Chen],
            element: Element::Wood,
            direction: Some(Direction::East),
        };
        assert_eq!(meeting.describe(Locale::Zh), "寅卯辰会东方木");
        assert_eq!(meeting.describe(Locale::En), "Yin-Mao-Chen meet as Eastern Wood");
        let harmony = BranchTrio {
            branches: [Branch::Shen, Branch::Zi, Branch::Chen],
            element: Element::Water,
            direction: None,
        };
        assert_eq!(harmony.describe(Locale::Zh), "申子辰合水");
    }

    #[test]
    fn punishment_phrasing() {
        assert_eq!(Punishment::SelfPunishment(Branch::Chen).describe(Locale::Zh), "辰自刑");
        assert_eq!(
            Punishment::SelfPunishment(Branch::Chen).describe(Locale::En),
            "Chen self-punishment"
        );
        assert_eq!(Punishment::YinSiShen.describe(Locale::Zh), "寅巳申三刑");
    }

    #[test]
    fn english_positional() {
        let p = pair(
            (PillarPosition::Year, Branch::Mao),
            (PillarPosition::Month, Branch::You),
        );
        assert_eq!(
            p.describe_clash(Locale::En),
            "year branch Mao clashes with month branch You"
        );
    }
}
