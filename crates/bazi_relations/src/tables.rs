//! Static relation tables for stems and branches.
//!
//! Pair tables are stored once, in one order; lookups are unordered.

use bazi_base::{Branch, Element, Stem};
use serde::{Deserialize, Serialize};

use Branch::{Chen, Chou, Hai, Mao, Shen, Si, Wei, Wu, Xu, Yin, You, Zi};

/// Compass quarter of a seasonal meeting (三会).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    East,
    South,
    West,
    North,
}

impl Direction {
    pub const fn name(self) -> &'static str {
        match self {
            Self::East => "东方",
            Self::South => "南方",
            Self::West => "西方",
            Self::North => "北方",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::East => "Eastern",
            Self::South => "Southern",
            Self::West => "Western",
            Self::North => "Northern",
        }
    }
}

/// 天干五合
pub static STEM_COMBINATIONS: [(Stem, Stem, Element); 5] = [
    (Stem::Jia, Stem::Ji, Element::Earth),
    (Stem::Yi, Stem::Geng, Element::Metal),
    (Stem::Bing, Stem::Xin, Element::Water),
    (Stem::Ding, Stem::Ren, Element::Wood),
    (Stem::Wu, Stem::Gui, Element::Fire),
];

/// 地支六合
pub static SIX_HARMONIES: [(Branch, Branch, Element); 6] = [
    (Zi, Chou, Element::Earth),
    (Yin, Hai, Element::Wood),
    (Mao, Xu, Element::Fire),
    (Chen, You, Element::Metal),
    (Si, Shen, Element::Water),
    (Wu, Wei, Element::Fire),
];

/// 地支三会
pub static THREE_MEETINGS: [([Branch; 3], Direction, Element); 4] = [
    ([Yin, Mao, Chen], Direction::East, Element::Wood),
    ([Si, Wu, Wei], Direction::South, Element::Fire),
    ([Shen, You, Xu], Direction::West, Element::Metal),
    ([Hai, Zi, Chou], Direction::North, Element::Water),
];

/// 地支三合
pub static THREE_HARMONIES: [([Branch; 3], Element); 4] = [
    ([Yin, Wu, Xu], Element::Fire),
    ([Si, You, Chou], Element::Metal),
    ([Hai, Mao, Wei], Element::Wood),
    ([Shen, Zi, Chen], Element::Water),
];

/// 地支半合: each trio minus one outer member.
pub static HALF_HARMONIES: [(Branch, Branch, Element); 8] = [
    (Yin, Wu, Element::Fire),
    (Wu, Xu, Element::Fire),
    (Si, You, Element::Metal),
    (You, Chou, Element::Metal),
    (Hai, Mao, Element::Wood),
    (Mao, Wei, Element::Wood),
    (Shen, Zi, Element::Water),
    (Zi, Chen, Element::Water),
];

/// 地支拱合: the two outer members arch the missing center.
pub static ARMS_LENGTH_HARMONIES: [(Branch, Branch, Branch, Element); 4] = [
    (Yin, Xu, Wu, Element::Fire),
    (Si, Chou, You, Element::Metal),
    (Hai, Wei, Mao, Element::Wood),
    (Shen, Chen, Zi, Element::Water),
];

/// 地支相穿 (害)
pub static PIERCINGS: [(Branch, Branch); 6] = [
    (Zi, Wei),
    (Chou, Wu),
    (Yin, Si),
    (Mao, Chen),
    (Shen, Hai),
    (You, Xu),
];

/// 地支相破
pub static BREAKS: [(Branch, Branch); 6] = [
    (Zi, You),
    (Mao, Wu),
    (Chen, Chou),
    (Wei, Xu),
    (Yin, Hai),
    (Si, Shen),
];

/// 地支相绝 (partial)
pub static EXTINCTIONS: [(Branch, Branch); 4] = [(Yin, You), (Mao, Shen), (Wu, Hai), (Zi, Si)];

/// Branches that punish themselves when doubled, in reporting order.
pub static SELF_PUNISHING: [Branch; 4] = [Chen, You, Hai, Wu];

fn same_pair<T: PartialEq>(a: T, b: T, x: T, y: T) -> bool {
    (a == x && b == y) || (a == y && b == x)
}

/// Element formed by a stem five-combination.
pub fn stem_combination(a: Stem, b: Stem) -> Option<Element> {
    STEM_COMBINATIONS
        .iter()
        .find(|&&(x, y, _)| same_pair(a, b, x, y))
        .map(|&(_, _, e)| e)
}

/// Element formed by a six-harmony pair.
pub fn six_harmony(a: Branch, b: Branch) -> Option<Element> {
    SIX_HARMONIES
        .iter()
        .find(|&&(x, y, _)| same_pair(a, b, x, y))
        .map(|&(_, _, e)| e)
}

/// Element formed by a half-harmony pair.
pub fn half_harmony(a: Branch, b: Branch) -> Option<Element> {
    HALF_HARMONIES
        .iter()
        .find(|&&(x, y, _)| same_pair(a, b, x, y))
        .map(|&(_, _, e)| e)
}

/// Arched center branch and element of an arm's-length pair.
pub fn arms_length_harmony(a: Branch, b: Branch) -> Option<(Branch, Element)> {
    ARMS_LENGTH_HARMONIES
        .iter()
        .find(|&&(x, y, _, _)| same_pair(a, b, x, y))
        .map(|&(_, _, center, e)| (center, e))
}

/// Clash partner: the branch directly opposite.
pub const fn clash_partner(branch: Branch) -> Branch {
    branch.offset(6)
}

pub fn clashes(a: Branch, b: Branch) -> bool {
    clash_partner(a) == b
}

pub fn pierces(a: Branch, b: Branch) -> bool {
    PIERCINGS.iter().any(|&(x, y)| same_pair(a, b, x, y))
}

pub fn breaks(a: Branch, b: Branch) -> bool {
    BREAKS.iter().any(|&(x, y)| same_pair(a, b, x, y))
}

pub fn extinguishes(a: Branch, b: Branch) -> bool {
    EXTINCTIONS.iter().any(|&(x, y)| same_pair(a, b, x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazi_base::{ALL_BRANCHES, ALL_STEMS};

    #[test]
    fn stem_combinations_are_five_apart() {
        for &(a, b, _) in &STEM_COMBINATIONS {
            assert_eq!(b.index(), a.index() + 5);
        }
        assert_eq!(stem_combination(Stem::Ji, Stem::Jia), Some(Element::Earth));
        assert_eq!(stem_combination(Stem::Jia, Stem::Yi), None);
    }

    #[test]
    fn every_stem_has_one_partner() {
        for a in ALL_STEMS {
            let partners = ALL_STEMS
                .iter()
                .filter(|&&b| stem_combination(a, b).is_some())
                .count();
            assert_eq!(partners, 1, "{a}");
        }
    }

    #[test]
    fn every_branch_has_one_harmony_partner() {
        for a in ALL_BRANCHES {
            let partners = ALL_BRANCHES
                .iter()
                .filter(|&&b| six_harmony(a, b).is_some())
                .count();
            assert_eq!(partners, 1, "{a}");
        }
    }

    #[test]
    fn clash_is_an_involution_without_fixed_points() {
        for b in ALL_BRANCHES {
            assert_ne!(clash_partner(b), b);
            assert_eq!(clash_partner(clash_partner(b)), b);
        }
    }

    #[test]
    fn half_harmonies_come_from_trios() {
        for &(a, b, e) in &HALF_HARMONIES {
            let trio = THREE_HARMONIES.iter().find(|(t, _)| t.contains(&a) && t.contains(&b));
            assert_eq!(trio.map(|(_, te)| *te), Some(e));
        }
    }

    #[test]
    fn arms_length_centers() {
        assert_eq!(arms_length_harmony(Xu, Yin), Some((Wu, Element::Fire)));
        assert_eq!(arms_length_harmony(Chen, Shen), Some((Zi, Element::Water)));
        assert_eq!(arms_length_harmony(Yin, Wu), None);
    }

    #[test]
    fn unordered_lookups() {
        assert!(pierces(Wei, Zi));
        assert!(breaks(Chou, Chen));
        assert!(extinguishes(Si, Zi));
        assert!(!extinguishes(Zi, Wu));
    }
}
