//! The fourteen main stars (十四主星).
//!
//! Six stars hang off Ziwei counter-clockwise; Tianfu mirrors Ziwei across
//! the 寅-申 axis and leads eight stars clockwise.

use std::fmt::{Display, Formatter};

use bazi_base::{Branch, Locale};
use serde::{Deserialize, Serialize};

/// Which anchor a main star is placed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StarSeries {
    Ziwei,
    Tianfu,
}

/// The fourteen main stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MainStar {
    ZiWei,
    TianJi,
    TaiYang,
    WuQu,
    TianTong,
    LianZhen,
    TianFu,
    TaiYin,
    TanLang,
    JuMen,
    TianXiang,
    TianLiang,
    QiSha,
    PoJun,
}

/// All main stars, Ziwei series first.
pub const ALL_MAIN_STARS: [MainStar; 14] = [
    MainStar::ZiWei,
    MainStar::TianJi,
    MainStar::TaiYang,
    MainStar::WuQu,
    MainStar::TianTong,
    MainStar::LianZhen,
    MainStar::TianFu,
    MainStar::TaiYin,
    MainStar::TanLang,
    MainStar::JuMen,
    MainStar::TianXiang,
    MainStar::TianLiang,
    MainStar::QiSha,
    MainStar::PoJun,
];

impl MainStar {
    pub const fn name(self) -> &'static str {
        match self {
            Self::ZiWei => "紫微",
            Self::TianJi => "天机",
            Self::TaiYang => "太阳",
            Self::WuQu => "武曲",
            Self::TianTong => "天同",
            Self::LianZhen => "廉贞",
            Self::TianFu => "天府",
            Self::TaiYin => "太阴",
            Self::TanLang => "贪狼",
            Self::JuMen => "巨门",
            Self::TianXiang => "天相",
            Self::TianLiang => "天梁",
            Self::QiSha => "七杀",
            Self::PoJun => "破军",
        }
    }

    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::ZiWei => "Zi Wei",
            Self::TianJi => "Tian Ji",
            Self::TaiYang => "Tai Yang",
            Self::WuQu => "Wu Qu",
            Self::TianTong => "Tian Tong",
            Self::LianZhen => "Lian Zhen",
            Self::TianFu => "Tian Fu",
            Self::TaiYin => "Tai Yin",
            Self::TanLang => "Tan Lang",
            Self::JuMen => "Ju Men",
            Self::TianXiang => "Tian Xiang",
            Self::TianLiang => "Tian Liang",
            Self::QiSha => "Qi Sha",
            Self::PoJun => "Po Jun",
        }
    }

    pub const fn label(self, locale: Locale) -> &'static str {
        match locale {
            Locale::Zh => self.name(),
            Locale::En => self.pinyin(),
        }
    }

    pub const fn series(self) -> StarSeries {
        match self {
            Self::ZiWei
            | Self::TianJi
            | Self::TaiYang
            | Self::WuQu
            | Self::TianTong
            | Self::LianZhen => StarSeries::Ziwei,
            _ => StarSeries::Tianfu,
        }
    }

    /// Palace offset from the series anchor.
    pub const fn anchor_offset(self) -> i32 {
        match self {
            Self::ZiWei => 0,
            Self::TianJi => -1,
            Self::TaiYang => -3,
            Self::WuQu => -4,
            Self::TianTong => -5,
            Self::LianZhen => -8,
            Self::TianFu => 0,
            Self::TaiYin => 1,
            Self::TanLang => 2,
            Self::JuMen => 3,
            Self::TianXiang => 4,
            Self::TianLiang => 5,
            Self::QiSha => 6,
            Self::PoJun => 10,
        }
    }
}

impl Display for MainStar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A main star and the palace branch it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarPlacement {
    pub star: MainStar,
    pub branch: Branch,
}

/// Tianfu position: (4 - ziwei) mod 12.
pub const fn tianfu_position(ziwei: Branch) -> Branch {
    Branch::Chen.offset(-(ziwei.index() as i32))
}

/// Place all fourteen main stars from the Ziwei branch.
pub fn place_main_stars(ziwei: Branch) -> [StarPlacement; 14] {
    let tianfu = tianfu_position(ziwei);
    ALL_MAIN_STARS.map(|star| {
        let anchor = match star.series() {
            StarSeries::Ziwei => ziwei,
            StarSeries::Tianfu => tianfu,
        };
        StarPlacement {
            star,
            branch: anchor.offset(star.anchor_offset()),
        }
    })
}

/// Main stars sitting in one palace.
pub fn stars_in_palace(placements: &[StarPlacement], branch: Branch) -> Vec<MainStar> {
    placements
        .iter()
        .filter(|p| p.branch == branch)
        .map(|p| p.star)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazi_base::ALL_BRANCHES;

    #[test]
    fn tianfu_mirrors_ziwei() {
        assert_eq!(tianfu_position(Branch::Yin), Branch::Yin);
        assert_eq!(tianfu_position(Branch::Shen), Branch::Shen);
        assert_eq!(tianfu_position(Branch::Zi), Branch::Chen);
        assert_eq!(tianfu_position(Branch::Chen), Branch::Zi);
        assert_eq!(tianfu_position(Branch::Wu), Branch::Xu);
    }

    #[test]
    fn ziwei_in_zi() {
        let placed = place_main_stars(Branch::Zi);
        let at = |s: MainStar| placed.iter().find(|p| p.star == s).map(|p| p.branch);
        assert_eq!(at(MainStar::ZiWei), Some(Branch::Zi));
        assert_eq!(at(MainStar::TianJi), Some(Branch::Hai));
        assert_eq!(at(MainStar::TaiYang), Some(Branch::You));
        assert_eq!(at(MainStar::WuQu), Some(Branch::Shen));
        assert_eq!(at(MainStar::TianTong), Some(Branch::Wei));
        assert_eq!(at(MainStar::LianZhen), Some(Branch::Chen));
        assert_eq!(at(MainStar::TianFu), Some(Branch::Chen));
        assert_eq!(at(MainStar::TaiYin), Some(Branch::Si));
        assert_eq!(at(MainStar::QiSha), Some(Branch::Xu));
        assert_eq!(at(MainStar::PoJun), Some(Branch::Yin));
    }

    #[test]
    fn ziwei_and_tianfu_share_yin_and_shen() {
        for b in [Branch::Yin, Branch::Shen] {
            let placed = place_main_stars(b);
            let here = stars_in_palace(&placed, b);
            assert!(here.contains(&MainStar::ZiWei));
            assert!(here.contains(&MainStar::TianFu));
        }
    }

    #[test]
    fn fourteen_stars_always_placed() {
        for b in ALL_BRANCHES {
            let placed = place_main_stars(b);
            let total: usize = ALL_BRANCHES
                .iter()
                .map(|&p| stars_in_palace(&placed, p).len())
                .sum();
            assert_eq!(total, 14);
        }
    }
}
