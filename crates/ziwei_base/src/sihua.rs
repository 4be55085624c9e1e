//! Four transformations (四化).
//!
//! Each stem turns four stars into 化禄, 化权, 化科 and 化忌. The year stem
//! gives the birth-year transformations; each palace stem transforms stars
//! in its own palace (自化) or in the other palaces (飞化).

use std::fmt::{Display, Formatter};

use bazi_base::{Branch, Locale, Stem};
use serde::{Deserialize, Serialize};

use crate::palace::Palace;
use crate::stars::{MainStar, StarPlacement, stars_in_palace};

/// The four transformations, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SihuaKind {
    Lu,
    Quan,
    Ke,
    Ji,
}

pub const ALL_SIHUA_KINDS: [SihuaKind; 4] =
    [SihuaKind::Lu, SihuaKind::Quan, SihuaKind::Ke, SihuaKind::Ji];

impl SihuaKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lu => "化禄",
            Self::Quan => "化权",
            Self::Ke => "化科",
            Self::Ji => "化忌",
        }
    }

    /// Single-character mark (禄, 权, 科, 忌).
    pub const fn mark(self) -> &'static str {
        match self {
            Self::Lu => "禄",
            Self::Quan => "权",
            Self::Ke => "科",
            Self::Ji => "忌",
        }
    }

    /// Letter code A..D.
    pub const fn letter(self) -> char {
        match self {
            Self::Lu => 'A',
            Self::Quan => 'B',
            Self::Ke => 'C',
            Self::Ji => 'D',
        }
    }

    pub const fn label(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::Zh, _) => self.name(),
            (Locale::En, Self::Lu) => "Lu",
            (Locale::En, Self::Quan) => "Quan",
            (Locale::En, Self::Ke) => "Ke",
            (Locale::En, Self::Ji) => "Ji",
        }
    }
}

/// A star that can be transformed: a main star or one of four minor stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SihuaStar {
    Main(MainStar),
    WenChang,
    WenQu,
    ZuoFu,
    YouBi,
}

impl SihuaStar {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Main(s) => s.name(),
            Self::WenChang => "文昌",
            Self::WenQu => "文曲",
            Self::ZuoFu => "左辅",
            Self::YouBi => "右弼",
        }
    }

    pub const fn label(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (_, Self::Main(s)) => s.label(locale),
            (Locale::Zh, _) => self.name(),
            (Locale::En, Self::WenChang) => "Wen Chang",
            (Locale::En, Self::WenQu) => "Wen Qu",
            (Locale::En, Self::ZuoFu) => "Zuo Fu",
            (Locale::En, Self::YouBi) => "You Bi",
        }
    }

    pub const fn main_star(self) -> Option<MainStar> {
        match self {
            Self::Main(s) => Some(s),
            _ => None,
        }
    }
}

impl Display for SihuaStar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Stars transformed by a stem, in 禄 权 科 忌 order.
pub const fn sihua_stars(stem: Stem) -> [SihuaStar; 4] {
    use MainStar::*;
    use SihuaStar::Main;
    match stem {
        Stem::Jia => [Main(LianZhen), Main(PoJun), Main(WuQu), Main(TaiYang)],
        Stem::Yi => [Main(TianJi), Main(TianLiang), Main(ZiWei), Main(TaiYin)],
        Stem::Bing => [Main(TianTong), Main(TianJi), SihuaStar::WenChang, Main(LianZhen)],
        Stem::Ding => [Main(TaiYin), Main(TianTong), Main(TianJi), Main(JuMen)],
        Stem::Wu => [Main(TanLang), Main(TaiYin), SihuaStar::YouBi, Main(TianJi)],
        Stem::Ji => [Main(WuQu), Main(TanLang), Main(TianLiang), SihuaStar::WenQu],
        Stem::Geng => [Main(TaiYang), Main(WuQu), Main(TaiYin), Main(TianTong)],
        Stem::Xin => [Main(JuMen), Main(TaiYang), SihuaStar::WenQu, SihuaStar::WenChang],
        Stem::Ren => [Main(TianLiang), Main(ZiWei), SihuaStar::ZuoFu, Main(WuQu)],
        Stem::Gui => [Main(PoJun), Main(JuMen), Main(TaiYin), Main(TanLang)],
    }
}

/// Kind of transformation a stem applies to `star`, if any.
pub fn sihua_kind(stem: Stem, star: SihuaStar) -> Option<SihuaKind> {
    sihua_stars(stem)
        .iter()
        .zip(ALL_SIHUA_KINDS)
        .find(|(s, _)| **s == star)
        .map(|(_, k)| k)
}

/// A birth-year transformation and, for main stars, the palace it lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthSihua {
    pub kind: SihuaKind,
    pub star: SihuaStar,
    /// `None` for minor stars, which are not placed.
    pub branch: Option<Branch>,
}

/// Whether a self-transformed star also carries a birth-year transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelfSihuaDirection {
    /// 离心自化: no birth-year transformation.
    Outward,
    /// 向心自化: already transformed by the year stem.
    Inward,
}

impl SelfSihuaDirection {
    /// Code prefix (`x` or `i`).
    pub const fn prefix(self) -> char {
        match self {
            Self::Outward => 'x',
            Self::Inward => 'i',
        }
    }
}

/// A palace stem transforming a star in its own palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelfSihua {
    pub branch: Branch,
    pub kind: SihuaKind,
    pub star: MainStar,
    pub direction: SelfSihuaDirection,
}

impl SelfSihua {
    /// "xA", "iD", ...
    pub fn code(&self) -> String {
        format!("{}{}", self.direction.prefix(), self.kind.letter())
    }
}

/// A palace stem transforming a star in another palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlyingSihua {
    pub from: Branch,
    pub to: Branch,
    pub kind: SihuaKind,
    pub star: MainStar,
}

/// Birth-year transformations located on the placed main stars.
pub fn birth_sihua(year_stem: Stem, stars: &[StarPlacement]) -> [BirthSihua; 4] {
    let transformed = sihua_stars(year_stem);
    std::array::from_fn(|i| {
        let star = transformed[i];
        BirthSihua {
            kind: ALL_SIHUA_KINDS[i],
            star,
            branch: star
                .main_star()
                .and_then(|m| stars.iter().find(|p| p.star == m))
                .map(|p| p.branch),
        }
    })
}

/// Self-transformations of every palace, in palace order.
pub fn self_sihua(
    palaces: &[Palace],
    stars: &[StarPlacement],
    birth: &[BirthSihua],
) -> Vec<SelfSihua> {
    let mut out = Vec::new();
    for palace in palaces {
        let here = stars_in_palace(stars, palace.branch);
        for (star, kind) in sihua_stars(palace.stem).into_iter().zip(ALL_SIHUA_KINDS) {
            let Some(main) = star.main_star().filter(|m| here.contains(m)) else {
                continue;
            };
            let direction = if birth.iter().any(|b| b.star == star) {
                SelfSihuaDirection::Inward
            } else {
                SelfSihuaDirection::Outward
            };
            out.push(SelfSihua {
                branch: palace.branch,
                kind,
                star: main,
                direction,
            });
        }
    }
    out
}

/// Transformations sent by the stem of `from` into the other palaces.
pub fn flying_sihua(from: &Palace, stars: &[StarPlacement]) -> Vec<FlyingSihua> {
    sihua_stars(from.stem)
        .into_iter()
        .zip(ALL_SIHUA_KINDS)
        .filter_map(|(star, kind)| {
            let main = star.main_star()?;
            let placed = stars.iter().find(|p| p.star == main)?;
            (placed.branch != from.branch).then_some(FlyingSihua {
                from: from.branch,
                to: placed.branch,
                kind,
                star: main,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stars::place_main_stars;
    use bazi_base::ALL_STEMS;

    #[test]
    fn jia_year_table() {
        assert_eq!(
            sihua_stars(Stem::Jia),
            [
                SihuaStar::Main(MainStar::LianZhen),
                SihuaStar::Main(MainStar::PoJun),
                SihuaStar::Main(MainStar::WuQu),
                SihuaStar::Main(MainStar::TaiYang),
            ]
        );
        assert_eq!(
            sihua_kind(Stem::Xin, SihuaStar::WenChang),
            Some(SihuaKind::Ji)
        );
        assert_eq!(sihua_kind(Stem::Jia, SihuaStar::Main(MainStar::ZiWei)), None);
    }

    #[test]
    fn every_stem_transforms_four_distinct_stars() {
        for stem in ALL_STEMS {
            let stars = sihua_stars(stem);
            for i in 0..4 {
                for j in i + 1..4 {
                    assert_ne!(stars[i], stars[j], "{stem}");
                }
            }
        }
    }

    #[test]
    fn birth_sihua_locates_main_stars() {
        // Ziwei in 子: 廉贞 in 辰, 破军 in 寅, 武曲 in 申, 太阳 in 酉
        let placed = place_main_stars(Branch::Zi);
        let birth = birth_sihua(Stem::Jia, &placed);
        assert_eq!(birth[0].kind, SihuaKind::Lu);
        assert_eq!(birth[0].branch, Some(Branch::Chen));
        assert_eq!(birth[1].branch, Some(Branch::Yin));
        assert_eq!(birth[2].branch, Some(Branch::Shen));
        assert_eq!(birth[3].kind, SihuaKind::Ji);
        assert_eq!(birth[3].branch, Some(Branch::You));

        let minor = birth_sihua(Stem::Bing, &placed);
        assert_eq!(minor[2].star, SihuaStar::WenChang);
        assert_eq!(minor[2].branch, None);
    }

    #[test]
    fn self_sihua_codes() {
        let s = SelfSihua {
            branch: Branch::Zi,
            kind: SihuaKind::Ke,
            star: MainStar::TaiYin,
            direction: SelfSihuaDirection::Outward,
        };
        assert_eq!(s.code(), "xC");
        let s = SelfSihua {
            direction: SelfSihuaDirection::Inward,
            kind: SihuaKind::Ji,
            ..s
        };
        assert_eq!(s.code(), "iD");
    }
}
