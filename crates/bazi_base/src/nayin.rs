//! NaYin (纳音) sounds of the sexagenary cycle.
//!
//! Consecutive pairs of the 60-cycle share one of 30 sounds: 甲子 and 乙丑 are
//! 海中金, 丙寅 and 丁卯 are 炉中火, and so on to 壬戌 and 癸亥 as 大海水.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::ganzhi::GanZhi;
use crate::locale::Locale;

/// The 30 NaYin sounds in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum NaYin {
    HaiZhongJin,
    LuZhongHuo,
    DaLinMu,
    LuPangTu,
    JianFengJin,
    ShanTouHuo,
    JianXiaShui,
    ChengTouTu,
    BaiLaJin,
    YangLiuMu,
    QuanZhongShui,
    WuShangTu,
    PiLiHuo,
    SongBaiMu,
    ChangLiuShui,
    ShaZhongJin,
    ShanXiaHuo,
    PingDiMu,
    BiShangTu,
    JinBoJin,
    FuDengHuo,
    TianHeShui,
    DaYiTu,
    ChaiChuanJin,
    SangZheMu,
    DaXiShui,
    ShaZhongTu,
    TianShangHuo,
    ShiLiuMu,
    DaHaiShui,
}

/// All 30 sounds; sound `k` covers cycle indices `2k` and `2k + 1`.
pub const ALL_NAYIN: [NaYin; 30] = [
    NaYin::HaiZhongJin,
    NaYin::LuZhongHuo,
    NaYin::DaLinMu,
    NaYin::LuPangTu,
    NaYin::JianFengJin,
    NaYin::ShanTouHuo,
    NaYin::JianXiaShui,
    NaYin::ChengTouTu,
    NaYin::BaiLaJin,
    NaYin::YangLiuMu,
    NaYin::QuanZhongShui,
    NaYin::WuShangTu,
    NaYin::PiLiHuo,
    NaYin::SongBaiMu,
    NaYin::ChangLiuShui,
    NaYin::ShaZhongJin,
    NaYin::ShanXiaHuo,
    NaYin::PingDiMu,
    NaYin::BiShangTu,
    NaYin::JinBoJin,
    NaYin::FuDengHuo,
    NaYin::TianHeShui,
    NaYin::DaYiTu,
    NaYin::ChaiChuanJin,
    NaYin::SangZheMu,
    NaYin::DaXiShui,
    NaYin::ShaZhongTu,
    NaYin::TianShangHuo,
    NaYin::ShiLiuMu,
    NaYin::DaHaiShui,
];

const NAYIN_NAMES: [&str; 30] = [
    "海中金", "炉中火", "大林木", "路旁土", "剑锋金", "山头火", "涧下水", "城头土", "白蜡金", "杨柳木",
    "泉中水", "屋上土", "霹雳火", "松柏木", "长流水", "砂中金", "山下火", "平地木", "壁上土", "金箔金",
    "覆灯火", "天河水", "大驿土", "钗钏金", "桑柘木", "大溪水", "沙中土", "天上火", "石榴木", "大海水",
];

const NAYIN_ENGLISH: [&str; 30] = [
    "Sea Metal",
    "Furnace Fire",
    "Forest Wood",
    "Roadside Earth",
    "Sword-Edge Metal",
    "Mountain-Top Fire",
    "Stream Water",
    "City-Wall Earth",
    "White-Wax Metal",
    "Willow Wood",
    "Spring Water",
    "Rooftop Earth",
    "Thunderbolt Fire",
    "Pine Wood",
    "Long-River Water",
    "Sand Metal",
    "Foothill Fire",
    "Flatland Wood",
    "Wall Earth",
    "Gold-Foil Metal",
    "Lamp Fire",
    "Heavenly-River Water",
    "Post-Road Earth",
    "Hairpin Metal",
    "Mulberry Wood",
    "Brook Water",
    "Sand Earth",
    "Heavenly Fire",
    "Pomegranate Wood",
    "Ocean Water",
];

impl NaYin {
    /// Sound of a sexagenary pair.
    pub const fn of(ganzhi: GanZhi) -> Self {
        ALL_NAYIN[(ganzhi.cycle_index() / 2) as usize]
    }

    /// 0-based index (0 = 海中金).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        NAYIN_NAMES[self.index() as usize]
    }

    pub const fn english_name(self) -> &'static str {
        NAYIN_ENGLISH[self.index() as usize]
    }

    pub const fn label(self, locale: Locale) -> &'static str {
        match locale {
            Locale::Zh => self.name(),
            Locale::En => self.english_name(),
        }
    }

    /// Element carried by the last character of the name.
    pub const fn element(self) -> Element {
        match self.index() {
            2 | 9 | 13 | 17 | 24 | 28 => Element::Wood,
            1 | 5 | 12 | 16 | 20 | 27 => Element::Fire,
            3 | 7 | 11 | 18 | 22 | 26 => Element::Earth,
            0 | 4 | 8 | 15 | 19 | 23 => Element::Metal,
            _ => Element::Water,
        }
    }
}

impl Display for NaYin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl GanZhi {
    /// NaYin sound of this pair.
    pub const fn nayin(self) -> NaYin {
        NaYin::of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nayin(s: &str) -> NaYin {
        s.parse::<GanZhi>().unwrap().nayin()
    }

    #[test]
    fn pairs_share_a_sound() {
        assert_eq!(nayin("甲子"), NaYin::HaiZhongJin);
        assert_eq!(nayin("乙丑"), NaYin::HaiZhongJin);
        assert_eq!(nayin("丙寅").name(), "炉中火");
        assert_eq!(nayin("甲辰").name(), "覆灯火");
        assert_eq!(nayin("壬子").name(), "桑柘木");
        assert_eq!(nayin("癸亥").name(), "大海水");
    }

    #[test]
    fn element_matches_last_character() {
        for n in ALL_NAYIN {
            let last = n.name().chars().last().unwrap().to_string();
            assert_eq!(last, n.element().name(), "{n}");
        }
    }

    #[test]
    fn every_sound_covers_two_terms() {
        let mut counts = [0u8; 30];
        for i in 0..60 {
            let g = GanZhi::from_cycle_index(i).unwrap();
            counts[g.nayin().index() as usize] += 1;
        }
        assert!(counts.iter().all(|&c| c == 2));
    }
}
