//! Ten Gods (十神): the relation of any stem to the day master.
//!
//! The relation is fixed by the element cycle (same, I generate, I control,
//! controls me, generates me) and by whether the polarities agree.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::hidden_stems::primary_hidden_stem;
use crate::locale::Locale;
use crate::stem::Stem;

/// The ten gods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TenGod {
    /// 比肩: same element, same polarity.
    BiJian,
    /// 劫财: same element, opposite polarity.
    JieCai,
    /// 食神: day master generates it, same polarity.
    ShiShen,
    /// 伤官: day master generates it, opposite polarity.
    ShangGuan,
    /// 偏财: day master controls it, same polarity.
    PianCai,
    /// 正财: day master controls it, opposite polarity.
    ZhengCai,
    /// 七杀: controls the day master, same polarity.
    QiSha,
    /// 正官: controls the day master, opposite polarity.
    ZhengGuan,
    /// 偏印: generates the day master, same polarity.
    PianYin,
    /// 正印: generates the day master, opposite polarity.
    ZhengYin,
}

/// All ten gods in canonical order.
pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::BiJian,
    TenGod::JieCai,
    TenGod::ShiShen,
    TenGod::ShangGuan,
    TenGod::PianCai,
    TenGod::ZhengCai,
    TenGod::QiSha,
    TenGod::ZhengGuan,
    TenGod::PianYin,
    TenGod::ZhengYin,
];

/// Grouping used by pattern analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenGodGroup {
    /// 比劫
    Companion,
    /// 食伤
    Output,
    /// 财
    Wealth,
    /// 官杀
    Authority,
    /// 印
    Resource,
}

impl TenGod {
    pub const fn index(self) -> u8 {
        match self {
            Self::BiJian => 0,
            Self::JieCai => 1,
            Self::ShiShen => 2,
            Self::ShangGuan => 3,
            Self::PianCai => 4,
            Self::ZhengCai => 5,
            Self::QiSha => 6,
            Self::ZhengGuan => 7,
            Self::PianYin => 8,
            Self::ZhengYin => 9,
        }
    }

    /// Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::BiJian => "比肩",
            Self::JieCai => "劫财",
            Self::ShiShen => "食神",
            Self::ShangGuan => "伤官",
            Self::PianCai => "偏财",
            Self::ZhengCai => "正财",
            Self::QiSha => "七杀",
            Self::ZhengGuan => "正官",
            Self::PianYin => "偏印",
            Self::ZhengYin => "正印",
        }
    }

    /// One-character abbreviation used in compact chart output.
    pub const fn short(self) -> &'static str {
        match self {
            Self::BiJian => "比",
            Self::JieCai => "劫",
            Self::ShiShen => "食",
            Self::ShangGuan => "伤",
            Self::PianCai => "才",
            Self::ZhengCai => "财",
            Self::QiSha => "杀",
            Self::ZhengGuan => "官",
            Self::PianYin => "枭",
            Self::ZhengYin => "印",
        }
    }

    /// English gloss.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::BiJian => "Friend",
            Self::JieCai => "Rob Wealth",
            Self::ShiShen => "Eating God",
            Self::ShangGuan => "Hurting Officer",
            Self::PianCai => "Indirect Wealth",
            Self::ZhengCai => "Direct Wealth",
            Self::QiSha => "Seven Killings",
            Self::ZhengGuan => "Direct Officer",
            Self::PianYin => "Indirect Resource",
            Self::ZhengYin => "Direct Resource",
        }
    }

    pub const fn label(self, locale: Locale) -> &'static str {
        match locale {
            Locale::Zh => self.name(),
            Locale::En => self.english_name(),
        }
    }

    pub const fn group(self) -> TenGodGroup {
        match self {
            Self::BiJian | Self::JieCai => TenGodGroup::Companion,
            Self::ShiShen | Self::ShangGuan => TenGodGroup::Output,
            Self::PianCai | Self::ZhengCai => TenGodGroup::Wealth,
            Self::QiSha | Self::ZhengGuan => TenGodGroup::Authority,
            Self::PianYin | Self::ZhengYin => TenGodGroup::Resource,
        }
    }

    /// Look up by Chinese name.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_TEN_GODS.into_iter().find(|g| g.name() == name)
    }
}

impl Display for TenGod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Ten God of `other` relative to `day_master`.
pub fn ten_god(day_master: Stem, other: Stem) -> TenGod {
    let me = day_master.element();
    let it = other.element();
    let same_polarity = day_master.polarity() == other.polarity();
    let pick = |same: TenGod, opposite: TenGod| if same_polarity { same } else { opposite };

    if it == me {
        pick(TenGod::BiJian, TenGod::JieCai)
    } else if me.generates() == it {
        pick(TenGod::ShiShen, TenGod::ShangGuan)
    } else if me.controls() == it {
        pick(TenGod::PianCai, TenGod::ZhengCai)
    } else if it.controls() == me {
        pick(TenGod::QiSha, TenGod::ZhengGuan)
    } else {
        pick(TenGod::PianYin, TenGod::ZhengYin)
    }
}

/// Ten God of a branch: that of its primary hidden stem.
pub fn branch_ten_god(day_master: Stem, branch: Branch) -> TenGod {
    ten_god(day_master, primary_hidden_stem(branch))
}
