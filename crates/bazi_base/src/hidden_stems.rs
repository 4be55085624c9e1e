//! Hidden stems (藏干) contained in each earthly branch.
//!
//! Every branch holds a primary qi and up to two residual qi. Weights are
//! 1.0 (primary), 0.5 (secondary) and 0.3 (tertiary).

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::stem::Stem;

/// Role of a hidden stem within its branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HiddenStemRole {
    /// 本气
    Primary,
    /// 中气
    Secondary,
    /// 余气
    Tertiary,
}

impl HiddenStemRole {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "本气",
            Self::Secondary => "中气",
            Self::Tertiary => "余气",
        }
    }

    /// Strength weight used by element and ten-god scoring.
    pub const fn weight(self) -> f64 {
        match self {
            Self::Primary => 1.0,
            Self::Secondary => 0.5,
            Self::Tertiary => 0.3,
        }
    }
}

/// One stem contained in a branch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HiddenStem {
    pub stem: Stem,
    pub role: HiddenStemRole,
}

impl HiddenStem {
    const fn new(stem: Stem, role: HiddenStemRole) -> Self {
        Self { stem, role }
    }

    pub const fn weight(&self) -> f64 {
        self.role.weight()
    }
}

use HiddenStemRole::{Primary as P, Secondary as S, Tertiary as T};

/// Hidden stems per branch, indexed by branch ordinal, primary first.
static HIDDEN_STEMS: [&[HiddenStem]; 12] = [
    // 子
    &[HiddenStem::new(Stem::Gui, P)],
    // 丑
    &[
        HiddenStem::new(Stem::Ji, P),
        HiddenStem::new(Stem::Xin, S),
        HiddenStem::new(Stem::Gui, T),
    ],
    // 寅
    &[
        HiddenStem::new(Stem::Jia, P),
        HiddenStem::new(Stem::Bing, S),
        HiddenStem::new(Stem::Wu, T),
    ],
    // 卯
    &[HiddenStem::new(Stem::Yi, P)],
    // 辰
    &[
        HiddenStem::new(Stem::Wu, P),
        HiddenStem::new(Stem::Gui, S),
        HiddenStem::new(Stem::Yi, T),
    ],
    // 巳
    &[
        HiddenStem::new(Stem::Bing, P),
        HiddenStem::new(Stem::Wu, S),
        HiddenStem::new(Stem::Geng, T),
    ],
    // 午
    &[HiddenStem::new(Stem::Ding, P), HiddenStem::new(Stem::Ji, T)],
    // 未
    &[
        HiddenStem::new(Stem::Ji, P),
        HiddenStem::new(Stem::Yi, S),
        HiddenStem::new(Stem::Ding, T),
    ],
    // 申
    &[
        HiddenStem::new(Stem::Geng, P),
        HiddenStem::new(Stem::Ren, S),
        HiddenStem::new(Stem::Wu, T),
    ],
    // 酉
    &[HiddenStem::new(Stem::Xin, P)],
    // 戌
    &[
        HiddenStem::new(Stem::Wu, P),
        HiddenStem::new(Stem::Ding, S),
        HiddenStem::new(Stem::Xin, T),
    ],
    // 亥
    &[HiddenStem::new(Stem::Ren, P), HiddenStem::new(Stem::Jia, T)],
];

/// All hidden stems of a branch, primary first (1 to 3 entries).
pub fn hidden_stems(branch: Branch) -> &'static [HiddenStem] {
    HIDDEN_STEMS[branch.index() as usize]
}

/// The primary (本气) hidden stem of a branch.
pub fn primary_hidden_stem(branch: Branch) -> Stem {
    HIDDEN_STEMS[branch.index() as usize][0].stem
}
