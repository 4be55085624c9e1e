//! The six capability dimensions and their Ten-God weights.

use std::fmt::{Display, Formatter};

use bazi_base::{Locale, TenGod};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    /// 执行力
    Execution,
    /// 创新力
    Innovation,
    /// 管理力
    Management,
    /// 销售力
    Sales,
    /// 协调力
    Coordination,
    /// 稳定性
    Stability,
}

pub const ALL_CAPABILITIES: [Capability; 6] = [
    Capability::Execution,
    Capability::Innovation,
    Capability::Management,
    Capability::Sales,
    Capability::Coordination,
    Capability::Stability,
];

impl Capability {
    pub const fn index(self) -> usize {
        match self {
            Self::Execution => 0,
            Self::Innovation => 1,
            Self::Management => 2,
            Self::Sales => 3,
            Self::Coordination => 4,
            Self::Stability => 5,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Execution => "执行力",
            Self::Innovation => "创新力",
            Self::Management => "管理力",
            Self::Sales => "销售力",
            Self::Coordination => "协调力",
            Self::Stability => "稳定性",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Execution => "Execution",
            Self::Innovation => "Innovation",
            Self::Management => "Management",
            Self::Sales => "Sales",
            Self::Coordination => "Coordination",
            Self::Stability => "Stability",
        }
    }

    pub const fn label(self, locale: Locale) -> &'static str {
        match locale {
            Locale::Zh => self.name(),
            Locale::En => self.english_name(),
        }
    }

    /// Weight of `god` in this capability.
    pub fn weight(self, god: TenGod) -> f64 {
        CAPABILITY_WEIGHTS[self.index()][god.index() as usize]
    }
}

impl Display for Capability {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Weights per capability, columns in `ALL_TEN_GODS` order:
/// 比肩 劫财 食神 伤官 偏财 正财 七杀 正官 偏印 正印.
#[rustfmt::skip]
pub static CAPABILITY_WEIGHTS: [[f64; 10]; 6] = [
    [0.20, 0.10, 0.05, 0.03, 0.01, 0.02, 0.30, 0.35, 0.08, 0.15], // 执行力
    [0.01, 0.15, 0.35, 0.40, 0.05, 0.03, 0.08, 0.02, 0.20, 0.10], // 创新力
    [0.12, 0.05, 0.08, 0.03, 0.01, 0.02, 0.35, 0.45, 0.15, 0.25], // 管理力
    [0.10, 0.15, 0.30, 0.35, 0.20, 0.25, 0.08, 0.05, 0.02, 0.03], // 销售力
    [0.15, 0.05, 0.25, 0.03, 0.08, 0.12, 0.02, 0.20, 0.30, 0.40], // 协调力
    [0.40, 0.03, 0.08, 0.01, 0.05, 0.12, 0.02, 0.25, 0.15, 0.35], // 稳定性
];
