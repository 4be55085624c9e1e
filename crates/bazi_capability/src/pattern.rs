//! Pattern (格局) detection from a Ten-God strength distribution.

use std::fmt::{Display, Formatter};

use bazi_base::{Locale, TenGod, TenGodGroup};
use serde::{Deserialize, Serialize};

use crate::capability::Capability;
use crate::strength::TenGodStrengths;

/// Below this the dominant god does not define a pattern.
const PATTERN_FLOOR: f64 = 0.3;
/// Runner-up guard against division by zero.
const RATIO_EPSILON: f64 = 0.001;
const FOLLOW_RATIO: f64 = 3.0;
const FOLLOW_FLOOR: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Pattern {
    /// 印旺格
    StrongResource,
    /// 正官格
    DirectOfficer,
    /// 七杀格
    SevenKillings,
    /// 财旺格
    StrongWealth,
    /// 比劫格
    Companions,
    /// 食伤格
    Output,
    /// 从格
    Follow,
    /// 普通格局
    Ordinary,
}

impl Pattern {
    pub const fn name(self) -> &'static str {
        match self {
            Self::StrongResource => "印旺格",
            Self::DirectOfficer => "正官格",
            Self::SevenKillings => "七杀格",
            Self::StrongWealth => "财旺格",
            Self::Companions => "比劫格",
            Self::Output => "食伤格",
            Self::Follow => "从格",
            Self::Ordinary => "普通格局",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::StrongResource => "Strong Resource",
            Self::DirectOfficer => "Direct Officer",
            Self::SevenKillings => "Seven Killings",
            Self::StrongWealth => "Strong Wealth",
            Self::Companions => "Companions",
            Self::Output => "Output",
            Self::Follow => "Follow",
            Self::Ordinary => "Ordinary",
        }
    }

    pub const fn label(self, locale: Locale) -> &'static str {
        match locale {
            Locale::Zh => self.name(),
            Locale::En => self.english_name(),
        }
    }

    pub const fn description(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::Zh, Self::StrongResource) => "印星旺盛，利于学习和稳定发展",
            (Locale::Zh, Self::DirectOfficer) => "正官得用，利于仕途和管理",
            (Locale::Zh, Self::SevenKillings) => "七杀有制，利于开拓和执行",
            (Locale::Zh, Self::StrongWealth) => "财星旺盛，利于经商和理财",
            (Locale::Zh, Self::Companions) => "比劫旺盛，利于合作和团队发展",
            (Locale::Zh, Self::Output) => "食伤旺盛，利于创新和表达",
            (Locale::Zh, Self::Follow) => "从格成立，专一发展某方面能力",
            (Locale::Zh, Self::Ordinary) => "五行较为均衡",
            (Locale::En, Self::StrongResource) => "strong resource stars favour learning and steady growth",
            (Locale::En, Self::DirectOfficer) => "a usable direct officer favours career and management",
            (Locale::En, Self::SevenKillings) => "controlled seven killings favour pioneering and execution",
            (Locale::En, Self::StrongWealth) => "strong wealth stars favour business and finance",
            (Locale::En, Self::Companions) => "strong companions favour cooperation and teamwork",
            (Locale::En, Self::Output) => "strong output stars favour innovation and expression",
            (Locale::En, Self::Follow) => "a follow pattern favours focus on a single strength",
            (Locale::En, Self::Ordinary) => "the elements are fairly balanced",
        }
    }

    /// Score bonus this pattern grants a capability, before confidence.
    pub const fn bonus(self, capability: Capability) -> f64 {
        use Capability::*;
        match (self, capability) {
            (Self::StrongResource, Stability) => 25.0,
            (Self::StrongResource, Coordination) => 20.0,
            (Self::StrongResource, Management) => 15.0,
            (Self::StrongResource, Execution) => 10.0,
            (Self::DirectOfficer, Execution) => 25.0,
            (Self::DirectOfficer, Management) => 20.0,
            (Self::DirectOfficer, Stability) => 15.0,
            (Self::SevenKillings, Execution) => 30.0,
            (Self::SevenKillings, Innovation) => 15.0,
            (Self::SevenKillings, Management) => 10.0,
            (Self::StrongWealth, Sales) => 25.0,
            (Self::StrongWealth, Innovation) => 20.0,
            (Self::StrongWealth, Execution) => 15.0,
            (Self::Output, Innovation) => 30.0,
            (Self::Output, Sales) => 20.0,
            (Self::Output, Coordination) => 15.0,
            (Self::Companions, Stability) => 20.0,
            (Self::Companions, Execution) => 15.0,
            (Self::Companions, Coordination) => 10.0,
            _ => 0.0,
        }
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A detected pattern with its evidence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternDetection {
    pub pattern: Pattern,
    pub dominant: TenGod,
    /// Dominant strength over runner-up strength.
    pub strength_ratio: f64,
    /// 0..=0.95
    pub confidence: f64,
}

/// Classify a strength distribution.
///
/// Group thresholds are checked in priority order (印, 官杀, 财, 比劫, 食伤)
/// once the dominant god exceeds 0.3. A dominant god more than three times
/// the runner-up and above 0.5 overrides everything as 从格.
pub fn detect_pattern(strengths: &TenGodStrengths) -> PatternDetection {
    let (dominant, max, second) = strengths.dominant();
    let strength_ratio = max / (second + RATIO_EPSILON);

    let resource = strengths.group(TenGodGroup::Resource);
    let authority = strengths.group(TenGodGroup::Authority);
    let wealth = strengths.group(TenGodGroup::Wealth);
    let companion = strengths.group(TenGodGroup::Companion);
    let output = strengths.group(TenGodGroup::Output);

    let mut pattern = Pattern::Ordinary;
    let mut confidence = 0.5;
    if max > PATTERN_FLOOR {
        let grouped = if resource > 0.3 {
            Some((Pattern::StrongResource, resource * 2.0))
        } else if authority > 0.25 {
            let p = if strengths.get(TenGod::ZhengGuan) > strengths.get(TenGod::QiSha) {
                Pattern::DirectOfficer
            } else {
                Pattern::SevenKillings
            };
            Some((p, authority * 2.5))
        } else if wealth > 0.25 {
            Some((Pattern::StrongWealth, wealth * 2.5))
        } else if companion > 0.3 {
            Some((Pattern::Companions, companion * 2.0))
        } else if output > 0.25 {
            Some((Pattern::Output, output * 2.5))
        } else {
            None
        };
        if let Some((p, c)) = grouped {
            pattern = p;
            confidence = c.min(0.9);
        }
    }

    if strength_ratio > FOLLOW_RATIO && max > FOLLOW_FLOOR {
        pattern = Pattern::Follow;
        confidence = (strength_ratio * 0.2).min(0.95);
    }

    PatternDetection {
        pattern,
        dominant,
        strength_ratio,
        confidence,
    }
}
