//! Ten-God strength distribution of a chart.
//!
//! Every visible stem except the day master counts 1.0 and every hidden
//! stem counts its role weight. Each contribution is scaled by how strong
//! its element is in the season of the month branch, then the ten totals
//! are normalized to sum to 1.

use bazi_base::{ALL_TEN_GODS, BaziChart, Branch, PillarPosition, Stem, TenGod, TenGodGroup, ten_god};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{CapabilityError, Result};

/// Strengths may exceed 1 by this much from rounding.
pub const STRENGTH_TOLERANCE: f64 = 0.001;

/// Seasonal coefficient per month branch, columns 木 火 土 金 水.
#[rustfmt::skip]
pub static SEASONAL_MATRIX: [[f64; 5]; 12] = [
    [0.68, 0.42, 0.58, 0.92, 1.42], // 子
    [0.52, 0.38, 1.28, 1.12, 0.88], // 丑
    [1.38, 0.78, 0.48, 0.52, 0.72], // 寅
    [1.58, 0.88, 0.42, 0.38, 0.62], // 卯
    [0.92, 0.72, 1.18, 0.68, 0.58], // 辰
    [0.48, 1.48, 0.82, 0.78, 0.32], // 巳
    [0.38, 1.68, 0.88, 0.62, 0.28], // 午
    [0.58, 0.98, 1.28, 0.72, 0.42], // 未
    [0.42, 0.58, 0.78, 1.42, 0.68], // 申
    [0.32, 0.48, 0.68, 1.62, 0.78], // 酉
    [0.68, 0.82, 1.18, 0.92, 0.48], // 戌
    [0.88, 0.52, 0.62, 0.78, 1.28], // 亥
];

/// Seasonal coefficients for the five elements in the given month.
pub fn seasonal_factors(month_branch: Branch) -> &'static [f64; 5] {
    &SEASONAL_MATRIX[month_branch.index() as usize]
}

/// Strength of each Ten God, indexed by `TenGod::index`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenGodStrengths([f64; 10]);

impl TenGodStrengths {
    pub const fn from_array(values: [f64; 10]) -> Self {
        Self(values)
    }

    pub const fn as_array(&self) -> &[f64; 10] {
        &self.0
    }

    pub const fn get(&self, god: TenGod) -> f64 {
        self.0[god.index() as usize]
    }

    pub fn set(&mut self, god: TenGod, value: f64) {
        self.0[god.index() as usize] = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (TenGod, f64)> + '_ {
        ALL_TEN_GODS.into_iter().zip(self.0.iter().copied())
    }

    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Sum over the two gods of a group.
    pub fn group(&self, group: TenGodGroup) -> f64 {
        self.iter()
            .filter(|(g, _)| g.group() == group)
            .map(|(_, v)| v)
            .sum()
    }

    /// Rescale so the values sum to 1. An all-zero distribution stays zero.
    pub fn normalized(self) -> Self {
        let total = self.total();
        if total > 0.0 {
            Self(self.0.map(|v| v / total))
        } else {
            self
        }
    }

    /// Strongest god and the runner-up value. Ties keep canonical order.
    pub fn dominant(&self) -> (TenGod, f64, f64) {
        let mut first = (TenGod::BiJian, f64::NEG_INFINITY);
        let mut second = f64::NEG_INFINITY;
        for (god, v) in self.iter() {
            if v > first.1 {
                second = first.1;
                first = (god, v);
            } else if v > second {
                second = v;
            }
        }
        (first.0, first.1, second.max(0.0))
    }

    /// Reject NaN, infinite, negative or above-one strengths.
    pub fn validate(&self) -> Result<()> {
        for (god, value) in self.iter() {
            if !value.is_finite() || value < 0.0 || value > 1.0 + STRENGTH_TOLERANCE {
                return Err(CapabilityError::InvalidStrength { god, value });
            }
        }
        Ok(())
    }
}

/// Normalized Ten-God strengths of a chart.
pub fn ten_god_strengths(chart: &BaziChart) -> TenGodStrengths {
    let day_master = chart.day_master();
    let season = seasonal_factors(chart.month.branch());
    let mut raw = TenGodStrengths::default();
    let mut add = |stem: Stem, weight: f64| {
        let god = ten_god(day_master, stem);
        let scaled = weight * season[stem.element().index() as usize];
        raw.set(god, raw.get(god) + scaled);
    };

    for pillar in chart.pillars() {
        if pillar.position != PillarPosition::Day {
            add(pillar.stem(), 1.0);
        }
        for hidden in pillar.hidden_stems() {
            add(hidden.stem, hidden.weight());
        }
    }

    trace!(raw_total = raw.total(), "ten-god strengths accumulated");
    raw.normalized()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart(s: &str) -> BaziChart {
        s.parse().unwrap()
    }

    #[test]
    fn strengths_sum_to_one() {
        let s = ten_god_strengths(&chart("甲子丙寅甲午甲子"));
        assert!((s.total() - 1.0).abs() < 1e-9);
        s.validate().unwrap();
    }

    #[test]
    fn season_boosts_matching_element() {
        // Same pillars, spring versus autumn month: wood companions weigh more in 寅.
        let spring = ten_god_strengths(&chart("甲子丙寅甲午甲子"));
        let autumn = ten_god_strengths(&chart("甲子壬申甲午甲子"));
        assert!(spring.group(TenGodGroup::Companion) > autumn.group(TenGodGroup::Companion));
    }

    #[test]
    fn validation_rejects_bad_values() {
        let mut s = TenGodStrengths::default();
        s.set(TenGod::QiSha, f64::NAN);
        assert!(matches!(
            s.validate(),
            Err(CapabilityError::InvalidStrength { god: TenGod::QiSha, .. })
        ));
        s.set(TenGod::QiSha, -0.1);
        assert!(s.validate().is_err());
        s.set(TenGod::QiSha, 1.0005);
        assert!(s.validate().is_ok());
        s.set(TenGod::QiSha, 1.01);
        assert!(s.validate().is_err());
    }

    #[test]
    fn dominant_and_runner_up() {
        let mut s = TenGodStrengths::default();
        s.set(TenGod::ZhengYin, 0.6);
        s.set(TenGod::ShiShen, 0.3);
        s.set(TenGod::BiJian, 0.1);
        assert_eq!(s.dominant(), (TenGod::ZhengYin, 0.6, 0.3));
    }

    #[test]
    fn empty_distribution_stays_empty() {
        assert_eq!(TenGodStrengths::default().normalized().total(), 0.0);
    }
}
