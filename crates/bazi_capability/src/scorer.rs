//! Six-capability scoring from Ten-God strengths.

use bazi_base::{BaziChart, TenGod};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::capability::{ALL_CAPABILITIES, Capability};
use crate::error::{CapabilityError, Result};
use crate::pattern::{PatternDetection, detect_pattern};
use crate::strength::{TenGodStrengths, ten_god_strengths};

/// Tuning parameters of the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapabilityConfig {
    /// Multiplier applied to the summed score.
    pub amplification_factor: f64,
    /// Strengths above this earn a dominance bonus.
    pub dominance_threshold: f64,
    pub dominance_bonus_factor: f64,
    pub min_score: f64,
    pub max_score: f64,
    /// Use the square root of each strength in the base score.
    pub smooth: bool,
}

impl Default for CapabilityConfig {
    fn default() -> Self {
        Self {
            amplification_factor: 2.2,
            dominance_threshold: 0.3,
            dominance_bonus_factor: 60.0,
            min_score: 15.0,
            max_score: 100.0,
            smooth: true,
        }
    }
}

impl CapabilityConfig {
    pub fn validate(&self) -> Result<()> {
        let finite = [
            self.amplification_factor,
            self.dominance_threshold,
            self.dominance_bonus_factor,
            self.min_score,
            self.max_score,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err(CapabilityError::InvalidConfig("non-finite parameter".into()));
        }
        if self.min_score > self.max_score {
            return Err(CapabilityError::InvalidConfig(format!(
                "min_score {} exceeds max_score {}",
                self.min_score, self.max_score
            )));
        }
        if self.amplification_factor <= 0.0 {
            return Err(CapabilityError::InvalidConfig(format!(
                "amplification_factor {} must be positive",
                self.amplification_factor
            )));
        }
        Ok(())
    }
}

/// One Ten God's share of a base score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    pub god: TenGod,
    pub strength: f64,
    pub weight: f64,
    pub value: f64,
}

/// Breakdown of one capability score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityScore {
    pub capability: Capability,
    /// Clamped and rounded to one decimal.
    pub score: f64,
    pub base: f64,
    pub dominance_bonus: f64,
    pub pattern_bonus: f64,
    /// Largest three base contributions, descending.
    pub top_contributions: Vec<Contribution>,
}

/// Spread between the strongest and weakest capability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Polarization {
    pub disparity: f64,
    /// 1 when all scores are equal, 0 at a spread of 100 or more.
    pub balance: f64,
}

impl Polarization {
    pub fn of(scores: &[CapabilityScore]) -> Self {
        let max = scores.iter().map(|s| s.score).fold(f64::NEG_INFINITY, f64::max);
        let min = scores.iter().map(|s| s.score).fold(f64::INFINITY, f64::min);
        let disparity = if scores.is_empty() { 0.0 } else { max - min };
        Self {
            disparity,
            balance: 1.0 - (disparity / 100.0).clamp(0.0, 1.0),
        }
    }
}

/// Full assessment of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityAssessment {
    pub strengths: TenGodStrengths,
    pub pattern: PatternDetection,
    /// In `ALL_CAPABILITIES` order.
    pub scores: Vec<CapabilityScore>,
    pub polarization: Polarization,
}

impl CapabilityAssessment {
    pub fn score(&self, capability: Capability) -> Option<f64> {
        self.scores
            .iter()
            .find(|s| s.capability == capability)
            .map(|s| s.score)
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn score_capability(
    capability: Capability,
    strengths: &TenGodStrengths,
    pattern: &PatternDetection,
    config: &CapabilityConfig,
) -> CapabilityScore {
    let mut contributions: Vec<Contribution> = strengths
        .iter()
        .filter(|&(_, s)| s > 0.0)
        .map(|(god, strength)| {
            let effective = if config.smooth { strength.sqrt() } else { strength };
            let weight = capability.weight(god);
            Contribution {
                god,
                strength,
                weight,
                value: effective * weight * 100.0,
            }
        })
        .collect();
    let base: f64 = contributions.iter().map(|c| c.value).sum();

    let dominance_bonus: f64 = strengths
        .iter()
        .filter(|&(_, s)| s > config.dominance_threshold)
        .map(|(god, s)| s * capability.weight(god) * config.dominance_bonus_factor)
        .sum();

    let pattern_bonus = pattern.pattern.bonus(capability) * pattern.confidence;

    let raw = (base + dominance_bonus + pattern_bonus) * config.amplification_factor;
    let score = round1(raw.clamp(config.min_score, config.max_score));

    contributions.sort_by(|a, b| b.value.total_cmp(&a.value));
    contributions.truncate(3);

    CapabilityScore {
        capability,
        score,
        base,
        dominance_bonus,
        pattern_bonus,
        top_contributions: contributions,
    }
}

/// Score a validated strength distribution.
pub fn score_strengths(
    strengths: &TenGodStrengths,
    config: &CapabilityConfig,
) -> Result<CapabilityAssessment> {
    config.validate()?;
    strengths.validate()?;

    let pattern = detect_pattern(strengths);
    let scores: Vec<CapabilityScore> = ALL_CAPABILITIES
        .iter()
        .map(|&c| score_capability(c, strengths, &pattern, config))
        .collect();
    let polarization = Polarization::of(&scores);

    debug!(
        pattern = pattern.pattern.name(),
        confidence = pattern.confidence,
        disparity = polarization.disparity,
        "capabilities scored"
    );
    Ok(CapabilityAssessment {
        strengths: *strengths,
        pattern,
        scores,
        polarization,
    })
}

/// Compute strengths from the chart and score them.
pub fn assess(chart: &BaziChart, config: &CapabilityConfig) -> Result<CapabilityAssessment> {
    score_strengths(&ten_god_strengths(chart), config)
}
