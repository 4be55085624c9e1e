//! Relation analysis over the four stems and four branches of a chart.
//!
//! Pairwise categories visit positions i < j in year, month, day, hour
//! order. Set categories (meetings, harmonies, punishments) report in table
//! order. The analyzer accepts any eight symbols and never fails.

use bazi_base::{ALL_POSITIONS, BaziInput, Branch, Element, Locale, Stem};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::findings::{
    ArmsLengthHarmony, BranchCombination, BranchPair, BranchTrio, HiddenArch, Placed, Punishment,
    StemCombination,
};
use crate::tables::{
    SELF_PUNISHING, THREE_HARMONIES, THREE_MEETINGS, arms_length_harmony, breaks, clashes,
    extinguishes, half_harmony, pierces, six_harmony, stem_combination,
};

/// All relations found in one chart, grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaziRelations {
    /// 天干五合
    pub stem_combinations: Vec<StemCombination>,
    /// 地支六合
    pub six_harmonies: Vec<BranchCombination>,
    /// 地支三会
    pub three_meetings: Vec<BranchTrio>,
    /// 地支三合
    pub three_harmonies: Vec<BranchTrio>,
    /// 地支半合
    pub half_harmonies: Vec<BranchCombination>,
    /// 地支拱合
    pub arms_length_harmonies: Vec<ArmsLengthHarmony>,
    /// 地支相冲
    pub clashes: Vec<BranchPair>,
    /// 地支相穿
    pub piercings: Vec<BranchPair>,
    /// 地支相刑
    pub punishments: Vec<Punishment>,
    /// 地支相破
    pub breaks: Vec<BranchPair>,
    /// 地支相绝
    pub extinctions: Vec<BranchPair>,
    /// 暗拱
    pub hidden_arches: Vec<HiddenArch>,
}

impl BaziRelations {
    /// Number of findings across all categories.
    pub fn len(&self) -> usize {
        self.stem_combinations.len()
            + self.six_harmonies.len()
            + self.three_meetings.len()
            + self.three_harmonies.len()
            + self.half_harmonies.len()
            + self.arms_length_harmonies.len()
            + self.clashes.len()
            + self.piercings.len()
            + self.punishments.len()
            + self.breaks.len()
            + self.extinctions.len()
            + self.hidden_arches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render every finding as text in the given locale.
    pub fn report(&self, locale: Locale) -> RelationsReport {
        fn render<T>(items: &[T], f: impl Fn(&T) -> String) -> Vec<String> {
            items.iter().map(f).collect()
        }
        RelationsReport {
            stem_combinations: render(&self.stem_combinations, |c| c.describe(locale)),
            six_harmonies: render(&self.six_harmonies, |c| c.describe_six_harmony(locale)),
            three_meetings: render(&self.three_meetings, |t| t.describe(locale)),
            three_harmonies: render(&self.three_harmonies, |t| t.describe(locale)),
            half_harmonies: render(&self.half_harmonies, |c| c.describe_half_harmony(locale)),
            arms_length_harmonies: render(&self.arms_length_harmonies, |a| a.describe(locale)),
            clashes: render(&self.clashes, |p| p.describe_clash(locale)),
            piercings: render(&self.piercings, |p| p.describe_piercing(locale)),
            punishments: render(&self.punishments, |p| p.describe(locale)),
            breaks: render(&self.breaks, |p| p.describe_break(locale)),
            extinctions: render(&self.extinctions, |p| p.describe_extinction(locale)),
            hidden_arches: render(&self.hidden_arches, |h| h.describe(locale)),
        }
    }
}

/// Localized text of every finding, one string list per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationsReport {
    pub stem_combinations: Vec<String>,
    pub six_harmonies: Vec<String>,
    pub three_meetings: Vec<String>,
    pub three_harmonies: Vec<String>,
    pub half_harmonies: Vec<String>,
    pub arms_length_harmonies: Vec<String>,
    pub clashes: Vec<String>,
    pub piercings: Vec<String>,
    pub punishments: Vec<String>,
    pub breaks: Vec<String>,
    pub extinctions: Vec<String>,
    pub hidden_arches: Vec<String>,
}

impl RelationsReport {
    /// Categories with their Chinese and English headings, in analysis order.
    pub fn sections(&self) -> [(&'static str, &'static str, &[String]); 12] {
        [
            ("天干五合", "Stem combinations", self.stem_combinations.as_slice()),
            ("地支六合", "Six harmonies", self.six_harmonies.as_slice()),
            ("地支三会", "Three meetings", self.three_meetings.as_slice()),
            ("地支三合", "Three harmonies", self.three_harmonies.as_slice()),
            ("地支半合", "Half harmonies", self.half_harmonies.as_slice()),
            ("地支拱合", "Arm's-length harmonies", self.arms_length_harmonies.as_slice()),
            ("地支相冲", "Clashes", self.clashes.as_slice()),
            ("地支相穿", "Piercings", self.piercings.as_slice()),
            ("地支相刑", "Punishments", self.punishments.as_slice()),
            ("地支相破", "Breaks", self.breaks.as_slice()),
            ("地支相绝", "Extinctions", self.extinctions.as_slice()),
            ("暗拱", "Hidden arches", self.hidden_arches.as_slice()),
        ]
    }
}

/// Visit every pair of positions i < j.
fn pairs<T: Copy>(values: [T; 4]) -> impl Iterator<Item = (Placed<T>, Placed<T>)> {
    (0..4).flat_map(move |i| {
        (i + 1..4).map(move |j| {
            (
                Placed::new(ALL_POSITIONS[i], values[i]),
                Placed::new(ALL_POSITIONS[j], values[j]),
            )
        })
    })
}

fn branch_pairs(
    branches: [Branch; 4],
    test: impl Fn(Branch, Branch) -> bool,
) -> Vec<BranchPair> {
    pairs(branches)
        .filter(|(a, b)| test(a.value, b.value))
        .map(|(first, second)| BranchPair { first, second })
        .collect()
}

fn branch_combinations(
    branches: [Branch; 4],
    lookup: impl Fn(Branch, Branch) -> Option<Element>,
) -> Vec<BranchCombination> {
    pairs(branches)
        .filter_map(|(first, second)| {
            lookup(first.value, second.value).map(|element| BranchCombination {
                pair: BranchPair { first, second },
                element,
            })
        })
        .collect()
}

fn stem_combinations(stems: [Stem; 4]) -> Vec<StemCombination> {
    pairs(stems)
        .filter_map(|(first, second)| {
            stem_combination(first.value, second.value).map(|element| StemCombination {
                first,
                second,
                element,
            })
        })
        .collect()
}

fn three_meetings(branches: &[Branch; 4]) -> Vec<BranchTrio> {
    THREE_MEETINGS
        .iter()
        .filter(|(trio, _, _)| trio.iter().all(|b| branches.contains(b)))
        .map(|&(trio, direction, element)| BranchTrio {
            branches: trio,
            element,
            direction: Some(direction),
        })
        .collect()
}

fn three_harmonies(branches: &[Branch; 4]) -> Vec<BranchTrio> {
    THREE_HARMONIES
        .iter()
        .filter(|(trio, _)| trio.iter().all(|b| branches.contains(b)))
        .map(|&(trio, element)| BranchTrio {
            branches: trio,
            element,
            direction: None,
        })
        .collect()
}

fn arms_length_harmonies(branches: [Branch; 4]) -> Vec<ArmsLengthHarmony> {
    pairs(branches)
        .filter_map(|(first, second)| {
            arms_length_harmony(first.value, second.value).map(|(center, element)| {
                ArmsLengthHarmony {
                    pair: BranchPair { first, second },
                    center,
                    element,
                }
            })
        })
        .collect()
}

fn punishments(branches: &[Branch; 4]) -> Vec<Punishment> {
    let has = |b: Branch| branches.contains(&b);
    let mut found = Vec::new();
    if has(Branch::Zi) && has(Branch::Mao) {
        found.push(Punishment::ZiMao);
    }
    if has(Branch::Yin) && has(Branch::Si) && has(Branch::Shen) {
        found.push(Punishment::YinSiShen);
    }
    if has(Branch::Chou) && has(Branch::Xu) && has(Branch::Wei) {
        found.push(Punishment::ChouXuWei);
    }
    for &b in &SELF_PUNISHING {
        if branches.iter().filter(|&&x| x == b).count() >= 2 {
            found.push(Punishment::SelfPunishment(b));
        }
    }
    found
}

/// Middle branch arched by two branches two places apart. `None` for any
/// other spacing.
///
/// Pairs straddling the 亥/子 boundary take fixed arches: 戌 and 子 give 亥,
/// 亥 and 丑 give 丑.
pub fn arched_middle(a: Branch, b: Branch) -> Option<Branch> {
    let (lo, hi) = if a.index() <= b.index() { (a, b) } else { (b, a) };
    match hi.index() - lo.index() {
        2 => Some(lo.offset(1)),
        10 if lo == Branch::Zi => Some(Branch::Hai),
        10 => Some(Branch::Chou),
        _ => None,
    }
}

fn hidden_arches(input: &BaziInput) -> Vec<HiddenArch> {
    let stems = input.stems();
    let branches = input.branches();
    (0..3)
        .filter(|&i| stems[i] == stems[i + 1])
        .filter_map(|i| {
            arched_middle(branches[i], branches[i + 1]).map(|middle| HiddenArch {
                first: ALL_POSITIONS[i],
                second: ALL_POSITIONS[i + 1],
                middle,
            })
        })
        .collect()
}

/// Analyze all twelve relation categories of a chart.
pub fn analyze(input: &BaziInput) -> BaziRelations {
    let stems = input.stems();
    let branches = input.branches();

    let relations = BaziRelations {
        stem_combinations: stem_combinations(stems),
        six_harmonies: branch_combinations(branches, six_harmony),
        three_meetings: three_meetings(&branches),
        three_harmonies: three_harmonies(&branches),
        half_harmonies: branch_combinations(branches, half_harmony),
        arms_length_harmonies: arms_length_harmonies(branches),
        clashes: branch_pairs(branches, clashes),
        piercings: branch_pairs(branches, pierces),
        punishments: punishments(&branches),
        breaks: branch_pairs(branches, breaks),
        extinctions: branch_pairs(branches, extinguishes),
        hidden_arches: hidden_arches(input),
    };
    debug!(
        chart = %input,
        total = relations.len(),
        clashes = relations.clashes.len(),
        combinations = relations.stem_combinations.len(),
        "relations analyzed"
    );
    relations
}
