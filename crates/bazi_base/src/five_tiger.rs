//! Five-Tiger-Dun (五虎遁) and Five-Rat-Dun (五鼠遁).
//!
//! The year stem fixes the stem of the 寅 month; later months follow the
//! stem cycle. Likewise the day stem fixes the stem of the 子 hour.

use crate::branch::Branch;
use crate::ganzhi::GanZhi;
use crate::stem::Stem;

/// Stem of the 寅 month for a given year stem.
///
/// 甲己→丙, 乙庚→戊, 丙辛→庚, 丁壬→壬, 戊癸→甲.
pub const fn tiger_seed(year_stem: Stem) -> Stem {
    // pair group g seeds at stem 2g+2
    Stem::Bing.offset(2 * year_stem.pair_group() as i32)
}

/// Month stem for a year stem and month branch.
pub const fn month_stem(year_stem: Stem, month_branch: Branch) -> Stem {
    tiger_seed(year_stem).offset(month_branch.month_ordinal() as i32)
}

/// Month pillar for a year stem and month branch.
pub const fn month_pillar(year_stem: Stem, month_branch: Branch) -> GanZhi {
    let stem = month_stem(year_stem, month_branch);
    // stem and branch advance together from a same-parity seed at 寅
    GanZhi::from_cycle_index_wrapping(cycle_index_of(stem, month_branch) as i64)
}

/// Stem of the 子 hour for a given day stem.
///
/// 甲己→甲, 乙庚→丙, 丙辛→戊, 丁壬→庚, 戊癸→壬.
pub const fn rat_seed(day_stem: Stem) -> Stem {
    Stem::Jia.offset(2 * day_stem.pair_group() as i32)
}

/// Hour pillar for a day stem and hour branch.
pub const fn hour_pillar(day_stem: Stem, hour_branch: Branch) -> GanZhi {
    let stem = rat_seed(day_stem).offset(hour_branch.index() as i32);
    GanZhi::from_cycle_index_wrapping(cycle_index_of(stem, hour_branch) as i64)
}

const fn cycle_index_of(stem: Stem, branch: Branch) -> i32 {
    (6 * stem.index() as i32 - 5 * branch.index() as i32).rem_euclid(60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::MONTH_ORDER;

    #[test]
    fn tiger_seeds() {
        assert_eq!(tiger_seed(Stem::Jia), Stem::Bing);
        assert_eq!(tiger_seed(Stem::Ji), Stem::Bing);
        assert_eq!(tiger_seed(Stem::Yi), Stem::Wu);
        assert_eq!(tiger_seed(Stem::Geng), Stem::Wu);
        assert_eq!(tiger_seed(Stem::Bing), Stem::Geng);
        assert_eq!(tiger_seed(Stem::Xin), Stem::Geng);
        assert_eq!(tiger_seed(Stem::Ding), Stem::Ren);
        assert_eq!(tiger_seed(Stem::Ren), Stem::Ren);
        assert_eq!(tiger_seed(Stem::Wu), Stem::Jia);
        assert_eq!(tiger_seed(Stem::Gui), Stem::Jia);
    }

    #[test]
    fn jia_year_months() {
        let names: Vec<String> = MONTH_ORDER
            .iter()
            .map(|&b| month_pillar(Stem::Jia, b).name())
            .collect();
        assert_eq!(
            names,
            vec![
                "丙寅", "丁卯", "戊辰", "己巳", "庚午", "辛未", "壬申", "癸酉", "甲戌", "乙亥",
                "丙子", "丁丑"
            ]
        );
    }

    #[test]
    fn month_stem_wraps_into_next_year() {
        // 戊 year: 寅 month 甲寅, 丑 month 乙丑
        assert_eq!(month_stem(Stem::Wu, Branch::Yin), Stem::Jia);
        assert_eq!(month_stem(Stem::Wu, Branch::Chou), Stem::Yi);
    }

    #[test]
    fn rat_seeds_and_hours() {
        assert_eq!(rat_seed(Stem::Jia), Stem::Jia);
        assert_eq!(rat_seed(Stem::Yi), Stem::Bing);
        assert_eq!(rat_seed(Stem::Gui), Stem::Ren);
        assert_eq!(hour_pillar(Stem::Jia, Branch::Zi).name(), "甲子");
        assert_eq!(hour_pillar(Stem::Geng, Branch::Wu).name(), "壬午");
        assert_eq!(hour_pillar(Stem::Gui, Branch::Hai).name(), "癸亥");
    }
}
