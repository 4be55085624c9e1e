//! Golden and property tests for luck-cycle and fleeting-year projection.

use bazi_base::{BaziChart, GanZhi, Gender, Stem};
use bazi_luck::{
    Direction, LuckError, LuckOptions, active_cycle, cycle_transitions, fleeting_year,
    fleeting_years, luck_cycles, year_interaction,
};
use proptest::prelude::*;

fn chart(s: &str) -> BaziChart {
    s.parse().unwrap()
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

#[test]
fn direction_rule() {
    assert_eq!(Direction::of(Stem::Jia, Gender::Male), Direction::Forward);
    assert_eq!(Direction::of(Stem::Jia, Gender::Female), Direction::Backward);
    assert_eq!(Direction::of(Stem::Yi, Gender::Male), Direction::Backward);
    assert_eq!(Direction::of(Stem::Yi, Gender::Female), Direction::Forward);
}

#[test]
fn yin_year_female_runs_forward() {
    // 乙丑 year, 戊寅 month
    let c = chart("乙丑戊寅丙子戊子");
    let cycles = luck_cycles(&c, &LuckOptions::new(Gender::Female, 1985, 6)).unwrap();
    assert_eq!(cycles[0].ganzhi.name(), "己卯");
    assert_eq!(cycles[0].start_year, 1991);
}

// ---------------------------------------------------------------------------
// Fleeting years
// ---------------------------------------------------------------------------

#[test]
fn fleeting_years_cover_cycle() {
    let c = chart("甲子丙寅甲午甲子");
    let cycles = luck_cycles(&c, &LuckOptions::new(Gender::Male, 1984, 3)).unwrap();
    let years = fleeting_years(&c, 1984, &cycles[0]);
    assert_eq!(years.len(), 10);
    assert_eq!(years[0].year, 1987);
    assert_eq!(years[0].ganzhi.name(), "丁卯");
    assert_eq!(years[0].age, 3);
    assert_eq!(years[9].year, 1996);
    assert_eq!(years[9].ganzhi.name(), "丙子");
}

#[test]
fn active_cycle_matches_fleeting_age() {
    let c = chart("甲子丙寅甲午甲子");
    let cycles = luck_cycles(&c, &LuckOptions::new(Gender::Male, 1984, 3)).unwrap();
    let year = fleeting_year(c.day_master(), 1984, 2024);
    let active = active_cycle(&cycles, year.age as u32).unwrap();
    assert!(active.contains_year(2024));
    let interaction = year_interaction(c.day_master(), active, year.ganzhi);
    assert_eq!(interaction.cycle_number, active.number);
    assert!((10..=100).contains(&interaction.strength));
}

#[test]
fn serializes_camel_case() {
    let c = chart("甲子丙寅甲午甲子");
    let cycles = luck_cycles(&c, &LuckOptions::new(Gender::Male, 1984, 3)).unwrap();
    let json = serde_json::to_value(cycles[0]).unwrap();
    assert_eq!(json["startAge"], 3);
    assert_eq!(json["ganzhi"], "丁卯");
    assert_eq!(json["nayin"], "LuZhongHuo");
    assert_eq!(json["relationship"], "neutral");
    assert_eq!(json["tenGods"]["stem"], serde_json::to_value(cycles[0].ten_gods.stem).unwrap());
}

#[test]
fn user_supplied_bounds() {
    let c = chart("甲子丙寅甲午甲子");
    let err = luck_cycles(&c, &LuckOptions::new(Gender::Male, 1984, 500)).unwrap_err();
    assert_eq!(err, LuckError::StartAgeOutOfRange(500));
    assert_eq!(err.to_string(), "start age 500 outside 0..=120");
    let err = luck_cycles(&c, &LuckOptions::new(Gender::Male, 1984, 3).with_count(300))
        .unwrap_err();
    assert_eq!(err, LuckError::CycleCountOutOfRange(300));
}

#[test]
fn transitions_follow_cycles() {
    let c = chart("甲子丙寅甲午甲子");
    let cycles = luck_cycles(&c, &LuckOptions::new(Gender::Male, 1984, 3)).unwrap();
    let transitions = cycle_transitions(&cycles);
    assert_eq!(transitions.len(), 7);
    for (t, w) in transitions.iter().zip(cycles.windows(2)) {
        assert_eq!(t.from.number + 1, t.to.number);
        assert_eq!(t.age, w[1].start_age);
    }
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn consecutive_cycles_are_adjacent(
        idx in 0u8..60,
        male in any::<bool>(),
        start in 1u32..12,
    ) {
        let month = GanZhi::from_cycle_index(idx).unwrap();
        let year: GanZhi = "甲子".parse().unwrap();
        let day: GanZhi = "丙寅".parse().unwrap();
        let c = BaziChart::new(year, month, day, day);
        let gender = if male { Gender::Male } else { Gender::Female };
        let cycles = luck_cycles(&c, &LuckOptions::new(gender, 2000, start)).unwrap();
        let step = Direction::of(Stem::Jia, gender).step();
        for w in cycles.windows(2) {
            prop_assert_eq!(w[0].ganzhi.offset(step), w[1].ganzhi);
            prop_assert_eq!(w[0].end_age + 1, w[1].start_age);
            prop_assert_eq!(w[0].end_year + 1, w[1].start_year);
        }
        prop_assert_eq!(cycles[0].ganzhi, month.offset(step));
        for cycle in &cycles {
            prop_assert!((10..=100).contains(&cycle.strength));
            prop_assert_eq!(cycle.nayin, cycle.ganzhi.nayin());
        }
    }

    #[test]
    fn fleeting_ganzhi_repeats_every_sixty_years(year in -2000i32..4000) {
        let a = fleeting_year(Stem::Jia, 0, year);
        let b = fleeting_year(Stem::Jia, 0, year + 60);
        prop_assert_eq!(a.ganzhi, b.ganzhi);
        prop_assert_eq!(b.age - a.age, 60);
    }
}
