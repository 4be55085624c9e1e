use bazi_base::{Branch, Gender, Stem};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ziwei_base::{
    FiveElementsBureau, ZiweiBirth, build_ziwei_chart, five_elements_bureau, place_main_stars,
    ziwei_position,
};

fn resolver_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolvers");
    group.bench_function("five_elements_bureau", |b| {
        b.iter(|| five_elements_bureau(black_box(Stem::Xin), black_box(Branch::Wei)))
    });
    group.bench_function("ziwei_position", |b| {
        b.iter(|| ziwei_position(black_box(FiveElementsBureau::Earth5), black_box(17)))
    });
    group.bench_function("place_main_stars", |b| {
        b.iter(|| place_main_stars(black_box(Branch::Si)))
    });
    group.finish();
}

fn chart_bench(c: &mut Criterion) {
    let birth = ZiweiBirth {
        year_stem: Stem::Bing,
        lunar_month: 7,
        lunar_day: 23,
        hour_branch: Branch::Shen,
        gender: Gender::Female,
    };
    c.bench_function("build_ziwei_chart", |b| {
        b.iter(|| build_ziwei_chart(black_box(&birth)))
    });
}

criterion_group!(benches, resolver_bench, chart_bench);
criterion_main!(benches);
