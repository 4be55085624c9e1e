use bazi_base::{BaziInput, Locale};
use bazi_relations::analyze;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn analyze_bench(c: &mut Criterion) {
    let busy: BaziInput = "甲子己丑甲寅己卯".parse().expect("valid chart");
    let quiet: BaziInput = "甲子甲子甲子甲子".parse().expect("valid chart");

    let mut group = c.benchmark_group("relations");
    group.bench_function("analyze_busy", |b| b.iter(|| analyze(black_box(&busy))));
    group.bench_function("analyze_quiet", |b| b.iter(|| analyze(black_box(&quiet))));
    group.bench_function("report_zh", |b| {
        let relations = analyze(&busy);
        b.iter(|| black_box(&relations).report(Locale::Zh))
    });
    group.finish();
}

criterion_group!(benches, analyze_bench);
criterion_main!(benches);
