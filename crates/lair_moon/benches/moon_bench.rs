use chrono::{NaiveDate, Utc};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use lair_moon::{BestNightsConfig, best_nights, moon_state, phase_name};
use lair_time::Epoch;

fn phase_bench(c: &mut Criterion) {
    let epoch = Epoch::from_utc(2024, 3, 20, 12, 0, 0.0).expect("valid date");

    let mut group = c.benchmark_group("moon_phase");
    group.bench_function("moon_state", |b| b.iter(|| moon_state(black_box(epoch))));
    group.bench_function("phase_name", |b| b.iter(|| phase_name(black_box(0.737))));
    group.finish();
}

fn best_nights_bench(c: &mut Criterion) {
    let start = NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date");
    let config = BestNightsConfig::default();

    let mut group = c.benchmark_group("best_nights");
    group.bench_function("30_days_utc", |b| {
        b.iter(|| best_nights(black_box(start), 30, &Utc, &config).expect("scan should succeed"))
    });
    group.finish();
}

criterion_group!(benches, phase_bench, best_nights_bench);
criterion_main!(benches);
