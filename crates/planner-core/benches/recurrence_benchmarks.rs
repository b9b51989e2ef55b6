use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use planner_core::recurrence::{is_valid_rule, next_occurrence};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 2, 29).unwrap()
}

fn random_dates(count: usize) -> Vec<NaiveDate> {
    let mut rng = fastrand::Rng::with_seed(7);
    (0..count)
        .map(|_| base_date() + Duration::days(rng.i64(0..20_000)))
        .collect()
}

fn bench_day_rules(c: &mut Criterion) {
    let now = base_date() + Duration::days(20_000);
    let mut group = c.benchmark_group("next_occurrence_days");

    for step in [1u32, 7, 30, 400] {
        let rule = format!("d {}", step);
        group.bench_with_input(BenchmarkId::from_parameter(step), &rule, |b, rule| {
            b.iter(|| next_occurrence(black_box(now), black_box(base_date()), black_box(rule)))
        });
    }

    group.finish();
}

fn bench_yearly_rule(c: &mut Criterion) {
    let now = base_date() + Duration::days(20_000);

    c.bench_function("next_occurrence_yearly_55_years", |b| {
        b.iter(|| next_occurrence(black_box(now), black_box(base_date()), black_box("y")))
    });
}

fn bench_mixed_dates(c: &mut Criterion) {
    let now = base_date() + Duration::days(10_000);
    let dates = random_dates(1_000);

    c.bench_function("next_occurrence_mixed_1000", |b| {
        b.iter(|| {
            dates
                .iter()
                .filter_map(|from| next_occurrence(now, *from, black_box("d 13")))
                .count()
        })
    });
}

fn bench_rule_validation(c: &mut Criterion) {
    let rules = ["", "y", "d 7", "d 9999", "d abc", "w 3", "d 1 2"];

    c.bench_function("rule_validation", |b| {
        b.iter(|| rules.iter().filter(|r| is_valid_rule(black_box(r))).count())
    });
}

criterion_group!(
    benches,
    bench_day_rules,
    bench_yearly_rule,
    bench_mixed_dates,
    bench_rule_validation
);
criterion_main!(benches);
