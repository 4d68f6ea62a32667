//! Benchmarks for business-day arithmetic and catalog lookups

use bunker::chronos::{add_business_days, HolidaySet};
use bunker::{AppErrorCode, ApplicationError};
use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_add_business_days(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_business_days");
    let start = NaiveDate::from_ymd_opt(2022, 10, 3).unwrap_or_default();
    let holidays: HolidaySet = (0..365u64)
        .step_by(17)
        .map(|offset| start + Days::new(offset))
        .collect();

    for count in [7u32, 250, 5_000] {
        group.bench_with_input(BenchmarkId::new("no_holidays", count), &count, |b, &count| {
            b.iter(|| add_business_days(black_box(count), black_box(start), None));
        });
        group.bench_with_input(BenchmarkId::new("with_holidays", count), &count, |b, &count| {
            b.iter(|| add_business_days(black_box(count), black_box(start), Some(&holidays)));
        });
    }

    group.finish();
}

fn bench_catalog_lookup(c: &mut Criterion) {
    c.bench_function("application_error_from_status", |b| {
        b.iter(|| ApplicationError::from_http_status(black_box(404)));
    });
    c.bench_function("application_error_new", |b| {
        b.iter(|| ApplicationError::new(black_box(AppErrorCode::Conflict)));
    });
}

criterion_group!(benches, bench_add_business_days, bench_catalog_lookup);
criterion_main!(benches);
