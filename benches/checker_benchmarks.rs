//! Performance benchmarks for the timesheet checker.
//!
//! This benchmark suite covers:
//! - Holiday calendar computation (cold) and cached lookup (warm)
//! - Checking a full 22-row timesheet
//! - Checking a batch of 1000 timesheets against one shared holiday cache
//! - Scaling with the number of entries
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use timesheet_checker::checker::Checker;
use timesheet_checker::config::CheckerConfig;
use timesheet_checker::holiday::{HolidayCalendar, HolidayProvider, HolidayService, Jurisdiction};
use timesheet_checker::models::{
    ClockTime, Employee, Entry, Profession, TimeSpan, Timesheet, WorkingArea,
};

/// Weekdays of November 2019 that are not holidays in Baden-Württemberg.
const WORKDAYS: [u32; 20] = [
    4, 5, 6, 7, 8, 11, 12, 13, 14, 15, 18, 19, 20, 21, 22, 25, 26, 27, 28, 29,
];

/// Creates a November 2019 timesheet with `entry_count` one-hour entries.
fn create_timesheet(entry_count: usize, staff_id: u32) -> Timesheet {
    let entries = (0..entry_count)
        .map(|i| {
            let day = WORKDAYS[i % WORKDAYS.len()];
            let hour = 8 + 2 * (i / WORKDAYS.len()) as u32;
            Entry::new(
                format!("Tutorium {}", i + 1),
                NaiveDate::from_ymd_opt(2019, 11, day).unwrap(),
                ClockTime::new(hour, 0).unwrap(),
                ClockTime::new(hour + 1, 0).unwrap(),
                TimeSpan::ZERO,
                false,
            )
            .unwrap()
        })
        .collect();

    Timesheet::new(
        Employee {
            name: format!("Employee {}", staff_id),
            staff_id,
        },
        Profession {
            department_name: "Fakultät für Informatik".to_string(),
            working_area: WorkingArea::Ub,
            max_working_time: TimeSpan::new(80, 0).unwrap(),
            hourly_wage: Decimal::new(1031, 2),
        },
        2019,
        11,
        entries,
        TimeSpan::ZERO,
        TimeSpan::ZERO,
    )
    .unwrap()
}

/// Benchmark: holiday calendar computation without and with the cache.
fn bench_holidays(c: &mut Criterion) {
    let mut group = c.benchmark_group("holidays");

    group.bench_function("compute_year_bw", |b| {
        b.iter(|| HolidayCalendar::compute(black_box(2024), Jurisdiction::BadenWuerttemberg))
    });

    let service = HolidayService::new();
    let date = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
    service.holidays(2024, "BW").unwrap();
    group.bench_function("cached_lookup", |b| {
        b.iter(|| service.is_holiday(black_box(date), "BW"))
    });

    group.finish();
}

/// Benchmark: one fully populated document.
fn bench_full_timesheet(c: &mut Criterion) {
    let sheet = create_timesheet(22, 1);
    let holidays = HolidayService::new();

    c.bench_function("check_22_entries", |b| {
        b.iter(|| {
            let mut checker = Checker::new(&sheet, &holidays, CheckerConfig::default());
            black_box(checker.check().unwrap())
        })
    });
}

/// Benchmark: batch of 1000 timesheets sharing one holiday service.
fn bench_batch_1000(c: &mut Criterion) {
    let sheets: Vec<Timesheet> = (0..1000).map(|i| create_timesheet(22, i)).collect();
    let holidays = HolidayService::new();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(1000));
    group.sample_size(10);

    group.bench_function("batch_1000", |b| {
        b.iter(|| {
            let verdicts: Vec<_> = sheets
                .iter()
                .map(|sheet| {
                    Checker::new(sheet, &holidays, CheckerConfig::default())
                        .check()
                        .unwrap()
                })
                .collect();
            black_box(verdicts)
        })
    });

    group.finish();
}

/// Benchmark: various entry counts to understand scaling behavior.
fn bench_scaling(c: &mut Criterion) {
    let holidays = HolidayService::new();
    let mut group = c.benchmark_group("scaling");

    for entry_count in [1, 5, 10, 22, 60].iter() {
        let sheet = create_timesheet(*entry_count, 1);
        group.throughput(Throughput::Elements(*entry_count as u64));
        group.bench_with_input(
            BenchmarkId::new("entries", entry_count),
            entry_count,
            |b, _| {
                b.iter(|| {
                    let mut checker = Checker::new(&sheet, &holidays, CheckerConfig::default());
                    black_box(checker.check().unwrap())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_holidays,
    bench_full_timesheet,
    bench_batch_1000,
    bench_scaling
);
criterion_main!(benches);
