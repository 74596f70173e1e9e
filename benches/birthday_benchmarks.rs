//! Performance benchmarks for the upcoming birthday report.
//!
//! These benchmarks measure report time as the address book grows, with
//! every contact carrying a birthday spread evenly over the year.

use chrono::NaiveDate;
use contact_book::{AddressBook, ContactRecord};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;

/// Build a book of `size` contacts with birthdays cycling through the year.
fn create_test_book(size: usize) -> AddressBook {
    (0..size)
        .map(|i| {
            let mut record = ContactRecord::new(format!("contact_{}", i)).unwrap();
            record.add_phone(format!("{:010}", i)).unwrap();
            let day = (i % 28) + 1;
            let month = (i % 12) + 1;
            record
                .add_birthday(format!("{:02}.{:02}.1990", day, month))
                .unwrap();
            record
        })
        .collect()
}

/// Benchmark the report over books of increasing size.
fn bench_upcoming_birthdays(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
    let mut group = c.benchmark_group("upcoming_birthdays");

    for size in [10, 100, 1_000, 10_000] {
        let book = create_test_book(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &book, |b, book| {
            b.iter(|| book.upcoming_birthdays(black_box(today)));
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(5))
        .sample_size(50);
    targets = bench_upcoming_birthdays
}

criterion_main!(benches);
