//! Performance benchmarks for the contact store.
//!
//! These benchmarks measure:
//! - Substring search over stores of different sizes
//! - vCard parsing of a full export
//! - CSV parsing of a full export

use contact_book::codec::{csv, vcard};
use contact_book::{Contact, ContactStore};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Build a store with `size` distinct contacts.
fn create_test_store(size: usize) -> ContactStore {
    let mut store = ContactStore::new();
    for i in 0..size {
        store.add(Contact::new(
            format!("Last{}", i),
            format!("First{}", i),
            format!("{:010}", i),
            format!("user{}@example.com", i),
        ));
    }
    store
}

/// Benchmark search with a query matching one contact and with an empty query.
fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in [100, 1_000, 10_000] {
        let store = create_test_store(size);

        group.bench_with_input(BenchmarkId::new("single_match", size), &store, |b, store| {
            b.iter(|| store.search(black_box("user42@")))
        });

        group.bench_with_input(BenchmarkId::new("match_all", size), &store, |b, store| {
            b.iter(|| store.search(black_box("")))
        });
    }

    group.finish();
}

/// Benchmark parsing exported files back into contacts.
fn bench_parse(c: &mut Criterion) {
    let store = create_test_store(1_000);
    let vcard_text = store.export_vcard_string();
    let csv_text = store.export_csv_string();

    c.bench_function("parse_vcard_1000", |b| {
        b.iter(|| vcard::parse(black_box(&vcard_text)))
    });

    c.bench_function("parse_csv_1000", |b| {
        b.iter(|| csv::parse(black_box(&csv_text)))
    });
}

criterion_group!(benches, bench_search, bench_parse);
criterion_main!(benches);
