// ============================================================================
// Typeahead Search Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Prefix vs Linear - symbol pass seeded by binary search vs full scan
// 2. Name Fallback - queries that only match company names
// 3. Typeahead - per-keystroke controller cost
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::sync::Arc;
use stock_typeahead::prelude::*;

/// Synthetic catalog of `size` three/four-letter tickers
fn build_catalog(size: usize) -> StockCatalog {
    StockCatalog::new((0..size).map(|i| {
        let a = (b'A' + (i % 26) as u8) as char;
        let b = (b'A' + ((i / 26) % 26) as u8) as char;
        let c = (b'A' + ((i / 676) % 26) as u8) as char;
        let symbol = if i % 3 == 0 {
            format!("{c}{b}{a}")
        } else {
            format!("{c}{b}{a}X")
        };
        StockEntry::new(symbol, format!("Company {i} Holdings"))
    }))
}

// ============================================================================
// Prefix vs Linear
// ============================================================================

fn benchmark_symbol_prefix(c: &mut Criterion) {
    let mut group = c.benchmark_group("symbol_prefix");

    for size in [100, 1_000, 10_000].iter() {
        let catalog = build_catalog(*size);

        group.bench_with_input(BenchmarkId::new("Prefix", size), &catalog, |b, catalog| {
            b.iter(|| black_box(PrefixMatcher.search(catalog, "BA", SearchLimit::DEFAULT)));
        });

        group.bench_with_input(BenchmarkId::new("Linear", size), &catalog, |b, catalog| {
            b.iter(|| black_box(LinearScanMatcher.search(catalog, "BA", SearchLimit::DEFAULT)));
        });
    }

    group.finish();
}

// ============================================================================
// Name Fallback
// ============================================================================

fn benchmark_name_fallback(c: &mut Criterion) {
    let mut group = c.benchmark_group("name_fallback");

    for size in [100, 1_000, 10_000].iter() {
        let catalog = build_catalog(*size);

        group.bench_with_input(BenchmarkId::new("Prefix", size), &catalog, |b, catalog| {
            b.iter(|| black_box(PrefixMatcher.search(catalog, "company 9", SearchLimit::DEFAULT)));
        });
    }

    group.finish();
}

// ============================================================================
// Typeahead Keystrokes
// ============================================================================

fn benchmark_typeahead_keystrokes(c: &mut Criterion) {
    let catalog = Arc::new(build_catalog(10_000));

    c.bench_function("typeahead_keystrokes", |b| {
        let search = StockSearchBuilder::new(Arc::clone(&catalog)).build().unwrap();
        let mut typeahead = Typeahead::new(search);

        b.iter(|| {
            for query in ["B", "BA", "BAC", "BACX"] {
                typeahead.on_input_change(query);
            }
            black_box(typeahead.on_key(Key::ArrowDown));
        });
    });
}

criterion_group!(
    benches,
    benchmark_symbol_prefix,
    benchmark_name_fallback,
    benchmark_typeahead_keystrokes
);
criterion_main!(benches);
