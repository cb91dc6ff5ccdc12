//! Benchmarks for trace rendering.
//!
//! ```bash
//! cargo bench --bench trace_render
//! ```

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use querytrace::prelude::*;
use querytrace::{ValueRenderer, normalize_bindings, normalize_slots};

fn positional_query(markers: usize) -> (String, Bindings) {
    let sql = format!(
        "INSERT INTO book VALUES ({})",
        vec!["?"; markers].join(", ")
    );
    let bindings = Bindings::positional((0..markers).map(|i| {
        if i % 2 == 0 {
            Binding::new(i as i64)
        } else {
            Binding::new(format!("value number {}", i))
        }
    }));
    (sql, bindings)
}

fn collecting_logger() -> DebugLogger {
    let mut logger = DebugLogger::new().with_probe(FixedProbe::interactive());
    logger.set_mode(LogMode::Collect);
    logger
}

/// Benchmark value rendering.
fn bench_value_renderer(c: &mut Criterion) {
    let mut group = c.benchmark_group("value_renderer");
    let renderer = ValueRenderer::default();

    group.bench_function("integer", |b| {
        let binding = Binding::new(123456);
        b.iter(|| black_box(renderer.render(black_box(&binding))))
    });

    group.bench_function("short_string", |b| {
        let binding = Binding::new("Dune");
        b.iter(|| black_box(renderer.render(black_box(&binding))))
    });

    group.bench_function("truncated_string", |b| {
        let binding = Binding::new("x".repeat(1024));
        b.iter(|| black_box(renderer.render(black_box(&binding))))
    });

    group.bench_function("null", |b| {
        let binding = Binding::null();
        b.iter(|| black_box(renderer.render(black_box(&binding))))
    });

    group.finish();
}

/// Benchmark placeholder and binding canonicalization.
fn bench_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalization");

    for markers in [1, 10, 100] {
        let (sql, bindings) = positional_query(markers);
        group.throughput(Throughput::Elements(markers as u64));

        group.bench_with_input(BenchmarkId::new("slots", markers), &sql, |b, sql| {
            b.iter(|| black_box(normalize_slots(black_box(sql), Surface::Markup)))
        });

        group.bench_with_input(BenchmarkId::new("bindings", markers), &bindings, |b, bindings| {
            b.iter(|| black_box(normalize_bindings(black_box(bindings))))
        });
    }

    group.finish();
}

/// Benchmark full rendering through the logger.
fn bench_log_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("log_query");

    for markers in [1, 10, 100] {
        let (sql, bindings) = positional_query(markers);
        group.throughput(Throughput::Elements(markers as u64));

        group.bench_with_input(
            BenchmarkId::new("positional", markers),
            &(sql, bindings),
            |b, (sql, bindings)| {
                let logger = collecting_logger();
                b.iter(|| black_box(logger.render(black_box(sql), black_box(bindings))))
            },
        );
    }

    group.bench_function("named", |b| {
        let logger = collecting_logger();
        let bindings = bindings! {
            ":title" => "Dune",
            ":author" => "Frank Herbert",
            ":year" => 1965,
            ":isbn" => ("0441013597", ParamType::String),
        };
        b.iter(|| {
            black_box(logger.render(
                "INSERT INTO book (title, author, year, isbn) VALUES (:title, :author, :year, :isbn)",
                black_box(&bindings),
            ))
        })
    });

    group.bench_function("buffered", |b| {
        let (sql, bindings) = positional_query(10);
        let mut logger = collecting_logger();
        b.iter(|| {
            logger.log(black_box(&sql), Some(black_box(&bindings)));
            if logger.len() > 10_000 {
                logger.clear();
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_value_renderer, bench_normalization, bench_log_query);
criterion_main!(benches);
