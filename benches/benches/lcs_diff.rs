//! Benchmarks for the LCS line diff.
//!
//! Performance-critical paths:
//! - `LcsTable::build`: the quadratic table fill
//! - `compute_diff`: split, table fill and backtrace together

#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use diff_engine::{LcsTable, compute_diff, split_lines};

/// Source-like text with `lines` lines.
fn sample_text(lines: usize) -> String {
    (0..lines)
        .map(|i| format!("    let value_{i} = compute({i}, {});", i % 7))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Copy of `text` with every `every`-th line edited.
fn edited(text: &str, every: usize) -> String {
    text.lines()
        .enumerate()
        .map(|(i, line)| {
            if i % every == 0 {
                format!("{line} // edited")
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_table_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("lcs_diff/table_build");

    for lines in [100usize, 500, 1000, 2000] {
        let old = sample_text(lines);
        let new = edited(&old, 10);
        let (old, new) = (split_lines(&old), split_lines(&new));

        group.throughput(Throughput::Elements((lines * lines) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &lines, |b, _| {
            b.iter(|| LcsTable::build(black_box(&old), black_box(&new)));
        });
    }

    group.finish();
}

fn bench_compute_diff(c: &mut Criterion) {
    let mut group = c.benchmark_group("lcs_diff/compute_diff");

    // Edit density changes how much of the walk lands on ties
    let cases = [("sparse", 50usize), ("moderate", 10), ("dense", 2)];

    for (name, every) in cases {
        let old = sample_text(1000);
        let new = edited(&old, every);

        group.bench_function(name, |b| {
            b.iter(|| compute_diff(black_box(&old), black_box(&new)));
        });
    }

    group.finish();
}

fn bench_identical(c: &mut Criterion) {
    let text = sample_text(1000);
    c.bench_function("lcs_diff/identical_1000", |b| {
        b.iter(|| compute_diff(black_box(&text), black_box(&text)));
    });
}

criterion_group!(benches, bench_table_build, bench_compute_diff, bench_identical);
criterion_main!(benches);
