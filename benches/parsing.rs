//! Parsing benchmarks: stride report decoding and interval merging

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use idrtools::{merge_ranges, DisorderTable, RegionTable};
use std::io::Cursor;

fn synthetic_stride_report(records: usize, residues: usize) -> String {
    let mut report = String::from("h1\nh2\nh3\nh4\nh5\nh6\nh7\nh8\n");
    let residue_line = vec!["A"; residues].join(",");
    let flag_line = vec!["1"; residues].join(",");
    let score_line = vec!["0.75"; residues].join(",");
    for i in 0..records {
        report.push_str(&format!(
            ">P{}\n10-40,55-90\n{}\n{}\n{}\n",
            i, residue_line, flag_line, score_line
        ));
    }
    report
}

fn synthetic_region_report(records: usize, residues: usize) -> String {
    let mut report = String::new();
    for i in 0..records {
        report.push_str(&format!(">p{}\n", i));
        for pos in 1..=residues {
            report.push_str(&format!("{} A 0.42 {}\n", pos, pos % 2));
        }
    }
    report
}

fn bench_stride_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("stride_parse");
    for records in [10usize, 100] {
        let report = synthetic_stride_report(records, 400);
        group.bench_with_input(BenchmarkId::from_parameter(records), &report, |b, report| {
            b.iter(|| DisorderTable::from_reader(Cursor::new(black_box(report.as_bytes()))).unwrap())
        });
    }
    group.finish();
}

fn bench_region_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("region_parse");
    for records in [10usize, 100] {
        let report = synthetic_region_report(records, 400);
        group.bench_with_input(BenchmarkId::from_parameter(records), &report, |b, report| {
            b.iter(|| RegionTable::from_reader(Cursor::new(black_box(report.as_bytes()))).unwrap())
        });
    }
    group.finish();
}

fn bench_merge_ranges(c: &mut Criterion) {
    let text: String = (0..200)
        .map(|i| format!("{}-{}", i * 30, i * 30 + 12))
        .collect::<Vec<_>>()
        .join(",");
    c.bench_function("merge_ranges_200", |b| {
        b.iter(|| merge_ranges(black_box(&text), 10))
    });
}

criterion_group!(
    benches,
    bench_stride_parsing,
    bench_region_parsing,
    bench_merge_ranges
);
criterion_main!(benches);
