//! Criterion benchmarks measure time of parsing and comparing perft output.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use itertools::{iproduct, Itertools};
use perftdiff::{compare, Record};

const FILES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];
const RANKS: [char; 8] = ['1', '2', '3', '4', '5', '6', '7', '8'];

/// Divide output with every from-to square pair, which is far more than any
/// position has legal moves but gives a stable workload. With `Some(skew)`,
/// every `skew`th count is off by one.
fn divide_output(skew: Option<usize>) -> String {
    let squares = iproduct!(FILES, RANKS)
        .map(|(file, rank)| format!("{file}{rank}"))
        .collect_vec();
    iproduct!(&squares, &squares)
        .enumerate()
        .map(|(i, (from, to))| {
            let count = 1000 + i;
            let skewed = skew.is_some_and(|skew| (i + 1) % skew == 0);
            format!("{from}{to}: {}", if skewed { count + 1 } else { count })
        })
        .join("\n")
}

fn parse_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let output = divide_output(None);
    let _ = group.throughput(Throughput::Bytes(output.len() as u64));
    let _ = group.bench_with_input(
        BenchmarkId::new("record", format!("{} lines", output.lines().count())),
        &output,
        |b, output| {
            b.iter(|| std::hint::black_box(Record::parse(output).unwrap()));
        },
    );
    group.finish();
}

fn compare_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare");
    let first = Record::parse(&divide_output(None)).unwrap();
    for skew in [Some(1), Some(10), None] {
        let second = Record::parse(&divide_output(skew)).unwrap();
        assert_eq!(
            compare(&first, &second).unwrap().differences().len(),
            skew.map_or(0, |skew| first.len() / skew)
        );
        let name = skew.map_or_else(
            || "no move differs".to_owned(),
            |skew| format!("every {skew}th move differs"),
        );
        let _ = group.throughput(Throughput::Elements(first.len() as u64));
        let _ = group.bench_with_input(
            BenchmarkId::new("records", name),
            &second,
            |b, second| {
                b.iter(|| std::hint::black_box(compare(&first, second).unwrap()));
            },
        );
    }
    group.finish();
}

criterion_group! {
    name = perftdiff;
    config = Criterion::default().sample_size(50);
    targets = parse_bench, compare_bench
}

criterion_main!(perftdiff);
