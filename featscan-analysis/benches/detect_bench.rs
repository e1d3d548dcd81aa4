//! Detection benchmarks.
//!
//! Run with: cargo bench -p featscan-analysis --bench detect_bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use featscan_analysis::{detect_with_features, FeatureCatalog, FeatureScanner, JavaScriptParser};

const FIXTURE: &str = include_str!("../../test-fixtures/javascript/modern.js");

/// A module of `n` small functions mixing old and new syntax.
fn generated_source(n: usize) -> String {
    (0..n)
        .map(|i| {
            format!(
                r#"export const handler_{i} = async ({{ id, ...rest }} = {{}}) => {{
  const value = rest?.payload ?? 1_000 + {i};
  for (const [k, v] of Object.entries(rest)) {{ value ||= `${{k}}=${{v}}`; }}
  return await fetch(id);
}};
function legacy_{i}(a, b) {{ var c = a + b; return c; }}
"#
            )
        })
        .collect()
}

fn detect_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect_all");
    let scanner = FeatureScanner::standard();

    group.bench_function("fixture", |b| {
        b.iter(|| scanner.detect_with_all_features(FIXTURE));
    });
    for n in [10, 100, 1000] {
        let source = generated_source(n);
        group.bench_with_input(BenchmarkId::new("functions", n), &source, |b, source| {
            b.iter(|| scanner.detect_with_all_features(source));
        });
    }
    group.finish();
}

fn parse_vs_detect(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_vs_detect");
    group.sample_size(20);
    let source = generated_source(200);
    let parser = JavaScriptParser::default();
    let single = FeatureCatalog::standard().subset(&["arrow-function"]).unwrap();
    let all = FeatureCatalog::standard();

    group.bench_function("parse_only", |b| {
        b.iter(|| parser.parse(&source).unwrap());
    });
    group.bench_function("one_detector", |b| {
        b.iter(|| detect_with_features(&source, &single));
    });
    group.bench_function("all_detectors", |b| {
        b.iter(|| detect_with_features(&source, &all));
    });
    group.finish();
}

fn batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    group.sample_size(10);
    let scanner = FeatureScanner::standard();
    let sources: Vec<String> = (0..64).map(|_| generated_source(20)).collect();

    group.bench_function("sequential_64", |b| {
        b.iter(|| {
            for source in &sources {
                let _ = scanner.detect_with_all_features(source);
            }
        });
    });
    group.bench_function("parallel_64", |b| {
        b.iter(|| scanner.detect_batch(&sources));
    });
    group.finish();
}

criterion_group!(benches, detect_by_size, parse_vs_detect, batch);
criterion_main!(benches);
