//! Benchmarks for the CSV pipeline
//!
//! Measures tokenizing, parsing, extraction and grade evaluation on a
//! generated grade sheet.
//!
//! Run with: cargo bench --bench parse

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use gradecsv::{
    analyze, extract, parse, tokenize, write_csv, AdvisoryConfig, Config, GradeConfig,
    GradeEvaluator,
};

fn grade_sheet(rows: usize) -> String {
    let mut out = String::from(",,PA,Q1,Q2,PA,PA,LAB,EXA,PA,CAL,RED\n");
    for i in 0..rows {
        out.push_str(&format!(
            "{},\"STUDENT {}, NAME\",{},{},{}.5,10,10,{},7.24,{},,\n",
            i + 1,
            i,
            i % 11,
            (i * 3) % 11,
            i % 10,
            (i * 7) % 11,
            i % 10
        ));
    }
    out
}

fn bench_parse(c: &mut Criterion) {
    let small = grade_sheet(10);
    let large = grade_sheet(5_000);

    let mut g = c.benchmark_group("parse");
    for (name, input) in [("small", &small), ("large", &large)] {
        g.throughput(Throughput::Bytes(input.len() as u64));
        g.bench_function(format!("tokenize_{}", name), |b| {
            b.iter(|| tokenize(black_box(input)).map(|t| t.len()))
        });
        g.bench_function(format!("parse_{}", name), |b| {
            b.iter(|| parse(black_box(input)).map(|t| t.field_count()))
        });
        g.bench_function(format!("extract_{}", name), |b| {
            let advisory = AdvisoryConfig::default();
            b.iter(|| {
                let tree = parse(black_box(input)).ok()?;
                Some(extract(&tree, &advisory).total_fields())
            })
        });
    }
    g.finish();
}

fn bench_grades(c: &mut Criterion) {
    let input = grade_sheet(5_000);
    let analysis = match analyze(&input, &Config::default()) {
        Ok(analysis) => analysis,
        Err(e) => panic!("benchmark input does not parse: {}", e),
    };
    let evaluator = GradeEvaluator::new(GradeConfig::default());

    let mut g = c.benchmark_group("grades");
    g.bench_function("evaluate_large", |b| {
        b.iter(|| evaluator.evaluate(black_box(&analysis.document)).map(|r| r.rows.len()))
    });

    let report = match evaluator.evaluate(&analysis.document) {
        Ok(report) => report,
        Err(e) => panic!("benchmark input lacks grade columns: {}", e),
    };
    g.bench_function("write_large", |b| {
        b.iter(|| write_csv(black_box(&report.header), black_box(&report.rows)).len())
    });
    g.finish();
}

criterion_group!(benches, bench_parse, bench_grades);
criterion_main!(benches);
