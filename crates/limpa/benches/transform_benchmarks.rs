//! Classification and transform benchmarks.
//!
//! Measures header classification, value-based phone detection and the full
//! normalize-and-mask pass across table sizes.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use limpa::{ColumnClassifier, DataTable, Parser, PhoneColumnDetector, TableTransformer};

/// Generate a synthetic contact table with the given number of rows.
///
/// Headers are generic so that phone detection has to sample values.
fn generate_contacts(rows: usize, labeled: bool) -> DataTable {
    let headers = if labeled {
        vec!["Nome", "Sobrenome", "Celular", "Cidade", "Observação"]
    } else {
        vec!["cliente", "familia", "contato", "cidade", "observacao"]
    };

    let data: Vec<Vec<String>> = (0..rows)
        .map(|row| {
            vec![
                format!("pessoa {}", row),
                if row % 3 == 0 { "DA SILVA".to_string() } else { "souza".to_string() },
                match row % 4 {
                    0 => format!("(11) 8{:03}-{:04}", row % 1000, row % 10_000),
                    1 => format!("+55 31 9{:04}-{:04}", row % 10_000, row % 10_000),
                    2 => format!("219{:08}", row % 100_000_000),
                    _ => "sem telefone".to_string(),
                },
                format!("Cidade {}", row % 50),
                "cliente desde 2019".to_string(),
            ]
        })
        .collect();

    DataTable::new(headers.into_iter().map(String::from).collect(), data, b',')
}

/// Benchmark header classification with labeled and unlabeled tables.
fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    let classifier = ColumnClassifier::new();

    for rows in [100, 1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(*rows as u64));

        let labeled = generate_contacts(*rows, true);
        group.bench_with_input(BenchmarkId::new("labeled", rows), &labeled, |b, table| {
            b.iter(|| black_box(classifier.classify(table)))
        });

        let unlabeled = generate_contacts(*rows, false);
        group.bench_with_input(
            BenchmarkId::new("unlabeled", rows),
            &unlabeled,
            |b, table| b.iter(|| black_box(classifier.classify(table))),
        );
    }

    group.finish();
}

/// Benchmark phone detection alone.
fn bench_detect(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect_phone");
    let detector = PhoneColumnDetector::new();

    for rows in [1_000, 10_000].iter() {
        let table = generate_contacts(*rows, false);
        group.throughput(Throughput::Elements(*rows as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &table, |b, table| {
            b.iter(|| black_box(detector.detect(table)))
        });
    }

    group.finish();
}

/// Benchmark the full normalize-and-mask pass.
fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");
    let transformer = TableTransformer::new();

    for rows in [100, 1_000, 10_000].iter() {
        let table = generate_contacts(*rows, true);
        group.throughput(Throughput::Elements(*rows as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &table, |b, table| {
            b.iter(|| black_box(transformer.transform(table)))
        });
    }

    group.finish();
}

/// Benchmark parsing a headerless export from memory.
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_bytes");
    let parser = Parser::new();

    for rows in [1_000, 10_000].iter() {
        let data: String = (0..*rows)
            .map(|row| format!("pessoa {},1198765{:04},Recife\n", row, row % 10_000))
            .collect();
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &data, |b, data| {
            b.iter(|| black_box(parser.parse_bytes(data.as_bytes()).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_classify,
    bench_detect,
    bench_transform,
    bench_parse,
);
criterion_main!(benches);
