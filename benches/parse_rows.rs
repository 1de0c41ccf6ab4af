use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use rowio::{InMemorySource, read_rows};

fn make_source(num_lines: usize) -> InMemorySource {
    let mut data = String::new();
    for i in 0..num_lines {
        data.push_str(&format!("alpha-{i}, beta-{i} ,{i}, {i}.5\n"));
    }
    InMemorySource::new("bench", data)
}

fn bench_read_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_rows_inmemory");

    for &n in &[16usize, 256, 4096] {
        group.bench_function(format!("lines_{n}"), |b| {
            b.iter_batched(
                || make_source(n),
                |source| {
                    let rows = read_rows(&source).expect("read_rows");
                    black_box(&rows);
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_read_rows);
criterion_main!(benches);
