use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fieldplan::{resource::rep::RecordShape, Session};

fn make_session(n: usize) -> Session {
    let mut s = Session::new();
    for i in 0..n {
        s.register_statement(&format!("stmt{i}"), "select 1").unwrap();
        s.register_data_type(&format!("rec{i}"), RecordShape::new("Rec"))
            .unwrap();
    }
    s
}

fn parse(c: &mut Criterion) {
    let s = make_session(64);
    let script = (0..64)
        .map(|i| {
            if i % 2 == 0 {
                format!("READ stmt{i}:col rec{i}:field")
            } else {
                format!("WRITE rec{i}:field stmt{i}:col")
            }
        })
        .collect::<Vec<_>>()
        .join("; ");

    c.bench_function("parse_64_commands", |b| {
        b.iter(|| s.parse(black_box(&script)).unwrap())
    });
}

criterion_group!(benches, parse);
criterion_main!(benches);
