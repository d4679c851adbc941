use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ut_diff::{apply, diff};

fn typing(c: &mut Criterion) {
    let before = "lorem ipsum dolor sit amet\n".repeat(400);
    let mut after = before.clone();
    after.insert_str(before.len() / 2, "consectetur ");

    c.bench_function("diff/local_insert_10k", |b| {
        b.iter(|| diff(black_box(&before), black_box(&after)))
    });

    let script = diff(&before, &after);
    c.bench_function("apply/local_insert_10k", |b| {
        b.iter(|| apply(black_box(&before), black_box(&script)))
    });
}

fn disjoint(c: &mut Criterion) {
    // Worst case: no shared chars, quadratic lookahead.
    let before = "a".repeat(1_000);
    let after = "b".repeat(1_000);
    c.bench_function("diff/disjoint_1k", |b| {
        b.iter(|| diff(black_box(&before), black_box(&after)))
    });
}

criterion_group!(benches, typing, disjoint);
criterion_main!(benches);
