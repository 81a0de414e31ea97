use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use linkref::LinkedPtr;

fn ring(count: usize) -> Vec<LinkedPtr<Vec<u8>>> {
    let first = LinkedPtr::new(vec![0; 64]);
    let mut owners = Vec::with_capacity(count);
    for _ in 1..count {
        owners.push(LinkedPtr::clone(&first));
    }
    owners.push(first);
    owners
}

fn bench_drop_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("drop single");
    group.bench_function("zero-sized-type", |b| {
        b.iter_batched(|| LinkedPtr::new(()), drop, BatchSize::SmallInput)
    });
    group.bench_function("byte", |b| {
        b.iter_batched(|| LinkedPtr::new(0_u8), drop, BatchSize::SmallInput)
    });
    group.bench_function("empty", |b| {
        b.iter_batched(LinkedPtr::<u8>::empty, drop, BatchSize::SmallInput)
    });
    group.finish();
}

fn bench_drop_ring(c: &mut Criterion) {
    let mut group = c.benchmark_group("drop a ring of owners");
    for size in [10_usize, 20, 30, 40, 50, 100] {
        group.bench_with_input(size.to_string(), &size, |b, &size| {
            b.iter_batched(|| ring(black_box(size)), drop, BatchSize::SmallInput)
        });
    }
    group.finish();
}

fn bench_drop_ring_reversed(c: &mut Criterion) {
    let mut group = c.benchmark_group("drop a ring of owners newest first");
    for size in [10_usize, 20, 30, 40, 50, 100] {
        group.bench_with_input(size.to_string(), &size, |b, &size| {
            b.iter_batched(
                || ring(black_box(size)),
                |mut owners| {
                    while let Some(owner) = owners.pop() {
                        drop(owner);
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_clone_into_ring(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone into a ring");
    for size in [1_usize, 10, 100] {
        group.bench_with_input(size.to_string(), &size, |b, &size| {
            let owners = ring(size);
            b.iter(|| LinkedPtr::clone(black_box(&owners[0])))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_drop_single,
    bench_drop_ring,
    bench_drop_ring_reversed,
    bench_clone_into_ring,
);
criterion_main!(benches);
