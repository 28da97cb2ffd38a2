use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use minheap::MinHeap;
use rand::seq::SliceRandom;

fn shuffled(n: u32) -> Vec<u32> {
    let mut values: Vec<u32> = (0..n).collect();
    values.shuffle(&mut rand::thread_rng());
    values
}

fn insert_then_extract(c: &mut Criterion) {
    let values = shuffled(10_000);

    c.bench_function("insert_10k", |b| {
        b.iter(|| {
            let mut heap = MinHeap::with_capacity(values.len());
            for v in values.iter().copied() {
                heap.insert(v);
            }
            black_box(heap)
        });
    });

    c.bench_function("extract_all_10k", |b| {
        b.iter_batched(
            || MinHeap::from_vec(values.clone()),
            |mut heap| {
                while let Some(v) = heap.extract_min() {
                    black_box(v);
                }
            },
            BatchSize::SmallInput,
        );
    });
}

fn heapify(c: &mut Criterion) {
    let values = shuffled(10_000);

    c.bench_function("from_vec_10k", |b| {
        b.iter_batched(
            || values.clone(),
            |values| black_box(MinHeap::from_vec(values)),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, insert_then_extract, heapify);
criterion_main!(benches);
