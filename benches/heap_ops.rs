//! Heap operation benchmarks
//!
//! Wall-clock timings for the core operations across input sizes.
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench heap_ops
//!
//! # Only the top-k group
//! cargo bench --bench heap_ops -- top_k
//! ```

use binary_heaps::{Heap, MaxHeap, MinHeap};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::collections::BinaryHeap as StdHeap;
use std::hint::black_box;

struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }
}

fn random_values(len: usize, seed: u64) -> Vec<u32> {
    let mut rng = Lcg::new(seed);
    (0..len).map(|_| (rng.next() >> 33) as u32).collect()
}

const SIZES: [usize; 3] = [1 << 8, 1 << 12, 1 << 16];

fn bench_heapify(c: &mut Criterion) {
    let mut group = c.benchmark_group("heapify");
    for &len in &SIZES {
        let values = random_values(len, 7);
        let label = format!("2^{}", len.trailing_zeros());

        group.bench_with_input(BenchmarkId::new("min_heap", &label), &values, |b, v| {
            b.iter(|| black_box(MinHeap::from_vec(v.clone())))
        });
        group.bench_with_input(BenchmarkId::new("max_heap", &label), &values, |b, v| {
            b.iter(|| black_box(MaxHeap::from_vec(v.clone())))
        });
        group.bench_with_input(BenchmarkId::new("std", &label), &values, |b, v| {
            b.iter(|| black_box(StdHeap::from(v.clone())))
        });
    }
    group.finish();
}

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");
    for &len in &SIZES {
        let values = random_values(len, 11);
        let label = format!("2^{}", len.trailing_zeros());

        group.bench_with_input(BenchmarkId::new("min_heap", &label), &values, |b, v| {
            b.iter(|| {
                let mut heap = MinHeap::new();
                for &x in v {
                    heap.push(x);
                }
                while let Ok(x) = heap.pop() {
                    black_box(x);
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("max_heap", &label), &values, |b, v| {
            b.iter(|| {
                let mut heap = MaxHeap::new();
                for &x in v {
                    heap.push(x);
                }
                while let Ok(x) = heap.pop() {
                    black_box(x);
                }
            })
        });
    }
    group.finish();
}

fn bench_pushpop_vs_push_then_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("pushpop");
    let len = 1 << 12;
    let base = MinHeap::from_vec(random_values(len, 13));
    let items = random_values(1_000, 17);

    group.bench_function("fused", |b| {
        b.iter(|| {
            let mut heap = base.clone();
            for &x in &items {
                black_box(heap.pushpop(x));
            }
        })
    });
    group.bench_function("push_then_pop", |b| {
        b.iter(|| {
            let mut heap = base.clone();
            for &x in &items {
                heap.push(x);
                black_box(heap.pop().ok());
            }
        })
    });
    group.finish();
}

fn bench_top_k(c: &mut Criterion) {
    let mut group = c.benchmark_group("top_k");
    let heap = MinHeap::from_vec(random_values(1 << 16, 19));
    for k in [1usize, 10, 100, 1 << 16] {
        group.bench_with_input(BenchmarkId::new("n_largest", k), &k, |b, &k| {
            b.iter(|| black_box(heap.n_largest(k).map(|top| top.len())))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_heapify,
    bench_push_pop,
    bench_pushpop_vs_push_then_pop,
    bench_top_k
);
criterion_main!(benches);
