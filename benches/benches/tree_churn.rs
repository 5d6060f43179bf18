// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bramble_tree::{Aabb2D, AabbTree};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};

fn gen_grid_rects(n: usize, cell: f64) -> Vec<Aabb2D<f64>> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            out.push(Aabb2D::<f64>::from_xywh(x0, y0, cell, cell));
        }
    }
    out
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_random_rects(count: usize, extent: f64, max_size: f64) -> Vec<Aabb2D<f64>> {
    let mut rng = Rng::new(0xbadc_0ffe_e0dd_f00d);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let x = rng.next_f64() * extent;
        let y = rng.next_f64() * extent;
        let w = 1.0 + rng.next_f64() * max_size;
        let h = 1.0 + rng.next_f64() * max_size;
        out.push(Aabb2D::<f64>::from_xywh(x, y, w, h));
    }
    out
}

fn bench_incremental_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("incremental_build");
    for &n in &[32usize, 64] {
        let rects = gen_grid_rects(n, 10.0);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("grid_n{}", n), |b| {
            b.iter(|| {
                let mut tree: AabbTree<f64, u32> = AabbTree::new();
                for (i, r) in rects.iter().copied().enumerate() {
                    tree.insert(r, i as u32);
                }
                black_box(tree.height());
            })
        });

        let random = gen_random_rects(n * n, n as f64 * 10.0, 50.0);
        group.bench_function(format!("random_n{}", n), |b| {
            b.iter(|| {
                let mut tree: AabbTree<f64, u32> = AabbTree::new();
                for (i, r) in random.iter().copied().enumerate() {
                    tree.insert(r, i as u32);
                }
                black_box(tree.height());
            })
        });
    }
    group.finish();
}

fn bench_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("churn");
    for &n in &[1024usize, 4096] {
        let rects = gen_random_rects(n, 1000.0, 50.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("remove_reinsert_n{}", n), |b| {
            b.iter_batched(
                || {
                    let mut tree: AabbTree<f64, u32> = AabbTree::new();
                    for (i, r) in rects.iter().copied().enumerate() {
                        tree.insert(r, i as u32);
                    }
                    tree
                },
                |mut tree| {
                    // Remove and reinsert every tenth entry.
                    for (i, r) in rects.iter().enumerate().step_by(10) {
                        let removed = tree.remove(r, &(i as u32));
                        assert!(removed, "entry must be present");
                        tree.insert(*r, i as u32);
                    }
                    black_box(tree.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_teardown(c: &mut Criterion) {
    let mut group = c.benchmark_group("teardown");
    let n = 2048usize;
    let rects = gen_random_rects(n, 1000.0, 50.0);
    group.throughput(Throughput::Elements(n as u64));
    group.bench_function("remove_all_n2048", |b| {
        b.iter_batched(
            || {
                let mut tree: AabbTree<f64, u32> = AabbTree::new();
                for (i, r) in rects.iter().copied().enumerate() {
                    tree.insert(r, i as u32);
                }
                tree
            },
            |mut tree| {
                for (i, r) in rects.iter().enumerate() {
                    let removed = tree.remove(r, &(i as u32));
                    assert!(removed, "entry must be present");
                }
                black_box(tree.is_empty());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_incremental_build, bench_churn, bench_teardown);
criterion_main!(benches);
