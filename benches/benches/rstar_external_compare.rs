// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use bramble_tree::{Aabb2D, AabbTree};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};

use rstar::RTree;
use rstar::primitives::Rectangle;

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

fn to_rstar_rects(v: &[Aabb2D<f64>]) -> Vec<Rectangle<[f64; 2]>> {
    v.iter()
        .map(|r| Rectangle::from_corners([r.min_x, r.min_y], [r.max_x, r.max_y]))
        .collect()
}

fn bench_rstar_external_compare_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("rstar_external_compare_f64");
    for &n in &[32usize, 64] {
        let rects = gen_grid_rects(n, 10.0);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("bramble_build_teardown_n{}", n), |b| {
            b.iter(|| {
                let mut tree: AabbTree<f64, u32> = AabbTree::new();
                for (i, r) in rects.iter().copied().enumerate() {
                    tree.insert(r, i as u32);
                }
                for (i, r) in rects.iter().enumerate() {
                    let _ = tree.remove(r, &(i as u32));
                }
                black_box(tree.is_empty());
            })
        });

        group.bench_function(format!("rstar_build_teardown_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_rects(&rects),
                |rectangles| {
                    let mut tree = RTree::new();
                    for r in rectangles.iter().cloned() {
                        tree.insert(r);
                    }
                    for r in &rectangles {
                        let _ = tree.remove(r);
                    }
                    black_box(tree.size());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rstar_external_compare_f64);
criterion_main!(benches);
