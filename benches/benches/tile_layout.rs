// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for tile auto-layout.
//!
//! Run:
//! - `cargo bench -p understory_benches`
//!
//! Groups:
//! - `rasterize`: filling a grid from neighbor bounds
//! - `best_fit`: the full shrink and expand at various tab counts

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use kurbo::Rect;
use understory_tile_layout::{TabRect, TileLayoutEngine};

/// An `n` x `n` tiling of the window, keyed in row-major order.
fn tiling(n: u32) -> Vec<TabRect<u32>> {
    let step = 100.0 / f64::from(n);
    (0..n * n)
        .map(|i| {
            let (col, row) = (f64::from(i % n), f64::from(i / n));
            TabRect::new(
                i,
                Rect::new(col * step, row * step, (col + 1.0) * step, (row + 1.0) * step),
            )
        })
        .collect()
}

fn bench_rasterize(c: &mut Criterion) {
    let engine = TileLayoutEngine::default();
    let mut group = c.benchmark_group("rasterize");
    for n in [2_u32, 4, 8] {
        let bounds: Vec<Rect> = tiling(n).iter().map(|tab| tab.bounds).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n * n), &bounds, |b, bounds| {
            b.iter(|| engine.rasterize(black_box(bounds).iter().copied()));
        });
    }
    group.finish();
}

fn bench_best_fit(c: &mut Criterion) {
    let engine = TileLayoutEngine::default();
    let mut group = c.benchmark_group("best_fit");
    for n in [2_u32, 4, 8] {
        let mut tabs = tiling(n);
        // Drag the first tab halfway into its right-hand neighbor.
        let step = 100.0 / f64::from(n);
        tabs[0].bounds.x1 += step / 2.0;
        group.bench_with_input(BenchmarkId::new("overlapping", n * n), &tabs, |b, tabs| {
            b.iter(|| engine.shrink_and_expand_to_fill_empty_space(black_box(tabs), &tabs[0]));
        });

        // Remove the first tab's right-hand neighbor so it has room to grow.
        let mut sparse = tiling(n);
        sparse.remove(1);
        group.bench_with_input(BenchmarkId::new("gap", n * n), &sparse, |b, tabs| {
            b.iter(|| engine.shrink_and_expand_to_fill_empty_space(black_box(tabs), &tabs[0]));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rasterize, bench_best_fit);
criterion_main!(benches);
