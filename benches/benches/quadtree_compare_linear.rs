// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use quadrille_geom::Frame;
use quadrille_index::QuadTree;

const WORLD: Frame = Frame::new(0.0, 0.0, 2000.0, 2000.0);
const QUERY: Frame = Frame::new(800.0, 800.0, 400.0, 400.0);

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

fn gen_uniform_points(count: usize) -> Vec<Point> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for _ in 0..count {
        out.push(Point::new(
            rng.next_f64() * WORLD.w,
            rng.next_f64() * WORLD.h,
        ));
    }
    out
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((
            spread + rng.next_f64() * (WORLD.w - 2.0 * spread),
            spread + rng.next_f64() * (WORLD.h - 2.0 * spread),
        ));
    }
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(Point::new(cx + dx, cy + dy));
        }
    }
    out
}

fn gen_flat_buffer(count: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(count * 2);
    let mut rng = Rng::new(0xFACE_FEED_CAFE_BABE);
    for _ in 0..count {
        out.push(rng.next_f64() * WORLD.w);
        out.push(rng.next_f64() * WORLD.h);
    }
    out
}

fn bench_build_query_uniform(c: &mut Criterion) {
    let mut group = c.benchmark_group("uniform");
    for &count in &[1024usize, 4096, 16384] {
        let points = gen_uniform_points(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("quadtree_build_query_n{}", count), |b| {
            b.iter_batched(
                || points.clone(),
                |points| {
                    let mut tree = QuadTree::new(WORLD, 8).unwrap();
                    tree.insert_batch(points).unwrap();
                    let hits = tree.query(QUERY).len();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("linear_scan_n{}", count), |b| {
            b.iter_batched(
                || points.clone(),
                |points| {
                    let hits = points.iter().filter(|p| QUERY.contains(**p)).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_query_only_uniform(c: &mut Criterion) {
    let mut group = c.benchmark_group("uniform_query_only");
    let points = gen_uniform_points(16384);
    group.bench_function("quadtree_many_queries", |b| {
        b.iter_batched(
            || {
                let mut tree = QuadTree::new(WORLD, 8).unwrap();
                tree.insert_batch(points.iter().copied()).unwrap();
                tree
            },
            |tree| {
                let mut total = 0usize;
                for q in 0..256 {
                    let x = (q % 16) as f64 * 100.0;
                    let y = (q / 16) as f64 * 100.0;
                    total += tree.query(Frame::new(x, y, 200.0, 200.0)).len();
                }
                black_box(total);
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("linear_many_queries", |b| {
        b.iter_batched(
            || points.clone(),
            |points| {
                let mut total = 0usize;
                for q in 0..256 {
                    let x = (q % 16) as f64 * 100.0;
                    let y = (q / 16) as f64 * 100.0;
                    let region = Frame::new(x, y, 200.0, 200.0);
                    total += points.iter().filter(|p| region.contains(**p)).count();
                }
                black_box(total);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_clustered(c: &mut Criterion) {
    let mut group = c.benchmark_group("clustered");
    let points = gen_clustered_points(16, 256, 128.0);
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("quadtree_build_query", |b| {
        b.iter_batched(
            || points.clone(),
            |points| {
                let mut tree = QuadTree::new(WORLD, 8).unwrap();
                tree.insert_batch(points).unwrap();
                let hits = tree.query(QUERY).len();
                black_box(hits);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_indexed_flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("indexed_flat");
    let buffer = gen_flat_buffer(16384);
    group.throughput(Throughput::Elements(16384));
    group.bench_function("build_query_n16384", |b| {
        b.iter_batched(
            || buffer.as_slice(),
            |coords| {
                let tree = QuadTree::with_dataset(WORLD, 8, coords).unwrap();
                let hits = tree.query(QUERY).len();
                black_box(hits);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_build_query_uniform,
    bench_query_only_uniform,
    bench_clustered,
    bench_indexed_flat,
);
criterion_main!(benches);
