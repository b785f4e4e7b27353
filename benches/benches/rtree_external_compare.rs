// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use quadrille_geom::Frame;
use quadrille_index::QuadTree;

use rstar::{AABB, RTree};

const WORLD: Frame = Frame::new(0.0, 0.0, 1280.0, 1280.0);
const QUERY: Frame = Frame::new(100.0, 100.0, 400.0, 400.0);

fn gen_grid_points(n: usize, cell: f64) -> Vec<Point> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            out.push(Point::new(
                x as f64 * cell + cell / 2.0,
                y as f64 * cell + cell / 2.0,
            ));
        }
    }
    out
}

fn to_rstar_points(v: &[Point]) -> Vec<[f64; 2]> {
    v.iter().map(|p| [p.x, p.y]).collect()
}

fn bench_quadtree_vs_rstar(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_external_compare");
    for &n in &[64usize, 128] {
        let points = gen_grid_points(n, 10.0);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("quadrille_build_query_n{}", n), |b| {
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

        group.bench_function(format!("rstar_build_query_bulk_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_points(&points),
                |points| {
                    let tree = RTree::bulk_load(points);
                    let aabb = AABB::from_corners(
                        [QUERY.left(), QUERY.top()],
                        [QUERY.right(), QUERY.bottom()],
                    );
                    let hits: usize = tree.locate_in_envelope_intersecting(&aabb).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_quadtree_vs_rstar);
criterion_main!(benches);
