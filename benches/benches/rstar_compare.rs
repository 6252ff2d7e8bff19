// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_quadtree::{QuadTree, QuadTreeOptions};

use rstar::{AABB, RTree};

fn gen_grid_points(n: usize, cell: f64) -> Vec<Point> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            out.push(Point::new(x as f64 * cell, y as f64 * cell));
        }
    }
    out
}

fn to_rstar_points(v: &[Point]) -> Vec<[f64; 2]> {
    v.iter().map(|p| [p.x, p.y]).collect()
}

fn bench_rstar_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("rstar_compare_points");
    for &n in &[64usize, 128] {
        let points = gen_grid_points(n, 10.0);
        let extent = (n - 1) as f64 * 10.0;
        let query = Rect::new(100.0, 100.0, 500.0, 500.0);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("understory_build_query_n{}", n), |b| {
            b.iter_batched(
                || {
                    QuadTree::new(
                        QuadTreeOptions::new(0.0, 0.0, extent, extent)
                            .with_max_per_cell(16)
                            .with_max_depth(8),
                    )
                    .unwrap()
                },
                |mut tree| {
                    tree.insert_all(points.iter().copied()).unwrap();
                    let hits = tree.query_rect(query).unwrap().len();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_bulk_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_points(&points),
                |pts| {
                    let tree = RTree::bulk_load(pts);
                    let aabb = AABB::from_corners([query.x0, query.y0], [query.x1, query.y1]);
                    let hits: usize = tree.locate_in_envelope(&aabb).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rstar_compare);
criterion_main!(benches);
