// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_quadtree::{QuadTree, QuadTreeOptions};

const WIDTH: f64 = 2000.0;
const HEIGHT: f64 = 1100.0;

fn gen_grid_points(n: usize, cell: f64) -> Vec<Point> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            out.push(Point::new(x as f64 * cell, y as f64 * cell));
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

fn gen_random_points(count: usize) -> Vec<Point> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| Point::new(rng.next_f64() * WIDTH, rng.next_f64() * HEIGHT))
        .collect()
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point> {
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    for _ in 0..n_clusters {
        let cx = spread + rng.next_f64() * (WIDTH - 2.0 * spread);
        let cy = spread + rng.next_f64() * (HEIGHT - 2.0 * spread);
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(Point::new(cx + dx, cy + dy));
        }
    }
    out
}

fn options(max_per_cell: usize, max_depth: usize) -> QuadTreeOptions {
    QuadTreeOptions::new(0.0, 0.0, HEIGHT, WIDTH)
        .with_max_per_cell(max_per_cell)
        .with_max_depth(max_depth)
}

fn build(points: &[Point], opts: QuadTreeOptions) -> QuadTree<Point> {
    let mut tree = QuadTree::new(opts).unwrap();
    tree.insert_all(points.iter().copied()).unwrap();
    tree
}

fn linear_scan(points: &[Point], q: Rect) -> usize {
    points
        .iter()
        .filter(|p| q.x0 <= p.x && p.x <= q.x1 && q.y0 <= p.y && p.y <= q.y1)
        .count()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_build");
    for &n in &[32usize, 64, 128] {
        let points = gen_grid_points(n, 8.0);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("grid_n{}", n), |b| {
            b.iter_batched(
                || options(16, 8),
                |opts| black_box(build(&points, opts).len()),
                BatchSize::SmallInput,
            )
        });
    }
    let points = gen_clustered_points(16, 512, 40.0);
    group.throughput(Throughput::Elements(points.len() as u64));
    for &(max_per_cell, max_depth) in &[(4usize, 12usize), (20, 1), (20, 6)] {
        group.bench_function(
            format!("clustered_cap{}_depth{}", max_per_cell, max_depth),
            |b| {
                b.iter_batched(
                    || options(max_per_cell, max_depth),
                    |opts| black_box(build(&points, opts).len()),
                    BatchSize::SmallInput,
                )
            },
        );
    }
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_query");
    let points = gen_random_points(5000);
    let query = Rect::new(700.0, 300.0, 910.0, 420.0);
    for &(max_per_cell, max_depth) in &[(20usize, 1usize), (20, 4), (8, 8)] {
        let tree = build(&points, options(max_per_cell, max_depth));
        group.bench_function(
            format!("random5000_cap{}_depth{}", max_per_cell, max_depth),
            |b| b.iter(|| black_box(tree.query_rect(black_box(query)).unwrap().len())),
        );
    }
    group.bench_function("random5000_linear_scan", |b| {
        b.iter(|| black_box(linear_scan(&points, black_box(query))))
    });

    let tree = build(&points, options(20, 4));
    group.bench_function("random5000_by_center", |b| {
        b.iter(|| {
            let hits = tree
                .query_range_by_center(black_box(1000.0), 550.0, 100.0, 100.0)
                .unwrap();
            black_box(hits.len())
        })
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_query);
criterion_main!(benches);
