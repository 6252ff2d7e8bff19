// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Understory Quadtree: insert points, query a region, inspect the cells.

use kurbo::{Point, Rect};
use understory_quadtree::{QuadTree, QuadTreeOptions};

fn main() {
    let opts = QuadTreeOptions::new(0.0, 0.0, 1100.0, 2000.0)
        .with_max_per_cell(4)
        .with_max_depth(5);
    let mut tree = QuadTree::new(opts).expect("valid bounds");

    // A small spiral of points.
    let points = (0..200).map(|i| {
        let t = i as f64 * 0.15;
        Point::new(1000.0 + t.cos() * t * 30.0, 550.0 + t.sin() * t * 15.0)
    });
    let accepted = tree.insert_all(points).expect("lenient mode never fails");
    println!("inserted {accepted} points, {:?}", tree.stats());

    // Query a region by its edges and by its center.
    let hits = tree.query_range(500.0, 1000.0, 600.0, 1100.0).unwrap();
    println!("{} points in the box right of center", hits.len());
    let hits = tree
        .query_contained_by(&Rect::from_center_size((1000.0, 550.0), (100.0, 100.0)))
        .unwrap();
    println!("{} points near the center", hits.len());

    // Walk the leaves, as a visualization would when drawing cells.
    tree.root().visit(&mut |node| {
        if node.is_leaf() && !node.is_empty() {
            println!(
                "depth {} cell {:?} holds {}",
                node.depth(),
                node.rect(),
                node.len()
            );
        }
    });
}
