// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Quadtree: a point quadtree for rectangle queries over a fixed 2D region.
//!
//! Understory Quadtree indexes point-like items (anything with a center coordinate) and answers
//! axis-aligned rectangle queries without scanning every item.
//!
//! - Insert items one at a time or in bulk; each item keeps a stable slot in insertion order.
//! - Query by edges, by center and size, or by any [`Extent`] such as a [`kurbo::Rect`].
//! - Bound tree growth with a split threshold and a depth cap.
//!
//! Space is subdivided on demand: a leaf that already holds `max_per_cell` items splits into
//! four equal quadrants on the next insert, unless it sits at `max_depth`. All containment tests
//! are inclusive on every edge. A point on an edge shared by sibling quadrants belongs to the
//! first of them in [`Quadrant::ALL`] order, so each item lives in exactly one leaf.
//!
//! # Example
//!
//! ```rust
//! use understory_quadtree::{QuadTree, QuadTreeOptions};
//! use kurbo::Point;
//!
//! // A 100×100 region, splitting as soon as a cell holds more than one point.
//! let opts = QuadTreeOptions::new(0.0, 0.0, 100.0, 100.0).with_max_per_cell(1);
//! let mut tree = QuadTree::new(opts).unwrap();
//!
//! for p in [Point::new(0.0, 0.0), Point::new(100.0, 100.0), Point::new(50.0, 50.0)] {
//!     tree.insert(p).unwrap();
//! }
//!
//! // Query by top, left, bottom, right. Edges are inclusive.
//! let hits = tree.query_range(0.0, 0.0, 50.0, 50.0).unwrap();
//! assert_eq!(hits, [&Point::new(0.0, 0.0), &Point::new(50.0, 50.0)]);
//!
//! // Or by center and size.
//! let hits = tree.query_range_by_center(100.0, 100.0, 10.0, 10.0).unwrap();
//! assert_eq!(hits, [&Point::new(100.0, 100.0)]);
//! ```
//!
//! ## Error handling
//!
//! Construction always validates the options and fails on missing, non-finite, or inverted
//! bounds. Everything else follows [`QuadTreeOptions::debug_mode`]:
//!
//! - With `debug_mode` set, invalid items, items outside the root, non-finite query arguments,
//!   and geometry inconsistencies are returned as [`Error`]s.
//! - Without it, those items are skipped (and not stored) and such queries return nothing.
//!   The crate logs what it drops through the [`log`] facade.
//!
//! ```rust
//! use understory_quadtree::{Error, QuadTree, QuadTreeOptions};
//!
//! let strict = QuadTreeOptions::new(0.0, 0.0, 10.0, 10.0).with_debug_mode(true);
//! let mut tree = QuadTree::new(strict).unwrap();
//! assert!(matches!(tree.insert((20.0, 5.0)), Err(Error::OutOfBounds { .. })));
//!
//! let lenient = QuadTreeOptions::new(0.0, 0.0, 10.0, 10.0);
//! let mut tree = QuadTree::new(lenient).unwrap();
//! assert_eq!(tree.insert((20.0, 5.0)), Ok(None));
//! assert!(tree.is_empty());
//! ```
//!
//! ### Float semantics
//!
//! Coordinates are `f64`. Quadrants are split at the interpolated midpoint without rounding,
//! so children of an integral rectangle may have fractional edges.
//!
//! This crate is `no_std` and uses `alloc`. Enable the `std` (default) or `libm` feature for Kurbo.

#![no_std]

extern crate alloc;

pub mod error;
pub mod node;
pub mod options;
pub mod tree;
pub mod types;

pub use error::{Bound, Error};
pub use node::{Entry, Node};
pub use options::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_PER_CELL, QuadTreeOptions};
pub use tree::{QuadTree, TreeStats};
pub use types::{Extent, Positioned, Quadrant};
