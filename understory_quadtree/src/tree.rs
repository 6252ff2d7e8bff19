// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public `QuadTree` API: insertion, range queries, and clearing.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::{Point, Rect, Size};

use crate::error::Error;
use crate::node::{Entry, Node};
use crate::options::{Limits, QuadTreeOptions};
use crate::types::{Extent, Positioned, rect_from_edges};

/// Structural summary returned by [`QuadTree::stats`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Items stored in the tree.
    pub items: usize,
    /// Nodes, including the root.
    pub nodes: usize,
    /// Nodes without children.
    pub leaves: usize,
    /// Depth of the deepest node.
    pub max_depth: usize,
}

/// A point quadtree over a fixed root rectangle.
///
/// Items are kept in insertion order in a backing store; the tree itself holds
/// only their coordinates and slot numbers. Slots are stable until
/// [`clear`](Self::clear).
pub struct QuadTree<I> {
    options: QuadTreeOptions,
    bounds: Rect,
    limits: Limits,
    root: Node,
    items: Vec<I>,
}

impl<I> Debug for QuadTree<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuadTree")
            .field("bounds", &self.bounds)
            .field("items", &self.items.len())
            .field("max_per_cell", &self.limits.max_per_cell)
            .field("max_depth", &self.limits.max_depth)
            .finish_non_exhaustive()
    }
}

impl<I: Positioned> QuadTree<I> {
    /// Create an empty tree.
    ///
    /// Fails if a bound is missing, not finite, or inverted, or if
    /// `max_per_cell` is zero. These are reported whether or not
    /// [`debug_mode`](QuadTreeOptions::debug_mode) is set.
    pub fn new(options: QuadTreeOptions) -> Result<Self, Error> {
        let bounds = options.root_rect()?;
        Ok(Self {
            options,
            bounds,
            limits: options.limits(),
            root: Node::new(bounds, 0),
            items: Vec::new(),
        })
    }

    /// Insert one item.
    ///
    /// Returns the item's slot when the tree accepts it. An item whose
    /// coordinates are not finite, or that lies outside the root rectangle, is
    /// an error in debug mode and is otherwise skipped with `Ok(None)`.
    /// Skipped items are not kept.
    pub fn insert(&mut self, item: I) -> Result<Option<usize>, Error> {
        let Point { x, y } = item.position();
        if !x.is_finite() || !y.is_finite() {
            if self.limits.debug_mode {
                return Err(Error::InvalidItem { x, y });
            }
            log::debug!("skipping item with non-finite position ({x}, {y})");
            return Ok(None);
        }

        let slot = self.items.len();
        if !self.root.insert(Entry { x, y, slot }, &self.limits)? {
            if self.limits.debug_mode {
                return Err(Error::OutOfBounds { x, y });
            }
            log::debug!("skipping item at ({x}, {y}) outside {:?}", self.bounds);
            return Ok(None);
        }
        self.items.push(item);
        Ok(Some(slot))
    }

    /// Insert a sequence of items in order, returning how many were accepted.
    ///
    /// In debug mode this stops at the first failing item; items before it
    /// stay inserted.
    pub fn insert_all(&mut self, items: impl IntoIterator<Item = I>) -> Result<usize, Error> {
        let items = items.into_iter();
        self.items.reserve(items.size_hint().0);
        let mut accepted = 0;
        for item in items {
            if self.insert(item)?.is_some() {
                accepted += 1;
            }
        }
        Ok(accepted)
    }

    /// Items whose position lies inside the rectangle, edges included.
    ///
    /// Results are in insertion order. Non-finite arguments are an error in
    /// debug mode and yield no results otherwise.
    pub fn query_range(
        &self,
        top: f64,
        left: f64,
        bottom: f64,
        right: f64,
    ) -> Result<Vec<&I>, Error> {
        self.query_rect(rect_from_edges(top, left, bottom, right))
    }

    /// Items inside the `w` by `h` rectangle centered on `(x, y)`.
    pub fn query_range_by_center(
        &self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
    ) -> Result<Vec<&I>, Error> {
        if ![x, y, w, h].iter().all(|v| v.is_finite()) {
            return self.reject_query();
        }
        self.query_rect(Rect::from_center_size(Point::new(x, y), Size::new(w, h)))
    }

    /// Items inside the region described by `region`'s center and extent.
    ///
    /// The region is taken from [`Extent::query_rect`], so a [`Rect`] is used
    /// as is rather than rebuilt from its center.
    pub fn query_contained_by(&self, region: &impl Extent) -> Result<Vec<&I>, Error> {
        self.query_rect(region.query_rect())
    }

    /// Items inside `rect`, read as `x0 = left`, `y0 = top`, `x1 = right`,
    /// `y1 = bottom`.
    ///
    /// The rectangle is not normalized, so an inverted one matches nothing.
    pub fn query_rect(&self, rect: Rect) -> Result<Vec<&I>, Error> {
        if !rect.is_finite() {
            return self.reject_query();
        }
        let mut slots = BTreeSet::new();
        self.root.query_range(&rect, &mut slots);
        Ok(slots.into_iter().filter_map(|s| self.items.get(s)).collect())
    }

    fn reject_query(&self) -> Result<Vec<&I>, Error> {
        if self.limits.debug_mode {
            return Err(Error::InvalidQuery);
        }
        log::debug!("ignoring query with non-finite arguments");
        Ok(Vec::new())
    }
}

impl<I> QuadTree<I> {
    /// Drop all items and rebuild an empty tree from the original options.
    pub fn clear(&mut self) {
        self.root = Node::new(self.bounds, 0);
        self.items = Vec::new();
    }

    /// Reserve space for at least `n` more items.
    pub fn reserve(&mut self, n: usize) {
        self.items.reserve(n);
    }

    /// The options this tree was built with.
    pub fn options(&self) -> &QuadTreeOptions {
        &self.options
    }

    /// The root rectangle.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no items are stored.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item at `slot`.
    pub fn get(&self, slot: usize) -> Option<&I> {
        self.items.get(slot)
    }

    /// All stored items in insertion order; an item's index is its slot.
    pub fn items(&self) -> &[I] {
        &self.items
    }

    /// The root node, for inspecting or drawing the subdivision.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Count nodes, leaves, and the deepest level.
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats {
            items: self.items.len(),
            ..TreeStats::default()
        };
        self.root.visit(&mut |node| {
            stats.nodes += 1;
            if node.is_leaf() {
                stats.leaves += 1;
            }
            stats.max_depth = stats.max_depth.max(node.depth());
        });
        stats
    }
}
