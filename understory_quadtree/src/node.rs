// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree cells: routing, splitting, and range collection.

use alloc::boxed::Box;
use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::Rect;

use crate::error::Error;
use crate::options::Limits;
use crate::types::{Quadrant, contains_point, overlaps, split_point};

/// A point stored in a leaf, referring back to its slot in the tree's backing store.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Entry {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
    /// Position of the original item in [`QuadTree::items`](crate::QuadTree::items).
    pub slot: usize,
}

#[derive(Clone, Debug)]
enum Cell {
    Leaf(Vec<Entry>),
    Split(Box<[Node; 4]>),
}

/// One cell of the tree.
///
/// A node starts as a leaf holding entries. Once it splits it holds exactly four
/// children, indexed in [`Quadrant::ALL`] order, and no entries; it never turns
/// back into a leaf.
#[derive(Clone)]
pub struct Node {
    rect: Rect,
    depth: usize,
    cell: Cell,
}

impl Debug for Node {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut s = f.debug_struct("Node");
        s.field("rect", &self.rect).field("depth", &self.depth);
        match &self.cell {
            Cell::Leaf(entries) => s.field("entries", &entries.len()),
            Cell::Split(_) => s.field("split", &true),
        };
        s.finish_non_exhaustive()
    }
}

impl Node {
    pub(crate) fn new(rect: Rect, depth: usize) -> Self {
        Self {
            rect,
            depth,
            cell: Cell::Leaf(Vec::new()),
        }
    }

    /// The area this node covers.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Distance from the root; the root is at depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whether this node holds entries rather than children.
    pub fn is_leaf(&self) -> bool {
        matches!(self.cell, Cell::Leaf(_))
    }

    /// The four children of a split node, in [`Quadrant::ALL`] order.
    pub fn children(&self) -> Option<&[Self; 4]> {
        match &self.cell {
            Cell::Split(children) => Some(children),
            Cell::Leaf(_) => None,
        }
    }

    /// The child covering `quadrant`, if this node has split.
    pub fn child(&self, quadrant: Quadrant) -> Option<&Self> {
        let idx = Quadrant::ALL.iter().position(|q| *q == quadrant)?;
        self.children().map(|children| &children[idx])
    }

    /// Entries held directly by this node. Empty for split nodes.
    pub fn entries(&self) -> &[Entry] {
        match &self.cell {
            Cell::Leaf(entries) => entries,
            Cell::Split(_) => &[],
        }
    }

    /// Number of entries in this subtree.
    pub fn len(&self) -> usize {
        match &self.cell {
            Cell::Leaf(entries) => entries.len(),
            Cell::Split(children) => children.iter().map(Self::len).sum(),
        }
    }

    /// Whether this subtree holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Visit this node and all descendants in pre-order.
    pub fn visit(&self, f: &mut impl FnMut(&Self)) {
        f(self);
        if let Cell::Split(children) = &self.cell {
            for child in children.iter() {
                child.visit(f);
            }
        }
    }

    /// Whether `(x, y)` lies inside this node, edges included.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        contains_point(&self.rect, x, y)
    }

    /// Whether `query` touches this node at all.
    ///
    /// This is a pruning test; it says nothing about `query` fitting inside the node.
    pub fn contains_range_part(&self, query: &Rect) -> bool {
        overlaps(&self.rect, query)
    }

    /// Route `entry` to the leaf that should own it.
    ///
    /// Returns `Ok(false)` when the point is outside this node. Inside, exactly
    /// one leaf takes the entry, splitting full leaves on the way.
    pub(crate) fn insert(&mut self, entry: Entry, limits: &Limits) -> Result<bool, Error> {
        if !self.contains_point(entry.x, entry.y) {
            return Ok(false);
        }
        if let Cell::Leaf(entries) = &mut self.cell {
            if entries.len() < limits.max_per_cell || self.depth >= limits.max_depth {
                entries.push(entry);
                return Ok(true);
            }
            self.split(limits)?;
        }
        self.insert_into_children(entry, limits)
    }

    fn insert_into_children(&mut self, entry: Entry, limits: &Limits) -> Result<bool, Error> {
        let Cell::Split(children) = &mut self.cell else {
            return Ok(false);
        };
        for child in children.iter_mut() {
            if child.insert(entry, limits)? {
                return Ok(true);
            }
        }
        if limits.debug_mode {
            return Err(Error::Unclaimed {
                x: entry.x,
                y: entry.y,
                depth: self.depth,
            });
        }
        log::warn!(
            "no child of node at depth {} claims ({}, {})",
            self.depth,
            entry.x,
            entry.y
        );
        Ok(false)
    }

    /// Turn this leaf into four children and move its entries down.
    fn split(&mut self, limits: &Limits) -> Result<(), Error> {
        let Cell::Leaf(entries) = &mut self.cell else {
            return Ok(());
        };
        let entries = core::mem::take(entries);
        let depth = self.depth;
        let mid = split_point(self.rect);
        let mut children =
            Box::new(Quadrant::ALL.map(|q| Self::new(q.of(self.rect, mid), depth + 1)));
        log::trace!(
            "split {:?} at depth {} moving {} entries",
            self.rect,
            depth,
            entries.len()
        );
        let moved = entries
            .into_iter()
            .try_for_each(|entry| Self::reinsert(&mut children, entry, limits, depth));
        self.cell = Cell::Split(children);
        moved
    }

    fn reinsert(
        children: &mut [Self; 4],
        entry: Entry,
        limits: &Limits,
        depth: usize,
    ) -> Result<(), Error> {
        for child in children.iter_mut() {
            if child.insert(entry, limits)? {
                return Ok(());
            }
        }
        if limits.debug_mode {
            return Err(Error::SplitLostItem {
                x: entry.x,
                y: entry.y,
                depth,
            });
        }
        log::error!(
            "split at depth {} lost entry {} at ({}, {})",
            depth,
            entry.slot,
            entry.x,
            entry.y
        );
        Ok(())
    }

    /// Collect the slots of entries inside `query`, edges included.
    pub fn query_range(&self, query: &Rect, out: &mut BTreeSet<usize>) {
        if !self.contains_range_part(query) {
            return;
        }
        match &self.cell {
            Cell::Split(children) => {
                for child in children.iter() {
                    child.query_range(query, out);
                }
            }
            Cell::Leaf(entries) => {
                out.extend(
                    entries
                        .iter()
                        .filter(|e| contains_point(query, e.x, e.y))
                        .map(|e| e.slot),
                );
            }
        }
    }
}
