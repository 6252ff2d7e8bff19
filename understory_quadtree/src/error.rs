// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type shared by construction, insertion, and queries.

use core::fmt;

/// One edge of the root rectangle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Bound {
    /// Upper edge.
    Top,
    /// Left edge.
    Left,
    /// Lower edge.
    Bottom,
    /// Right edge.
    Right,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Top => "top",
            Self::Left => "left",
            Self::Bottom => "bottom",
            Self::Right => "right",
        })
    }
}

/// Errors reported by [`QuadTree`](crate::QuadTree).
///
/// Construction errors are always reported. The remaining variants are only
/// returned when [`debug_mode`](crate::QuadTreeOptions::debug_mode) is set;
/// otherwise the failing item or query is dropped and logged.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A required root bound was not configured.
    #[error("missing required bound `{0}`")]
    MissingBound(Bound),
    /// A root bound is NaN or infinite.
    #[error("bound `{0}` must be finite")]
    NonFiniteBound(Bound),
    /// The root rectangle has `top > bottom` or `left > right`.
    #[error("inverted bounds: top={top}, left={left}, bottom={bottom}, right={right}")]
    InvertedBounds {
        /// Configured top edge.
        top: f64,
        /// Configured left edge.
        left: f64,
        /// Configured bottom edge.
        bottom: f64,
        /// Configured right edge.
        right: f64,
    },
    /// `max_per_cell` must be at least one.
    #[error("max_per_cell must be at least 1")]
    ZeroMaxPerCell,
    /// The item's coordinates are not finite numbers.
    #[error("item position ({x}, {y}) is not finite")]
    InvalidItem {
        /// Reported x coordinate.
        x: f64,
        /// Reported y coordinate.
        y: f64,
    },
    /// The item lies outside the root rectangle.
    #[error("item position ({x}, {y}) is outside the root bounds")]
    OutOfBounds {
        /// Item x coordinate.
        x: f64,
        /// Item y coordinate.
        y: f64,
    },
    /// A split node accepted a point but none of its children did.
    #[error("no child of the node at depth {depth} claims ({x}, {y})")]
    Unclaimed {
        /// Point x coordinate.
        x: f64,
        /// Point y coordinate.
        y: f64,
        /// Depth of the node whose children all refused the point.
        depth: usize,
    },
    /// An entry held by a node was refused by all of its new children during a split.
    #[error("split at depth {depth} lost the entry at ({x}, {y})")]
    SplitLostItem {
        /// Entry x coordinate.
        x: f64,
        /// Entry y coordinate.
        y: f64,
        /// Depth of the node being split.
        depth: usize,
    },
    /// A query argument is NaN or infinite.
    #[error("query arguments must be finite")]
    InvalidQuery,
}
