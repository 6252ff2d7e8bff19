// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction options for [`QuadTree`](crate::QuadTree).

use kurbo::Rect;

use crate::error::{Bound, Error};

/// Default split threshold.
pub const DEFAULT_MAX_PER_CELL: usize = 2;

/// Default depth cap.
pub const DEFAULT_MAX_DEPTH: usize = 4;

/// Options for building a [`QuadTree`](crate::QuadTree).
///
/// The four bounds are required; the default value leaves them unset, so it
/// only makes sense as a base for struct update syntax:
///
/// ```
/// use understory_quadtree::QuadTreeOptions;
///
/// let opts = QuadTreeOptions {
///     bottom: Some(600.0),
///     right: Some(800.0),
///     top: Some(0.0),
///     left: Some(0.0),
///     ..Default::default()
/// };
/// assert_eq!(opts, QuadTreeOptions::new(0.0, 0.0, 600.0, 800.0));
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct QuadTreeOptions {
    /// Upper edge of the root rectangle.
    pub top: Option<f64>,
    /// Left edge of the root rectangle.
    pub left: Option<f64>,
    /// Lower edge of the root rectangle.
    pub bottom: Option<f64>,
    /// Right edge of the root rectangle.
    pub right: Option<f64>,
    /// A leaf holding this many items splits on the next insert.
    pub max_per_cell: usize,
    /// Leaves at this depth never split, whatever their size.
    ///
    /// This bounds the tree when many items share a coordinate.
    pub max_depth: usize,
    /// Report invalid input and geometry inconsistencies as errors instead of
    /// dropping them.
    pub debug_mode: bool,
}

impl Default for QuadTreeOptions {
    fn default() -> Self {
        Self {
            top: None,
            left: None,
            bottom: None,
            right: None,
            max_per_cell: DEFAULT_MAX_PER_CELL,
            max_depth: DEFAULT_MAX_DEPTH,
            debug_mode: false,
        }
    }
}

impl QuadTreeOptions {
    /// Options covering the given root rectangle, with default limits.
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top: Some(top),
            left: Some(left),
            bottom: Some(bottom),
            right: Some(right),
            ..Self::default()
        }
    }

    /// Set the split threshold.
    #[must_use]
    pub fn with_max_per_cell(mut self, max_per_cell: usize) -> Self {
        self.max_per_cell = max_per_cell;
        self
    }

    /// Set the depth cap.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Enable or disable strict error reporting.
    #[must_use]
    pub fn with_debug_mode(mut self, debug_mode: bool) -> Self {
        self.debug_mode = debug_mode;
        self
    }

    /// Check the options and return the root rectangle they describe.
    pub(crate) fn root_rect(&self) -> Result<Rect, Error> {
        let top = require(self.top, Bound::Top)?;
        let left = require(self.left, Bound::Left)?;
        let bottom = require(self.bottom, Bound::Bottom)?;
        let right = require(self.right, Bound::Right)?;
        if top > bottom || left > right {
            return Err(Error::InvertedBounds {
                top,
                left,
                bottom,
                right,
            });
        }
        if self.max_per_cell == 0 {
            return Err(Error::ZeroMaxPerCell);
        }
        Ok(Rect::new(left, top, right, bottom))
    }

    pub(crate) fn limits(&self) -> Limits {
        Limits {
            max_per_cell: self.max_per_cell,
            max_depth: self.max_depth,
            debug_mode: self.debug_mode,
        }
    }
}

fn require(value: Option<f64>, bound: Bound) -> Result<f64, Error> {
    match value {
        None => Err(Error::MissingBound(bound)),
        Some(v) if !v.is_finite() => Err(Error::NonFiniteBound(bound)),
        Some(v) => Ok(v),
    }
}

/// The subset of options consulted while walking nodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Limits {
    pub(crate) max_per_cell: usize,
    pub(crate) max_depth: usize,
    pub(crate) debug_mode: bool,
}
