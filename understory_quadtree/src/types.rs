// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item capabilities, quadrants, and inclusive rectangle predicates.
//!
//! Rectangles are plain [`kurbo::Rect`] values read as `x0 = left`, `y0 = top`,
//! `x1 = right`, `y1 = bottom`. They are never normalized: an inverted query
//! rectangle simply matches nothing.

use kurbo::{Point, Rect, Size};

/// Anything with a center coordinate that can be stored in a [`QuadTree`](crate::QuadTree).
pub trait Positioned {
    /// Horizontal coordinate of the item's center.
    fn x(&self) -> f64;

    /// Vertical coordinate of the item's center.
    fn y(&self) -> f64;

    /// The center as a [`Point`].
    fn position(&self) -> Point {
        Point::new(self.x(), self.y())
    }
}

/// A center plus an extent, usable as a query region.
///
/// See [`QuadTree::query_contained_by`](crate::QuadTree::query_contained_by).
pub trait Extent: Positioned {
    /// Full width of the region.
    fn w(&self) -> f64;

    /// Full height of the region.
    fn h(&self) -> f64;

    /// The region as a rectangle centered on [`position`](Positioned::position).
    fn query_rect(&self) -> Rect {
        Rect::from_center_size(self.position(), Size::new(self.w(), self.h()))
    }
}

impl Positioned for Point {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn position(&self) -> Point {
        *self
    }
}

impl Positioned for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }

    fn y(&self) -> f64 {
        self.1
    }
}

impl Positioned for [f64; 2] {
    fn x(&self) -> f64 {
        self[0]
    }

    fn y(&self) -> f64 {
        self[1]
    }
}

/// A rectangle is positioned at its center.
impl Positioned for Rect {
    fn x(&self) -> f64 {
        0.5 * (self.x0 + self.x1)
    }

    fn y(&self) -> f64 {
        0.5 * (self.y0 + self.y1)
    }
}

impl Extent for Rect {
    fn w(&self) -> f64 {
        self.width()
    }

    fn h(&self) -> f64 {
        self.height()
    }

    fn query_rect(&self) -> Rect {
        *self
    }
}

impl<T: Positioned + ?Sized> Positioned for &T {
    fn x(&self) -> f64 {
        (**self).x()
    }

    fn y(&self) -> f64 {
        (**self).y()
    }

    fn position(&self) -> Point {
        (**self).position()
    }
}

impl<T: Extent + ?Sized> Extent for &T {
    fn w(&self) -> f64 {
        (**self).w()
    }

    fn h(&self) -> f64 {
        (**self).h()
    }

    fn query_rect(&self) -> Rect {
        (**self).query_rect()
    }
}

/// One of the four children of a split node.
///
/// Children are always tried in [`Quadrant::ALL`] order, so a point on an edge
/// shared by two siblings lands in the first of them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Upper-left quarter.
    TopLeft,
    /// Upper-right quarter.
    TopRight,
    /// Lower-left quarter.
    BottomLeft,
    /// Lower-right quarter.
    BottomRight,
}

impl Quadrant {
    /// All quadrants in routing order.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// The part of `rect` this quadrant covers when split at `mid`.
    pub fn of(self, rect: Rect, mid: Point) -> Rect {
        match self {
            Self::TopLeft => Rect::new(rect.x0, rect.y0, mid.x, mid.y),
            Self::TopRight => Rect::new(mid.x, rect.y0, rect.x1, mid.y),
            Self::BottomLeft => Rect::new(rect.x0, mid.y, mid.x, rect.y1),
            Self::BottomRight => Rect::new(mid.x, mid.y, rect.x1, rect.y1),
        }
    }
}

/// Split point of `rect`, interpolated halfway between its corners.
///
/// No rounding is applied; children of an integral rectangle may have
/// fractional edges.
pub(crate) fn split_point(rect: Rect) -> Point {
    Point::new(rect.x0, rect.y0).lerp(Point::new(rect.x1, rect.y1), 0.5)
}

/// Inclusive on all four edges.
pub(crate) fn contains_point(rect: &Rect, x: f64, y: f64) -> bool {
    rect.x0 <= x && x <= rect.x1 && rect.y0 <= y && y <= rect.y1
}

/// Inclusive overlap test; touching edges count as overlapping.
pub(crate) fn overlaps(rect: &Rect, query: &Rect) -> bool {
    rect.x0 <= query.x1 && rect.x1 >= query.x0 && rect.y0 <= query.y1 && rect.y1 >= query.y0
}

/// Rectangle from the `top, left, bottom, right` argument order used by queries.
pub(crate) const fn rect_from_edges(top: f64, left: f64, bottom: f64, right: f64) -> Rect {
    Rect::new(left, top, right, bottom)
}
