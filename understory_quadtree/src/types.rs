// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadrants, classification, and point tolerance.

use kurbo::{Point, Rect};

/// One of the four equal sub-rectangles a node's bounds split into.
///
/// Quadrants are named with `y` growing upward: `Top` is the half with the larger `y`.
/// The discriminant is the child slot index, clockwise from the
/// positive-x/positive-y corner. This is also the order used by the
/// [textual dump](crate::QuadTree#impl-Display-for-QuadTree).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// `x >= mid.x`, `y >= mid.y`.
    TopRight = 0,
    /// `x >= mid.x`, `y < mid.y`.
    BottomRight = 1,
    /// `x < mid.x`, `y < mid.y`.
    BottomLeft = 2,
    /// `x < mid.x`, `y >= mid.y`.
    TopLeft = 3,
}

impl Quadrant {
    /// Number of child slots per node.
    pub const COUNT: usize = 4;

    /// All quadrants in slot order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
        Self::TopLeft,
    ];

    /// Child slot index of this quadrant.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Classify `point` against the center of `bounds`.
    ///
    /// Returns the quadrant containing `point` together with that quadrant's
    /// sub-rectangle. Points exactly on a midline go to the right/top side.
    /// Points outside `bounds` are classified with the same comparison, so the
    /// outer quadrants behave as if they extended to infinity.
    pub fn classify(bounds: Rect, point: Point) -> (Self, Rect) {
        let mid = mid(bounds);
        let quadrant = match (point.x < mid.x, point.y < mid.y) {
            (true, true) => Self::BottomLeft,
            (true, false) => Self::TopLeft,
            (false, true) => Self::BottomRight,
            (false, false) => Self::TopRight,
        };
        (quadrant, quadrant.split(bounds, mid))
    }

    /// The sub-rectangle of `bounds` covered by this quadrant.
    pub fn rect(self, bounds: Rect) -> Rect {
        self.split(bounds, mid(bounds))
    }

    // Children share the parent's edges and its center, so the four of them tile it exactly.
    fn split(self, b: Rect, mid: Point) -> Rect {
        match self {
            Self::TopRight => Rect::new(mid.x, mid.y, b.x1, b.y1),
            Self::BottomRight => Rect::new(mid.x, b.y0, b.x1, mid.y),
            Self::BottomLeft => Rect::new(b.x0, b.y0, mid.x, mid.y),
            Self::TopLeft => Rect::new(b.x0, mid.y, mid.x, b.y1),
        }
    }
}

/// Center of `bounds`: `(x + width / 2, y + height / 2)`.
pub fn mid(bounds: Rect) -> Point {
    Point::new(
        bounds.x0 + bounds.width() / 2.0,
        bounds.y0 + bounds.height() / 2.0,
    )
}

/// Tolerance used to decide whether two points are the same point.
///
/// Two points match when they are equal, or when every coordinate differs by
/// strictly less than the tolerance. Matching points share a single leaf, which
/// counts how many times the point was added.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tolerance(pub f64);

impl Tolerance {
    /// Machine epsilon for `f64`. This is the default.
    pub const EPSILON: Self = Self(f64::EPSILON);

    /// Only bitwise-equal coordinates match.
    pub const EXACT: Self = Self(0.0);

    /// Whether `a` and `b` are the same point under this tolerance.
    pub fn matches(self, a: Point, b: Point) -> bool {
        a == b || (self.within(a.x, b.x) && self.within(a.y, b.y))
    }

    fn within(self, a: f64, b: f64) -> bool {
        let d = a - b;
        d < self.0 && -d < self.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::EPSILON
    }
}
