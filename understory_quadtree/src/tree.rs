// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The public [`QuadTree`] container.

use alloc::boxed::Box;
use alloc::vec::Vec;
use kurbo::{Point, Rect};

use crate::node::{Node, Outcome, Points, contains_inclusive};
use crate::types::Tolerance;

/// A point-region quadtree over a fixed rectangle.
///
/// The tree owns an optional root [`Node`]; it has no root when it holds no points.
/// Nodes split lazily: a region stays a single leaf until a second, different point
/// lands in it. Removing points collapses internal nodes that are left above a
/// single leaf.
///
/// Only points inside [`bounds`](Self::bounds), edges included, are stored.
/// [`add`](Self::add) rejects anything else, including NaN coordinates.
///
/// The tree has no interior synchronization; share it across threads behind a lock.
#[derive(Clone, Debug, PartialEq)]
pub struct QuadTree {
    bounds: Rect,
    tolerance: Tolerance,
    root: Option<Node>,
}

impl QuadTree {
    /// Create an empty tree covering `bounds`.
    ///
    /// `bounds` should have positive width and height.
    pub fn new(bounds: Rect) -> Self {
        Self::with_tolerance(bounds, Tolerance::default())
    }

    /// Create an empty tree covering `bounds`, matching points with `tolerance`.
    pub fn with_tolerance(bounds: Rect, tolerance: Tolerance) -> Self {
        debug_assert!(
            bounds.width() > 0.0 && bounds.height() > 0.0,
            "quadtree bounds must have positive area"
        );
        Self {
            bounds,
            tolerance,
            root: None,
        }
    }

    /// The region covered by the root.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The tolerance used to match points.
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// The root node, if any point is stored.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// True if the tree holds no points.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of stored points, counting repeats.
    pub fn len(&self) -> usize {
        self.root.as_ref().map_or(0, Node::len)
    }

    /// Height of the tree: 0 when empty, 1 for a single leaf.
    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, Node::depth)
    }

    /// Remove every point.
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// Insert `point`.
    ///
    /// The first point becomes a leaf covering the whole tree. Adding a point that
    /// matches a stored one increments that leaf's count.
    ///
    /// Returns `false`, leaving the tree untouched, if `point` lies outside the
    /// tree's bounds.
    pub fn add(&mut self, point: Point) -> bool {
        if !contains_inclusive(self.bounds, point) {
            return false;
        }
        match &mut self.root {
            Some(root) => {
                let stored = root.find(point, self.tolerance).unwrap_or(point);
                root.add(stored, self.tolerance);
            }
            None => self.root = Some(Node::leaf(point, self.bounds)),
        }
        true
    }

    /// Remove one occurrence of `point`.
    ///
    /// Returns `false`, leaving the tree untouched, if no stored point matches.
    pub fn remove(&mut self, point: Point) -> bool {
        let Some(root) = self.root.as_mut() else {
            return false;
        };
        let Some(stored) = root.find(point, self.tolerance) else {
            return false;
        };
        match root.remove(stored, self.tolerance) {
            Outcome::NotFound => false,
            Outcome::Compact => true,
            Outcome::RemoveSelf => {
                self.root = None;
                true
            }
        }
    }

    /// Whether a point matching `point` is stored.
    pub fn contains(&self, point: Point) -> bool {
        self.root
            .as_ref()
            .is_some_and(|root| root.find(point, self.tolerance).is_some())
    }

    /// Iterate stored points and their counts, depth-first in quadrant order.
    pub fn points(&self) -> Points<'_> {
        Points::new(self.root.as_ref())
    }

    /// Visit stored points lying inside `rect` (edges inclusive).
    pub fn visit_rect<F: FnMut(Point, usize)>(&self, rect: Rect, mut f: F) {
        if let Some(root) = &self.root {
            root.visit_rect(rect, &mut f);
        }
    }

    /// Query stored points lying inside `rect` (edges inclusive).
    pub fn query_rect(&self, rect: Rect) -> Box<dyn Iterator<Item = (Point, usize)> + '_> {
        let mut out = Vec::new();
        self.visit_rect(rect, |p, n| out.push((p, n)));
        Box::new(out.into_iter())
    }
}
