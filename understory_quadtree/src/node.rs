// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree nodes: lazy splitting on insert, compaction on removal.

use alloc::boxed::Box;
use alloc::vec::Vec;
use kurbo::{Point, Rect};

use crate::types::{Quadrant, Tolerance};

/// Child slots of an internal node, indexed by [`Quadrant::index`].
pub type Children = [Option<Box<Node>>; Quadrant::COUNT];

/// Occupancy of a [`Node`].
#[derive(Clone, Debug, PartialEq)]
pub enum NodeState {
    /// A single point, added `count` times (always at least one).
    Leaf {
        /// The stored point.
        point: Point,
        /// How many matching points were added.
        count: usize,
    },
    /// Subdivided. The node stores no point itself; slots are indexed by [`Quadrant::index`].
    Internal(Children),
}

/// A region of the tree.
///
/// A node is either a leaf holding one point, or an internal node whose
/// points live in up to four children. A node exclusively owns its children.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    bounds: Rect,
    state: NodeState,
}

/// What a removal did below the node it was called on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// The node is now empty and must be detached by its parent.
    RemoveSelf,
    /// A point was removed below; the parent should re-check its own shape.
    Compact,
    /// No matching point; nothing changed.
    NotFound,
}

impl Node {
    pub(crate) fn leaf(point: Point, bounds: Rect) -> Self {
        Self {
            bounds,
            state: NodeState::Leaf { point, count: 1 },
        }
    }

    /// The region this node governs.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Leaf or internal state.
    pub fn state(&self) -> &NodeState {
        &self.state
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self.state, NodeState::Leaf { .. })
    }

    /// The stored point, for leaves.
    pub fn point(&self) -> Option<Point> {
        match self.state {
            NodeState::Leaf { point, .. } => Some(point),
            NodeState::Internal(_) => None,
        }
    }

    /// The child in `quadrant`, for internal nodes.
    pub fn child(&self, quadrant: Quadrant) -> Option<&Self> {
        match &self.state {
            NodeState::Leaf { .. } => None,
            NodeState::Internal(children) => children[quadrant.index()].as_deref(),
        }
    }

    /// Number of points stored in this subtree, counting repeats.
    #[allow(
        clippy::len_without_is_empty,
        reason = "A node always holds at least one point; only the tree can be empty."
    )]
    pub fn len(&self) -> usize {
        match &self.state {
            NodeState::Leaf { count, .. } => *count,
            NodeState::Internal(children) => children.iter().flatten().map(|c| c.len()).sum(),
        }
    }

    /// Height of this subtree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        match &self.state {
            NodeState::Leaf { .. } => 1,
            NodeState::Internal(children) => {
                1 + children.iter().flatten().map(|c| c.depth()).max().unwrap_or(0)
            }
        }
    }

    /// Insert `point` below this node.
    ///
    /// A leaf whose point matches increments its count. Any other leaf turns
    /// internal: its point moves into a fresh child leaf, then `point` is
    /// placed as if the node had been internal all along.
    ///
    /// Callers resolve tolerance matches first (see `find`) so that a
    /// match across a midline lands on the stored point's leaf.
    pub(crate) fn add(&mut self, point: Point, tolerance: Tolerance) {
        if let NodeState::Leaf {
            point: existing,
            count,
        } = self.state
        {
            if tolerance.matches(existing, point) || self.inseparable(existing, point) {
                self.state = NodeState::Leaf {
                    point: existing,
                    count: count + 1,
                };
                return;
            }
            let (quadrant, rect) = Quadrant::classify(self.bounds, existing);
            let mut children = Children::default();
            children[quadrant.index()] = Some(Box::new(Self {
                bounds: rect,
                state: NodeState::Leaf {
                    point: existing,
                    count,
                },
            }));
            self.state = NodeState::Internal(children);
        }

        if let NodeState::Internal(children) = &mut self.state {
            let (quadrant, rect) = Quadrant::classify(self.bounds, point);
            match &mut children[quadrant.index()] {
                Some(child) => child.add(point, tolerance),
                empty => *empty = Some(Box::new(Self::leaf(point, rect))),
            }
        }
    }

    /// Remove one occurrence of `target` below this node.
    pub(crate) fn remove(&mut self, target: Point, tolerance: Tolerance) -> Outcome {
        match &mut self.state {
            NodeState::Leaf { point, count } => {
                if !tolerance.matches(*point, target) {
                    Outcome::NotFound
                } else if *count > 1 {
                    *count -= 1;
                    Outcome::Compact
                } else {
                    Outcome::RemoveSelf
                }
            }
            NodeState::Internal(children) => {
                let (quadrant, _) = Quadrant::classify(self.bounds, target);
                let slot = &mut children[quadrant.index()];
                let Some(child) = slot.as_mut() else {
                    return Outcome::NotFound;
                };
                match child.remove(target, tolerance) {
                    Outcome::NotFound => return Outcome::NotFound,
                    Outcome::RemoveSelf => *slot = None,
                    Outcome::Compact => {}
                }
                self.compact()
            }
        }
    }

    /// Re-check the shape of an internal node after a removal below it.
    ///
    /// No children left: the node itself must go. A single leaf child: its point
    /// moves up and this node becomes that leaf. A single internal child still
    /// holds at least two points and stays where it is.
    fn compact(&mut self) -> Outcome {
        let NodeState::Internal(children) = &self.state else {
            return Outcome::Compact;
        };
        let mut occupied = children.iter().flatten();
        let folded = match (occupied.next(), occupied.next()) {
            (None, _) => return Outcome::RemoveSelf,
            (Some(sole), None) => match sole.state {
                NodeState::Leaf { point, count } => Some(NodeState::Leaf { point, count }),
                NodeState::Internal(_) => None,
            },
            (Some(_), Some(_)) => None,
        };
        if let Some(leaf) = folded {
            self.state = leaf;
        }
        Outcome::Compact
    }

    /// The stored point matching `target`, if any.
    ///
    /// Every node overlapping the tolerance box around `target` is searched, so
    /// a match is found even when it sits across a midline from `target`.
    pub(crate) fn find(&self, target: Point, tolerance: Tolerance) -> Option<Point> {
        let t = tolerance.0;
        let reach = Rect::new(target.x - t, target.y - t, target.x + t, target.y + t);
        self.find_in(target, tolerance, reach)
    }

    fn find_in(&self, target: Point, tolerance: Tolerance, reach: Rect) -> Option<Point> {
        if !overlaps(self.bounds, reach) {
            return None;
        }
        match &self.state {
            NodeState::Leaf { point, .. } => (tolerance.matches(*point, target)
                || self.inseparable(*point, target))
            .then_some(*point),
            NodeState::Internal(children) => children
                .iter()
                .flatten()
                .find_map(|child| child.find_in(target, tolerance, reach)),
        }
    }

    /// Whether splitting this node cannot tell `a` and `b` apart.
    ///
    /// At the limit of `f64` resolution a quadrant can round to the node's own
    /// bounds. Two points sharing that quadrant would subdivide forever, so they
    /// share the leaf instead.
    fn inseparable(&self, a: Point, b: Point) -> bool {
        let (qa, rect) = Quadrant::classify(self.bounds, a);
        rect == self.bounds && Quadrant::classify(self.bounds, b).0 == qa
    }

    /// Visit every leaf whose point lies in `query` (edges inclusive).
    pub(crate) fn visit_rect<F: FnMut(Point, usize)>(&self, query: Rect, f: &mut F) {
        if !overlaps(self.bounds, query) {
            return;
        }
        match &self.state {
            NodeState::Leaf { point, count } => {
                if contains_inclusive(query, *point) {
                    f(*point, *count);
                }
            }
            NodeState::Internal(children) => {
                for child in children.iter().flatten() {
                    child.visit_rect(query, f);
                }
            }
        }
    }
}

/// Depth-first iterator over the leaves of a tree, in slot order.
///
/// Yields each stored point with its count. Created by
/// [`QuadTree::points`](crate::QuadTree::points).
#[derive(Clone, Debug)]
pub struct Points<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Points<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl Iterator for Points<'_> {
    type Item = (Point, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match &node.state {
                NodeState::Leaf { point, count } => return Some((*point, *count)),
                NodeState::Internal(children) => {
                    self.stack
                        .extend(children.iter().rev().flatten().map(Box::as_ref));
                }
            }
        }
        None
    }
}

fn overlaps(a: Rect, b: Rect) -> bool {
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}

/// Whether `p` lies in `r`, edges included. False for NaN coordinates.
pub(crate) fn contains_inclusive(r: Rect, p: Point) -> bool {
    r.x0 <= p.x && p.x <= r.x1 && r.y0 <= p.y && p.y <= r.y1
}

#[cfg(test)]
impl Node {
    /// Assert the structural invariants of this subtree.
    pub(crate) fn check_invariants(&self) {
        let NodeState::Internal(children) = &self.state else {
            assert!(self.len() >= 1, "leaf count must be positive");
            assert!(
                contains_inclusive(self.bounds, self.point().unwrap()),
                "leaf point must lie in its bounds"
            );
            return;
        };
        let occupied: Vec<_> = Quadrant::ALL
            .into_iter()
            .filter_map(|q| children[q.index()].as_deref().map(|c| (q, c)))
            .collect();
        assert!(!occupied.is_empty(), "internal node without children");
        if let [(_, sole)] = occupied.as_slice() {
            assert!(!sole.is_leaf(), "single leaf child should have been compacted");
        }
        for (quadrant, child) in occupied {
            assert_eq!(
                child.bounds,
                quadrant.rect(self.bounds),
                "child bounds must be the parent's quadrant"
            );
            for (point, _) in Points::new(Some(child)) {
                assert_eq!(
                    Quadrant::classify(self.bounds, point).0,
                    quadrant,
                    "point stored in the wrong quadrant"
                );
            }
            child.check_invariants();
        }
    }
}
