// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree basics.
//!
//! Insert one point per quadrant, then two points sharing a quadrant, and
//! watch the tree split on insert and collapse again on removal.
//!
//! Run:
//! - `cargo run -p understory_quadtree_demos --example quadtree_basics`

use kurbo::{Point, Rect};
use understory_quadtree::{QuadTree, Quadrant};

fn main() {
    let bounds = Rect::from_origin_size((-1.0, -1.0), (2.0, 2.0));
    let mut tree = QuadTree::new(bounds);

    // One point per quadrant: the root splits once.
    for p in [(0.5, 0.5), (0.5, -0.5), (-0.5, -0.5), (-0.5, 0.5)] {
        tree.add(p.into());
    }
    println!("one per quadrant:\n{tree}");
    let root = tree.root().unwrap();
    for q in Quadrant::ALL {
        let child = root.child(q).unwrap();
        println!("{q:?}: {:?} in {:?}", child.point(), child.bounds());
    }

    // Two points sharing a quadrant force a second level.
    let mut nested = QuadTree::new(bounds);
    nested.add(Point::new(0.25, 0.25));
    nested.add(Point::new(0.75, 0.75));
    println!("shared quadrant (depth {}):\n{nested}", nested.depth());

    // Removing one of them collapses both levels.
    nested.remove(Point::new(0.75, 0.75));
    println!("after removal (depth {}): {nested}", nested.depth());
    assert!(nested.root().unwrap().is_leaf(), "root should be a leaf again");

    // Removing a point that was never added leaves the tree alone.
    let before = tree.to_string();
    let removed = tree.remove(Point::new(0.1, 0.1));
    assert!(!removed && tree.to_string() == before, "missing point is a no-op");
}
