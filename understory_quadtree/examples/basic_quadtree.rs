// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Understory Quadtree: add points, dump the tree, remove, and query.

use kurbo::{Point, Rect};
use understory_quadtree::QuadTree;

fn main() {
    let mut tree = QuadTree::new(Rect::from_origin_size((-1.0, -1.0), (2.0, 2.0)));
    for p in [(0.5, 0.5), (0.5, -0.5), (-0.5, -0.5), (0.25, 0.25)] {
        tree.add(p.into());
    }
    println!("{tree}");
    println!("points={} depth={}", tree.len(), tree.depth());

    // Remove one of the two points sharing the top-right quadrant.
    tree.remove(Point::new(0.25, 0.25));
    println!("{tree}");

    // Query the right half
    let hits: Vec<_> = tree.query_rect(Rect::new(0.0, -1.0, 1.0, 1.0)).collect();
    println!("hits in right half: {:?}", hits);
}
