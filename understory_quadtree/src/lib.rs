// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_quadtree --heading-base-level=0

//! Understory Quadtree: a point-region quadtree over Kurbo geometry.
//!
//! A [`QuadTree`] covers a fixed [`Rect`](kurbo::Rect) and stores [`Point`](kurbo::Point)s.
//!
//! - Splitting is lazy: a region stays a single leaf until a second point lands in it,
//!   so the node count follows the number of points rather than a fixed grid depth.
//! - Removal compacts: an internal node left above a single leaf collapses back into
//!   that leaf, all the way up the tree.
//! - Points are classified against the center of each node. Points on a midline go to
//!   the right/top side; see [`Quadrant::classify`].
//! - Points closer than a [`Tolerance`] are the same point; adding one again counts it.
//!
//! Quadrants are named with `y` growing upward (`Top` is the larger-`y` half).
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_quadtree::{QuadTree, Quadrant};
//!
//! let mut tree = QuadTree::new(Rect::from_origin_size((-1.0, -1.0), (2.0, 2.0)));
//! tree.add(Point::new(0.5, 0.5));
//! tree.add(Point::new(0.5, -0.5));
//!
//! // The root split into two leaves.
//! let root = tree.root().unwrap();
//! assert_eq!(
//!     root.child(Quadrant::TopRight).unwrap().point(),
//!     Some(Point::new(0.5, 0.5))
//! );
//! assert_eq!(tree.to_string(), "()\n├ ( 0.50, 0.50)\n├ ( 0.50,-0.50)\n├ ()\n└ ()\n");
//!
//! // Removing one collapses the root back into a leaf.
//! assert!(tree.remove(Point::new(0.5, 0.5)));
//! assert_eq!(tree.root().unwrap().point(), Some(Point::new(0.5, -0.5)));
//!
//! // Removing a point that was never added is a no-op.
//! assert!(!tree.remove(Point::new(-0.5, 0.5)));
//! ```
//!
//! Rectangle queries visit only the nodes that can hold matching points:
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_quadtree::QuadTree;
//!
//! let mut tree = QuadTree::new(Rect::new(0.0, 0.0, 100.0, 100.0));
//! for i in 0..10 {
//!     tree.add(Point::new(i as f64 * 10.0, 50.0));
//! }
//! let hits: Vec<_> = tree.query_rect(Rect::new(15.0, 40.0, 45.0, 60.0)).collect();
//! assert_eq!(hits.len(), 3);
//! ```
//!
//! ## Float semantics
//!
//! [`QuadTree::add`] only stores points inside the tree's bounds, edges included.
//! Anything else, NaN and infinities among them, is rejected and `add` returns `false`.
//!
//! Tolerance matching looks across midlines: a point just left of a split still
//! matches a stored point just right of it.

#![no_std]

extern crate alloc;

mod dump;
pub mod node;
pub mod tree;
pub mod types;

pub use node::{Children, Node, NodeState, Points};
pub use tree::QuadTree;
pub use types::{Quadrant, Tolerance, mid};
