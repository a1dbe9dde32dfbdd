// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree churn.
//!
//! Fill a tree with pseudo-random points, query a window, then remove every
//! other point and report how the tree shrinks.
//!
//! Run:
//! - `cargo run -p understory_quadtree_demos --example quadtree_churn`

use kurbo::{Point, Rect};
use understory_quadtree::QuadTree;

struct Rng(u64);

impl Rng {
    fn next_f64(&mut self) -> f64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        ((x >> 11) as f64) / ((1_u64 << 53) as f64)
    }
}

fn main() {
    let bounds = Rect::new(0.0, 0.0, 1000.0, 1000.0);
    let mut rng = Rng(0xC1A5_7E55_9999_ABCD);
    let points: Vec<Point> = (0..2000)
        .map(|_| Point::new(rng.next_f64() * 1000.0, rng.next_f64() * 1000.0))
        .collect();

    let mut tree = QuadTree::new(bounds);
    for &p in &points {
        tree.add(p);
    }
    println!("inserted {} points, depth {}", tree.len(), tree.depth());

    let window = Rect::new(250.0, 250.0, 500.0, 500.0);
    let hits = tree.query_rect(window).count();
    let expected = points.iter().filter(|p| window.contains(**p)).count();
    println!("window {window:?}: {hits} hits (linear scan: {expected})");

    for p in points.iter().step_by(2) {
        tree.remove(*p);
    }
    println!("after removing half: {} points, depth {}", tree.len(), tree.depth());

    for p in points.iter().skip(1).step_by(2) {
        tree.remove(*p);
    }
    println!("after removing all: empty = {}", tree.is_empty());
}
