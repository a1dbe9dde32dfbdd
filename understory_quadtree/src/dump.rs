// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable tree dumps via [`Display`](core::fmt::Display).
//!
//! A leaf renders as its point, `( 0.50,-0.50)`, with two decimals and a space
//! in place of the sign for non-negative coordinates. A repeated point gets an
//! ` xN` suffix. An internal node renders `()` on its own line followed by its
//! four slots in [`Quadrant::ALL`](crate::Quadrant::ALL) order, one per line,
//! indented by nesting depth. The last slot is marked `└ `, the others `├ `.
//! Empty slots and empty trees render `()`.
//!
//! ```text
//! ()
//! ├ ()
//!   ├ ( 0.75, 0.75)
//!   ├ ()
//!   ├ ( 0.25, 0.25)
//!   └ ()
//! ├ ()
//! ├ ()
//! └ ()
//! ```

use core::fmt;

use kurbo::Point;

use crate::node::{Node, NodeState};
use crate::tree::QuadTree;

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self, 0)
    }
}

impl fmt::Display for QuadTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => write_node(f, root, 0),
            None => f.write_str("()"),
        }
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &Node, depth: usize) -> fmt::Result {
    let children = match node.state() {
        NodeState::Leaf { point, count } => {
            write_point(f, *point)?;
            if *count > 1 {
                write!(f, " x{count}")?;
            }
            return Ok(());
        }
        NodeState::Internal(children) => children,
    };
    f.write_str("()\n")?;
    for (i, slot) in children.iter().enumerate() {
        for _ in 0..depth {
            f.write_str("  ")?;
        }
        f.write_str(if i + 1 == children.len() { "└ " } else { "├ " })?;
        match slot {
            Some(child) => {
                write_node(f, child, depth + 1)?;
                // Internal children already end their last line.
                if child.is_leaf() {
                    f.write_str("\n")?;
                }
            }
            None => f.write_str("()\n")?,
        }
    }
    Ok(())
}

fn write_point(f: &mut fmt::Formatter<'_>, point: Point) -> fmt::Result {
    f.write_str("(")?;
    write_coord(f, point.x)?;
    f.write_str(",")?;
    write_coord(f, point.y)?;
    f.write_str(")")
}

fn write_coord(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    if !v.is_sign_negative() {
        f.write_str(" ")?;
    }
    write!(f, "{v:.2}")
}
