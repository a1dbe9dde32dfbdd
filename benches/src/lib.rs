// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point generators shared by the quadtree benchmarks.

use kurbo::Point;

/// Side of the square world the clustered generator fills.
pub const WORLD: f64 = 2000.0;

/// Centers of an `n`×`n` grid of `cell`-sized cells.
pub fn gen_grid_points(n: usize, cell: f64) -> Vec<Point> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            out.push(Point::new(
                x as f64 * cell + cell * 0.5,
                y as f64 * cell + cell * 0.5,
            ));
        }
    }
    out
}

/// Xorshift generator; deterministic across runs.
#[derive(Clone, Debug)]
pub struct Rng(u64);

impl Rng {
    /// Seeded generator. The seed must be non-zero.
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Next raw value.
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// `count` points uniformly spread over `[0, size)²`.
pub fn gen_random_points(count: usize, size: f64) -> Vec<Point> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| Point::new(rng.next_f64() * size, rng.next_f64() * size))
        .collect()
}

/// `n_clusters` tight clusters of `per_cluster` points each, clamped to `[0, 2000]²`.
pub fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((rng.next_f64() * WORLD, rng.next_f64() * WORLD));
    }
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(Point::new(
                (cx + dx).clamp(0.0, WORLD),
                (cy + dy).clamp(0.0, WORLD),
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clustered_points_stay_in_world() {
        let points = gen_clustered_points(50, 100, 400.0);
        assert_eq!(points.len(), 5000);
        assert!(
            points
                .iter()
                .all(|p| (0.0..=WORLD).contains(&p.x) && (0.0..=WORLD).contains(&p.y))
        );
    }
}
