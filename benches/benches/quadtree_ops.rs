// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_quadtree::QuadTree;
use understory_quadtree_benches::{gen_clustered_points, gen_grid_points, gen_random_points};

const WORLD: Rect = Rect::new(0.0, 0.0, 2000.0, 2000.0);

fn build(points: &[Point]) -> QuadTree {
    let mut tree = QuadTree::new(WORLD);
    for &p in points {
        tree.add(p);
    }
    tree
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &n in &[32usize, 64, 128] {
        let points = gen_grid_points(n, 10.0);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("grid_n{}", n), |b| {
            b.iter(|| black_box(build(&points)));
        });
    }
    for &count in &[1_000usize, 10_000] {
        let random = gen_random_points(count, WORLD.x1);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("random_{}", count), |b| {
            b.iter(|| black_box(build(&random)));
        });
    }
    let clustered = gen_clustered_points(16, 256, 40.0);
    group.throughput(Throughput::Elements(clustered.len() as u64));
    group.bench_function("clustered_16x256", |b| {
        b.iter(|| black_box(build(&clustered)));
    });
    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");
    for &count in &[1_000usize, 10_000] {
        let points = gen_random_points(count, WORLD.x1);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("random_all_{}", count), |b| {
            b.iter_batched(
                || build(&points),
                |mut tree| {
                    for &p in &points {
                        tree.remove(p);
                    }
                    black_box(tree.is_empty());
                },
                BatchSize::SmallInput,
            )
        });
    }
    let points = gen_random_points(10_000, WORLD.x1);
    let missing = gen_clustered_points(4, 256, 10.0);
    group.throughput(Throughput::Elements(missing.len() as u64));
    group.bench_function("missing_10000", |b| {
        b.iter_batched(
            || build(&points),
            |mut tree| {
                let mut removed = 0;
                for &p in &missing {
                    removed += usize::from(tree.remove(p));
                }
                black_box(removed);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");
    let window = Rect::new(100.0, 100.0, 500.0, 500.0);
    for &count in &[1_000usize, 10_000] {
        let tree = build(&gen_random_points(count, WORLD.x1));
        group.bench_function(format!("rect_random_{}", count), |b| {
            b.iter(|| black_box(tree.query_rect(window).count()));
        });
        group.bench_function(format!("visit_rect_random_{}", count), |b| {
            b.iter(|| {
                let mut hits = 0_usize;
                tree.visit_rect(window, |_, n| hits += n);
                black_box(hits);
            });
        });
    }
    let points = gen_random_points(10_000, WORLD.x1);
    let tree = build(&points);
    group.bench_function("contains_random_10000", |b| {
        b.iter(|| {
            let found = points.iter().filter(|p| tree.contains(**p)).count();
            black_box(found);
        });
    });
    group.finish();
}

criterion_group!(benches, bench_insert, bench_remove, bench_query);
criterion_main!(benches);
