// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use understory_window::{WindowDesc, WindowId, WindowTree};

/// A window holding an `n` by `n` grid of slightly jittered children.
fn form(n: usize, cell: f64) -> (WindowTree, WindowId) {
    let mut tree = WindowTree::new();
    let extent = n as f64 * cell;
    let root = tree.create(WindowDesc::new(Rect::new(0.0, 0.0, extent, extent)));
    for y in 0..n {
        for x in 0..n {
            let jitter = ((x * 7 + y * 3) % 3) as f64;
            let x0 = x as f64 * cell + jitter;
            let y0 = y as f64 * cell + jitter;
            let child = tree.create(WindowDesc::new(Rect::new(
                x0,
                y0,
                x0 + cell * 0.8,
                y0 + cell * 0.8,
            )));
            tree.attach_child(root, child);
        }
    }
    (tree, root)
}

fn bench_grid_inference(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_inference");
    for &n in &[4_usize, 8, 16] {
        group.bench_function(format!("grid_{n}x{n}"), |b| {
            b.iter_batched(
                || form(n, 40.0),
                |(mut tree, root)| {
                    tree.grid_layout(root).unwrap();
                    black_box(tree.layout(root));
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_resize_relayout(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize_relayout");
    for &n in &[4_usize, 16] {
        let (mut tree, root) = form(n, 40.0);
        tree.grid_layout(root).unwrap();
        let base = tree.size(root);
        let mut grow = false;
        group.bench_function(format!("grid_{n}x{n}"), |b| {
            b.iter(|| {
                grow = !grow;
                let extra = if grow { 50.0 } else { 0.0 };
                tree.resize(root, Size::new(base.width + extra, base.height + extra));
                black_box(tree.size(root));
            });
        });
    }
    group.finish();
}

fn bench_linear_layouts(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear_layout");
    group.bench_function("horizontal_64", |b| {
        b.iter_batched(
            || {
                let mut tree = WindowTree::new();
                let root = tree.create(WindowDesc::new(Rect::new(0.0, 0.0, 6400.0, 40.0)));
                for i in 0..64 {
                    let x0 = (63 - i) as f64 * 100.0;
                    let child = tree.create(WindowDesc::new(Rect::new(x0, 0.0, x0 + 90.0, 30.0)));
                    tree.attach_child(root, child);
                }
                (tree, root)
            },
            |(mut tree, root)| {
                tree.horizontal_layout(root).unwrap();
                black_box(tree.layout(root));
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_grid_inference,
    bench_resize_relayout,
    bench_linear_layouts
);
criterion_main!(benches);
