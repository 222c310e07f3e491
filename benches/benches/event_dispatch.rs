// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_flags::FlagSet;
use understory_window::{
    ModKey, MouseButton, Outcome, WindowBehavior, WindowCx, WindowDesc, WindowEvent, WindowId,
    WindowTree,
};

#[derive(Default)]
struct Sink(u64);

impl WindowBehavior for Sink {
    fn click(
        &mut self,
        _cx: &mut WindowCx<'_>,
        _button: MouseButton,
        _point: Point,
        _mod_keys: FlagSet<ModKey>,
    ) -> Outcome {
        self.0 += 1;
        Outcome::Handled
    }
}

/// A chain of `depth` windows under a root that handles clicks.
fn chain(depth: usize) -> (WindowTree, WindowId) {
    let mut tree = WindowTree::new();
    let root = tree.create_with_behavior(WindowDesc::new(Rect::new(0.0, 0.0, 100.0, 100.0)), Sink::default());
    let mut leaf = root;
    for _ in 0..depth {
        let child = tree.create(WindowDesc::new(Rect::new(0.0, 0.0, 100.0, 100.0)));
        tree.attach_child(leaf, child);
        leaf = child;
    }
    (tree, leaf)
}

fn bench_bubbling(c: &mut Criterion) {
    let mut group = c.benchmark_group("bubble_click");
    for &depth in &[1_usize, 8, 32] {
        let (mut tree, leaf) = chain(depth);
        group.bench_function(format!("depth_{depth}"), |b| {
            b.iter(|| {
                let mut event = WindowEvent::Click {
                    button: MouseButton::Left,
                    point: Point::new(1.0, 1.0),
                    mod_keys: FlagSet::empty(),
                };
                tree.handle_event(black_box(leaf), &mut event);
            });
        });
    }
    group.finish();
}

fn bench_filters(c: &mut Criterion) {
    let (mut tree, leaf) = chain(1);
    for _ in 0..16 {
        let filter = tree.create(WindowDesc::default());
        tree.install_event_filter(leaf, filter);
    }
    c.bench_function("filtered_click_16", |b| {
        b.iter(|| {
            let mut event = WindowEvent::Click {
                button: MouseButton::Left,
                point: Point::new(1.0, 1.0),
                mod_keys: FlagSet::empty(),
            };
            tree.handle_event(black_box(leaf), &mut event);
        });
    });
}

criterion_group!(benches, bench_bubbling, bench_filters);
criterion_main!(benches);
