// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window tree basics.
//!
//! Builds a small dialog, routes clicks through an event filter and up the
//! parent chain, runs the dialog modally with a scripted pump, and renders
//! it against a backend that prints its clip calls.
//!
//! Run:
//! - `cargo run -p understory_demos --example window_tree_basics`

use kurbo::{Insets, Point, Rect};
use understory_flags::FlagSet;
use understory_window::{
    ChildClippingMode, ClipBackend, ModKey, MouseButton, Outcome, WindowBehavior, WindowCx,
    WindowDesc, WindowEvent, WindowFlag, WindowId, WindowTree,
};

/// Closes its dialog when clicked.
struct CloseButton {
    dialog: WindowId,
}

impl WindowBehavior for CloseButton {
    fn click(
        &mut self,
        cx: &mut WindowCx<'_>,
        _button: MouseButton,
        _point: Point,
        _mod_keys: FlagSet<ModKey>,
    ) -> Outcome {
        tracing::info!("close clicked");
        cx.tree_mut().end_run(self.dialog);
        Outcome::Handled
    }

    fn render(&mut self, _cx: &mut WindowCx<'_>, _backend: &mut dyn ClipBackend) {
        println!("  draw close button");
    }
}

/// Counts clicks that bubble up from plain children.
#[derive(Default)]
struct Dialog {
    bubbled: u32,
}

impl WindowBehavior for Dialog {
    fn click(
        &mut self,
        _cx: &mut WindowCx<'_>,
        _button: MouseButton,
        point: Point,
        _mod_keys: FlagSet<ModKey>,
    ) -> Outcome {
        self.bubbled += 1;
        tracing::info!(?point, "click reached the dialog");
        Outcome::Handled
    }

    fn modal_init(&mut self, _cx: &mut WindowCx<'_>) {
        tracing::info!("dialog opening");
    }

    fn render(&mut self, _cx: &mut WindowCx<'_>, _backend: &mut dyn ClipBackend) {
        println!("  draw dialog frame");
    }
}

/// Logs every event bound for the windows it filters.
struct Spy;

impl WindowBehavior for Spy {
    fn event_filter(&mut self, _cx: &mut WindowCx<'_>, target: WindowId, event: &WindowEvent) -> bool {
        tracing::info!(?target, point = ?event.point(), "spy saw an event");
        false
    }
}

struct PrintBackend;

impl ClipBackend for PrintBackend {
    fn begin_scissor_clipping(&mut self, rect: Rect) {
        println!("begin scissor {rect:?}");
    }

    fn end_scissor_clipping(&mut self) {
        println!("end scissor");
    }

    fn begin_stencil_clipping(&mut self, inner: Rect, outer: Rect) {
        println!("begin stencil {outer:?} minus {inner:?}");
    }

    fn end_stencil_clipping(&mut self) {
        println!("end stencil");
    }
}

fn click_at(point: Point) -> WindowEvent {
    WindowEvent::Click {
        button: MouseButton::Left,
        point,
        mod_keys: FlagSet::empty(),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_target(false)
        .init();

    let mut tree = WindowTree::new();
    let mut desc = WindowDesc::new(Rect::new(100.0, 100.0, 400.0, 300.0))
        .with_name("dialog")
        .with_flags(WindowFlag::MODAL)
        .with_client_insets(Insets::new(4.0, 24.0, 4.0, 4.0));
    desc.clipping = ChildClippingMode::ClipToClient;
    let dialog = tree.create_with_behavior(desc, Dialog::default());

    let label = tree.create(WindowDesc::new(Rect::new(10.0, 10.0, 200.0, 40.0)).with_name("label"));
    let close = tree.create_with_behavior(
        WindowDesc::new(Rect::new(200.0, 130.0, 280.0, 160.0))
            .with_name("close")
            .with_flags(WindowFlag::INTERACTIVE),
        CloseButton { dialog },
    );
    tree.attach_child(dialog, label);
    tree.attach_child(dialog, close);

    let spy = tree.create_with_behavior(WindowDesc::default().with_name("spy"), Spy);
    tree.install_event_filter(label, spy);

    // The label is not interactive, so its click bubbles to the dialog.
    tree.handle_event(label, &mut click_at(tree.upper_left(label)));
    let bubbled = tree.behavior::<Dialog>(dialog).map_or(0, |d| d.bubbled);
    tracing::info!(bubbled, "after clicking the label");

    let ran = tree.run(dialog, |tree: &mut WindowTree, window: WindowId| {
        // A real pump would loop over platform input until the run is done.
        let mut frames = 0;
        while !tree.run_done(window) {
            frames += 1;
            if frames == 3 {
                let center = tree.window_rect(close).center();
                tree.handle_event(close, &mut click_at(center));
            }
        }
        tracing::info!(frames, "modal loop finished");
    });
    tracing::info!(ran, "modal run returned");

    println!("render:");
    tree.render(dialog, &mut PrintBackend);

    tree.destroy(dialog);
    tracing::info!(alive = tree.len(), filters = ?tree.filtered_windows(spy), "after destroying the dialog");
}
