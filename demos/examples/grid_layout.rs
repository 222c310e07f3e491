// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid inference.
//!
//! Places a form's controls roughly by hand, infers a grid from their
//! positions, and shows the cells following the window as it resizes.
//!
//! Run:
//! - `cargo run -p understory_demos --example grid_layout`

use kurbo::{Rect, Size};
use understory_window::{WindowDesc, WindowError, WindowId, WindowTree};

fn control(tree: &mut WindowTree, parent: WindowId, name: &str, rect: Rect) -> WindowId {
    let w = tree.create(WindowDesc::new(rect).with_name(name));
    tree.attach_child(parent, w);
    w
}

fn dump(tree: &WindowTree, form: WindowId, controls: &[WindowId]) {
    let Some(layout) = tree.layout(form) else {
        println!("no layout");
        return;
    };
    println!(
        "{} x {} grid, form {:?}",
        tree.layout_rows(layout).unwrap_or(0),
        tree.layout_columns(layout).unwrap_or(0),
        tree.size(form)
    );
    for &c in controls {
        println!(
            "  {:<8} {:?} at {:?}",
            tree.name(c).unwrap_or("?"),
            tree.layout_cell(layout, c),
            tree.relative_rect(c)
        );
    }
}

fn main() -> Result<(), WindowError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .init();

    let mut tree = WindowTree::new();
    let form = tree.create(WindowDesc::new(Rect::new(0.0, 0.0, 300.0, 120.0)).with_name("form"));
    let controls = [
        control(&mut tree, form, "name", Rect::new(5.0, 5.0, 95.0, 30.0)),
        control(&mut tree, form, "name_in", Rect::new(103.0, 6.0, 295.0, 29.0)),
        control(&mut tree, form, "email", Rect::new(6.0, 40.0, 96.0, 65.0)),
        control(&mut tree, form, "email_in", Rect::new(104.0, 40.0, 294.0, 66.0)),
        control(&mut tree, form, "submit", Rect::new(5.0, 80.0, 295.0, 110.0)),
    ];
    tree.grid_layout(form)?;
    dump(&tree, form, &controls);

    tree.set_min_size(controls[0], Size::new(120.0, 20.0));
    tree.resize(form, Size::new(200.0, 100.0));
    dump(&tree, form, &controls);

    // Overlapping controls cannot be placed in a grid.
    control(&mut tree, form, "stray", Rect::new(50.0, 20.0, 150.0, 50.0));
    tree.remove_layout(form);
    if let Err(err) = tree.grid_layout(form) {
        tracing::warn!(%err, "grid inference failed as expected");
    }
    Ok(())
}
