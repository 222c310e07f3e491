// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_window --heading-base-level=0

//! Understory Window: a retained-mode window tree for game and tool UIs.
//!
//! A [`WindowTree`] owns every window. Windows are addressed by generational
//! [`WindowId`]s, so a handle to a destroyed window never reaches a window
//! created later in the same slot.
//!
//! - Parents own their children; destroying a window destroys its subtree.
//! - Input arrives as [`WindowEvent`]s through [`WindowTree::handle_event`].
//!   Event filters see an event first; then the target's [`WindowBehavior`]
//!   handles it or returns [`Outcome::Bubble`] to pass it to the parent.
//! - A parentless `MODAL` window can [`run`](WindowTree::run) while an
//!   application-provided [`ModalPump`] delivers events.
//! - [`WindowTree::render`] walks the visible tree and brackets children with
//!   [`ClipGuard`]s according to each window's [`ChildClippingMode`].
//! - Layouts are windows with a grid. [`WindowTree::horizontal_layout`],
//!   [`WindowTree::vertical_layout`], and [`WindowTree::grid_layout`] build one
//!   from the children a window already has; cells share extra space equally
//!   and minimum sizes propagate up through nested layouts.
//!
//! Capability flags are [`understory_flags`] flag types, so applications can
//! register extra [`WindowFlag`]s at start-up.
//!
//! ## Minimal usage
//!
//! ```
//! use kurbo::{Rect, Size};
//! use understory_window::{WindowDesc, WindowTree};
//!
//! let mut tree = WindowTree::new();
//! let dialog = tree.create(WindowDesc::new(Rect::new(0., 0., 200., 100.)).with_name("dialog"));
//! let ok = tree.create(WindowDesc::new(Rect::new(10., 60., 90., 90.)));
//! let cancel = tree.create(WindowDesc::new(Rect::new(110., 60., 190., 90.)));
//! tree.attach_child(dialog, ok);
//! tree.attach_child(dialog, cancel);
//!
//! // Both buttons end up in one row that follows the dialog's size.
//! tree.horizontal_layout(dialog).unwrap();
//! tree.resize(dialog, Size::new(405., 100.));
//! assert_eq!(tree.width(ok), 200.);
//! assert_eq!(tree.relative_rect(cancel).x0, 205.);
//! ```

mod behavior;
mod browse;
mod clip;
mod config;
mod dispatch;
mod error;
mod event;
mod flags;
mod geometry;
mod gui;
mod layout;
mod render;
mod tree;
mod types;

pub use behavior::{DefaultBehavior, WindowBehavior, WindowCx};
pub use clip::{ClipBackend, ClipGuard};
pub use config::TreeConfig;
pub use error::WindowError;
pub use event::{DropAcceptance, Key, MouseButton, Outcome, TimerId, WindowEvent};
pub use flags::{ModKey, WindowFlag};
pub use gui::{DefaultStyleFactory, Gui, ModalPump, NoGui, StyleFactory};
pub use tree::WindowTree;
pub use types::{
    BrowseInfoMode, ChildClippingMode, DragDropRenderingState, LayoutCell, WindowDesc, WindowId,
    WindowRegion,
};
