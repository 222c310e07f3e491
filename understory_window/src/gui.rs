// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seams to the application that owns the event pump.

use core::any::Any;
use core::fmt;
use std::rc::Rc;

use crate::tree::WindowTree;
use crate::types::WindowId;

/// Creates the concrete controls used by windows.
///
/// The window tree never builds controls itself; it only stores and hands out
/// factories, falling back to [`Gui::style_factory`] when a window has none.
pub trait StyleFactory: Any + fmt::Debug {
    /// Name of the style, for diagnostics.
    fn name(&self) -> &str;
}

/// The style used when neither a window nor the [`Gui`] supplies one.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultStyleFactory;

impl StyleFactory for DefaultStyleFactory {
    fn name(&self) -> &str {
        "default"
    }
}

/// The application collaborator: modal stack, drag-and-drop tracking, and
/// the default style.
///
/// Every method has a do-nothing default, so applications implement only what
/// they track.
pub trait Gui {
    /// A modal run is starting on `window`.
    fn register_modal(&mut self, window: WindowId) {
        let _ = window;
    }

    /// Forget `window` as a top-level, modal, or tracked window.
    ///
    /// Called when a window gains a parent and when a modal run ends.
    fn remove(&mut self, window: WindowId) {
        let _ = window;
    }

    /// Returns true if `window` is being dragged.
    fn drag_drop_wnd(&self, window: WindowId) -> bool {
        let _ = window;
        false
    }

    /// Returns true if `window` is being dragged over a target that accepts it.
    fn accepted_drag_drop_wnd(&self, window: WindowId) -> bool {
        let _ = window;
        false
    }

    /// Returns true if dragged windows are drawn at the cursor.
    fn rendering_drag_drop_wnds(&self) -> bool {
        true
    }

    /// The style used by windows without their own.
    fn style_factory(&self) -> Rc<dyn StyleFactory> {
        Rc::new(DefaultStyleFactory)
    }
}

/// A [`Gui`] that tracks nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoGui;

impl Gui for NoGui {}

/// Drives the event loop while a window runs modally.
///
/// [`WindowTree::run`] calls `run_modal` once; the pump keeps delivering
/// events until [`WindowTree::run_done`] reports the run ended.
pub trait ModalPump {
    /// Pump events for the modal `window` until its run is done.
    fn run_modal(&mut self, tree: &mut WindowTree, window: WindowId);
}

impl<F: FnMut(&mut WindowTree, WindowId)> ModalPump for F {
    fn run_modal(&mut self, tree: &mut WindowTree, window: WindowId) {
        self(tree, window);
    }
}
