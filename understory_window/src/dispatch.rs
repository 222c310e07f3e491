// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event dispatch, event filters, modal runs, and drag-and-drop hooks.

use kurbo::{Point, Vec2};
use understory_flags::FlagSet;

use crate::behavior::{DefaultBehavior, WindowBehavior, WindowCx, dispatch};
use crate::event::{DropAcceptance, Outcome, WindowEvent};
use crate::flags::ModKey;
use crate::gui::ModalPump;
use crate::tree::WindowTree;
use crate::types::{DragDropRenderingState, WindowId, WindowState};

impl WindowTree {
    /// Run `f` with the behavior of `id` and a context for it.
    ///
    /// The behavior is taken out of the window for the duration of the call.
    /// A reentrant call for the same window sees a [`DefaultBehavior`]. The
    /// behavior is put back only if the window is still alive and no new
    /// behavior was installed meanwhile.
    pub(crate) fn with_behavior<R>(
        &mut self,
        id: WindowId,
        f: impl FnOnce(&mut dyn WindowBehavior, &mut WindowCx<'_>) -> R,
    ) -> Option<R> {
        let taken = self.get_mut(id)?.behavior.take();
        let reentrant = taken.is_none();
        let mut behavior = taken.unwrap_or_else(|| Box::new(DefaultBehavior));
        let result = {
            let mut cx = WindowCx::new(self, id);
            f(&mut *behavior, &mut cx)
        };
        if !reentrant {
            if let Some(n) = self.get_mut(id) {
                if n.behavior.is_none() {
                    n.behavior = Some(behavior);
                }
            }
        }
        Some(result)
    }

    /// Deliver `event` to `target`.
    ///
    /// The target's event filters see the event first, in installation
    /// order; a filter returning true consumes it. Otherwise the target's
    /// handler runs, and while handlers return [`Outcome::Bubble`] the event
    /// goes to the parent, whose filters run again. An event bubbling out of
    /// a root is dropped.
    pub fn handle_event(&mut self, target: WindowId, event: &mut WindowEvent) {
        let mut current = Some(target);
        while let Some(id) = current {
            if !self.is_alive(id) || self.filter_event(id, event) {
                return;
            }
            match self.with_behavior(id, |behavior, cx| dispatch(behavior, cx, event)) {
                Some(Outcome::Bubble) => {
                    current = self.parent(id);
                    tracing::trace!(window = ?id, parent = ?current, "event bubbled to parent");
                }
                Some(Outcome::Handled) | None => return,
            }
        }
    }

    /// Returns true if a filter of `target` consumed the event.
    fn filter_event(&mut self, target: WindowId, event: &WindowEvent) -> bool {
        let filters = self
            .get(target)
            .map(|n| n.filters.clone())
            .unwrap_or_default();
        for filter in filters {
            if !self.is_alive(filter) {
                if let Some(n) = self.get_mut(target) {
                    n.filters.retain(|w| *w != filter);
                }
                continue;
            }
            let consumed = self
                .with_behavior(filter, |behavior, cx| {
                    behavior.event_filter(cx, target, event)
                })
                .unwrap_or(false);
            if consumed {
                tracing::trace!(window = ?target, filter = ?filter, "event consumed by filter");
                return true;
            }
        }
        false
    }

    /// Make `filter` see events bound for `id` before `id` does.
    ///
    /// Installing an existing filter again moves it to the end of the list.
    pub fn install_event_filter(&mut self, id: WindowId, filter: WindowId) {
        if !self.is_alive(id) || !self.is_alive(filter) {
            return;
        }
        self.remove_event_filter(id, filter);
        if let Some(n) = self.get_mut(id) {
            n.filters.push(filter);
        }
        if let Some(f) = self.get_mut(filter) {
            f.filtering.push(id);
        }
    }

    /// Stop `filter` from seeing events bound for `id`.
    pub fn remove_event_filter(&mut self, id: WindowId, filter: WindowId) {
        if let Some(n) = self.get_mut(id) {
            n.filters.retain(|w| *w != filter);
        }
        if let Some(f) = self.get_mut(filter) {
            f.filtering.retain(|w| *w != id);
        }
    }

    /// Live filters of `id`, in the order they see events.
    pub fn event_filters(&self, id: WindowId) -> Vec<WindowId> {
        self.get(id)
            .map(|n| {
                n.filters
                    .iter()
                    .copied()
                    .filter(|w| self.is_alive(*w))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Live windows whose events `id` filters.
    pub fn filtered_windows(&self, id: WindowId) -> Vec<WindowId> {
        self.get(id)
            .map(|n| {
                n.filtering
                    .iter()
                    .copied()
                    .filter(|w| self.is_alive(*w))
                    .collect()
            })
            .unwrap_or_default()
    }

    // --- modal runs ---

    /// Run `id` modally.
    ///
    /// Only a parentless window with the `MODAL` flag runs. The window is
    /// registered with the [`Gui`](crate::Gui), its `modal_init` hook runs,
    /// and `pump` delivers events until [`Self::end_run`] is called; the
    /// window is then removed from the `Gui`. Returns false if the window
    /// could not run.
    pub fn run(&mut self, id: WindowId, mut pump: impl ModalPump) -> bool {
        if !self.modal(id) {
            return false;
        }
        self.gui.register_modal(id);
        tracing::debug!(window = ?id, "modal run entered");
        self.with_behavior(id, |behavior, cx| behavior.modal_init(cx));
        if let Some(n) = self.get_mut(id) {
            n.state.remove(WindowState::MODAL_DONE);
        }
        pump.run_modal(self, id);
        self.gui.remove(id);
        tracing::debug!(window = ?id, "modal run left");
        true
    }

    /// End the modal run of `id`.
    pub fn end_run(&mut self, id: WindowId) {
        if let Some(n) = self.get_mut(id) {
            n.state.insert(WindowState::MODAL_DONE);
        }
    }

    /// Returns true once [`Self::end_run`] was called for the current run.
    ///
    /// A destroyed window counts as done.
    pub fn run_done(&self, id: WindowId) -> bool {
        self.get(id)
            .is_none_or(|n| n.state.contains(WindowState::MODAL_DONE))
    }

    // --- drag and drop ---

    /// The kind of data the window represents when dragged.
    pub fn drag_drop_data_type(&self, id: WindowId) -> &str {
        self.get(id)
            .map(|n| n.drag_drop_data_type.as_str())
            .unwrap_or_default()
    }

    /// Set the kind of data the window represents when dragged.
    pub fn set_drag_drop_data_type(&mut self, id: WindowId, data_type: impl Into<String>) {
        if let Some(n) = self.get_mut(id) {
            n.drag_drop_data_type = data_type.into();
        }
    }

    /// How the window should be drawn given the drag in progress.
    pub fn drag_drop_rendering_state(&self, id: WindowId) -> DragDropRenderingState {
        if !self.gui.drag_drop_wnd(id) {
            DragDropRenderingState::NotDragged
        } else if !self.dragable(id) && !self.gui.rendering_drag_drop_wnds() {
            DragDropRenderingState::InPlaceCopy
        } else if self.gui.accepted_drag_drop_wnd(id) {
            DragDropRenderingState::DraggedOverAcceptingDropTarget
        } else {
            DragDropRenderingState::DraggedOverUnacceptingDropTarget
        }
    }

    /// Tell `id` that its child started being dragged, grabbed at `offset`.
    pub fn starting_child_drag_drop(&mut self, id: WindowId, child: WindowId, offset: Vec2) {
        self.with_behavior(id, |behavior, cx| {
            behavior.starting_child_drag_drop(cx, child, offset);
        });
    }

    /// Tell `id` that drags of its children were cancelled.
    pub fn cancelling_child_drag_drop(&mut self, id: WindowId, children: &[WindowId]) {
        self.with_behavior(id, |behavior, cx| {
            behavior.cancelling_child_drag_drop(cx, children);
        });
    }

    /// Tell `id` that its children were dropped on `destination`.
    pub fn children_dragged_away(
        &mut self,
        id: WindowId,
        children: &[WindowId],
        destination: Option<WindowId>,
    ) {
        self.with_behavior(id, |behavior, cx| {
            behavior.children_dragged_away(cx, children, destination);
        });
    }

    /// Ask `id` which of `drops` it would accept at `point`.
    pub fn drops_acceptable(
        &mut self,
        id: WindowId,
        drops: &mut [DropAcceptance],
        point: Point,
        mod_keys: FlagSet<ModKey>,
    ) {
        self.with_behavior(id, |behavior, cx| {
            behavior.drops_acceptable(cx, drops, point, mod_keys);
        });
    }
}
