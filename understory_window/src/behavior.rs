// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-window event handlers and hooks.

use core::any::Any;
use core::fmt;

use kurbo::{Point, Vec2};
use understory_flags::FlagSet;

use crate::clip::ClipBackend;
use crate::event::{DropAcceptance, Key, MouseButton, Outcome, TimerId, WindowEvent};
use crate::flags::ModKey;
use crate::tree::WindowTree;
use crate::types::WindowId;

/// Access to the tree from inside a behavior hook.
///
/// [`WindowCx::id`] is the window whose behavior is running. The tree may be
/// mutated freely, including destroying that window; the dispatcher
/// re-checks liveness afterwards.
pub struct WindowCx<'a> {
    tree: &'a mut WindowTree,
    id: WindowId,
}

impl fmt::Debug for WindowCx<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowCx")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

impl<'a> WindowCx<'a> {
    pub(crate) fn new(tree: &'a mut WindowTree, id: WindowId) -> Self {
        Self { tree, id }
    }

    /// The window whose behavior is running.
    pub fn id(&self) -> WindowId {
        self.id
    }

    /// The tree.
    pub fn tree(&self) -> &WindowTree {
        self.tree
    }

    /// The tree, mutably.
    pub fn tree_mut(&mut self) -> &mut WindowTree {
        self.tree
    }

    /// Returns true if the window has the `INTERACTIVE` flag.
    pub fn interactive(&self) -> bool {
        self.tree.interactive(self.id)
    }

    /// Returns true if the window has the `DRAGABLE` flag.
    pub fn dragable(&self) -> bool {
        self.tree.dragable(self.id)
    }

    /// The default handler result: [`Outcome::Bubble`] for non-interactive
    /// windows, [`Outcome::Handled`] otherwise.
    pub fn bubble_unless_interactive(&self) -> Outcome {
        if self.interactive() {
            Outcome::Handled
        } else {
            Outcome::Bubble
        }
    }
}

/// Event handlers and hooks of a window.
///
/// Every method has a default. Input handlers return
/// [`Outcome::Bubble`] on non-interactive windows, which makes the tree
/// forward the event to the parent; interactive windows swallow events they
/// do not override. A double click defaults to a click, and a left-button
/// drag on a `DRAGABLE` window moves it.
///
/// ```
/// use kurbo::{Point, Rect};
/// use understory_flags::FlagSet;
/// use understory_window::{
///     ModKey, MouseButton, Outcome, WindowBehavior, WindowCx, WindowDesc, WindowEvent, WindowTree,
/// };
///
/// #[derive(Default)]
/// struct Counter(u32);
///
/// impl WindowBehavior for Counter {
///     fn click(
///         &mut self,
///         _cx: &mut WindowCx<'_>,
///         _button: MouseButton,
///         _point: Point,
///         _mod_keys: FlagSet<ModKey>,
///     ) -> Outcome {
///         self.0 += 1;
///         Outcome::Handled
///     }
/// }
///
/// let mut tree = WindowTree::new();
/// let parent = tree.create_with_behavior(WindowDesc::new(Rect::new(0., 0., 100., 100.)), Counter::default());
/// let child = tree.create(WindowDesc::new(Rect::new(10., 10., 20., 20.)));
/// tree.attach_child(parent, child);
///
/// // The child is not interactive, so its click bubbles to the parent.
/// tree.handle_event(child, &mut WindowEvent::Click {
///     button: MouseButton::Left,
///     point: Point::new(15., 15.),
///     mod_keys: FlagSet::empty(),
/// });
/// assert_eq!(tree.behavior::<Counter>(parent).unwrap().0, 1);
/// ```
#[allow(unused_variables, reason = "default implementations ignore most arguments")]
pub trait WindowBehavior: Any {
    /// A mouse button was pressed.
    fn button_down(
        &mut self,
        cx: &mut WindowCx<'_>,
        button: MouseButton,
        point: Point,
        mod_keys: FlagSet<ModKey>,
    ) -> Outcome {
        cx.bubble_unless_interactive()
    }

    /// The cursor moved by `movement` with `button` held.
    fn drag(
        &mut self,
        cx: &mut WindowCx<'_>,
        button: MouseButton,
        point: Point,
        movement: Vec2,
        mod_keys: FlagSet<ModKey>,
    ) -> Outcome {
        if button == MouseButton::Left && cx.dragable() {
            let id = cx.id();
            cx.tree_mut().offset_move(id, movement);
            Outcome::Handled
        } else {
            cx.bubble_unless_interactive()
        }
    }

    /// A mouse button was released.
    fn button_up(
        &mut self,
        cx: &mut WindowCx<'_>,
        button: MouseButton,
        point: Point,
        mod_keys: FlagSet<ModKey>,
    ) -> Outcome {
        cx.bubble_unless_interactive()
    }

    /// A mouse button was clicked.
    fn click(
        &mut self,
        cx: &mut WindowCx<'_>,
        button: MouseButton,
        point: Point,
        mod_keys: FlagSet<ModKey>,
    ) -> Outcome {
        cx.bubble_unless_interactive()
    }

    /// A mouse button was double-clicked. Defaults to [`Self::click`].
    fn double_click(
        &mut self,
        cx: &mut WindowCx<'_>,
        button: MouseButton,
        point: Point,
        mod_keys: FlagSet<ModKey>,
    ) -> Outcome {
        self.click(cx, button, point, mod_keys)
    }

    /// The cursor entered the window.
    fn mouse_enter(
        &mut self,
        cx: &mut WindowCx<'_>,
        point: Point,
        mod_keys: FlagSet<ModKey>,
    ) -> Outcome {
        cx.bubble_unless_interactive()
    }

    /// The cursor is over the window.
    fn mouse_here(
        &mut self,
        cx: &mut WindowCx<'_>,
        point: Point,
        mod_keys: FlagSet<ModKey>,
    ) -> Outcome {
        cx.bubble_unless_interactive()
    }

    /// The cursor left the window.
    fn mouse_leave(&mut self, cx: &mut WindowCx<'_>) -> Outcome {
        cx.bubble_unless_interactive()
    }

    /// The wheel turned by `delta` clicks.
    fn mouse_wheel(
        &mut self,
        cx: &mut WindowCx<'_>,
        point: Point,
        delta: i32,
        mod_keys: FlagSet<ModKey>,
    ) -> Outcome {
        cx.bubble_unless_interactive()
    }

    /// Dragged windows entered the window.
    fn drag_drop_enter(
        &mut self,
        cx: &mut WindowCx<'_>,
        point: Point,
        drops: &mut [DropAcceptance],
        mod_keys: FlagSet<ModKey>,
    ) -> Outcome {
        cx.bubble_unless_interactive()
    }

    /// Dragged windows are over the window. Interactive windows report
    /// acceptance through [`Self::drops_acceptable`].
    fn drag_drop_here(
        &mut self,
        cx: &mut WindowCx<'_>,
        point: Point,
        drops: &mut [DropAcceptance],
        mod_keys: FlagSet<ModKey>,
    ) -> Outcome {
        if !cx.interactive() {
            return Outcome::Bubble;
        }
        self.drops_acceptable(cx, drops, point, mod_keys);
        Outcome::Handled
    }

    /// Which dragged windows would be accepted if dropped now.
    fn check_drops(
        &mut self,
        cx: &mut WindowCx<'_>,
        point: Point,
        drops: &mut [DropAcceptance],
        mod_keys: FlagSet<ModKey>,
    ) -> Outcome {
        if !cx.interactive() {
            return Outcome::Bubble;
        }
        self.drops_acceptable(cx, drops, point, mod_keys);
        Outcome::Handled
    }

    /// Dragged windows left the window.
    fn drag_drop_leave(&mut self, cx: &mut WindowCx<'_>) -> Outcome {
        cx.bubble_unless_interactive()
    }

    /// Windows were dropped on this one.
    ///
    /// Accepted windows that no handler takes ownership of stay detached;
    /// whoever tracked the drag is responsible for destroying them.
    fn accept_drops(
        &mut self,
        cx: &mut WindowCx<'_>,
        point: Point,
        windows: &[WindowId],
        mod_keys: FlagSet<ModKey>,
    ) -> Outcome {
        cx.bubble_unless_interactive()
    }

    /// A key was pressed.
    fn key_press(
        &mut self,
        cx: &mut WindowCx<'_>,
        key: Key,
        code_point: u32,
        mod_keys: FlagSet<ModKey>,
    ) -> Outcome {
        cx.bubble_unless_interactive()
    }

    /// A key was released.
    fn key_release(
        &mut self,
        cx: &mut WindowCx<'_>,
        key: Key,
        code_point: u32,
        mod_keys: FlagSet<ModKey>,
    ) -> Outcome {
        cx.bubble_unless_interactive()
    }

    /// Text was entered.
    fn text_input(&mut self, cx: &mut WindowCx<'_>, text: &str) -> Outcome {
        cx.bubble_unless_interactive()
    }

    /// The window gained focus.
    fn gaining_focus(&mut self, cx: &mut WindowCx<'_>) -> Outcome {
        Outcome::Handled
    }

    /// The window is losing focus.
    fn losing_focus(&mut self, cx: &mut WindowCx<'_>) -> Outcome {
        Outcome::Handled
    }

    /// A timer fired.
    fn timer_firing(&mut self, cx: &mut WindowCx<'_>, ticks: u32, timer: TimerId) -> Outcome {
        Outcome::Handled
    }

    /// Mark each candidate in `drops` as acceptable or not. Rejects all by default.
    fn drops_acceptable(
        &self,
        cx: &WindowCx<'_>,
        drops: &mut [DropAcceptance],
        point: Point,
        mod_keys: FlagSet<ModKey>,
    ) {
        for drop in drops {
            drop.acceptable = false;
        }
    }

    /// Inspect an event bound for `target`, a window this one filters.
    /// Returning true consumes the event.
    fn event_filter(&mut self, cx: &mut WindowCx<'_>, target: WindowId, event: &WindowEvent) -> bool {
        false
    }

    /// Called by [`WindowTree::run`] before the modal loop starts.
    fn modal_init(&mut self, cx: &mut WindowCx<'_>) {}

    /// Update cached state before rendering.
    fn pre_render(&mut self, cx: &mut WindowCx<'_>) {}

    /// Draw the window. Children are drawn afterwards by the tree.
    fn render(&mut self, cx: &mut WindowCx<'_>, backend: &mut dyn ClipBackend) {}

    /// A child of this window started being dragged.
    fn starting_child_drag_drop(&mut self, cx: &mut WindowCx<'_>, child: WindowId, offset: Vec2) {}

    /// Drags of these children were cancelled.
    fn cancelling_child_drag_drop(&mut self, cx: &mut WindowCx<'_>, children: &[WindowId]) {}

    /// These children were dropped on `destination`. Detaches them by default.
    fn children_dragged_away(
        &mut self,
        cx: &mut WindowCx<'_>,
        children: &[WindowId],
        destination: Option<WindowId>,
    ) {
        let id = cx.id();
        for &child in children {
            cx.tree_mut().detach_child(id, child);
        }
    }
}

/// Behavior of windows created without one: every hook keeps its default.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultBehavior;

impl WindowBehavior for DefaultBehavior {}

/// Route `event` to the matching handler of `behavior`.
pub(crate) fn dispatch(
    behavior: &mut dyn WindowBehavior,
    cx: &mut WindowCx<'_>,
    event: &mut WindowEvent,
) -> Outcome {
    match event {
        WindowEvent::ButtonDown {
            button,
            point,
            mod_keys,
        } => behavior.button_down(cx, *button, *point, *mod_keys),
        WindowEvent::Drag {
            button,
            point,
            movement,
            mod_keys,
        } => behavior.drag(cx, *button, *point, *movement, *mod_keys),
        WindowEvent::ButtonUp {
            button,
            point,
            mod_keys,
        } => behavior.button_up(cx, *button, *point, *mod_keys),
        WindowEvent::Click {
            button,
            point,
            mod_keys,
        } => behavior.click(cx, *button, *point, *mod_keys),
        WindowEvent::DoubleClick {
            button,
            point,
            mod_keys,
        } => behavior.double_click(cx, *button, *point, *mod_keys),
        WindowEvent::MouseEnter { point, mod_keys } => behavior.mouse_enter(cx, *point, *mod_keys),
        WindowEvent::MouseHere { point, mod_keys } => behavior.mouse_here(cx, *point, *mod_keys),
        WindowEvent::MouseLeave => behavior.mouse_leave(cx),
        WindowEvent::MouseWheel {
            point,
            delta,
            mod_keys,
        } => behavior.mouse_wheel(cx, *point, *delta, *mod_keys),
        WindowEvent::DragDropEnter {
            point,
            drops,
            mod_keys,
        } => behavior.drag_drop_enter(cx, *point, drops, *mod_keys),
        WindowEvent::DragDropHere {
            point,
            drops,
            mod_keys,
        } => behavior.drag_drop_here(cx, *point, drops, *mod_keys),
        WindowEvent::CheckDrops {
            point,
            drops,
            mod_keys,
        } => behavior.check_drops(cx, *point, drops, *mod_keys),
        WindowEvent::DragDropLeave => behavior.drag_drop_leave(cx),
        WindowEvent::DragDroppedOn {
            point,
            windows,
            mod_keys,
        } => behavior.accept_drops(cx, *point, windows, *mod_keys),
        WindowEvent::KeyPress {
            key,
            code_point,
            mod_keys,
        } => behavior.key_press(cx, *key, *code_point, *mod_keys),
        WindowEvent::KeyRelease {
            key,
            code_point,
            mod_keys,
        } => behavior.key_release(cx, *key, *code_point, *mod_keys),
        WindowEvent::TextInput(text) => behavior.text_input(cx, text),
        WindowEvent::GainingFocus => behavior.gaining_focus(cx),
        WindowEvent::LosingFocus => behavior.losing_focus(cx),
        WindowEvent::TimerFiring { ticks, timer } => behavior.timer_firing(cx, *ticks, *timer),
    }
}
