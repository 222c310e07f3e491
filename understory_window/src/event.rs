// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input events delivered to windows.

use kurbo::{Point, Vec2};
use understory_flags::FlagSet;

use crate::flags::ModKey;
use crate::types::WindowId;

/// A mouse button.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum MouseButton {
    /// Left button.
    Left,
    /// Middle button.
    Middle,
    /// Right button.
    Right,
}

/// A keyboard key, identified by its platform-independent key code.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Key(pub u32);

#[allow(missing_docs, reason = "self-describing key names")]
impl Key {
    pub const BACKSPACE: Self = Self(8);
    pub const TAB: Self = Self(9);
    pub const RETURN: Self = Self(13);
    pub const ESCAPE: Self = Self(27);
    pub const SPACE: Self = Self(32);
    pub const DELETE: Self = Self(127);
    pub const UP: Self = Self(273);
    pub const DOWN: Self = Self(274);
    pub const RIGHT: Self = Self(275);
    pub const LEFT: Self = Self(276);
}

/// Identifies the timer behind a [`WindowEvent::TimerFiring`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TimerId(pub u64);

/// One drag-and-drop candidate and whether the window under the cursor
/// would accept it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct DropAcceptance {
    /// The dragged window.
    pub window: WindowId,
    /// Set by [`WindowBehavior::drops_acceptable`](crate::WindowBehavior::drops_acceptable).
    pub acceptable: bool,
}

impl DropAcceptance {
    /// A candidate that has not been accepted yet.
    pub const fn new(window: WindowId) -> Self {
        Self {
            window,
            acceptable: false,
        }
    }
}

/// Result of a window's event handler.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Outcome {
    /// The event was handled; dispatch stops.
    Handled,
    /// Forward the event to the parent window.
    Bubble,
}

/// An input event.
///
/// Points are in screen coordinates. Drag-and-drop variants carry their
/// candidate lists, which handlers update in place.
#[derive(Clone, Debug, PartialEq)]
pub enum WindowEvent {
    /// A button was pressed.
    ButtonDown {
        /// Which button.
        button: MouseButton,
        /// Cursor position.
        point: Point,
        /// Modifiers held.
        mod_keys: FlagSet<ModKey>,
    },
    /// The cursor moved while a button was held.
    Drag {
        /// Which button.
        button: MouseButton,
        /// Cursor position.
        point: Point,
        /// Movement since the previous drag event.
        movement: Vec2,
        /// Modifiers held.
        mod_keys: FlagSet<ModKey>,
    },
    /// A button was released.
    ButtonUp {
        /// Which button.
        button: MouseButton,
        /// Cursor position.
        point: Point,
        /// Modifiers held.
        mod_keys: FlagSet<ModKey>,
    },
    /// A button was pressed and released over the same window.
    Click {
        /// Which button.
        button: MouseButton,
        /// Cursor position.
        point: Point,
        /// Modifiers held.
        mod_keys: FlagSet<ModKey>,
    },
    /// A second click followed quickly.
    DoubleClick {
        /// Which button.
        button: MouseButton,
        /// Cursor position.
        point: Point,
        /// Modifiers held.
        mod_keys: FlagSet<ModKey>,
    },
    /// The cursor entered the window.
    MouseEnter {
        /// Cursor position.
        point: Point,
        /// Modifiers held.
        mod_keys: FlagSet<ModKey>,
    },
    /// The cursor is over the window.
    MouseHere {
        /// Cursor position.
        point: Point,
        /// Modifiers held.
        mod_keys: FlagSet<ModKey>,
    },
    /// The cursor left the window.
    MouseLeave,
    /// The wheel turned.
    MouseWheel {
        /// Cursor position.
        point: Point,
        /// Wheel clicks; positive is away from the user.
        delta: i32,
        /// Modifiers held.
        mod_keys: FlagSet<ModKey>,
    },
    /// Dragged windows entered the window.
    DragDropEnter {
        /// Cursor position.
        point: Point,
        /// Candidates being dragged.
        drops: Vec<DropAcceptance>,
        /// Modifiers held.
        mod_keys: FlagSet<ModKey>,
    },
    /// Dragged windows are over the window.
    DragDropHere {
        /// Cursor position.
        point: Point,
        /// Candidates being dragged.
        drops: Vec<DropAcceptance>,
        /// Modifiers held.
        mod_keys: FlagSet<ModKey>,
    },
    /// Asks which dragged windows would be accepted if dropped now.
    CheckDrops {
        /// Cursor position.
        point: Point,
        /// Candidates being dragged.
        drops: Vec<DropAcceptance>,
        /// Modifiers held.
        mod_keys: FlagSet<ModKey>,
    },
    /// Dragged windows left the window.
    DragDropLeave,
    /// Windows were dropped on the window.
    DragDroppedOn {
        /// Cursor position.
        point: Point,
        /// The accepted windows.
        windows: Vec<WindowId>,
        /// Modifiers held.
        mod_keys: FlagSet<ModKey>,
    },
    /// A key was pressed.
    KeyPress {
        /// The key.
        key: Key,
        /// Unicode code point, or 0.
        code_point: u32,
        /// Modifiers held.
        mod_keys: FlagSet<ModKey>,
    },
    /// A key was released.
    KeyRelease {
        /// The key.
        key: Key,
        /// Unicode code point, or 0.
        code_point: u32,
        /// Modifiers held.
        mod_keys: FlagSet<ModKey>,
    },
    /// Text was entered.
    TextInput(String),
    /// The window gained keyboard focus.
    GainingFocus,
    /// The window is losing keyboard focus.
    LosingFocus,
    /// A timer the window listens to fired.
    TimerFiring {
        /// Ticks at the time of firing.
        ticks: u32,
        /// The timer.
        timer: TimerId,
    },
}

impl WindowEvent {
    /// Cursor position, for events that carry one.
    pub fn point(&self) -> Option<Point> {
        match self {
            Self::ButtonDown { point, .. }
            | Self::Drag { point, .. }
            | Self::ButtonUp { point, .. }
            | Self::Click { point, .. }
            | Self::DoubleClick { point, .. }
            | Self::MouseEnter { point, .. }
            | Self::MouseHere { point, .. }
            | Self::MouseWheel { point, .. }
            | Self::DragDropEnter { point, .. }
            | Self::DragDropHere { point, .. }
            | Self::CheckDrops { point, .. }
            | Self::DragDroppedOn { point, .. } => Some(*point),
            _ => None,
        }
    }

    /// Modifier keys, for events that carry them.
    pub fn mod_keys(&self) -> FlagSet<ModKey> {
        match self {
            Self::ButtonDown { mod_keys, .. }
            | Self::Drag { mod_keys, .. }
            | Self::ButtonUp { mod_keys, .. }
            | Self::Click { mod_keys, .. }
            | Self::DoubleClick { mod_keys, .. }
            | Self::MouseEnter { mod_keys, .. }
            | Self::MouseHere { mod_keys, .. }
            | Self::MouseWheel { mod_keys, .. }
            | Self::DragDropEnter { mod_keys, .. }
            | Self::DragDropHere { mod_keys, .. }
            | Self::CheckDrops { mod_keys, .. }
            | Self::DragDroppedOn { mod_keys, .. }
            | Self::KeyPress { mod_keys, .. }
            | Self::KeyRelease { mod_keys, .. } => *mod_keys,
            _ => FlagSet::empty(),
        }
    }
}
