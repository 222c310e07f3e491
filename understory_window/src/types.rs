// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the window tree: identifiers, state bits, and descriptors.

use kurbo::{Insets, Rect, Size};
use understory_flags::{FlagSet, IntoFlagSet};

use crate::flags::WindowFlag;

/// Identifier for a window in a [`WindowTree`](crate::WindowTree).
///
/// A small, copyable handle consisting of a slot index and a generation counter.
/// Every relation between windows (parent, children, layout, event filters) is
/// stored as a `WindowId`, so a handle never keeps a window alive by itself.
///
/// - On create, a fresh slot is allocated with generation `1`.
/// - On destroy, the slot is freed; any existing `WindowId` for it is now stale.
/// - On reuse of a freed slot, its generation is incremented.
///
/// Stale ids never alias a different live window because the generation must
/// match. Use [`WindowTree::is_alive`](crate::WindowTree::is_alive) to check.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub(crate) u32, pub(crate) u32);

impl WindowId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Internal per-window state.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub(crate) struct WindowState: u8 {
        /// Window is shown.
        const VISIBLE          = 0b0000_0001;
        /// `pre_render` must run before the next render.
        const NEEDS_PRERENDER  = 0b0000_0010;
        /// Child is positioned outside the parent's client area.
        const NON_CLIENT_CHILD = 0b0000_0100;
        /// A modal run on this window has been ended.
        const MODAL_DONE       = 0b0000_1000;
    }
}

impl Default for WindowState {
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// How a window clips its children while they render.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ChildClippingMode {
    /// No clipping.
    #[default]
    DontClip,
    /// Clip children to the client area.
    ClipToClient,
    /// Clip children to the whole window.
    ClipToWindow,
    /// Clip client children to the client area and non-client children to
    /// the area between the client area and the window edge.
    ClipToClientAndWindowSeparately,
}

/// The resize region of a window under a point.
///
/// ```text
/// TopLeft    Top     TopRight
/// MidLeft    Middle  MidRight
/// BottomLeft Bottom  BottomRight
/// ```
///
/// `Middle` is the client area.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[allow(missing_docs, reason = "names are the layout above")]
pub enum WindowRegion {
    TopLeft,
    Top,
    TopRight,
    MidLeft,
    Middle,
    MidRight,
    BottomLeft,
    Bottom,
    BottomRight,
}

/// How a window that may be part of a drag-and-drop should be drawn.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DragDropRenderingState {
    /// Not being dragged.
    NotDragged,
    /// Dragged but not movable, so drawn in place as a copy.
    InPlaceCopy,
    /// Dragged over a target that accepts it.
    DraggedOverAcceptingDropTarget,
    /// Dragged over a target that does not accept it.
    DraggedOverUnacceptingDropTarget,
}

/// One hover ("browse info") mode of a window.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BrowseInfoMode {
    /// Hover delay in milliseconds before this mode activates.
    pub time: u32,
    /// Window that displays the browse info, if any.
    pub window: Option<WindowId>,
    /// Text shown by the browse-info window.
    pub text: String,
}

/// Placement of a window inside a layout grid.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct LayoutCell {
    /// First row.
    pub row: usize,
    /// First column.
    pub column: usize,
    /// Number of rows spanned; at least 1.
    pub row_span: usize,
    /// Number of columns spanned; at least 1.
    pub column_span: usize,
}

impl LayoutCell {
    /// A single cell at `row`, `column`.
    pub const fn single(row: usize, column: usize) -> Self {
        Self {
            row,
            column,
            row_span: 1,
            column_span: 1,
        }
    }
}

/// Parameters for creating a window.
#[derive(Clone, Debug)]
pub struct WindowDesc {
    /// Bounds relative to the parent's client area.
    pub rect: Rect,
    /// Capability flags. `MODAL` clears `ONTOP`.
    pub flags: FlagSet<WindowFlag>,
    /// Debugging name.
    pub name: String,
    /// Minimum size.
    pub min_size: Size,
    /// Maximum size; `None` uses the tree's configured default.
    pub max_size: Option<Size>,
    /// Chrome between the window edge and its client area.
    pub client_insets: Insets,
    /// How children are clipped.
    pub clipping: ChildClippingMode,
}

impl Default for WindowDesc {
    fn default() -> Self {
        Self {
            rect: Rect::ZERO,
            flags: FlagSet::empty(),
            name: String::new(),
            min_size: Size::ZERO,
            max_size: None,
            client_insets: Insets::ZERO,
            clipping: ChildClippingMode::DontClip,
        }
    }
}

impl WindowDesc {
    /// A window covering `rect` with default settings.
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            ..Default::default()
        }
    }

    /// Set the capability flags.
    #[must_use]
    pub fn with_flags(mut self, flags: impl IntoFlagSet<WindowFlag>) -> Self {
        self.flags = flags.into_flag_set();
        self
    }

    /// Set the debugging name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the client-area insets.
    #[must_use]
    pub fn with_client_insets(mut self, insets: Insets) -> Self {
        self.client_insets = insets;
        self
    }
}
