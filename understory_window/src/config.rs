// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree-wide defaults.

use kurbo::Size;

use crate::types::WindowId;

/// Defaults shared by every window in a [`WindowTree`](crate::WindowTree).
///
/// Changes apply to windows created afterwards; existing windows keep the
/// values they were created with.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeConfig {
    /// Hover delay, in milliseconds, of the first browse mode of new windows.
    pub default_browse_time: u32,
    /// Browse-info window of the first browse mode of new windows.
    pub default_browse_info_window: Option<WindowId>,
    /// Margin between a generated layout's edge and its cells.
    pub layout_border_margin: f64,
    /// Margin between adjacent cells of a generated layout.
    pub layout_cell_margin: f64,
    /// Maximum size of windows created without one.
    pub default_max_size: Size,
}

impl TreeConfig {
    /// Default hover delay.
    pub const DEFAULT_BROWSE_TIME: u32 = 1500;
    /// Default border margin of generated layouts.
    pub const DEFAULT_LAYOUT_BORDER_MARGIN: f64 = 0.0;
    /// Default cell margin of generated layouts.
    pub const DEFAULT_LAYOUT_CELL_MARGIN: f64 = 5.0;
    /// Default maximum window extent along either axis (2^30).
    pub const DEFAULT_MAX_EXTENT: f64 = 1_073_741_824.0;
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            default_browse_time: Self::DEFAULT_BROWSE_TIME,
            default_browse_info_window: None,
            layout_border_margin: Self::DEFAULT_LAYOUT_BORDER_MARGIN,
            layout_cell_margin: Self::DEFAULT_LAYOUT_CELL_MARGIN,
            default_max_size: Size::new(Self::DEFAULT_MAX_EXTENT, Self::DEFAULT_MAX_EXTENT),
        }
    }
}
