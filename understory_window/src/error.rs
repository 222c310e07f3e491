// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window tree errors.

use crate::types::WindowId;

/// Configuration errors returned by window tree operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WindowError {
    /// A layout could not be built or installed.
    #[error("bad layout: {0}")]
    BadLayout(&'static str),
    /// The window is not a layout.
    #[error("window {0:?} is not a layout")]
    NotALayout(WindowId),
    /// The window id no longer refers to a live window.
    #[error("window {0:?} is not alive")]
    StaleWindow(WindowId),
    /// The browse-info mode index is past the end of the window's modes.
    #[error("browse mode {mode} out of range ({len} modes)")]
    BrowseModeOutOfRange {
        /// Requested mode.
        mode: usize,
        /// Number of modes the window has.
        len: usize,
    },
}
