// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped clipping against the rendering backend.

use core::fmt;
use core::ops::{Deref, DerefMut};

use kurbo::Rect;

/// Clipping primitives of the rendering backend.
///
/// Begin and end calls must nest; [`ClipGuard`] pairs them.
pub trait ClipBackend {
    /// Restrict drawing to `rect`.
    fn begin_scissor_clipping(&mut self, rect: Rect);
    /// Undo the innermost scissor clip.
    fn end_scissor_clipping(&mut self);
    /// Restrict drawing to `outer` minus `inner`.
    fn begin_stencil_clipping(&mut self, inner: Rect, outer: Rect);
    /// Undo the innermost stencil clip.
    fn end_stencil_clipping(&mut self);
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum ClipKind {
    None,
    Scissor,
    Stencil,
}

/// An active clip region; ends it when dropped.
///
/// The guard dereferences to the backend so children can keep drawing
/// through it. Dropping happens on every exit path, including a panic
/// while children render.
pub struct ClipGuard<'a, B: ClipBackend + ?Sized> {
    backend: &'a mut B,
    kind: ClipKind,
}

impl<B: ClipBackend + ?Sized> fmt::Debug for ClipGuard<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClipGuard")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl<'a, B: ClipBackend + ?Sized> ClipGuard<'a, B> {
    /// Begin a scissor clip to `rect`.
    pub fn scissor(backend: &'a mut B, rect: Rect) -> Self {
        backend.begin_scissor_clipping(rect);
        Self {
            backend,
            kind: ClipKind::Scissor,
        }
    }

    /// Begin a stencil clip to `outer` minus `inner`.
    pub fn stencil(backend: &'a mut B, inner: Rect, outer: Rect) -> Self {
        backend.begin_stencil_clipping(inner, outer);
        Self {
            backend,
            kind: ClipKind::Stencil,
        }
    }

    /// A guard that clips nothing.
    pub(crate) fn unclipped(backend: &'a mut B) -> Self {
        Self {
            backend,
            kind: ClipKind::None,
        }
    }
}

impl<B: ClipBackend + ?Sized> Deref for ClipGuard<'_, B> {
    type Target = B;

    fn deref(&self) -> &B {
        self.backend
    }
}

impl<B: ClipBackend + ?Sized> DerefMut for ClipGuard<'_, B> {
    fn deref_mut(&mut self) -> &mut B {
        self.backend
    }
}

impl<B: ClipBackend + ?Sized> Drop for ClipGuard<'_, B> {
    fn drop(&mut self) {
        match self.kind {
            ClipKind::None => {}
            ClipKind::Scissor => self.backend.end_scissor_clipping(),
            ClipKind::Stencil => self.backend.end_stencil_clipping(),
        }
    }
}
