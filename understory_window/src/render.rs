// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pre-render bookkeeping and the render walk.

use crate::clip::{ClipBackend, ClipGuard};
use crate::tree::WindowTree;
use crate::types::{ChildClippingMode, WindowId, WindowState};

impl WindowTree {
    /// Clip `backend` the way `id` clips its children.
    ///
    /// `ClipToClient` and `ClipToClientAndWindowSeparately` scissor to the
    /// client area, `ClipToWindow` to the whole window. Calling this for a
    /// window that does not clip is a programmer error.
    pub fn begin_clipping<'b, B: ClipBackend + ?Sized>(
        &self,
        id: WindowId,
        backend: &'b mut B,
    ) -> ClipGuard<'b, B> {
        match self.child_clipping_mode(id) {
            ChildClippingMode::DontClip => {
                debug_assert!(false, "begin_clipping on a window that does not clip");
                ClipGuard::unclipped(backend)
            }
            ChildClippingMode::ClipToClient | ChildClippingMode::ClipToClientAndWindowSeparately => {
                ClipGuard::scissor(backend, self.client_rect(id))
            }
            ChildClippingMode::ClipToWindow => ClipGuard::scissor(backend, self.window_rect(id)),
        }
    }

    /// Clip `backend` to the window minus its client area, where non-client
    /// children draw.
    pub fn begin_nonclient_clipping<'b, B: ClipBackend + ?Sized>(
        &self,
        id: WindowId,
        backend: &'b mut B,
    ) -> ClipGuard<'b, B> {
        ClipGuard::stencil(backend, self.client_rect(id), self.window_rect(id))
    }

    /// Ask for `pre_render` to run before the next render.
    pub fn require_pre_render(&mut self, id: WindowId) {
        if let Some(n) = self.get_mut(id) {
            n.state.insert(WindowState::NEEDS_PRERENDER);
        }
    }

    /// Returns true if the window or its layout asked for `pre_render`.
    pub fn pre_render_required(&self, id: WindowId) -> bool {
        let own = |w| {
            self.get(w)
                .is_some_and(|n| n.state.contains(WindowState::NEEDS_PRERENDER))
        };
        own(id) || self.layout(id).is_some_and(own)
    }

    /// Run the window's `pre_render` hook and clear the request, then
    /// pre-render its layout if that asked too.
    pub fn pre_render(&mut self, id: WindowId) {
        self.with_behavior(id, |behavior, cx| behavior.pre_render(cx));
        if let Some(n) = self.get_mut(id) {
            n.state.remove(WindowState::NEEDS_PRERENDER);
        }
        if let Some(layout) = self.layout(id) {
            if self.pre_render_required(layout) {
                self.pre_render(layout);
            }
        }
    }

    /// Render `id` and its visible subtree, parents before children.
    ///
    /// Children render inside the window's clip region. In
    /// `ClipToClientAndWindowSeparately` mode, client children render first
    /// under the client clip, then non-client children under a stencil clip
    /// of the window minus its client area.
    pub fn render(&mut self, id: WindowId, backend: &mut dyn ClipBackend) {
        if !self.visible(id) {
            return;
        }
        if self.pre_render_required(id) {
            self.pre_render(id);
        }
        self.with_behavior(id, |behavior, cx| behavior.render(cx, backend));

        let mode = self.child_clipping_mode(id);
        let children = self.children(id).to_vec();
        let (client, non_client): (Vec<_>, Vec<_>) =
            if mode == ChildClippingMode::ClipToClientAndWindowSeparately {
                children.into_iter().partition(|c| !self.non_client_child(*c))
            } else {
                (children, Vec::new())
            };

        if mode == ChildClippingMode::DontClip {
            for child in client {
                self.render(child, backend);
            }
        } else {
            let mut clip = self.begin_clipping(id, &mut *backend);
            for child in client {
                self.render(child, &mut *clip);
            }
        }
        if !non_client.is_empty() {
            let mut clip = self.begin_nonclient_clipping(id, &mut *backend);
            for child in non_client {
                self.render(child, &mut *clip);
            }
        }
    }
}
