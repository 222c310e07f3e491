// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window geometry: queries, moves and resizes, and size constraints.
//!
//! Stale ids report empty geometry.

use kurbo::{Insets, Point, Rect, Size, Vec2};

use crate::tree::WindowTree;
use crate::types::{WindowId, WindowRegion};

/// Width and height taken by the insets.
fn chrome(insets: Insets) -> Size {
    Size::new(insets.x0 + insets.x1, insets.y0 + insets.y1)
}

impl WindowTree {
    /// Bounds relative to the parent's client area.
    pub fn relative_rect(&self, id: WindowId) -> Rect {
        self.get(id).map(|n| n.rect).unwrap_or(Rect::ZERO)
    }

    /// Upper-left corner relative to the parent's client area.
    pub fn relative_upper_left(&self, id: WindowId) -> Point {
        self.relative_rect(id).origin()
    }

    /// Lower-right corner relative to the parent's client area.
    pub fn relative_lower_right(&self, id: WindowId) -> Point {
        let r = self.relative_rect(id);
        Point::new(r.x1, r.y1)
    }

    /// Offset from screen coordinates to this window's parent-relative ones.
    fn parent_origin(&self, id: WindowId) -> Vec2 {
        self.parent(id)
            .map(|p| self.client_upper_left(p).to_vec2())
            .unwrap_or(Vec2::ZERO)
    }

    /// Bounds in screen coordinates.
    pub fn window_rect(&self, id: WindowId) -> Rect {
        self.relative_rect(id) + self.parent_origin(id)
    }

    /// Upper-left corner in screen coordinates.
    pub fn upper_left(&self, id: WindowId) -> Point {
        self.window_rect(id).origin()
    }

    /// Lower-right corner in screen coordinates.
    pub fn lower_right(&self, id: WindowId) -> Point {
        let r = self.window_rect(id);
        Point::new(r.x1, r.y1)
    }

    /// Left edge in screen coordinates.
    pub fn left(&self, id: WindowId) -> f64 {
        self.upper_left(id).x
    }

    /// Top edge in screen coordinates.
    pub fn top(&self, id: WindowId) -> f64 {
        self.upper_left(id).y
    }

    /// Right edge in screen coordinates.
    pub fn right(&self, id: WindowId) -> f64 {
        self.lower_right(id).x
    }

    /// Bottom edge in screen coordinates.
    pub fn bottom(&self, id: WindowId) -> f64 {
        self.lower_right(id).y
    }

    /// Window size.
    pub fn size(&self, id: WindowId) -> Size {
        self.relative_rect(id).size()
    }

    /// Window width.
    pub fn width(&self, id: WindowId) -> f64 {
        self.size(id).width
    }

    /// Window height.
    pub fn height(&self, id: WindowId) -> f64 {
        self.size(id).height
    }

    /// Chrome between the window edge and the client area.
    pub fn client_insets(&self, id: WindowId) -> Insets {
        self.get(id).map(|n| n.client_insets).unwrap_or(Insets::ZERO)
    }

    /// Change the chrome. Children keep their client-relative positions.
    pub fn set_client_insets(&mut self, id: WindowId, insets: Insets) {
        let Some(n) = self.get_mut(id) else {
            return;
        };
        n.client_insets = insets;
        if let Some(layout) = self.layout(id) {
            let client = self.client_size(id);
            self.size_move(layout, Point::ZERO, client.to_vec2().to_point());
        }
    }

    /// Client area in screen coordinates.
    pub fn client_rect(&self, id: WindowId) -> Rect {
        let r = self.window_rect(id);
        let i = self.client_insets(id);
        Rect::new(r.x0 + i.x0, r.y0 + i.y0, r.x1 - i.x1, r.y1 - i.y1)
    }

    /// Upper-left corner of the client area in screen coordinates.
    pub fn client_upper_left(&self, id: WindowId) -> Point {
        self.client_rect(id).origin()
    }

    /// Lower-right corner of the client area in screen coordinates.
    pub fn client_lower_right(&self, id: WindowId) -> Point {
        let r = self.client_rect(id);
        Point::new(r.x1, r.y1)
    }

    /// Client area size.
    pub fn client_size(&self, id: WindowId) -> Size {
        self.client_rect(id).size()
    }

    /// Client area width.
    pub fn client_width(&self, id: WindowId) -> f64 {
        self.client_size(id).width
    }

    /// Client area height.
    pub fn client_height(&self, id: WindowId) -> f64 {
        self.client_size(id).height
    }

    /// `pt` relative to the window's upper-left corner.
    pub fn screen_to_window(&self, id: WindowId, pt: Point) -> Point {
        (pt - self.upper_left(id)).to_point()
    }

    /// `pt` relative to the client area's upper-left corner.
    pub fn screen_to_client(&self, id: WindowId, pt: Point) -> Point {
        (pt - self.client_upper_left(id)).to_point()
    }

    /// Returns true if the screen point is inside the window.
    pub fn in_window(&self, id: WindowId, pt: Point) -> bool {
        let r = self.window_rect(id);
        r.x0 <= pt.x && r.y0 <= pt.y && pt.x < r.x1 && pt.y < r.y1
    }

    /// Returns true if the screen point is inside the client area.
    pub fn in_client(&self, id: WindowId, pt: Point) -> bool {
        let r = self.client_rect(id);
        r.x0 <= pt.x && r.y0 <= pt.y && pt.x < r.x1 && pt.y < r.y1
    }

    /// The resize region under the screen point, or `None` if the window is
    /// not resizable.
    pub fn window_region(&self, id: WindowId, pt: Point) -> Option<WindowRegion> {
        if !self.resizable(id) {
            return None;
        }
        let client = self.client_rect(id);
        let column = if pt.x < client.x0 {
            0
        } else if pt.x > client.x1 {
            2
        } else {
            1
        };
        let row = if pt.y < client.y0 {
            0
        } else if pt.y > client.y1 {
            2
        } else {
            1
        };
        Some(match (row, column) {
            (0, 0) => WindowRegion::TopLeft,
            (0, 1) => WindowRegion::Top,
            (0, _) => WindowRegion::TopRight,
            (1, 0) => WindowRegion::MidLeft,
            (1, 1) => WindowRegion::Middle,
            (1, _) => WindowRegion::MidRight,
            (_, 0) => WindowRegion::BottomLeft,
            (_, 1) => WindowRegion::Bottom,
            _ => WindowRegion::BottomRight,
        })
    }

    /// Minimum size.
    pub fn min_size(&self, id: WindowId) -> Size {
        self.get(id).map(|n| n.min_size).unwrap_or(Size::ZERO)
    }

    /// Maximum size.
    pub fn max_size(&self, id: WindowId) -> Size {
        self.get(id).map(|n| n.max_size).unwrap_or(Size::ZERO)
    }

    /// The smallest size the window's content can use: its layout's minimum,
    /// or the current size if it has no layout.
    pub fn min_usable_size(&self, id: WindowId) -> Size {
        if self.is_layout(id) {
            return self.min_size(id);
        }
        match self.layout(id) {
            Some(layout) => self.min_usable_size(layout),
            None => self.size(id),
        }
    }

    /// The minimum size resizes are clamped to: the window's own minimum,
    /// grown to fit its layout's minimum plus chrome.
    pub(crate) fn effective_min_size(&self, id: WindowId) -> Size {
        let own = self.min_size(id);
        match self.layout(id) {
            Some(layout) => {
                let needed = self.min_size(layout) + chrome(self.client_insets(id));
                Size::new(own.width.max(needed.width), own.height.max(needed.height))
            }
            None => own,
        }
    }

    /// Clamp a requested parent-relative rectangle to the size constraints.
    ///
    /// When a side must move, the side that was already moving gives way, so
    /// dragging the left edge stops at the minimum instead of shifting the
    /// window.
    fn clamp_rect(&self, id: WindowId, mut ul: Point, mut lr: Point) -> (Point, Point) {
        let current = self.relative_rect(id);
        let min = self.effective_min_size(id);
        let max = self.max_size(id);

        if lr.x - ul.x < min.width {
            if ul.x != current.x0 {
                ul.x = lr.x - min.width;
            } else {
                lr.x = ul.x + min.width;
            }
        } else if max.width < lr.x - ul.x {
            if lr.x != current.x1 {
                lr.x = ul.x + max.width;
            } else {
                ul.x = lr.x - max.width;
            }
        }
        if lr.y - ul.y < min.height {
            if ul.y != current.y0 {
                ul.y = lr.y - min.height;
            } else {
                lr.y = ul.y + min.height;
            }
        } else if max.height < lr.y - ul.y {
            if lr.y != current.y1 {
                lr.y = ul.y + max.height;
            } else {
                ul.y = lr.y - max.height;
            }
        }
        (ul, lr)
    }

    /// Move and resize to the parent-relative corners `ul` and `lr`.
    ///
    /// A size change is clamped to the size constraints. If the size actually
    /// changed, the owned layout is resized to the new client area and the
    /// containing layout is told to re-solve.
    pub fn size_move(&mut self, id: WindowId, ul: Point, lr: Point) {
        let Some(n) = self.get(id) else {
            return;
        };
        let original = n.rect.size();
        let resized = original != Size::new(lr.x - ul.x, lr.y - ul.y);
        let (ul, lr) = if resized {
            self.clamp_rect(id, ul, lr)
        } else {
            (ul, lr)
        };
        if let Some(n) = self.get_mut(id) {
            n.rect = Rect::new(ul.x, ul.y, lr.x, lr.y);
        }
        if !resized || self.size(id) == original {
            return;
        }
        if let Some(layout) = self.layout(id) {
            let client = self.client_size(id);
            self.resize(layout, client);
        }
        if self.is_layout(id) {
            self.relayout(id);
        } else if let Some(containing) = self.containing_layout(id) {
            self.child_size_or_min_size_changed(containing);
        }
    }

    /// Move the upper-left corner to the parent-relative `pt`, keeping the size.
    pub fn move_to(&mut self, id: WindowId, pt: Point) {
        let size = self.size(id);
        self.size_move(id, pt, pt + size.to_vec2());
    }

    /// Move by `delta`.
    pub fn offset_move(&mut self, id: WindowId, delta: Vec2) {
        let r = self.relative_rect(id);
        self.size_move(
            id,
            r.origin() + delta,
            Point::new(r.x1, r.y1) + delta,
        );
    }

    /// Resize, keeping the upper-left corner.
    pub fn resize(&mut self, id: WindowId, size: Size) {
        let ul = self.relative_upper_left(id);
        self.size_move(id, ul, ul + size.to_vec2());
    }

    /// Set the minimum size, growing the window if it is smaller.
    ///
    /// If only the minimum changed, the containing layout re-solves.
    pub fn set_min_size(&mut self, id: WindowId, size: Size) {
        let Some(n) = self.get_mut(id) else {
            return;
        };
        let changed = n.min_size != size;
        n.min_size = size;
        let current = n.rect.size();
        if current.width < size.width || current.height < size.height {
            self.resize(
                id,
                Size::new(
                    current.width.max(size.width),
                    current.height.max(size.height),
                ),
            );
        } else if changed && !self.is_layout(id) {
            if let Some(containing) = self.containing_layout(id) {
                self.child_size_or_min_size_changed(containing);
            }
        }
    }

    /// Set the maximum size, shrinking the window if it is larger.
    pub fn set_max_size(&mut self, id: WindowId, size: Size) {
        let Some(n) = self.get_mut(id) else {
            return;
        };
        n.max_size = size;
        let current = n.rect.size();
        if size.width < current.width || size.height < current.height {
            self.resize(
                id,
                Size::new(
                    current.width.min(size.width),
                    current.height.min(size.height),
                ),
            );
        }
    }
}
