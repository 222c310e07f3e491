// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout windows and the row, column, and grid-inference solvers.
//!
//! A layout is an ordinary window that owns a grid. Each child of the layout
//! occupies a rectangular block of cells; the layout sizes its columns and
//! rows from the children's minimum sizes, shares any extra space equally,
//! and moves every child to fill its block.
//!
//! A window with a layout keeps it as a child and resizes it to the client
//! area whenever the window's size changes. Minimum sizes flow the other way:
//! a layout's minimum, plus chrome, is a floor for its owner's size.

use std::collections::{BTreeMap, BTreeSet};

use kurbo::{Point, Rect, Size};

use crate::error::WindowError;
use crate::tree::{Node, WindowTree};
use crate::types::{LayoutCell, WindowDesc, WindowId};

/// Grid state of a layout window.
#[derive(Clone, Debug)]
pub(crate) struct LayoutGrid {
    rows: usize,
    columns: usize,
    border_margin: f64,
    cell_margin: f64,
    entries: Vec<(WindowId, LayoutCell)>,
    /// Set while children are being moved, so their resize notifications
    /// do not re-enter the solver.
    in_layout: bool,
}

impl LayoutGrid {
    fn new(rows: usize, columns: usize, border_margin: f64, cell_margin: f64) -> Self {
        Self {
            rows,
            columns,
            border_margin,
            cell_margin,
            entries: Vec::new(),
            in_layout: false,
        }
    }

    pub(crate) fn remove_entry(&mut self, window: WindowId) {
        self.entries.retain(|(w, _)| *w != window);
    }

    pub(crate) fn clear_entries(&mut self) {
        self.entries.clear();
    }

    fn cell(&self, window: WindowId) -> Option<LayoutCell> {
        self.entries
            .iter()
            .find(|(w, _)| *w == window)
            .map(|(_, c)| *c)
    }
}

/// Sizes along one axis.
#[derive(Clone, Debug, PartialEq)]
struct AxisSolution {
    /// Start of each track, relative to the layout.
    starts: Vec<f64>,
    /// Extent of each track.
    extents: Vec<f64>,
    /// Smallest total extent that fits every minimum.
    min_total: f64,
}

impl AxisSolution {
    /// Start and extent of the block `[first, first + span)`.
    fn block(&self, first: usize, span: usize) -> (f64, f64) {
        let last = first + span - 1;
        let start = self.starts[first];
        (start, self.starts[last] + self.extents[last] - start)
    }
}

/// Solve one axis: `items` are `(first track, span, minimum extent)`.
fn solve_axis(
    tracks: usize,
    border_margin: f64,
    cell_margin: f64,
    available: f64,
    items: &[(usize, usize, f64)],
) -> AxisSolution {
    let mut mins = vec![0.0_f64; tracks];
    for &(first, _, min) in items.iter().filter(|(_, span, _)| *span == 1) {
        mins[first] = mins[first].max(min);
    }
    for &(first, span, min) in items.iter().filter(|(_, span, _)| *span > 1) {
        let range = first..first + span;
        #[allow(
            clippy::cast_precision_loss,
            reason = "track counts are small"
        )]
        let margins = (span - 1) as f64 * cell_margin;
        let have: f64 = mins[range.clone()].iter().sum::<f64>() + margins;
        if have < min {
            #[allow(
                clippy::cast_precision_loss,
                reason = "track counts are small"
            )]
            let share = (min - have) / span as f64;
            for m in &mut mins[range] {
                *m += share;
            }
        }
    }

    #[allow(clippy::cast_precision_loss, reason = "track counts are small")]
    let gaps = tracks.saturating_sub(1) as f64 * cell_margin;
    let min_total = 2.0 * border_margin + gaps + mins.iter().sum::<f64>();
    #[allow(clippy::cast_precision_loss, reason = "track counts are small")]
    let extra = if tracks == 0 {
        0.0
    } else {
        (available - min_total).max(0.0) / tracks as f64
    };

    let mut starts = Vec::with_capacity(tracks);
    let mut extents = Vec::with_capacity(tracks);
    let mut pos = border_margin;
    for min in mins {
        starts.push(pos);
        extents.push(min + extra);
        pos += min + extra + cell_margin;
    }
    AxisSolution {
        starts,
        extents,
        min_total,
    }
}

/// A child rectangle on whole pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct PixelRect {
    left: i64,
    top: i64,
    right: i64,
    bottom: i64,
}

impl PixelRect {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "window coordinates are far inside the i64 range"
    )]
    fn from_rect(r: Rect) -> Self {
        Self {
            left: r.x0.round() as i64,
            top: r.y0.round() as i64,
            right: r.x1.round() as i64,
            bottom: r.y1.round() as i64,
        }
    }

    /// Half-open containment.
    fn contains(&self, x: i64, y: i64) -> bool {
        self.left <= x && x < self.right && self.top <= y && y < self.bottom
    }

    /// Returns true if the rectangles share area or either one's upper-left
    /// corner lies inside the other.
    fn overlaps(&self, other: &Self) -> bool {
        let shared = self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom;
        shared || other.contains(self.left, self.top) || self.contains(other.left, other.top)
    }
}

fn count_up(map: &mut BTreeMap<i64, usize>, key: i64) {
    *map.entry(key).or_insert(0) += 1;
}

fn count_down(map: &mut BTreeMap<i64, usize>, key: i64) {
    if let Some(n) = map.get_mut(&key) {
        *n -= 1;
        if *n == 0 {
            map.remove(&key);
        }
    }
}

/// Snap leading edges (lefts or tops) toward zero.
///
/// Scanning outward from just before the edge, the first position that is
/// either one before a trailing edge (stop) or an existing leading edge
/// (adopt it) wins; on the same position, stopping wins. Edges are processed
/// from nearest to zero outward, so each sees the already-snapped edges
/// before it.
fn snap_leading(leading: &mut [i64], trailing: &[i64]) {
    let trailing: BTreeSet<i64> = trailing.iter().copied().collect();
    let mut counts = BTreeMap::new();
    for &edge in leading.iter() {
        count_up(&mut counts, edge);
    }
    let mut order: Vec<usize> = (0..leading.len()).collect();
    order.sort_by_key(|&i| leading[i]);
    for i in order {
        let edge = leading[i];
        if edge <= 0 {
            continue;
        }
        let stop = trailing.range(1..=edge).next_back().map(|r| r - 1);
        let adopt = counts.range(0..edge).next_back().map(|(l, _)| *l);
        if let Some(target) = adopt {
            if stop.is_none_or(|s| target > s) {
                count_down(&mut counts, edge);
                count_up(&mut counts, target);
                leading[i] = target;
            }
        }
    }
}

/// Snap trailing edges (rights or bottoms) toward `extent`, the mirror of
/// [`snap_leading`]. Positions at or past `extent` are never reached.
fn snap_trailing(trailing: &mut [i64], leading: &[i64], extent: i64) {
    let leading: BTreeSet<i64> = leading.iter().copied().collect();
    let mut counts = BTreeMap::new();
    for &edge in trailing.iter() {
        count_up(&mut counts, edge);
    }
    let mut order: Vec<usize> = (0..trailing.len()).collect();
    order.sort_by_key(|&i| core::cmp::Reverse(trailing[i]));
    for i in order {
        let edge = trailing[i];
        if edge + 1 > extent - 1 {
            continue;
        }
        let stop = leading.range(edge..=extent - 2).next().map(|l| l + 1);
        let adopt = counts.range(edge + 1..extent).next().map(|(r, _)| *r);
        if let Some(target) = adopt {
            if stop.is_none_or(|s| target < s) {
                count_down(&mut counts, edge);
                count_up(&mut counts, target);
                trailing[i] = target;
            }
        }
    }
}

/// Grid inferred from child rectangles.
#[derive(Clone, Debug, PartialEq, Eq)]
struct InferredGrid {
    rows: usize,
    columns: usize,
    cells: Vec<LayoutCell>,
}

/// Infer a grid from non-overlapping rectangles inside a client area of
/// `extent` pixels. Returns `None` when there are no rectangles.
fn infer_grid(rects: &[PixelRect], extent: (i64, i64)) -> Option<InferredGrid> {
    if rects.is_empty() {
        return None;
    }
    let mut lefts: Vec<i64> = rects.iter().map(|r| r.left).collect();
    let mut rights: Vec<i64> = rects.iter().map(|r| r.right).collect();
    let mut tops: Vec<i64> = rects.iter().map(|r| r.top).collect();
    let mut bottoms: Vec<i64> = rects.iter().map(|r| r.bottom).collect();

    snap_leading(&mut lefts, &rights);
    snap_trailing(&mut rights, &lefts, extent.0);
    snap_leading(&mut tops, &bottoms);
    snap_trailing(&mut bottoms, &tops, extent.1);

    let unique_lefts: BTreeSet<i64> = lefts.iter().copied().collect();
    let unique_tops: BTreeSet<i64> = tops.iter().copied().collect();
    let cells = (0..rects.len())
        .map(|i| {
            let column = unique_lefts.range(..lefts[i]).count();
            let row = unique_tops.range(..tops[i]).count();
            let right = unique_lefts.range(..rights[i]).count();
            let bottom = unique_tops.range(..bottoms[i]).count();
            LayoutCell {
                row,
                column,
                row_span: bottom.saturating_sub(row).max(1),
                column_span: right.saturating_sub(column).max(1),
            }
        })
        .collect();
    Some(InferredGrid {
        rows: unique_tops.len(),
        columns: unique_lefts.len(),
        cells,
    })
}

impl WindowTree {
    fn ensure_alive(&self, id: WindowId) -> Result<(), WindowError> {
        if self.is_alive(id) {
            Ok(())
        } else {
            Err(WindowError::StaleWindow(id))
        }
    }

    fn ensure_layout(&self, id: WindowId) -> Result<(), WindowError> {
        self.ensure_alive(id)?;
        if self.is_layout(id) {
            Ok(())
        } else {
            Err(WindowError::NotALayout(id))
        }
    }

    /// Returns true if `id` is a layout window.
    pub fn is_layout(&self, id: WindowId) -> bool {
        self.get(id).is_some_and(|n| n.grid.is_some())
    }

    /// Create a detached layout window with an empty `rows` by `columns` grid.
    pub fn create_layout(
        &mut self,
        rect: Rect,
        rows: usize,
        columns: usize,
        border_margin: f64,
        cell_margin: f64,
    ) -> WindowId {
        let mut node = Node::new(
            0,
            WindowDesc::new(rect).with_name("layout"),
            &self.config,
        );
        node.grid = Some(LayoutGrid::new(rows, columns, border_margin, cell_margin));
        self.insert_node(node)
    }

    /// Number of rows of a layout.
    pub fn layout_rows(&self, layout: WindowId) -> Option<usize> {
        self.get(layout)?.grid.as_ref().map(|g| g.rows)
    }

    /// Number of columns of a layout.
    pub fn layout_columns(&self, layout: WindowId) -> Option<usize> {
        self.get(layout)?.grid.as_ref().map(|g| g.columns)
    }

    /// Cells occupied by `window` in `layout`.
    pub fn layout_cell(&self, layout: WindowId, window: WindowId) -> Option<LayoutCell> {
        self.get(layout)?.grid.as_ref()?.cell(window)
    }

    /// Place `window` in `layout` at `cell`, growing the grid if needed.
    ///
    /// The window becomes a child of the layout. Spans below 1 count as 1.
    pub fn layout_add(
        &mut self,
        layout: WindowId,
        window: WindowId,
        cell: LayoutCell,
    ) -> Result<(), WindowError> {
        self.ensure_layout(layout)?;
        self.ensure_alive(window)?;
        if window == layout || self.is_ancestor_of(window, layout) {
            return Err(WindowError::BadLayout(
                "a layout cannot contain itself or an ancestor",
            ));
        }
        let cell = LayoutCell {
            row_span: cell.row_span.max(1),
            column_span: cell.column_span.max(1),
            ..cell
        };
        let (Some(row_end), Some(column_end)) = (
            cell.row.checked_add(cell.row_span),
            cell.column.checked_add(cell.column_span),
        ) else {
            return Err(WindowError::BadLayout("cell out of range"));
        };
        self.attach_child(layout, window);
        if let Some(grid) = self.get_mut(layout).and_then(|n| n.grid.as_mut()) {
            grid.remove_entry(window);
            grid.rows = grid.rows.max(row_end);
            grid.columns = grid.columns.max(column_end);
            grid.entries.push((window, cell));
        }
        self.relayout(layout);
        Ok(())
    }

    /// Take `window` out of `layout`, detaching it.
    ///
    /// Returns false if it was not in the layout.
    pub fn layout_remove(&mut self, layout: WindowId, window: WindowId) -> Result<bool, WindowError> {
        self.ensure_layout(layout)?;
        if self.parent(window) != Some(layout) {
            return Ok(false);
        }
        self.detach_child(layout, window);
        self.relayout(layout);
        Ok(true)
    }

    /// Re-solve `layout` after a child's size or minimum size changed.
    ///
    /// If the layout's own minimum changed as a result, the change is passed
    /// on to the layout containing the layout's owner.
    pub fn child_size_or_min_size_changed(&mut self, layout: WindowId) {
        let Some(grid) = self.get(layout).and_then(|n| n.grid.as_ref()) else {
            return;
        };
        if grid.in_layout {
            return;
        }
        let before = self.min_size(layout);
        self.relayout(layout);
        if self.min_size(layout) == before {
            return;
        }
        let Some(owner) = self.parent(layout) else {
            return;
        };
        if self.layout(owner) != Some(layout) {
            return;
        }
        if let Some(containing) = self.containing_layout(owner) {
            self.child_size_or_min_size_changed(containing);
        }
    }

    /// Solve the layout's grid for its current size and move every child.
    pub(crate) fn relayout(&mut self, layout: WindowId) {
        let Some(node) = self.get(layout) else {
            return;
        };
        let Some(grid) = node.grid.as_ref() else {
            return;
        };
        if grid.in_layout {
            return;
        }
        let size = node.rect.size();
        let grid = grid.clone();
        let mins: Vec<Size> = grid
            .entries
            .iter()
            .map(|(w, _)| self.effective_min_size(*w))
            .collect();
        let column_items: Vec<_> = grid
            .entries
            .iter()
            .zip(&mins)
            .map(|((_, c), m)| (c.column, c.column_span, m.width))
            .collect();
        let row_items: Vec<_> = grid
            .entries
            .iter()
            .zip(&mins)
            .map(|((_, c), m)| (c.row, c.row_span, m.height))
            .collect();
        let columns = solve_axis(
            grid.columns,
            grid.border_margin,
            grid.cell_margin,
            size.width,
            &column_items,
        );
        let rows = solve_axis(
            grid.rows,
            grid.border_margin,
            grid.cell_margin,
            size.height,
            &row_items,
        );

        if let Some(n) = self.get_mut(layout) {
            n.min_size = Size::new(columns.min_total, rows.min_total);
            if let Some(g) = n.grid.as_mut() {
                g.in_layout = true;
            }
        }
        for (window, cell) in &grid.entries {
            let (x, w) = columns.block(cell.column, cell.column_span);
            let (y, h) = rows.block(cell.row, cell.row_span);
            self.size_move(*window, Point::new(x, y), Point::new(x + w, y + h));
        }
        if let Some(g) = self.get_mut(layout).and_then(|n| n.grid.as_mut()) {
            g.in_layout = false;
        }
    }

    /// Children that lie entirely inside the client area, in child order.
    fn children_in_client(&self, id: WindowId) -> Vec<WindowId> {
        let client = self.client_size(id);
        self.children(id)
            .iter()
            .copied()
            .filter(|c| {
                let r = self.relative_rect(*c);
                r.x0 >= 0.0 && r.y0 >= 0.0 && r.x1 <= client.width && r.y1 <= client.height
            })
            .collect()
    }

    fn install_generated_layout(&mut self, id: WindowId, rows: usize, columns: usize) -> WindowId {
        let client = self.client_size(id);
        let border = self.config.layout_border_margin;
        let cell = self.config.layout_cell_margin;
        let layout = self.create_layout(
            Rect::from_origin_size(Point::ZERO, client),
            rows,
            columns,
            border,
            cell,
        );
        if let Some(n) = self.get_mut(id) {
            n.layout = Some(layout);
        }
        self.attach_child(id, layout);
        layout
    }

    /// Lay out the children inside the client area in one row, ordered by
    /// their left edges.
    ///
    /// Any existing layout is removed first. Children not entirely inside
    /// the client area stay unmanaged.
    pub fn horizontal_layout(&mut self, id: WindowId) -> Result<(), WindowError> {
        self.linear_layout(id, true)
    }

    /// Lay out the children inside the client area in one column, ordered
    /// by their top edges.
    pub fn vertical_layout(&mut self, id: WindowId) -> Result<(), WindowError> {
        self.linear_layout(id, false)
    }

    fn linear_layout(&mut self, id: WindowId, horizontal: bool) -> Result<(), WindowError> {
        self.ensure_alive(id)?;
        self.remove_layout(id);
        let mut windows = self.children_in_client(id);
        // Stable, so equal edges keep child order.
        if horizontal {
            windows.sort_by(|a, b| self.left(*a).total_cmp(&self.left(*b)));
        } else {
            windows.sort_by(|a, b| self.top(*a).total_cmp(&self.top(*b)));
        }
        let (rows, columns) = if horizontal {
            (1, windows.len())
        } else {
            (windows.len(), 1)
        };
        let layout = self.install_generated_layout(id, rows, columns);
        for (i, window) in windows.into_iter().enumerate() {
            let cell = if horizontal {
                LayoutCell::single(0, i)
            } else {
                LayoutCell::single(i, 0)
            };
            self.layout_add(layout, window, cell)?;
        }
        tracing::debug!(window = ?id, layout = ?layout, rows, columns, "created linear layout");
        Ok(())
    }

    /// Infer a grid from the positions of the children inside the client
    /// area and install it as a layout.
    ///
    /// Edges are snapped outward to edges of other children, so children
    /// whose sides roughly line up share rows and columns. Does nothing if no
    /// child is inside the client area.
    ///
    /// # Errors
    ///
    /// [`WindowError::BadLayout`] if two of those children overlap.
    pub fn grid_layout(&mut self, id: WindowId) -> Result<(), WindowError> {
        self.ensure_alive(id)?;
        self.remove_layout(id);
        let windows = self.children_in_client(id);
        let rects: Vec<PixelRect> = windows
            .iter()
            .map(|w| PixelRect::from_rect(self.relative_rect(*w)))
            .collect();
        for (i, a) in rects.iter().enumerate() {
            for (j, b) in rects.iter().enumerate().skip(i + 1) {
                if a.overlaps(b) {
                    tracing::warn!(
                        window = ?id,
                        first = ?windows[i],
                        second = ?windows[j],
                        "grid layout rejected: child windows overlap"
                    );
                    return Err(WindowError::BadLayout("two or more child windows overlap"));
                }
            }
        }
        let client = PixelRect::from_rect(Rect::from_origin_size(Point::ZERO, self.client_size(id)));
        let Some(grid) = infer_grid(&rects, (client.right, client.bottom)) else {
            return Ok(());
        };
        let layout = self.install_generated_layout(id, grid.rows, grid.columns);
        for (window, cell) in windows.into_iter().zip(grid.cells) {
            self.layout_add(layout, window, cell)?;
        }
        tracing::debug!(
            window = ?id,
            layout = ?layout,
            rows = grid.rows,
            columns = grid.columns,
            "created grid layout"
        );
        Ok(())
    }

    /// Install `layout` as the layout of `id`.
    ///
    /// Children of `id` inside the client area are detached and returned;
    /// the layout is expected to manage them. Children outside the client
    /// area stay. The layout is resized to the client area.
    ///
    /// # Errors
    ///
    /// [`WindowError::BadLayout`] if `layout` is already the window's layout
    /// or the layout containing it, and [`WindowError::NotALayout`] if it is
    /// not a layout window.
    pub fn set_layout(&mut self, id: WindowId, layout: WindowId) -> Result<Vec<WindowId>, WindowError> {
        self.ensure_alive(id)?;
        self.ensure_layout(layout)?;
        if Some(layout) == self.layout(id) || Some(layout) == self.containing_layout(id) {
            return Err(WindowError::BadLayout(
                "window's layout set to its current layout or the layout containing it",
            ));
        }
        if layout == id || self.is_ancestor_of(layout, id) {
            return Err(WindowError::BadLayout("window's layout set to an ancestor"));
        }
        self.remove_layout(id);
        let children = self.children(id).to_vec();
        let inside = self.children_in_client(id);
        self.detach_children(id);
        let mut detached = Vec::new();
        for child in children {
            if inside.contains(&child) {
                detached.push(child);
            } else {
                self.attach_child(id, child);
            }
        }
        detached.retain(|w| *w != layout);
        self.attach_child(id, layout);
        if let Some(n) = self.get_mut(id) {
            n.layout = Some(layout);
        }
        let client = self.client_size(id);
        self.size_move(layout, Point::ZERO, client.to_vec2().to_point());
        self.relayout(layout);
        Ok(detached)
    }

    /// Remove the layout of `id`, returning its children to `id` and
    /// destroying the layout window.
    ///
    /// Any saved [`WindowId`] of the layout goes stale. Use
    /// [`detach_layout`](Self::detach_layout) to keep the layout alive.
    pub fn remove_layout(&mut self, id: WindowId) {
        let Some(layout) = self.layout(id) else {
            return;
        };
        if let Some(n) = self.get_mut(id) {
            n.layout = None;
        }
        let children = self.children(layout).to_vec();
        self.detach_children(layout);
        for child in children {
            self.attach_child(id, child);
        }
        self.destroy(layout);
    }

    /// Detach the layout of `id` and return it. The layout keeps its children.
    pub fn detach_layout(&mut self, id: WindowId) -> Option<WindowId> {
        let layout = self.layout(id)?;
        self.detach_child(id, layout);
        Some(layout)
    }

    /// Set the border margin of the window's layout, if it has one.
    pub fn set_layout_border_margin(&mut self, id: WindowId, margin: f64) {
        if let Some(layout) = self.layout(id) {
            if let Some(g) = self.get_mut(layout).and_then(|n| n.grid.as_mut()) {
                g.border_margin = margin;
            }
            self.relayout(layout);
        }
    }

    /// Set the cell margin of the window's layout, if it has one.
    pub fn set_layout_cell_margin(&mut self, id: WindowId, margin: f64) {
        if let Some(layout) = self.layout(id) {
            if let Some(g) = self.get_mut(layout).and_then(|n| n.grid.as_mut()) {
                g.cell_margin = margin;
            }
            self.relayout(layout);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(left: i64, top: i64, right: i64, bottom: i64) -> PixelRect {
        PixelRect {
            left,
            top,
            right,
            bottom,
        }
    }

    fn window(tree: &mut WindowTree, parent: WindowId, r: Rect) -> WindowId {
        let w = tree.create(WindowDesc::new(r));
        tree.attach_child(parent, w);
        w
    }

    #[test]
    fn axis_shares_extra_space() {
        let s = solve_axis(2, 0.0, 5.0, 105.0, &[(0, 1, 10.0), (1, 1, 30.0)]);
        assert_eq!(s.min_total, 45.0);
        assert_eq!(s.extents, vec![40.0, 60.0]);
        assert_eq!(s.starts, vec![0.0, 45.0]);
        assert_eq!(s.block(0, 2), (0.0, 105.0));
    }

    #[test]
    fn axis_spans_raise_minimums() {
        let s = solve_axis(2, 2.0, 0.0, 0.0, &[(0, 2, 40.0)]);
        assert_eq!(s.min_total, 44.0);
        assert_eq!(s.extents, vec![20.0, 20.0], "no room, so minimums only");
    }

    #[test]
    fn overlap_detection() {
        assert!(px(0, 0, 10, 10).overlaps(&px(5, 5, 15, 15)));
        assert!(px(0, 0, 10, 10).overlaps(&px(2, 2, 4, 4)), "containment");
        assert!(!px(0, 0, 10, 10).overlaps(&px(10, 0, 20, 10)), "touching");
        assert!(px(0, 0, 10, 10).overlaps(&px(3, 3, 3, 3)), "empty inside");
    }

    #[test]
    fn left_edge_adopts_nearer_left() {
        let mut lefts = vec![10, 12];
        snap_leading(&mut lefts, &[50, 50]);
        assert_eq!(lefts, vec![10, 10]);
    }

    #[test]
    fn left_edge_stops_at_right_edge() {
        let mut lefts = vec![0, 25];
        snap_leading(&mut lefts, &[20, 45]);
        assert_eq!(lefts, vec![0, 25]);
    }

    #[test]
    fn stop_wins_ties() {
        // Position 19 is both a left edge and one before a right edge.
        let mut lefts = vec![19, 30];
        snap_leading(&mut lefts, &[20, 40]);
        assert_eq!(lefts, vec![19, 30]);
    }

    #[test]
    fn right_edge_snaps_within_extent() {
        let mut rights = vec![40, 48];
        snap_trailing(&mut rights, &[0, 0], 100);
        assert_eq!(rights, vec![48, 48]);

        let mut rights = vec![40, 99];
        snap_trailing(&mut rights, &[0, 0], 99);
        assert_eq!(rights, vec![40, 99], "99 is past the scan range");
    }

    #[test]
    fn inferred_grid_spans() {
        // Top row: two cells; bottom row: one window spanning both.
        let rects = [px(0, 0, 40, 20), px(50, 0, 90, 20), px(0, 30, 90, 60)];
        let grid = infer_grid(&rects, (100, 100)).unwrap();
        assert_eq!((grid.rows, grid.columns), (2, 2));
        assert_eq!(grid.cells[0], LayoutCell::single(0, 0));
        assert_eq!(grid.cells[1], LayoutCell::single(0, 1));
        assert_eq!(
            grid.cells[2],
            LayoutCell {
                row: 1,
                column: 0,
                row_span: 1,
                column_span: 2
            }
        );
        assert_eq!(infer_grid(&[], (10, 10)), None);
    }

    #[test]
    fn shared_left_edge_shares_column() {
        let mut tree = WindowTree::new();
        let p = tree.create(WindowDesc::new(Rect::new(0.0, 0.0, 100.0, 100.0)));
        let a = window(&mut tree, p, Rect::new(10.0, 10.0, 50.0, 40.0));
        let b = window(&mut tree, p, Rect::new(10.0, 50.0, 50.0, 90.0));
        let c = window(&mut tree, p, Rect::new(60.0, 10.0, 90.0, 90.0));
        tree.grid_layout(p).unwrap();
        let layout = tree.layout(p).unwrap();
        let (ca, cb, cc) = (
            tree.layout_cell(layout, a).unwrap(),
            tree.layout_cell(layout, b).unwrap(),
            tree.layout_cell(layout, c).unwrap(),
        );
        assert_eq!(ca.column, cb.column);
        assert_ne!(ca.row, cb.row);
        assert_eq!(cc.column, ca.column + 1);
        assert_eq!(tree.layout_columns(layout), Some(2));
        assert_eq!(tree.containing_layout(a), Some(layout));
    }

    #[test]
    fn overlapping_children_are_rejected() {
        let mut tree = WindowTree::new();
        let p = tree.create(WindowDesc::new(Rect::new(0.0, 0.0, 100.0, 100.0)));
        window(&mut tree, p, Rect::new(0.0, 0.0, 50.0, 50.0));
        window(&mut tree, p, Rect::new(40.0, 40.0, 90.0, 90.0));
        assert!(matches!(tree.grid_layout(p), Err(WindowError::BadLayout(_))));
        assert_eq!(tree.layout(p), None);
    }

    #[test]
    fn grid_without_children_is_noop() {
        let mut tree = WindowTree::new();
        let p = tree.create(WindowDesc::new(Rect::new(0.0, 0.0, 100.0, 100.0)));
        window(&mut tree, p, Rect::new(-5.0, 0.0, 50.0, 50.0));
        tree.grid_layout(p).unwrap();
        assert_eq!(tree.layout(p), None);
        assert_eq!(tree.children(p).len(), 1);
    }

    #[test]
    fn horizontal_layout_orders_by_left_edge() {
        let mut tree = WindowTree::new();
        let p = tree.create(WindowDesc::new(Rect::new(0.0, 0.0, 205.0, 50.0)));
        let right = window(&mut tree, p, Rect::new(100.0, 0.0, 150.0, 20.0));
        let left = window(&mut tree, p, Rect::new(0.0, 0.0, 50.0, 20.0));
        let outside = window(&mut tree, p, Rect::new(150.0, 0.0, 300.0, 20.0));
        tree.horizontal_layout(p).unwrap();
        let layout = tree.layout(p).unwrap();
        assert_eq!(tree.layout_cell(layout, left), Some(LayoutCell::single(0, 0)));
        assert_eq!(tree.layout_cell(layout, right), Some(LayoutCell::single(0, 1)));
        assert_eq!(tree.parent(outside), Some(p), "out-of-bounds child stays");
        // Cell margin 5 splits the remaining 200 pixels evenly.
        assert_eq!(tree.relative_rect(left), Rect::new(0.0, 0.0, 100.0, 50.0));
        assert_eq!(tree.relative_rect(right), Rect::new(105.0, 0.0, 205.0, 50.0));
    }

    #[test]
    fn vertical_layout_follows_owner_resize() {
        let mut tree = WindowTree::new();
        let p = tree.create(WindowDesc::new(Rect::new(0.0, 0.0, 100.0, 105.0)));
        let a = window(&mut tree, p, Rect::new(0.0, 0.0, 10.0, 10.0));
        let b = window(&mut tree, p, Rect::new(0.0, 20.0, 10.0, 30.0));
        tree.vertical_layout(p).unwrap();
        assert_eq!(tree.relative_rect(b), Rect::new(0.0, 55.0, 100.0, 105.0));
        tree.resize(p, Size::new(50.0, 205.0));
        assert_eq!(tree.relative_rect(a), Rect::new(0.0, 0.0, 50.0, 100.0));
        assert_eq!(tree.relative_rect(b), Rect::new(0.0, 105.0, 50.0, 205.0));
    }

    #[test]
    fn layout_minimum_clamps_owner() {
        let mut tree = WindowTree::new();
        let p = tree.create(WindowDesc::new(Rect::new(0.0, 0.0, 100.0, 100.0)));
        let a = window(&mut tree, p, Rect::new(0.0, 0.0, 10.0, 10.0));
        let b = window(&mut tree, p, Rect::new(50.0, 0.0, 60.0, 10.0));
        tree.horizontal_layout(p).unwrap();
        tree.set_min_size(a, Size::new(30.0, 40.0));
        tree.set_min_size(b, Size::new(20.0, 10.0));
        let layout = tree.layout(p).unwrap();
        assert_eq!(tree.min_size(layout), Size::new(55.0, 40.0));
        assert_eq!(tree.min_usable_size(p), Size::new(55.0, 40.0));
        tree.resize(p, Size::new(10.0, 10.0));
        assert_eq!(tree.size(p), Size::new(55.0, 40.0));
    }

    #[test]
    fn nested_minimum_propagates() {
        let mut tree = WindowTree::new();
        let outer = tree.create(WindowDesc::new(Rect::new(0.0, 0.0, 300.0, 100.0)));
        let inner = window(&mut tree, outer, Rect::new(0.0, 0.0, 100.0, 100.0));
        let other = window(&mut tree, outer, Rect::new(150.0, 0.0, 250.0, 100.0));
        let leaf = window(&mut tree, inner, Rect::new(0.0, 0.0, 10.0, 10.0));
        tree.horizontal_layout(inner).unwrap();
        tree.horizontal_layout(outer).unwrap();
        tree.set_min_size(leaf, Size::new(200.0, 10.0));
        // inner's layout minimum grows to 200, which pushes outer's first column.
        assert!(tree.width(inner) >= 200.0);
        assert_eq!(tree.relative_rect(other).x0, tree.relative_rect(inner).x1 + 5.0);
    }

    #[test]
    fn remove_layout_returns_children() {
        let mut tree = WindowTree::new();
        let p = tree.create(WindowDesc::new(Rect::new(0.0, 0.0, 100.0, 100.0)));
        let a = window(&mut tree, p, Rect::new(0.0, 0.0, 10.0, 10.0));
        tree.horizontal_layout(p).unwrap();
        let layout = tree.layout(p).unwrap();
        tree.remove_layout(p);
        assert!(!tree.is_alive(layout));
        assert_eq!(tree.parent(a), Some(p));
        assert_eq!(tree.containing_layout(a), None);
        assert_eq!(tree.children(p), &[a]);
    }

    #[test]
    fn relayout_replaces_previous_layout() {
        let mut tree = WindowTree::new();
        let p = tree.create(WindowDesc::new(Rect::new(0.0, 0.0, 100.0, 100.0)));
        window(&mut tree, p, Rect::new(0.0, 0.0, 10.0, 10.0));
        window(&mut tree, p, Rect::new(20.0, 0.0, 30.0, 10.0));
        tree.horizontal_layout(p).unwrap();
        let first = tree.layout(p).unwrap();
        tree.vertical_layout(p).unwrap();
        let second = tree.layout(p).unwrap();
        assert!(!tree.is_alive(first));
        assert_eq!(tree.layout_rows(second), Some(2));
        assert_eq!(tree.children(p), &[second]);
    }

    #[test]
    fn set_layout_rules() {
        let mut tree = WindowTree::new();
        let p = tree.create(WindowDesc::new(Rect::new(0.0, 0.0, 100.0, 100.0)));
        let inside = window(&mut tree, p, Rect::new(0.0, 0.0, 10.0, 10.0));
        let outside = window(&mut tree, p, Rect::new(90.0, 90.0, 110.0, 110.0));
        let layout = tree.create_layout(Rect::ZERO, 1, 1, 0.0, 0.0);
        let managed = tree.create(WindowDesc::new(Rect::new(0.0, 0.0, 5.0, 5.0)));
        tree.layout_add(layout, managed, LayoutCell::single(0, 0)).unwrap();

        let detached = tree.set_layout(p, layout).unwrap();
        assert_eq!(detached, vec![inside]);
        assert_eq!(tree.parent(inside), None);
        assert_eq!(tree.parent(outside), Some(p));
        assert_eq!(tree.layout(p), Some(layout));
        assert_eq!(tree.size(layout), Size::new(100.0, 100.0));
        assert_eq!(tree.size(managed), Size::new(100.0, 100.0));

        assert_eq!(
            tree.set_layout(p, layout),
            Err(WindowError::BadLayout(
                "window's layout set to its current layout or the layout containing it"
            ))
        );
        assert_eq!(
            tree.set_layout(managed, layout),
            Err(WindowError::BadLayout(
                "window's layout set to its current layout or the layout containing it"
            ))
        );
        assert_eq!(tree.set_layout(p, inside), Err(WindowError::NotALayout(inside)));
    }

    #[test]
    fn detach_layout_keeps_children() {
        let mut tree = WindowTree::new();
        let p = tree.create(WindowDesc::new(Rect::new(0.0, 0.0, 100.0, 100.0)));
        let a = window(&mut tree, p, Rect::new(0.0, 0.0, 10.0, 10.0));
        tree.horizontal_layout(p).unwrap();
        let layout = tree.detach_layout(p).unwrap();
        assert_eq!(tree.layout(p), None);
        assert_eq!(tree.parent(a), Some(layout));
        assert_eq!(tree.detach_layout(p), None);
    }

    #[test]
    fn layout_add_and_remove() {
        let mut tree = WindowTree::new();
        let layout = tree.create_layout(Rect::new(0.0, 0.0, 100.0, 100.0), 1, 1, 0.0, 0.0);
        let w = tree.create(WindowDesc::new(Rect::new(0.0, 0.0, 5.0, 5.0)));
        tree.layout_add(
            layout,
            w,
            LayoutCell {
                row: 1,
                column: 2,
                row_span: 0,
                column_span: 1,
            },
        )
        .unwrap();
        assert_eq!(tree.layout_rows(layout), Some(2));
        assert_eq!(tree.layout_columns(layout), Some(3));
        assert_eq!(tree.layout_cell(layout, w).map(|c| c.row_span), Some(1));
        assert_eq!(tree.layout_remove(layout, w), Ok(true));
        assert_eq!(tree.layout_cell(layout, w), None);
        assert_eq!(tree.layout_remove(layout, w), Ok(false));
        assert_eq!(
            tree.layout_add(w, layout, LayoutCell::single(0, 0)),
            Err(WindowError::NotALayout(w))
        );
        assert!(matches!(
            tree.layout_add(layout, layout, LayoutCell::single(0, 0)),
            Err(WindowError::BadLayout(_))
        ));
    }

    #[test]
    fn layout_add_rejects_cell_past_usize() {
        let mut tree = WindowTree::new();
        let layout = tree.create_layout(Rect::new(0.0, 0.0, 100.0, 100.0), 1, 1, 0.0, 0.0);
        let w = tree.create(WindowDesc::new(Rect::new(0.0, 0.0, 5.0, 5.0)));
        let huge = LayoutCell {
            row: usize::MAX,
            column: 0,
            row_span: 1,
            column_span: 1,
        };
        assert_eq!(
            tree.layout_add(layout, w, huge),
            Err(WindowError::BadLayout("cell out of range"))
        );
        let wide = LayoutCell {
            row: 0,
            column: 3,
            row_span: 1,
            column_span: usize::MAX,
        };
        assert_eq!(
            tree.layout_add(layout, w, wide),
            Err(WindowError::BadLayout("cell out of range"))
        );
        assert_eq!(tree.parent(w), None);
        assert_eq!(tree.layout_rows(layout), Some(1));
        assert_eq!(tree.layout_columns(layout), Some(1));
    }

    #[test]
    fn margins_apply_to_owned_layout() {
        let mut tree = WindowTree::new();
        let p = tree.create(WindowDesc::new(Rect::new(0.0, 0.0, 100.0, 100.0)));
        let a = window(&mut tree, p, Rect::new(0.0, 0.0, 10.0, 10.0));
        tree.horizontal_layout(p).unwrap();
        tree.set_layout_border_margin(p, 10.0);
        assert_eq!(tree.relative_rect(a), Rect::new(10.0, 10.0, 90.0, 90.0));
        let b = tree.create(WindowDesc::new(Rect::ZERO));
        let layout = tree.layout(p).unwrap();
        tree.layout_add(layout, b, LayoutCell::single(0, 1)).unwrap();
        tree.set_layout_cell_margin(p, 20.0);
        assert_eq!(tree.relative_rect(a), Rect::new(10.0, 10.0, 40.0, 90.0));
        assert_eq!(tree.relative_rect(b), Rect::new(60.0, 10.0, 90.0, 90.0));
    }
}
