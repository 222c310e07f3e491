// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: arena, ownership edges, and flags.

use core::any::Any;
use core::fmt;
use std::rc::Rc;

use kurbo::{Insets, Rect, Size};
use understory_flags::{FlagSet, IntoFlagSet};

use crate::behavior::{DefaultBehavior, WindowBehavior};
use crate::config::TreeConfig;
use crate::flags::WindowFlag;
use crate::gui::{Gui, NoGui, StyleFactory};
use crate::layout::LayoutGrid;
use crate::types::{BrowseInfoMode, ChildClippingMode, WindowDesc, WindowId, WindowState};

/// Arena of windows and the relations between them.
///
/// Parents own their children: destroying a window destroys its subtree.
/// Every other relation (parent, containing layout, event filters) is a
/// [`WindowId`] that is re-validated before use. A detached window stays in
/// the arena as a root until it is attached again or destroyed.
pub struct WindowTree {
    nodes: Vec<Option<Node>>, // slots
    generations: Vec<u32>,    // last generation per slot (persists across frees)
    free_list: Vec<usize>,
    pub(crate) config: TreeConfig,
    pub(crate) gui: Box<dyn Gui>,
}

impl Default for WindowTree {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for WindowTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        f.debug_struct("WindowTree")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &self.free_list.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

pub(crate) struct Node {
    pub(crate) generation: u32,
    pub(crate) name: String,
    /// Bounds relative to the parent's client area.
    pub(crate) rect: Rect,
    pub(crate) client_insets: Insets,
    pub(crate) min_size: Size,
    pub(crate) max_size: Size,
    pub(crate) flags: FlagSet<WindowFlag>,
    pub(crate) state: WindowState,
    pub(crate) clipping: ChildClippingMode,
    pub(crate) parent: Option<WindowId>,
    pub(crate) children: Vec<WindowId>,
    /// Owned layout; also present in `children`.
    pub(crate) layout: Option<WindowId>,
    pub(crate) containing_layout: Option<WindowId>,
    /// Windows filtering events bound for this one.
    pub(crate) filters: Vec<WindowId>,
    /// Windows whose events this one filters.
    pub(crate) filtering: Vec<WindowId>,
    pub(crate) browse_modes: Vec<BrowseInfoMode>,
    pub(crate) drag_drop_data_type: String,
    pub(crate) style_factory: Option<Rc<dyn StyleFactory>>,
    /// Taken out while one of its hooks runs.
    pub(crate) behavior: Option<Box<dyn WindowBehavior>>,
    /// Present on layout windows.
    pub(crate) grid: Option<LayoutGrid>,
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("name", &self.name)
            .field("rect", &self.rect)
            .field("flags", &self.flags)
            .field("parent", &self.parent)
            .field("children", &self.children)
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}

impl Node {
    pub(crate) fn new(generation: u32, desc: WindowDesc, config: &TreeConfig) -> Self {
        let mut flags = desc.flags;
        validate_flags(&mut flags);
        Self {
            generation,
            name: desc.name,
            rect: desc.rect,
            client_insets: desc.client_insets,
            min_size: desc.min_size,
            max_size: desc.max_size.unwrap_or(config.default_max_size),
            flags,
            state: WindowState::default(),
            clipping: desc.clipping,
            parent: None,
            children: Vec::new(),
            layout: None,
            containing_layout: None,
            filters: Vec::new(),
            filtering: Vec::new(),
            browse_modes: vec![BrowseInfoMode {
                time: config.default_browse_time,
                window: config.default_browse_info_window,
                text: String::new(),
            }],
            drag_drop_data_type: String::new(),
            style_factory: None,
            behavior: Some(Box::new(DefaultBehavior)),
            grid: None,
        }
    }
}

/// `MODAL` and `ONTOP` are exclusive; `MODAL` wins.
fn validate_flags(flags: &mut FlagSet<WindowFlag>) {
    if flags.contains(WindowFlag::MODAL) {
        flags.remove(WindowFlag::ONTOP);
    }
}

impl WindowTree {
    /// Create an empty tree with default configuration and no [`Gui`].
    pub fn new() -> Self {
        Self::with_gui(TreeConfig::default(), NoGui)
    }

    /// Create an empty tree with `config` and no [`Gui`].
    pub fn with_config(config: TreeConfig) -> Self {
        Self::with_gui(config, NoGui)
    }

    /// Create an empty tree that reports to `gui`.
    pub fn with_gui(config: TreeConfig, gui: impl Gui + 'static) -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            config,
            gui: Box::new(gui),
        }
    }

    /// Tree-wide defaults.
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Tree-wide defaults, mutably. Affects windows created afterwards.
    pub fn config_mut(&mut self) -> &mut TreeConfig {
        &mut self.config
    }

    /// The application collaborator.
    pub fn gui(&self) -> &dyn Gui {
        &*self.gui
    }

    /// The application collaborator, mutably.
    pub fn gui_mut(&mut self) -> &mut dyn Gui {
        &mut *self.gui
    }

    /// Create a window with the default behavior.
    pub fn create(&mut self, desc: WindowDesc) -> WindowId {
        let node = Node::new(0, desc, &self.config);
        self.insert_node(node)
    }

    /// Create a window whose events and hooks go to `behavior`.
    pub fn create_with_behavior(
        &mut self,
        desc: WindowDesc,
        behavior: impl WindowBehavior,
    ) -> WindowId {
        let mut node = Node::new(0, desc, &self.config);
        node.behavior = Some(Box::new(behavior));
        self.insert_node(node)
    }

    pub(crate) fn insert_node(&mut self, mut node: Node) -> WindowId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            node.generation = generation;
            self.nodes[idx] = Some(node);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "WindowId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            node.generation = generation;
            self.nodes.push(Some(node));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "WindowId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        WindowId::new(idx, generation)
    }

    /// Destroy a window and its subtree.
    ///
    /// The window is detached from its parent first. Event-filter relations
    /// on both sides are pruned so no survivor refers to a destroyed window.
    pub fn destroy(&mut self, id: WindowId) {
        let Some(node) = self.get(id) else {
            return;
        };
        tracing::debug!(window = ?id, name = %node.name, "destroying window");
        if let Some(parent) = node.parent {
            self.detach_child(parent, id);
        }
        self.destroy_subtree(id);
    }

    fn destroy_subtree(&mut self, id: WindowId) {
        let Some(node) = self.get(id) else {
            return;
        };
        let children = node.children.clone();
        for child in children {
            self.destroy_subtree(child);
        }
        let Some(node) = self.nodes[id.idx()].take() else {
            return;
        };
        for filter in node.filters {
            if let Some(n) = self.get_mut(filter) {
                n.filtering.retain(|w| *w != id);
            }
        }
        for filtered in node.filtering {
            if let Some(n) = self.get_mut(filtered) {
                n.filters.retain(|w| *w != id);
            }
        }
        self.free_list.push(id.idx());
    }

    /// Returns true if `id` refers to a live window.
    pub fn is_alive(&self, id: WindowId) -> bool {
        self.get(id).is_some()
    }

    /// Number of live windows.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    /// Returns true if no window is alive.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn get(&self, id: WindowId) -> Option<&Node> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        (n.generation == id.1).then_some(n)
    }

    pub(crate) fn get_mut(&mut self, id: WindowId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }

    // --- behaviors ---

    /// The behavior of `id`, if it is a `B`.
    ///
    /// Returns `None` while one of the window's own hooks is running.
    pub fn behavior<B: WindowBehavior>(&self, id: WindowId) -> Option<&B> {
        let behavior: &dyn Any = self.get(id)?.behavior.as_deref()?;
        behavior.downcast_ref()
    }

    /// The behavior of `id`, mutably, if it is a `B`.
    pub fn behavior_mut<B: WindowBehavior>(&mut self, id: WindowId) -> Option<&mut B> {
        let behavior: &mut dyn Any = self.get_mut(id)?.behavior.as_deref_mut()?;
        behavior.downcast_mut()
    }

    /// Replace the behavior of `id`.
    pub fn set_behavior(&mut self, id: WindowId, behavior: impl WindowBehavior) {
        if let Some(n) = self.get_mut(id) {
            n.behavior = Some(Box::new(behavior));
        }
    }

    // --- names and flags ---

    /// Debugging name.
    pub fn name(&self, id: WindowId) -> Option<&str> {
        self.get(id).map(|n| n.name.as_str())
    }

    /// Set the debugging name.
    pub fn set_name(&mut self, id: WindowId, name: impl Into<String>) {
        if let Some(n) = self.get_mut(id) {
            n.name = name.into();
        }
    }

    /// Capability flags as stored.
    pub fn flags(&self, id: WindowId) -> FlagSet<WindowFlag> {
        self.get(id).map(|n| n.flags).unwrap_or_default()
    }

    /// Replace the capability flags. `MODAL` clears `ONTOP`.
    pub fn set_flags(&mut self, id: WindowId, flags: impl IntoFlagSet<WindowFlag>) {
        if let Some(n) = self.get_mut(id) {
            n.flags = flags.into_flag_set();
            validate_flags(&mut n.flags);
        }
    }

    fn has_flag(&self, id: WindowId, flag: WindowFlag) -> bool {
        self.flags(id).contains(flag)
    }

    /// Returns true if the window handles input itself.
    pub fn interactive(&self, id: WindowId) -> bool {
        self.has_flag(id, WindowFlag::INTERACTIVE)
    }

    /// Returns true if held buttons repeat button-down events.
    pub fn repeat_button_down(&self, id: WindowId) -> bool {
        self.has_flag(id, WindowFlag::REPEAT_BUTTON_DOWN)
    }

    /// Returns true if held keys repeat key-press events.
    pub fn repeat_key_press(&self, id: WindowId) -> bool {
        self.has_flag(id, WindowFlag::REPEAT_KEY_PRESS)
    }

    /// Returns true if the window can be dragged.
    pub fn dragable(&self, id: WindowId) -> bool {
        self.has_flag(id, WindowFlag::DRAGABLE)
    }

    /// Returns true if the window can be resized.
    pub fn resizable(&self, id: WindowId) -> bool {
        self.has_flag(id, WindowFlag::RESIZABLE)
    }

    /// Returns true if the window is a top-level window flagged `ONTOP`.
    pub fn on_top(&self, id: WindowId) -> bool {
        self.parent(id).is_none() && self.has_flag(id, WindowFlag::ONTOP)
    }

    /// Returns true if the window is a top-level window flagged `MODAL`.
    pub fn modal(&self, id: WindowId) -> bool {
        self.parent(id).is_none() && self.has_flag(id, WindowFlag::MODAL)
    }

    // --- structure ---

    /// The parent, if attached to a live window.
    pub fn parent(&self, id: WindowId) -> Option<WindowId> {
        self.get(id)?.parent.filter(|p| self.is_alive(*p))
    }

    /// Children in paint order (last is topmost). Includes the owned layout.
    pub fn children(&self, id: WindowId) -> &[WindowId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Returns true if `ancestor` is a direct or indirect parent of `id`.
    pub fn is_ancestor_of(&self, ancestor: WindowId, id: WindowId) -> bool {
        let mut current = self.parent(id);
        while let Some(p) = current {
            if p == ancestor {
                return true;
            }
            current = self.parent(p);
        }
        false
    }

    /// The topmost ancestor, or `None` for a window without a parent.
    pub fn root_parent(&self, id: WindowId) -> Option<WindowId> {
        let mut root = self.parent(id)?;
        while let Some(p) = self.parent(root) {
            root = p;
        }
        Some(root)
    }

    /// The layout installed on this window.
    pub fn layout(&self, id: WindowId) -> Option<WindowId> {
        self.get(id)?.layout.filter(|l| self.is_alive(*l))
    }

    /// The layout this window is placed in.
    pub fn containing_layout(&self, id: WindowId) -> Option<WindowId> {
        self.get(id)?.containing_layout.filter(|l| self.is_alive(*l))
    }

    /// Attach `child` as the topmost child of `parent`.
    ///
    /// `child` is first detached from its previous parent and removed from
    /// the [`Gui`]'s tracked windows. Attaching to a dead parent, or in a way
    /// that would make a window its own ancestor, logs a warning and does
    /// nothing.
    pub fn attach_child(&mut self, parent: WindowId, child: WindowId) {
        if !self.is_alive(child) {
            return;
        }
        if !self.is_alive(parent) {
            tracing::warn!(
                parent = ?parent,
                child = ?child,
                "attach_child on a window that is not alive; not attaching child"
            );
            return;
        }
        if parent == child || self.is_ancestor_of(child, parent) {
            tracing::warn!(
                parent = ?parent,
                child = ?child,
                "attach_child would create a cycle; not attaching child"
            );
            return;
        }
        if let Some(old) = self.parent(child) {
            self.detach_child(old, child);
        }
        self.gui.remove(child);
        let parent_is_layout = self.is_layout(parent);
        if let Some(c) = self.get_mut(child) {
            c.parent = Some(parent);
            if parent_is_layout {
                c.containing_layout = Some(parent);
            }
        }
        if let Some(p) = self.get_mut(parent) {
            p.children.push(child);
        }
    }

    /// Detach `child` from `parent`. Does nothing if it is not a child.
    ///
    /// If `child` is the parent's layout, the parent no longer has one.
    pub fn detach_child(&mut self, parent: WindowId, child: WindowId) {
        let Some(p) = self.get_mut(parent) else {
            return;
        };
        let Some(pos) = p.children.iter().position(|c| *c == child) else {
            return;
        };
        p.children.remove(pos);
        if p.layout == Some(child) {
            p.layout = None;
        }
        if let Some(grid) = p.grid.as_mut() {
            grid.remove_entry(child);
        }
        self.clear_parent_links(child);
    }

    /// Detach every child of `id`, including its layout.
    pub fn detach_children(&mut self, id: WindowId) {
        let Some(n) = self.get_mut(id) else {
            return;
        };
        n.layout = None;
        if let Some(grid) = n.grid.as_mut() {
            grid.clear_entries();
        }
        let children = core::mem::take(&mut n.children);
        for child in children {
            self.clear_parent_links(child);
        }
    }

    fn clear_parent_links(&mut self, child: WindowId) {
        if let Some(c) = self.get_mut(child) {
            c.parent = None;
            c.containing_layout = None;
        }
    }

    /// Move `child` to the end of the child list, painting it last.
    pub fn move_child_up(&mut self, parent: WindowId, child: WindowId) {
        if let Some(p) = self.get_mut(parent) {
            if let Some(pos) = p.children.iter().position(|c| *c == child) {
                let c = p.children.remove(pos);
                p.children.push(c);
            }
        }
    }

    /// Move `child` to the front of the child list, painting it first.
    pub fn move_child_down(&mut self, parent: WindowId, child: WindowId) {
        if let Some(p) = self.get_mut(parent) {
            if let Some(pos) = p.children.iter().position(|c| *c == child) {
                let c = p.children.remove(pos);
                p.children.insert(0, c);
            }
        }
    }

    // --- visibility ---

    /// Hide the window and its subtree.
    pub fn hide(&mut self, id: WindowId) {
        self.set_visible_recursive(id, false);
    }

    /// Show the window and its subtree.
    pub fn show(&mut self, id: WindowId) {
        self.set_visible_recursive(id, true);
    }

    fn set_visible_recursive(&mut self, id: WindowId, visible: bool) {
        let Some(n) = self.get_mut(id) else {
            return;
        };
        n.state.set(WindowState::VISIBLE, visible);
        let children = n.children.clone();
        for child in children {
            self.set_visible_recursive(child, visible);
        }
    }

    /// Returns true if the window is shown.
    pub fn visible(&self, id: WindowId) -> bool {
        self.get(id)
            .is_some_and(|n| n.state.contains(WindowState::VISIBLE))
    }

    /// Returns true if the window sits outside its parent's client area.
    pub fn non_client_child(&self, id: WindowId) -> bool {
        self.get(id)
            .is_some_and(|n| n.state.contains(WindowState::NON_CLIENT_CHILD))
    }

    /// Mark the window as sitting outside its parent's client area.
    pub fn set_non_client_child(&mut self, id: WindowId, non_client: bool) {
        if let Some(n) = self.get_mut(id) {
            n.state.set(WindowState::NON_CLIENT_CHILD, non_client);
        }
    }

    /// How children are clipped.
    pub fn child_clipping_mode(&self, id: WindowId) -> ChildClippingMode {
        self.get(id).map(|n| n.clipping).unwrap_or_default()
    }

    /// Set how children are clipped.
    pub fn set_child_clipping_mode(&mut self, id: WindowId, mode: ChildClippingMode) {
        if let Some(n) = self.get_mut(id) {
            n.clipping = mode;
        }
    }

    // --- style ---

    /// The window's style factory, else the [`Gui`]'s.
    pub fn style_factory(&self, id: WindowId) -> Rc<dyn StyleFactory> {
        match self.get(id).and_then(|n| n.style_factory.clone()) {
            Some(factory) => factory,
            None => self.gui.style_factory(),
        }
    }

    /// Set or clear the window's own style factory.
    pub fn set_style_factory(&mut self, id: WindowId, factory: Option<Rc<dyn StyleFactory>>) {
        if let Some(n) = self.get_mut(id) {
            n.style_factory = factory;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::DefaultStyleFactory;
    use kurbo::Rect;

    fn window(tree: &mut WindowTree, x: f64, y: f64, w: f64, h: f64) -> WindowId {
        tree.create(WindowDesc::new(Rect::new(x, y, x + w, y + h)))
    }

    #[test]
    fn stale_ids_do_not_alias() {
        let mut tree = WindowTree::new();
        let a = window(&mut tree, 0.0, 0.0, 10.0, 10.0);
        tree.destroy(a);
        assert!(!tree.is_alive(a));
        let b = window(&mut tree, 0.0, 0.0, 10.0, 10.0);
        assert_eq!(a.idx(), b.idx(), "slot is reused");
        assert_ne!(a, b);
        assert!(!tree.is_alive(a));
        assert!(tree.is_alive(b));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn attach_reparents() {
        let mut tree = WindowTree::new();
        let p1 = window(&mut tree, 0.0, 0.0, 100.0, 100.0);
        let p2 = window(&mut tree, 0.0, 0.0, 100.0, 100.0);
        let c = window(&mut tree, 1.0, 1.0, 5.0, 5.0);
        tree.attach_child(p1, c);
        assert_eq!(tree.parent(c), Some(p1));
        tree.attach_child(p2, c);
        assert_eq!(tree.parent(c), Some(p2));
        assert!(tree.children(p1).is_empty());
        assert_eq!(tree.children(p2), &[c]);
    }

    #[test]
    fn attach_soft_fails() {
        let mut tree = WindowTree::new();
        let dead = window(&mut tree, 0.0, 0.0, 10.0, 10.0);
        tree.destroy(dead);
        let c = window(&mut tree, 0.0, 0.0, 1.0, 1.0);
        tree.attach_child(dead, c);
        assert_eq!(tree.parent(c), None);

        let p = window(&mut tree, 0.0, 0.0, 10.0, 10.0);
        tree.attach_child(p, c);
        tree.attach_child(c, p);
        assert_eq!(tree.parent(p), None, "cycle rejected");
        tree.attach_child(c, c);
        assert!(tree.children(c).is_empty());
    }

    #[test]
    fn detach_layout_clears_reference() {
        let mut tree = WindowTree::new();
        let p = window(&mut tree, 0.0, 0.0, 100.0, 100.0);
        let c = window(&mut tree, 10.0, 10.0, 20.0, 20.0);
        tree.attach_child(p, c);
        tree.horizontal_layout(p).unwrap();
        let layout = tree.layout(p).unwrap();
        tree.detach_child(p, layout);
        assert_eq!(tree.layout(p), None);
        assert_eq!(tree.parent(layout), None);
        assert_eq!(tree.parent(c), Some(layout), "layout keeps its children");
    }

    #[test]
    fn detach_children_clears_links() {
        let mut tree = WindowTree::new();
        let p = window(&mut tree, 0.0, 0.0, 100.0, 100.0);
        let a = window(&mut tree, 0.0, 0.0, 10.0, 10.0);
        let b = window(&mut tree, 20.0, 0.0, 10.0, 10.0);
        tree.attach_child(p, a);
        tree.attach_child(p, b);
        tree.vertical_layout(p).unwrap();
        let layout = tree.layout(p).unwrap();
        assert_eq!(tree.containing_layout(a), Some(layout));
        tree.detach_children(layout);
        assert_eq!(tree.parent(a), None);
        assert_eq!(tree.containing_layout(a), None);
        tree.detach_children(p);
        assert_eq!(tree.layout(p), None);
        assert!(tree.children(p).is_empty());
    }

    #[test]
    fn child_order() {
        let mut tree = WindowTree::new();
        let p = window(&mut tree, 0.0, 0.0, 100.0, 100.0);
        let a = window(&mut tree, 0.0, 0.0, 1.0, 1.0);
        let b = window(&mut tree, 0.0, 0.0, 1.0, 1.0);
        let c = window(&mut tree, 0.0, 0.0, 1.0, 1.0);
        for w in [a, b, c] {
            tree.attach_child(p, w);
        }
        tree.move_child_up(p, a);
        assert_eq!(tree.children(p), &[b, c, a]);
        tree.move_child_down(p, c);
        assert_eq!(tree.children(p), &[c, b, a]);
        tree.move_child_up(p, p);
        assert_eq!(tree.children(p), &[c, b, a]);
    }

    #[test]
    fn ancestry() {
        let mut tree = WindowTree::new();
        let a = window(&mut tree, 0.0, 0.0, 100.0, 100.0);
        let b = window(&mut tree, 0.0, 0.0, 50.0, 50.0);
        let c = window(&mut tree, 0.0, 0.0, 5.0, 5.0);
        tree.attach_child(a, b);
        tree.attach_child(b, c);
        assert!(tree.is_ancestor_of(a, c));
        assert!(!tree.is_ancestor_of(c, a));
        assert_eq!(tree.root_parent(c), Some(a));
        assert_eq!(tree.root_parent(a), None);
    }

    #[test]
    fn destroy_removes_subtree() {
        let mut tree = WindowTree::new();
        let root = window(&mut tree, 0.0, 0.0, 100.0, 100.0);
        let p = window(&mut tree, 0.0, 0.0, 50.0, 50.0);
        let c = window(&mut tree, 0.0, 0.0, 5.0, 5.0);
        tree.attach_child(root, p);
        tree.attach_child(p, c);
        tree.destroy(p);
        assert!(!tree.is_alive(p));
        assert!(!tree.is_alive(c));
        assert!(tree.children(root).is_empty());
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn modal_clears_on_top() {
        let mut tree = WindowTree::new();
        let w = tree.create(
            WindowDesc::new(Rect::new(0.0, 0.0, 10.0, 10.0))
                .with_flags(WindowFlag::MODAL | WindowFlag::ONTOP),
        );
        assert!(tree.modal(w));
        assert!(!tree.on_top(w));
        tree.set_flags(w, WindowFlag::ONTOP);
        assert!(tree.on_top(w));
        let p = window(&mut tree, 0.0, 0.0, 100.0, 100.0);
        tree.attach_child(p, w);
        assert!(!tree.on_top(w), "only meaningful without a parent");
        tree.set_flags(w, WindowFlag::ONTOP | WindowFlag::MODAL);
        assert!(!tree.flags(w).contains(WindowFlag::ONTOP));
    }

    #[test]
    fn hide_and_show_recurse() {
        let mut tree = WindowTree::new();
        let p = window(&mut tree, 0.0, 0.0, 100.0, 100.0);
        let c = window(&mut tree, 0.0, 0.0, 5.0, 5.0);
        tree.attach_child(p, c);
        assert!(tree.visible(c));
        tree.hide(p);
        assert!(!tree.visible(p) && !tree.visible(c));
        tree.show(p);
        assert!(tree.visible(c));
    }

    #[derive(Debug)]
    struct Fancy;

    impl StyleFactory for Fancy {
        fn name(&self) -> &str {
            "fancy"
        }
    }

    #[test]
    fn style_factory_falls_back_to_gui() {
        let mut tree = WindowTree::new();
        let w = window(&mut tree, 0.0, 0.0, 5.0, 5.0);
        assert_eq!(tree.style_factory(w).name(), DefaultStyleFactory.name());
        tree.set_style_factory(w, Some(Rc::new(Fancy)));
        assert_eq!(tree.style_factory(w).name(), "fancy");
        tree.set_style_factory(w, None);
        assert_eq!(tree.style_factory(w).name(), "default");
    }

    #[derive(Default)]
    struct Tagged(u8);

    impl WindowBehavior for Tagged {}

    #[test]
    fn behavior_downcast() {
        let mut tree = WindowTree::new();
        let w = tree.create_with_behavior(WindowDesc::default(), Tagged(7));
        assert_eq!(tree.behavior::<Tagged>(w).map(|b| b.0), Some(7));
        tree.behavior_mut::<Tagged>(w).unwrap().0 = 9;
        assert_eq!(tree.behavior::<Tagged>(w).map(|b| b.0), Some(9));
        assert!(tree.behavior::<DefaultBehavior>(w).is_none());
    }
}
