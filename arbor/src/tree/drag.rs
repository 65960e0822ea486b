//! Drag-and-drop reordering within one tree level.
//!
//! The protocol runs in five steps: `drag_start` on the dragged node,
//! `pointer_move` while the pointer travels, `drag_enter` over each node it
//! crosses (which moves the dragged entry next to it), `handle_drop` when it
//! is released over the tree, and `drag_end` to clean up either way.

use arbor_dom::{DataTransfer, DropEffect, Element, Point, Position, Rect, Size};
use log::{debug, trace};

use super::Tree;
use crate::events::EventResult;
use crate::hooks::{MoveNode, RenderMirror};
use crate::item::{ItemKey, TreeItem};

/// State of an active drag within one level.
pub(super) struct DragSession<T> {
    pub(super) source: ItemKey,
    pub(super) data: T,
    /// Preview following the pointer.
    pub(super) mirror: Element,
    /// Zero-sized element registered as the native drag image.
    pub(super) hidden: Option<Element>,
    pub(super) transfer: Option<DataTransfer>,
}

impl<T: TreeItem> Tree<T> {
    /// Whether dragging is currently allowed on this level.
    pub fn can_drag(&self) -> bool {
        self.flags.can_drag()
    }

    /// Whether a drag started on this level is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Key of the node being dragged on this level.
    pub fn drag_source(&self) -> Option<ItemKey> {
        self.drag.as_ref().map(|session| session.source)
    }

    /// The drag preview, while a drag is in progress on this level.
    pub fn mirror(&self) -> Option<&Element> {
        self.drag.as_ref().map(|session| &session.mirror)
    }

    /// The data transfer of the drag in progress anywhere in the hierarchy.
    pub fn data_transfer(&self) -> Option<&DataTransfer> {
        match &self.drag {
            Some(session) => session.transfer.as_ref(),
            None => self
                .nodes
                .values()
                .find_map(|node| node.subtree().data_transfer()),
        }
    }

    /// The level of the hierarchy with a drag in progress.
    pub fn dragging_level_mut(&mut self) -> Option<&mut Tree<T>> {
        if self.drag.is_some() {
            return Some(self);
        }
        self.nodes
            .values_mut()
            .find_map(|node| node.subtree_mut().dragging_level_mut())
    }

    fn render_mirror(&self, data: &T) -> Element {
        let mut request = RenderMirror { data, mirror: None };
        let handled = self.hooks.render_mirror(&mut request);
        let mirror = match request.mirror {
            Some(mirror) if handled => mirror,
            _ => Element::text(data.to_string()),
        };
        mirror
            .id(format!("{}:mirror", self.id))
            .slot("node")
            .position(Position::Absolute)
            .draggable(false)
            .pointer_events(false)
            .flag("mirror", true)
    }

    fn hidden_image(&self) -> Element {
        Element::box_()
            .id(format!("{}:drag-image", self.id))
            .position(Position::Absolute)
            .left(0)
            .top(0)
            .width(Size::Fixed(0))
            .height(Size::Fixed(0))
            .pointer_events(false)
    }

    /// Start dragging the node `key` from `pointer`.
    ///
    /// Renders the preview, registers a hidden zero-sized drag image on
    /// `transfer` (when given) and marks the node as dragging. Returns `false`
    /// when dragging is not allowed or `key` is not on this level.
    pub fn drag_start(
        &mut self,
        key: ItemKey,
        pointer: Point,
        transfer: Option<&mut DataTransfer>,
    ) -> bool {
        if !self.can_drag() {
            return false;
        }
        let Some(data) = self.nodes.get(&key).map(|node| node.data().clone()) else {
            return false;
        };
        if self.drag.is_some() {
            self.drag_end();
        }

        let mirror = self.render_mirror(&data);
        let hidden = transfer.map(|transfer| {
            let hidden = self.hidden_image();
            transfer.set_drag_image(hidden.id.clone(), 0, 0);
            transfer.effect_allowed = DropEffect::Move;
            hidden
        });
        if let Some(node) = self.nodes.get_mut(&key) {
            node.set_dragging(true);
        }
        self.drag = Some(DragSession {
            source: key,
            data,
            mirror,
            hidden,
            transfer: None,
        });
        self.pointer_move(pointer);
        debug!("Drag started for {key} in tree '{}'", self.id);
        true
    }

    pub(super) fn store_transfer(&mut self, transfer: DataTransfer) {
        if let Some(session) = &mut self.drag {
            session.transfer = Some(transfer);
        }
    }

    /// Reposition the preview at `pointer` through the `move_node` hook.
    ///
    /// Returns whether the preview moved.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        let Some(session) = self.drag.as_mut() else {
            return false;
        };
        let mut request = MoveNode {
            data: &session.data,
            x: Some(pointer.x),
            y: Some(pointer.y),
        };
        if !self.hooks.move_node(&mut request) {
            trace!("move_node vetoed preview move to {pointer:?}");
            return false;
        }
        let MoveNode { x, y, .. } = request;
        if let Some(x) = x {
            session.mirror.left = Some(x);
        }
        if let Some(y) = y {
            session.mirror.top = Some(y);
        }
        true
    }

    /// The dragged pointer entered the node `key`, whose row occupies `bounds`.
    ///
    /// A pointer at or above the vertical midpoint moves the dragged entry
    /// immediately before `key`, a pointer below it immediately after.
    /// Returns whether the order changed.
    pub fn drag_enter(&mut self, key: ItemKey, pointer: Point, bounds: Rect) -> bool {
        let Some(source) = self.drag_source() else {
            return false;
        };
        if source == key || !self.nodes.contains_key(&key) {
            return false;
        }
        let Some(from) = self.index_of(source) else {
            return false;
        };
        self.entries.remove(from);
        let Some(target) = self.index_of(key) else {
            self.entries.insert(from, source);
            return false;
        };
        let before = bounds.is_upper_half(pointer.y);
        let to = if before { target } else { target + 1 };
        self.entries.insert(to, source);
        trace!(
            "Moved {source} {} {key} ({from} -> {to})",
            if before { "before" } else { "after" }
        );
        to != from
    }

    /// The dragged pointer is over this tree. Accepts the drop while dragging is allowed.
    pub fn drag_over(&self) -> EventResult {
        if self.can_drag() {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    /// The dragged node was released over this tree.
    pub fn handle_drop(&mut self) -> EventResult {
        if !self.can_drag() {
            return EventResult::Ignored;
        }
        debug!("Drop on tree '{}'", self.id);
        self.hooks.on_change();
        EventResult::Consumed
    }

    /// Finish the drag: stop tracking, remove the preview and the drag image,
    /// and clear the node's dragging state. Returns `false` with no drag in
    /// progress on this level.
    pub fn drag_end(&mut self) -> bool {
        let Some(session) = self.drag.take() else {
            return false;
        };
        if let Some(node) = self.nodes.get_mut(&session.source) {
            node.set_dragging(false);
        }
        debug!("Drag ended for {} in tree '{}'", session.source, self.id);
        true
    }

    /// Elements the drag adds on top of the level while it lasts.
    pub(super) fn drag_overlay(&self) -> impl Iterator<Item = Element> + '_ {
        self.drag.iter().flat_map(|session| {
            std::iter::once(session.mirror.clone()).chain(session.hidden.clone())
        })
    }
}
