//! Routing of element events back to the level and node they target.

use arbor_dom::{find_path, DataTransfer, Event, LayoutResult, Point};
use log::debug;

use super::Tree;
use crate::events::{node_element_id, parse_element_id, EventResult, Part};
use crate::item::{ItemKey, TreeItem};

/// A resolved event target.
struct Target {
    /// Ids of every element from the root to the target.
    path: Vec<String>,
    /// Keys of every node on the path, outermost first.
    chain: Vec<ItemKey>,
    /// The innermost node and the part of it that was hit.
    hit: Option<(ItemKey, Part)>,
}

impl Target {
    fn within(&self, level_id: &str) -> bool {
        self.path.iter().any(|id| id == level_id)
    }
}

impl<T: TreeItem> Tree<T> {
    /// Handle an element event fired on the rendered tree.
    ///
    /// `layout` is the layout of the last render and supplies node bounds for
    /// drag-enter.
    pub fn dispatch(&mut self, event: &Event, layout: &LayoutResult) -> EventResult {
        match event {
            Event::Click {
                target: Some(id), ..
            } => self.dispatch_click(id),
            Event::DragStart {
                target: Some(id),
                x,
                y,
            } => self.dispatch_drag_start(id, Point::new(*x, *y)),
            Event::DragEnter {
                target: Some(id),
                x,
                y,
            } => self.dispatch_drag_enter(id, Point::new(*x, *y), layout),
            Event::DragOver { target, x, y } => {
                self.dispatch_drag_over(target.as_deref(), Point::new(*x, *y))
            }
            Event::Drop {
                target: Some(id), ..
            } => self.dispatch_drop(id),
            Event::DragEnd { .. } => match self.dragging_level_mut() {
                Some(level) => {
                    level.drag_end();
                    EventResult::Consumed
                }
                None => EventResult::Ignored,
            },
            Event::PointerMove { x, y } => match self.dragging_level_mut() {
                Some(level) => {
                    level.pointer_move(Point::new(*x, *y));
                    EventResult::Consumed
                }
                None => EventResult::Ignored,
            },
            _ => EventResult::Ignored,
        }
    }

    fn resolve_target(&self, id: &str) -> Option<Target> {
        let root = self.render();
        let mut target = Target {
            path: Vec::new(),
            chain: Vec::new(),
            hit: None,
        };
        for element in find_path(&root, id)? {
            target.path.push(element.id.clone());
            if let Some((key, part)) = parse_element_id(&element.id) {
                if target.chain.last() != Some(&key) {
                    target.chain.push(key);
                }
                target.hit = Some((key, part));
            }
        }
        Some(target)
    }

    fn resolve_hit(&self, id: &str) -> Option<(ItemKey, Part)> {
        self.resolve_target(id)?.hit
    }

    fn dispatch_click(&mut self, id: &str) -> EventResult {
        let Some((key, part)) = self.resolve_hit(id) else {
            return EventResult::Ignored;
        };
        let Some(level) = self.level_mut(key) else {
            return EventResult::Ignored;
        };
        let Some(node) = level.node_mut(key) else {
            return EventResult::Ignored;
        };
        let toggles_selection = match part {
            Part::Opener => {
                node.toggle_expanded();
                return EventResult::Consumed;
            }
            Part::Checker => true,
            Part::Content => !node.has_checker(),
            _ => false,
        };
        if toggles_selection && level.toggle_selection(key) {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    fn dispatch_drag_start(&mut self, id: &str, pointer: Point) -> EventResult {
        let Some((key, part)) = self.resolve_hit(id) else {
            return EventResult::Ignored;
        };
        let Some(level) = self.level_mut(key) else {
            return EventResult::Ignored;
        };
        let has_dragger = level.node(key).is_some_and(|node| node.has_dragger());
        let is_handle = match part {
            Part::Dragger => true,
            Part::Content => !has_dragger,
            _ => false,
        };
        if !is_handle {
            return EventResult::Ignored;
        }
        let mut transfer = DataTransfer::new();
        if !level.drag_start(key, pointer, Some(&mut transfer)) {
            return EventResult::Ignored;
        }
        level.store_transfer(transfer);
        EventResult::StartDrag
    }

    fn dispatch_drag_enter(&mut self, id: &str, pointer: Point, layout: &LayoutResult) -> EventResult {
        let Some(target) = self.resolve_target(id) else {
            return EventResult::Ignored;
        };
        let Some(level) = self.dragging_level_mut() else {
            return EventResult::Ignored;
        };
        // Bubble up to the node of the dragging level that contains the target.
        let Some(key) = target.chain.into_iter().find(|key| level.node(*key).is_some()) else {
            return EventResult::Ignored;
        };
        let Some(bounds) = layout.get(&node_element_id(key)).copied() else {
            debug!("No layout for node {key}, ignoring drag enter");
            return EventResult::Ignored;
        };
        if level.drag_enter(key, pointer, bounds) {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    fn dispatch_drag_over(&mut self, id: Option<&str>, pointer: Point) -> EventResult {
        let target = id.and_then(|id| self.resolve_target(id));
        let Some(level) = self.dragging_level_mut() else {
            return EventResult::Ignored;
        };
        level.pointer_move(pointer);
        if target.is_some_and(|target| target.within(level.id())) {
            level.drag_over()
        } else {
            EventResult::Ignored
        }
    }

    fn dispatch_drop(&mut self, id: &str) -> EventResult {
        let Some(target) = self.resolve_target(id) else {
            return EventResult::Ignored;
        };
        let Some(level) = self.dragging_level_mut() else {
            return EventResult::Ignored;
        };
        if target.within(level.id()) {
            level.handle_drop()
        } else {
            EventResult::Ignored
        }
    }
}
