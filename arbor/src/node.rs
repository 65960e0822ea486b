//! A single rendered item and its subtree.

use std::fmt;
use std::iter;

use arbor_dom::{
    get_child_by_property, set_child_property, set_children_property, Element, Property, Size,
    TextStyle,
};
use log::trace;

use crate::config::{Flag, Flags};
use crate::error::TreeError;
use crate::events::{node_element_id, part_element_id, Part};
use crate::item::{ItemKey, TreeItem};
use crate::selection::SharedSelection;
use crate::tree::Tree;

/// The elements rendered for one item.
///
/// Only `content` is mandatory. Without a dragger the content is the drag
/// handle, without a checker it is the check affordance.
#[derive(Debug, Clone)]
pub struct NodeParts {
    pub dragger: Option<Element>,
    pub checker: Option<Element>,
    pub opener: Option<Element>,
    pub content: Element,
}

impl NodeParts {
    /// Address every part of the node so events can be routed back to it.
    fn assign(mut self, key: ItemKey) -> Self {
        for (part, slot, element) in [
            (Part::Dragger, "dragger", self.dragger.as_mut()),
            (Part::Checker, "checker", self.checker.as_mut()),
            (Part::Opener, "opener", self.opener.as_mut()),
            (Part::Content, "content", Some(&mut self.content)),
        ] {
            if let Some(element) = element {
                element.id = part_element_id(key, part);
                element.slot = Some(slot.to_string());
                element.clickable = true;
            }
        }
        self
    }

    fn drag_handle_mut(&mut self) -> &mut Element {
        match &mut self.dragger {
            Some(dragger) => dragger,
            None => &mut self.content,
        }
    }
}

/// Which affordances a node currently shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActiveSlots {
    pub dragger: bool,
    pub checker: bool,
    pub opener: bool,
}

fn update_active_slots(parts: &mut NodeParts, flags: Flags, has_children: bool) -> ActiveSlots {
    set_child_property(parts.drag_handle_mut(), Property::Draggable, flags.draggable);
    ActiveSlots {
        dragger: flags.draggable,
        checker: flags.selectable,
        opener: has_children,
    }
}

/// One item of a [`Tree`] level.
pub struct Node<T: TreeItem> {
    key: ItemKey,
    data: T,
    parts: NodeParts,
    subtree: Tree<T>,
    flags: Flags,
    slots: ActiveSlots,
    expanded: bool,
    dragging: bool,
    selection: SharedSelection<T>,
}

impl<T: TreeItem> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("data", &self.data.to_string())
            .field("flags", &self.flags)
            .field("slots", &self.slots)
            .field("expanded", &self.expanded)
            .field("dragging", &self.dragging)
            .field("subtree", &self.subtree)
            .finish_non_exhaustive()
    }
}

impl<T: TreeItem> Node<T> {
    pub(crate) fn new(
        key: ItemKey,
        data: T,
        parts: NodeParts,
        subtree: Tree<T>,
        flags: Flags,
        selection: SharedSelection<T>,
    ) -> Self {
        let mut node = Self {
            key,
            data,
            parts: parts.assign(key),
            subtree,
            flags,
            slots: ActiveSlots::default(),
            expanded: false,
            dragging: false,
            selection,
        };
        for flag in Flag::ALL {
            node.apply_flag(flag, flags.get(flag));
        }
        node
    }

    pub fn key(&self) -> ItemKey {
        self.key
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn parts(&self) -> &NodeParts {
        &self.parts
    }

    pub fn subtree(&self) -> &Tree<T> {
        &self.subtree
    }

    pub fn subtree_mut(&mut self) -> &mut Tree<T> {
        &mut self.subtree
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Affordances shown right now. The opener follows the subtree, however it was changed.
    pub fn active_slots(&self) -> ActiveSlots {
        ActiveSlots {
            opener: !self.subtree.is_empty(),
            ..self.slots
        }
    }

    pub fn has_dragger(&self) -> bool {
        self.parts.dragger.is_some()
    }

    pub fn has_checker(&self) -> bool {
        self.parts.checker.is_some()
    }

    /// A node is a leaf while its subtree is empty.
    pub fn is_leaf(&self) -> bool {
        self.subtree.is_empty()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Attach (`true`) or detach the subtree. The subtree itself is kept.
    pub fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
    }

    pub fn toggle_expanded(&mut self) -> bool {
        self.expanded = !self.expanded;
        trace!("Node {} expanded: {}", self.key, self.expanded);
        self.expanded
    }

    pub fn is_selected(&self) -> bool {
        self.selection.borrow().is_selected(self.key)
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub(crate) fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    /// Set a flag on this node and every node below it.
    pub fn set_flag(&mut self, flag: Flag, state: bool) {
        self.flags.set(flag, state);
        self.subtree.set_flag(flag, state);
        self.apply_flag(flag, state);
    }

    fn apply_flag(&mut self, flag: Flag, state: bool) {
        // `required` stays on the node and its subtree; the parts keep their own.
        let property = match flag {
            Flag::ReadOnly => Property::ReadOnly,
            Flag::Disabled => Property::Disabled,
            Flag::Required => return,
            Flag::Draggable | Flag::Selectable => {
                self.refresh_slots();
                return;
            }
        };
        let NodeParts {
            checker, content, ..
        } = &mut self.parts;
        set_children_property(checker.iter_mut().chain(iter::once(content)), property, state);
    }

    fn refresh_slots(&mut self) {
        self.slots = update_active_slots(&mut self.parts, self.flags, !self.subtree.is_empty());
    }

    /// Append an item to the subtree.
    pub fn add_node(&mut self, data: T) -> &mut Node<T> {
        let Self {
            subtree,
            parts,
            flags,
            slots,
            ..
        } = self;
        let node = subtree.add_node(data);
        *slots = update_active_slots(parts, *flags, true);
        node
    }

    /// Insert an item into the subtree after the entry at `index`.
    pub fn insert_node(&mut self, data: T, index: usize) -> Result<&mut Node<T>, TreeError> {
        let Self {
            subtree,
            parts,
            flags,
            slots,
            ..
        } = self;
        let node = subtree.insert_node(data, index)?;
        *slots = update_active_slots(parts, *flags, true);
        Ok(node)
    }

    pub fn remove_node(&mut self, index: usize) -> bool {
        let removed = self.subtree.remove_node(index);
        self.refresh_slots();
        removed
    }

    pub fn clear(&mut self) {
        self.subtree.clear();
        self.refresh_slots();
    }

    /// Content validity (when the content holds a form control) and subtree validity.
    pub fn check_validity(&self) -> bool {
        self.content_validity() && self.subtree.check_validity()
    }

    fn content_validity(&self) -> bool {
        get_child_by_property(&self.parts.content, Property::Required)
            .and_then(Element::check_validity)
            .unwrap_or(true)
    }

    pub fn report_validity(&mut self) -> bool {
        let content = self.parts.content.report_validity().unwrap_or(true);
        let subtree = self.subtree.report_validity();
        content && subtree
    }

    /// Render the node: its entry row, followed by the subtree when expanded.
    pub fn render(&self) -> Element {
        let selected = self.is_selected();
        let slots = self.active_slots();

        let mut entry = Element::row()
            .id(part_element_id(self.key, Part::Entry))
            .slot("entry")
            .gap(1);
        if selected {
            entry = entry.style(TextStyle::new().reverse());
        }
        if slots.dragger {
            if let Some(dragger) = &self.parts.dragger {
                entry.append(dragger.clone());
            }
        }
        if slots.checker {
            if let Some(checker) = &self.parts.checker {
                let mut checker = checker.clone();
                set_child_property(&mut checker, Property::Checked, selected);
                entry.append(checker);
            }
        }
        if slots.opener {
            if let Some(opener) = &self.parts.opener {
                entry.append(opener.clone());
            }
        }
        entry.append(self.parts.content.clone().width(Size::Fill));

        let mut element = Element::col()
            .id(node_element_id(self.key))
            .slot("node")
            .child(entry);
        for flag in Flag::ALL {
            element.set_flag(flag.data_key(), self.flags.get(flag));
        }
        element.set_flag("expanded", self.expanded);
        element.set_flag("selected", selected);
        element.set_flag("dragging", self.dragging);
        element.set_flag("leaf", self.is_leaf());
        if self.expanded {
            element.append(self.subtree.render());
        }
        element
    }
}
