//! The tree widget.
//!
//! A [`Tree`] owns one level of items. Each item is wrapped in a [`Node`]
//! which owns the next level down, so a hierarchy is a tree of trees. All
//! levels share the same hooks and the same single selection.

mod dispatch;
mod drag;
mod render;

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use arbor_dom::{list_children_by_property, Element, Property};
use log::{debug, trace};

use crate::config::{Flag, Flags, TreeConfig};
use crate::error::TreeError;
use crate::hooks::{NoHooks, RenderNode, TreeHooks};
use crate::item::{ItemKey, TreeItem};
use crate::node::{Node, NodeParts};
use crate::selection::{Selection, SharedSelection};

use drag::DragSession;

static TREE_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

fn next_tree_id() -> String {
    let id = TREE_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("tree-{id}")
}

/// The value of a tree, shaped by its mode.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeValue<T> {
    /// Select mode: the selected item, if any.
    Selection(Option<T>),
    /// Otherwise: every item of the level, in order.
    Items(Vec<T>),
}

/// One level of a draggable, selectable, expandable tree.
///
/// # Example
///
/// ```
/// use arbor::{Tree, TreeConfig, TreeValue};
///
/// let mut tree = Tree::new(TreeConfig::new());
/// tree.add_node("a");
/// tree.add_node("c");
/// tree.insert_node("b", 0).unwrap();
///
/// assert_eq!(tree.value(), TreeValue::Items(vec!["a", "b", "c"]));
/// ```
pub struct Tree<T: TreeItem> {
    id: String,
    name: Option<String>,
    class: Option<String>,
    slot: Option<String>,
    default_value: Option<Vec<T>>,
    flags: Flags,
    nested: bool,
    entries: Vec<ItemKey>,
    nodes: HashMap<ItemKey, Node<T>>,
    hooks: Rc<dyn TreeHooks<T>>,
    selection: SharedSelection<T>,
    drag: Option<DragSession<T>>,
}

impl<T: TreeItem> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("flags", &self.flags)
            .field("nested", &self.nested)
            .field("nodes", &self.nodes().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl<T: TreeItem> Tree<T> {
    pub fn new(config: TreeConfig<T>) -> Self {
        Self::with_hooks(config, Rc::new(NoHooks))
    }

    pub fn with_hooks(config: TreeConfig<T>, hooks: Rc<dyn TreeHooks<T>>) -> Self {
        let TreeConfig {
            name,
            value,
            class,
            slot,
            flags,
        } = config;
        let mut tree = Self {
            id: next_tree_id(),
            name,
            class,
            slot,
            default_value: value,
            flags,
            nested: false,
            entries: Vec::new(),
            nodes: HashMap::new(),
            hooks,
            selection: Selection::shared(),
            drag: None,
        };
        tree.restore_default();
        debug!("Created tree '{}' with {} items", tree.id, tree.length());
        tree
    }

    /// An empty level for a new node: same hooks, same selection, same flags.
    fn spawn_subtree(&self) -> Self {
        Self {
            id: next_tree_id(),
            name: self.name.clone(),
            class: None,
            slot: Some("subtree".to_string()),
            default_value: None,
            flags: self.flags,
            nested: true,
            entries: Vec::new(),
            nodes: HashMap::new(),
            hooks: Rc::clone(&self.hooks),
            selection: Rc::clone(&self.selection),
            drag: None,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Id of the rendered root element.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    pub fn slot(&self) -> Option<&str> {
        self.slot.as_deref()
    }

    /// Whether this level is a node's subtree rather than a root.
    pub fn is_nested(&self) -> bool {
        self.nested
    }

    pub fn length(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys of this level, in order.
    pub fn keys(&self) -> &[ItemKey] {
        &self.entries
    }

    /// Nodes of this level, in order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<T>> {
        self.entries.iter().filter_map(|key| self.nodes.get(key))
    }

    pub fn node(&self, key: ItemKey) -> Option<&Node<T>> {
        self.nodes.get(&key)
    }

    pub fn node_mut(&mut self, key: ItemKey) -> Option<&mut Node<T>> {
        self.nodes.get_mut(&key)
    }

    pub fn node_at(&self, index: usize) -> Option<&Node<T>> {
        self.entries.get(index).and_then(|key| self.nodes.get(key))
    }

    pub fn node_at_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        let key = *self.entries.get(index)?;
        self.nodes.get_mut(&key)
    }

    pub fn index_of(&self, key: ItemKey) -> Option<usize> {
        self.entries.iter().position(|entry| *entry == key)
    }

    /// Whether `key` belongs to this level or any level below it.
    pub fn contains(&self, key: ItemKey) -> bool {
        self.nodes.contains_key(&key) || self.nodes.values().any(|node| node.subtree().contains(key))
    }

    /// The level holding `key`, searching this level and every level below.
    pub fn level_mut(&mut self, key: ItemKey) -> Option<&mut Tree<T>> {
        if self.nodes.contains_key(&key) {
            return Some(self);
        }
        self.nodes
            .values_mut()
            .find_map(|node| node.subtree_mut().level_mut(key))
    }

    // =========================================================================
    // Structure
    // =========================================================================

    fn create_node(&self, data: T) -> Node<T> {
        let key = ItemKey::new();
        let mut subtree = self.spawn_subtree();
        let mut request = RenderNode {
            data: &data,
            subtree: &mut subtree,
            dragger: None,
            checker: None,
            opener: None,
            content: None,
        };
        let handled = self.hooks.render_node(&mut request);
        let RenderNode {
            dragger,
            checker,
            opener,
            content,
            ..
        } = request;
        let content = match content {
            Some(content) if handled => content,
            _ => {
                trace!("render_node declined for {key}, using text content");
                Element::text(data.to_string())
            }
        };
        let parts = NodeParts {
            dragger,
            checker,
            opener,
            content,
        };
        Node::new(key, data, parts, subtree, self.flags, Rc::clone(&self.selection))
    }

    /// Append an item and return its node.
    pub fn add_node(&mut self, data: T) -> &mut Node<T> {
        let node = self.create_node(data);
        let key = node.key();
        self.entries.push(key);
        trace!("Added {key} to tree '{}'", self.id);
        self.nodes.entry(key).or_insert(node)
    }

    /// Insert an item immediately **after** the entry at `index`.
    ///
    /// Inserting at index 0 of `[a, c]` gives `[a, b, c]`. An item can only be
    /// put in front of the first entry by dragging it there.
    ///
    /// # Errors
    ///
    /// [`TreeError::NoNodeAtIndex`] when there is no entry at `index`; the tree
    /// is left untouched.
    pub fn insert_node(&mut self, data: T, index: usize) -> Result<&mut Node<T>, TreeError> {
        if index >= self.entries.len() {
            return Err(TreeError::NoNodeAtIndex {
                index,
                len: self.entries.len(),
            });
        }
        let node = self.create_node(data);
        let key = node.key();
        self.entries.insert(index + 1, key);
        trace!("Inserted {key} after index {index} in tree '{}'", self.id);
        Ok(self.nodes.entry(key).or_insert(node))
    }

    /// Remove the entry at `index`. Returns `false` if there is none.
    pub fn remove_node(&mut self, index: usize) -> bool {
        if index >= self.entries.len() {
            return false;
        }
        let key = self.entries.remove(index);
        if let Some(node) = self.nodes.remove(&key) {
            self.release(&node);
        }
        debug!("Removed {key} from tree '{}'", self.id);
        true
    }

    /// Drop selection and drag state held by a node that left this level.
    fn release(&mut self, node: &Node<T>) {
        let held = self
            .selection
            .borrow()
            .key()
            .is_some_and(|key| key == node.key() || node.subtree().contains(key));
        if held {
            self.selection.borrow_mut().clear();
            self.notify_select();
        }
        if self.drag.as_ref().is_some_and(|session| session.source == node.key()) {
            self.drag = None;
        }
    }

    /// Discard every entry, node and drag state of this level.
    ///
    /// A selection held anywhere in this hierarchy is cleared too.
    pub fn clear(&mut self) {
        let held = self
            .selection
            .borrow()
            .key()
            .is_some_and(|key| self.contains(key));
        self.entries.clear();
        self.nodes.clear();
        self.drag = None;
        if held {
            self.selection.borrow_mut().clear();
            self.notify_select();
        }
        debug!("Cleared tree '{}'", self.id);
    }

    // =========================================================================
    // Value
    // =========================================================================

    /// The selection in select mode, otherwise the items of this level.
    pub fn value(&self) -> TreeValue<T> {
        if self.flags.selectable {
            TreeValue::Selection(self.selected())
        } else {
            TreeValue::Items(self.items())
        }
    }

    /// Assign the value.
    ///
    /// In select mode a `Selection` selects the first entry of this level
    /// equal to the item and does nothing when there is none. Otherwise
    /// `Items` replaces the level with the given items. A value of the other
    /// shape is ignored.
    pub fn set_value(&mut self, value: TreeValue<T>) {
        match value {
            TreeValue::Items(items) if !self.flags.selectable => {
                self.clear();
                for item in items {
                    self.add_node(item);
                }
            }
            TreeValue::Selection(Some(item)) if self.flags.selectable => {
                let found = self
                    .nodes()
                    .find(|node| *node.data() == item)
                    .map(Node::key);
                match found {
                    Some(key) => {
                        self.select(key);
                    }
                    None => debug!("No entry of tree '{}' matches {item}", self.id),
                }
            }
            _ => debug!("Ignoring value of the wrong shape for tree '{}'", self.id),
        }
    }

    /// Items of this level, in order.
    pub fn items(&self) -> Vec<T> {
        self.nodes().map(|node| node.data().clone()).collect()
    }

    /// The selected item of the hierarchy.
    pub fn selected(&self) -> Option<T> {
        self.selection.borrow().data().cloned()
    }

    pub fn selected_key(&self) -> Option<ItemKey> {
        self.selection.borrow().key()
    }

    /// The configured default items.
    pub fn default_value(&self) -> &[T] {
        self.default_value.as_deref().unwrap_or_default()
    }

    /// Clear the level and restore the configured default items.
    pub fn reset(&mut self) {
        self.clear();
        self.restore_default();
    }

    fn restore_default(&mut self) {
        if let Some(items) = self.default_value.clone() {
            for item in items {
                self.add_node(item);
            }
        }
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Toggle the selection of `key` as a click on its check affordance would.
    ///
    /// Only acts in select mode while neither disabled nor read-only. Another
    /// item replaces the current selection, the selected item deselects.
    /// Returns whether the selection changed.
    pub fn toggle_selection(&mut self, key: ItemKey) -> bool {
        if !self.flags.can_select() {
            return false;
        }
        let Some(node) = self.nodes.get(&key) else {
            return false;
        };
        let data = node.data().clone();
        {
            let mut selection = self.selection.borrow_mut();
            if selection.is_selected(key) {
                selection.clear();
                debug!("Deselected {key}");
            } else {
                selection.select(key, data);
                debug!("Selected {key}");
            }
        }
        self.notify_select();
        true
    }

    /// Select `key` without toggling. Returns whether the selection changed.
    pub fn select(&mut self, key: ItemKey) -> bool {
        if !self.flags.selectable {
            return false;
        }
        let Some(node) = self.nodes.get(&key) else {
            return false;
        };
        if self.selection.borrow().is_selected(key) {
            return false;
        }
        let data = node.data().clone();
        self.selection.borrow_mut().select(key, data);
        debug!("Selected {key}");
        self.notify_select();
        true
    }

    /// Clear the selection of the hierarchy. Returns whether anything was selected.
    pub fn deselect(&mut self) -> bool {
        let cleared = self.selection.borrow_mut().clear();
        if cleared {
            self.notify_select();
        }
        cleared
    }

    fn notify_select(&self) {
        let selected = self.selected();
        self.hooks.on_select(selected.as_ref());
    }

    // =========================================================================
    // Flags
    // =========================================================================

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn flag(&self, flag: Flag) -> bool {
        self.flags.get(flag)
    }

    /// Set a flag on this level, every current node and everything below.
    ///
    /// Nodes added later inherit the level's flags.
    pub fn set_flag(&mut self, flag: Flag, state: bool) {
        self.flags.set(flag, state);
        for node in self.nodes.values_mut() {
            node.set_flag(flag, state);
        }
    }

    pub fn required(&self) -> bool {
        self.flags.required
    }

    pub fn set_required(&mut self, state: bool) {
        self.set_flag(Flag::Required, state);
    }

    pub fn read_only(&self) -> bool {
        self.flags.read_only
    }

    pub fn set_read_only(&mut self, state: bool) {
        self.set_flag(Flag::ReadOnly, state);
    }

    pub fn disabled(&self) -> bool {
        self.flags.disabled
    }

    pub fn set_disabled(&mut self, state: bool) {
        self.set_flag(Flag::Disabled, state);
    }

    pub fn draggable(&self) -> bool {
        self.flags.draggable
    }

    pub fn set_draggable(&mut self, state: bool) {
        self.set_flag(Flag::Draggable, state);
    }

    pub fn selectable(&self) -> bool {
        self.flags.selectable
    }

    pub fn set_selectable(&mut self, state: bool) {
        self.set_flag(Flag::Selectable, state);
    }

    // =========================================================================
    // Validity
    // =========================================================================

    fn satisfies_required(&self) -> bool {
        // Subtrees inherit `required`; an empty one marks a leaf, not a missing value.
        self.nested || !self.flags.required || !self.is_empty()
    }

    /// Whether the tree is valid: non-empty when required, every content
    /// control valid, and every subtree valid.
    pub fn check_validity(&self) -> bool {
        let mut controls = list_children_by_property(
            self.nodes().map(|node| &node.parts().content),
            Property::Required,
        );
        self.satisfies_required()
            && controls.all(|control| control.check_validity().unwrap_or(true))
            && self.nodes().all(|node| node.subtree().check_validity())
    }

    /// Like [`Tree::check_validity`], but lets every invalid element mark itself.
    pub fn report_validity(&mut self) -> bool {
        let mut valid = self.satisfies_required();
        for key in &self.entries {
            if let Some(node) = self.nodes.get_mut(key) {
                valid &= node.report_validity();
            }
        }
        if !valid {
            debug!("Tree '{}' reported invalid", self.id);
        }
        valid
    }
}
