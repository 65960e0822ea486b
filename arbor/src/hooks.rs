//! Collaborator hooks raised by a tree.
//!
//! A tree never decides how an item looks. It asks its [`TreeHooks`] for the
//! parts of each node, for the drag preview and for permission to move it,
//! and reports order and selection changes back.

use arbor_dom::Element;

use crate::item::TreeItem;
use crate::tree::Tree;

/// Request to supply the rendered parts of one item.
///
/// Every part starts empty. A hook fills in what it wants and returns `true`;
/// when it returns `false` or leaves `content` empty the tree falls back to a
/// text element with the item's `Display` output.
pub struct RenderNode<'a, T: TreeItem> {
    pub data: &'a T,
    /// The node's freshly created subtree; may be populated right away.
    pub subtree: &'a mut Tree<T>,
    pub dragger: Option<Element>,
    pub checker: Option<Element>,
    pub opener: Option<Element>,
    pub content: Option<Element>,
}

/// Request to supply the drag preview of an item.
pub struct RenderMirror<'a, T: TreeItem> {
    pub data: &'a T,
    pub mirror: Option<Element>,
}

/// Request to reposition the drag preview.
///
/// Both coordinates start at the pointer. A hook can change them or set
/// either to `None` to keep that axis where it is.
pub struct MoveNode<'a, T: TreeItem> {
    pub data: &'a T,
    pub x: Option<u16>,
    pub y: Option<u16>,
}

/// Notifications raised by a tree and all of its subtrees.
pub trait TreeHooks<T: TreeItem> {
    /// Supply parts for a new node. Return `true` when handled.
    fn render_node(&self, _request: &mut RenderNode<'_, T>) -> bool {
        false
    }

    /// Supply the drag preview. Return `true` when handled.
    fn render_mirror(&self, _request: &mut RenderMirror<'_, T>) -> bool {
        false
    }

    /// Veto (`false`) or adjust a preview move.
    fn move_node(&self, _request: &mut MoveNode<'_, T>) -> bool {
        true
    }

    /// The order of a level changed through drag and drop.
    fn on_change(&self) {}

    /// The hierarchy-wide selection changed.
    fn on_select(&self, _selected: Option<&T>) {}
}

/// Hooks that accept every default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

impl<T: TreeItem> TreeHooks<T> for NoHooks {}

type RenderNodeFn<T> = Box<dyn Fn(&mut RenderNode<'_, T>) -> bool>;
type RenderMirrorFn<T> = Box<dyn Fn(&mut RenderMirror<'_, T>) -> bool>;
type MoveNodeFn<T> = Box<dyn Fn(&mut MoveNode<'_, T>) -> bool>;

/// Closure-backed [`TreeHooks`].
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use arbor::{Hooks, Tree, TreeConfig};
/// use arbor::dom::Element;
///
/// let hooks = Hooks::<&str>::new().on_render_node(|request| {
///     request.content = Some(Element::text(format!("* {}", request.data)));
///     true
/// });
/// let tree = Tree::with_hooks(TreeConfig::new().value(vec!["a"]), Rc::new(hooks));
/// assert_eq!(tree.length(), 1);
/// ```
pub struct Hooks<T: TreeItem> {
    render_node: Option<RenderNodeFn<T>>,
    render_mirror: Option<RenderMirrorFn<T>>,
    move_node: Option<MoveNodeFn<T>>,
    change: Option<Box<dyn Fn()>>,
    select: Option<Box<dyn Fn(Option<&T>)>>,
}

impl<T: TreeItem> Default for Hooks<T> {
    fn default() -> Self {
        Self {
            render_node: None,
            render_mirror: None,
            move_node: None,
            change: None,
            select: None,
        }
    }
}

impl<T: TreeItem> Hooks<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_render_node(mut self, f: impl Fn(&mut RenderNode<'_, T>) -> bool + 'static) -> Self {
        self.render_node = Some(Box::new(f));
        self
    }

    pub fn on_render_mirror(
        mut self,
        f: impl Fn(&mut RenderMirror<'_, T>) -> bool + 'static,
    ) -> Self {
        self.render_mirror = Some(Box::new(f));
        self
    }

    pub fn on_move_node(mut self, f: impl Fn(&mut MoveNode<'_, T>) -> bool + 'static) -> Self {
        self.move_node = Some(Box::new(f));
        self
    }

    pub fn on_change(mut self, f: impl Fn() + 'static) -> Self {
        self.change = Some(Box::new(f));
        self
    }

    pub fn on_select(mut self, f: impl Fn(Option<&T>) + 'static) -> Self {
        self.select = Some(Box::new(f));
        self
    }
}

impl<T: TreeItem> TreeHooks<T> for Hooks<T> {
    fn render_node(&self, request: &mut RenderNode<'_, T>) -> bool {
        self.render_node.as_ref().is_some_and(|f| f(request))
    }

    fn render_mirror(&self, request: &mut RenderMirror<'_, T>) -> bool {
        self.render_mirror.as_ref().is_some_and(|f| f(request))
    }

    fn move_node(&self, request: &mut MoveNode<'_, T>) -> bool {
        self.move_node.as_ref().is_none_or(|f| f(request))
    }

    fn on_change(&self) {
        if let Some(f) = &self.change {
            f();
        }
    }

    fn on_select(&self, selected: Option<&T>) {
        if let Some(f) = &self.select {
            f(selected);
        }
    }
}
