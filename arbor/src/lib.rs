//! A draggable, selectable, expandable tree widget.
//!
//! A [`Tree`] renders caller-supplied items as [`Node`]s, each owning a
//! nested tree of its own. Items can be reordered by dragging within their
//! level, a single item of the whole hierarchy can be selected, and the tree
//! takes part in form validation.
//!
//! Rendering produces an [`arbor_dom::Element`] tree. Events fired on that
//! element tree go back in through [`Tree::dispatch`].
//!
//! # Example
//!
//! ```
//! use arbor::{Tree, TreeConfig, TreeValue};
//!
//! let mut tree = Tree::new(TreeConfig::new().selectable());
//! let key = tree.add_node("docs").key();
//! tree.node_mut(key).unwrap().add_node("readme.md");
//!
//! assert!(tree.toggle_selection(key));
//! assert_eq!(tree.value(), TreeValue::Selection(Some("docs")));
//! ```

mod config;
mod error;
mod events;
mod hooks;
mod item;
mod node;
mod selection;
mod tree;

pub use arbor_dom as dom;

pub use config::{Flag, Flags, TreeConfig};
pub use error::TreeError;
pub use events::{node_element_id, parse_element_id, part_element_id, EventResult, Part};
pub use hooks::{Hooks, MoveNode, NoHooks, RenderMirror, RenderNode, TreeHooks};
pub use item::{ItemKey, TreeItem};
pub use node::{ActiveSlots, Node, NodeParts};
pub use tree::{Tree, TreeValue};
