use arbor_dom::{Element, Size};

use super::Tree;
use crate::config::Flag;
use crate::item::TreeItem;

impl<T: TreeItem> Tree<T> {
    /// Render the level: one element per node in entry order, followed by the
    /// drag preview while a drag is in progress.
    pub fn render(&self) -> Element {
        let mut root = Element::col().id(self.id.clone()).width(Size::Fill);
        root.slot = self.slot.clone();
        root.class = self.class.clone();
        if self.nested {
            root.indent = 2;
        }
        for flag in Flag::ALL {
            root.set_flag(flag.data_key(), self.flags.get(flag));
        }
        if let Some(name) = &self.name {
            root = root.data("name", name.clone());
        }
        for node in self.nodes() {
            root.append(node.render());
        }
        for element in self.drag_overlay() {
            root.append(element);
        }
        root
    }
}
