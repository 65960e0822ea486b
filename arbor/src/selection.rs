//! Hierarchy-wide single selection.

use std::cell::RefCell;
use std::rc::Rc;

use crate::item::ItemKey;

/// Selection cell shared by a tree and every subtree below it.
pub(crate) type SharedSelection<T> = Rc<RefCell<Selection<T>>>;

/// The single selected item of a tree hierarchy, if any.
#[derive(Debug)]
pub(crate) struct Selection<T> {
    current: Option<(ItemKey, T)>,
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<T> Selection<T> {
    pub(crate) fn shared() -> SharedSelection<T> {
        Rc::new(RefCell::new(Self::default()))
    }

    pub(crate) fn key(&self) -> Option<ItemKey> {
        self.current.as_ref().map(|(key, _)| *key)
    }

    pub(crate) fn data(&self) -> Option<&T> {
        self.current.as_ref().map(|(_, data)| data)
    }

    pub(crate) fn is_selected(&self, key: ItemKey) -> bool {
        self.key() == Some(key)
    }

    /// Replace the selection.
    pub(crate) fn select(&mut self, key: ItemKey, data: T) {
        self.current = Some((key, data));
    }

    /// Clear the selection. Returns whether anything was selected.
    pub(crate) fn clear(&mut self) -> bool {
        self.current.take().is_some()
    }
}
