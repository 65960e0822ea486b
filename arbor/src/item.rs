//! Item identity.

use std::fmt;

use uuid::Uuid;

/// Data that can be displayed in a [`Tree`](crate::Tree).
///
/// `Display` supplies the default text rendering, `PartialEq` is used only to
/// find an entry when a selection is assigned by value. Identity inside the
/// tree is always the [`ItemKey`] minted when the item was added.
pub trait TreeItem: Clone + PartialEq + fmt::Display + 'static {}

impl<T> TreeItem for T where T: Clone + PartialEq + fmt::Display + 'static {}

/// Identity token for one added item.
///
/// Two additions of equal data get distinct keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemKey(Uuid);

impl ItemKey {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a key from its string form.
    pub fn parse(s: &str) -> Option<Self> {
        Uuid::parse_str(s).ok().map(Self)
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
