//! Tree configuration types.

/// Boolean tree/node states that cascade down the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    Required,
    ReadOnly,
    Disabled,
    Draggable,
    Selectable,
}

impl Flag {
    /// Every flag, in a stable order.
    pub const ALL: [Flag; 5] = [
        Flag::Required,
        Flag::ReadOnly,
        Flag::Disabled,
        Flag::Draggable,
        Flag::Selectable,
    ];

    /// Name of the `data-*` attribute mirroring this flag on rendered elements.
    pub fn data_key(self) -> &'static str {
        match self {
            Flag::Required => "required",
            Flag::ReadOnly => "read-only",
            Flag::Disabled => "disabled",
            Flag::Draggable => "draggable",
            Flag::Selectable => "selectable",
        }
    }
}

/// Current value of every [`Flag`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    pub required: bool,
    pub read_only: bool,
    pub disabled: bool,
    pub draggable: bool,
    pub selectable: bool,
}

impl Flags {
    pub fn get(&self, flag: Flag) -> bool {
        match flag {
            Flag::Required => self.required,
            Flag::ReadOnly => self.read_only,
            Flag::Disabled => self.disabled,
            Flag::Draggable => self.draggable,
            Flag::Selectable => self.selectable,
        }
    }

    pub fn set(&mut self, flag: Flag, state: bool) {
        match flag {
            Flag::Required => self.required = state,
            Flag::ReadOnly => self.read_only = state,
            Flag::Disabled => self.disabled = state,
            Flag::Draggable => self.draggable = state,
            Flag::Selectable => self.selectable = state,
        }
    }

    /// Whether user interaction may change the tree.
    pub fn is_interactive(&self) -> bool {
        !self.disabled && !self.read_only
    }

    pub fn can_drag(&self) -> bool {
        self.draggable && self.is_interactive()
    }

    pub fn can_select(&self) -> bool {
        self.selectable && self.is_interactive()
    }
}

/// Construction-time tree configuration.
///
/// # Example
///
/// ```
/// use arbor::{Tree, TreeConfig};
///
/// let tree = Tree::new(
///     TreeConfig::new()
///         .name("files")
///         .value(vec!["a", "b"])
///         .draggable(),
/// );
/// assert_eq!(tree.length(), 2);
/// assert!(tree.draggable());
/// ```
#[derive(Debug, Clone)]
pub struct TreeConfig<T> {
    /// Form field name.
    pub name: Option<String>,
    /// Default items, added at construction and restored by `reset()`.
    pub value: Option<Vec<T>>,
    /// Class passed through to the rendered root element.
    pub class: Option<String>,
    /// Slot passed through to the rendered root element.
    pub slot: Option<String>,
    pub flags: Flags,
}

impl<T> Default for TreeConfig<T> {
    fn default() -> Self {
        Self {
            name: None,
            value: None,
            class: None,
            slot: None,
            flags: Flags::default(),
        }
    }
}

impl<T> TreeConfig<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the default items.
    pub fn value(mut self, items: Vec<T>) -> Self {
        self.value = Some(items);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn slot(mut self, slot: impl Into<String>) -> Self {
        self.slot = Some(slot.into());
        self
    }

    pub fn flag(mut self, flag: Flag, state: bool) -> Self {
        self.flags.set(flag, state);
        self
    }

    pub fn required(self) -> Self {
        self.flag(Flag::Required, true)
    }

    pub fn read_only(self) -> Self {
        self.flag(Flag::ReadOnly, true)
    }

    pub fn disabled(self) -> Self {
        self.flag(Flag::Disabled, true)
    }

    pub fn draggable(self) -> Self {
        self.flag(Flag::Draggable, true)
    }

    pub fn selectable(self) -> Self {
        self.flag(Flag::Selectable, true)
    }
}
