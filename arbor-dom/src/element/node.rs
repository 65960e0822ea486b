use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{Content, Validator};
use crate::types::{Direction, Position, Size, TextStyle};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub id: String,
    /// Named slot this element is assigned to inside its host.
    pub slot: Option<String>,
    pub class: Option<String>,

    // Content
    pub content: Content,

    // Layout
    pub direction: Direction,
    pub width: Size,
    pub height: Size,
    pub gap: u16,
    /// Left padding applied to children.
    pub indent: u16,

    // Positioning
    pub position: Position,
    pub left: Option<u16>,
    pub top: Option<u16>,

    // Visual
    pub style: TextStyle,

    // Interaction
    pub clickable: bool,
    pub draggable: bool,
    /// When false, hit-testing passes through this element and its children.
    pub pointer_events: bool,

    // Form state
    pub disabled: bool,
    pub read_only: bool,
    pub required: bool,
    pub checked: bool,
    pub validator: Option<Validator>,

    // Custom data storage (`data-*` attributes)
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            slot: None,
            class: None,
            content: Content::None,
            direction: Direction::Column,
            width: Size::Auto,
            height: Size::Auto,
            gap: 0,
            indent: 0,
            position: Position::Static,
            left: None,
            top: None,
            style: TextStyle::new(),
            clickable: false,
            draggable: false,
            pointer_events: true,
            disabled: false,
            read_only: false,
            required: false,
            checked: false,
            validator: None,
            data: HashMap::new(),
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn col() -> Self {
        Self {
            id: generate_id("col"),
            direction: Direction::Column,
            ..Default::default()
        }
    }

    pub fn row() -> Self {
        Self {
            id: generate_id("row"),
            direction: Direction::Row,
            ..Default::default()
        }
    }

    /// Create a text input element.
    pub fn input(value: impl Into<String>) -> Self {
        Self {
            id: generate_id("input"),
            content: Content::Input {
                value: value.into(),
                placeholder: None,
            },
            clickable: true,
            ..Default::default()
        }
    }

    pub fn checkbox(checked: bool) -> Self {
        Self {
            id: generate_id("checkbox"),
            content: Content::Checkbox,
            checked,
            clickable: true,
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn slot(mut self, slot: impl Into<String>) -> Self {
        self.slot = Some(slot.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    // Layout
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: Size) -> Self {
        self.height = height;
        self
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    pub fn indent(mut self, indent: u16) -> Self {
        self.indent = indent;
        self
    }

    // Positioning
    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn left(mut self, left: u16) -> Self {
        self.left = Some(left);
        self
    }

    pub fn top(mut self, top: u16) -> Self {
        self.top = Some(top);
        self
    }

    // Visual
    pub fn style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    // Interaction
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    pub fn pointer_events(mut self, enabled: bool) -> Self {
        self.pointer_events = enabled;
        self
    }

    // Form state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn validator(mut self, check: impl Fn(&Element) -> bool + 'static) -> Self {
        self.validator = Some(Validator::new(check));
        self
    }

    /// Set the placeholder text for a text input.
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        if let Content::Input { placeholder, .. } = &mut self.content {
            *placeholder = Some(text.into());
        }
        self
    }

    /// Current value of a text input, if this is one.
    pub fn value(&self) -> Option<&str> {
        match &self.content {
            Content::Input { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn set_value(&mut self, new_value: impl Into<String>) {
        if let Content::Input { value, .. } = &mut self.content {
            *value = new_value.into();
        }
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    /// Set or remove a boolean `data-*` flag (`"on"` when set).
    pub fn set_flag(&mut self, key: &str, state: bool) {
        if state {
            self.data.insert(key.to_string(), "on".to_string());
        } else {
            self.data.remove(key);
        }
    }

    pub fn flag(mut self, key: &str, state: bool) -> Self {
        self.set_flag(key, state);
        self
    }

    pub fn has_flag(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        self.append(child);
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        for child in new_children {
            self.append(child);
        }
        self
    }

    pub fn append(&mut self, child: Element) {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
    }

    /// Remove all children (or any other content).
    pub fn clear(&mut self) {
        self.content = Content::None;
    }

    /// Remove the direct child with the given ID, returning it.
    pub fn remove_child(&mut self, id: &str) -> Option<Element> {
        let Content::Children(children) = &mut self.content else {
            return None;
        };
        let index = children.iter().position(|child| child.id == id)?;
        Some(children.remove(index))
    }
}
