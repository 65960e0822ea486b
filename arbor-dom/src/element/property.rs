use std::fmt;
use std::rc::Rc;

use super::{Content, Element};

/// Boolean element properties that widgets push onto the elements they host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Checked,
    ReadOnly,
    Disabled,
    Required,
    Draggable,
}

impl Property {
    pub const ALL: [Property; 5] = [
        Property::Checked,
        Property::ReadOnly,
        Property::Disabled,
        Property::Required,
        Property::Draggable,
    ];
}

/// Custom validity check attached to an element.
#[derive(Clone)]
pub struct Validator(Rc<dyn Fn(&Element) -> bool>);

impl Validator {
    pub fn new(check: impl Fn(&Element) -> bool + 'static) -> Self {
        Self(Rc::new(check))
    }

    pub fn check(&self, element: &Element) -> bool {
        (self.0)(element)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validator(...)")
    }
}

impl Element {
    /// Whether this element understands the given property.
    ///
    /// `Disabled` and `Draggable` apply to any element; the form properties
    /// only to controls (inputs, checkboxes, or anything with a validator).
    pub fn supports(&self, property: Property) -> bool {
        let control = matches!(self.content, Content::Input { .. } | Content::Checkbox);
        match property {
            Property::Checked => matches!(self.content, Content::Checkbox),
            Property::ReadOnly | Property::Required => control || self.validator.is_some(),
            Property::Disabled | Property::Draggable => true,
        }
    }

    pub fn property(&self, property: Property) -> bool {
        match property {
            Property::Checked => self.checked,
            Property::ReadOnly => self.read_only,
            Property::Disabled => self.disabled,
            Property::Required => self.required,
            Property::Draggable => self.draggable,
        }
    }

    pub fn set_property(&mut self, property: Property, value: bool) {
        match property {
            Property::Checked => self.checked = value,
            Property::ReadOnly => self.read_only = value,
            Property::Disabled => self.disabled = value,
            Property::Required => self.required = value,
            Property::Draggable => self.draggable = value,
        }
    }

    /// Whether this element takes part in validity checks.
    pub fn exposes_validity(&self) -> bool {
        self.validator.is_some() || matches!(self.content, Content::Input { .. } | Content::Checkbox)
    }

    fn own_validity(&self) -> bool {
        // Disabled controls are exempt from validation.
        if self.disabled {
            return true;
        }
        let intrinsic = match &self.content {
            Content::Input { value, .. } => !self.required || !value.is_empty(),
            Content::Checkbox => !self.required || self.checked,
            _ => true,
        };
        intrinsic && self.validator.as_ref().is_none_or(|v| v.check(self))
    }

    /// Check validity of the first element (self or descendant) that exposes one.
    ///
    /// Returns `None` when nothing in this subtree takes part in validation.
    pub fn check_validity(&self) -> Option<bool> {
        super::find_first(self, &|el: &Element| el.exposes_validity()).map(Element::own_validity)
    }

    /// Like [`Element::check_validity`], but marks the checked element with
    /// `data-invalid` so renderers can show the failure.
    pub fn report_validity(&mut self) -> Option<bool> {
        let target = super::find_first_mut(self, &|el: &Element| el.exposes_validity())?;
        let valid = target.own_validity();
        if valid {
            target.data.remove("invalid");
        } else {
            log::debug!("Element '{}' reported invalid", target.id);
            target.data.insert("invalid".to_string(), "on".to_string());
        }
        Some(valid)
    }
}
