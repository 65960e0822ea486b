use super::Element;

#[derive(Debug, Clone, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<Element>),
    /// Single-line text field. Renders as `[value]`.
    Input {
        value: String,
        placeholder: Option<String>,
    },
    /// Renders as `[x]` or `[ ]` depending on the element's `checked` property.
    Checkbox,
}

impl Content {
    pub fn children(&self) -> &[Element] {
        match self {
            Self::Children(children) => children,
            _ => &[],
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}
