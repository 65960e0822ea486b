//! Event results and element addressing.
//!
//! Every element a node renders carries an id of the form
//! `node:<key>[:<part>]`, which is how dispatched events find their way back
//! to the owning node.

use crate::item::ItemKey;

/// Outcome of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventResult {
    /// Event was not handled; default behaviour applies.
    #[default]
    Ignored,
    /// Event was handled; default behaviour is suppressed.
    Consumed,
    /// A drag session started.
    StartDrag,
}

impl EventResult {
    pub fn is_handled(self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// The rendered parts of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    /// The whole node: entry row plus attached subtree.
    Row,
    /// The row holding the node's affordances.
    Entry,
    Dragger,
    Checker,
    Opener,
    Content,
}

impl Part {
    fn suffix(self) -> Option<&'static str> {
        match self {
            Part::Row => None,
            Part::Entry => Some("entry"),
            Part::Dragger => Some("dragger"),
            Part::Checker => Some("checker"),
            Part::Opener => Some("opener"),
            Part::Content => Some("content"),
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "entry" => Some(Part::Entry),
            "dragger" => Some(Part::Dragger),
            "checker" => Some(Part::Checker),
            "opener" => Some(Part::Opener),
            "content" => Some(Part::Content),
            _ => None,
        }
    }
}

/// Id of the element rendered for a whole node.
pub fn node_element_id(key: ItemKey) -> String {
    format!("node:{key}")
}

/// Id of the element rendered for one part of a node.
pub fn part_element_id(key: ItemKey, part: Part) -> String {
    match part.suffix() {
        Some(suffix) => format!("node:{key}:{suffix}"),
        None => node_element_id(key),
    }
}

/// Recover the node key and part from a rendered element id.
pub fn parse_element_id(id: &str) -> Option<(ItemKey, Part)> {
    let mut segments = id.split(':');
    if segments.next()? != "node" {
        return None;
    }
    let key = ItemKey::parse(segments.next()?)?;
    let part = match segments.next() {
        None => Part::Row,
        Some(suffix) => Part::from_suffix(suffix)?,
    };
    if segments.next().is_some() {
        return None;
    }
    Some((key, part))
}
