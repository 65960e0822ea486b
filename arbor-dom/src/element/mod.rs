mod content;
mod node;
mod property;

pub use content::Content;
pub use node::Element;
pub use property::{Property, Validator};

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    find_first(root, &|el: &Element| el.id == id)
}

/// Path of elements from `root` down to the element with the given ID.
pub fn find_path<'a>(root: &'a Element, id: &str) -> Option<Vec<&'a Element>> {
    if root.id == id {
        return Some(vec![root]);
    }

    for child in root.content.children() {
        if let Some(mut path) = find_path(child, id) {
            path.insert(0, root);
            return Some(path);
        }
    }

    None
}

pub(crate) fn find_first<'a>(
    element: &'a Element,
    pred: &impl Fn(&Element) -> bool,
) -> Option<&'a Element> {
    if pred(element) {
        return Some(element);
    }
    element
        .content
        .children()
        .iter()
        .find_map(|child| find_first(child, pred))
}

pub(crate) fn find_first_mut<'a>(
    element: &'a mut Element,
    pred: &impl Fn(&Element) -> bool,
) -> Option<&'a mut Element> {
    if pred(element) {
        return Some(element);
    }
    if let Content::Children(children) = &mut element.content {
        for child in children {
            if let Some(found) = find_first_mut(child, pred) {
                return Some(found);
            }
        }
    }
    None
}

/// Set a property on the first element in `element`'s subtree that supports it.
///
/// Returns false when nothing in the subtree understands the property.
pub fn set_child_property(element: &mut Element, property: Property, value: bool) -> bool {
    match find_first_mut(element, &|el: &Element| el.supports(property)) {
        Some(target) => {
            target.set_property(property, value);
            true
        }
        None => false,
    }
}

/// Apply [`set_child_property`] to every given element.
pub fn set_children_property<'a>(
    elements: impl IntoIterator<Item = &'a mut Element>,
    property: Property,
    value: bool,
) {
    for element in elements {
        set_child_property(element, property, value);
    }
}

/// First element in `element`'s subtree that supports the property.
pub fn get_child_by_property(element: &Element, property: Property) -> Option<&Element> {
    find_first(element, &|el: &Element| el.supports(property))
}

/// For each given element, the first descendant-or-self that supports the property.
pub fn list_children_by_property<'a>(
    elements: impl IntoIterator<Item = &'a Element>,
    property: Property,
) -> impl Iterator<Item = &'a Element> {
    elements
        .into_iter()
        .filter_map(move |element| get_child_by_property(element, property))
}
