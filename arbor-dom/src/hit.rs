use crate::element::Element;
use crate::layout::LayoutResult;

/// Find the deepest clickable element at the given coordinates.
/// Returns None if no clickable element contains the point.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_test_element(layout, root, x, y, &|el: &Element| el.clickable)
}

/// Find any element (clickable or not) at the given coordinates.
/// Returns the deepest element containing the point.
pub fn hit_test_any(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_test_element(layout, root, x, y, &|_: &Element| true)
}

fn hit_test_element(
    layout: &LayoutResult,
    element: &Element,
    x: u16,
    y: u16,
    accept: &impl Fn(&Element) -> bool,
) -> Option<String> {
    if !element.pointer_events {
        return None;
    }

    // Check children in reverse order (last rendered = on top). Absolute
    // children may sit outside their parent's rect, so they are tried first.
    for child in element.content.children().iter().rev() {
        if let Some(id) = hit_test_element(layout, child, x, y, accept) {
            return Some(id);
        }
    }

    let rect = layout.get(&element.id)?;
    if rect.contains(x, y) && accept(element) {
        Some(element.id.clone())
    } else {
        None
    }
}
