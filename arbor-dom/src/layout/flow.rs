use std::collections::HashMap;

use super::Rect;
use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Direction, Position, Size};

pub type LayoutResult = HashMap<String, Rect>;

pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    layout_element(element, available, &mut result);
    result
}

fn layout_element(element: &Element, available: Rect, result: &mut LayoutResult) {
    // Absolute elements ignore the space they were given
    if element.position == Position::Absolute {
        let (width, height) = intrinsic_size(element);
        let rect = Rect::new(
            element.left.unwrap_or(0),
            element.top.unwrap_or(0),
            width,
            height,
        );
        place(element, rect, result);
        return;
    }

    let (intrinsic_width, intrinsic_height) = intrinsic_size(element);
    let width = resolve(element.width, available.width, intrinsic_width);
    let height = resolve(element.height, available.height, intrinsic_height);
    place(
        element,
        Rect::new(available.x, available.y, width, height),
        result,
    );
}

fn resolve(size: Size, available: u16, intrinsic: u16) -> u16 {
    match size {
        Size::Fixed(n) => n.min(available),
        Size::Fill => available,
        Size::Auto => intrinsic.min(available),
    }
}

fn place(element: &Element, rect: Rect, result: &mut LayoutResult) {
    result.insert(element.id.clone(), rect);
    layout_children(element, rect, result);
}

fn layout_children(element: &Element, rect: Rect, result: &mut LayoutResult) {
    let children = element.content.children();
    if children.is_empty() {
        return;
    }

    let inner = rect.shrink(0, 0, 0, element.indent);

    match element.direction {
        Direction::Column => layout_column(element, children, inner, result),
        Direction::Row => layout_row(element, children, inner, result),
    }

    // Absolute children render on top and take no space in the flow
    for child in children.iter().filter(|c| c.position == Position::Absolute) {
        layout_element(child, inner, result);
    }
}

fn layout_column(element: &Element, children: &[Element], inner: Rect, result: &mut LayoutResult) {
    let mut y = inner.y;

    for child in children.iter().filter(|c| c.position != Position::Absolute) {
        let (_, intrinsic_height) = intrinsic_size(child);
        let remaining = inner.bottom().saturating_sub(y);
        let height = match child.height {
            Size::Fixed(n) => n,
            Size::Fill => remaining,
            Size::Auto => intrinsic_height,
        }
        .min(remaining);
        // Column children stretch across unless sized explicitly
        let width = match child.width {
            Size::Fixed(n) => n.min(inner.width),
            Size::Fill | Size::Auto => inner.width,
        };

        place(child, Rect::new(inner.x, y, width, height), result);
        y = y.saturating_add(height).saturating_add(element.gap);
    }
}

fn layout_row(element: &Element, children: &[Element], inner: Rect, result: &mut LayoutResult) {
    let flow: Vec<&Element> = children
        .iter()
        .filter(|c| c.position != Position::Absolute)
        .collect();

    let gap_total = element
        .gap
        .saturating_mul(clamp(flow.len().saturating_sub(1)));
    let mut fixed_total = gap_total;
    let mut fill_count = 0u16;
    for child in &flow {
        match child.width {
            Size::Fixed(n) => fixed_total = fixed_total.saturating_add(n),
            Size::Auto => fixed_total = fixed_total.saturating_add(intrinsic_size(child).0),
            Size::Fill => fill_count = fill_count.saturating_add(1),
        }
    }
    let fill_width = inner
        .width
        .saturating_sub(fixed_total)
        .checked_div(fill_count)
        .unwrap_or(0);

    let mut x = inner.x;
    for child in flow {
        let width = match child.width {
            Size::Fixed(n) => n,
            Size::Auto => intrinsic_size(child).0,
            Size::Fill => fill_width,
        }
        .min(inner.right().saturating_sub(x));
        let height = match child.height {
            Size::Fixed(n) => n.min(inner.height),
            Size::Fill | Size::Auto => inner.height,
        };

        place(child, Rect::new(x, inner.y, width, height), result);
        x = x.saturating_add(width).saturating_add(element.gap);
    }
}

/// Cells beyond `u16::MAX` cannot be laid out; they are cut at the edge.
fn clamp(cells: usize) -> u16 {
    u16::try_from(cells).unwrap_or(u16::MAX)
}

/// Natural size of an element before the parent constrains it.
pub fn intrinsic_size(element: &Element) -> (u16, u16) {
    let (width, height) = match &element.content {
        Content::None => (0, 0),
        Content::Text(text) => {
            let width = text.lines().map(display_width).max().unwrap_or(0);
            (clamp(width), clamp(text.lines().count().max(1)))
        }
        Content::Input { value, placeholder } => {
            let shown = display_width(value).max(placeholder.as_deref().map_or(0, display_width));
            // Brackets around the value
            (clamp(shown).saturating_add(2), 1)
        }
        Content::Checkbox => (3, 1),
        Content::Children(children) => {
            let flow = children.iter().filter(|c| c.position != Position::Absolute);
            let count = clamp(flow.clone().count());
            let gaps = element.gap.saturating_mul(count.saturating_sub(1));
            let sizes = flow.map(intrinsic_size);
            let (width, height) = match element.direction {
                Direction::Column => sizes.fold((0u16, gaps), |(w, h), (cw, ch)| {
                    (w.max(cw), h.saturating_add(ch))
                }),
                Direction::Row => sizes.fold((gaps, 0u16), |(w, h), (cw, ch)| {
                    (w.saturating_add(cw), h.max(ch))
                }),
            };
            (width.saturating_add(element.indent), height)
        }
    };

    let width = match element.width {
        Size::Fixed(n) => n,
        _ => width,
    };
    let height = match element.height {
        Size::Fixed(n) => n,
        _ => height,
    };
    (width, height)
}
