use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::{char_width, truncate_to_width};
use crate::types::{Position, TextStyle};

pub fn render_to_buffer(element: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    render_element(element, layout, buf, TextStyle::new());
}

fn render_element(element: &Element, layout: &LayoutResult, buf: &mut Buffer, inherited: TextStyle) {
    let Some(rect) = layout.get(&element.id) else {
        return;
    };

    let mut style = inherited.merge(element.style);
    if element.disabled {
        style = style.dim();
    }

    match &element.content {
        Content::None => {}
        Content::Text(text) => {
            for (row, line) in text.lines().enumerate() {
                let y = rect.y.saturating_add(row as u16);
                if y >= rect.bottom() {
                    break;
                }
                render_line(line, Rect::new(rect.x, y, rect.width, 1), buf, style);
            }
        }
        Content::Input { value, placeholder } => {
            let (shown, style) = match placeholder {
                Some(placeholder) if value.is_empty() => (placeholder.as_str(), style.dim()),
                _ => (value.as_str(), style),
            };
            render_line(&format!("[{shown}]"), *rect, buf, style);
        }
        Content::Checkbox => {
            let mark = if element.checked { "[x]" } else { "[ ]" };
            render_line(mark, *rect, buf, style);
        }
        Content::Children(children) => {
            // Flow children first so absolute ones paint over them
            for child in children.iter().filter(|c| c.position != Position::Absolute) {
                render_element(child, layout, buf, style);
            }
            for child in children.iter().filter(|c| c.position == Position::Absolute) {
                render_element(child, layout, buf, style);
            }
        }
    }
}

fn render_line(text: &str, rect: Rect, buf: &mut Buffer, style: TextStyle) {
    if rect.is_empty() {
        return;
    }

    let text = truncate_to_width(text, usize::from(rect.width));
    let mut x = rect.x;
    for ch in text.chars() {
        let width = char_width(ch) as u16;
        if x.saturating_add(width) > rect.right() {
            break;
        }
        buf.set(x, rect.y, Cell::new(ch, style));
        for offset in 1..width {
            buf.set(x + offset, rect.y, Cell::continuation(style));
        }
        x = x.saturating_add(width.max(1));
    }
}
