mod flow;
mod rect;

pub use flow::{intrinsic_size, layout, LayoutResult};
pub use rect::Rect;
