pub mod buffer;
pub mod element;
pub mod event;
pub mod gesture;
pub mod hit;
pub mod layout;
pub mod render;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use element::{
    find_element, find_path, get_child_by_property, list_children_by_property,
    set_child_property, set_children_property, Content, Element, Property, Validator,
};
pub use event::{DataTransfer, DropEffect, Event, MouseButton, Point};
pub use gesture::{DragGesture, PointerInput};
pub use hit::{hit_test, hit_test_any};
pub use layout::{layout, LayoutResult, Rect};
pub use render::render_to_buffer;
pub use terminal::Terminal;
pub use types::*;
