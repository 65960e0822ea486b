mod enums;
mod style;

pub use enums::{Direction, Position, Size};
pub use style::TextStyle;
