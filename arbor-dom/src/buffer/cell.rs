use crate::types::TextStyle;

/// One terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub symbol: char,
    pub style: TextStyle,
    /// Covered by the wide character to its left; never written out.
    pub continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank()
    }
}

impl Cell {
    pub const fn blank() -> Self {
        Self {
            symbol: ' ',
            style: TextStyle::new(),
            continuation: false,
        }
    }

    pub const fn new(symbol: char, style: TextStyle) -> Self {
        Self {
            symbol,
            style,
            continuation: false,
        }
    }

    /// The trailing half of a wide character.
    pub const fn continuation(style: TextStyle) -> Self {
        Self {
            symbol: ' ',
            style,
            continuation: true,
        }
    }
}
