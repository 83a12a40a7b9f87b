use crate::types::{Rgb, TextStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
    /// Right half of a double-width character drawn in the cell before.
    pub wide_continuation: bool,
}

impl Cell {
    pub fn blank(bg: Rgb) -> Self {
        Self {
            char: ' ',
            fg: bg,
            bg,
            style: TextStyle::new(),
            wide_continuation: false,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank(Rgb::new(0, 0, 0))
    }
}
