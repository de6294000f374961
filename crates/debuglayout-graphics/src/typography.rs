//! Text styling used for ruler labels.

use crate::{Color, Sp};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub font_size: Sp,
    pub color: Color,
}

impl TextStyle {
    pub const fn new(font_size: Sp, color: Color) -> Self {
        Self { font_size, color }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: Sp(12.0),
            color: Color::BLACK,
        }
    }
}
