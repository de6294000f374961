//! Contracts the overlay draws against.
//!
//! The host rendering pipeline implements [`DrawScope`]; text measurement is
//! injected separately through [`TextMeasurer`].

use std::sync::Arc;

use debuglayout_graphics::{Color, Point, Size, TextStyle};

/// A drawing surface of known size, in device pixels.
pub trait DrawScope {
    /// Size of the area the overlay covers.
    fn size(&self) -> Size;

    /// Draws the content the overlay is attached to.
    fn draw_content(&mut self);

    /// Draws a stroked line centered on the segment `start..end`.
    fn draw_line(&mut self, color: Color, stroke_width: f32, start: Point, end: Point);

    /// Fills an axis-aligned rectangle.
    fn draw_rect(&mut self, color: Color, top_left: Point, size: Size);

    /// Draws a single line of text with its layout box anchored at `top_left`.
    fn draw_text(&mut self, text: &str, style: &TextStyle, top_left: Point);
}

/// Measures single-line text for label placement.
pub trait TextMeasurer {
    /// Returns the layout bounds of `text` rendered with `style` at `density`.
    fn measure(&self, text: &str, style: &TextStyle, density: f32) -> Size;
}

pub type SharedTextMeasurer = Arc<dyn TextMeasurer + Send + Sync>;

/// Fixed-advance measurer used when the host does not provide one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ApproximateTextMeasurer {
    /// Glyph advance as a fraction of the font size.
    pub advance_ratio: f32,
    /// Line height as a fraction of the font size.
    pub line_height_ratio: f32,
}

impl Default for ApproximateTextMeasurer {
    fn default() -> Self {
        Self {
            advance_ratio: 0.6,
            line_height_ratio: 1.2,
        }
    }
}

impl TextMeasurer for ApproximateTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle, density: f32) -> Size {
        let font_px = style.font_size.to_px(density);
        Size {
            width: text.chars().count() as f32 * font_px * self.advance_ratio,
            height: font_px * self.line_height_ratio,
        }
    }
}
