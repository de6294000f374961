//! Glyph-accurate text measurement and drawing with `rusttype`.

use std::sync::Arc;

use debuglayout::TextMeasurer;
use debuglayout_graphics::{Point, Size, TextStyle};
use rusttype::{point, Font, Scale};

use crate::error::RasterError;

/// Measures and rasterizes labels with a TrueType font.
#[derive(Clone)]
pub struct FontTextMeasurer {
    font: Arc<Font<'static>>,
}

impl FontTextMeasurer {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, RasterError> {
        let font = Font::try_from_vec(bytes).ok_or(RasterError::FontRejected)?;
        Ok(Self {
            font: Arc::new(font),
        })
    }

    pub(crate) fn draw(
        &self,
        text: &str,
        font_px: f32,
        top_left: Point,
        mut plot: impl FnMut(i32, i32, f32),
    ) {
        let scale = Scale::uniform(font_px);
        let v_metrics = self.font.v_metrics(scale);
        let offset = point(top_left.x, top_left.y + v_metrics.ascent);
        for glyph in self.font.layout(text, scale, offset) {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, coverage| {
                    plot(bb.min.x + gx as i32, bb.min.y + gy as i32, coverage);
                });
            }
        }
    }
}

impl TextMeasurer for FontTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle, density: f32) -> Size {
        let scale = Scale::uniform(style.font_size.to_px(density));
        let v_metrics = self.font.v_metrics(scale);
        let height = (v_metrics.ascent - v_metrics.descent).ceil();
        let mut min_x = f32::INFINITY;
        let mut max_x = 0.0_f32;
        for glyph in self.font.layout(text, scale, point(0.0, 0.0)) {
            if let Some(bb) = glyph.pixel_bounding_box() {
                min_x = min_x.min(bb.min.x as f32);
                max_x = max_x.max(bb.max.x as f32);
            }
        }
        let width = if min_x.is_infinite() {
            max_x
        } else {
            (max_x - min_x).max(0.0)
        };
        Size::new(width, height)
    }
}

impl std::fmt::Debug for FontTextMeasurer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontTextMeasurer").finish_non_exhaustive()
    }
}
