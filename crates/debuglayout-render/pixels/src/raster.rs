//! Alpha-blended rasterization of overlay draw calls.

use debuglayout::DrawScope;
use debuglayout_graphics::{Color, Point, Rect, Size, TextStyle};

use crate::error::RasterError;
use crate::text::FontTextMeasurer;

/// Fill used for the content pass when no content callback is installed.
pub const CLEAR_COLOR: [u8; 4] = [18, 18, 24, 255];

type ContentPainter<'a> = dyn FnMut(&mut [u8], u32, u32) + 'a;

/// [`DrawScope`] over an RGBA8 frame of `width * height` pixels.
pub struct PixelsDrawScope<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
    density: f32,
    font: Option<&'a FontTextMeasurer>,
    content: Option<&'a mut ContentPainter<'a>>,
}

impl<'a> PixelsDrawScope<'a> {
    pub fn new(frame: &'a mut [u8], width: u32, height: u32) -> Result<Self, RasterError> {
        let required = width as usize * height as usize * 4;
        if frame.len() < required {
            return Err(RasterError::FrameTooSmall {
                width,
                height,
                len: frame.len(),
            });
        }
        Ok(Self {
            frame,
            width,
            height,
            density: 1.0,
            font: None,
            content: None,
        })
    }

    /// Density used to scale label font sizes.
    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    /// Font for labels; without one, text draws are skipped.
    pub fn with_font(mut self, font: &'a FontTextMeasurer) -> Self {
        self.font = Some(font);
        self
    }

    /// Paints the host content when the overlay asks for it.
    pub fn with_content(mut self, content: &'a mut ContentPainter<'a>) -> Self {
        self.content = Some(content);
        self
    }

    fn frame_rect(&self) -> Rect {
        Rect::from_size(Size::new(self.width as f32, self.height as f32))
    }

    fn fill_rect(&mut self, color: Color, rect: Rect) {
        let color = color.to_array();
        if color[3] <= 0.0 {
            return;
        }
        let Some(clipped) = rect.intersect(self.frame_rect()) else {
            return;
        };
        // Pixels whose centers fall inside the rect.
        let start_x = (clipped.x - 0.5).ceil().max(0.0) as u32;
        let start_y = (clipped.y - 0.5).ceil().max(0.0) as u32;
        let end_x = ((clipped.right() - 0.5).ceil().max(0.0) as u32).min(self.width);
        let end_y = ((clipped.bottom() - 0.5).ceil().max(0.0) as u32).min(self.height);
        for py in start_y..end_y {
            for px in start_x..end_x {
                self.blend(px, py, color, color[3]);
            }
        }
    }

    fn blend(&mut self, px: u32, py: u32, color: [f32; 4], alpha: f32) {
        let idx = (py as usize * self.width as usize + px as usize) * 4;
        let existing = &mut self.frame[idx..idx + 4];
        for i in 0..3 {
            let dst = existing[i] as f32 / 255.0;
            let blended = color[i] * alpha + dst * (1.0 - alpha);
            existing[i] = (blended.clamp(0.0, 1.0) * 255.0).round() as u8;
        }
        let dst_alpha = existing[3] as f32 / 255.0;
        let out_alpha = alpha + dst_alpha * (1.0 - alpha);
        existing[3] = (out_alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    }
}

impl DrawScope for PixelsDrawScope<'_> {
    fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }

    fn draw_content(&mut self) {
        match self.content.as_mut() {
            Some(content) => content(self.frame, self.width, self.height),
            None => {
                for chunk in self.frame.chunks_exact_mut(4) {
                    chunk.copy_from_slice(&CLEAR_COLOR);
                }
            }
        }
    }

    fn draw_line(&mut self, color: Color, stroke_width: f32, start: Point, end: Point) {
        if !stroke_width.is_finite() || stroke_width <= 0.0 {
            return;
        }
        let half = stroke_width / 2.0;
        if start.x == end.x {
            let top = start.y.min(end.y);
            let length = (end.y - start.y).abs();
            self.fill_rect(color, Rect::new(start.x - half, top, stroke_width, length));
            return;
        }
        if start.y == end.y {
            let left = start.x.min(end.x);
            let length = (end.x - start.x).abs();
            self.fill_rect(color, Rect::new(left, start.y - half, length, stroke_width));
            return;
        }

        // Diagonal segments are stamped one stroke-sized square per pixel step.
        let delta = end - start;
        let steps = delta.x.abs().max(delta.y.abs()).ceil().min(16_384.0) as u32;
        for step in 0..=steps {
            let t = step as f32 / steps as f32;
            let center = Point::new(start.x + delta.x * t, start.y + delta.y * t);
            self.fill_rect(
                color,
                Rect::new(center.x - half, center.y - half, stroke_width, stroke_width),
            );
        }
    }

    fn draw_rect(&mut self, color: Color, top_left: Point, size: Size) {
        self.fill_rect(color, Rect::from_origin_size(top_left, size));
    }

    fn draw_text(&mut self, text: &str, style: &TextStyle, top_left: Point) {
        let Some(font) = self.font else {
            log::trace!("no font installed, skipping label {text:?}");
            return;
        };
        let color = style.color.to_array();
        let font_px = style.font_size.to_px(self.density);
        let (width, height) = (self.width, self.height);
        font.draw(text, font_px, top_left, |px, py, coverage| {
            if px < 0 || py < 0 || px as u32 >= width || py as u32 >= height {
                return;
            }
            self.blend(px as u32, py as u32, color, coverage * color[3]);
        });
    }
}

#[cfg(test)]
#[path = "tests/raster_tests.rs"]
mod tests;
