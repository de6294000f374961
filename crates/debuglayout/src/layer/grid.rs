use debuglayout_graphics::{Color, Dp, Point};

use crate::defaults;
use crate::scope::DrawScope;

/// Upper bound on lines per direction, guards against tiny steps.
pub const MAX_GRID_LINES: usize = 16_384;

/// Evenly spaced horizontal and vertical lines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayer {
    pub size: Dp,
    pub color: Color,
    pub stroke_width: Dp,
}

impl Default for GridLayer {
    fn default() -> Self {
        Self {
            size: defaults::grid::SIZE,
            color: defaults::grid::COLOR,
            stroke_width: defaults::grid::STROKE_WIDTH,
        }
    }
}

impl GridLayer {
    pub fn new(size: Dp) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_stroke_width(mut self, stroke_width: Dp) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    pub fn draw<S: DrawScope + ?Sized>(&self, scope: &mut S, density: f32) {
        let step = self.size.to_px(density);
        if !step.is_finite() || step <= 0.0 {
            log::debug!("grid step {step}px is not positive, nothing to draw");
            return;
        }
        let stroke_width = self.stroke_width.to_px(density);
        let half_stroke = stroke_width / 2.0;
        let size = scope.size();

        let mut lines = 0;
        for x in line_positions(step, half_stroke, size.width) {
            scope.draw_line(
                self.color,
                stroke_width,
                Point::new(x, 0.0),
                Point::new(x, size.height - 1.0),
            );
            lines += 1;
        }
        for y in line_positions(step, half_stroke, size.height) {
            scope.draw_line(
                self.color,
                stroke_width,
                Point::new(0.0, y),
                Point::new(size.width - 1.0, y),
            );
            lines += 1;
        }
        log::trace!("grid drew {lines} lines with {step}px step");
    }
}

/// Line coordinates from the origin up to `extent`, shifted back by half a stroke.
fn line_positions(step: f32, half_stroke: f32, extent: f32) -> impl Iterator<Item = f32> {
    let limit = if extent.is_finite() { MAX_GRID_LINES } else { 0 };
    (0..limit)
        .map(move |index| index as f32 * step - half_stroke)
        .take_while(move |position| *position < extent)
}

#[cfg(test)]
#[path = "tests/grid_tests.rs"]
mod tests;
