use debuglayout_graphics::{Color, Dp, Point};

use crate::defaults;
use crate::scope::DrawScope;

/// Distance of a guideline from its reference edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GuidelineOffset {
    /// Absolute distance.
    Dp(Dp),
    /// Fraction (`0.0..=1.0`) of the axis the offset is measured along.
    Percent(f32),
}

impl GuidelineOffset {
    pub fn percent(value: f32) -> Self {
        GuidelineOffset::Percent(value)
    }

    /// Resolves the offset against an axis of `extent` pixels.
    pub fn to_px(self, extent: f32, density: f32) -> f32 {
        match self {
            GuidelineOffset::Dp(dp) => dp.to_px(density),
            GuidelineOffset::Percent(fraction) => fraction * extent,
        }
    }
}

impl From<Dp> for GuidelineOffset {
    fn from(dp: Dp) -> Self {
        GuidelineOffset::Dp(dp)
    }
}

/// Where a guideline is placed.
///
/// `Start`/`End` and `CenterHorizontal` produce vertical lines positioned on
/// the x axis; `Top`/`Bottom` and `CenterVertical` produce horizontal lines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GuidelinePosition {
    Start(GuidelineOffset),
    End(GuidelineOffset),
    Top(GuidelineOffset),
    Bottom(GuidelineOffset),
    /// Vertical line at the horizontal center, shifted along x by `offset`.
    CenterHorizontal { offset: Dp },
    /// Horizontal line at the vertical center, shifted along y by `offset`.
    CenterVertical { offset: Dp },
}

impl Default for GuidelinePosition {
    fn default() -> Self {
        GuidelinePosition::Start(defaults::guideline::HORIZONTAL_OFFSET)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GuidelineLayer {
    pub position: GuidelinePosition,
    pub color: Color,
    pub stroke_width: Dp,
}

impl Default for GuidelineLayer {
    fn default() -> Self {
        Self {
            position: GuidelinePosition::default(),
            color: defaults::guideline::COLOR,
            stroke_width: defaults::guideline::STROKE_WIDTH,
        }
    }
}

impl GuidelineLayer {
    pub fn new(position: GuidelinePosition) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Vertical guideline at the default distance from the start edge.
    pub fn from_start() -> Self {
        Self::new(GuidelinePosition::Start(defaults::guideline::HORIZONTAL_OFFSET))
    }

    /// Horizontal guideline at the default distance from the top edge.
    pub fn from_top() -> Self {
        Self::new(GuidelinePosition::Top(defaults::guideline::VERTICAL_OFFSET))
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
        let size = scope.size();
        let stroke_width = self.stroke_width.to_px(density);
        let half_stroke = stroke_width / 2.0;

        match self.position {
            GuidelinePosition::Top(offset) => {
                let y = offset.to_px(size.height, density) - half_stroke;
                self.draw_horizontal(scope, stroke_width, y);
            }
            GuidelinePosition::Bottom(offset) => {
                let y = size.height - half_stroke - offset.to_px(size.height, density);
                self.draw_horizontal(scope, stroke_width, y);
            }
            GuidelinePosition::Start(offset) => {
                let x = offset.to_px(size.width, density) - half_stroke;
                self.draw_vertical(scope, stroke_width, x);
            }
            GuidelinePosition::End(offset) => {
                let x = size.width - half_stroke - offset.to_px(size.width, density);
                self.draw_vertical(scope, stroke_width, x);
            }
            GuidelinePosition::CenterHorizontal { offset } => {
                let x = size.width / 2.0 - half_stroke + offset.to_px(density);
                self.draw_vertical(scope, stroke_width, x);
            }
            GuidelinePosition::CenterVertical { offset } => {
                let y = size.height / 2.0 - half_stroke + offset.to_px(density);
                self.draw_horizontal(scope, stroke_width, y);
            }
        }
    }

    fn draw_horizontal<S: DrawScope + ?Sized>(&self, scope: &mut S, stroke_width: f32, y: f32) {
        if !y.is_finite() {
            return;
        }
        let width = scope.size().width;
        scope.draw_line(
            self.color,
            stroke_width,
            Point::new(0.0, y),
            Point::new(width - 1.0, y),
        );
    }

    fn draw_vertical<S: DrawScope + ?Sized>(&self, scope: &mut S, stroke_width: f32, x: f32) {
        if !x.is_finite() {
            return;
        }
        let height = scope.size().height;
        scope.draw_line(
            self.color,
            stroke_width,
            Point::new(x, 0.0),
            Point::new(x, height - 1.0),
        );
    }
}

#[cfg(test)]
#[path = "tests/guideline_tests.rs"]
mod tests;
