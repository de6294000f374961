//! Drawable overlay layers.
//!
//! Every aid is a plain value; [`DebugLayer`] dispatches drawing by variant.

mod bands;
mod grid;
mod guideline;
mod ruler;

pub use bands::*;
pub use grid::*;
pub use guideline::*;
pub use ruler::*;

use debuglayout_graphics::DisplayMetrics;
use debuglayout_layout::Axis;

use crate::marker::MarkerTextFormatter;
use crate::scope::{DrawScope, TextMeasurer};

/// Collaborators shared by all layers for a single paint.
#[derive(Clone, Copy)]
pub struct LayerContext<'a> {
    pub metrics: DisplayMetrics,
    pub text_measurer: &'a dyn TextMeasurer,
    pub marker_formatter: &'a dyn MarkerTextFormatter,
}

impl LayerContext<'_> {
    pub fn density(&self) -> f32 {
        self.metrics.density
    }
}

/// One visual aid, compared by configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum DebugLayer {
    Grid(GridLayer),
    Rows(BandLayer),
    Columns(BandLayer),
    Guideline(GuidelineLayer),
    HorizontalRuler(RulerLayer),
    VerticalRuler(RulerLayer),
}

impl DebugLayer {
    pub fn draw<S: DrawScope + ?Sized>(&self, scope: &mut S, context: &LayerContext<'_>) {
        match self {
            DebugLayer::Grid(layer) => layer.draw(scope, context.density()),
            DebugLayer::Rows(layer) => layer.draw(scope, Axis::Vertical, context.density()),
            DebugLayer::Columns(layer) => layer.draw(scope, Axis::Horizontal, context.density()),
            DebugLayer::Guideline(layer) => layer.draw(scope, context.density()),
            DebugLayer::HorizontalRuler(layer) => layer.draw(scope, Axis::Horizontal, context),
            DebugLayer::VerticalRuler(layer) => layer.draw(scope, Axis::Vertical, context),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DebugLayer::Grid(_) => "grid",
            DebugLayer::Rows(_) => "rows",
            DebugLayer::Columns(_) => "columns",
            DebugLayer::Guideline(_) => "guideline",
            DebugLayer::HorizontalRuler(_) => "horizontal_ruler",
            DebugLayer::VerticalRuler(_) => "vertical_ruler",
        }
    }
}

impl From<GridLayer> for DebugLayer {
    fn from(layer: GridLayer) -> Self {
        DebugLayer::Grid(layer)
    }
}

impl From<GuidelineLayer> for DebugLayer {
    fn from(layer: GuidelineLayer) -> Self {
        DebugLayer::Guideline(layer)
    }
}
