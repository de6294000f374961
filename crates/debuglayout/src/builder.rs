//! Accumulates layers and seals them into a [`DebugOverlay`].

use std::sync::Arc;

use debuglayout_graphics::{Color, DisplayMetrics, Dp};
use debuglayout_layout::BandCount;

use crate::layer::{
    BandLayer, ColumnsArrangement, DebugLayer, GridLayer, GuidelineLayer, GuidelineOffset,
    GuidelinePosition, RowsArrangement, RulerLayer,
};
use crate::marker::{platform_marker_formatter, SharedMarkerFormatter};
use crate::overlay::DebugOverlay;
use crate::scope::{ApproximateTextMeasurer, SharedTextMeasurer};

/// Collects overlay layers in paint order.
///
/// [`build`](Self::build) snapshots the layers collected so far; later calls
/// on the builder never affect an overlay that was already built.
#[derive(Clone)]
pub struct DebugLayout {
    layers: Vec<DebugLayer>,
    metrics: DisplayMetrics,
    text_measurer: SharedTextMeasurer,
    marker_formatter: SharedMarkerFormatter,
}

impl DebugLayout {
    pub fn new(metrics: DisplayMetrics) -> Self {
        Self {
            layers: Vec::new(),
            metrics,
            text_measurer: Arc::new(ApproximateTextMeasurer::default()),
            marker_formatter: platform_marker_formatter(),
        }
    }

    pub fn with_text_measurer(mut self, text_measurer: SharedTextMeasurer) -> Self {
        self.text_measurer = text_measurer;
        self
    }

    pub fn with_marker_formatter(mut self, marker_formatter: SharedMarkerFormatter) -> Self {
        self.marker_formatter = marker_formatter;
        self
    }

    pub fn layers(&self) -> &[DebugLayer] {
        &self.layers
    }

    /// Appends an already configured layer.
    pub fn layer(&mut self, layer: DebugLayer) -> &mut Self {
        log::trace!("debug layout: adding {} layer", layer.name());
        self.layers.push(layer);
        self
    }

    pub fn grid(&mut self, layer: GridLayer) -> &mut Self {
        self.layer(DebugLayer::Grid(layer))
    }

    pub fn columns(&mut self, layer: BandLayer) -> &mut Self {
        self.layer(DebugLayer::Columns(layer))
    }

    pub fn rows(&mut self, layer: BandLayer) -> &mut Self {
        self.layer(DebugLayer::Rows(layer))
    }

    pub fn guideline(&mut self, layer: GuidelineLayer) -> &mut Self {
        self.layer(DebugLayer::Guideline(layer))
    }

    pub fn horizontal_ruler(&mut self, layer: RulerLayer) -> &mut Self {
        self.layer(DebugLayer::HorizontalRuler(layer))
    }

    pub fn vertical_ruler(&mut self, layer: RulerLayer) -> &mut Self {
        self.layer(DebugLayer::VerticalRuler(layer))
    }

    /// Seals a copy of the layers collected so far.
    pub fn build(&self) -> DebugOverlay {
        DebugOverlay::new(
            self.layers.clone(),
            self.metrics,
            Arc::clone(&self.text_measurer),
            Arc::clone(&self.marker_formatter),
        )
    }

    pub fn columns_from_left(
        &mut self,
        column_width: Dp,
        offset: Dp,
        gutter: Dp,
        columns: BandCount,
        color: Color,
    ) -> &mut Self {
        let arrangement = ColumnsArrangement::left(column_width, offset, gutter);
        self.columns(BandLayer::new(arrangement, columns, color))
    }

    pub fn columns_from_right(
        &mut self,
        column_width: Dp,
        offset: Dp,
        gutter: Dp,
        columns: BandCount,
        color: Color,
    ) -> &mut Self {
        let arrangement = ColumnsArrangement::right(column_width, offset, gutter);
        self.columns(BandLayer::new(arrangement, columns, color))
    }

    pub fn columns_from_center(
        &mut self,
        column_width: Dp,
        gutter: Dp,
        columns: BandCount,
        color: Color,
    ) -> &mut Self {
        let arrangement = ColumnsArrangement::center(column_width, gutter);
        self.columns(BandLayer::new(arrangement, columns, color))
    }

    pub fn columns_stretch(
        &mut self,
        columns: u32,
        margin: Dp,
        gutter: Dp,
        color: Color,
    ) -> &mut Self {
        let arrangement = ColumnsArrangement::stretch(margin, gutter);
        self.columns(BandLayer::new(arrangement, BandCount::Fixed(columns), color))
    }

    pub fn rows_from_top(
        &mut self,
        row_height: Dp,
        offset: Dp,
        gutter: Dp,
        rows: BandCount,
        color: Color,
    ) -> &mut Self {
        let arrangement = RowsArrangement::top(row_height, offset, gutter);
        self.rows(BandLayer::new(arrangement, rows, color))
    }

    pub fn rows_from_bottom(
        &mut self,
        row_height: Dp,
        offset: Dp,
        gutter: Dp,
        rows: BandCount,
        color: Color,
    ) -> &mut Self {
        let arrangement = RowsArrangement::bottom(row_height, offset, gutter);
        self.rows(BandLayer::new(arrangement, rows, color))
    }

    pub fn rows_from_center(
        &mut self,
        row_height: Dp,
        gutter: Dp,
        rows: BandCount,
        color: Color,
    ) -> &mut Self {
        let arrangement = RowsArrangement::center(row_height, gutter);
        self.rows(BandLayer::new(arrangement, rows, color))
    }

    pub fn rows_stretch(
        &mut self,
        margin: Dp,
        gutter: Dp,
        rows: BandCount,
        color: Color,
    ) -> &mut Self {
        let arrangement = RowsArrangement::stretch(margin, gutter);
        self.rows(BandLayer::new(arrangement, rows, color))
    }

    pub fn guideline_from_start(
        &mut self,
        offset: impl Into<GuidelineOffset>,
        color: Color,
        stroke_width: Dp,
    ) -> &mut Self {
        self.guideline_at(GuidelinePosition::Start(offset.into()), color, stroke_width)
    }

    pub fn guideline_from_end(
        &mut self,
        offset: impl Into<GuidelineOffset>,
        color: Color,
        stroke_width: Dp,
    ) -> &mut Self {
        self.guideline_at(GuidelinePosition::End(offset.into()), color, stroke_width)
    }

    pub fn guideline_from_top(
        &mut self,
        offset: impl Into<GuidelineOffset>,
        color: Color,
        stroke_width: Dp,
    ) -> &mut Self {
        self.guideline_at(GuidelinePosition::Top(offset.into()), color, stroke_width)
    }

    pub fn guideline_from_bottom(
        &mut self,
        offset: impl Into<GuidelineOffset>,
        color: Color,
        stroke_width: Dp,
    ) -> &mut Self {
        self.guideline_at(GuidelinePosition::Bottom(offset.into()), color, stroke_width)
    }

    pub fn guideline_center_horizontal(
        &mut self,
        offset: Dp,
        color: Color,
        stroke_width: Dp,
    ) -> &mut Self {
        self.guideline_at(GuidelinePosition::CenterHorizontal { offset }, color, stroke_width)
    }

    pub fn guideline_center_vertical(
        &mut self,
        offset: Dp,
        color: Color,
        stroke_width: Dp,
    ) -> &mut Self {
        self.guideline_at(GuidelinePosition::CenterVertical { offset }, color, stroke_width)
    }

    fn guideline_at(
        &mut self,
        position: GuidelinePosition,
        color: Color,
        stroke_width: Dp,
    ) -> &mut Self {
        self.guideline(GuidelineLayer {
            position,
            color,
            stroke_width,
        })
    }
}

/// Builds an overlay in one expression.
///
/// ```
/// use debuglayout::{debug_layout, GridLayer};
/// use debuglayout::graphics::{DisplayMetrics, Dp};
///
/// let overlay = debug_layout(DisplayMetrics::from_density(2.0), |layout| {
///     layout.grid(GridLayer::new(Dp(8.0)));
///     layout.columns_stretch(4, Dp(16.0), Dp(16.0), debuglayout::defaults::COLOR_PRIMARY);
/// });
/// assert_eq!(overlay.layers().len(), 2);
/// ```
pub fn debug_layout(
    metrics: DisplayMetrics,
    build: impl FnOnce(&mut DebugLayout),
) -> DebugOverlay {
    let mut layout = DebugLayout::new(metrics);
    build(&mut layout);
    layout.build()
}

#[cfg(test)]
#[path = "tests/builder_tests.rs"]
mod tests;
