//! Sealed, immutable overlay produced by the builder.

use std::fmt;
use std::sync::Arc;

use debuglayout_graphics::DisplayMetrics;

use crate::layer::{BandLayer, DebugLayer, GridLayer, GuidelineLayer, LayerContext};
use crate::marker::{platform_marker_formatter, SharedMarkerFormatter};
use crate::scope::{ApproximateTextMeasurer, DrawScope, SharedTextMeasurer};

/// Ordered layers drawn above the host content on every paint.
///
/// Layers are painted in insertion order, later ones on top. Equality compares
/// the layers and display metrics so hosts can skip redundant invalidations.
#[derive(Clone)]
pub struct DebugOverlay {
    layers: Arc<[DebugLayer]>,
    metrics: DisplayMetrics,
    text_measurer: SharedTextMeasurer,
    marker_formatter: SharedMarkerFormatter,
}

impl DebugOverlay {
    pub(crate) fn new(
        layers: Vec<DebugLayer>,
        metrics: DisplayMetrics,
        text_measurer: SharedTextMeasurer,
        marker_formatter: SharedMarkerFormatter,
    ) -> Self {
        Self {
            layers: layers.into(),
            metrics,
            text_measurer,
            marker_formatter,
        }
    }

    /// Overlay with a single layer and default collaborators.
    pub fn from_layer(metrics: DisplayMetrics, layer: DebugLayer) -> Self {
        Self::new(
            vec![layer],
            metrics,
            Arc::new(ApproximateTextMeasurer::default()),
            platform_marker_formatter(),
        )
    }

    pub fn grid(metrics: DisplayMetrics, layer: GridLayer) -> Self {
        Self::from_layer(metrics, DebugLayer::Grid(layer))
    }

    pub fn columns(metrics: DisplayMetrics, layer: BandLayer) -> Self {
        Self::from_layer(metrics, DebugLayer::Columns(layer))
    }

    pub fn rows(metrics: DisplayMetrics, layer: BandLayer) -> Self {
        Self::from_layer(metrics, DebugLayer::Rows(layer))
    }

    pub fn guideline(metrics: DisplayMetrics, layer: GuidelineLayer) -> Self {
        Self::from_layer(metrics, DebugLayer::Guideline(layer))
    }

    pub fn layers(&self) -> &[DebugLayer] {
        &self.layers
    }

    pub fn metrics(&self) -> DisplayMetrics {
        self.metrics
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Draws the host content, then every layer in order.
    pub fn draw<S: DrawScope + ?Sized>(&self, scope: &mut S) {
        scope.draw_content();
        let context = LayerContext {
            metrics: self.metrics,
            text_measurer: self.text_measurer.as_ref(),
            marker_formatter: self.marker_formatter.as_ref(),
        };
        for layer in self.layers.iter() {
            layer.draw(scope, &context);
        }
    }
}

impl PartialEq for DebugOverlay {
    fn eq(&self, other: &Self) -> bool {
        self.metrics == other.metrics && self.layers == other.layers
    }
}

impl fmt::Debug for DebugOverlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DebugOverlay")
            .field("layers", &self.layers)
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "tests/overlay_tests.rs"]
mod tests;
