//! Developer overlay that draws grids, columns, rows, guidelines and rulers
//! above rendered UI content.
//!
//! Build an overlay with [`DebugLayout`] (or [`debug_layout`]) and call
//! [`DebugOverlay::draw`] from the host's draw pass with a [`DrawScope`].

mod builder;
mod debug;
pub mod defaults;
mod layer;
mod marker;
mod overlay;
mod presets;
mod renderer;
mod scope;

pub use builder::{debug_layout, DebugLayout};
pub use debug::{format_draw_ops, log_draw_ops};
pub use layer::{
    BandLayer, ColumnsArrangement, DebugLayer, GridLayer, GuidelineLayer, GuidelineOffset,
    GuidelinePosition, LayerContext, RowsArrangement, RulerLayer, RulerStep, RulerZeroPoint,
    ZeroAlignment, MAX_GRID_LINES, MAX_RULER_TICKS,
};
pub use marker::{
    platform_marker_formatter, DecimalMarkerFormatter, GroupedMarkerFormatter,
    MarkerTextFormatter, SharedMarkerFormatter,
};
pub use overlay::DebugOverlay;
pub use presets::{LargeLayoutRegions, TOOLBAR_HEIGHT};
pub use renderer::{DrawOp, RecordingDrawScope};
pub use scope::{ApproximateTextMeasurer, DrawScope, SharedTextMeasurer, TextMeasurer};

pub use debuglayout_graphics as graphics;
pub use debuglayout_layout::{Arrangement, Axis, Band, BandCount};

pub mod prelude {
    pub use crate::builder::{debug_layout, DebugLayout};
    pub use crate::layer::{
        BandLayer, GridLayer, GuidelineLayer, GuidelineOffset, GuidelinePosition, RulerLayer,
        RulerStep, RulerZeroPoint,
    };
    pub use crate::overlay::DebugOverlay;
    pub use crate::scope::{DrawScope, TextMeasurer};
    pub use debuglayout_graphics::prelude::*;
    pub use debuglayout_layout::prelude::*;
}
