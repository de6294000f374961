//! Pixels backend for debug overlays.
//!
//! [`PixelsDrawScope`] rasterizes overlay draw calls straight into an RGBA8
//! frame such as the one exposed by `pixels::Pixels::frame_mut`.

mod error;
mod raster;
mod text;

pub use error::RasterError;
pub use raster::{PixelsDrawScope, CLEAR_COLOR};
pub use text::FontTextMeasurer;
