//! Pure math/data for the debug layout overlay
//!
//! This crate contains geometry primitives, color definitions, text styles
//! and unit types shared by the arrangement calculator and the layers.

mod color;
mod geometry;
mod typography;
mod unit;

pub use color::*;
pub use geometry::*;
pub use typography::*;
pub use unit::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{Point, Rect, Size};
    pub use crate::typography::TextStyle;
    pub use crate::unit::{DisplayMetrics, Dp, Sp};
}
