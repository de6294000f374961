//! Axis definitions for band layers.

use debuglayout_graphics::{Point, Size};

/// Identifies the axis bands are laid out along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Bands advance along x (columns).
    Horizontal,
    /// Bands advance along y (rows).
    Vertical,
}

impl Axis {
    /// Returns true if this axis is horizontal.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Axis::Horizontal)
    }

    /// Returns true if this axis is vertical.
    pub fn is_vertical(self) -> bool {
        matches!(self, Axis::Vertical)
    }

    /// Length of `size` along this axis.
    pub fn main(self, size: Size) -> f32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    /// Length of `size` across this axis.
    pub fn cross(self, size: Size) -> f32 {
        match self {
            Axis::Horizontal => size.height,
            Axis::Vertical => size.width,
        }
    }

    /// Builds a point from main/cross axis coordinates.
    pub fn point(self, main: f32, cross: f32) -> Point {
        match self {
            Axis::Horizontal => Point::new(main, cross),
            Axis::Vertical => Point::new(cross, main),
        }
    }

    /// Builds a size from main/cross axis extents.
    pub fn size(self, main: f32, cross: f32) -> Size {
        match self {
            Axis::Horizontal => Size::new(main, cross),
            Axis::Vertical => Size::new(cross, main),
        }
    }
}
