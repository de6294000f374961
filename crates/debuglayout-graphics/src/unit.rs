//! Device-independent units and the display metrics that resolve them.

use std::ops::{Add, Mul, Neg, Sub};

/// Density-independent pixels. One `Dp` is one pixel at density `1.0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dp {
    pub const ZERO: Dp = Dp(0.0);

    pub fn value(self) -> f32 {
        self.0
    }

    pub fn to_px(self, density: f32) -> f32 {
        self.0 * density
    }
}

impl Add for Dp {
    type Output = Dp;

    fn add(self, rhs: Dp) -> Dp {
        Dp(self.0 + rhs.0)
    }
}

impl Sub for Dp {
    type Output = Dp;

    fn sub(self, rhs: Dp) -> Dp {
        Dp(self.0 - rhs.0)
    }
}

impl Mul<f32> for Dp {
    type Output = Dp;

    fn mul(self, rhs: f32) -> Dp {
        Dp(self.0 * rhs)
    }
}

impl Neg for Dp {
    type Output = Dp;

    fn neg(self) -> Dp {
        Dp(-self.0)
    }
}

/// Scale-independent pixels for font sizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Sp(pub f32);

impl Sp {
    pub fn to_px(self, density: f32) -> f32 {
        self.0 * density
    }
}

pub const MM_PER_INCH: f32 = 25.4;

/// Logical density baseline: a density of `1.0` corresponds to 160 dpi.
pub const BASELINE_DPI: f32 = 160.0;

/// Physical properties of the display the overlay is drawn on.
///
/// Supplied by the host platform; the overlay never queries the system itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayMetrics {
    /// Pixels per `Dp`.
    pub density: f32,
    /// Physical pixels per inch along the x axis.
    pub xdpi: f32,
    /// Physical pixels per inch along the y axis.
    pub ydpi: f32,
}

impl DisplayMetrics {
    pub const fn new(density: f32, xdpi: f32, ydpi: f32) -> Self {
        Self {
            density,
            xdpi,
            ydpi,
        }
    }

    /// Metrics for a display whose physical dpi matches the logical baseline.
    pub fn from_density(density: f32) -> Self {
        let dpi = density * BASELINE_DPI;
        Self::new(density, dpi, dpi)
    }

    pub fn dp_to_px(&self, dp: Dp) -> f32 {
        dp.to_px(self.density)
    }

    pub fn inches_to_px(&self, inches: f32, horizontal: bool) -> f32 {
        inches * if horizontal { self.xdpi } else { self.ydpi }
    }

    pub fn mm_to_px(&self, mm: f32, horizontal: bool) -> f32 {
        self.inches_to_px(mm / MM_PER_INCH, horizontal)
    }
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self::from_density(1.0)
    }
}

#[cfg(test)]
#[path = "tests/unit_tests.rs"]
mod tests;
