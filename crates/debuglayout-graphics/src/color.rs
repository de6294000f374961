//! RGBA colors with components in `0.0..=1.0`.

/// Straight (non-premultiplied) RGBA color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const TRANSPARENT: Color = Color(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Color = Color(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color(1.0, 1.0, 1.0, 1.0);
    pub const RED: Color = Color(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Color = Color(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Color = Color(0.0, 0.0, 1.0, 1.0);
    pub const MAGENTA: Color = Color(1.0, 0.0, 1.0, 1.0);

    /// Builds a color from a packed `0xAARRGGBB` value.
    pub fn from_argb(argb: u32) -> Self {
        Color(
            ((argb >> 16) & 0xFF) as f32 / 255.0,
            ((argb >> 8) & 0xFF) as f32 / 255.0,
            (argb & 0xFF) as f32 / 255.0,
            ((argb >> 24) & 0xFF) as f32 / 255.0,
        )
    }

    /// Builds an opaque color from 8-bit channels.
    pub fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Color(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    pub fn red(&self) -> f32 {
        self.0
    }

    pub fn green(&self) -> f32 {
        self.1
    }

    pub fn blue(&self) -> f32 {
        self.2
    }

    pub fn alpha(&self) -> f32 {
        self.3
    }

    /// Returns the same color with the alpha channel replaced.
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Color(self.0, self.1, self.2, alpha)
    }

    /// Components clamped to the unit range.
    pub fn to_array(self) -> [f32; 4] {
        [
            self.0.clamp(0.0, 1.0),
            self.1.clamp(0.0, 1.0),
            self.2.clamp(0.0, 1.0),
            self.3.clamp(0.0, 1.0),
        ]
    }

    pub fn to_rgba8(self) -> [u8; 4] {
        self.to_array().map(|channel| (channel * 255.0).round() as u8)
    }
}

#[cfg(test)]
#[path = "tests/color_tests.rs"]
mod tests;
