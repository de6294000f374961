//! Arrangement calculator.

use debuglayout_graphics::Dp;

use crate::BandCount;

/// Upper bound on bands produced for a single axis.
pub const MAX_BANDS: usize = 16_384;

/// A resolved segment along one axis, in device pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    pub start: f32,
    pub size: f32,
}

impl Band {
    pub const fn new(start: f32, size: f32) -> Self {
        Self { start, size }
    }

    pub fn end(&self) -> f32 {
        self.start + self.size
    }
}

/// Describes how bands fill or populate an axis.
///
/// `Start`/`End` mean left/right for columns and top/bottom for rows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Arrangement {
    /// Equal bands filling `[margin, extent - margin]` with uniform gutters.
    Stretch { margin: Dp, gutter: Dp },
    /// Fixed-size bands packed from the leading edge.
    Start { band_size: Dp, offset: Dp, gutter: Dp },
    /// Fixed-size bands packed from the trailing edge.
    End { band_size: Dp, offset: Dp, gutter: Dp },
    /// Fixed-size bands centered on the axis midpoint.
    Center { band_size: Dp, gutter: Dp },
}

impl Arrangement {
    pub fn stretch(margin: Dp, gutter: Dp) -> Self {
        Arrangement::Stretch { margin, gutter }
    }

    pub fn start(band_size: Dp, offset: Dp, gutter: Dp) -> Self {
        Arrangement::Start {
            band_size,
            offset,
            gutter,
        }
    }

    pub fn end(band_size: Dp, offset: Dp, gutter: Dp) -> Self {
        Arrangement::End {
            band_size,
            offset,
            gutter,
        }
    }

    pub fn center(band_size: Dp, gutter: Dp) -> Self {
        Arrangement::Center { band_size, gutter }
    }

    /// Resolves this arrangement against `extent` pixels.
    ///
    /// Bands are returned in ascending start order. Invalid input (non-finite
    /// or negative extent, zero count) yields an empty vector.
    pub fn resolve(&self, extent: f32, count: BandCount, density: f32) -> Vec<Band> {
        resolve(extent, *self, count, density)
    }
}

/// Resolves `arrangement` into concrete bands along an axis of `extent` pixels.
pub fn resolve(extent: f32, arrangement: Arrangement, count: BandCount, density: f32) -> Vec<Band> {
    if !extent.is_finite() || extent < 0.0 || !density.is_finite() {
        log::debug!("skipping arrangement for degenerate extent {extent} (density {density})");
        return Vec::new();
    }
    let px = |dp: Dp| dp.to_px(density);

    let bands = match arrangement {
        Arrangement::Stretch { margin, gutter } => {
            let margin = px(margin);
            let gutter = px(gutter);
            let n = match count {
                BandCount::Fixed(n) => clamp_count(n as usize),
                BandCount::Auto => 1,
            };
            if n == 0 {
                return Vec::new();
            }
            let size = ((extent - 2.0 * margin - (n as f32 - 1.0) * gutter) / n as f32).max(0.0);
            fill(margin, size, gutter, n)
        }
        Arrangement::Start {
            band_size,
            offset,
            gutter,
        } => {
            let (size, offset, gutter) = (px(band_size).max(0.0), px(offset), px(gutter));
            let n = band_count(count, extent - offset, size, gutter);
            fill(offset, size, gutter, n)
        }
        Arrangement::End {
            band_size,
            offset,
            gutter,
        } => {
            let (size, offset, gutter) = (px(band_size).max(0.0), px(offset), px(gutter));
            let n = band_count(count, extent - offset, size, gutter);
            let span = span(size, gutter, n);
            fill(extent - offset - span, size, gutter, n)
        }
        Arrangement::Center { band_size, gutter } => {
            let (size, gutter) = (px(band_size).max(0.0), px(gutter));
            let n = band_count(count, extent, size, gutter);
            let span = span(size, gutter, n);
            fill(extent / 2.0 - span / 2.0, size, gutter, n)
        }
    };

    if bands.iter().any(|band| !band.start.is_finite() || !band.size.is_finite()) {
        log::debug!("arrangement {arrangement:?} produced non-finite bands, dropping");
        return Vec::new();
    }
    log::trace!("resolved {} bands over {extent}px", bands.len());
    bands
}

/// Number of bands for fixed-size arrangements. `available` is the room left
/// after the leading offset.
fn band_count(count: BandCount, available: f32, size: f32, gutter: f32) -> usize {
    match count {
        BandCount::Fixed(n) => clamp_count(n as usize),
        BandCount::Auto => {
            let step = size + gutter;
            if !(step > 0.0) || !available.is_finite() {
                return 0;
            }
            let fit = ((available + gutter) / step).floor();
            if fit <= 0.0 {
                0
            } else {
                clamp_count(fit.min(MAX_BANDS as f32) as usize)
            }
        }
    }
}

fn clamp_count(n: usize) -> usize {
    if n > MAX_BANDS {
        log::debug!("band count {n} capped to {MAX_BANDS}");
        MAX_BANDS
    } else {
        n
    }
}

fn span(size: f32, gutter: f32, n: usize) -> f32 {
    if n == 0 {
        0.0
    } else {
        n as f32 * size + (n as f32 - 1.0) * gutter
    }
}

fn fill(start: f32, size: f32, gutter: f32, n: usize) -> Vec<Band> {
    let step = size + gutter;
    (0..n)
        .map(|index| Band::new(start + index as f32 * step, size))
        .collect()
}

/// An arrangement paired with its band count, ready to be resolved on every draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrangementCalculator {
    arrangement: Arrangement,
    count: BandCount,
}

impl ArrangementCalculator {
    pub fn new(arrangement: Arrangement, count: BandCount) -> Self {
        Self { arrangement, count }
    }

    pub fn arrangement(&self) -> Arrangement {
        self.arrangement
    }

    pub fn count(&self) -> BandCount {
        self.count
    }

    pub fn arrange(&self, extent: f32, density: f32) -> Vec<Band> {
        resolve(extent, self.arrangement, self.count, density)
    }
}

#[cfg(test)]
#[path = "tests/arrangement_tests.rs"]
mod tests;
