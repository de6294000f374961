//! Number of bands a layer draws.

/// Either a fixed number of bands or as many as fit into the axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BandCount {
    /// Exactly this many bands. Zero draws nothing.
    Fixed(u32),
    /// Fill the axis with as many bands as fit.
    Auto,
}

impl BandCount {
    pub fn fixed(count: u32) -> Self {
        BandCount::Fixed(count)
    }

    pub fn is_auto(self) -> bool {
        matches!(self, BandCount::Auto)
    }
}

impl From<u32> for BandCount {
    fn from(count: u32) -> Self {
        BandCount::Fixed(count)
    }
}
