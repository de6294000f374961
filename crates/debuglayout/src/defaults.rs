//! Default values for every overlay aid.

use debuglayout_graphics::{Color, Dp, Sp, TextStyle};
use debuglayout_layout::BandCount;

use crate::layer::{GuidelineOffset, RulerStep};

pub const COLOR_PRIMARY: Color = Color(0.914, 0.118, 0.388, 0.2);
pub const COLOR_SECONDARY: Color = Color(0.129, 0.588, 0.953, 0.2);
pub const COLOR_TERTIARY: Color = Color(0.298, 0.686, 0.314, 0.2);
pub const COLOR_GUIDELINES: Color = Color(1.0, 0.0, 1.0, 1.0);

pub mod grid {
    use super::*;

    pub const SIZE: Dp = Dp(8.0);
    pub const COLOR: Color = Color(0.914, 0.118, 0.388, 0.3);
    pub const STROKE_WIDTH: Dp = Dp(1.0);
}

pub mod column {
    use super::*;

    pub const DEFAULT_COLUMNS: BandCount = BandCount::Fixed(4);
    pub const MARGIN: Dp = Dp(16.0);
    pub const GUTTER: Dp = Dp(16.0);
    pub const OFFSET: Dp = Dp(0.0);
    pub const COLOR: Color = COLOR_PRIMARY;
}

pub mod row {
    use super::*;

    pub const DEFAULT_ROWS: BandCount = BandCount::Fixed(4);
    pub const MARGIN: Dp = Dp(0.0);
    pub const GUTTER: Dp = Dp(16.0);
    pub const OFFSET: Dp = Dp(0.0);
    pub const COLOR: Color = COLOR_SECONDARY;
}

pub mod guideline {
    use super::*;

    pub const COLOR: Color = COLOR_GUIDELINES;
    pub const STROKE_WIDTH: Dp = Dp(1.0);
    pub const HORIZONTAL_OFFSET: GuidelineOffset = GuidelineOffset::Dp(Dp(16.0));
    pub const VERTICAL_OFFSET: GuidelineOffset = GuidelineOffset::Dp(Dp(16.0));
}

pub mod ruler {
    use super::*;

    pub const STEP: RulerStep = RulerStep::Dp(10.0);
    pub const THICKNESS: Dp = Dp(24.0);
    pub const MAJOR_EVERY: u32 = 5;
    pub const BACKGROUND: Color = Color(1.0, 1.0, 1.0, 0.7);
    pub const TICK_COLOR: Color = Color(0.0, 0.0, 0.0, 0.87);
    pub const TICK_STROKE_WIDTH: Dp = Dp(1.0);
    pub const LABEL_PADDING: Dp = Dp(2.0);
    pub const LABEL_STYLE: TextStyle = TextStyle::new(Sp(8.0), Color(0.0, 0.0, 0.0, 0.87));
}
