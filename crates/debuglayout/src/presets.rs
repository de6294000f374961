//! Material 3 responsive layout grids.

use debuglayout_graphics::Dp;
use debuglayout_layout::BandCount;

use crate::builder::DebugLayout;
use crate::defaults::{self, COLOR_PRIMARY, COLOR_SECONDARY, COLOR_TERTIARY};

/// Navigation regions drawn by [`DebugLayout::large_screen_12_columns`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LargeLayoutRegions {
    #[default]
    Off,
    On,
    Expanded,
}

pub const TOOLBAR_HEIGHT: Dp = Dp(56.0);

impl DebugLayout {
    /// 4dp baseline grid to help align text.
    pub fn rows_text_4px(&mut self, offset: Dp) -> &mut Self {
        self.rows_from_top(
            Dp(1.0),
            offset,
            Dp(3.0),
            BandCount::Auto,
            defaults::COLOR_GUIDELINES.with_alpha(0.05),
        )
    }

    /// Toolbar area at the top.
    pub fn row_top_toolbar_area(&mut self, height: Dp) -> &mut Self {
        self.rows_from_top(
            height,
            defaults::row::OFFSET,
            defaults::row::GUTTER,
            BandCount::Fixed(1),
            COLOR_SECONDARY,
        )
    }

    /// Navigation bar area at the bottom.
    pub fn row_bottom_navigation_bar_area(&mut self, height: Dp) -> &mut Self {
        self.rows_from_bottom(
            height,
            defaults::row::OFFSET,
            defaults::row::GUTTER,
            BandCount::Fixed(1),
            COLOR_TERTIARY,
        )
    }

    /// Extra-small screen (0-599dp): 4 columns, 16dp margins and gutters.
    pub fn extra_small_screen_4_columns(&mut self, draw_layout_regions: bool) -> &mut Self {
        self.columns_stretch(4, Dp(16.0), Dp(16.0), COLOR_PRIMARY);
        if draw_layout_regions {
            self.row_top_toolbar_area(TOOLBAR_HEIGHT);
            self.row_bottom_navigation_bar_area(TOOLBAR_HEIGHT);
        }
        self
    }

    /// Extra-small screen (0-599dp): 3 columns, 16dp margins and gutters.
    pub fn extra_small_screen_3_columns(&mut self, draw_layout_regions: bool) -> &mut Self {
        self.columns_stretch(3, Dp(16.0), Dp(16.0), COLOR_PRIMARY);
        if draw_layout_regions {
            self.row_top_toolbar_area(TOOLBAR_HEIGHT);
            self.row_bottom_navigation_bar_area(TOOLBAR_HEIGHT);
        }
        self
    }

    /// Small screen (600-904dp): 8 columns, 32dp margins and gutters.
    ///
    /// With regions on, the columns shift right of a 72dp navigation rail.
    pub fn small_screen_8_columns(&mut self, draw_layout_regions: bool) -> &mut Self {
        if draw_layout_regions {
            self.columns_from_right(
                Dp(46.0),
                Dp(32.0),
                defaults::column::GUTTER,
                BandCount::Fixed(8),
                COLOR_PRIMARY,
            );
            self.navigation_rail(Dp(72.0));
            self.row_top_toolbar_area(TOOLBAR_HEIGHT)
        } else {
            self.columns_stretch(8, Dp(32.0), Dp(32.0), COLOR_PRIMARY)
        }
    }

    /// Medium screen (905-1239dp): 12 columns, 24dp margins and gutters.
    pub fn medium_screen_12_columns(&mut self, draw_layout_regions: bool) -> &mut Self {
        if draw_layout_regions {
            self.columns_from_right(
                Dp(52.0),
                Dp(32.0),
                defaults::column::GUTTER,
                BandCount::Fixed(12),
                COLOR_PRIMARY,
            );
            self.navigation_rail(Dp(72.0));
            self.row_top_toolbar_area(TOOLBAR_HEIGHT)
        } else {
            self.columns_stretch(12, Dp(24.0), Dp(24.0), COLOR_PRIMARY)
        }
    }

    /// Medium laptop screen (1240-1439dp): 12 columns, 24dp gutters, 200dp margins.
    pub fn medium_laptop_screen_12_columns(&mut self, draw_layout_regions: bool) -> &mut Self {
        self.columns_stretch(12, Dp(200.0), Dp(24.0), COLOR_PRIMARY);
        if draw_layout_regions {
            self.navigation_rail(Dp(72.0));
            self.row_top_toolbar_area(TOOLBAR_HEIGHT);
        }
        self
    }

    /// Large screen (1440dp+): 12 centered 72dp columns with 24dp gutters.
    pub fn large_screen_12_columns(&mut self, layout_regions: LargeLayoutRegions) -> &mut Self {
        self.columns_from_center(Dp(72.0), Dp(24.0), BandCount::Fixed(12), COLOR_PRIMARY);
        match layout_regions {
            LargeLayoutRegions::Off => {}
            LargeLayoutRegions::On => {
                self.navigation_rail(Dp(72.0));
                self.row_top_toolbar_area(TOOLBAR_HEIGHT);
            }
            LargeLayoutRegions::Expanded => {
                self.navigation_rail(Dp(256.0));
                self.row_top_toolbar_area(TOOLBAR_HEIGHT);
            }
        }
        self
    }

    fn navigation_rail(&mut self, width: Dp) -> &mut Self {
        self.columns_from_left(
            width,
            defaults::column::OFFSET,
            defaults::column::GUTTER,
            BandCount::Fixed(1),
            COLOR_TERTIARY,
        )
    }
}

#[cfg(test)]
#[path = "tests/presets_tests.rs"]
mod tests;
