//! Overlays selectable from the keyboard.

use debuglayout::graphics::{Color, Dp};
use debuglayout::{
    defaults, DebugLayout, GridLayer, GuidelineOffset, LargeLayoutRegions, RulerLayer, RulerStep,
    RulerZeroPoint, ZeroAlignment,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    Grid,
    ExtraSmall,
    Small,
    Medium,
    MediumLaptop,
    Large,
    Guidelines,
    Rulers,
    TextBaseline,
}

impl Preset {
    pub const ALL: [Preset; 9] = [
        Preset::Grid,
        Preset::ExtraSmall,
        Preset::Small,
        Preset::Medium,
        Preset::MediumLaptop,
        Preset::Large,
        Preset::Guidelines,
        Preset::Rulers,
        Preset::TextBaseline,
    ];

    /// Maps number keys `1..=9` to presets.
    pub fn from_digit(digit: u8) -> Option<Self> {
        let index = usize::from(digit).checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Preset::Grid => "8dp grid",
            Preset::ExtraSmall => "extra small, 4 columns",
            Preset::Small => "small, 8 columns",
            Preset::Medium => "medium, 12 columns",
            Preset::MediumLaptop => "medium laptop, 12 columns",
            Preset::Large => "large, 12 columns",
            Preset::Guidelines => "guidelines",
            Preset::Rulers => "rulers",
            Preset::TextBaseline => "4dp text baseline",
        }
    }

    pub fn configure(self, layout: &mut DebugLayout, regions: bool) {
        match self {
            Preset::Grid => {
                layout.grid(GridLayer::default());
            }
            Preset::ExtraSmall => {
                layout.extra_small_screen_4_columns(regions);
            }
            Preset::Small => {
                layout.small_screen_8_columns(regions);
            }
            Preset::Medium => {
                layout.medium_screen_12_columns(regions);
            }
            Preset::MediumLaptop => {
                layout.medium_laptop_screen_12_columns(regions);
            }
            Preset::Large => {
                let regions = if regions {
                    LargeLayoutRegions::Expanded
                } else {
                    LargeLayoutRegions::Off
                };
                layout.large_screen_12_columns(regions);
            }
            Preset::Guidelines => {
                let color = defaults::guideline::COLOR;
                let stroke = defaults::guideline::STROKE_WIDTH;
                layout
                    .guideline_from_start(Dp(16.0), color, stroke)
                    .guideline_from_end(Dp(16.0), color, stroke)
                    .guideline_from_top(GuidelineOffset::percent(0.25), color, stroke)
                    .guideline_from_bottom(GuidelineOffset::percent(0.25), color, stroke)
                    .guideline_center_horizontal(Dp(0.0), Color::RED, stroke)
                    .guideline_center_vertical(Dp(0.0), Color::RED, stroke);
            }
            Preset::Rulers => {
                let centered = RulerZeroPoint {
                    alignment: ZeroAlignment::Center,
                    offset: Dp(0.0),
                };
                layout
                    .grid(GridLayer::new(Dp(10.0)).with_color(Color::BLACK.with_alpha(0.08)))
                    .horizontal_ruler(RulerLayer::default())
                    .vertical_ruler(RulerLayer::new(RulerStep::Mm(5.0), centered));
            }
            Preset::TextBaseline => {
                layout
                    .rows_text_4px(Dp(0.0))
                    .columns_stretch(1, Dp(16.0), Dp(0.0), defaults::COLOR_PRIMARY);
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/preset_tests.rs"]
mod tests;
