use debuglayout_graphics::{Color, DisplayMetrics, Dp, TextStyle};
use debuglayout_layout::Axis;

use super::LayerContext;
use crate::defaults;
use crate::scope::DrawScope;

/// Upper bound on ticks per ruler.
pub const MAX_RULER_TICKS: usize = 4_096;

/// Distance between two ruler ticks, in the unit the labels are printed in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RulerStep {
    Dp(f32),
    Px(f32),
    Mm(f32),
    Inch(f32),
}

impl RulerStep {
    /// Step length in its own unit; tick labels are multiples of this.
    pub fn value(self) -> f32 {
        match self {
            RulerStep::Dp(value)
            | RulerStep::Px(value)
            | RulerStep::Mm(value)
            | RulerStep::Inch(value) => value,
        }
    }

    /// Step length in device pixels along `axis`.
    pub fn to_px(self, metrics: &DisplayMetrics, axis: Axis) -> f32 {
        let horizontal = axis.is_horizontal();
        match self {
            RulerStep::Dp(value) => Dp(value).to_px(metrics.density),
            RulerStep::Px(value) => value,
            RulerStep::Mm(value) => metrics.mm_to_px(value, horizontal),
            RulerStep::Inch(value) => metrics.inches_to_px(value, horizontal),
        }
    }
}

/// Edge (or center) of the axis the ruler counts from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZeroAlignment {
    /// Left for horizontal rulers, top for vertical ones.
    Start,
    Center,
    /// Right for horizontal rulers, bottom for vertical ones.
    End,
}

/// Location of the `0` tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RulerZeroPoint {
    pub alignment: ZeroAlignment,
    pub offset: Dp,
}

impl RulerZeroPoint {
    pub const ZERO: RulerZeroPoint = RulerZeroPoint {
        alignment: ZeroAlignment::Start,
        offset: Dp(0.0),
    };

    pub const CENTER: RulerZeroPoint = RulerZeroPoint {
        alignment: ZeroAlignment::Center,
        offset: Dp(0.0),
    };

    pub fn new(alignment: ZeroAlignment, offset: Dp) -> Self {
        Self { alignment, offset }
    }

    fn to_px(self, extent: f32, density: f32) -> f32 {
        let base = match self.alignment {
            ZeroAlignment::Start => 0.0,
            ZeroAlignment::Center => extent / 2.0,
            ZeroAlignment::End => extent,
        };
        base + self.offset.to_px(density)
    }
}

impl Default for RulerZeroPoint {
    fn default() -> Self {
        Self::ZERO
    }
}

/// A strip along the top (horizontal) or start (vertical) edge with labelled ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RulerLayer {
    pub step: RulerStep,
    pub zero_point: RulerZeroPoint,
    pub thickness: Dp,
    /// Every n-th tick is drawn longer. Zero disables major ticks.
    pub major_every: u32,
    pub background: Color,
    pub tick_color: Color,
    pub tick_stroke_width: Dp,
    pub label_style: TextStyle,
}

impl Default for RulerLayer {
    fn default() -> Self {
        Self {
            step: defaults::ruler::STEP,
            zero_point: RulerZeroPoint::ZERO,
            thickness: defaults::ruler::THICKNESS,
            major_every: defaults::ruler::MAJOR_EVERY,
            background: defaults::ruler::BACKGROUND,
            tick_color: defaults::ruler::TICK_COLOR,
            tick_stroke_width: defaults::ruler::TICK_STROKE_WIDTH,
            label_style: defaults::ruler::LABEL_STYLE,
        }
    }
}

impl RulerLayer {
    pub fn new(step: RulerStep, zero_point: RulerZeroPoint) -> Self {
        Self {
            step,
            zero_point,
            ..Self::default()
        }
    }

    pub fn draw<S: DrawScope + ?Sized>(
        &self,
        scope: &mut S,
        axis: Axis,
        context: &LayerContext<'_>,
    ) {
        let density = context.density();
        let size = scope.size();
        let extent = axis.main(size);
        if !extent.is_finite() || extent <= 0.0 {
            log::debug!("ruler skipped for extent {extent}");
            return;
        }
        let thickness = self.thickness.to_px(density);
        scope.draw_rect(
            self.background,
            axis.point(0.0, 0.0),
            axis.size(extent, thickness),
        );

        let step = self.step.to_px(&context.metrics, axis);
        if !step.is_finite() || step <= 0.0 {
            log::debug!("ruler step {step}px is not positive, drawing background only");
            return;
        }
        let zero = self.zero_point.to_px(extent, density);
        let first = ((0.0 - zero) / step).ceil();
        let last = ((extent - zero) / step).floor();
        if !first.is_finite() || !last.is_finite() || last < first {
            return;
        }

        let stroke_width = self.tick_stroke_width.to_px(density);
        let padding = defaults::ruler::LABEL_PADDING.to_px(density);
        let major_length = thickness * 0.5;
        let minor_length = thickness * 0.25;

        let mut ticks: Vec<Tick> = tick_indices(first, last)
            .map(|index| {
                let position = zero + index as f32 * step;
                let label = context
                    .marker_formatter
                    .format(index as f32 * self.step.value());
                let bounds = context
                    .text_measurer
                    .measure(&label, &self.label_style, density);
                Tick {
                    index,
                    position,
                    label,
                    label_start: position + padding,
                    label_width: axis.main(bounds),
                    labelled: false,
                }
            })
            .collect();
        place_labels(&mut ticks, padding);

        for tick in &ticks {
            let is_major = self.major_every > 0 && tick.index % i64::from(self.major_every) == 0;
            let length = if is_major { major_length } else { minor_length };
            scope.draw_line(
                self.tick_color,
                stroke_width,
                axis.point(tick.position, 0.0),
                axis.point(tick.position, length),
            );
            if tick.labelled {
                scope.draw_text(
                    &tick.label,
                    &self.label_style,
                    axis.point(tick.label_start, major_length),
                );
            }
        }
    }
}

struct Tick {
    index: i64,
    position: f32,
    label: String,
    label_start: f32,
    label_width: f32,
    labelled: bool,
}

/// Tick indices in `first..=last`, thinned to every n-th index so that at most
/// [`MAX_RULER_TICKS`] remain. Index 0 is always kept when it is in range.
fn tick_indices(first: f32, last: f32) -> impl Iterator<Item = i64> {
    let first = first.max(-1e15) as i64;
    let last = last.min(1e15) as i64;
    let count = last - first + 1;
    let max = MAX_RULER_TICKS as i64;
    let stride = if count > max {
        let stride = (count + max - 1) / max;
        log::debug!("ruler has {count} ticks, drawing every {stride}th");
        stride
    } else {
        1
    };
    let start = first + (-first).rem_euclid(stride);
    (0..max)
        .map(move |n| start + n * stride)
        .take_while(move |index| *index <= last)
}

/// Marks the labels to draw, walking outward from the zero tick so it always
/// keeps its label. A label is skipped when it would overlap its neighbour
/// closer to zero.
fn place_labels(ticks: &mut [Tick], padding: f32) {
    let pivot = ticks.partition_point(|tick| tick.index < 0);

    let mut previous_end = f32::NEG_INFINITY;
    for tick in &mut ticks[pivot..] {
        if tick.label_start >= previous_end + padding {
            tick.labelled = true;
            previous_end = tick.label_start + tick.label_width;
        }
    }

    let mut next_start = ticks[pivot..]
        .iter()
        .find(|tick| tick.labelled)
        .map_or(f32::INFINITY, |tick| tick.label_start);
    for tick in ticks[..pivot].iter_mut().rev() {
        if tick.label_start + tick.label_width + padding <= next_start {
            tick.labelled = true;
            next_start = tick.label_start;
        }
    }
}

#[cfg(test)]
#[path = "tests/ruler_tests.rs"]
mod tests;
