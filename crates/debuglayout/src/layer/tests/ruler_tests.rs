use super::*;
use crate::layer::test_support::{context, scope, FORMATTER, MEASURER};
use crate::renderer::DrawOp;
use crate::scope::TextMeasurer;
use debuglayout_graphics::{Point, Size};

fn tick_lines(ops: &[DrawOp]) -> Vec<(Point, Point)> {
    ops.iter()
        .filter_map(|op| match op {
            DrawOp::Line { start, end, .. } => Some((*start, *end)),
            _ => None,
        })
        .collect()
}

#[test]
fn horizontal_ruler_draws_background_ticks_and_labels() {
    let mut surface = scope(200.0, 100.0);
    RulerLayer::default().draw(&mut surface, Axis::Horizontal, &context(1.0));

    assert_eq!(
        surface.operations()[0],
        DrawOp::Rect {
            color: defaults::ruler::BACKGROUND,
            top_left: Point::new(0.0, 0.0),
            size: Size::new(200.0, 24.0),
        }
    );
    let ticks = tick_lines(surface.operations());
    assert_eq!(ticks.len(), 21);
    assert_eq!(ticks[0], (Point::new(0.0, 0.0), Point::new(0.0, 12.0)));
    assert_eq!(ticks[1], (Point::new(10.0, 0.0), Point::new(10.0, 6.0)));
    assert_eq!(ticks[5].1, Point::new(50.0, 12.0));

    let labels: Vec<&str> = surface.texts().collect();
    assert_eq!(
        labels,
        vec!["0", "10", "30", "50", "70", "90", "110", "130", "150", "170", "190"]
    );
}

#[test]
fn labels_never_overlap() {
    let mut surface = scope(500.0, 100.0);
    RulerLayer::new(RulerStep::Px(3.0), RulerZeroPoint::ZERO).draw(
        &mut surface,
        Axis::Horizontal,
        &context(1.0),
    );
    let style = defaults::ruler::LABEL_STYLE;
    let mut previous_end = f32::NEG_INFINITY;
    for op in surface.operations() {
        if let DrawOp::Text { text, top_left, .. } = op {
            assert!(top_left.x >= previous_end);
            previous_end = top_left.x + MEASURER.measure(text, &style, 1.0).width;
        }
    }
}

#[test]
fn centered_zero_point_labels_negative_side() {
    let mut surface = scope(200.0, 100.0);
    RulerLayer::new(RulerStep::Dp(50.0), RulerZeroPoint::CENTER).draw(
        &mut surface,
        Axis::Horizontal,
        &context(1.0),
    );
    assert_eq!(tick_lines(surface.operations()).len(), 5);
    let labels: Vec<&str> = surface.texts().collect();
    assert_eq!(labels, vec!["-100", "-50", "0", "50", "100"]);
}

#[test]
fn dense_ruler_is_thinned_but_keeps_zero_and_far_edge() {
    let mut surface = scope(400.0, 100.0);
    RulerLayer::new(RulerStep::Px(0.01), RulerZeroPoint::CENTER).draw(
        &mut surface,
        Axis::Horizontal,
        &context(1.0),
    );
    let ticks = tick_lines(surface.operations());
    assert!(ticks.len() <= MAX_RULER_TICKS);
    assert!(ticks.first().map_or(false, |(start, _)| start.x < 1.0));
    assert!(ticks.last().map_or(false, |(start, _)| start.x > 399.0));
    assert!(ticks.iter().any(|(start, _)| start.x == 200.0));

    let zero_label = surface.operations().iter().find_map(|op| match op {
        DrawOp::Text { text, top_left, .. } if text == "0" => Some(*top_left),
        _ => None,
    });
    assert_eq!(zero_label, Some(Point::new(202.0, 12.0)));
}

#[test]
fn end_zero_point_counts_backwards() {
    let mut surface = scope(100.0, 100.0);
    let zero = RulerZeroPoint::new(ZeroAlignment::End, Dp(0.0));
    RulerLayer::new(RulerStep::Dp(50.0), zero).draw(&mut surface, Axis::Horizontal, &context(1.0));
    let labels: Vec<&str> = surface.texts().collect();
    assert_eq!(labels, vec!["-100", "-50", "0"]);
}

#[test]
fn vertical_ruler_runs_along_start_edge() {
    let mut surface = scope(100.0, 200.0);
    RulerLayer::default().draw(&mut surface, Axis::Vertical, &context(1.0));

    assert_eq!(
        surface.operations()[0],
        DrawOp::Rect {
            color: defaults::ruler::BACKGROUND,
            top_left: Point::new(0.0, 0.0),
            size: Size::new(24.0, 200.0),
        }
    );
    let ticks = tick_lines(surface.operations());
    assert_eq!(ticks.len(), 21);
    assert_eq!(ticks[1], (Point::new(0.0, 10.0), Point::new(6.0, 10.0)));
    let first_label = surface.operations().iter().find_map(|op| match op {
        DrawOp::Text { top_left, .. } => Some(*top_left),
        _ => None,
    });
    assert_eq!(first_label, Some(Point::new(12.0, 2.0)));
}

#[test]
fn millimeter_steps_use_axis_dpi() {
    let context = LayerContext {
        metrics: DisplayMetrics::new(1.0, 254.0, 508.0),
        text_measurer: &MEASURER,
        marker_formatter: &FORMATTER,
    };
    let layer = RulerLayer::new(RulerStep::Mm(1.0), RulerZeroPoint::ZERO);

    let mut horizontal = scope(105.0, 105.0);
    layer.draw(&mut horizontal, Axis::Horizontal, &context);
    assert_eq!(tick_lines(horizontal.operations()).len(), 11);

    let mut vertical = scope(105.0, 105.0);
    layer.draw(&mut vertical, Axis::Vertical, &context);
    assert_eq!(tick_lines(vertical.operations()).len(), 6);
}

#[test]
fn fractional_steps_are_formatted_with_one_decimal() {
    let mut surface = scope(40.0, 100.0);
    RulerLayer::new(RulerStep::Inch(0.05), RulerZeroPoint::ZERO).draw(
        &mut surface,
        Axis::Horizontal,
        &context(1.0),
    );
    let labels: Vec<&str> = surface.texts().collect();
    assert_eq!(labels.first(), Some(&"0"));
    assert!(labels.contains(&"0.1"));
}

#[test]
fn non_positive_step_draws_background_only() {
    for step in [RulerStep::Dp(0.0), RulerStep::Px(-4.0), RulerStep::Mm(f32::NAN)] {
        let mut surface = scope(200.0, 100.0);
        RulerLayer::new(step, RulerZeroPoint::ZERO).draw(
            &mut surface,
            Axis::Horizontal,
            &context(1.0),
        );
        assert_eq!(surface.operations().len(), 1);
        assert!(surface.operations()[0].is_rect());
    }
}
