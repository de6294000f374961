use super::*;
use crate::builder::DebugLayout;
use crate::renderer::{DrawOp, RecordingDrawScope};
use debuglayout_graphics::{Color, Dp, Size};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn overlay_is_shareable_across_threads() {
    assert_send_sync::<DebugOverlay>();
}

#[test]
fn content_is_drawn_before_layers() {
    let overlay = DebugOverlay::grid(DisplayMetrics::default(), GridLayer::new(Dp(50.0)));
    let mut scope = RecordingDrawScope::new(Size::new(100.0, 100.0));
    overlay.draw(&mut scope);

    assert_eq!(scope.operations()[0], DrawOp::Content);
    assert!(scope.operations()[1..].iter().all(DrawOp::is_line));
}

#[test]
fn empty_overlay_draws_only_content() {
    let overlay = DebugLayout::new(DisplayMetrics::default()).build();
    let mut scope = RecordingDrawScope::new(Size::new(100.0, 100.0));
    overlay.draw(&mut scope);

    assert!(overlay.is_empty());
    assert_eq!(scope.operations(), &[DrawOp::Content]);
}

#[test]
fn equality_is_structural() {
    let metrics = DisplayMetrics::from_density(2.0);
    let first = DebugOverlay::columns(metrics, BandLayer::columns());
    let second = DebugOverlay::columns(metrics, BandLayer::columns());
    assert_eq!(first, second);

    assert_ne!(first, DebugOverlay::rows(metrics, BandLayer::columns()));
    assert_ne!(
        first,
        DebugOverlay::columns(DisplayMetrics::from_density(1.0), BandLayer::columns())
    );
    assert_ne!(
        first,
        DebugOverlay::columns(metrics, BandLayer::columns().with_color(Color::RED))
    );
}

#[test]
fn single_layer_constructors_wrap_matching_variant() {
    let metrics = DisplayMetrics::default();
    let guideline = GuidelineLayer::default();
    assert_eq!(
        DebugOverlay::guideline(metrics, guideline).layers(),
        &[DebugLayer::Guideline(guideline)]
    );
    assert_eq!(
        DebugOverlay::rows(metrics, BandLayer::rows()).layers(),
        &[DebugLayer::Rows(BandLayer::rows())]
    );
}

#[test]
fn repeated_draws_are_identical() {
    let overlay = crate::builder::debug_layout(DisplayMetrics::default(), |layout| {
        layout.grid(GridLayer::default());
        layout.rows(BandLayer::rows());
        layout.horizontal_ruler(crate::layer::RulerLayer::default());
    });
    let mut first = RecordingDrawScope::new(Size::new(320.0, 240.0));
    let mut second = RecordingDrawScope::new(Size::new(320.0, 240.0));
    overlay.draw(&mut first);
    overlay.draw(&mut second);
    assert_eq!(first, second);
}
