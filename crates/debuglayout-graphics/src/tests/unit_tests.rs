use super::*;

#[test]
fn dp_scales_with_density() {
    assert_eq!(Dp(16.0).to_px(2.5), 40.0);
    assert_eq!(DisplayMetrics::from_density(2.0).dp_to_px(Dp(8.0)), 16.0);
}

#[test]
fn from_density_uses_baseline_dpi() {
    let metrics = DisplayMetrics::from_density(2.0);
    assert_eq!(metrics.xdpi, 320.0);
    assert_eq!(metrics.ydpi, 320.0);
}

#[test]
fn millimeters_use_axis_dpi() {
    let metrics = DisplayMetrics::new(1.0, 254.0, 508.0);
    assert!((metrics.mm_to_px(1.0, true) - 10.0).abs() < 1e-4);
    assert!((metrics.mm_to_px(1.0, false) - 20.0).abs() < 1e-4);
    assert_eq!(metrics.inches_to_px(2.0, true), 508.0);
}
