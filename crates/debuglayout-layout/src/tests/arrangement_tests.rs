use super::*;

const EPSILON: f32 = 1e-3;

fn starts(bands: &[Band]) -> Vec<f32> {
    bands.iter().map(|band| band.start).collect()
}

#[test]
fn stretch_fills_content_area() {
    let bands = resolve(400.0, Arrangement::stretch(Dp(16.0), Dp(16.0)), BandCount::Fixed(4), 1.0);
    assert_eq!(starts(&bands), vec![16.0, 112.0, 208.0, 304.0]);
    assert!(bands.iter().all(|band| band.size == 80.0));
    assert_eq!(bands.last().map(Band::end), Some(384.0));
}

#[test]
fn stretch_invariants_hold_across_inputs() {
    for extent in [0.0, 1.0, 37.5, 400.0, 1920.0] {
        for n in 1..=12u32 {
            for gutter in [0.0, 8.0, 24.0] {
                for margin in [0.0, 16.0] {
                    let arrangement = Arrangement::stretch(Dp(margin), Dp(gutter));
                    let bands = resolve(extent, arrangement, BandCount::Fixed(n), 1.0);
                    assert_eq!(bands.len(), n as usize);
                    assert_eq!(bands[0].start, margin);
                    for pair in bands.windows(2) {
                        assert!(pair[0].size >= 0.0);
                        assert!(pair[0].start <= pair[1].start);
                        let expected_next = pair[0].start + pair[0].size + gutter;
                        assert!(
                            (expected_next - pair[1].start).abs() < EPSILON,
                            "extent={extent} n={n} gutter={gutter} margin={margin}"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn stretch_collapses_to_zero_width_when_margins_exceed_extent() {
    let bands = resolve(10.0, Arrangement::stretch(Dp(16.0), Dp(8.0)), BandCount::Fixed(3), 1.0);
    assert_eq!(bands.len(), 3);
    assert!(bands.iter().all(|band| band.size == 0.0));
    assert_eq!(starts(&bands), vec![16.0, 24.0, 32.0]);
}

#[test]
fn stretch_with_auto_count_covers_content_area() {
    let bands = resolve(200.0, Arrangement::stretch(Dp(20.0), Dp(8.0)), BandCount::Auto, 1.0);
    assert_eq!(bands, vec![Band::new(20.0, 160.0)]);
}

#[test]
fn start_packs_from_leading_edge() {
    let arrangement = Arrangement::start(Dp(50.0), Dp(10.0), Dp(20.0));
    let bands = resolve(400.0, arrangement, BandCount::Fixed(3), 1.0);
    assert_eq!(starts(&bands), vec![10.0, 80.0, 150.0]);
}

#[test]
fn end_packs_from_trailing_edge_in_ascending_order() {
    let arrangement = Arrangement::end(Dp(50.0), Dp(10.0), Dp(20.0));
    let bands = resolve(400.0, arrangement, BandCount::Fixed(2), 1.0);
    assert_eq!(starts(&bands), vec![270.0, 340.0]);
    assert_eq!(bands[1].end(), 390.0);
}

#[test]
fn auto_count_fills_axis_from_start() {
    let arrangement = Arrangement::start(Dp(1.0), Dp(0.0), Dp(3.0));
    let bands = resolve(100.0, arrangement, BandCount::Auto, 1.0);
    assert_eq!(bands.len(), 25);
    assert_eq!(bands[24].start, 96.0);
    assert!(bands[24].end() <= 100.0);
}

#[test]
fn auto_count_respects_offset() {
    let arrangement = Arrangement::end(Dp(10.0), Dp(30.0), Dp(0.0));
    let bands = resolve(100.0, arrangement, BandCount::Auto, 1.0);
    assert_eq!(bands.len(), 7);
    assert_eq!(bands[0].start, 0.0);
    assert_eq!(bands[6].end(), 70.0);
}

#[test]
fn auto_count_with_offset_beyond_extent_is_empty() {
    let arrangement = Arrangement::start(Dp(10.0), Dp(150.0), Dp(0.0));
    assert!(resolve(100.0, arrangement, BandCount::Auto, 1.0).is_empty());
}

#[test]
fn center_span_is_centered_on_midpoint() {
    for extent in [0.0, 99.0, 400.0, 1440.0] {
        for n in 1..=12u32 {
            let arrangement = Arrangement::center(Dp(72.0), Dp(24.0));
            let bands = resolve(extent, arrangement, n.into(), 1.0);
            let first = bands.first().map(|band| band.start).unwrap();
            let last = bands.last().map(Band::end).unwrap();
            assert!(((first + last) / 2.0 - extent / 2.0).abs() < EPSILON);
        }
    }
}

#[test]
fn center_with_auto_count_fits_extent() {
    let bands = resolve(100.0, Arrangement::center(Dp(10.0), Dp(10.0)), BandCount::Auto, 1.0);
    assert_eq!(starts(&bands), vec![5.0, 25.0, 45.0, 65.0, 85.0]);
}

#[test]
fn density_scales_dp_values() {
    let arrangement = Arrangement::start(Dp(10.0), Dp(5.0), Dp(5.0));
    let bands = resolve(400.0, arrangement, BandCount::Fixed(2), 2.0);
    assert_eq!(bands, vec![Band::new(10.0, 20.0), Band::new(40.0, 20.0)]);
}

#[test]
fn degenerate_input_yields_no_bands() {
    let arrangement = Arrangement::stretch(Dp(16.0), Dp(16.0));
    assert!(resolve(-1.0, arrangement, BandCount::Fixed(4), 1.0).is_empty());
    assert!(resolve(f32::NAN, arrangement, BandCount::Fixed(4), 1.0).is_empty());
    assert!(resolve(f32::INFINITY, arrangement, BandCount::Fixed(4), 1.0).is_empty());
    assert!(resolve(400.0, arrangement, BandCount::Fixed(0), 1.0).is_empty());
    let zero_step = Arrangement::start(Dp(0.0), Dp(0.0), Dp(0.0));
    assert!(resolve(400.0, zero_step, BandCount::Auto, 1.0).is_empty());
}

#[test]
fn auto_count_is_capped() {
    let arrangement = Arrangement::start(Dp(0.001), Dp(0.0), Dp(0.0));
    let bands = resolve(1_000_000.0, arrangement, BandCount::Auto, 1.0);
    assert_eq!(bands.len(), MAX_BANDS);
}

#[test]
fn resolution_is_deterministic() {
    let arrangement = Arrangement::center(Dp(46.0), Dp(32.0));
    let calculator = ArrangementCalculator::new(arrangement, BandCount::Fixed(8));
    let first = calculator.arrange(905.0, 1.5);
    let second = calculator.arrange(905.0, 1.5);
    assert_eq!(first, second);
    assert_eq!(
        first,
        arrangement.resolve(905.0, BandCount::Fixed(8), 1.5)
    );
}
