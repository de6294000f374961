use debuglayout::graphics::{Color, DisplayMetrics, Dp, Point, Size, TextStyle};
use debuglayout::{
    debug_layout, format_draw_ops, BandCount, DebugOverlay, DrawOp, DrawScope, GridLayer,
    GuidelineOffset, LargeLayoutRegions, RecordingDrawScope, RulerLayer,
};

#[derive(Debug, Default)]
struct CountingScope {
    size: Size,
    content: usize,
    lines: usize,
    rects: usize,
    texts: usize,
}

impl DrawScope for CountingScope {
    fn size(&self) -> Size {
        self.size
    }

    fn draw_content(&mut self) {
        self.content += 1;
    }

    fn draw_line(&mut self, _color: Color, _stroke_width: f32, _start: Point, _end: Point) {
        self.lines += 1;
    }

    fn draw_rect(&mut self, _color: Color, _top_left: Point, _size: Size) {
        self.rects += 1;
    }

    fn draw_text(&mut self, _text: &str, _style: &TextStyle, _top_left: Point) {
        self.texts += 1;
    }
}

fn grid_with_columns() -> DebugOverlay {
    debug_layout(DisplayMetrics::from_density(1.0), |layout| {
        layout.grid(GridLayer::new(Dp(8.0)));
        layout.columns_stretch(4, Dp(16.0), Dp(16.0), Color::from_argb(0x330000FF));
    })
}

#[test]
fn grid_then_columns_paint_in_order() {
    let overlay = grid_with_columns();
    let mut scope = RecordingDrawScope::new(Size::new(400.0, 400.0));
    overlay.draw(&mut scope);

    let ops = scope.operations();
    assert_eq!(ops.len(), 1 + 102 + 4, "{}", format_draw_ops(ops));
    assert_eq!(ops[0], DrawOp::Content);
    assert!(ops[1..103].iter().all(DrawOp::is_line));
    assert!(ops[103..].iter().all(DrawOp::is_rect));

    let starts: Vec<f32> = ops[103..]
        .iter()
        .map(|op| match op {
            DrawOp::Rect { top_left, size, .. } => {
                assert_eq!(size.width, 80.0);
                assert_eq!(size.height, 400.0);
                top_left.x
            }
            other => panic!("expected rect, got {other:?}"),
        })
        .collect();
    assert_eq!(starts, vec![16.0, 112.0, 208.0, 304.0]);
}

#[test]
fn custom_scope_receives_every_call() {
    let overlay = debug_layout(DisplayMetrics::default(), |layout| {
        layout
            .extra_small_screen_4_columns(true)
            .guideline_from_top(GuidelineOffset::percent(0.5), Color::BLUE, Dp(1.0))
            .horizontal_ruler(RulerLayer::default());
    });
    let mut scope = CountingScope {
        size: Size::new(360.0, 640.0),
        ..CountingScope::default()
    };
    overlay.draw(&mut scope);

    assert_eq!(scope.content, 1);
    // 4 columns, toolbar, navigation bar and the ruler background.
    assert_eq!(scope.rects, 7);
    assert_eq!(scope.lines, 1 + 37);
    assert!(scope.texts > 0);
}

#[test]
fn zero_sized_surface_stays_finite() {
    let overlay = debug_layout(DisplayMetrics::default(), |layout| {
        layout
            .large_screen_12_columns(LargeLayoutRegions::Expanded)
            .grid(GridLayer::default())
            .rows_text_4px(Dp(0.0))
            .vertical_ruler(RulerLayer::default());
    });
    let mut scope = RecordingDrawScope::new(Size::ZERO);
    overlay.draw(&mut scope);

    assert_eq!(scope.operations()[0], DrawOp::Content);
    for op in scope.operations() {
        let finite = match op {
            DrawOp::Content => true,
            DrawOp::Line { start, end, .. } => [start.x, start.y, end.x, end.y]
                .iter()
                .all(|value| value.is_finite()),
            DrawOp::Rect { top_left, size, .. } => {
                top_left.x.is_finite() && top_left.y.is_finite() && size.width >= 0.0
            }
            DrawOp::Text { .. } => false,
        };
        assert!(finite, "{op:?}");
    }
}

#[test]
fn overlay_draws_concurrently_from_many_threads() {
    let overlay = grid_with_columns();
    let mut reference = RecordingDrawScope::new(Size::new(400.0, 400.0));
    overlay.draw(&mut reference);

    std::thread::scope(|threads| {
        for _ in 0..4 {
            let overlay = &overlay;
            let reference = &reference;
            threads.spawn(move || {
                let mut scope = RecordingDrawScope::new(Size::new(400.0, 400.0));
                overlay.draw(&mut scope);
                assert_eq!(&scope, reference);
            });
        }
    });
}

#[test]
fn auto_rows_follow_available_height() {
    let overlay = debug_layout(DisplayMetrics::from_density(2.0), |layout| {
        layout.rows_from_bottom(Dp(8.0), Dp(0.0), Dp(8.0), BandCount::Auto, Color::RED);
    });
    let mut scope = RecordingDrawScope::new(Size::new(100.0, 100.0));
    overlay.draw(&mut scope);

    // 16px rows with 16px gutters: floor((100 + 16) / 32) = 3.
    let tops: Vec<f32> = scope
        .operations()
        .iter()
        .filter_map(|op| match op {
            DrawOp::Rect { top_left, .. } => Some(top_left.y),
            _ => None,
        })
        .collect();
    assert_eq!(tops, vec![20.0, 52.0, 84.0]);
}
