use super::*;
use debuglayout_graphics::{Color, Point, Size, TextStyle};

#[test]
fn format_draw_ops_lists_operations_in_order() {
    let ops = vec![
        DrawOp::Content,
        DrawOp::Line {
            color: Color::RED,
            stroke_width: 1.0,
            start: Point::new(-0.5, 0.0),
            end: Point::new(-0.5, 99.0),
        },
        DrawOp::Rect {
            color: Color::BLUE,
            top_left: Point::new(16.0, 0.0),
            size: Size::new(80.0, 100.0),
        },
        DrawOp::Text {
            text: "10".to_owned(),
            style: TextStyle::default(),
            top_left: Point::new(12.0, 12.0),
        },
    ];

    let output = format_draw_ops(&ops);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "   0 content",
            "   1 line (-0.5, 0.0) -> (-0.5, 99.0) stroke=1.0",
            "   2 rect (16.0, 0.0) 80.0x100.0",
            "   3 text \"10\" at (12.0, 12.0)",
        ]
    );
}

#[test]
fn format_draw_ops_handles_empty_paint() {
    assert!(format_draw_ops(&[]).is_empty());
    log_draw_ops(&[]);
}
