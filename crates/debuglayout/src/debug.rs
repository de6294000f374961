//! Text dumps of recorded paints.

use std::fmt::Write;

use crate::renderer::DrawOp;

/// Formats recorded operations one per line.
pub fn format_draw_ops(operations: &[DrawOp]) -> String {
    let mut output = String::new();
    for (index, op) in operations.iter().enumerate() {
        let _ = match op {
            DrawOp::Content => writeln!(output, "{index:>4} content"),
            DrawOp::Line {
                stroke_width,
                start,
                end,
                ..
            } => writeln!(
                output,
                "{index:>4} line ({:.1}, {:.1}) -> ({:.1}, {:.1}) stroke={stroke_width:.1}",
                start.x, start.y, end.x, end.y
            ),
            DrawOp::Rect { top_left, size, .. } => writeln!(
                output,
                "{index:>4} rect ({:.1}, {:.1}) {:.1}x{:.1}",
                top_left.x, top_left.y, size.width, size.height
            ),
            DrawOp::Text { text, top_left, .. } => writeln!(
                output,
                "{index:>4} text {text:?} at ({:.1}, {:.1})",
                top_left.x, top_left.y
            ),
        };
    }
    output
}

/// Logs recorded operations at debug level.
pub fn log_draw_ops(operations: &[DrawOp]) {
    log::debug!(
        "overlay paint, {} operations:\n{}",
        operations.len(),
        format_draw_ops(operations)
    );
}

#[cfg(test)]
#[path = "tests/debug_tests.rs"]
mod tests;
