//! Headless drawing surface that records what the overlay paints.

use debuglayout_graphics::{Color, Point, Size, TextStyle};

use crate::scope::DrawScope;

/// A drawing call captured by [`RecordingDrawScope`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// The host content beneath the overlay.
    Content,
    Line {
        color: Color,
        stroke_width: f32,
        start: Point,
        end: Point,
    },
    Rect {
        color: Color,
        top_left: Point,
        size: Size,
    },
    Text {
        text: String,
        style: TextStyle,
        top_left: Point,
    },
}

impl DrawOp {
    pub fn is_line(&self) -> bool {
        matches!(self, DrawOp::Line { .. })
    }

    pub fn is_rect(&self) -> bool {
        matches!(self, DrawOp::Rect { .. })
    }
}

/// Records draw calls in submission order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingDrawScope {
    size: Size,
    operations: Vec<DrawOp>,
}

impl RecordingDrawScope {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            operations: Vec::new(),
        }
    }

    /// Returns a slice of recorded operations in submission order.
    pub fn operations(&self) -> &[DrawOp] {
        &self.operations
    }

    /// Consumes the scope and yields the owned operations.
    pub fn into_operations(self) -> Vec<DrawOp> {
        self.operations
    }

    pub fn clear(&mut self) {
        self.operations.clear();
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawOp> {
        self.operations.iter().filter(|op| op.is_line())
    }

    pub fn rects(&self) -> impl Iterator<Item = &DrawOp> {
        self.operations.iter().filter(|op| op.is_rect())
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.operations.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl DrawScope for RecordingDrawScope {
    fn size(&self) -> Size {
        self.size
    }

    fn draw_content(&mut self) {
        self.operations.push(DrawOp::Content);
    }

    fn draw_line(&mut self, color: Color, stroke_width: f32, start: Point, end: Point) {
        self.operations.push(DrawOp::Line {
            color,
            stroke_width,
            start,
            end,
        });
    }

    fn draw_rect(&mut self, color: Color, top_left: Point, size: Size) {
        self.operations.push(DrawOp::Rect {
            color,
            top_left,
            size,
        });
    }

    fn draw_text(&mut self, text: &str, style: &TextStyle, top_left: Point) {
        self.operations.push(DrawOp::Text {
            text: text.to_owned(),
            style: *style,
            top_left,
        });
    }
}
