use debuglayout_graphics::{Color, Dp};
use debuglayout_layout::{Arrangement, ArrangementCalculator, Axis, BandCount};

use crate::defaults;
use crate::scope::DrawScope;

/// Filled bands along one axis: columns when drawn horizontally, rows vertically.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandLayer {
    pub count: BandCount,
    pub color: Color,
    pub arrangement: Arrangement,
}

impl BandLayer {
    pub fn new(arrangement: Arrangement, count: BandCount, color: Color) -> Self {
        Self {
            count,
            color,
            arrangement,
        }
    }

    /// Default columns: stretched with the default margin and gutter.
    pub fn columns() -> Self {
        Self::new(
            Arrangement::stretch(defaults::column::MARGIN, defaults::column::GUTTER),
            defaults::column::DEFAULT_COLUMNS,
            defaults::column::COLOR,
        )
    }

    /// Default rows: stretched with the default margin and gutter.
    pub fn rows() -> Self {
        Self::new(
            Arrangement::stretch(defaults::row::MARGIN, defaults::row::GUTTER),
            defaults::row::DEFAULT_ROWS,
            defaults::row::COLOR,
        )
    }

    pub fn with_arrangement(mut self, arrangement: Arrangement) -> Self {
        self.arrangement = arrangement;
        self
    }

    pub fn with_count(mut self, count: BandCount) -> Self {
        self.count = count;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn calculator(&self) -> ArrangementCalculator {
        ArrangementCalculator::new(self.arrangement, self.count)
    }

    /// Draws one rectangle per band, spanning the full cross axis.
    pub fn draw<S: DrawScope + ?Sized>(&self, scope: &mut S, axis: Axis, density: f32) {
        let size = scope.size();
        let cross = axis.cross(size);
        let bands = self.calculator().arrange(axis.main(size), density);
        for band in &bands {
            scope.draw_rect(
                self.color,
                axis.point(band.start, 0.0),
                axis.size(band.size, cross),
            );
        }
        log::trace!("{axis:?} band layer drew {} bands", bands.len());
    }
}

/// Column arrangements named after the edges they are anchored to.
pub struct ColumnsArrangement;

impl ColumnsArrangement {
    pub fn left(column_width: Dp, offset: Dp, gutter: Dp) -> Arrangement {
        Arrangement::start(column_width, offset, gutter)
    }

    pub fn right(column_width: Dp, offset: Dp, gutter: Dp) -> Arrangement {
        Arrangement::end(column_width, offset, gutter)
    }

    pub fn center(column_width: Dp, gutter: Dp) -> Arrangement {
        Arrangement::center(column_width, gutter)
    }

    pub fn stretch(margin: Dp, gutter: Dp) -> Arrangement {
        Arrangement::stretch(margin, gutter)
    }
}

/// Row arrangements named after the edges they are anchored to.
pub struct RowsArrangement;

impl RowsArrangement {
    pub fn top(row_height: Dp, offset: Dp, gutter: Dp) -> Arrangement {
        Arrangement::start(row_height, offset, gutter)
    }

    pub fn bottom(row_height: Dp, offset: Dp, gutter: Dp) -> Arrangement {
        Arrangement::end(row_height, offset, gutter)
    }

    pub fn center(row_height: Dp, gutter: Dp) -> Arrangement {
        Arrangement::center(row_height, gutter)
    }

    pub fn stretch(margin: Dp, gutter: Dp) -> Arrangement {
        Arrangement::stretch(margin, gutter)
    }
}

#[cfg(test)]
#[path = "tests/bands_tests.rs"]
mod tests;
