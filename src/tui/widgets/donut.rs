//! Donut chart widget
//!
//! Draws category shares as a ring on a braille canvas. Slices run clockwise
//! from twelve o'clock in the order they are given.

use std::f64::consts::{FRAC_PI_2, TAU};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Points},
        Block, Widget,
    },
};

/// One slice of the ring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    /// Fraction of the whole ring (0.0 - 1.0)
    pub fraction: f64,
    /// Fill color
    pub color: Color,
}

/// Radius of the hole relative to the outer radius
const HOLE_RATIO: f64 = 0.5;

/// A ring chart of fractional slices
pub struct DonutChart<'a> {
    slices: &'a [Slice],
    block: Option<Block<'a>>,
}

impl<'a> DonutChart<'a> {
    /// Create a chart over the given slices
    pub fn new(slices: &'a [Slice]) -> Self {
        Self {
            slices,
            block: None,
        }
    }

    /// Surround the chart with a block
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

/// Index of the slice covering `position` (0.0 - 1.0 around the ring)
pub fn slice_at(slices: &[Slice], position: f64) -> Option<usize> {
    let mut end = 0.0;
    for (index, slice) in slices.iter().enumerate() {
        end += slice.fraction;
        if position < end {
            return Some(index);
        }
    }
    // Rounding can leave a sliver at the very end; it belongs to the last slice
    if position < 1.0 + 1e-9 && !slices.is_empty() {
        return Some(slices.len() - 1);
    }
    None
}

/// Ring points for each slice, sampled on a `columns` x `rows` dot grid
///
/// `aspect` is the width of the drawing area divided by its height, both
/// measured in dots, so the ring stays round.
pub fn ring_points(
    slices: &[Slice],
    hole: f64,
    columns: usize,
    rows: usize,
    aspect: f64,
) -> Vec<Vec<(f64, f64)>> {
    let mut points = vec![Vec::new(); slices.len()];
    if columns == 0 || rows == 0 {
        return points;
    }

    for row in 0..rows {
        let y = 1.0 - (row as f64 + 0.5) * 2.0 / rows as f64;
        for column in 0..columns {
            let x = ((column as f64 + 0.5) * 2.0 / columns as f64 - 1.0) * aspect;
            let radius = (x * x + y * y).sqrt();
            if radius > 1.0 || radius < hole {
                continue;
            }

            // Clockwise angle from twelve o'clock, normalised to 0.0 - 1.0
            let angle = (FRAC_PI_2 - y.atan2(x)).rem_euclid(TAU);
            if let Some(index) = slice_at(slices, angle / TAU) {
                points[index].push((x, y));
            }
        }
    }

    points
}

impl Widget for DonutChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = match self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.render(area, buf);
                inner
            }
            None => area,
        };

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        // Braille cells hold 2x4 dots
        let columns = inner.width as usize * 2;
        let rows = inner.height as usize * 4;
        let aspect = columns as f64 / rows as f64;
        let points = ring_points(self.slices, HOLE_RATIO, columns, rows, aspect);
        let colors: Vec<Color> = self.slices.iter().map(|s| s.color).collect();

        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-aspect, aspect])
            .y_bounds([-1.0, 1.0])
            .paint(|ctx| {
                for (coords, color) in points.iter().zip(&colors) {
                    ctx.draw(&Points {
                        coords,
                        color: *color,
                    });
                }
            })
            .render(inner, buf);
    }
}
