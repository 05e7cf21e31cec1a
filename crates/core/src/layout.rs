//! Layout module - maps grid coordinates to surface rectangles
//!
//! Pure geometry with no state of its own. The playing field is a square of
//! `size + 2` cells along the shorter surface edge, leaving a one-cell border
//! around the grid. Each tile is inset inside its cell by a small margin that
//! shrinks as the grid grows (`5 - size` units on the leading edges,
//! `-5 - size` on the trailing ones).

use crate::types::{Pos, Rect};

/// Cell geometry for one surface size and grid size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    size: usize,
    pixels_per_square: f32,
}

/// Compute the layout for a surface of `grid_height x grid_width` units
///
/// # Examples
///
/// ```
/// use slide15_core::layout;
/// use slide15_core::types::Pos;
///
/// let l = layout(600.0, 800.0, 4);
/// assert_eq!(l.pixels_per_square(), 100.0);
///
/// let r = l.rect(Pos::new(0, 0));
/// assert_eq!((r.left, r.top, r.right, r.bottom), (101.0, 101.0, 191.0, 191.0));
/// ```
pub fn layout(grid_height: f32, grid_width: f32, size: usize) -> Layout {
    let min = grid_height.min(grid_width).max(0.0);
    Layout {
        size,
        pixels_per_square: min / (size as f32 + 2.0),
    }
}

impl Layout {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn pixels_per_square(&self) -> f32 {
        self.pixels_per_square
    }

    /// Resting rectangle of the tile at `pos`
    pub fn rect(&self, pos: Pos) -> Rect {
        let pps = self.pixels_per_square;
        let shift = self.size as f32;
        let col = pos.col as f32;
        let row = pos.row as f32;
        Rect::new(
            (col + 1.0) * pps + 5.0 - shift,
            (row + 1.0) * pps + 5.0 - shift,
            (col + 2.0) * pps - 5.0 - shift,
            (row + 2.0) * pps - 5.0 - shift,
        )
    }

    /// Resting rectangles for every cell in row-major order
    pub fn rects(&self) -> impl Iterator<Item = Rect> + '_ {
        let n = self.size;
        (0..n * n).map(move |i| self.rect(Pos::new(i / n, i % n)))
    }
}
