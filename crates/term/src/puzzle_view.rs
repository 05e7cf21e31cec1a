//! PuzzleView: maps a `PuzzleSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The engine works in surface units; the view treats each terminal cell as an
//! `8 x 16` block of those units, roughly the pixel shape of a terminal glyph,
//! so square tiles look square on screen.

use crate::core::{PuzzleSnapshot, TileView};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Point;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BACKGROUND: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(20, 20, 28));
const TILE: CellStyle = CellStyle::new(Rgb::new(20, 20, 20), Rgb::new(245, 245, 245));
const TILE_DRAGGING: CellStyle = CellStyle::new(Rgb::new(20, 20, 20), Rgb::new(255, 230, 140));
const SOLVED_FRAME: CellStyle = CellStyle::new(Rgb::new(60, 220, 90), Rgb::new(20, 20, 28)).bold();
const STATUS: CellStyle = CellStyle::new(Rgb::new(150, 150, 160), Rgb::new(20, 20, 28));

/// Renders the puzzle and a one-line status bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PuzzleView {
    /// Surface units per terminal column.
    unit_w: f32,
    /// Surface units per terminal row.
    unit_h: f32,
}

impl Default for PuzzleView {
    fn default() -> Self {
        Self {
            unit_w: 8.0,
            unit_h: 16.0,
        }
    }
}

impl PuzzleView {
    /// Surface `(height, width)` for a viewport, excluding the status row.
    pub fn surface_size(&self, viewport: Viewport) -> (f32, f32) {
        let rows = viewport.height.saturating_sub(1);
        (rows as f32 * self.unit_h, viewport.width as f32 * self.unit_w)
    }

    /// Surface point at the centre of terminal cell `(column, row)`.
    pub fn to_surface(&self, column: u16, row: u16) -> Point {
        Point::new(
            (column as f32 + 0.5) * self.unit_w,
            (row as f32 + 0.5) * self.unit_h,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &PuzzleSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(BACKGROUND);

        // Dragged tile last so it draws over its neighbours.
        for tile in snap.labelled().filter(|t| !t.dragging) {
            self.draw_tile(fb, tile, TILE);
        }
        if let Some(tile) = snap.dragged() {
            self.draw_tile(fb, tile, TILE_DRAGGING);
        }

        if snap.solved {
            fb.draw_box(0, 0, viewport.width, viewport.height.saturating_sub(1), SOLVED_FRAME);
        }

        self.draw_status(fb, snap, viewport);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &PuzzleSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Terminal cell span `(x, y, w, h)` covered by a tile.
    pub fn tile_cells(&self, tile: &TileView) -> (u16, u16, u16, u16) {
        let to_col = |v: f32| (v / self.unit_w).round().max(0.0) as u16;
        let to_row = |v: f32| (v / self.unit_h).round().max(0.0) as u16;
        let x = to_col(tile.rect.left);
        let y = to_row(tile.rect.top);
        let w = to_col(tile.rect.right).saturating_sub(x).max(1);
        let h = to_row(tile.rect.bottom).saturating_sub(y).max(1);
        (x, y, w, h)
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, tile: &TileView, style: CellStyle) {
        let Some(label) = tile.label else { return };
        let (x, y, w, h) = self.tile_cells(tile);

        fb.fill_rect(x, y, w, h, ' ', style);
        if w >= 4 && h >= 3 {
            fb.draw_box(x, y, w, h, style);
        }
        fb.put_centered(x, y + h / 2, w, &label.to_string(), style.bold());
    }

    fn draw_status(&self, fb: &mut FrameBuffer, snap: &PuzzleSnapshot, viewport: Viewport) {
        let Some(y) = viewport.height.checked_sub(1) else {
            return;
        };
        let state = if snap.solved {
            "solved!"
        } else if snap.solvable {
            "solvable"
        } else {
            "unsolvable shuffle"
        };
        let line = format!(
            " {n}x{n} | {state} | r reset | +/- size | q quit",
            n = snap.size
        );
        fb.put_str(0, y, &line, STATUS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Pos, Rect};

    #[test]
    fn test_surface_excludes_status_row() {
        let view = PuzzleView::default();
        assert_eq!(view.surface_size(Viewport::new(80, 25)), (384.0, 640.0));
    }

    #[test]
    fn test_pointer_maps_to_cell_centre() {
        let view = PuzzleView::default();
        assert_eq!(view.to_surface(0, 0), Point::new(4.0, 8.0));
        assert_eq!(view.to_surface(10, 2), Point::new(84.0, 40.0));
    }

    #[test]
    fn test_tile_cells_round_to_grid() {
        let view = PuzzleView::default();
        let tile = TileView {
            pos: Pos::new(0, 0),
            label: Some(1),
            rect: Rect::new(65.0, 65.0, 119.0, 119.0),
            dragging: false,
        };
        assert_eq!(view.tile_cells(&tile), (8, 4, 7, 3));
    }
}
