use crate::types::{Pos, Rect};

/// One tile as the renderer should draw it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileView {
    pub pos: Pos,
    /// None for the blank (do not draw).
    pub label: Option<u16>,
    pub rect: Rect,
    /// True while this tile is being dragged.
    pub dragging: bool,
}

/// Everything a render surface needs for one frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PuzzleSnapshot {
    pub size: usize,
    pub tiles: Vec<TileView>,
    pub solved: bool,
    pub solvable: bool,
}

impl PuzzleSnapshot {
    pub fn clear(&mut self) {
        self.size = 0;
        self.tiles.clear();
        self.solved = false;
        self.solvable = false;
    }

    /// Tiles with a label, in row-major order
    pub fn labelled(&self) -> impl Iterator<Item = &TileView> {
        self.tiles.iter().filter(|t| t.label.is_some())
    }

    /// The tile being dragged, if any
    pub fn dragged(&self) -> Option<&TileView> {
        self.tiles.iter().find(|t| t.dragging)
    }
}
