//! PuzzleEngine: owns the grid, its on-surface bounds, and the current gesture.
//!
//! Callers feed it surface sizes and pointer events and read back a
//! [`PuzzleSnapshot`]. Every method that changes topology also recomputes the
//! bounds before returning, so a renderer never sees a swapped grid with stale
//! rectangles.

use tracing::{debug, info, instrument};

use crate::config::EngineConfig;
use crate::core::{layout, Grid, GridError, Layout, PuzzleSnapshot, SimpleRng, TileView};
use crate::drag::{drag_rect, reaches_commit_threshold, DragOutcome, DragSession, Gesture};
use crate::types::{Direction, Point, Pos, Rect, SIZE_CONTROL_OFFSET};

/// Render surface dimensions in surface units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Surface {
    pub height: f32,
    pub width: f32,
}

#[derive(Debug, Clone)]
pub struct PuzzleEngine {
    grid: Grid,
    rng: SimpleRng,
    surface: Surface,
    layout: Layout,
    /// Current visual rectangle per grid slot, row-major.
    bounds: Vec<Rect>,
    gesture: Gesture,
    /// Parity of the current grid; refreshed whenever the grid changes.
    solvable: bool,
}

impl PuzzleEngine {
    /// Create an engine with a freshly shuffled grid.
    pub fn new(config: &EngineConfig) -> Result<Self, GridError> {
        let mut grid = Grid::ordered(config.size)?;
        let mut rng = SimpleRng::new(config.seed);
        grid.shuffle(&mut rng);
        info!(size = config.size, seed = config.seed, "puzzle engine created");
        Ok(Self::assemble(grid, rng))
    }

    /// Create an engine around an existing grid, without shuffling it.
    ///
    /// `seed` drives later shuffles.
    pub fn with_grid(grid: Grid, seed: u32) -> Self {
        Self::assemble(grid, SimpleRng::new(seed))
    }

    fn assemble(grid: Grid, rng: SimpleRng) -> Self {
        let surface = Surface::default();
        let mut engine = Self {
            layout: layout(surface.height, surface.width, grid.size()),
            bounds: Vec::new(),
            grid,
            rng,
            surface,
            gesture: Gesture::Idle,
            solvable: false,
        };
        engine.solvable = engine.grid.is_solvable();
        engine.relayout();
        engine
    }

    /// Rebuild the grid at `size` in solved order, then shuffle it.
    ///
    /// Sizes below 2 are rejected and leave the current grid in place.
    #[instrument(skip(self))]
    pub fn initialize(&mut self, size: usize) -> Result<(), GridError> {
        let mut grid = Grid::ordered(size)?;
        grid.shuffle(&mut self.rng);
        self.grid = grid;
        self.solvable = self.grid.is_solvable();
        self.gesture = Gesture::Idle;
        self.relayout();
        info!(solvable = self.solvable, "grid initialized");
        Ok(())
    }

    /// Start over at the current size.
    pub fn reset(&mut self) -> Result<(), GridError> {
        self.initialize(self.grid.size())
    }

    /// Apply a size-control position; side length is `progress + 4`.
    pub fn set_size_from_control(&mut self, progress: usize) -> Result<(), GridError> {
        self.initialize(progress + SIZE_CONTROL_OFFSET)
    }

    /// Reshuffle the current grid.
    pub fn shuffle(&mut self) {
        self.grid.shuffle(&mut self.rng);
        self.solvable = self.grid.is_solvable();
        self.gesture = Gesture::Idle;
        self.relayout();
    }

    /// Adopt new surface dimensions. Any drag in progress snaps back.
    pub fn resize(&mut self, height: f32, width: f32) {
        let next = Surface { height, width };
        if next == self.surface {
            return;
        }
        self.surface = next;
        self.gesture = Gesture::Idle;
        self.relayout();
    }

    /// Recompute every tile's rectangle from the canonical layout.
    fn relayout(&mut self) {
        self.layout = layout(self.surface.height, self.surface.width, self.grid.size());
        self.bounds.clear();
        self.bounds.extend(self.layout.rects());
        debug!(solved = self.grid.is_solved(), "relayout\n{}", self.grid);
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn is_solved(&self) -> bool {
        self.grid.is_solved()
    }

    pub fn is_solvable(&self) -> bool {
        self.solvable
    }

    /// Direction of the blank from the tile at `pos`, if adjacent.
    pub fn adjacent_empty_direction(&self, pos: Pos) -> Option<Direction> {
        self.grid.adjacent_blank_direction(pos)
    }

    pub fn locate_blank(&self) -> Pos {
        self.grid.locate_blank()
    }

    /// Current visual rectangle of the tile at `pos`.
    pub fn tile_bounds(&self, pos: Pos) -> Option<Rect> {
        if pos.row >= self.size() || pos.col >= self.size() {
            return None;
        }
        self.bounds.get(pos.row * self.size() + pos.col).copied()
    }

    /// Tile under `point` that may be dragged, with its drag direction.
    pub fn locate_selectable(&self, point: Point) -> Option<(Pos, Direction)> {
        let n = self.size();
        self.bounds
            .iter()
            .enumerate()
            .filter(|(_, rect)| rect.contains(point))
            .find_map(|(i, _)| {
                let pos = Pos::new(i / n, i % n);
                self.adjacent_empty_direction(pos).map(|dir| (pos, dir))
            })
    }

    /// Select the tile at `pos` and snapshot its starting bounds.
    ///
    /// Returns false (and does nothing) when a gesture is already active or
    /// the tile is not adjacent to the blank.
    pub fn begin_drag(&mut self, pos: Pos) -> bool {
        if !self.gesture.is_idle() {
            return false;
        }
        let Some(direction) = self.adjacent_empty_direction(pos) else {
            return false;
        };
        let (Some(tile), Some(initial)) = (self.grid.get(pos), self.tile_bounds(pos)) else {
            return false;
        };
        self.gesture = Gesture::Selected(DragSession {
            pos,
            value: tile.value,
            direction,
            initial,
        });
        true
    }

    /// Move the selected tile towards `pointer`, bounded by the gap.
    ///
    /// Returns the tile's new visual rectangle, or None when nothing is selected.
    pub fn update_drag(&mut self, pointer: Point) -> Option<Rect> {
        let session = *self.gesture.session()?;
        let empty = self.tile_bounds(self.locate_blank())?;
        let current = self.tile_bounds(session.pos)?;

        let next = drag_rect(session.direction, current, pointer, empty, session.initial);
        let idx = session.pos.row * self.size() + session.pos.col;
        self.bounds[idx] = next;
        self.gesture = Gesture::Dragging(session);
        Some(next)
    }

    /// Release the gesture: slide the tile if it travelled far enough,
    /// otherwise snap it back. Bounds are rebuilt in both cases.
    pub fn commit_drag(&mut self) -> DragOutcome {
        let Some(session) = self.gesture.session().copied() else {
            return DragOutcome::Ignored;
        };
        self.gesture = Gesture::Idle;

        let current = self.tile_bounds(session.pos).unwrap_or(session.initial);
        let outcome = if reaches_commit_threshold(&current, &session.initial) {
            let to = self.locate_blank();
            match self.grid.slide(session.pos) {
                Some(_) => {
                    self.solvable = self.grid.is_solvable();
                    DragOutcome::Committed {
                        from: session.pos,
                        to,
                    }
                }
                None => DragOutcome::Cancelled,
            }
        } else {
            DragOutcome::Cancelled
        };

        self.relayout();
        debug!(?outcome, tile = session.value, "drag released");
        if self.grid.is_solved() {
            info!("puzzle solved");
        }
        outcome
    }

    /// Pointer pressed: select a draggable tile under the pointer, if any.
    pub fn pointer_down(&mut self, point: Point) -> bool {
        if !self.gesture.is_idle() {
            return false;
        }
        match self.locate_selectable(point) {
            Some((pos, _)) => self.begin_drag(pos),
            None => false,
        }
    }

    /// Pointer moved while pressed.
    pub fn pointer_move(&mut self, point: Point) -> Option<Rect> {
        self.update_drag(point)
    }

    /// Pointer released.
    pub fn pointer_up(&mut self) -> DragOutcome {
        self.commit_drag()
    }

    /// Render view of the current state.
    pub fn snapshot(&self) -> PuzzleSnapshot {
        let mut snap = PuzzleSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill an existing snapshot, reusing its allocation.
    pub fn snapshot_into(&self, snap: &mut PuzzleSnapshot) {
        snap.clear();
        snap.size = self.size();
        snap.solved = self.grid.is_solved();
        snap.solvable = self.solvable;

        let dragging = self.gesture.session().map(|s| s.pos);
        snap.tiles.extend(
            self.grid
                .tiles()
                .iter()
                .zip(self.bounds.iter())
                .map(|(tile, rect)| TileView {
                    pos: tile.pos(),
                    label: tile.label(),
                    rect: *rect,
                    dragging: dragging == Some(tile.pos()),
                }),
        );
    }
}
