//! Drag geometry and gesture state.
//!
//! A drag moves one tile along a single axis towards the blank. The visual
//! rectangle is bounded by the tile's starting rectangle on one side and the
//! gap on the other; it never affects the grid until the gesture is committed.

use crate::types::{Direction, Point, Pos, Rect};

/// Snapshot of the dragged tile taken at gesture start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub pos: Pos,
    pub value: u16,
    pub direction: Direction,
    pub initial: Rect,
}

/// Per-gesture state: `Idle -> Selected -> Dragging -> Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Selected(DragSession),
    Dragging(DragSession),
}

impl Gesture {
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Gesture::Idle => None,
            Gesture::Selected(s) | Gesture::Dragging(s) => Some(s),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }
}

/// Result of releasing a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Tile at `from` slid into the blank at `to`.
    Committed { from: Pos, to: Pos },
    /// Drag fell short of the threshold; tile snapped back.
    Cancelled,
    /// No drag was in progress.
    Ignored,
}

/// New visual rectangle for a tile dragged towards the gap.
///
/// The candidate places the tile's leading corner half a gap-width before the
/// pointer, on the drag axis only, then clamps it between `initial` and `empty`.
pub fn drag_rect(
    direction: Direction,
    current: Rect,
    pointer: Point,
    empty: Rect,
    initial: Rect,
) -> Rect {
    let half_gap = empty.width() / 2.0;
    let w = current.width();
    let h = current.height();
    let mut next = current;

    match direction {
        Direction::Up => {
            let top = (pointer.y - half_gap)
                .min(initial.bottom - h)
                .max(empty.top);
            next.offset_to(current.left, top);
        }
        Direction::Down => {
            let top = (pointer.y - half_gap)
                .max(initial.top)
                .min(empty.bottom - h);
            next.offset_to(current.left, top);
        }
        Direction::Left => {
            let left = (pointer.x - half_gap)
                .min(initial.right - w)
                .max(empty.left);
            next.offset_to(left, current.top);
        }
        Direction::Right => {
            let left = (pointer.x - half_gap)
                .max(initial.left)
                .min(empty.right - w);
            next.offset_to(left, current.top);
        }
    }

    next
}

/// Whether the tile's centre has travelled at least half a tile side.
pub fn reaches_commit_threshold(current: &Rect, initial: &Rect) -> bool {
    let threshold = current.width() / 2.0;
    let dx = (current.center_x() - initial.center_x()).abs();
    let dy = (current.center_y() - initial.center_y()).abs();
    dx >= threshold || dy >= threshold
}
