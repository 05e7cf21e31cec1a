//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, terminal rendering, tests).
//!
//! # Coordinates
//!
//! Two coordinate systems are in play:
//!
//! - **Grid coordinates** ([`Pos`]): `row` counts down from the top, `col` counts
//!   right from the left, both starting at 0.
//! - **Surface coordinates** ([`Point`], [`Rect`]): floating-point units of the
//!   render surface, origin at the top-left, y growing downwards.
//!
//! # Grid Size Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_SIZE` | 4 | Side length used at startup (the classic 15-puzzle) |
//! | `MIN_SIZE` | 2 | Smallest side length the engine accepts |
//! | `SIZE_CONTROL_OFFSET` | 4 | Added to size-control progress to get a side length |
//! | `MIN_UI_SIZE` | 4 | Smallest side length the size control offers |
//! | `MAX_UI_SIZE` | 10 | Largest side length the size control offers |
//!
//! # Examples
//!
//! ```
//! use slide15_types::{Direction, Point, Pos, Rect, DEFAULT_SIZE};
//!
//! // Step towards a neighbour, staying on the grid
//! assert_eq!(Pos::new(1, 1).step(Direction::Up, 4), Some(Pos::new(0, 1)));
//! assert_eq!(Pos::new(0, 1).step(Direction::Up, 4), None);
//!
//! // Rectangles use strict containment
//! let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
//! assert!(rect.contains(Point::new(5.0, 5.0)));
//! assert!(!rect.contains(Point::new(0.0, 5.0)));
//!
//! assert_eq!(DEFAULT_SIZE, 4);
//! ```

/// Side length of a freshly started puzzle (4x4)
pub const DEFAULT_SIZE: usize = 4;

/// Smallest side length the engine will build a grid for
pub const MIN_SIZE: usize = 2;

/// Offset between size-control progress and grid side length
pub const SIZE_CONTROL_OFFSET: usize = 4;

/// Smallest side length offered by the size control
pub const MIN_UI_SIZE: usize = 4;

/// Largest side length offered by the size control
pub const MAX_UI_SIZE: usize = 10;

/// Tile value that marks the blank slot
pub const BLANK: u16 = 0;

/// Orthogonal direction from a tile towards the blank slot
///
/// - **Up**: blank is in the row above
/// - **Down**: blank is in the row below
/// - **Left**: blank is in the column to the left
/// - **Right**: blank is in the column to the right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in adjacency precedence order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Grid offset `(d_row, d_col)` of one step in this direction
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// A grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Neighbouring position one step in `dir`, or None when it would leave
    /// a grid of side length `size`.
    ///
    /// # Examples
    ///
    /// ```
    /// use slide15_types::{Direction, Pos};
    ///
    /// assert_eq!(Pos::new(0, 0).step(Direction::Up, 4), None);
    /// assert_eq!(Pos::new(0, 0).step(Direction::Right, 4), Some(Pos::new(0, 1)));
    /// assert_eq!(Pos::new(3, 3).step(Direction::Down, 4), None);
    /// ```
    pub fn step(&self, dir: Direction, size: usize) -> Option<Pos> {
        let (dr, dc) = dir.offset();
        let row = self.row as isize + dr;
        let col = self.col as isize + dc;
        if row < 0 || col < 0 || row >= size as isize || col >= size as isize {
            return None;
        }
        Some(Pos::new(row as usize, col as usize))
    }
}

/// A point on the render surface
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle on the render surface
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center_x(&self) -> f32 {
        (self.left + self.right) * 0.5
    }

    pub fn center_y(&self) -> f32 {
        (self.top + self.bottom) * 0.5
    }

    /// Strict containment: points on the edge are outside.
    pub fn contains(&self, p: Point) -> bool {
        self.left < p.x && p.x < self.right && self.top < p.y && p.y < self.bottom
    }

    /// Move the rectangle so its top-left corner sits at `(left, top)`,
    /// keeping its size.
    pub fn offset_to(&mut self, left: f32, top: f32) {
        let w = self.width();
        let h = self.height();
        self.left = left;
        self.top = top;
        self.right = left + w;
        self.bottom = top + h;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_size_range_is_reachable_from_control() {
        assert_eq!(SIZE_CONTROL_OFFSET, MIN_UI_SIZE);
        assert!(MIN_SIZE <= MIN_UI_SIZE);
        assert!(DEFAULT_SIZE >= MIN_UI_SIZE && DEFAULT_SIZE <= MAX_UI_SIZE);
    }

    #[test]
    fn test_direction_offsets_are_unit_steps() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.offset();
            assert_eq!(dr.abs() + dc.abs(), 1);
        }
        assert_eq!(Pos::new(2, 2).step(Direction::Left, 3), Some(Pos::new(2, 1)));
        assert_eq!(Pos::new(2, 2).step(Direction::Right, 3), None);
    }

    #[test]
    fn test_rect_offset_to_keeps_size() {
        let mut r = Rect::new(10.0, 20.0, 30.0, 60.0);
        r.offset_to(0.0, 5.0);
        assert_eq!(r, Rect::new(0.0, 5.0, 20.0, 45.0));
        assert_eq!(r.center_x(), 10.0);
        assert_eq!(r.center_y(), 25.0);
    }

    #[test]
    fn test_rect_contains_is_strict() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Point::new(0.5, 9.5)));
        assert!(!r.contains(Point::new(10.0, 5.0)));
        assert!(!r.contains(Point::new(5.0, 0.0)));
        assert!(!r.contains(Point::new(-1.0, 5.0)));
    }
}
