//! Grid module - tile topology of the puzzle
//!
//! The grid is an NxN arrangement of tiles stored in a flat, row-major `Vec`.
//! Exactly one tile carries the value `0` (the blank); every other value in
//! `1..N²` appears once. All mutating operations preserve that invariant: the
//! only ways to change the arrangement are [`Grid::shuffle`] and
//! [`Grid::slide`], and both only ever swap whole tiles.
//!
//! Coordinates: `Pos { row, col }`, row 0 at the top, col 0 at the left.

use std::fmt;

use arrayvec::ArrayVec;
use tracing::trace;

use crate::error::{GridError, MAX_GRID_SIZE};
use crate::rng::SimpleRng;
use crate::types::{Direction, Pos, BLANK, MIN_SIZE};

/// One labelled cell of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub value: u16,
    pub row: usize,
    pub col: usize,
}

impl Tile {
    pub fn is_blank(&self) -> bool {
        self.value == BLANK
    }

    /// Text label to draw, None for the blank
    pub fn label(&self) -> Option<u16> {
        if self.is_blank() {
            None
        } else {
            Some(self.value)
        }
    }

    pub fn pos(&self) -> Pos {
        Pos::new(self.row, self.col)
    }
}

/// The puzzle grid - `size x size` tiles, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Create a grid in solved order: `1, 2, …, N²-1, 0`
    pub fn ordered(size: usize) -> Result<Self, GridError> {
        Self::check_size(size)?;
        let cells = size * size;
        let tiles = (0..cells)
            .map(|i| Tile {
                value: if i + 1 == cells { BLANK } else { (i + 1) as u16 },
                row: i / size,
                col: i % size,
            })
            .collect();
        Ok(Self { size, tiles })
    }

    /// Create a grid from explicit row-major values
    ///
    /// The values must be a permutation of `0..size²`.
    ///
    /// # Examples
    ///
    /// ```
    /// use slide15_core::Grid;
    ///
    /// let grid = Grid::from_values(2, &[1, 2, 3, 0]).unwrap();
    /// assert!(grid.is_solved());
    ///
    /// assert!(Grid::from_values(2, &[1, 1, 3, 0]).is_err());
    /// ```
    pub fn from_values(size: usize, values: &[u16]) -> Result<Self, GridError> {
        Self::check_size(size)?;
        let cells = size * size;
        let not_perm = GridError::NotAPermutation { expected: cells };
        if values.len() != cells {
            return Err(not_perm);
        }

        let mut seen = vec![false; cells];
        for &v in values {
            let slot = seen.get_mut(v as usize).ok_or_else(|| not_perm.clone())?;
            if *slot {
                return Err(not_perm);
            }
            *slot = true;
        }

        let tiles = values
            .iter()
            .enumerate()
            .map(|(i, &value)| Tile {
                value,
                row: i / size,
                col: i % size,
            })
            .collect();
        Ok(Self { size, tiles })
    }

    fn check_size(size: usize) -> Result<(), GridError> {
        if !(MIN_SIZE..=MAX_GRID_SIZE).contains(&size) {
            return Err(GridError::invalid_size(size));
        }
        Ok(())
    }

    #[inline(always)]
    fn index(&self, pos: Pos) -> Option<usize> {
        if pos.row >= self.size || pos.col >= self.size {
            return None;
        }
        Some(pos.row * self.size + pos.col)
    }

    /// Side length
    pub fn size(&self) -> usize {
        self.size
    }

    /// Tiles in row-major order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tile values in row-major order
    pub fn values(&self) -> impl Iterator<Item = u16> + '_ {
        self.tiles.iter().map(|t| t.value)
    }

    /// Tile at `pos`, None if out of bounds
    pub fn get(&self, pos: Pos) -> Option<&Tile> {
        self.index(pos).map(|i| &self.tiles[i])
    }

    /// Shuffle the grid in place.
    ///
    /// First every row `i` is swapped with a randomly chosen row, then within
    /// each row every column `j` is swapped with a randomly chosen column of
    /// the same row. The result is not uniformly distributed and roughly half
    /// of the outcomes cannot be solved by sliding; check [`Grid::is_solvable`].
    pub fn shuffle(&mut self, rng: &mut SimpleRng) {
        let n = self.size;

        for i in 0..n {
            let other = rng.next_index(n);
            if other != i {
                for c in 0..n {
                    self.tiles.swap(i * n + c, other * n + c);
                }
            }
        }

        for i in 0..n {
            for j in 0..n {
                let other = rng.next_index(n);
                self.tiles.swap(i * n + other, i * n + j);
            }
        }

        self.renumber();
        trace!(solvable = self.is_solvable(), "grid shuffled");
    }

    /// Rewrite every tile's row/col from its slot in the flat array
    fn renumber(&mut self) {
        let n = self.size;
        for (i, tile) in self.tiles.iter_mut().enumerate() {
            tile.row = i / n;
            tile.col = i % n;
        }
    }

    /// True iff the row-major values read `1, 2, …, N²-1, 0`
    pub fn is_solved(&self) -> bool {
        let last = self.tiles.len() - 1;
        self.tiles.iter().enumerate().all(|(i, t)| {
            if i == last {
                t.value == BLANK
            } else {
                t.value as usize == i + 1
            }
        })
    }

    /// Position of the blank tile
    pub fn locate_blank(&self) -> Pos {
        // The constructors guarantee exactly one blank.
        self.tiles
            .iter()
            .find(|t| t.is_blank())
            .map(Tile::pos)
            .unwrap_or_default()
    }

    /// Direction of the blank relative to the tile at `pos`, if orthogonally
    /// adjacent. Checked in order up, down, left, right.
    ///
    /// The blank itself and out-of-bounds positions yield None.
    pub fn adjacent_blank_direction(&self, pos: Pos) -> Option<Direction> {
        self.index(pos)?;
        Direction::ALL.into_iter().find(|&dir| {
            pos.step(dir, self.size)
                .and_then(|n| self.get(n))
                .is_some_and(Tile::is_blank)
        })
    }

    /// Positions of the tiles that can slide into the blank
    pub fn movable_tiles(&self) -> ArrayVec<Pos, 4> {
        let blank = self.locate_blank();
        Direction::ALL
            .into_iter()
            .filter_map(|dir| blank.step(dir, self.size))
            .collect()
    }

    /// Slide the tile at `pos` into the blank.
    ///
    /// Returns the direction the tile moved, or None (grid untouched) when the
    /// tile is not adjacent to the blank.
    pub fn slide(&mut self, pos: Pos) -> Option<Direction> {
        let dir = self.adjacent_blank_direction(pos)?;
        let blank = pos.step(dir, self.size)?;
        let a = self.index(pos)?;
        let b = self.index(blank)?;
        self.tiles.swap(a, b);
        self.tiles[a].row = pos.row;
        self.tiles[a].col = pos.col;
        self.tiles[b].row = blank.row;
        self.tiles[b].col = blank.col;
        Some(dir)
    }

    /// Whether the current arrangement can reach the solved order by sliding.
    ///
    /// Classic inversion-parity test: for odd sizes the inversion count must be
    /// even; for even sizes the inversion count plus the blank's row must be odd.
    pub fn is_solvable(&self) -> bool {
        let values: Vec<u16> = self.values().filter(|&v| v != BLANK).collect();
        let inversions: usize = values
            .iter()
            .enumerate()
            .map(|(i, &v)| values[i + 1..].iter().filter(|&&w| w < v).count())
            .sum();

        if self.size % 2 == 1 {
            inversions % 2 == 0
        } else {
            (inversions + self.locate_blank().row) % 2 == 1
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(self.size) {
            write!(f, "[")?;
            for (i, tile) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", tile.value)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_values(grid: &Grid) -> Vec<u16> {
        let mut v: Vec<u16> = grid.values().collect();
        v.sort_unstable();
        v
    }

    #[test]
    fn test_ordered_grid_is_solved() {
        for size in 2..=6 {
            let grid = Grid::ordered(size).unwrap();
            assert!(grid.is_solved(), "size {} should start solved", size);
            assert_eq!(grid.locate_blank(), Pos::new(size - 1, size - 1));
        }
    }

    #[test]
    fn test_degenerate_sizes_rejected() {
        assert!(matches!(
            Grid::ordered(0),
            Err(GridError::InvalidSize { size: 0, .. })
        ));
        assert!(Grid::ordered(1).is_err());
        assert!(Grid::ordered(MAX_GRID_SIZE + 1).is_err());
    }

    #[test]
    fn test_tile_fields_track_slots() {
        let mut grid = Grid::ordered(4).unwrap();
        grid.shuffle(&mut SimpleRng::new(3));
        for (i, tile) in grid.tiles().iter().enumerate() {
            assert_eq!(tile.row, i / 4);
            assert_eq!(tile.col, i % 4);
        }
    }

    #[test]
    fn test_shuffle_keeps_permutation() {
        for seed in 1..20 {
            let mut grid = Grid::ordered(5).unwrap();
            grid.shuffle(&mut SimpleRng::new(seed));
            assert_eq!(sorted_values(&grid), (0..25).collect::<Vec<u16>>());
        }
    }

    #[test]
    fn test_adjacent_blank_direction() {
        // 1 2 3
        // 4 0 5
        // 6 7 8
        let grid = Grid::from_values(3, &[1, 2, 3, 4, 0, 5, 6, 7, 8]).unwrap();
        assert_eq!(
            grid.adjacent_blank_direction(Pos::new(0, 1)),
            Some(Direction::Down)
        );
        assert_eq!(
            grid.adjacent_blank_direction(Pos::new(2, 1)),
            Some(Direction::Up)
        );
        assert_eq!(
            grid.adjacent_blank_direction(Pos::new(1, 0)),
            Some(Direction::Right)
        );
        assert_eq!(
            grid.adjacent_blank_direction(Pos::new(1, 2)),
            Some(Direction::Left)
        );
        assert_eq!(grid.adjacent_blank_direction(Pos::new(0, 0)), None);
        assert_eq!(grid.adjacent_blank_direction(Pos::new(1, 1)), None);
        assert_eq!(grid.adjacent_blank_direction(Pos::new(3, 0)), None);
    }

    #[test]
    fn test_movable_tiles_in_corner() {
        let grid = Grid::ordered(4).unwrap();
        let movable = grid.movable_tiles();
        assert_eq!(movable.as_slice(), &[Pos::new(2, 3), Pos::new(3, 2)]);
    }

    #[test]
    fn test_slide_rejects_non_adjacent() {
        let mut grid = Grid::ordered(4).unwrap();
        let before = grid.clone();
        assert_eq!(grid.slide(Pos::new(0, 0)), None);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_solvable_parity() {
        assert!(Grid::ordered(4).unwrap().is_solvable());
        assert!(Grid::ordered(3).unwrap().is_solvable());

        // Swapping two labelled tiles flips parity.
        let swapped = Grid::from_values(4, &[2, 1, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 0])
            .unwrap();
        assert!(!swapped.is_solvable());

        let mut slid = Grid::ordered(4).unwrap();
        slid.slide(Pos::new(2, 3));
        assert!(slid.is_solvable());
    }

    #[test]
    fn test_display_prints_rows() {
        let grid = Grid::ordered(2).unwrap();
        assert_eq!(grid.to_string(), "[1, 2]\n[3, 0]\n");
    }
}
