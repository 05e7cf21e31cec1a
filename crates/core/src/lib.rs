//! Core puzzle logic module - pure, deterministic, and testable
//!
//! This module contains the tile topology and the geometry that ties it to a
//! render surface. It has **zero dependencies** on UI, input or I/O, making it:
//!
//! - **Deterministic**: Same seed produces the same shuffled grid
//! - **Testable**: Every rule is a plain function over plain data
//! - **Portable**: Runs headless, in a terminal, or behind any other surface
//!
//! # Module Structure
//!
//! - [`grid`]: NxN tile grid, shuffle, adjacency, slide and win detection
//! - [`layout`]: Pure mapping from grid coordinates to surface rectangles
//! - [`rng`]: Seedable LCG used by the shuffle
//! - [`snapshot`]: Per-frame view of tiles, rectangles and the solved flag
//! - [`error`]: Rejected grid configurations
//!
//! # Rules
//!
//! - A tile may only slide into the blank when it is orthogonally adjacent.
//! - The puzzle is solved when the row-major values read `1, 2, …, N²-1, 0`.
//! - The shuffle permutes rows, then columns within each row. It does not
//!   preserve the sliding parity, so a shuffled grid may be unsolvable;
//!   [`Grid::is_solvable`] reports which.
//!
//! # Example
//!
//! ```
//! use slide15_core::{Grid, SimpleRng};
//! use slide15_core::types::{Direction, Pos};
//!
//! let mut grid = Grid::ordered(4).unwrap();
//! assert!(grid.is_solved());
//!
//! // The 12 tile sits right above the blank.
//! assert_eq!(grid.slide(Pos::new(2, 3)), Some(Direction::Down));
//! assert!(!grid.is_solved());
//!
//! grid.shuffle(&mut SimpleRng::new(12345));
//! assert_eq!(grid.values().filter(|&v| v == 0).count(), 1);
//! ```

pub mod error;
pub mod grid;
pub mod layout;
pub mod rng;
pub mod snapshot;

pub use slide15_types as types;

// Re-export commonly used types for convenience
pub use error::{GridError, MAX_GRID_SIZE};
pub use grid::{Grid, Tile};
pub use layout::{layout, Layout};
pub use rng::SimpleRng;
pub use snapshot::{PuzzleSnapshot, TileView};
