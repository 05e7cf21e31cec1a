//! Puzzle engine: the single stateful component of the game.
//!
//! [`PuzzleEngine`] owns the grid, the rectangles its tiles currently occupy on
//! the render surface, and the state of the pointer gesture in progress. It is
//! driven entirely by its caller (pointer events, surface resizes, size
//! changes) and never calls back into presentation code.
//!
//! # Gesture lifecycle
//!
//! ```text
//! Idle --pointer_down on draggable tile--> Selected
//! Selected/Dragging --pointer_move--> Dragging
//! Selected/Dragging --pointer_up--> Committed | Cancelled --> Idle
//! ```
//!
//! # Example
//!
//! ```
//! use slide15_engine::{DragOutcome, PuzzleEngine};
//! use slide15_engine::core::Grid;
//! use slide15_engine::types::{Point, Pos};
//!
//! let mut engine = PuzzleEngine::with_grid(Grid::ordered(4).unwrap(), 1);
//! engine.resize(600.0, 600.0);
//!
//! // Drag the 12 tile down into the blank.
//! let start = engine.tile_bounds(Pos::new(2, 3)).unwrap();
//! assert!(engine.pointer_down(Point::new(start.center_x(), start.center_y())));
//! engine.pointer_move(Point::new(start.center_x(), 1000.0));
//! assert!(matches!(engine.pointer_up(), DragOutcome::Committed { .. }));
//!
//! assert_eq!(engine.locate_blank(), Pos::new(2, 3));
//! assert!(!engine.is_solved());
//! ```

pub mod config;
pub mod drag;
pub mod engine;

pub use slide15_core as core;
pub use slide15_types as types;

pub use config::EngineConfig;
pub use drag::{drag_rect, reaches_commit_threshold, DragOutcome, DragSession, Gesture};
pub use engine::{PuzzleEngine, Surface};
