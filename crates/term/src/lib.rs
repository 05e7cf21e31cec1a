//! Terminal rendering for the puzzle.
//!
//! A small rendering layer that draws into a framebuffer and flushes it to the
//! terminal through crossterm, without a widget toolkit.
//!
//! - [`PuzzleView`] turns a `PuzzleSnapshot` into a framebuffer and owns the
//!   mapping between terminal cells and engine surface units
//! - [`TerminalRenderer`] diffs frames and writes them out

pub mod fb;
pub mod puzzle_view;
pub mod renderer;

pub use slide15_core as core;
pub use slide15_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use puzzle_view::{PuzzleView, Viewport};
pub use renderer::{changed_runs, encode_runs_into, TerminalRenderer};
