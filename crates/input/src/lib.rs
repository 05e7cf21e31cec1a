//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of the engine. It maps `crossterm`
//! mouse and key events into [`PointerEvent`]s (in terminal cell coordinates)
//! and [`Command`]s, and tracks the size-control position.

pub mod control;
pub mod map;

pub use slide15_types as types;

pub use control::SizeControl;
pub use map::{handle_key_event, handle_mouse_event, map_event, should_quit, Command, InputEvent, PointerEvent};
