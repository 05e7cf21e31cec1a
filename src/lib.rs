//! slide15 (workspace facade crate).
//!
//! Re-exports the member crates under one roof so the binary, integration
//! tests and benches can use `slide15::{core,engine,input,term,types}`.

pub mod logging;

pub use slide15_core as core;
pub use slide15_engine as engine;
pub use slide15_input as input;
pub use slide15_term as term;
pub use slide15_types as types;
