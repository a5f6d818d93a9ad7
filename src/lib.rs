//! TUI Memory (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_memory::{core,input,term,types}`
//! so the binary, tests and benches share one import path, plus the
//! [`Session`] that ties input, game state and view together.

pub use tui_memory_core as core;
pub use tui_memory_input as input;
pub use tui_memory_term as term;
pub use tui_memory_types as types;

pub mod session;

pub use session::Session;
