//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and keeps the two
//! position entry fields the player types into.

pub mod handler;
pub mod map;

pub use tui_memory_types as types;

pub use handler::{SelectionInput, MAX_FIELD_LEN};
pub use map::{handle_key_event, should_quit};
