//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It renders
//! into a framebuffer that is then flushed to the terminal, instead of using
//! a widget toolkit.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep view code pure so layouts can be unit-tested cell by cell
//! - Only rewrite terminal rows that changed since the last frame

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use tui_memory_core as core;
pub use tui_memory_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, PromptView, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_full_into, encode_rows_into, TerminalRenderer};
