//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules and state management for the memory
//! game. It has **no dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical decks (tests, replays)
//! - **Testable**: Unit tests cover every transition rule
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`card`]: a grid position with its symbol and visibility flags
//! - [`deck`]: the deck initializer (16 cards, 8 pairs, shuffled)
//! - [`game_state`]: the move evaluator, counters, win detection, revert queue
//! - [`rng`]: seeded Fisher-Yates shuffling
//! - [`config`]: environment-driven settings
//!
//! # Game Rules
//!
//! - The player names two positions (1..16) per move
//! - Equal symbols stay face up for good; a mismatch is hidden again after 300ms
//! - Every accepted move counts as an attempt
//! - The game is won once all 8 pairs are matched
//!
//! # Example
//!
//! ```
//! use tui_memory_core::{Deck, GameState, MoveError};
//!
//! let deck = Deck::from_letters("ABABCDCDEFEFGHGH").unwrap();
//! let mut game = GameState::from_deck(deck, 1);
//!
//! assert!(game.submit("1", "3").unwrap().is_match());
//! assert_eq!(game.submit("1", "2"), Err(MoveError::AlreadyMatched));
//! assert_eq!(game.matches(), 1);
//! assert_eq!(game.attempts(), 1);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed time; it hides a pending mismatched pair once its delay runs out.

pub mod card;
pub mod config;
pub mod deck;
pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use tui_memory_types as types;

// Re-export commonly used types for convenience
pub use card::{Card, CardFace};
pub use config::GameConfig;
pub use deck::{Deck, LayoutError};
pub use game_state::{parse_position, GameState, MoveError, MoveOutcome, PendingRevert};
pub use rng::DeckRng;
pub use snapshot::GameSnapshot;
