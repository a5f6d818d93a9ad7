//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! The playfield is a fixed 4x4 grid of cards:
//!
//! - **Columns / rows**: 4 each
//! - **Cards**: 16, addressed by position 0..15 (users type 1..16)
//! - **Pairs**: 8, one per [`Symbol`]
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `REVERT_DELAY_MS` | 300 | How long a mismatched pair stays revealed |
//! | `STATIC_FRAME_INTERVAL_MS` | 250 | Redraw interval for unchanged frames |
//!
//! # Examples
//!
//! ```
//! use tui_memory_types::{Symbol, CARD_COUNT, PAIR_COUNT};
//!
//! assert_eq!(Symbol::ALL.len(), PAIR_COUNT);
//! assert_eq!(CARD_COUNT, PAIR_COUNT * 2);
//!
//! assert_eq!(Symbol::from_letter('c'), Some(Symbol::Diamond));
//! assert_eq!(Symbol::Club.letter(), 'D');
//! ```

/// Grid width in cards
pub const GRID_COLS: usize = 4;

/// Grid height in cards
pub const GRID_ROWS: usize = 4;

/// Total number of cards on the grid
pub const CARD_COUNT: usize = GRID_COLS * GRID_ROWS;

/// Number of distinct symbols (each appears twice)
pub const PAIR_COUNT: usize = CARD_COUNT / 2;

/// Lowest user-facing position selector
pub const MIN_POSITION: u32 = 1;

/// Highest user-facing position selector
pub const MAX_POSITION: u32 = CARD_COUNT as u32;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Delay before a mismatched pair is hidden again
pub const REVERT_DELAY_MS: u32 = 300;

/// Minimum redraw interval while nothing on screen changes
pub const STATIC_FRAME_INTERVAL_MS: u64 = 250;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_constants_are_consistent() {
        assert_eq!(CARD_COUNT, 16);
        assert_eq!(PAIR_COUNT, 8);
        assert_eq!(MAX_POSITION as usize, CARD_COUNT);
        assert_eq!(REVERT_DELAY_MS, 300);
    }
}

/// The eight card symbols
///
/// Each symbol has a single-width terminal glyph:
/// - **Spade** `♠`, **Heart** `♥`, **Diamond** `♦`, **Club** `♣`
/// - **Star** `★`, **Sun** `☼`, **Note** `♪`, **Yen** `¥`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    Spade,
    Heart,
    Diamond,
    Club,
    Star,
    Sun,
    Note,
    Yen,
}

impl Symbol {
    /// The fixed symbol set, in declaration order.
    pub const ALL: [Symbol; PAIR_COUNT] = [
        Symbol::Spade,
        Symbol::Heart,
        Symbol::Diamond,
        Symbol::Club,
        Symbol::Star,
        Symbol::Sun,
        Symbol::Note,
        Symbol::Yen,
    ];

    /// Glyph drawn on a revealed card.
    pub fn glyph(self) -> char {
        match self {
            Symbol::Spade => '♠',
            Symbol::Heart => '♥',
            Symbol::Diamond => '♦',
            Symbol::Club => '♣',
            Symbol::Star => '★',
            Symbol::Sun => '☼',
            Symbol::Note => '♪',
            Symbol::Yen => '¥',
        }
    }

    /// Stable ASCII letter `A`..`H` (used in logs and layout strings).
    pub fn letter(self) -> char {
        match self {
            Symbol::Spade => 'A',
            Symbol::Heart => 'B',
            Symbol::Diamond => 'C',
            Symbol::Club => 'D',
            Symbol::Star => 'E',
            Symbol::Sun => 'F',
            Symbol::Note => 'G',
            Symbol::Yen => 'H',
        }
    }

    /// Parse a symbol from its letter (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_memory_types::Symbol;
    ///
    /// assert_eq!(Symbol::from_letter('a'), Some(Symbol::Spade));
    /// assert_eq!(Symbol::from_letter('E'), Some(Symbol::Star));
    /// assert_eq!(Symbol::from_letter('x'), None);
    /// ```
    pub fn from_letter(c: char) -> Option<Self> {
        let upper = c.to_ascii_uppercase();
        Self::ALL.iter().copied().find(|s| s.letter() == upper)
    }

    /// Index of this symbol within [`Symbol::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Which of the two entry fields has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Field {
    #[default]
    First,
    Second,
}

/// Player actions produced by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Type a digit into the focused field
    Digit(u8),
    /// Delete the last digit of the focused field
    Erase,
    /// Move focus to the given field
    Focus(Field),
    /// Evaluate the two entered positions
    Submit,
    /// Deal a new deck
    Restart,
}
