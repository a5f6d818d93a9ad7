//! Card module - a single grid position and its visibility state

use crate::types::Symbol;

/// What a card currently shows
///
/// `Hidden -> Revealed` on selection, then either `Matched` (terminal until the
/// next deal) or back to `Hidden` when a mismatch is reverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardFace {
    Hidden,
    Revealed,
    Matched,
}

/// One card on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    id: u8,
    symbol: Symbol,
    flipped: bool,
    matched: bool,
}

impl Card {
    pub(crate) fn new(id: u8, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            flipped: false,
            matched: false,
        }
    }

    /// Position on the grid (0..15)
    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn is_matched(&self) -> bool {
        self.matched
    }

    pub fn face(&self) -> CardFace {
        if self.matched {
            CardFace::Matched
        } else if self.flipped {
            CardFace::Revealed
        } else {
            CardFace::Hidden
        }
    }

    pub(crate) fn reveal(&mut self) {
        self.flipped = true;
    }

    pub(crate) fn mark_matched(&mut self) {
        self.flipped = true;
        self.matched = true;
    }

    /// Hide a revealed card. Matched cards stay face up.
    pub(crate) fn hide(&mut self) {
        if !self.matched {
            self.flipped = false;
        }
    }
}
