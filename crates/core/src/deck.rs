//! Deck module - the deck initializer
//!
//! Builds the 16-card grid: every symbol of [`Symbol::ALL`] twice, shuffled,
//! then numbered 0..15 by grid position.

use std::fmt;

use crate::card::Card;
use crate::rng::DeckRng;
use crate::types::{Symbol, CARD_COUNT, PAIR_COUNT};

/// A full grid of cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Deck {
    cards: [Card; CARD_COUNT],
}

/// Rejected fixed layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// `symbol` appears `count` times instead of twice
    WrongCount { symbol: Symbol, count: usize },
    /// A layout string had the wrong length
    WrongLength(usize),
    /// A layout string contained a character that is not a symbol letter
    UnknownLetter(char),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::WrongCount { symbol, count } => write!(
                f,
                "symbol {} appears {} times (expected 2)",
                symbol.letter(),
                count
            ),
            LayoutError::WrongLength(len) => {
                write!(f, "layout has {} cards (expected {})", len, CARD_COUNT)
            }
            LayoutError::UnknownLetter(c) => write!(f, "unknown symbol letter {:?}", c),
        }
    }
}

impl std::error::Error for LayoutError {}

impl Deck {
    /// Deal a uniformly shuffled deck.
    pub fn shuffled(rng: &mut DeckRng) -> Self {
        let mut symbols = [Symbol::Spade; CARD_COUNT];
        for (i, slot) in symbols.iter_mut().enumerate() {
            *slot = Symbol::ALL[i % PAIR_COUNT];
        }
        rng.shuffle(&mut symbols);
        Self::numbered(symbols)
    }

    /// Build a deck with a fixed layout, one symbol per position.
    pub fn from_symbols(symbols: [Symbol; CARD_COUNT]) -> Result<Self, LayoutError> {
        let mut counts = [0usize; PAIR_COUNT];
        for s in symbols.iter() {
            counts[s.index()] += 1;
        }
        for symbol in Symbol::ALL {
            let count = counts[symbol.index()];
            if count != 2 {
                return Err(LayoutError::WrongCount { symbol, count });
            }
        }
        Ok(Self::numbered(symbols))
    }

    /// Build a deck from a string of symbol letters, e.g. `"ABABCDCDEFEFGHGH"`.
    ///
    /// Whitespace is ignored.
    pub fn from_letters(layout: &str) -> Result<Self, LayoutError> {
        let letters: Vec<char> = layout.chars().filter(|c| !c.is_whitespace()).collect();
        if letters.len() != CARD_COUNT {
            return Err(LayoutError::WrongLength(letters.len()));
        }

        let mut symbols = [Symbol::Spade; CARD_COUNT];
        for (slot, &c) in symbols.iter_mut().zip(letters.iter()) {
            *slot = Symbol::from_letter(c).ok_or(LayoutError::UnknownLetter(c))?;
        }
        Self::from_symbols(symbols)
    }

    fn numbered(symbols: [Symbol; CARD_COUNT]) -> Self {
        let mut cards = [Card::new(0, Symbol::Spade); CARD_COUNT];
        for (i, (card, symbol)) in cards.iter_mut().zip(symbols).enumerate() {
            *card = Card::new(i as u8, symbol);
        }
        Self { cards }
    }

    pub fn cards(&self) -> &[Card; CARD_COUNT] {
        &self.cards
    }

    pub(crate) fn into_cards(self) -> [Card; CARD_COUNT] {
        self.cards
    }

    /// Symbol letters in grid order.
    pub fn letters(&self) -> String {
        self.cards.iter().map(|c| c.symbol().letter()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shuffled_deck_has_every_symbol_twice() {
        let mut rng = DeckRng::new(5);
        let deck = Deck::shuffled(&mut rng);

        let mut counts = [0usize; PAIR_COUNT];
        for card in deck.cards() {
            counts[card.symbol().index()] += 1;
        }
        assert!(counts.iter().all(|&c| c == 2), "counts: {:?}", counts);
    }

    #[test]
    fn cards_are_numbered_by_position() {
        let mut rng = DeckRng::new(5);
        let deck = Deck::shuffled(&mut rng);
        for (i, card) in deck.cards().iter().enumerate() {
            assert_eq!(card.id() as usize, i);
            assert!(!card.is_flipped());
            assert!(!card.is_matched());
        }
    }

    #[test]
    fn from_letters_builds_fixed_layout() {
        let deck = Deck::from_letters("ABAB CDCD EFEF GHGH").unwrap();
        assert_eq!(deck.letters(), "ABABCDCDEFEFGHGH");
        assert_eq!(deck.cards()[2].symbol(), Symbol::Spade);
    }

    #[test]
    fn from_letters_rejects_bad_layouts() {
        assert_eq!(
            Deck::from_letters("ABAB"),
            Err(LayoutError::WrongLength(4))
        );
        assert_eq!(
            Deck::from_letters("ABABCDCDEFEFGHGZ"),
            Err(LayoutError::UnknownLetter('Z'))
        );
        assert_eq!(
            Deck::from_letters("AAABCDCDEFEFGHGH"),
            Err(LayoutError::WrongCount {
                symbol: Symbol::Spade,
                count: 3
            })
        );
    }

    #[test]
    fn layout_error_messages_are_readable() {
        let err = LayoutError::WrongCount {
            symbol: Symbol::Heart,
            count: 1,
        };
        assert_eq!(err.to_string(), "symbol B appears 1 times (expected 2)");
    }
}
