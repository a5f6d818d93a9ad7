//! Game state module - the move evaluator
//!
//! Owns the card grid and counters and exposes the only three ways to change
//! them: [`GameState::restart`], [`GameState::flip_pair`] (and its text front
//! end [`GameState::submit`]), and [`GameState::tick`].
//!
//! A mismatched pair stays revealed for `revert_delay_ms` and is hidden again
//! by `tick`. At most one revert is pending: an accepted move applies the
//! pending revert before it evaluates, so moves and reverts are processed in
//! arrival order and never overlap. Rejected moves touch nothing.

use std::fmt;

use crate::card::Card;
use crate::deck::Deck;
use crate::rng::DeckRng;
use crate::snapshot::GameSnapshot;
use crate::types::{CARD_COUNT, MAX_POSITION, MIN_POSITION, PAIR_COUNT, REVERT_DELAY_MS};

/// Why a submitted pair was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveError {
    /// A selector is not a number or lies outside 1..16
    InvalidSelection,
    /// Both selectors name the same card
    SameCard,
    /// At least one selected card is already matched
    AlreadyMatched,
}

impl MoveError {
    pub fn code(self) -> &'static str {
        match self {
            MoveError::InvalidSelection => "invalid_selection",
            MoveError::SameCard => "same_card",
            MoveError::AlreadyMatched => "already_matched",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            MoveError::InvalidSelection => "Please enter valid card numbers (1-16)",
            MoveError::SameCard => "Please select two different cards",
            MoveError::AlreadyMatched => "One or both cards are already matched",
        }
    }
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for MoveError {}

/// Result of an accepted move (0-based positions)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    Match { first: usize, second: usize, won: bool },
    Mismatch { first: usize, second: usize },
}

impl MoveOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, MoveOutcome::Match { .. })
    }
}

/// A mismatched pair waiting to be hidden again
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PendingRevert {
    pub first: usize,
    pub second: usize,
    pub remaining_ms: u32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    cards: [Card; CARD_COUNT],
    matches: u8,
    attempts: u32,
    won: bool,
    pending_revert: Option<PendingRevert>,
    revert_delay_ms: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    rng: DeckRng,
}

impl GameState {
    /// Create a new game and deal a deck from the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_rng(DeckRng::new(seed))
    }

    /// Create a new game with an unseeded (entropy) deck
    pub fn from_entropy() -> Self {
        Self::with_rng(DeckRng::from_entropy())
    }

    pub fn with_rng(mut rng: DeckRng) -> Self {
        let deck = Deck::shuffled(&mut rng);
        log::info!("dealt deck {} (seed {})", deck.letters(), rng.seed());
        Self::from_parts(deck, rng)
    }

    /// Start from a fixed layout. Restarts still shuffle with `seed`.
    pub fn from_deck(deck: Deck, seed: u64) -> Self {
        Self::from_parts(deck, DeckRng::new(seed))
    }

    fn from_parts(deck: Deck, rng: DeckRng) -> Self {
        Self {
            cards: deck.into_cards(),
            matches: 0,
            attempts: 0,
            won: false,
            pending_revert: None,
            revert_delay_ms: REVERT_DELAY_MS,
            episode_id: 0,
            rng,
        }
    }

    /// Override the mismatch revert delay
    pub fn with_revert_delay_ms(mut self, delay_ms: u32) -> Self {
        self.revert_delay_ms = delay_ms;
        self
    }

    pub fn cards(&self) -> &[Card; CARD_COUNT] {
        &self.cards
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn matches(&self) -> u8 {
        self.matches
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn pending_revert(&self) -> Option<PendingRevert> {
        self.pending_revert
    }

    pub fn revert_delay_ms(&self) -> u32 {
        self.revert_delay_ms
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Deal a fresh deck and reset every counter.
    ///
    /// The RNG stream continues, so a seeded session stays reproducible across restarts.
    pub fn restart(&mut self) {
        let deck = Deck::shuffled(&mut self.rng);
        self.cards = deck.into_cards();
        self.matches = 0;
        self.attempts = 0;
        self.won = false;
        self.pending_revert = None;
        self.episode_id = self.episode_id.wrapping_add(1);
        log::info!("restart: episode {} dealt {}", self.episode_id, deck.letters());
    }

    /// Evaluate a pair given as user-facing text (1-based positions).
    pub fn submit(&mut self, first: &str, second: &str) -> Result<MoveOutcome, MoveError> {
        let result = match (parse_position(first), parse_position(second)) {
            (Some(a), Some(b)) => self.flip_pair(a, b),
            _ => Err(MoveError::InvalidSelection),
        };
        if let Err(err) = result {
            log::debug!("rejected {:?},{:?}: {}", first, second, err.code());
        }
        result
    }

    /// Evaluate a pair of 0-based positions.
    pub fn flip_pair(&mut self, first: usize, second: usize) -> Result<MoveOutcome, MoveError> {
        self.validate(first, second)?;

        // Serialize with the previous mismatch before touching the grid.
        self.flush_revert();

        self.cards[first].reveal();
        self.cards[second].reveal();
        self.attempts = self.attempts.saturating_add(1);

        if self.cards[first].symbol() == self.cards[second].symbol() {
            self.cards[first].mark_matched();
            self.cards[second].mark_matched();
            self.matches += 1;
            if self.matches as usize == PAIR_COUNT {
                self.won = true;
                log::info!("won in {} attempts", self.attempts);
            }
            log::debug!(
                "match {}+{} ({}), matches={}",
                first + 1,
                second + 1,
                self.cards[first].symbol().letter(),
                self.matches
            );
            Ok(MoveOutcome::Match {
                first,
                second,
                won: self.won,
            })
        } else {
            self.pending_revert = Some(PendingRevert {
                first,
                second,
                remaining_ms: self.revert_delay_ms,
            });
            log::debug!("mismatch {}+{}, revert in {}ms", first + 1, second + 1, self.revert_delay_ms);
            Ok(MoveOutcome::Mismatch { first, second })
        }
    }

    fn validate(&self, first: usize, second: usize) -> Result<(), MoveError> {
        if first >= CARD_COUNT || second >= CARD_COUNT {
            return Err(MoveError::InvalidSelection);
        }
        if first == second {
            return Err(MoveError::SameCard);
        }
        if self.cards[first].is_matched() || self.cards[second].is_matched() {
            return Err(MoveError::AlreadyMatched);
        }
        Ok(())
    }

    /// Advance timers by `elapsed_ms`.
    ///
    /// Returns true when a pending revert fired during this tick.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let Some(pending) = self.pending_revert.as_mut() else {
            return false;
        };

        pending.remaining_ms = pending.remaining_ms.saturating_sub(elapsed_ms);
        if pending.remaining_ms > 0 {
            return false;
        }

        self.flush_revert();
        true
    }

    fn flush_revert(&mut self) {
        if let Some(pending) = self.pending_revert.take() {
            self.cards[pending.first].hide();
            self.cards[pending.second].hide();
            log::debug!("reverted {}+{}", pending.first + 1, pending.second + 1);
        }
    }

    /// Number of cards revealed but not yet matched.
    pub fn revealed_count(&self) -> usize {
        self.cards
            .iter()
            .filter(|c| c.is_flipped() && !c.is_matched())
            .count()
    }

    /// Write the current state into an existing snapshot.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.cards = self.cards;
        out.matches = self.matches;
        out.attempts = self.attempts;
        out.won = self.won;
        out.revert_pending = self.pending_revert.is_some();
        out.episode_id = self.episode_id;
        out.seed = self.rng.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

/// Parse a 1-based position selector into a 0-based index.
pub fn parse_position(s: &str) -> Option<usize> {
    let n: i64 = s.trim().parse().ok()?;
    if n < MIN_POSITION as i64 || n > MAX_POSITION as i64 {
        return None;
    }
    Some((n - 1) as usize)
}
