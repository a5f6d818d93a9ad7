use crate::card::Card;
use crate::types::{Symbol, CARD_COUNT, PAIR_COUNT};

/// Read-only copy of the game state handed to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub cards: [Card; CARD_COUNT],
    pub matches: u8,
    pub attempts: u32,
    pub won: bool,
    pub revert_pending: bool,
    pub episode_id: u32,
    pub seed: u64,
}

impl GameSnapshot {
    /// Whether the next frame may differ without any input.
    pub fn animating(&self) -> bool {
        self.revert_pending
    }
}

impl Default for GameSnapshot {
    /// Placeholder grid: every card hidden, symbols in pair order.
    fn default() -> Self {
        Self {
            cards: std::array::from_fn(|i| Card::new(i as u8, Symbol::ALL[i % PAIR_COUNT])),
            matches: 0,
            attempts: 0,
            won: false,
            revert_pending: false,
            episode_id: 0,
            seed: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardFace;

    #[test]
    fn default_snapshot_is_a_hidden_fresh_grid() {
        let snap = GameSnapshot::default();
        for (i, card) in snap.cards.iter().enumerate() {
            assert_eq!(card.id() as usize, i);
            assert_eq!(card.face(), CardFace::Hidden);
        }
        assert_eq!((snap.matches, snap.attempts, snap.won), (0, 0, false));
        assert!(!snap.animating());
    }
}
