//! Runtime configuration read from environment variables.

use crate::game_state::GameState;
use crate::rng::DeckRng;
use crate::types::REVERT_DELAY_MS;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Deck seed; `None` draws one from entropy.
    pub seed: Option<u64>,
    pub revert_delay_ms: u32,
    /// File that receives log output; logging is off when unset.
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            revert_delay_ms: REVERT_DELAY_MS,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup. Invalid values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("MEMORY_SEED").and_then(|s| s.trim().parse().ok());

        let revert_delay_ms = lookup("MEMORY_REVERT_DELAY_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(REVERT_DELAY_MS);

        let log_path = lookup("MEMORY_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            seed,
            revert_delay_ms,
            log_path,
        }
    }

    /// Deal the first game for this configuration.
    pub fn new_game(&self) -> GameState {
        let rng = match self.seed {
            Some(seed) => DeckRng::new(seed),
            None => DeckRng::from_entropy(),
        };
        GameState::with_rng(rng).with_revert_delay_ms(self.revert_delay_ms)
    }
}
