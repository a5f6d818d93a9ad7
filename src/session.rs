//! Play session: routes input actions to the entry fields and the game.
//!
//! Holds everything the main loop mutates besides the terminal: the game
//! state, the two entry fields, and the last rejection message.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::core::{GameState, MoveError, MoveOutcome};
use crate::input::SelectionInput;
use crate::term::PromptView;
use crate::types::GameAction;

#[derive(Debug, Clone)]
pub struct Session {
    game: GameState,
    input: SelectionInput,
    message: Option<MoveError>,
}

impl Session {
    pub fn new(game: GameState) -> Self {
        Self {
            game,
            input: SelectionInput::new(),
            message: None,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn input(&self) -> &SelectionInput {
        &self.input
    }

    /// Rejection shown under the entry fields, if any.
    pub fn message(&self) -> Option<MoveError> {
        self.message
    }

    /// Apply one action.
    ///
    /// Returns the move result when the action was a submission. Accepted moves
    /// clear the fields and the message; rejected ones keep the fields so the
    /// player can correct them.
    pub fn apply(&mut self, action: GameAction) -> Option<Result<MoveOutcome, MoveError>> {
        match self.input.handle(action)? {
            GameAction::Submit => {
                let result = self.game.submit(self.input.first(), self.input.second());
                match result {
                    Ok(_) => {
                        self.input.clear();
                        self.message = None;
                    }
                    Err(err) => self.message = Some(err),
                }
                Some(result)
            }
            GameAction::Restart => {
                self.game.restart();
                self.input.clear();
                self.message = None;
                None
            }
            _ => None,
        }
    }

    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        self.game.tick(elapsed_ms)
    }

    pub fn animating(&self) -> bool {
        self.game.pending_revert().is_some()
    }

    pub fn prompt(&self) -> PromptView<'_> {
        PromptView {
            first: self.input.first(),
            second: self.input.second(),
            focus: self.input.focus(),
            message: self.message.map(MoveError::message),
        }
    }

    /// Hash of everything visible on screen, used to skip redundant redraws.
    pub fn fingerprint(&self) -> u64 {
        let mut h = DefaultHasher::new();
        self.game.snapshot().hash(&mut h);
        self.input.first().hash(&mut h);
        self.input.second().hash(&mut h);
        (self.input.focus() as u8).hash(&mut h);
        self.message.hash(&mut h);
        h.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Deck;
    use crate::types::Field;

    fn session() -> Session {
        let deck = Deck::from_letters("ABABCDCDEFEFGHGH").unwrap();
        Session::new(GameState::from_deck(deck, 3))
    }

    fn type_pair(s: &mut Session, first: &[u8], second: &[u8]) {
        for &d in first {
            s.apply(GameAction::Digit(d));
        }
        s.apply(GameAction::Focus(Field::Second));
        for &d in second {
            s.apply(GameAction::Digit(d));
        }
    }

    #[test]
    fn accepted_submit_clears_fields() {
        let mut s = session();
        type_pair(&mut s, &[1], &[3]);
        let result = s.apply(GameAction::Submit);
        assert!(matches!(result, Some(Ok(MoveOutcome::Match { .. }))));
        assert!(s.input().is_empty());
        assert_eq!(s.message(), None);
    }

    #[test]
    fn rejected_submit_keeps_fields_and_sets_message() {
        let mut s = session();
        type_pair(&mut s, &[5], &[5]);
        let result = s.apply(GameAction::Submit);
        assert_eq!(result, Some(Err(MoveError::SameCard)));
        assert_eq!(s.input().first(), "5");
        assert_eq!(s.input().second(), "5");
        assert_eq!(
            s.prompt().message,
            Some("Please select two different cards")
        );
    }

    #[test]
    fn new_error_replaces_previous_message() {
        let mut s = session();
        s.apply(GameAction::Submit);
        assert_eq!(s.message(), Some(MoveError::InvalidSelection));

        type_pair(&mut s, &[2], &[2]);
        s.apply(GameAction::Submit);
        assert_eq!(s.message(), Some(MoveError::SameCard));
    }

    #[test]
    fn restart_clears_everything() {
        let mut s = session();
        type_pair(&mut s, &[1], &[3]);
        s.apply(GameAction::Submit);
        s.apply(GameAction::Submit);
        assert!(s.message().is_some());

        s.apply(GameAction::Digit(4));
        s.apply(GameAction::Restart);
        assert!(s.input().is_empty());
        assert_eq!(s.message(), None);
        assert_eq!(s.game().attempts(), 0);
        assert_eq!(s.game().episode_id(), 1);
    }

    #[test]
    fn fingerprint_tracks_visible_changes() {
        let mut s = session();
        let before = s.fingerprint();
        s.apply(GameAction::Digit(7));
        let typed = s.fingerprint();
        assert_ne!(before, typed);
        assert_eq!(typed, s.fingerprint());
    }
}
