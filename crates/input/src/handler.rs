//! Entry fields for the two position selectors.
//!
//! Holds the raw text the player typed. Parsing and validation belong to the
//! game state; this type only edits text and tracks focus.

use arrayvec::ArrayString;

use crate::types::{Field, GameAction};

/// Maximum characters per field ("16" is the longest valid entry).
pub const MAX_FIELD_LEN: usize = 2;

/// The pair of position entry fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionInput {
    first: ArrayString<MAX_FIELD_LEN>,
    second: ArrayString<MAX_FIELD_LEN>,
    focus: Field,
}

impl SelectionInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first(&self) -> &str {
        self.first.as_str()
    }

    pub fn second(&self) -> &str {
        self.second.as_str()
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_empty() && self.second.is_empty()
    }

    fn focused_mut(&mut self) -> &mut ArrayString<MAX_FIELD_LEN> {
        match self.focus {
            Field::First => &mut self.first,
            Field::Second => &mut self.second,
        }
    }

    /// Append a digit to the focused field.
    ///
    /// Filling the first field moves focus to the second one. Digits past the
    /// field width are dropped.
    pub fn push_digit(&mut self, digit: u8) -> bool {
        if digit > 9 {
            return false;
        }
        let ch = char::from(b'0' + digit);
        if self.focused_mut().try_push(ch).is_err() {
            return false;
        }
        if self.focus == Field::First && self.first.is_full() {
            self.focus = Field::Second;
        }
        true
    }

    /// Remove the last character of the focused field.
    ///
    /// Erasing an empty second field steps back into the first one.
    pub fn erase(&mut self) {
        if self.focus == Field::Second && self.second.is_empty() {
            self.focus = Field::First;
        }
        self.focused_mut().pop();
    }

    /// Focus a field. Focusing the already focused field is a no-op, so Tab
    /// after an auto-advance stays on the second field.
    pub fn set_focus(&mut self, field: Field) {
        self.focus = field;
    }

    /// Empty both fields and focus the first.
    pub fn clear(&mut self) {
        self.first.clear();
        self.second.clear();
        self.focus = Field::First;
    }

    /// Apply an editing action.
    ///
    /// Returns the action back when it is not an editing action (submit, restart)
    /// so the caller can route it to the game.
    pub fn handle(&mut self, action: GameAction) -> Option<GameAction> {
        match action {
            GameAction::Digit(d) => {
                self.push_digit(d);
                None
            }
            GameAction::Erase => {
                self.erase();
                None
            }
            GameAction::Focus(field) => {
                self.set_focus(field);
                None
            }
            GameAction::Submit | GameAction::Restart => Some(action),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_fills_first_then_second() {
        let mut input = SelectionInput::new();
        input.push_digit(1);
        assert_eq!(input.focus(), Field::First);
        input.push_digit(2);
        assert_eq!(input.first(), "12");
        assert_eq!(input.focus(), Field::Second);

        input.push_digit(7);
        assert_eq!(input.second(), "7");
    }

    #[test]
    fn extra_digits_are_dropped() {
        let mut input = SelectionInput::new();
        input.set_focus(Field::Second);
        assert!(input.push_digit(1));
        assert!(input.push_digit(6));
        assert!(!input.push_digit(3));
        assert_eq!(input.second(), "16");
        assert!(!input.push_digit(12));
    }

    #[test]
    fn erase_steps_back_into_first_field() {
        let mut input = SelectionInput::new();
        input.push_digit(1);
        input.push_digit(5);
        assert_eq!(input.focus(), Field::Second);

        input.erase();
        assert_eq!(input.focus(), Field::First);
        assert_eq!(input.first(), "1");

        input.erase();
        input.erase();
        assert!(input.is_empty());
    }

    #[test]
    fn clear_resets_focus() {
        let mut input = SelectionInput::new();
        input.push_digit(4);
        input.set_focus(Field::Second);
        input.push_digit(9);
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.focus(), Field::First);
    }

    #[test]
    fn handle_routes_non_editing_actions() {
        let mut input = SelectionInput::new();
        assert_eq!(input.handle(GameAction::Digit(3)), None);
        assert_eq!(input.handle(GameAction::Focus(Field::Second)), None);
        assert_eq!(input.handle(GameAction::Digit(8)), None);
        assert_eq!(input.handle(GameAction::Submit), Some(GameAction::Submit));
        assert_eq!(input.handle(GameAction::Restart), Some(GameAction::Restart));
        assert_eq!(input.first(), "3");
        assert_eq!(input.second(), "8");
    }

    #[test]
    fn tab_after_full_first_field_keeps_second_focused() {
        let mut input = SelectionInput::new();
        for action in [
            GameAction::Digit(1),
            GameAction::Digit(0),
            GameAction::Focus(Field::Second),
            GameAction::Digit(1),
            GameAction::Digit(2),
        ] {
            input.handle(action);
        }
        assert_eq!((input.first(), input.second()), ("10", "12"));
    }

    #[test]
    fn focus_first_returns_to_first_field() {
        let mut input = SelectionInput::new();
        input.handle(GameAction::Digit(1));
        input.handle(GameAction::Focus(Field::Second));
        input.handle(GameAction::Digit(5));
        input.handle(GameAction::Focus(Field::First));
        input.handle(GameAction::Digit(3));
        assert_eq!((input.first(), input.second()), ("13", "5"));
        assert_eq!(input.focus(), Field::Second);
    }
}
