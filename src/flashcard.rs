// src/flashcard.rs
use crate::text_data::{FlashcardRecord, FlashcardWord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Reveal,
    Record(bool),
}

/// Flashcard review state: an offset into the deck plus the card on screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlashcardSession {
    index: u32,
    current: Option<FlashcardWord>,
    revealed: bool,
    finished: bool,
}

impl FlashcardSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offset to request from `/next_word`.
    pub fn offset(&self) -> u32 {
        self.index
    }

    pub fn current(&self) -> Option<&FlashcardWord> {
        self.current.as_ref()
    }

    pub fn current_word(&self) -> Option<&str> {
        self.current.as_ref().and_then(|card| card.word.as_deref())
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn apply(&mut self, card: FlashcardWord) {
        self.revealed = false;
        if card.is_exhausted() {
            self.current = None;
            self.finished = true;
        } else {
            self.current = Some(card);
            self.finished = false;
        }
    }

    /// The reveal control stays on screen for as long as a card is shown.
    pub fn shows_reveal(&self) -> bool {
        self.current.is_some()
    }

    pub fn reveal(&mut self) -> bool {
        if self.current.is_none() || self.revealed {
            return false;
        }
        self.revealed = true;
        true
    }

    /// Payload for `/record_flashcard`, or `None` without a current word.
    pub fn record(&self, known: bool) -> Option<FlashcardRecord> {
        self.current_word().map(|word| FlashcardRecord {
            word: word.to_string(),
            known,
        })
    }

    pub fn advance(&mut self) {
        self.index += 1;
    }

    /// Maps a keyboard `key` to an action allowed in the current state.
    pub fn key_action(&self, key: &str) -> Option<KeyAction> {
        match key {
            " " | "Spacebar" if !self.revealed => Some(KeyAction::Reveal),
            "1" if self.revealed => Some(KeyAction::Record(true)),
            "2" if self.revealed => Some(KeyAction::Record(false)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(word: &str) -> FlashcardWord {
        FlashcardWord {
            word: Some(word.to_string()),
            pinyin: "māo".to_string(),
            meaning: "cat".to_string(),
        }
    }

    #[test]
    fn test_record_without_word_is_noop() {
        let session = FlashcardSession::new();
        assert!(session.record(true).is_none());
        assert_eq!(session.offset(), 0);
    }

    #[test]
    fn test_record_and_advance() {
        let mut session = FlashcardSession::new();
        session.apply(card("猫"));
        let record = session.record(false).unwrap();
        assert_eq!(record.word, "猫");
        assert!(!record.known);
        session.advance();
        assert_eq!(session.offset(), 1);
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            serde_json::json!({"word": "猫", "known": false})
        );
    }

    #[test]
    fn test_exhausted_deck() {
        let mut session = FlashcardSession::new();
        session.apply(card("猫"));
        session.apply(FlashcardWord {
            word: None,
            pinyin: String::new(),
            meaning: String::new(),
        });
        assert!(session.is_finished());
        assert!(session.current_word().is_none());
        assert!(!session.reveal());
        assert!(session.record(true).is_none());
    }

    #[test]
    fn test_reveal_is_one_way_per_card() {
        let mut session = FlashcardSession::new();
        session.apply(card("狗"));
        assert!(session.reveal());
        assert!(!session.reveal());
        assert!(session.is_revealed());
        session.apply(card("鱼"));
        assert!(!session.is_revealed());
    }

    #[test]
    fn test_reveal_control_survives_reveal() {
        let mut session = FlashcardSession::new();
        assert!(!session.shows_reveal());
        session.apply(card("猫"));
        assert!(session.shows_reveal());
        session.reveal();
        assert!(session.shows_reveal());
        session.apply(FlashcardWord {
            word: None,
            pinyin: String::new(),
            meaning: String::new(),
        });
        assert!(!session.shows_reveal());
    }

    #[test]
    fn test_key_bindings() {
        let mut session = FlashcardSession::new();
        session.apply(card("猫"));
        assert_eq!(session.key_action(" "), Some(KeyAction::Reveal));
        assert_eq!(session.key_action("1"), None);
        assert_eq!(session.key_action("2"), None);

        session.reveal();
        assert_eq!(session.key_action(" "), None);
        assert_eq!(session.key_action("1"), Some(KeyAction::Record(true)));
        assert_eq!(session.key_action("2"), Some(KeyAction::Record(false)));
        assert_eq!(session.key_action("3"), None);
    }
}
