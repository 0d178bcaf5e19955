use crate::types::FoundWord;

/// Receiver for scored words.
pub trait FoundWords {
    /// True when `word` (uppercase) was already scored this session.
    fn has_found(&self, word: &str) -> bool;
    /// Called exactly once per successful validation.
    fn append_found_word(&mut self, found: FoundWord);
}

/// Found words and score for the running level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSession {
    found_words: Vec<FoundWord>,
    total_points: u32,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn found_words(&self) -> &[FoundWord] {
        &self.found_words
    }

    pub fn total_points(&self) -> u32 {
        self.total_points
    }

    pub fn reset(&mut self) {
        self.found_words.clear();
        self.total_points = 0;
    }
}

impl FoundWords for GameSession {
    fn has_found(&self, word: &str) -> bool {
        self.found_words.iter().any(|found| found.word == word)
    }

    fn append_found_word(&mut self, found: FoundWord) {
        self.total_points = self.total_points.saturating_add(found.points);
        self.found_words.push(found);
    }
}
