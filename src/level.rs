use crate::board::LetterBoard;
use crate::game::GameBoard;
use crate::session::GameSession;
use crate::types::{FoundWord, LockSnapshot, Position, SessionState};
use crate::word_list::LevelWordList;

/// A running level: the interactive board plus the session it scores into.
pub struct Level {
    game: GameBoard,
    session: GameSession,
}

impl Level {
    pub fn new(game: GameBoard) -> Self {
        Self {
            game,
            session: GameSession::new(),
        }
    }

    /// Builds a level from the word-selection payload.
    pub fn from_payload(rows: Vec<Vec<String>>, words: Vec<String>) -> Result<Self, String> {
        let board = LetterBoard::from_rows(rows)?;
        let words = LevelWordList::new(words);
        if words.is_empty() {
            return Err("level has no words".to_string());
        }
        log::info!(
            "level started: {}x{} board, {} words",
            board.width(),
            board.height(),
            words.len()
        );
        Ok(Self::new(GameBoard::new(board, words)))
    }

    pub fn pointer_down(&mut self, row: u8, col: u8) {
        self.game.pointer_down(row, col);
    }

    pub fn pointer_move(&mut self, row: u8, col: u8) {
        self.game.pointer_move(row, col);
    }

    pub fn pointer_up(&mut self) -> Option<FoundWord> {
        self.game.pointer_up(&mut self.session)
    }

    pub fn submit_path(&mut self, path: Vec<Position>) -> Option<FoundWord> {
        self.game.submit_path(path, &mut self.session)
    }

    pub fn selection(&self) -> Vec<Position> {
        self.game.selection().to_vec()
    }

    pub fn session_state(&self) -> SessionState {
        SessionState {
            found_words: self.session.found_words().to_vec(),
            total_points: self.session.total_points(),
            words_remaining: self.game.words_remaining(&self.session),
            is_level_complete: self.game.is_complete(&self.session),
        }
    }

    pub fn lock_snapshot(&self) -> LockSnapshot {
        self.game.lock_snapshot()
    }

    pub fn reset_session(&mut self) {
        self.session.reset();
    }
}
