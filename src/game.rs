use crate::board::LetterBoard;
use crate::clock::{Clock, WebClock};
use crate::lock::{LockConfig, SubmissionLock};
use crate::path::is_linear_path;
use crate::scoring::{MIN_WORD_LENGTH, points_for_length};
use crate::selection::SelectionTracker;
use crate::session::FoundWords;
use crate::types::{FoundWord, LockSnapshot, Position};
use crate::word_list::LevelWordList;

/// Interactive board for one level: gestures in, found words out.
pub struct GameBoard {
    board: LetterBoard,
    words: LevelWordList,
    tracker: SelectionTracker,
    lock: SubmissionLock,
}

impl GameBoard {
    pub fn new(board: LetterBoard, words: LevelWordList) -> Self {
        Self::with_clock(board, words, LockConfig::default(), Box::new(WebClock::new()))
    }

    pub fn with_clock(
        board: LetterBoard,
        words: LevelWordList,
        config: LockConfig,
        clock: Box<dyn Clock>,
    ) -> Self {
        let tracker = SelectionTracker::new(board.width(), board.height());
        Self {
            board,
            words,
            tracker,
            lock: SubmissionLock::new(config, clock),
        }
    }

    pub fn board(&self) -> &LetterBoard {
        &self.board
    }

    pub fn words(&self) -> &LevelWordList {
        &self.words
    }

    pub fn pointer_down(&mut self, row: u8, col: u8) {
        self.tracker.start(row, col);
    }

    pub fn pointer_move(&mut self, row: u8, col: u8) {
        self.tracker.extend(row, col);
    }

    /// Ends the gesture and scores it. Returns the new found word, if any.
    pub fn pointer_up(&mut self, session: &mut impl FoundWords) -> Option<FoundWord> {
        let path = self.tracker.end();
        self.submit_path(path, session)
    }

    pub fn current_cell(&self) -> Option<Position> {
        self.tracker.current()
    }

    pub fn selection(&self) -> &[Position] {
        self.tracker.path()
    }

    /// Validates a finished path and scores it.
    ///
    /// Every rejection is silent: short or bent paths, a held or debounced
    /// lock, words off the list and words already found all return `None`.
    pub fn submit_path(
        &mut self,
        path: Vec<Position>,
        session: &mut impl FoundWords,
    ) -> Option<FoundWord> {
        if path.len() < MIN_WORD_LENGTH || !is_linear_path(&path) {
            return None;
        }
        let candidate = self.board.word_along(&path)?;

        if !self.lock.acquire(&candidate) {
            return None;
        }
        let _guard = ReleaseOnDrop(&mut self.lock);

        if !self.words.contains(&candidate) {
            log::debug!("{candidate} is not a level word");
            return None;
        }
        if session.has_found(&candidate) {
            log::debug!("{candidate} was already found");
            return None;
        }

        let found = FoundWord {
            points: points_for_length(candidate.chars().count()),
            word: candidate,
            positions: path,
        };
        log::info!("found {} for {} points", found.word, found.points);
        session.append_found_word(found.clone());
        Some(found)
    }

    /// Level words not yet found in `session`.
    pub fn words_remaining(&self, session: &impl FoundWords) -> usize {
        self.words
            .iter()
            .filter(|word| !session.has_found(word))
            .count()
    }

    /// True once every level word has been found.
    pub fn is_complete(&self, session: &impl FoundWords) -> bool {
        !self.words.is_empty() && self.words_remaining(session) == 0
    }

    pub fn lock_snapshot(&self) -> LockSnapshot {
        self.lock.snapshot()
    }
}

struct ReleaseOnDrop<'a>(&'a mut SubmissionLock);

impl Drop for ReleaseOnDrop<'_> {
    fn drop(&mut self) {
        self.0.release();
    }
}
