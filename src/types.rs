use serde::{Deserialize, Serialize};

/// A grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// Ordered cells visited during one gesture.
pub type SelectionPath = Vec<Position>;

/// A word the player has found on the board.
///
/// Created once per successful validation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoundWord {
    pub word: String,
    pub points: u32,
    pub positions: SelectionPath,
}

/// Snapshot of the submission lock, for display and debugging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LockSnapshot {
    pub is_locked: bool,
    pub locked_word: Option<String>,
    /// Milliseconds since the board's clock origin.
    pub locked_at_ms: Option<u64>,
}

/// Public session state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionState {
    pub found_words: Vec<FoundWord>,
    pub total_points: u32,
    pub words_remaining: usize,
    pub is_level_complete: bool,
}
