use crate::path::is_adjacent;
use crate::types::{Position, SelectionPath};

/// Turns pointer/touch events over grid cells into a selection path.
///
/// Invalid events (out of bounds, not adjacent, jitter on the same cell) are
/// dropped silently: a gesture is a stream and must not be interrupted.
#[derive(Debug, Clone)]
pub struct SelectionTracker {
    width: usize,
    height: usize,
    path: SelectionPath,
    active: bool,
}

impl SelectionTracker {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            path: Vec::new(),
            active: false,
        }
    }

    /// Begins a new gesture at `(row, col)`, abandoning any unfinished one.
    pub fn start(&mut self, row: u8, col: u8) {
        self.path.clear();
        self.active = false;

        if !self.in_bounds(row, col) {
            return;
        }
        self.path.push(Position::new(row, col));
        self.active = true;
    }

    pub fn extend(&mut self, row: u8, col: u8) {
        if !self.active || !self.in_bounds(row, col) {
            return;
        }

        let next = Position::new(row, col);
        let Some(&last) = self.path.last() else {
            return;
        };
        if !is_adjacent(last, next) {
            return;
        }
        // Sliding back over the previous cell is jitter, not a new step.
        if self.path.len() >= 2 && self.path[self.path.len() - 2] == next {
            return;
        }

        self.path.push(next);
    }

    /// Finishes the gesture and hands back its path.
    pub fn end(&mut self) -> SelectionPath {
        self.active = false;
        std::mem::take(&mut self.path)
    }

    /// The cell currently under the pointer, if a gesture is in progress.
    pub fn current(&self) -> Option<Position> {
        if self.active {
            self.path.last().copied()
        } else {
            None
        }
    }

    pub fn path(&self) -> &[Position] {
        &self.path
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    fn in_bounds(&self, row: u8, col: u8) -> bool {
        (row as usize) < self.height && (col as usize) < self.width
    }
}
