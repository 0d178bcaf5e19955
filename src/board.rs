use crate::types::Position;

/// Largest supported side length; positions are stored as `u8`.
pub const MAX_BOARD_SIDE: usize = u8::MAX as usize;

/// Letter grid for one level, stored row-major and uppercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterBoard {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl LetterBoard {
    /// Builds a board from rows of single-letter strings.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Result<Self, String> {
        let height = rows.len();
        if height == 0 {
            return Err("board has no rows".to_string());
        }
        let width = rows[0].len();
        if width == 0 {
            return Err("board has no columns".to_string());
        }
        if width > MAX_BOARD_SIDE || height > MAX_BOARD_SIDE {
            return Err(format!(
                "board is too large: {width}x{height}, max side is {MAX_BOARD_SIDE}"
            ));
        }

        let mut cells = Vec::with_capacity(width * height);
        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(format!(
                    "row #{row_idx} has {} cells, expected {width}",
                    row.len()
                ));
            }
            for (col_idx, cell) in row.iter().enumerate() {
                let mut chars = cell.trim().chars();
                match (chars.next(), chars.next()) {
                    (Some(letter), None) => cells.extend(letter.to_uppercase()),
                    _ => {
                        return Err(format!(
                            "cell ({row_idx}, {col_idx}) must hold exactly one letter, got {cell:?}"
                        ));
                    }
                }
            }
        }

        // Some letters uppercase to more than one char (e.g. "ß").
        if cells.len() != width * height {
            return Err("board contains letters without a single-char uppercase form".to_string());
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, row: u8, col: u8) -> bool {
        (row as usize) < self.height && (col as usize) < self.width
    }

    pub fn letter_at(&self, pos: Position) -> Option<char> {
        if !self.contains(pos.row, pos.col) {
            return None;
        }
        self.cells
            .get(pos.row as usize * self.width + pos.col as usize)
            .copied()
    }

    /// Reads the letters under `path` in order.
    /// Returns `None` when any position is off the board.
    pub fn word_along(&self, path: &[Position]) -> Option<String> {
        path.iter().map(|&pos| self.letter_at(pos)).collect()
    }
}

#[cfg(test)]
pub(crate) fn board_from_strs(rows: &[&str]) -> LetterBoard {
    let rows = rows
        .iter()
        .map(|row| row.chars().map(|c| c.to_string()).collect())
        .collect();
    LetterBoard::from_rows(rows).expect("test board must be valid")
}
