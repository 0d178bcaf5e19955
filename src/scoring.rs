/// Shortest word that can be scored.
pub const MIN_WORD_LENGTH: usize = 3;

/// Points for lengths 3..=7.
const POINTS_TABLE: [u32; 5] = [10, 20, 30, 40, 50];
const POINTS_PER_EXTRA_LETTER: u32 = 10;

/// Points awarded for a word of `len` letters.
/// Lengths past the table keep adding 10 per letter.
pub fn points_for_length(len: usize) -> u32 {
    if len < MIN_WORD_LENGTH {
        return 0;
    }
    let idx = len - MIN_WORD_LENGTH;
    match POINTS_TABLE.get(idx) {
        Some(&points) => points,
        None => {
            let extra = (idx - (POINTS_TABLE.len() - 1)) as u32;
            POINTS_TABLE[POINTS_TABLE.len() - 1]
                .saturating_add(extra.saturating_mul(POINTS_PER_EXTRA_LETTER))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lengths_match_fixed_points() {
        let points: Vec<u32> = (3..=7).map(points_for_length).collect();

        assert_eq!(points, vec![10, 20, 30, 40, 50]);
    }

    #[test]
    fn short_words_score_nothing() {
        assert_eq!(points_for_length(0), 0);
        assert_eq!(points_for_length(2), 0);
    }

    #[test]
    fn long_words_continue_the_progression() {
        assert_eq!(points_for_length(8), 60);
        assert_eq!(points_for_length(12), 100);
    }

    #[test]
    fn points_never_decrease_with_length() {
        for len in 0..64 {
            assert!(points_for_length(len) <= points_for_length(len + 1));
        }
    }
}
