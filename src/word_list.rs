use std::collections::HashSet;

/// Legal vocabulary for the current level. Entries are uppercase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelWordList {
    words: HashSet<String>,
}

impl LevelWordList {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_uppercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }

    /// Case-insensitive membership.
    pub fn contains(&self, candidate: &str) -> bool {
        self.words.contains(&candidate.to_uppercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_ignores_case_and_whitespace() {
        let words = LevelWordList::new([" gato ", "PERRO", ""]);

        assert_eq!(words.len(), 2);
        assert!(words.contains("GATO"));
        assert!(words.contains("perro"));
        assert!(!words.contains("RATON"));
    }
}
