//! Round state

use crate::core::LetterCounts;

/// A round in progress: the root word, accepted words and the running score
///
/// Only the engine mutates a round, and only when a word passes every rule, so the
/// score always equals the summed length of `guesses`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    root_word: String,
    root_letters: LetterCounts,
    guesses: Vec<String>,
    score: usize,
}

impl RoundState {
    pub(crate) fn new(root_word: String) -> Self {
        let root_letters = LetterCounts::new(&root_word);
        Self {
            root_word,
            root_letters,
            guesses: Vec::new(),
            score: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    #[inline]
    #[must_use]
    pub const fn root_letters(&self) -> &LetterCounts {
        &self.root_letters
    }

    /// Accepted words, most recent first
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn has_guessed(&self, word: &str) -> bool {
        self.guesses.iter().any(|g| g == word)
    }

    /// Record an accepted word and return the new score
    pub(crate) fn accept(&mut self, word: String) -> usize {
        self.score += word.chars().count();
        self.guesses.insert(0, word);
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_round_is_empty() {
        let round = RoundState::new("silkworm".to_string());
        assert_eq!(round.root_word(), "silkworm");
        assert!(round.guesses().is_empty());
        assert_eq!(round.score(), 0);
        assert_eq!(round.root_letters().count_of('w'), 1);
    }

    #[test]
    fn accept_prepends_and_scores() {
        let mut round = RoundState::new("silkworm".to_string());
        assert_eq!(round.accept("silk".to_string()), 4);
        assert_eq!(round.accept("worm".to_string()), 8);
        assert_eq!(round.accept("milk".to_string()), 12);

        assert_eq!(round.guesses(), ["milk", "worm", "silk"]);
        assert_eq!(round.score(), 12);
    }

    #[test]
    fn has_guessed() {
        let mut round = RoundState::new("silkworm".to_string());
        round.accept("silk".to_string());
        assert!(round.has_guessed("silk"));
        assert!(!round.has_guessed("worm"));
    }

    #[test]
    fn score_counts_chars_not_bytes() {
        let mut round = RoundState::new("éclairés".to_string());
        assert_eq!(round.accept("éclair".to_string()), 6);
    }
}
