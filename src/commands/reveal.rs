//! Reveal command
//!
//! Lists every dictionary word a round with the given root word would accept.

use crate::dictionary::{Dictionary, Locale};
use crate::engine::{RoundState, rules};

/// Every word attainable from a root word
pub struct RevealResult {
    pub root_word: String,
    /// Longest first, alphabetical within a length
    pub words: Vec<String>,
    /// Score for finding all of `words`
    pub max_score: usize,
}

impl RevealResult {
    #[must_use]
    pub fn longest(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }
}

/// Collect the words the validation pipeline accepts for `root`
#[must_use]
pub fn reveal_words(root: &str, dictionary: &Dictionary, locale: &Locale) -> RevealResult {
    let round = RoundState::new(root.trim().to_lowercase());

    let mut words: Vec<String> = dictionary
        .words()
        .filter(|word| rules::check(word, &round, dictionary, locale).is_ok())
        .map(str::to_string)
        .collect();

    words.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });

    let max_score = words.iter().map(|w| w.chars().count()).sum();

    RevealResult {
        root_word: round.root_word().to_string(),
        words,
        max_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::english([
            "silk", "worm", "worms", "milk", "silkworm", "mills", "owl", "ow", "rim", "slow", "zoo",
        ])
    }

    #[test]
    fn reveals_attainable_words_longest_first() {
        let result = reveal_words("silkworm", &dictionary(), &Locale::english());
        assert_eq!(
            result.words,
            vec!["worms", "milk", "silk", "slow", "worm", "owl", "rim"]
        );
        assert_eq!(result.longest(), Some("worms"));
    }

    #[test]
    fn max_score_sums_lengths() {
        let result = reveal_words("silkworm", &dictionary(), &Locale::english());
        assert_eq!(result.max_score, 5 + 4 * 4 + 3 * 2);
    }

    #[test]
    fn excludes_root_and_short_words() {
        let result = reveal_words("silkworm", &dictionary(), &Locale::english());
        assert!(!result.words.iter().any(|w| w == "silkworm"));
        assert!(!result.words.iter().any(|w| w == "ow"));
    }

    #[test]
    fn normalizes_root() {
        let result = reveal_words(" SILKWORM ", &dictionary(), &Locale::english());
        assert_eq!(result.root_word, "silkworm");
    }

    #[test]
    fn wrong_locale_reveals_nothing() {
        let result = reveal_words("silkworm", &dictionary(), &Locale::new("fr").unwrap());
        assert!(result.words.is_empty());
        assert_eq!(result.max_score, 0);
        assert_eq!(result.longest(), None);
    }
}
