//! In-memory dictionary

use super::{DICTIONARY, Locale, SpellChecker};
use crate::wordlists::loader::{ResourceError, read_words};
use rustc_hash::FxHashSet;
use std::path::Path;

/// A fixed set of known words for one locale
#[derive(Debug, Clone)]
pub struct Dictionary {
    locale: Locale,
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from any collection of words
    ///
    /// Words are trimmed and lowercased; blank entries are dropped.
    pub fn new<I, S>(locale: Locale, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { locale, words }
    }

    /// Build an English dictionary from any collection of words
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::{Dictionary, Locale, SpellChecker};
    ///
    /// let dictionary = Dictionary::english(["silk", "worm"]);
    /// assert!(dictionary.is_known_word("silk", &Locale::english()));
    /// assert!(!dictionary.is_known_word("slik", &Locale::english()));
    /// ```
    pub fn english<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(Locale::english(), words)
    }

    /// The English dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::english(DICTIONARY)
    }

    /// Load a dictionary file for a locale
    ///
    /// # Errors
    ///
    /// Returns `ResourceError` if the file cannot be read or holds no words.
    pub fn load<P: AsRef<Path>>(path: P, locale: Locale) -> Result<Self, ResourceError> {
        let words = read_words(path, "dictionary")?;
        Ok(Self::new(locale, words))
    }

    #[inline]
    #[must_use]
    pub const fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Check a single, already-normalized word
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Iterate over every word, in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl SpellChecker for Dictionary {
    /// Every whitespace-separated token must be a dictionary word
    fn is_known_word(&self, word: &str, locale: &Locale) -> bool {
        if *locale != self.locale {
            return false;
        }

        let mut tokens = word.split_whitespace().peekable();
        tokens.peek().is_some() && tokens.all(|token| self.contains(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> Locale {
        Locale::english()
    }

    #[test]
    fn new_normalizes_entries() {
        let dictionary = Dictionary::english(["  Silk ", "WORM", "", "   "]);
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains("silk"));
        assert!(dictionary.contains("worm"));
    }

    #[test]
    fn known_word() {
        let dictionary = Dictionary::english(["silk", "worm"]);
        assert!(dictionary.is_known_word("silk", &english()));
        assert!(!dictionary.is_known_word("slik", &english()));
    }

    #[test]
    fn every_token_must_be_known() {
        let dictionary = Dictionary::english(["silk", "worm"]);
        assert!(dictionary.is_known_word("silk worm", &english()));
        assert!(!dictionary.is_known_word("silk wrom", &english()));
    }

    #[test]
    fn blank_text_is_not_a_word() {
        let dictionary = Dictionary::english(["silk"]);
        assert!(!dictionary.is_known_word("", &english()));
        assert!(!dictionary.is_known_word("   ", &english()));
    }

    #[test]
    fn other_locale_is_unknown() {
        let dictionary = Dictionary::english(["silk"]);
        let french = Locale::new("fr").unwrap();
        assert!(!dictionary.is_known_word("silk", &french));
    }

    #[test]
    fn custom_locale_dictionary() {
        let german = Locale::new("de").unwrap();
        let dictionary = Dictionary::new(german.clone(), ["seide"]);
        assert!(dictionary.is_known_word("seide", &german));
        assert!(!dictionary.is_known_word("seide", &english()));
        assert_eq!(dictionary.locale(), &german);
    }

    #[test]
    fn embedded_dictionary_recognizes_common_words() {
        let dictionary = Dictionary::embedded();
        assert!(!dictionary.is_empty());
        for word in ["silk", "worm", "milk", "silkworm"] {
            assert!(dictionary.is_known_word(word, &english()), "{word} missing");
        }
        assert!(!dictionary.is_known_word("qxzv", &english()));
    }

    #[test]
    fn load_missing_file_fails() {
        let result = Dictionary::load("/nonexistent/word_scramble/dictionary.txt", english());
        assert!(matches!(result, Err(ResourceError::Unavailable { .. })));
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "word_scramble_dictionary_{}.txt",
            std::process::id()
        ));
        std::fs::write(&path, "Silk\nworm\n\n").unwrap();
        let dictionary = Dictionary::load(&path, english()).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains("silk"));
    }
}
