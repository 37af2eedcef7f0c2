//! Spell checking
//!
//! The engine asks a [`SpellChecker`] whether a candidate is a real word. The checker is
//! injected, so tests can supply a handful of words while the game uses the embedded
//! English dictionary.

mod embedded;
mod locale;
mod words;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
pub use locale::{Locale, LocaleError};
pub use words::Dictionary;

/// A capability that recognizes real words for a language
pub trait SpellChecker {
    /// Whether the checker reports no misspelling anywhere in `word` for `locale`
    fn is_known_word(&self, word: &str, locale: &Locale) -> bool;
}

impl<T: SpellChecker + ?Sized> SpellChecker for &T {
    fn is_known_word(&self, word: &str, locale: &Locale) -> bool {
        (**self).is_known_word(word, locale)
    }
}
