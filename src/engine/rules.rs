//! Validation rules
//!
//! Each rule is a predicate over a normalized candidate. [`check`] applies them in
//! pipeline order and reports the first failure.

use super::{Rejection, RoundState};
use crate::dictionary::{Locale, SpellChecker};

/// Words must be longer than this many characters
pub const MIN_WORD_LENGTH: usize = 2;

#[must_use]
pub fn is_long_enough(word: &str) -> bool {
    word.chars().count() > MIN_WORD_LENGTH
}

#[must_use]
pub fn is_original(word: &str, round: &RoundState) -> bool {
    !round.has_guessed(word)
}

/// The candidate's letters are a sub-multiset of the root word's
#[must_use]
pub fn is_possible(word: &str, round: &RoundState) -> bool {
    round.root_letters().can_spell(word)
}

#[must_use]
pub fn is_real<C: SpellChecker + ?Sized>(word: &str, checker: &C, locale: &Locale) -> bool {
    checker.is_known_word(word, locale)
}

#[must_use]
pub fn is_not_root_word(word: &str, round: &RoundState) -> bool {
    word != round.root_word()
}

/// Run every rule in order, stopping at the first that fails
///
/// # Errors
///
/// Returns the `Rejection` for the first failing rule.
pub fn check<C: SpellChecker + ?Sized>(
    word: &str,
    round: &RoundState,
    checker: &C,
    locale: &Locale,
) -> Result<(), Rejection> {
    if !is_long_enough(word) {
        return Err(Rejection::TooShort);
    }
    if !is_original(word, round) {
        return Err(Rejection::AlreadyUsed);
    }
    if !is_possible(word, round) {
        return Err(Rejection::NotPossible);
    }
    if !is_real(word, checker, locale) {
        return Err(Rejection::NotReal);
    }
    if !is_not_root_word(word, round) {
        return Err(Rejection::IsRootWord);
    }
    Ok(())
}
