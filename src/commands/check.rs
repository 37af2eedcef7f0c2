//! Word check command
//!
//! Runs one submission against a fresh round with a chosen root word.

use crate::dictionary::{Locale, SpellChecker};
use crate::engine::{SubmitResult, WordGame};

/// Result of checking a single word
pub struct CheckResult {
    pub root_word: String,
    pub result: SubmitResult,
}

impl CheckResult {
    /// Alert title and message for a rejection, `None` when accepted
    #[must_use]
    pub fn alert(&self) -> Option<(&'static str, String)> {
        self.result
            .rejection()
            .map(|reason| (reason.title(), reason.message(self.result.word(), &self.root_word)))
    }
}

/// Check whether `word` would be accepted in a round rooted at `root`
///
/// # Errors
///
/// Returns an error if `root` is blank.
pub fn check_word<C: SpellChecker + ?Sized>(
    root: &str,
    word: &str,
    checker: &C,
    locale: &Locale,
) -> anyhow::Result<CheckResult> {
    if root.trim().is_empty() {
        anyhow::bail!("Root word must not be blank");
    }

    let mut game = WordGame::new().with_locale(locale.clone());
    let root_word = game.start_round(&[root]).root_word().to_string();
    let result = game.submit_word(word, checker)?;

    Ok(CheckResult { root_word, result })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::engine::Rejection;

    fn dictionary() -> Dictionary {
        Dictionary::english(["silk", "worm", "silkworm"])
    }

    #[test]
    fn accepted_word_has_no_alert() {
        let check = check_word("SILKWORM", "silk", &dictionary(), &Locale::english()).unwrap();
        assert_eq!(check.root_word, "silkworm");
        assert!(check.result.is_accepted());
        assert!(check.alert().is_none());
    }

    #[test]
    fn rejected_word_has_alert() {
        let check = check_word("silkworm", "worse", &dictionary(), &Locale::english()).unwrap();
        assert_eq!(check.result.rejection(), Some(Rejection::NotPossible));

        let (title, message) = check.alert().unwrap();
        assert_eq!(title, "Word not possible");
        assert_eq!(message, "You can't spell 'worse' from 'SILKWORM'!");
    }

    #[test]
    fn root_word_itself() {
        let check = check_word("silkworm", "silkworm", &dictionary(), &Locale::english()).unwrap();
        assert_eq!(check.result.rejection(), Some(Rejection::IsRootWord));
    }

    #[test]
    fn blank_root_is_an_error() {
        assert!(check_word("  ", "silk", &dictionary(), &Locale::english()).is_err());
    }
}
