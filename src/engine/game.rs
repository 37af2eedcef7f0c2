//! Word Scramble engine
//!
//! Holds at most one round. Before the first `start_round` the engine is idle and
//! refuses submissions; afterwards a round is always active.

use super::{RoundState, SubmitResult, rules};
use crate::core::normalize;
use crate::dictionary::{Locale, SpellChecker};
use crate::wordlists::{DEFAULT_ROOT_WORD, ResourceError, RootWordSource};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rand::rngs::ThreadRng;
use thiserror::Error;

/// Errors from driving the engine
#[derive(Debug, Error)]
pub enum GameError {
    /// The root word source could not supply any list
    #[error("root words unavailable")]
    ResourceUnavailable(#[from] ResourceError),
    /// A word was submitted before any round was started
    #[error("no round in progress, start a round first")]
    NoActiveRound,
}

/// The game engine
///
/// Generic over its random source so rounds can be replayed from a seed.
pub struct WordGame<R: Rng = ThreadRng> {
    rng: R,
    locale: Locale,
    round: Option<RoundState>,
}

impl WordGame<ThreadRng> {
    /// Create an idle engine using the thread-local random source and English
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl Default for WordGame<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> WordGame<R> {
    /// Create an idle engine with a specific random source
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            locale: Locale::default(),
            round: None,
        }
    }

    /// Use `locale` when asking the spell checker about candidates
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    #[inline]
    pub const fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// The active round, or `None` while idle
    #[inline]
    pub const fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    #[inline]
    pub const fn is_active(&self) -> bool {
        self.round.is_some()
    }

    /// Start a new round with a root word picked uniformly from `word_list`
    ///
    /// Entries are trimmed and lowercased and blank ones ignored. With nothing to pick
    /// from the root word is `silkworm`. Any previous round is discarded.
    pub fn start_round<S: AsRef<str>>(&mut self, word_list: &[S]) -> &RoundState {
        let candidates: Vec<&str> = word_list
            .iter()
            .map(|w| w.as_ref().trim())
            .filter(|w| !w.is_empty())
            .collect();

        let root_word = if let Some(word) = candidates.choose(&mut self.rng) {
            word.to_lowercase()
        } else {
            tracing::warn!("Empty root word list, falling back to '{DEFAULT_ROOT_WORD}'");
            DEFAULT_ROOT_WORD.to_string()
        };

        tracing::debug!(root_word = %root_word, "Round started");
        self.round.insert(RoundState::new(root_word))
    }

    /// Start a new round with a root word from `source`
    ///
    /// # Errors
    ///
    /// Returns `GameError::ResourceUnavailable` if the source cannot supply a list.
    /// The previous round, if any, is kept.
    pub fn start_round_from<W: RootWordSource + ?Sized>(
        &mut self,
        source: &W,
    ) -> Result<&RoundState, GameError> {
        let words = source.root_words()?;
        Ok(self.start_round(&words))
    }

    /// Normalize and validate a submission, recording it if every rule passes
    ///
    /// Rejections leave the round untouched and come back as
    /// [`SubmitResult::Rejected`].
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoActiveRound` if no round has been started.
    pub fn submit_word<C: SpellChecker + ?Sized>(
        &mut self,
        raw: &str,
        checker: &C,
    ) -> Result<SubmitResult, GameError> {
        let round = self.round.as_mut().ok_or(GameError::NoActiveRound)?;
        let word = normalize(raw);

        match rules::check(&word, round, checker, &self.locale) {
            Ok(()) => {
                let score = round.accept(word.clone());
                tracing::debug!(word = %word, score, "Word accepted");
                Ok(SubmitResult::Accepted { word, score })
            }
            Err(reason) => {
                tracing::debug!(word = %word, %reason, "Word rejected");
                Ok(SubmitResult::Rejected { reason, word })
            }
        }
    }
}
