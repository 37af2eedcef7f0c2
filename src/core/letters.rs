//! Letter multiset
//!
//! A word's letters counted with repetition, used to decide whether a candidate can be
//! spelled from the root word.

use rustc_hash::FxHashMap;

/// Letter frequencies of a word
///
/// Matching is exact on `char`s: callers normalize case before building counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts {
    counts: FxHashMap<char, usize>,
}

impl LetterCounts {
    /// Count the letters of a word
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterCounts;
    ///
    /// let counts = LetterCounts::new("letter");
    /// assert_eq!(counts.count_of('t'), 2);
    /// assert_eq!(counts.count_of('z'), 0);
    /// ```
    #[must_use]
    pub fn new(word: &str) -> Self {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// How many times a letter occurs
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Check whether `candidate` can be spelled from these letters
    ///
    /// Every letter of the candidate must occur at least as often in these counts.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterCounts;
    ///
    /// let root = LetterCounts::new("silkworm");
    /// assert!(root.can_spell("milk"));
    /// assert!(!root.can_spell("mills"));
    /// ```
    #[must_use]
    pub fn can_spell(&self, candidate: &str) -> bool {
        let wanted = Self::new(candidate);
        wanted
            .counts
            .iter()
            .all(|(&letter, &count)| count <= self.count_of(letter))
    }
}
