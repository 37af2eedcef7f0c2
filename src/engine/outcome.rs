//! Submission outcomes
//!
//! Rejections are ordinary values: the caller decides how to present them.

use std::fmt;

/// The rule a rejected word failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Two characters or fewer after normalization
    TooShort,
    /// Already accepted this round
    AlreadyUsed,
    /// Needs letters the root word does not have, or more of them
    NotPossible,
    /// Not recognized by the spell checker
    NotReal,
    /// The root word itself
    IsRootWord,
}

impl Rejection {
    /// Every rule, in the order the pipeline applies them
    pub const ALL: [Self; 5] = [
        Self::TooShort,
        Self::AlreadyUsed,
        Self::NotPossible,
        Self::NotReal,
        Self::IsRootWord,
    ];

    /// Alert title shown to the player
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::TooShort => "Too short!",
            Self::AlreadyUsed => "Word already used!",
            Self::NotPossible => "Word not possible",
            Self::NotReal => "Word not recognized",
            Self::IsRootWord => "This is the given word",
        }
    }

    /// Alert message shown to the player
    ///
    /// # Examples
    /// ```
    /// use word_scramble::engine::Rejection;
    ///
    /// assert_eq!(
    ///     Rejection::NotPossible.message("worse", "silkworm"),
    ///     "You can't spell 'worse' from 'SILKWORM'!"
    /// );
    /// ```
    #[must_use]
    pub fn message(self, word: &str, root_word: &str) -> String {
        match self {
            Self::TooShort => "Try again!".to_string(),
            Self::AlreadyUsed => "Oops! Try again".to_string(),
            Self::NotPossible => format!(
                "You can't spell '{word}' from '{}'!",
                root_word.to_uppercase()
            ),
            Self::NotReal => "You can't just make up a word!".to_string(),
            Self::IsRootWord => "Think outside the box!".to_string(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TooShort => "too short",
            Self::AlreadyUsed => "already used",
            Self::NotPossible => "not possible",
            Self::NotReal => "not real",
            Self::IsRootWord => "is root word",
        };
        f.write_str(name)
    }
}

/// Result of submitting a candidate word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    /// The word was added; `score` is the new total
    Accepted { word: String, score: usize },
    /// The word failed `reason`; nothing changed
    Rejected { reason: Rejection, word: String },
}

impl SubmitResult {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// The normalized word either way
    #[must_use]
    pub fn word(&self) -> &str {
        match self {
            Self::Accepted { word, .. } | Self::Rejected { word, .. } => word,
        }
    }

    #[must_use]
    pub const fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Accepted { .. } => None,
            Self::Rejected { reason, .. } => Some(*reason),
        }
    }
}
