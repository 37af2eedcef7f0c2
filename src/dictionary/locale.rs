//! Dictionary locale

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Language tag a dictionary answers for, such as `en` or `en-gb`
///
/// Tags are compared case-insensitively by storing them lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale(String);

/// Error type for unusable locale tags
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("locale tag must not be empty")]
    Empty,
    #[error("locale tag '{0}' may only contain ASCII letters, digits, '-' and '_'")]
    InvalidCharacters(String),
}

impl Locale {
    /// Create a locale from a language tag
    ///
    /// # Errors
    /// Returns `LocaleError` if the tag is empty or contains characters outside
    /// `[A-Za-z0-9_-]`.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::Locale;
    ///
    /// let locale = Locale::new("EN").unwrap();
    /// assert_eq!(locale.tag(), "en");
    /// assert!(Locale::new("").is_err());
    /// ```
    pub fn new(tag: &str) -> Result<Self, LocaleError> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(LocaleError::Empty);
        }
        if !tag
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(LocaleError::InvalidCharacters(tag.to_string()));
        }
        Ok(Self(tag.to_ascii_lowercase()))
    }

    /// The English locale the embedded dictionary is built for
    #[must_use]
    pub fn english() -> Self {
        Self("en".to_string())
    }

    #[inline]
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.0
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
