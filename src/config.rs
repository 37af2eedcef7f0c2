//! Runtime configuration
//!
//! Where root words and the dictionary come from, and which locale the spell checker
//! is asked about. Built from command line flags.

use crate::dictionary::{Dictionary, Locale};
use crate::wordlists::{EmbeddedRoots, ResourceError, RootWordFile, RootWordSource};
use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// A word list compiled into the binary, or a file on disk
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WordSource {
    #[default]
    Embedded,
    File(PathBuf),
}

impl FromStr for WordSource {
    type Err = Infallible;

    /// `embedded` selects the built-in list; anything else is a path
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "" | "embedded" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        })
    }
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Game configuration
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    pub roots: WordSource,
    pub dictionary: WordSource,
    pub locale: Locale,
}

impl GameConfig {
    #[must_use]
    pub const fn new(roots: WordSource, dictionary: WordSource, locale: Locale) -> Self {
        Self {
            roots,
            dictionary,
            locale,
        }
    }

    /// The collaborator rounds draw their root word from
    #[must_use]
    pub fn root_source(&self) -> Box<dyn RootWordSource> {
        match &self.roots {
            WordSource::Embedded => Box::new(EmbeddedRoots),
            WordSource::File(path) => Box::new(RootWordFile::new(path.clone())),
        }
    }

    /// Read the root word list once
    ///
    /// # Errors
    ///
    /// Returns `ResourceError` if a file source cannot be read or is empty.
    pub fn load_roots(&self) -> Result<Vec<String>, ResourceError> {
        self.root_source().root_words()
    }

    /// Build the spell checker
    ///
    /// A dictionary file is tagged with the configured locale. The embedded dictionary is
    /// always English, so any other locale will reject every word against it.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError` if a file source cannot be read or is empty.
    pub fn load_dictionary(&self) -> Result<Dictionary, ResourceError> {
        match &self.dictionary {
            WordSource::Embedded => {
                if self.locale != Locale::english() {
                    tracing::warn!(
                        "Embedded dictionary is English but locale is '{}'",
                        self.locale
                    );
                }
                Ok(Dictionary::embedded())
            }
            WordSource::File(path) => Dictionary::load(path, self.locale.clone()),
        }
    }
}
