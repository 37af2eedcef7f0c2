//! Root word sources
//!
//! A round asks its source for the list to pick from. Sources that touch the filesystem
//! can fail; the embedded list cannot.

use super::loader::{ResourceError, load_root_words, words_from_slice};
use super::ROOT_WORDS;
use std::path::PathBuf;

/// A collaborator that supplies candidate root words
pub trait RootWordSource {
    /// Produce the candidate list
    ///
    /// # Errors
    ///
    /// Returns `ResourceError` if the list cannot be supplied at all.
    fn root_words(&self) -> Result<Vec<String>, ResourceError>;
}

/// The word list compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedRoots;

impl RootWordSource for EmbeddedRoots {
    fn root_words(&self) -> Result<Vec<String>, ResourceError> {
        Ok(words_from_slice(ROOT_WORDS))
    }
}

/// A newline-separated root word file, read on every request
#[derive(Debug, Clone)]
pub struct RootWordFile {
    path: PathBuf,
}

impl RootWordFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RootWordSource for RootWordFile {
    fn root_words(&self) -> Result<Vec<String>, ResourceError> {
        load_root_words(&self.path)
    }
}

impl RootWordSource for Vec<String> {
    fn root_words(&self) -> Result<Vec<String>, ResourceError> {
        Ok(self.clone())
    }
}
