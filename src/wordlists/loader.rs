//! Word list loading utilities
//!
//! Reads newline-separated word files and converts embedded slices. Missing or empty
//! files surface as [`ResourceError`] rather than aborting the process.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to supply a word list
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The backing file could not be read
    #[error("could not read {resource} from {}", path.display())]
    Unavailable {
        resource: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The file was read but held no usable lines
    #[error("{resource} at {} contains no words", path.display())]
    Empty {
        resource: &'static str,
        path: PathBuf,
    },
}

/// Read a newline-separated word file
///
/// Each line is trimmed and lowercased; blank lines are skipped.
///
/// # Errors
///
/// Returns `ResourceError::Unavailable` if the file cannot be read and
/// `ResourceError::Empty` if it contains no words.
pub fn read_words<P: AsRef<Path>>(
    path: P,
    resource: &'static str,
) -> Result<Vec<String>, ResourceError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ResourceError::Unavailable {
        resource,
        path: path.to_path_buf(),
        source,
    })?;

    let words = words_from_lines(content.lines());
    if words.is_empty() {
        return Err(ResourceError::Empty {
            resource,
            path: path.to_path_buf(),
        });
    }

    tracing::info!("Loaded {} words of {} from {}", words.len(), resource, path.display());
    Ok(words)
}

/// Load a root word list from a file
///
/// # Errors
///
/// See [`read_words`].
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_root_words;
///
/// let roots = load_root_words("data/start.txt").unwrap();
/// println!("Loaded {} root words", roots.len());
/// ```
pub fn load_root_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>, ResourceError> {
    read_words(path, "root word list")
}

/// Convert an embedded string slice to owned, normalized words
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::ROOT_WORDS;
///
/// let words = words_from_slice(ROOT_WORDS);
/// assert_eq!(words.len(), ROOT_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect()
}
