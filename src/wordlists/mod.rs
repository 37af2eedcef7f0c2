//! Root word lists for Word Scramble
//!
//! The default list is compiled into the binary; a custom list can be read from a file.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{ROOT_WORDS, ROOT_WORDS_COUNT};
pub use loader::ResourceError;
pub use source::{EmbeddedRoots, RootWordFile, RootWordSource};

/// Root word used when a list offers nothing to choose from
pub const DEFAULT_ROOT_WORD: &str = "silkworm";
