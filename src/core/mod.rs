//! Core domain types for Word Scramble
//!
//! Candidate normalization and the letter multiset used for the feasibility rule.
//! Everything here is pure and free of game state.

mod candidate;
mod letters;

pub use candidate::{is_symbol, normalize};
pub use letters::LetterCounts;
