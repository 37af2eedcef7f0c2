//! Word Scramble
//!
//! A root word is picked at random and the player spells as many words as possible
//! from its letters. Every accepted word scores its letter count.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::dictionary::Dictionary;
//! use word_scramble::engine::{SubmitResult, WordGame};
//!
//! let dictionary = Dictionary::english(["silk", "worm", "silkworm"]);
//! let mut game = WordGame::new();
//! game.start_round(&["silkworm"]);
//!
//! let result = game.submit_word("Silk", &dictionary).unwrap();
//! assert_eq!(result, SubmitResult::Accepted { word: "silk".to_string(), score: 4 });
//! ```

// Candidate normalization and letter arithmetic
pub mod core;

// Spell checking
pub mod dictionary;

// Round state and the validation pipeline
pub mod engine;

// Root word lists
pub mod wordlists;

// Runtime configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
