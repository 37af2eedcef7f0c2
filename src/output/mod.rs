//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_check_result, print_reveal_result, print_round, print_survey_statistics,
    print_used_words,
};
