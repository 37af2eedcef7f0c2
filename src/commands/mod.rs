//! Command implementations

pub mod check;
pub mod reveal;
pub mod simple;
pub mod survey;

pub use check::{CheckResult, check_word};
pub use reveal::{RevealResult, reveal_words};
pub use simple::run_simple;
pub use survey::{RootSummary, SurveyStatistics, run_survey};
