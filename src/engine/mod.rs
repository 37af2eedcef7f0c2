//! Word Scramble game engine
//!
//! Owns the round state and runs the validation pipeline for each submission.

mod game;
mod outcome;
pub mod rules;
mod state;

pub use game::{GameError, WordGame};
pub use outcome::{Rejection, SubmitResult};
pub use state::RoundState;
