//! Hangman rules
//!
//! The guess engine that drives a round and the statistics kept across rounds.

mod engine;
mod stats;

pub use engine::{GuessEngine, GuessOutcome, GuessState, MAX_TRIES, Status};
pub use stats::Statistics;
