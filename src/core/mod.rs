//! Core domain types for Hangman
//!
//! Difficulty ranges, letter sets and the target word. Everything here is pure
//! and free of I/O.

mod difficulty;
mod letters;
mod word;

pub use difficulty::{Difficulty, LengthRange, ParseDifficultyError};
pub use letters::LetterSet;
pub use word::{TargetWord, WordError};
