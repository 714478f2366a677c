//! Hangman
//!
//! Terminal Hangman against an online word database: pick a difficulty and a
//! category, then guess the word one letter at a time before six misses.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::TargetWord;
//! use hangman::game::{GuessEngine, Status};
//!
//! let mut engine = GuessEngine::new(TargetWord::new("cat").unwrap());
//! for letter in ['c', 'a', 't'] {
//!     engine.guess(letter);
//! }
//! assert_eq!(engine.status(), Status::Won);
//! assert_eq!(engine.tries_remaining(), 6);
//! ```

// Core domain types
pub mod core;

// Round rules and session statistics
pub mod game;

// Word API access and word selection
pub mod supplier;

// API endpoint configuration
pub mod config;

// Tracing subscriber setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
