//! Terminal output formatting
//!
//! Display utilities for text-mode play and command results.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_candidates, print_categories, print_outcome, print_round_over,
    print_statistics,
};
