//! Command implementations

pub mod categories;
pub mod fetch;
pub mod simple;
pub mod words;

pub use categories::run_categories;
pub use fetch::block_on_with_spinner;
pub use simple::{SimpleOptions, run_simple};
pub use words::{CandidateReport, run_words};
