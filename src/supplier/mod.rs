//! Word supply: categories and target words from a word API
//!
//! [`WordSource`] is the seam to the outside world. [`HttpWordSource`] talks to
//! the real API; tests plug in in-memory sources. [`WordSupplier`] applies the
//! difficulty filter and the random pick on top of any source.

mod error;
mod http;
mod picker;

pub use error::{NetworkError, SupplyError};
pub use http::HttpWordSource;
pub use picker::{WordSupplier, filter_candidates, select_word};

use serde::Deserialize;
use std::future::Future;

/// One entry of the words endpoint
///
/// Only `word` is read; any other fields in the payload are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WordRecord {
    pub word: String,
}

impl WordRecord {
    #[must_use]
    pub fn new(word: impl Into<String>) -> Self {
        Self { word: word.into() }
    }
}

/// Something that can list categories and the words in a category
///
/// Each call is expected to perform exactly one request and never retry.
pub trait WordSource: Send + Sync + 'static {
    fn categories(&self) -> impl Future<Output = Result<Vec<String>, NetworkError>> + Send;

    fn words(
        &self,
        category: &str,
    ) -> impl Future<Output = Result<Vec<WordRecord>, NetworkError>> + Send;
}
