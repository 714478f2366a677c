//! Difficulty filtering and the random word pick

use super::{SupplyError, WordRecord, WordSource};
use crate::core::{LengthRange, TargetWord};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, info};

/// Keep the records that make a playable word within `range`
///
/// Length is counted in characters of the raw record. Records that are not
/// made only of letters (spaces, hyphens, digits) are dropped.
#[must_use]
pub fn filter_candidates(records: &[WordRecord], range: LengthRange) -> Vec<TargetWord> {
    records
        .iter()
        .filter(|record| range.contains(record.word.trim().chars().count()))
        .filter_map(|record| match TargetWord::new(record.word.as_str()) {
            Ok(word) => Some(word),
            Err(e) => {
                debug!(word = %record.word, error = %e, "skipping unplayable word");
                None
            }
        })
        .collect()
}

/// Pick one playable word uniformly at random
///
/// # Errors
///
/// Returns `SupplyError::NoWordsAvailable` if no record fits `range`.
pub fn select_word<R: Rng + ?Sized>(
    records: &[WordRecord],
    category: &str,
    range: LengthRange,
    rng: &mut R,
) -> Result<TargetWord, SupplyError> {
    filter_candidates(records, range)
        .choose(rng)
        .cloned()
        .ok_or_else(|| SupplyError::NoWordsAvailable {
            category: category.to_string(),
            range,
        })
}

/// Supplies categories and target words from a [`WordSource`]
pub struct WordSupplier<S> {
    source: S,
}

impl<S: WordSource> WordSupplier<S> {
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// List the categories offered by the source
    ///
    /// # Errors
    ///
    /// Returns `SupplyError::Network` if the request fails.
    pub async fn list_categories(&self) -> Result<Vec<String>, SupplyError> {
        let categories = self.source.categories().await?;
        debug!(count = categories.len(), "categories loaded");
        Ok(categories)
    }

    /// Raw records of `category`, unfiltered
    ///
    /// # Errors
    ///
    /// Returns `SupplyError::Network` if the request fails.
    pub async fn records(&self, category: &str) -> Result<Vec<WordRecord>, SupplyError> {
        Ok(self.source.words(category).await?)
    }

    /// Every playable word of `category` within `range`
    ///
    /// # Errors
    ///
    /// Returns `SupplyError::Network` if the request fails.
    pub async fn candidates(
        &self,
        category: &str,
        range: LengthRange,
    ) -> Result<Vec<TargetWord>, SupplyError> {
        let records = self.source.words(category).await?;
        Ok(filter_candidates(&records, range))
    }

    /// Fetch the words of `category` and pick one within `range`
    ///
    /// # Errors
    ///
    /// Returns `SupplyError::Network` if the request fails and
    /// `SupplyError::NoWordsAvailable` if nothing in the category fits.
    pub async fn pick_word(
        &self,
        category: &str,
        range: LengthRange,
    ) -> Result<TargetWord, SupplyError> {
        let records = self.source.words(category).await?;
        let word = select_word(&records, category, range, &mut rand::rng())?;
        info!(category, %range, len = word.len(), "target word picked");
        Ok(word)
    }
}
