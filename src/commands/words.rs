//! Show which words of a category each difficulty would play

use super::fetch::block_on_with_spinner;
use crate::core::{Difficulty, TargetWord};
use crate::supplier::{WordSource, WordSupplier, filter_candidates};
use anyhow::{Context, Result};
use tokio::runtime::Runtime;

/// Playable words of one category at one difficulty
#[derive(Debug, Clone)]
pub struct CandidateReport {
    pub difficulty: Difficulty,
    pub words: Vec<TargetWord>,
}

/// Fetch `category` once and filter it for `difficulty`, or for every
/// difficulty when none is given
///
/// # Errors
///
/// Returns an error if the word API cannot be reached or answers badly.
pub fn run_words<S: WordSource>(
    runtime: &Runtime,
    supplier: &WordSupplier<S>,
    category: &str,
    difficulty: Option<Difficulty>,
) -> Result<Vec<CandidateReport>> {
    let message = format!("Loading words for {category}…");

    if let Some(difficulty) = difficulty {
        let words = block_on_with_spinner(
            runtime,
            &message,
            supplier.candidates(category, difficulty.range()),
        )
        .with_context(|| format!("Failed to load words for {category}"))?;
        return Ok(vec![CandidateReport { difficulty, words }]);
    }

    let records = block_on_with_spinner(runtime, &message, supplier.records(category))
        .with_context(|| format!("Failed to load words for {category}"))?;

    Ok(Difficulty::ALL
        .iter()
        .map(|&difficulty| CandidateReport {
            difficulty,
            words: filter_candidates(&records, difficulty.range()),
        })
        .collect())
}
