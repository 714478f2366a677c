//! List the categories offered by the word API

use super::fetch::block_on_with_spinner;
use crate::supplier::{WordSource, WordSupplier};
use anyhow::{Context, Result};
use tokio::runtime::Runtime;

/// Fetch the category list
///
/// # Errors
///
/// Returns an error if the word API cannot be reached or answers badly.
pub fn run_categories<S: WordSource>(
    runtime: &Runtime,
    supplier: &WordSupplier<S>,
) -> Result<Vec<String>> {
    block_on_with_spinner(runtime, "Loading categories…", supplier.list_categories())
        .context("Failed to load categories")
}
