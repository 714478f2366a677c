//! Blocking fetches for the text-mode commands

use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::time::Duration;
use tokio::runtime::Runtime;

/// Drive `future` to completion on `runtime` behind a spinner
///
/// The spinner is cleared before returning, whatever the outcome.
pub fn block_on_with_spinner<F: Future>(runtime: &Runtime, message: &str, future: F) -> F::Output {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));

    let output = runtime.block_on(future);

    spinner.finish_and_clear();
    output
}
