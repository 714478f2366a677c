//! Tracing subscriber setup
//!
//! The TUI owns the terminal while it runs, so it may only log to a file.
//! Line-oriented modes log to stderr.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "warn";

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Drop everything
    Off,
    Stderr,
    /// Append to a file, created if missing
    File(PathBuf),
}

impl LogTarget {
    /// Pick the target for a front end
    ///
    /// An explicit file always wins. Without one, terminal UIs stay silent
    /// and everything else writes to stderr.
    #[must_use]
    pub fn for_mode(log_file: Option<PathBuf>, owns_terminal: bool) -> Self {
        match log_file {
            Some(path) => Self::File(path),
            None if owns_terminal => Self::Off,
            None => Self::Stderr,
        }
    }
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a global subscriber
/// is already installed.
pub fn setup(target: LogTarget) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    match target {
        LogTarget::Off => {}
        LogTarget::Stderr => {
            Registry::default()
                .with(env_filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .try_init()
                .context("failed to install log subscriber")?;
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            Registry::default()
                .with(env_filter)
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .try_init()
                .context("failed to install log subscriber")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_file_wins() {
        let path = PathBuf::from("hangman.log");
        assert_eq!(
            LogTarget::for_mode(Some(path.clone()), true),
            LogTarget::File(path.clone())
        );
        assert_eq!(
            LogTarget::for_mode(Some(path.clone()), false),
            LogTarget::File(path)
        );
    }

    #[test]
    fn terminal_ui_is_silent_by_default() {
        assert_eq!(LogTarget::for_mode(None, true), LogTarget::Off);
        assert_eq!(LogTarget::for_mode(None, false), LogTarget::Stderr);
    }
}
