//! Hangman - CLI
//!
//! Hangman with TUI and text modes, playing words from an online word database.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use hangman::{
    commands::{SimpleOptions, run_categories, run_simple, run_words},
    config::{API_URL_ENV, ApiConfig, DEFAULT_API_URL},
    core::Difficulty,
    logging::{self, LogTarget},
    output::{print_candidates, print_categories},
    supplier::{HttpWordSource, WordSupplier},
};
use std::path::PathBuf;
use std::time::Duration;
use tokio::runtime::Runtime;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Hangman in the terminal with words from an online word database",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base URL of the word API
    #[arg(long, global = true, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Give up on a request after this many seconds (default: wait indefinitely)
    #[arg(long, global = true, value_name = "SECS")]
    timeout: Option<u64>,

    /// Append logs to this file (filter with RUST_LOG, default: warn)
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Skip the difficulty screen: easy, medium or hard
        #[arg(short, long)]
        difficulty: Option<Difficulty>,
    },

    /// Simple text mode (no TUI)
    Simple {
        /// Difficulty: easy, medium or hard (prompted when omitted)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Category to play (chosen from the list when omitted)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List the categories offered by the word API
    Categories,

    /// Show the playable words of a category per difficulty
    Words {
        /// Category to inspect
        category: String,

        /// Only show this difficulty
        #[arg(short, long)]
        difficulty: Option<Difficulty>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { difficulty: None });

    let owns_terminal = matches!(command, Commands::Play { .. });
    logging::setup(LogTarget::for_mode(cli.log_file, owns_terminal))?;

    let config = ApiConfig::new(&cli.api_url)?.with_timeout(cli.timeout.map(Duration::from_secs));
    let supplier = WordSupplier::new(HttpWordSource::new(&config)?);
    let runtime = Runtime::new().context("Failed to start async runtime")?;

    match command {
        Commands::Play { difficulty } => run_play_command(&runtime, supplier, difficulty),
        Commands::Simple {
            difficulty,
            category,
        } => run_simple(
            &runtime,
            &supplier,
            SimpleOptions {
                difficulty,
                category,
            },
        ),
        Commands::Categories => {
            let categories = run_categories(&runtime, &supplier)?;
            print_categories(&categories);
            Ok(())
        }
        Commands::Words {
            category,
            difficulty,
        } => {
            let reports = run_words(&runtime, &supplier, &category, difficulty)?;
            for report in &reports {
                print_candidates(&category, report.difficulty, &report.words);
            }
            if reports.iter().all(|report| report.words.is_empty()) {
                println!(
                    "\n{}",
                    format!("No playable words in '{category}'. Is the name right?").yellow()
                );
            }
            Ok(())
        }
    }
}

fn run_play_command(
    runtime: &Runtime,
    supplier: WordSupplier<HttpWordSource>,
    difficulty: Option<Difficulty>,
) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let mut app = App::new(supplier, runtime.handle().clone());
    if let Some(difficulty) = difficulty {
        app.select_difficulty(difficulty);
    }
    run_tui(app)
}
