//! Display functions for command results and text-mode play

use super::formatters::{distribution_bars, gallows, keyboard_lines, spaced, tries_bar};
use crate::core::{Difficulty, TargetWord};
use crate::game::{GuessEngine, GuessOutcome, Statistics, Status};
use colored::Colorize;

/// Print the category list, numbered from 1
pub fn print_categories(categories: &[String]) {
    println!("\n{}", "─".repeat(50).cyan());
    println!(" {} ", "CATEGORIES".bright_cyan().bold());
    println!("{}", "─".repeat(50).cyan());

    if categories.is_empty() {
        println!("\n  {}", "The word API returned no categories.".yellow());
        return;
    }

    for (i, category) in categories.iter().enumerate() {
        println!("  {:>3}. {}", (i + 1).to_string().bright_black(), category);
    }
    println!();
}

/// Print the playable words of a category for one difficulty
pub fn print_candidates(category: &str, difficulty: Difficulty, words: &[TargetWord]) {
    println!(
        "\n{} {} {}",
        category.bright_yellow().bold(),
        format!("[{difficulty}, {} letters]", difficulty.range()).bright_black(),
        format!("{} words", words.len()).cyan()
    );

    if words.is_empty() {
        println!("  {}", "none".red());
        return;
    }

    let line = words
        .iter()
        .map(TargetWord::text)
        .collect::<Vec<_>>()
        .join(", ");
    println!("  {line}");
}

/// Print the board of a round in progress
pub fn print_board(engine: &GuessEngine, category: &str, difficulty: Difficulty) {
    println!("\n{}", "─".repeat(50).cyan());
    println!(
        "Category: {}   Difficulty: {}   Tries: {} {}",
        category.bright_yellow(),
        difficulty.to_string().bright_white(),
        engine.tries_remaining(),
        tries_bar(engine.tries_remaining()).red()
    );
    println!("{}", "─".repeat(50).cyan());

    for line in gallows(engine.wrong_guesses()) {
        println!("  {line}");
    }

    println!(
        "\n  Word:  {}",
        spaced(&engine.masked_word()).bright_white().bold()
    );
    if !engine.wrong().is_empty() {
        println!("  Wrong: {}", engine.wrong().to_string().red());
    }

    println!();
    for line in keyboard_lines(engine.available()) {
        println!("  {}", line.bright_black());
    }
    println!();
}

/// Print feedback for a single guess
pub fn print_outcome(outcome: GuessOutcome) {
    match outcome {
        GuessOutcome::Hit {
            letter,
            occurrences,
        } => {
            let message = if occurrences == 1 {
                format!("✓ {letter} appears once.")
            } else {
                format!("✓ {letter} appears {occurrences} times.")
            };
            println!("{}", message.green());
        }
        GuessOutcome::Miss { letter } => {
            println!("{}", format!("✗ No {letter} in this word.").red());
        }
        GuessOutcome::Unavailable { letter } => {
            println!(
                "{}",
                format!("'{letter}' is not on the keyboard anymore.").yellow()
            );
        }
        GuessOutcome::Ignored => println!("{}", "The round is over.".yellow()),
    }
}

/// Print the end-of-round banner
pub fn print_round_over(engine: &GuessEngine) {
    println!("\n{}", "═".repeat(50).bright_cyan());
    match engine.status() {
        Status::Won => {
            println!("{}", "   🎉  Y O U   W I N !  🎉".bright_green().bold());
            println!(
                "   Solved {} with {} wrong {}.",
                engine.target().text().bright_white().bold(),
                engine.wrong_guesses(),
                if engine.wrong_guesses() == 1 {
                    "guess"
                } else {
                    "guesses"
                }
            );
        }
        Status::Lost => {
            for line in gallows(engine.wrong_guesses()) {
                println!("  {}", line.red());
            }
            println!("{}", "   💀  G A M E   O V E R".bright_red().bold());
            println!(
                "   The word was: {}",
                engine.target().text().bright_yellow().bold()
            );
        }
        Status::Active => {}
    }
    println!("{}", "═".repeat(50).bright_cyan());
}

/// Print the running session statistics
pub fn print_statistics(stats: &Statistics) {
    println!(
        "Rounds: {}  Won: {}  Lost: {}  Win rate: {:.0}%",
        stats.rounds_played(),
        stats.rounds_won.to_string().green(),
        stats.rounds_lost.to_string().red(),
        stats.win_rate()
    );

    if stats.rounds_won > 0 {
        println!("Wins by wrong guesses:");
        for bar in distribution_bars(&stats.wrong_guess_distribution, 20) {
            println!("  {}", bar.green());
        }
    }
}
