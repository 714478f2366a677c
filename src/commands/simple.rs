//! Simple interactive CLI mode
//!
//! Text-based Hangman without TUI

use super::fetch::block_on_with_spinner;
use crate::core::Difficulty;
use crate::game::{GuessEngine, Statistics};
use crate::output::{
    print_board, print_categories, print_outcome, print_round_over, print_statistics,
};
use crate::supplier::{SupplyError, WordSource, WordSupplier};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};
use tokio::runtime::Runtime;
use tracing::info;

/// Choices made on the command line instead of at a prompt
#[derive(Debug, Clone, Default)]
pub struct SimpleOptions {
    pub difficulty: Option<Difficulty>,
    pub category: Option<String>,
}

/// What the player wants after a round or a failed fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NextStep {
    SameCategory,
    OtherCategory,
    Quit,
}

/// How a round came to an end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundEnd {
    Finished,
    GaveUp,
    Quit,
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<S: WordSource>(
    runtime: &Runtime,
    supplier: &WordSupplier<S>,
    options: SimpleOptions,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Hangman - Text Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the word one letter at a time. Six wrong guesses and you hang.");
    println!("Commands at the guess prompt: 'quit' to exit, 'new' to give up the round\n");

    let Some(difficulty) = options.difficulty.map_or_else(prompt_difficulty, |d| Ok(Some(d)))?
    else {
        return Ok(());
    };
    println!(
        "Difficulty: {} ({} letters)",
        difficulty.to_string().bright_white(),
        difficulty.range()
    );

    let mut stats = Statistics::default();
    let mut preset_category = options.category;

    'categories: loop {
        let category = match preset_category.take() {
            Some(category) => category,
            None => match choose_category(runtime, supplier)? {
                Some(category) => category,
                None => break,
            },
        };

        loop {
            let loaded = block_on_with_spinner(
                runtime,
                "Loading words…",
                supplier.pick_word(&category, difficulty.range()),
            );
            let word = match loaded {
                Ok(word) => word,
                Err(e) => {
                    report_supply_error(&e, "words");
                    match prompt_next("[r]etry, choose [c]ategory, or [q]uit")? {
                        NextStep::SameCategory => continue,
                        NextStep::OtherCategory => continue 'categories,
                        NextStep::Quit => break 'categories,
                    }
                }
            };

            let mut engine = GuessEngine::new(word);
            match play_round(&mut engine, &category, difficulty)? {
                RoundEnd::Finished => {
                    stats.record(engine.status(), engine.wrong_guesses());
                    print_round_over(&engine);
                }
                RoundEnd::GaveUp => {
                    println!("\nRound abandoned. The word was {}.", engine.target());
                }
                RoundEnd::Quit => {
                    println!("\nThe word was {}.", engine.target());
                    break 'categories;
                }
            }
            print_statistics(&stats);

            match prompt_next("\nPlay [a]gain, choose [c]ategory, or [q]uit")? {
                NextStep::SameCategory => {}
                NextStep::OtherCategory => continue 'categories,
                NextStep::Quit => break 'categories,
            }
        }
    }

    info!(
        rounds = stats.rounds_played(),
        won = stats.rounds_won,
        "text session ended"
    );
    println!("\nThanks for playing!");
    Ok(())
}

/// Play until the round ends or the player leaves it
fn play_round(
    engine: &mut GuessEngine,
    category: &str,
    difficulty: Difficulty,
) -> Result<RoundEnd> {
    while !engine.status().is_terminal() {
        print_board(engine, category, difficulty);

        let input = get_user_input("Guess a letter")?;
        if let Some(end) = parse_round_command(&input) {
            return Ok(end);
        }

        match parse_guess(&input) {
            Some(letter) => print_outcome(engine.guess(letter)),
            None => println!("{}", "Enter a single letter A-Z.".yellow()),
        }
    }
    Ok(RoundEnd::Finished)
}

fn prompt_difficulty() -> Result<Option<Difficulty>> {
    loop {
        for difficulty in Difficulty::ALL {
            println!(
                "  {}  {:<8} {} letters",
                difficulty.label()[..1].bright_cyan(),
                difficulty.label(),
                difficulty.range()
            );
        }
        let input = get_user_input("Difficulty")?;
        if is_quit(&input) {
            return Ok(None);
        }
        match input.parse::<Difficulty>() {
            Ok(difficulty) => return Ok(Some(difficulty)),
            Err(e) => println!("{}\n", e.to_string().yellow()),
        }
    }
}

/// Load the category list and let the player pick one; `None` means quit
fn choose_category<S: WordSource>(
    runtime: &Runtime,
    supplier: &WordSupplier<S>,
) -> Result<Option<String>> {
    loop {
        let categories = match block_on_with_spinner(
            runtime,
            "Loading categories…",
            supplier.list_categories(),
        ) {
            Ok(categories) if !categories.is_empty() => categories,
            Ok(_) => {
                println!("{}", "The word API has no categories.".red());
                return Ok(None);
            }
            Err(e) => {
                report_supply_error(&e, "categories");
                match prompt_next("[r]etry or [q]uit")? {
                    NextStep::Quit => return Ok(None),
                    NextStep::SameCategory | NextStep::OtherCategory => continue,
                }
            }
        };

        print_categories(&categories);

        loop {
            let input = get_user_input("Category (number or name)")?;
            if is_quit(&input) {
                return Ok(None);
            }
            match parse_category(&input, &categories) {
                Some(category) => return Ok(Some(category.to_string())),
                None => println!("{}", format!("No category matches '{input}'.").yellow()),
            }
        }
    }
}

fn report_supply_error(error: &SupplyError, subject: &str) {
    let headline = if error.is_network() {
        format!("Failed to load {subject}")
    } else {
        "No words found for this difficulty".to_string()
    };
    println!("\n{} {}", format!("❌ {headline}:").red().bold(), error);
}

fn prompt_next(prompt: &str) -> Result<NextStep> {
    loop {
        let input = get_user_input(prompt)?;
        if let Some(step) = parse_next_step(&input) {
            return Ok(step);
        }
    }
}

/// Commands accepted at the guess prompt
///
/// Single letters are guesses, so only the full words count here.
fn parse_round_command(input: &str) -> Option<RoundEnd> {
    match input.trim().to_lowercase().as_str() {
        "quit" | "exit" => Some(RoundEnd::Quit),
        "new" => Some(RoundEnd::GaveUp),
        _ => None,
    }
}

/// A single ASCII letter, in either case
fn parse_guess(input: &str) -> Option<char> {
    let mut chars = input.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c),
        _ => None,
    }
}

/// A 1-based index into `categories`, or a case-insensitive name
fn parse_category<'a>(input: &str, categories: &'a [String]) -> Option<&'a str> {
    let input = input.trim();
    if let Ok(n) = input.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| categories.get(i))
            .map(String::as_str);
    }
    categories
        .iter()
        .find(|c| c.eq_ignore_ascii_case(input))
        .map(String::as_str)
}

fn parse_next_step(input: &str) -> Option<NextStep> {
    match input.trim().to_lowercase().as_str() {
        "a" | "again" | "r" | "retry" | "y" | "yes" | "" => Some(NextStep::SameCategory),
        "c" | "category" => Some(NextStep::OtherCategory),
        "q" | "quit" | "n" | "no" => Some(NextStep::Quit),
        _ => None,
    }
}

fn is_quit(input: &str) -> bool {
    matches!(input.to_lowercase().as_str(), "q" | "quit")
}

/// Read one trimmed line; end of input reads as "quit"
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        println!();
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_accepts_single_letter() {
        assert_eq!(parse_guess("a"), Some('a'));
        assert_eq!(parse_guess(" Q "), Some('Q'));
        assert_eq!(parse_guess("ab"), None);
        assert_eq!(parse_guess("1"), None);
        assert_eq!(parse_guess("é"), None);
        assert_eq!(parse_guess(""), None);
    }

    #[test]
    fn guess_prompt_commands() {
        assert_eq!(parse_round_command("quit"), Some(RoundEnd::Quit));
        assert_eq!(parse_round_command(" QUIT "), Some(RoundEnd::Quit));
        assert_eq!(parse_round_command("exit"), Some(RoundEnd::Quit));
        assert_eq!(parse_round_command("new"), Some(RoundEnd::GaveUp));
        // Letters stay guesses, even the ones other prompts treat as commands
        assert_eq!(parse_round_command("q"), None);
        assert_eq!(parse_round_command("n"), None);
        assert_eq!(parse_round_command("e"), None);
    }

    #[test]
    fn category_by_number_or_name() {
        let categories = vec!["animals".to_string(), "Food".to_string()];
        assert_eq!(parse_category("1", &categories), Some("animals"));
        assert_eq!(parse_category("2", &categories), Some("Food"));
        assert_eq!(parse_category("food", &categories), Some("Food"));
        assert_eq!(parse_category("0", &categories), None);
        assert_eq!(parse_category("3", &categories), None);
        assert_eq!(parse_category("sports", &categories), None);
    }

    #[test]
    fn next_step_answers() {
        assert_eq!(parse_next_step("a"), Some(NextStep::SameCategory));
        assert_eq!(parse_next_step(""), Some(NextStep::SameCategory));
        assert_eq!(parse_next_step("R"), Some(NextStep::SameCategory));
        assert_eq!(parse_next_step("category"), Some(NextStep::OtherCategory));
        assert_eq!(parse_next_step("q"), Some(NextStep::Quit));
        assert_eq!(parse_next_step("maybe"), None);
    }
}
