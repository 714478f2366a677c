//! Formatting utilities shared by the TUI and text mode

use crate::core::LetterSet;
use crate::game::MAX_TRIES;

/// Gallows drawings, indexed by the number of wrong guesses
const GALLOWS: [[&str; 6]; MAX_TRIES as usize + 1] = [
    [" +---+", " |   |", " |", " |", " |", "======"],
    [" +---+", " |   |", " |   O", " |", " |", "======"],
    [" +---+", " |   |", " |   O", " |   |", " |", "======"],
    [" +---+", " |   |", " |   O", " |  /|", " |", "======"],
    [" +---+", " |   |", " |   O", " |  /|\\", " |", "======"],
    [" +---+", " |   |", " |   O", " |  /|\\", " |  /", "======"],
    [" +---+", " |   |", " |   O", " |  /|\\", " |  / \\", "======"],
];

/// The gallows after `wrong_guesses` misses, one string per line
///
/// Counts above the maximum draw the complete figure.
#[must_use]
pub fn gallows(wrong_guesses: u8) -> &'static [&'static str] {
    let stage = usize::from(wrong_guesses.min(MAX_TRIES));
    &GALLOWS[stage]
}

/// Spread a masked word out so blanks are countable: `_A_A` becomes `_ A _ A`
#[must_use]
pub fn spaced(masked: &str) -> String {
    let mut result = String::with_capacity(masked.len() * 2);
    for (i, c) in masked.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(c);
    }
    result
}

/// Remaining tries as filled and empty hearts
#[must_use]
pub fn tries_bar(tries_remaining: u8) -> String {
    let left = tries_remaining.min(MAX_TRIES) as usize;
    format!(
        "{}{}",
        "♥".repeat(left),
        "♡".repeat(MAX_TRIES as usize - left)
    )
}

/// Letters on the on-screen keyboard, in display rows
pub const KEYBOARD_ROWS: [&str; 3] = ["ABCDEFGHI", "JKLMNOPQR", "STUVWXYZ"];

/// Keyboard rows with used letters blanked out
#[must_use]
pub fn keyboard_lines(available: LetterSet) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let keys: Vec<String> = row
                .chars()
                .map(|c| {
                    if available.contains(c) {
                        c.to_string()
                    } else {
                        "·".to_string()
                    }
                })
                .collect();
            keys.join(" ")
        })
        .collect()
}

/// One bar per wrong-guess count, scaled so the longest bar is `width` cells
///
/// Rows read like ` 2 wrong │████ 3`. Nonzero counts always get at least one cell.
#[must_use]
pub fn distribution_bars(distribution: &[usize], width: usize) -> Vec<String> {
    let max = distribution.iter().copied().max().unwrap_or(0).max(1);
    distribution
        .iter()
        .enumerate()
        .map(|(wrong, &count)| {
            let cells = if count == 0 {
                0
            } else {
                (count * width).div_ceil(max)
            };
            format!("{wrong:>2} wrong │{} {count}", "█".repeat(cells))
        })
        .collect()
}
