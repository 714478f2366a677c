//! Target word representation
//!
//! A `TargetWord` stores the secret word of a round along with the positions of
//! each letter, so revealing and counting a guessed letter is a single lookup.

use super::LetterSet;
use rustc_hash::FxHashMap;
use std::fmt;

/// The secret word for one round
///
/// Always non-empty and made only of the uppercase letters `A`-`Z`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetWord {
    text: String,
    letters: LetterSet,
    char_positions: FxHashMap<char, Vec<usize>>,
}

/// Error type for invalid target words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacter(c) => write!(f, "Word contains invalid character '{c}'"),
        }
    }
}

impl std::error::Error for WordError {}

impl TargetWord {
    /// Create a new target word from a string
    ///
    /// The text is uppercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - Contains non-ASCII characters
    /// - Contains anything other than letters (spaces, digits, punctuation)
    ///
    /// # Examples
    /// ```
    /// use hangman::core::TargetWord;
    ///
    /// let word = TargetWord::new("tiger").unwrap();
    /// assert_eq!(word.text(), "TIGER");
    ///
    /// assert!(TargetWord::new("ice cream").is_err());
    /// assert!(TargetWord::new("r2d2").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().trim().to_uppercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if let Some(bad) = text.chars().find(|c| !c.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacter(bad));
        }

        let mut char_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, ch) in text.chars().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }
        let letters = text.chars().collect();

        Ok(Self {
            text,
            letters,
            char_positions,
        })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters, counting repeats
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The distinct letters of the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }

    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.char_positions
            .get(&letter.to_ascii_uppercase())
            .map_or(&[], Vec::as_slice)
    }

    /// The word with every letter outside `revealed` replaced by `_`
    #[must_use]
    pub fn masked(&self, revealed: LetterSet) -> String {
        self.text
            .chars()
            .map(|c| if revealed.contains(c) { c } else { '_' })
            .collect()
    }
}

impl fmt::Display for TargetWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = TargetWord::new("tiger").unwrap();
        assert_eq!(word.text(), "TIGER");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_trims_and_uppercases() {
        let word = TargetWord::new("  PaNdA\n").unwrap();
        assert_eq!(word.text(), "PANDA");
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(TargetWord::new(""), Err(WordError::Empty));
        assert_eq!(TargetWord::new("   "), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(
            TargetWord::new("ice cream"),
            Err(WordError::InvalidCharacter(' '))
        );
        assert_eq!(
            TargetWord::new("t-rex"),
            Err(WordError::InvalidCharacter('-'))
        );
        assert_eq!(
            TargetWord::new("r2d2"),
            Err(WordError::InvalidCharacter('2'))
        );
        assert_eq!(TargetWord::new("café"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_letters_are_distinct() {
        let word = TargetWord::new("banana").unwrap();
        assert_eq!(word.letters().len(), 3);
        assert!(word.has_letter('n'));
        assert!(!word.has_letter('Z'));
    }

    #[test]
    fn word_positions_of_duplicates() {
        let word = TargetWord::new("banana").unwrap();
        assert_eq!(word.positions_of('A'), &[1, 3, 5]);
        assert_eq!(word.positions_of('n'), &[2, 4]);
        assert_eq!(word.positions_of('b'), &[0]);
        assert_eq!(word.positions_of('z'), &[] as &[usize]);
    }

    #[test]
    fn word_masked() {
        let word = TargetWord::new("banana").unwrap();
        assert_eq!(word.masked(LetterSet::EMPTY), "______");
        let revealed: LetterSet = "AN".chars().collect();
        assert_eq!(word.masked(revealed), "_ANANA");
        assert_eq!(word.masked(word.letters()), "BANANA");
    }

    #[test]
    fn word_equality_case_insensitive() {
        assert_eq!(TargetWord::new("cat").unwrap(), TargetWord::new("CAT").unwrap());
        assert_ne!(TargetWord::new("cat").unwrap(), TargetWord::new("dog").unwrap());
    }

    #[test]
    fn word_display() {
        let word = TargetWord::new("otter").unwrap();
        assert_eq!(format!("{word}"), "OTTER");
    }
}
