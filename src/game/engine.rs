//! The guess engine: one round of Hangman as a state machine
//!
//! ```text
//!            guess (hit, word incomplete) / guess (miss, tries > 0)
//!               ┌───────┐
//!               ▼       │
//!   new ──►  Active ────┘
//!               │
//!               ├── hit completes the word ──► Won
//!               └── miss uses the last try ──► Lost
//! ```
//!
//! `Won` and `Lost` are terminal: every later guess is ignored.

use crate::core::{LetterSet, TargetWord};

/// Number of wrong guesses a player may make in one round
pub const MAX_TRIES: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Active,
    Won,
    Lost,
}

impl Status {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// What happened to a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter is in the word
    Hit { letter: char, occurrences: usize },
    /// The letter is not in the word; one try was used
    Miss { letter: char },
    /// Not a letter, or already guessed; nothing changed
    Unavailable { letter: char },
    /// The round is over; nothing changed
    Ignored,
}

/// Mutable part of a round: everything except the target word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessState {
    pub available: LetterSet,
    pub correct: LetterSet,
    pub tries_remaining: u8,
    pub status: Status,
}

impl GuessState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            available: LetterSet::ALPHABET,
            correct: LetterSet::EMPTY,
            tries_remaining: MAX_TRIES,
            status: Status::Active,
        }
    }
}

impl Default for GuessState {
    fn default() -> Self {
        Self::new()
    }
}

/// A round of Hangman against a fixed target word
#[derive(Debug, Clone)]
pub struct GuessEngine {
    target: TargetWord,
    state: GuessState,
}

impl GuessEngine {
    #[must_use]
    pub const fn new(target: TargetWord) -> Self {
        Self {
            target,
            state: GuessState::new(),
        }
    }

    /// Guess a letter
    ///
    /// Lowercase input is folded to uppercase.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::TargetWord;
    /// use hangman::game::{GuessEngine, GuessOutcome, Status};
    ///
    /// let mut engine = GuessEngine::new(TargetWord::new("cat").unwrap());
    /// assert_eq!(engine.guess('c'), GuessOutcome::Hit { letter: 'C', occurrences: 1 });
    /// assert_eq!(engine.guess('x'), GuessOutcome::Miss { letter: 'X' });
    /// assert_eq!(engine.guess('c'), GuessOutcome::Unavailable { letter: 'C' });
    /// engine.guess('a');
    /// engine.guess('t');
    /// assert_eq!(engine.status(), Status::Won);
    /// ```
    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        if self.state.status.is_terminal() {
            return GuessOutcome::Ignored;
        }

        let letter = letter.to_ascii_uppercase();
        if !self.state.available.remove(letter) {
            return GuessOutcome::Unavailable { letter };
        }

        if self.target.has_letter(letter) {
            self.state.correct.insert(letter);
            if self.state.correct.is_superset(self.target.letters()) {
                self.state.status = Status::Won;
            }
            GuessOutcome::Hit {
                letter,
                occurrences: self.target.positions_of(letter).len(),
            }
        } else {
            self.state.tries_remaining = self.state.tries_remaining.saturating_sub(1);
            if self.state.tries_remaining == 0 {
                self.state.status = Status::Lost;
            }
            GuessOutcome::Miss { letter }
        }
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.state.status
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> &GuessState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> &TargetWord {
        &self.target
    }

    #[inline]
    #[must_use]
    pub const fn tries_remaining(&self) -> u8 {
        self.state.tries_remaining
    }

    /// Wrong guesses made so far (0 to `MAX_TRIES`)
    #[inline]
    #[must_use]
    pub const fn wrong_guesses(&self) -> u8 {
        MAX_TRIES - self.state.tries_remaining
    }

    #[inline]
    #[must_use]
    pub const fn available(&self) -> LetterSet {
        self.state.available
    }

    #[inline]
    #[must_use]
    pub const fn correct(&self) -> LetterSet {
        self.state.correct
    }

    /// Letters guessed that are not in the word
    #[must_use]
    pub const fn wrong(&self) -> LetterSet {
        LetterSet::ALPHABET
            .difference(self.state.available)
            .difference(self.state.correct)
    }

    /// The word as the player currently sees it
    #[must_use]
    pub fn masked_word(&self) -> String {
        self.target.masked(self.state.correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(word: &str) -> GuessEngine {
        GuessEngine::new(TargetWord::new(word).unwrap())
    }

    fn assert_disjoint(engine: &GuessEngine) {
        assert!(engine.available().is_disjoint(engine.correct()));
    }

    #[test]
    fn initial_state() {
        let engine = engine("cat");
        assert_eq!(engine.status(), Status::Active);
        assert_eq!(engine.tries_remaining(), MAX_TRIES);
        assert_eq!(engine.available(), LetterSet::ALPHABET);
        assert!(engine.correct().is_empty());
        assert!(engine.wrong().is_empty());
        assert_eq!(engine.masked_word(), "___");
    }

    #[test]
    fn cat_is_won_without_losing_tries() {
        let mut engine = engine("CAT");
        let mut statuses = vec![engine.status()];

        for letter in ['C', 'A', 'T'] {
            assert!(matches!(engine.guess(letter), GuessOutcome::Hit { .. }));
            statuses.push(engine.status());
            assert_disjoint(&engine);
        }

        assert_eq!(
            statuses,
            [Status::Active, Status::Active, Status::Active, Status::Won]
        );
        assert_eq!(engine.tries_remaining(), 6);
        assert_eq!(engine.masked_word(), "CAT");
    }

    #[test]
    fn dog_is_lost_after_six_misses() {
        let mut engine = engine("DOG");
        let mut tries = vec![engine.tries_remaining()];

        for letter in ['X', 'Y', 'Z', 'Q', 'W', 'E'] {
            assert_eq!(engine.guess(letter), GuessOutcome::Miss { letter });
            tries.push(engine.tries_remaining());
        }

        assert_eq!(tries, [6, 5, 4, 3, 2, 1, 0]);
        assert_eq!(engine.status(), Status::Lost);
        assert_eq!(engine.wrong().to_string(), "EQWXYZ");
        assert_eq!(engine.wrong_guesses(), 6);
    }

    #[test]
    fn terminal_states_ignore_guesses() {
        let mut won = engine("AB");
        won.guess('A');
        won.guess('B');
        assert_eq!(won.status(), Status::Won);
        let before = won.state().clone();
        assert_eq!(won.guess('C'), GuessOutcome::Ignored);
        assert_eq!(won.state(), &before);

        let mut lost = engine("AB");
        for letter in "CDEFGH".chars() {
            lost.guess(letter);
        }
        assert_eq!(lost.status(), Status::Lost);
        assert_eq!(lost.guess('A'), GuessOutcome::Ignored);
        assert!(lost.available().contains('A'));
        assert_eq!(lost.tries_remaining(), 0);
    }

    #[test]
    fn repeated_guess_is_unavailable() {
        let mut engine = engine("DOG");
        engine.guess('X');
        let before = engine.state().clone();

        assert_eq!(engine.guess('x'), GuessOutcome::Unavailable { letter: 'X' });
        assert_eq!(engine.state(), &before);

        engine.guess('D');
        assert_eq!(engine.guess('D'), GuessOutcome::Unavailable { letter: 'D' });
        assert_eq!(engine.tries_remaining(), 5);
    }

    #[test]
    fn non_letters_are_unavailable() {
        let mut engine = engine("DOG");
        assert_eq!(engine.guess('7'), GuessOutcome::Unavailable { letter: '7' });
        assert_eq!(engine.tries_remaining(), MAX_TRIES);
        assert_eq!(engine.available().len(), 26);
    }

    #[test]
    fn hit_counts_occurrences() {
        let mut engine = engine("banana");
        assert_eq!(
            engine.guess('a'),
            GuessOutcome::Hit {
                letter: 'A',
                occurrences: 3
            }
        );
        assert_eq!(engine.masked_word(), "_A_A_A");
    }

    #[test]
    fn repeated_letters_need_one_guess() {
        let mut engine = engine("LLAMA");
        engine.guess('L');
        engine.guess('A');
        assert_eq!(engine.status(), Status::Active);
        engine.guess('M');
        assert_eq!(engine.status(), Status::Won);
    }

    #[test]
    fn win_on_last_try() {
        let mut engine = engine("OX");
        for letter in "ABCDE".chars() {
            engine.guess(letter);
        }
        assert_eq!(engine.tries_remaining(), 1);
        engine.guess('O');
        engine.guess('X');
        assert_eq!(engine.status(), Status::Won);
        assert_eq!(engine.tries_remaining(), 1);
    }

    #[test]
    fn each_letter_leaves_available_once() {
        let mut engine = engine("HANGMAN");
        for (n, letter) in "QHAZNG".chars().enumerate() {
            engine.guess(letter);
            assert_eq!(engine.available().len(), 26 - (n + 1));
            assert_disjoint(&engine);
        }
        assert_eq!(engine.correct().to_string(), "AGHN");
        assert_eq!(engine.wrong().to_string(), "QZ");
    }

    #[test]
    fn win_property_over_words() {
        for word in ["A", "ZEBRA", "MISSISSIPPI", "QUIZ", "ABCDEFGHIJ"] {
            let mut engine = engine(word);
            let letters = engine.target().letters();
            for letter in letters.iter() {
                engine.guess(letter);
            }
            assert_eq!(engine.status(), Status::Won, "{word} should be won");
            assert_eq!(engine.tries_remaining(), MAX_TRIES);
        }
    }
}
