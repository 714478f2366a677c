//! Sets of guessable letters
//!
//! The game only ever deals with the 26 ASCII uppercase letters, so a set of
//! them fits in a single `u32` with bit `i` standing for `'A' + i`.

use std::fmt;

const FULL_MASK: u32 = (1 << 26) - 1;

/// A set of letters drawn from `A`-`Z`
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// All 26 letters
    pub const ALPHABET: Self = Self(FULL_MASK);

    /// Map a character to its bit index
    ///
    /// Lowercase ASCII letters are folded to uppercase; anything else is
    /// not a letter of the game.
    #[inline]
    #[must_use]
    pub const fn index_of(letter: char) -> Option<u32> {
        let upper = letter.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Some(upper as u32 - 'A' as u32)
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: char) -> bool {
        match Self::index_of(letter) {
            Some(i) => self.0 & (1 << i) != 0,
            None => false,
        }
    }

    /// Add a letter, returning `true` if it was not present before
    pub fn insert(&mut self, letter: char) -> bool {
        let Some(i) = Self::index_of(letter) else {
            return false;
        };
        let was_absent = self.0 & (1 << i) == 0;
        self.0 |= 1 << i;
        was_absent
    }

    /// Remove a letter, returning `true` if it was present
    pub fn remove(&mut self, letter: char) -> bool {
        let Some(i) = Self::index_of(letter) else {
            return false;
        };
        let was_present = self.0 & (1 << i) != 0;
        self.0 &= !(1 << i);
        was_present
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if every letter of `other` is also in `self`
    #[inline]
    #[must_use]
    pub const fn is_superset(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    #[must_use]
    pub const fn is_disjoint(self, other: Self) -> bool {
        self.0 & other.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = char> {
        ('A'..='Z').filter(move |&c| self.contains(c))
    }
}

impl FromIterator<char> for LetterSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for c in iter {
            set.insert(c);
        }
        set
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.iter() {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_has_26_letters() {
        assert_eq!(LetterSet::ALPHABET.len(), 26);
        assert!(LetterSet::ALPHABET.contains('A'));
        assert!(LetterSet::ALPHABET.contains('Z'));
        assert!(LetterSet::EMPTY.is_empty());
    }

    #[test]
    fn lowercase_is_folded() {
        let mut set = LetterSet::EMPTY;
        assert!(set.insert('q'));
        assert!(set.contains('Q'));
        assert!(set.contains('q'));
        assert!(!set.insert('Q'));
    }

    #[test]
    fn non_letters_are_rejected() {
        let mut set = LetterSet::ALPHABET;
        assert!(!set.contains('1'));
        assert!(!set.contains('é'));
        assert!(!set.insert(' '));
        assert!(!set.remove('-'));
        assert_eq!(set.len(), 26);
    }

    #[test]
    fn remove_reports_presence() {
        let mut set = LetterSet::ALPHABET;
        assert!(set.remove('M'));
        assert!(!set.remove('M'));
        assert_eq!(set.len(), 25);
        assert!(!set.contains('M'));
    }

    #[test]
    fn iter_is_alphabetical() {
        let set: LetterSet = "tac".chars().collect();
        assert_eq!(set.iter().collect::<String>(), "ACT");
        assert_eq!(set.to_string(), "ACT");
    }

    #[test]
    fn superset_and_disjoint() {
        let cat: LetterSet = "CAT".chars().collect();
        let cart: LetterSet = "CART".chars().collect();
        assert!(cart.is_superset(cat));
        assert!(!cat.is_superset(cart));
        assert!(cat.is_superset(LetterSet::EMPTY));

        let dog: LetterSet = "DOG".chars().collect();
        assert!(cat.is_disjoint(dog));
        assert!(!cat.is_disjoint(cart));
        assert_eq!(cart.difference(cat).to_string(), "R");
    }
}
