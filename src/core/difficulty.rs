//! Difficulty levels and their word-length ranges

use std::fmt;
use std::str::FromStr;

/// Inclusive bounds on the length of a target word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LengthRange {
    pub min: usize,
    pub max: usize,
}

impl LengthRange {
    #[must_use]
    pub const fn new(min: usize, max: usize) -> Self {
        debug_assert!(min <= max, "LengthRange min must not exceed max");
        Self { min, max }
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, len: usize) -> bool {
        self.min <= len && len <= self.max
    }
}

impl fmt::Display for LengthRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// How hard a round is, expressed through the length of the target word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Every difficulty, easiest first
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Word lengths accepted at this difficulty
    #[must_use]
    pub const fn range(self) -> LengthRange {
        match self {
            Self::Easy => LengthRange::new(3, 5),
            Self::Medium => LengthRange::new(5, 7),
            Self::Hard => LengthRange::new(7, 10),
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Position in [`Difficulty::ALL`]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Easy => 0,
            Self::Medium => 1,
            Self::Hard => 2,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error for an unrecognized difficulty label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDifficultyError(String);

impl fmt::Display for ParseDifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown difficulty '{}', expected easy, medium or hard",
            self.0
        )
    }
}

impl std::error::Error for ParseDifficultyError {}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "e" => Ok(Self::Easy),
            "medium" | "m" => Ok(Self::Medium),
            "hard" | "h" => Ok(Self::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_match_configuration() {
        assert_eq!(Difficulty::Easy.range(), LengthRange::new(3, 5));
        assert_eq!(Difficulty::Medium.range(), LengthRange::new(5, 7));
        assert_eq!(Difficulty::Hard.range(), LengthRange::new(7, 10));
    }

    #[test]
    fn range_is_inclusive() {
        let range = Difficulty::Hard.range();
        assert!(!range.contains(6));
        assert!(range.contains(7));
        assert!(range.contains(10));
        assert!(!range.contains(11));
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Easy".parse(), Ok(Difficulty::Easy));
        assert_eq!(" MEDIUM ".parse(), Ok(Difficulty::Medium));
        assert_eq!("h".parse(), Ok(Difficulty::Hard));
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "nightmare".parse::<Difficulty>().unwrap_err();
        assert!(err.to_string().contains("nightmare"));
    }

    #[test]
    fn index_matches_all() {
        for (i, difficulty) in Difficulty::ALL.iter().enumerate() {
            assert_eq!(difficulty.index(), i);
        }
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Difficulty::Medium.to_string(), "medium");
        assert_eq!(Difficulty::Hard.range().to_string(), "7-10");
    }
}
