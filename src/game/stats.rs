//! Per-session round statistics

use super::Status;

/// Outcomes of the rounds played since the program started
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub rounds_won: usize,
    pub rounds_lost: usize,
    /// Wins indexed by the number of wrong guesses made (0-5)
    pub wrong_guess_distribution: [usize; 6],
}

impl Statistics {
    /// Record a finished round
    ///
    /// `Active` is not a finished round and is ignored.
    pub fn record(&mut self, status: Status, wrong_guesses: u8) {
        match status {
            Status::Won => {
                self.rounds_won += 1;
                if let Some(slot) = self.wrong_guess_distribution.get_mut(wrong_guesses as usize) {
                    *slot += 1;
                }
            }
            Status::Lost => self.rounds_lost += 1,
            Status::Active => {}
        }
    }

    #[must_use]
    pub const fn rounds_played(&self) -> usize {
        self.rounds_won + self.rounds_lost
    }

    /// Percentage of rounds won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds_played() == 0 {
            0.0
        } else {
            self.rounds_won as f64 / self.rounds_played() as f64 * 100.0
        }
    }
}
