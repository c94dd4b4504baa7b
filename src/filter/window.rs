//! The trailing window filter: last-N games, season to date, or
//! head-to-head against the upcoming opponent. Always the final stage, so a
//! last-N cap yields "the N newest games matching every other filter".

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use thiserror::Error;

use crate::data::GameRecord;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameWindow {
    /// The N most recent games (the product offers 5, 10 and 20).
    Last(usize),
    /// Every game of the current season.
    #[default]
    Season,
    /// Games against the current/upcoming opponent only, uncapped.
    HeadToHead,
}
impl GameWindow {
    /// Applies the window. `Last` re-sorts by date descending before
    /// truncating rather than trusting the store's newest-first invariant.
    /// `HeadToHead` matches each record's own opponent against the *current*
    /// opponent, not the other way around.
    pub fn apply(&self, records: &[GameRecord], current_opponent: &str) -> Vec<GameRecord> {
        match self {
            GameWindow::Season => records.to_vec(),
            GameWindow::HeadToHead => records
                .iter()
                .filter(|record| record.opponent_abbr == current_opponent)
                .cloned()
                .collect(),
            GameWindow::Last(n) => {
                let mut newest_first = records.to_vec();
                newest_first.sort_by(|a, b| b.date.cmp(&a.date));
                newest_first.truncate(*n);
                newest_first
            }
        }
    }

    /// The theoretical game count this window implies against the raw
    /// (pre-filter) record list. Callers compare it with the actual filtered
    /// count to flag a reduced sample.
    pub fn expected_total(&self, records: &[GameRecord], current_opponent: &str) -> usize {
        match self {
            GameWindow::Last(n) => *n,
            GameWindow::Season => records.len(),
            GameWindow::HeadToHead => records
                .iter()
                .filter(|record| record.opponent_abbr == current_opponent)
                .count(),
        }
    }
}

impl Display for GameWindow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GameWindow::Last(n) => write!(f, "l{n}"),
            GameWindow::Season => write!(f, "szn"),
            GameWindow::HeadToHead => write!(f, "h2h"),
        }
    }
}

#[derive(Debug, Error)]
pub struct WindowParseError(String);

impl Display for WindowParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GameWindow {
    type Err = WindowParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "szn" | "season" => Ok(GameWindow::Season),
            "h2h" => Ok(GameWindow::HeadToHead),
            other => {
                let Some(count) = other.strip_prefix('l') else {
                    return Err(WindowParseError(format!("unsupported window {s}")));
                };
                let n = count
                    .parse()
                    .map_err(|_| WindowParseError(format!("non-numeric window size in {s}")))?;
                if n == 0 {
                    return Err(WindowParseError(format!("zero-length window {s}")));
                }
                Ok(GameWindow::Last(n))
            }
        }
    }
}
