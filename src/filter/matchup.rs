//! Matchup defense filters: keep games where the opponent's ranked
//! defensive strength for a play type or shot zone falls in a target tier.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::data::GameRecord;

/// Tercile classification of a 1..=30 defensive rank, rank 1 being the
/// stingiest defense.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum DefenseTier {
    Tough,
    Neutral,
    Favorable,
}
impl DefenseTier {
    pub fn from_rank(rank: u32) -> Self {
        match rank {
            0..=10 => DefenseTier::Tough,
            11..=20 => DefenseTier::Neutral,
            _ => DefenseTier::Favorable,
        }
    }
}

impl Display for DefenseTier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            DefenseTier::Tough => "tough",
            DefenseTier::Neutral => "neutral",
            DefenseTier::Favorable => "favorable",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Error)]
pub struct MatchupFilterParseError(String);

impl Display for MatchupFilterParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DefenseTier {
    type Err = MatchupFilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tough" => Ok(DefenseTier::Tough),
            "neutral" => Ok(DefenseTier::Neutral),
            "favorable" => Ok(DefenseTier::Favorable),
            _ => Err(MatchupFilterParseError(format!("unsupported tier {s}"))),
        }
    }
}

/// Opponent ranks per play-type or shot-zone key: key → (team ID → rank).
pub type RankTable = FxHashMap<String, FxHashMap<u64, u32>>;

#[derive(Clone, Debug, PartialEq)]
pub struct MatchupFilter {
    pub key: String,
    pub tier: DefenseTier,
}
impl MatchupFilter {
    pub fn new(key: impl Into<String>, tier: DefenseTier) -> Self {
        Self {
            key: key.into(),
            tier,
        }
    }
}

/// Parses the compact `<key>:<tier>` form, e.g. `isolation:tough`.
impl FromStr for MatchupFilter {
    type Err = MatchupFilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, tier) = s
            .split_once(':')
            .ok_or_else(|| MatchupFilterParseError(format!("expected <key>:<tier>, got {s}")))?;
        if key.is_empty() {
            return Err(MatchupFilterParseError(format!("empty key in {s}")));
        }
        Ok(Self {
            key: key.to_string(),
            tier: tier.parse()?,
        })
    }
}

/// Applies the active matchup filters; multiple filters are AND'd. A filter
/// whose key or opponent has no rank entry abstains for that record (the
/// record passes). Unlike the DvP quick tags, these tables are sparse
/// upstream, so a missing entry means "no tracking data", not "no matchup".
pub fn apply(
    records: &[GameRecord],
    filters: &[MatchupFilter],
    table: &RankTable,
) -> Vec<GameRecord> {
    if filters.is_empty() || table.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| {
            filters.iter().all(|filter| {
                match table
                    .get(&filter.key)
                    .and_then(|ranks| ranks.get(&record.opponent_team_id))
                {
                    None => true,
                    Some(&rank) => DefenseTier::from_rank(rank) == filter.tier,
                }
            })
        })
        .cloned()
        .collect()
}
