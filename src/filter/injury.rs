//! Teammate injury-context filters: restrict the sample to games played
//! with or without a named teammate, using a side-loaded out-by-game map.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Deserialize;
use thiserror::Error;

use crate::data::{normalise_game_id, GameRecord};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InjuryMode {
    /// Keep games the teammate played in (absent from the out-set).
    With,
    /// Keep games the teammate sat out (present in the out-set).
    Without,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InjuryFilter {
    pub player_id: u64,
    pub player_name: String,
    pub mode: InjuryMode,
}
impl InjuryFilter {
    pub fn with(player_id: u64, player_name: impl Into<String>) -> Self {
        Self {
            player_id,
            player_name: player_name.into(),
            mode: InjuryMode::With,
        }
    }

    pub fn without(player_id: u64, player_name: impl Into<String>) -> Self {
        Self {
            player_id,
            player_name: player_name.into(),
            mode: InjuryMode::Without,
        }
    }
}

#[derive(Debug, Error)]
pub struct InjuryFilterParseError(String);

impl Display for InjuryFilterParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses the compact `with:<id>:<name>` / `without:<id>:<name>` form used
/// on the command line.
impl FromStr for InjuryFilter {
    type Err = InjuryFilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut frags = s.splitn(3, ':');
        let mode = match frags.next() {
            Some("with") => InjuryMode::With,
            Some("without") => InjuryMode::Without,
            _ => {
                return Err(InjuryFilterParseError(format!(
                    "injury filter must start with 'with:' or 'without:', got {s}"
                )))
            }
        };
        let player_id = frags
            .next()
            .and_then(|frag| frag.parse().ok())
            .ok_or_else(|| {
                InjuryFilterParseError(format!("missing or non-numeric player ID in {s}"))
            })?;
        let player_name = frags.next().unwrap_or_default().to_string();
        Ok(Self {
            player_id,
            player_name,
            mode,
        })
    }
}

/// Player IDs out per game, keyed by normalised game ID. Keys are normalised
/// on construction and queries are normalised on lookup, so zero-padding
/// differences between sources cannot cause a missed match.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(from = "FxHashMap<String, FxHashSet<u64>>")]
pub struct TeammatesOut {
    out_by_game: FxHashMap<String, FxHashSet<u64>>,
}
impl TeammatesOut {
    pub fn insert(&mut self, game_id: &str, player_id: u64) {
        self.out_by_game
            .entry(normalise_game_id(game_id).to_string())
            .or_default()
            .insert(player_id);
    }

    pub fn is_out(&self, game_id: &str, player_id: u64) -> bool {
        self.out_by_game
            .get(normalise_game_id(game_id))
            .map_or(false, |out| out.contains(&player_id))
    }

    pub fn is_empty(&self) -> bool {
        self.out_by_game.is_empty()
    }
}

impl From<FxHashMap<String, FxHashSet<u64>>> for TeammatesOut {
    fn from(raw: FxHashMap<String, FxHashSet<u64>>) -> Self {
        let mut normalised = Self::default();
        for (game_id, players) in raw {
            for player_id in players {
                normalised.insert(&game_id, player_id);
            }
        }
        normalised
    }
}

/// Applies the active injury filters; multiple filters are AND'd.
pub fn apply(
    records: &[GameRecord],
    filters: &[InjuryFilter],
    teammates_out: &TeammatesOut,
) -> Vec<GameRecord> {
    if filters.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| {
            filters.iter().all(|filter| {
                let out = teammates_out.is_out(&record.game_id, filter.player_id);
                match filter.mode {
                    InjuryMode::With => !out,
                    InjuryMode::Without => out,
                }
            })
        })
        .cloned()
        .collect()
}
