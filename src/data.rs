//! Game-log records for a single player and the side-loaded player sheet
//! that bundles them with matchup context from upstream collaborators.

use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::filter::injury::TeammatesOut;
use crate::filter::matchup::RankTable;
use crate::filter::quick::DvpRanks;
use crate::market::MarketProfile;

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Venue {
    Home,
    Away,
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameResult {
    Win,
    Loss,
}

/// One historical game for a fixed player. Combination fields (`pra` and
/// friends) are computed upstream and carried as-is; nothing in this crate
/// recomputes them. A margin of `None` means the source supplied no margin,
/// which is distinct from a margin of zero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub game_id: String,
    pub date: NaiveDate,
    pub opponent_abbr: String,
    pub opponent_team_id: u64,
    pub venue: Venue,
    pub result: GameResult,
    pub margin: Option<i32>,
    #[serde(default)]
    pub primetime: bool,
    pub minutes: Option<f64>,
    pub usage_pct: Option<f64>,
    pub points: Option<f64>,
    pub rebounds: Option<f64>,
    pub assists: Option<f64>,
    pub fg_made: Option<f64>,
    pub fg_attempted: Option<f64>,
    pub three_made: Option<f64>,
    pub three_attempted: Option<f64>,
    pub ft_made: Option<f64>,
    pub ft_attempted: Option<f64>,
    pub steals: Option<f64>,
    pub blocks: Option<f64>,
    pub turnovers: Option<f64>,
    pub plus_minus: Option<f64>,
    pub true_shooting_pct: Option<f64>,
    pub effective_fg_pct: Option<f64>,
    pub offensive_rebounds: Option<f64>,
    pub defensive_rebounds: Option<f64>,
    pub potential_rebounds: Option<f64>,
    pub passes: Option<f64>,
    pub pra: Option<f64>,
    pub pr: Option<f64>,
    pub pa: Option<f64>,
    pub ra: Option<f64>,
    pub stocks: Option<f64>,
}
impl GameRecord {
    /// The game ID with leading zeros stripped, for cross-source comparison.
    pub fn normalised_id(&self) -> &str {
        normalise_game_id(&self.game_id)
    }
}

/// Strips leading zeros from a game ID. Source feeds pad IDs inconsistently,
/// so `"005"` and `"5"` must resolve to the same key.
pub fn normalise_game_id(id: &str) -> &str {
    let trimmed = id.trim_start_matches('0');
    if trimmed.is_empty() {
        "0"
    } else {
        trimmed
    }
}

/// Everything the engine needs for one player's drilldown, resolved upstream
/// and side-loaded as a single document: the game log (newest first), the
/// upcoming opponent, the defensive rank tables, the teammates-out map and
/// the per-market line profiles.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSheet {
    pub player_name: String,
    pub current_opponent_abbr: String,
    pub current_opponent_team_id: u64,
    pub records: Vec<GameRecord>,
    #[serde(default)]
    pub dvp_ranks: DvpRanks,
    #[serde(default)]
    pub play_type_ranks: RankTable,
    #[serde(default)]
    pub shot_zone_ranks: RankTable,
    #[serde(default)]
    pub teammates_out: TeammatesOut,
    #[serde(default)]
    pub profiles: Vec<MarketProfile>,
}

pub fn read_sheet_from_file(path: impl AsRef<Path>) -> anyhow::Result<PlayerSheet> {
    let file = File::open(path)?;
    let sheet = serde_json::from_reader(file)?;
    Ok(sheet)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalise_strips_leading_zeros() {
        assert_eq!("5", normalise_game_id("005"));
        assert_eq!("5", normalise_game_id("5"));
        assert_eq!("1002", normalise_game_id("0001002"));
    }

    #[test]
    fn normalise_all_zeros() {
        assert_eq!("0", normalise_game_id("000"));
        assert_eq!("0", normalise_game_id("0"));
    }

    #[test]
    fn deserialise_sparse_record() {
        let json = r#"{
            "gameId": "0022300042",
            "date": "2024-01-15",
            "opponentAbbr": "BOS",
            "opponentTeamId": 2,
            "venue": "home",
            "result": "win",
            "margin": 7,
            "points": 31.0,
            "rebounds": 8.0,
            "assists": 5.0
        }"#;
        let record: GameRecord = serde_json::from_str(json).unwrap();
        assert_eq!("22300042", record.normalised_id());
        assert_eq!(Venue::Home, record.venue);
        assert_eq!(GameResult::Win, record.result);
        assert_eq!(Some(7), record.margin);
        assert!(!record.primetime);
        assert_eq!(Some(31.0), record.points);
        assert_eq!(None, record.minutes);
        assert_eq!(None, record.pra);
    }

    #[test]
    fn deserialise_missing_margin() {
        let json = r#"{
            "gameId": "1",
            "date": "2024-01-15",
            "opponentAbbr": "MIL",
            "opponentTeamId": 15,
            "venue": "away",
            "result": "loss",
            "margin": null,
            "points": 22.0
        }"#;
        let record: GameRecord = serde_json::from_str(json).unwrap();
        assert_eq!(None, record.margin);
    }
}
