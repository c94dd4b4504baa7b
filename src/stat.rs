//! Typed access to the numeric per-game fields of a [GameRecord].

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use strum_macros::{EnumCount, EnumIter};
use thiserror::Error;

use crate::data::GameRecord;

/// Every numeric field a filter or average can address. The combination
/// variants read the upstream-computed fields off the record rather than
/// summing their components, so a record with `points` but no `rebounds`
/// yields `None` for [Stat::PointsRebounds].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, EnumCount, EnumIter)]
pub enum Stat {
    Minutes,
    UsagePct,
    Points,
    Rebounds,
    Assists,
    FgMade,
    FgAttempted,
    ThreeMade,
    ThreeAttempted,
    FtMade,
    FtAttempted,
    Steals,
    Blocks,
    Turnovers,
    PlusMinus,
    TrueShootingPct,
    EffectiveFgPct,
    OffensiveRebounds,
    DefensiveRebounds,
    PotentialRebounds,
    Passes,
    PointsReboundsAssists,
    PointsRebounds,
    PointsAssists,
    ReboundsAssists,
    BlocksSteals,
}
impl Stat {
    pub fn value(&self, record: &GameRecord) -> Option<f64> {
        match self {
            Stat::Minutes => record.minutes,
            Stat::UsagePct => record.usage_pct,
            Stat::Points => record.points,
            Stat::Rebounds => record.rebounds,
            Stat::Assists => record.assists,
            Stat::FgMade => record.fg_made,
            Stat::FgAttempted => record.fg_attempted,
            Stat::ThreeMade => record.three_made,
            Stat::ThreeAttempted => record.three_attempted,
            Stat::FtMade => record.ft_made,
            Stat::FtAttempted => record.ft_attempted,
            Stat::Steals => record.steals,
            Stat::Blocks => record.blocks,
            Stat::Turnovers => record.turnovers,
            Stat::PlusMinus => record.plus_minus,
            Stat::TrueShootingPct => record.true_shooting_pct,
            Stat::EffectiveFgPct => record.effective_fg_pct,
            Stat::OffensiveRebounds => record.offensive_rebounds,
            Stat::DefensiveRebounds => record.defensive_rebounds,
            Stat::PotentialRebounds => record.potential_rebounds,
            Stat::Passes => record.passes,
            Stat::PointsReboundsAssists => record.pra,
            Stat::PointsRebounds => record.pr,
            Stat::PointsAssists => record.pa,
            Stat::ReboundsAssists => record.ra,
            Stat::BlocksSteals => record.stocks,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Stat::Minutes => "min",
            Stat::UsagePct => "usg",
            Stat::Points => "pts",
            Stat::Rebounds => "reb",
            Stat::Assists => "ast",
            Stat::FgMade => "fgm",
            Stat::FgAttempted => "fga",
            Stat::ThreeMade => "3pm",
            Stat::ThreeAttempted => "3pa",
            Stat::FtMade => "ftm",
            Stat::FtAttempted => "fta",
            Stat::Steals => "stl",
            Stat::Blocks => "blk",
            Stat::Turnovers => "tov",
            Stat::PlusMinus => "pm",
            Stat::TrueShootingPct => "ts",
            Stat::EffectiveFgPct => "efg",
            Stat::OffensiveRebounds => "oreb",
            Stat::DefensiveRebounds => "dreb",
            Stat::PotentialRebounds => "potreb",
            Stat::Passes => "pass",
            Stat::PointsReboundsAssists => "pra",
            Stat::PointsRebounds => "pr",
            Stat::PointsAssists => "pa",
            Stat::ReboundsAssists => "ra",
            Stat::BlocksSteals => "bs",
        }
    }
}

impl Display for Stat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug, Error)]
pub struct StatParseError(String);

impl Display for StatParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Stat {
    type Err = StatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "min" | "minutes" => Ok(Stat::Minutes),
            "usg" | "usage" => Ok(Stat::UsagePct),
            "pts" | "points" => Ok(Stat::Points),
            "reb" | "rebounds" => Ok(Stat::Rebounds),
            "ast" | "assists" => Ok(Stat::Assists),
            "fgm" => Ok(Stat::FgMade),
            "fga" => Ok(Stat::FgAttempted),
            "3pm" => Ok(Stat::ThreeMade),
            "3pa" => Ok(Stat::ThreeAttempted),
            "ftm" => Ok(Stat::FtMade),
            "fta" => Ok(Stat::FtAttempted),
            "stl" | "steals" => Ok(Stat::Steals),
            "blk" | "blocks" => Ok(Stat::Blocks),
            "tov" | "turnovers" => Ok(Stat::Turnovers),
            "pm" => Ok(Stat::PlusMinus),
            "ts" => Ok(Stat::TrueShootingPct),
            "efg" => Ok(Stat::EffectiveFgPct),
            "oreb" => Ok(Stat::OffensiveRebounds),
            "dreb" => Ok(Stat::DefensiveRebounds),
            "potreb" => Ok(Stat::PotentialRebounds),
            "pass" | "passes" => Ok(Stat::Passes),
            "pra" => Ok(Stat::PointsReboundsAssists),
            "pr" => Ok(Stat::PointsRebounds),
            "pa" => Ok(Stat::PointsAssists),
            "ra" => Ok(Stat::ReboundsAssists),
            "bs" | "stocks" => Ok(Stat::BlocksSteals),
            _ => Err(StatParseError(format!("unsupported stat {s}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::data::{GameResult, Venue};

    use super::*;

    fn record() -> GameRecord {
        GameRecord {
            game_id: "1".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            opponent_abbr: "BOS".into(),
            opponent_team_id: 2,
            venue: Venue::Home,
            result: GameResult::Win,
            margin: Some(7),
            primetime: false,
            minutes: Some(34.5),
            usage_pct: None,
            points: Some(31.0),
            rebounds: Some(8.0),
            assists: Some(5.0),
            fg_made: None,
            fg_attempted: None,
            three_made: None,
            three_attempted: None,
            ft_made: None,
            ft_attempted: None,
            steals: None,
            blocks: None,
            turnovers: None,
            plus_minus: None,
            true_shooting_pct: None,
            effective_fg_pct: None,
            offensive_rebounds: None,
            defensive_rebounds: None,
            potential_rebounds: None,
            passes: None,
            pra: Some(44.0),
            pr: None,
            pa: None,
            ra: None,
            stocks: None,
        }
    }

    #[test]
    fn extracts_present_fields() {
        let record = record();
        assert_eq!(Some(31.0), Stat::Points.value(&record));
        assert_eq!(Some(34.5), Stat::Minutes.value(&record));
        assert_eq!(Some(44.0), Stat::PointsReboundsAssists.value(&record));
    }

    #[test]
    fn absent_field_is_none() {
        let record = record();
        assert_eq!(None, Stat::UsagePct.value(&record));
        assert_eq!(None, Stat::PointsRebounds.value(&record));
    }

    #[test]
    fn parse_and_display() {
        assert_eq!(Stat::Points, "pts".parse().unwrap());
        assert_eq!(Stat::Points, "points".parse().unwrap());
        assert_eq!(Stat::ThreeMade, "3pm".parse().unwrap());
        assert_eq!("pra", Stat::PointsReboundsAssists.to_string());
        assert!("xyz".parse::<Stat>().is_err());
    }
}
