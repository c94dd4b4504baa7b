//! Bettable prop markets and their stored lines.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{EnumCount, EnumIter};
use thiserror::Error;

use crate::stat::Stat;

/// The closed set of markets the product offers lines on. Adding a market
/// here forces the [Market::stat] mapping to be extended; an unrecognised
/// market string is a parse error, never a silent fallback.
#[derive(
    Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, EnumCount,
    EnumIter,
)]
#[serde(rename_all = "camelCase")]
pub enum Market {
    Points,
    Rebounds,
    Assists,
    ThreesMade,
    Steals,
    Blocks,
    Turnovers,
    PointsReboundsAssists,
    PointsRebounds,
    PointsAssists,
    ReboundsAssists,
    BlocksSteals,
}
impl Market {
    /// The record field this market settles on.
    pub fn stat(&self) -> Stat {
        match self {
            Market::Points => Stat::Points,
            Market::Rebounds => Stat::Rebounds,
            Market::Assists => Stat::Assists,
            Market::ThreesMade => Stat::ThreeMade,
            Market::Steals => Stat::Steals,
            Market::Blocks => Stat::Blocks,
            Market::Turnovers => Stat::Turnovers,
            Market::PointsReboundsAssists => Stat::PointsReboundsAssists,
            Market::PointsRebounds => Stat::PointsRebounds,
            Market::PointsAssists => Stat::PointsAssists,
            Market::ReboundsAssists => Stat::ReboundsAssists,
            Market::BlocksSteals => Stat::BlocksSteals,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Market::Points => "pts",
            Market::Rebounds => "reb",
            Market::Assists => "ast",
            Market::ThreesMade => "3pm",
            Market::Steals => "stl",
            Market::Blocks => "blk",
            Market::Turnovers => "tov",
            Market::PointsReboundsAssists => "pra",
            Market::PointsRebounds => "pr",
            Market::PointsAssists => "pa",
            Market::ReboundsAssists => "ra",
            Market::BlocksSteals => "bs",
        }
    }
}

impl Display for Market {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug, Error)]
pub struct MarketParseError(String);

impl Display for MarketParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Market {
    type Err = MarketParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pts" | "points" => Ok(Market::Points),
            "reb" | "rebounds" => Ok(Market::Rebounds),
            "ast" | "assists" => Ok(Market::Assists),
            "3pm" | "threes" => Ok(Market::ThreesMade),
            "stl" | "steals" => Ok(Market::Steals),
            "blk" | "blocks" => Ok(Market::Blocks),
            "tov" | "turnovers" => Ok(Market::Turnovers),
            "pra" => Ok(Market::PointsReboundsAssists),
            "pr" => Ok(Market::PointsRebounds),
            "pa" => Ok(Market::PointsAssists),
            "ra" => Ok(Market::ReboundsAssists),
            "bs" | "stocks" => Ok(Market::BlocksSteals),
            _ => Err(MarketParseError(format!("unsupported market {s}"))),
        }
    }
}

/// A market together with its stored (book-set) line. A profile with no line
/// still renders averages; it just cannot produce a hit rate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketProfile {
    pub market: Market,
    pub line: Option<f64>,
}
impl MarketProfile {
    pub fn new(market: Market, line: Option<f64>) -> Self {
        Self { market, line }
    }
}
