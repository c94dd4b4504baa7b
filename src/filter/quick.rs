//! Categorical quick filters: single-tag predicates over game metadata.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use rustc_hash::FxHashMap;
use strum_macros::EnumIter;
use thiserror::Error;

use crate::data::{GameRecord, GameResult, Venue};
use crate::filter::matchup::DefenseTier;

/// Opponent team ID to defense-vs-position rank (1..=30, 1 is stingiest).
pub type DvpRanks = FxHashMap<u64, u32>;

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, EnumIter)]
pub enum QuickFilter {
    Home,
    Away,
    Win,
    Loss,
    WonBy10,
    LostBy10,
    Primetime,
    DvpTough,
    DvpAverage,
    DvpWeak,
}

/// Tag families that cannot coexist within a [QuickFilterSet]. DvP tags and
/// `Primetime` belong to no family and stack freely.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Family {
    Venue,
    Result,
}

impl QuickFilter {
    fn family(&self) -> Option<Family> {
        match self {
            QuickFilter::Home | QuickFilter::Away => Some(Family::Venue),
            QuickFilter::Win
            | QuickFilter::Loss
            | QuickFilter::WonBy10
            | QuickFilter::LostBy10 => Some(Family::Result),
            _ => None,
        }
    }

    /// The tier this tag selects for, for the DvP family only.
    pub fn dvp_tier(&self) -> Option<DefenseTier> {
        match self {
            QuickFilter::DvpTough => Some(DefenseTier::Tough),
            QuickFilter::DvpAverage => Some(DefenseTier::Neutral),
            QuickFilter::DvpWeak => Some(DefenseTier::Favorable),
            _ => None,
        }
    }

    /// Whether the record satisfies this tag. An unknown margin never
    /// satisfies a margin predicate. DvP tags are evaluated collectively in
    /// [apply], not here.
    fn matches(&self, record: &GameRecord) -> bool {
        match self {
            QuickFilter::Home => record.venue == Venue::Home,
            QuickFilter::Away => record.venue == Venue::Away,
            QuickFilter::Win => record.result == GameResult::Win,
            QuickFilter::Loss => record.result == GameResult::Loss,
            QuickFilter::WonBy10 => record.margin.map_or(false, |margin| margin >= 10),
            QuickFilter::LostBy10 => record.margin.map_or(false, |margin| margin <= -10),
            QuickFilter::Primetime => record.primetime,
            QuickFilter::DvpTough | QuickFilter::DvpAverage | QuickFilter::DvpWeak => true,
        }
    }
}

impl Display for QuickFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            QuickFilter::Home => "home",
            QuickFilter::Away => "away",
            QuickFilter::Win => "win",
            QuickFilter::Loss => "loss",
            QuickFilter::WonBy10 => "wonBy10",
            QuickFilter::LostBy10 => "lostBy10",
            QuickFilter::Primetime => "primetime",
            QuickFilter::DvpTough => "dvpTough",
            QuickFilter::DvpAverage => "dvpAverage",
            QuickFilter::DvpWeak => "dvpWeak",
        };
        write!(f, "{tag}")
    }
}

#[derive(Debug, Error)]
pub struct QuickFilterParseError(String);

impl Display for QuickFilterParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for QuickFilter {
    type Err = QuickFilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "home" => Ok(QuickFilter::Home),
            "away" => Ok(QuickFilter::Away),
            "win" => Ok(QuickFilter::Win),
            "loss" => Ok(QuickFilter::Loss),
            "wonby10" => Ok(QuickFilter::WonBy10),
            "lostby10" => Ok(QuickFilter::LostBy10),
            "primetime" => Ok(QuickFilter::Primetime),
            "dvptough" => Ok(QuickFilter::DvpTough),
            "dvpaverage" => Ok(QuickFilter::DvpAverage),
            "dvpweak" => Ok(QuickFilter::DvpWeak),
            _ => Err(QuickFilterParseError(format!("unsupported quick filter {s}"))),
        }
    }
}

/// An insertion-ordered tag set. Inserting a tag evicts any existing tag of
/// the same exclusive family, so `home` and `away` (and likewise the four
/// result tags) never coexist.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuickFilterSet {
    tags: Vec<QuickFilter>,
}
impl QuickFilterSet {
    pub fn insert(&mut self, tag: QuickFilter) {
        if let Some(family) = tag.family() {
            self.tags.retain(|existing| existing.family() != Some(family));
        }
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    pub fn remove(&mut self, tag: QuickFilter) {
        self.tags.retain(|existing| *existing != tag);
    }

    pub fn contains(&self, tag: QuickFilter) -> bool {
        self.tags.contains(&tag)
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuickFilter> {
        self.tags.iter()
    }
}

impl FromIterator<QuickFilter> for QuickFilterSet {
    fn from_iter<I: IntoIterator<Item = QuickFilter>>(iter: I) -> Self {
        let mut set = QuickFilterSet::default();
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}

/// Applies the active tags. Non-DvP tags are AND'd; the DvP tags are OR'd
/// among themselves, and a game whose opponent has no DvP rank is excluded
/// whenever any DvP tag is active.
pub fn apply(
    records: &[GameRecord],
    tags: &QuickFilterSet,
    dvp_ranks: &DvpRanks,
) -> Vec<GameRecord> {
    if tags.is_empty() {
        return records.to_vec();
    }
    let dvp_tiers: Vec<_> = tags.iter().filter_map(QuickFilter::dvp_tier).collect();
    records
        .iter()
        .filter(|record| {
            let plain = tags
                .iter()
                .filter(|tag| tag.dvp_tier().is_none())
                .all(|tag| tag.matches(record));
            if !plain {
                return false;
            }
            if dvp_tiers.is_empty() {
                return true;
            }
            match dvp_ranks.get(&record.opponent_team_id) {
                None => false,
                Some(&rank) => dvp_tiers.contains(&DefenseTier::from_rank(rank)),
            }
        })
        .cloned()
        .collect()
}
