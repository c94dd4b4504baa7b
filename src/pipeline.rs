//! Composes the filter stages in their fixed order and produces the
//! window-only baseline set used for before/after comparison.

use crate::data::{GameRecord, PlayerSheet};
use crate::filter::injury::{self, InjuryFilter, TeammatesOut};
use crate::filter::matchup::{self, MatchupFilter, RankTable};
use crate::filter::quick::{self, DvpRanks, QuickFilterSet};
use crate::filter::range::{self, RangeFilterSet};
use crate::filter::window::GameWindow;

/// The full set of user-selected filters. Every field defaults to the
/// no-op state, so `FilterSpec::default()` passes any game log through
/// unchanged.
#[derive(Clone, Debug, Default)]
pub struct FilterSpec {
    pub quick: QuickFilterSet,
    pub ranges: RangeFilterSet,
    pub injuries: Vec<InjuryFilter>,
    pub play_types: Vec<MatchupFilter>,
    pub shot_zones: Vec<MatchupFilter>,
    pub window: GameWindow,
}

/// The side-loaded lookups the predicate stages evaluate against.
#[derive(Clone, Debug, Default)]
pub struct PlayerContext {
    pub current_opponent_abbr: String,
    pub dvp_ranks: DvpRanks,
    pub play_type_ranks: RankTable,
    pub shot_zone_ranks: RankTable,
    pub teammates_out: TeammatesOut,
}

impl From<&PlayerSheet> for PlayerContext {
    fn from(sheet: &PlayerSheet) -> Self {
        Self {
            current_opponent_abbr: sheet.current_opponent_abbr.clone(),
            dvp_ranks: sheet.dvp_ranks.clone(),
            play_type_ranks: sheet.play_type_ranks.clone(),
            shot_zone_ranks: sheet.shot_zone_ranks.clone(),
            teammates_out: sheet.teammates_out.clone(),
        }
    }
}

impl FilterSpec {
    /// Runs the stages in the order quick → range → injury → play-type →
    /// shot-zone → window. The window cap applies to the already-filtered
    /// set: `Last(5)` with a `win` tag means "the last 5 wins", not "the
    /// wins among the last 5 games".
    pub fn apply(&self, records: &[GameRecord], ctx: &PlayerContext) -> Vec<GameRecord> {
        let survivors = quick::apply(records, &self.quick, &ctx.dvp_ranks);
        let survivors = range::apply(&survivors, &self.ranges);
        let survivors = injury::apply(&survivors, &self.injuries, &ctx.teammates_out);
        let survivors = matchup::apply(&survivors, &self.play_types, &ctx.play_type_ranks);
        let survivors = matchup::apply(&survivors, &self.shot_zones, &ctx.shot_zone_ranks);
        self.window.apply(&survivors, &ctx.current_opponent_abbr)
    }

    /// The baseline set: the window applied to the raw records with every
    /// predicate stage skipped.
    pub fn baseline(&self, records: &[GameRecord], ctx: &PlayerContext) -> Vec<GameRecord> {
        self.window.apply(records, &ctx.current_opponent_abbr)
    }
}

#[cfg(test)]
mod tests;
