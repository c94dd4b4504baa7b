//! The cross-market hit-rate matrix: the aggregator rerun once per market
//! profile to populate the market-selector strip.

use rustc_hash::FxHashMap;

use crate::data::GameRecord;
use crate::filter::window::GameWindow;
use crate::market::{Market, MarketProfile};
use crate::summary::compute_stats;

#[derive(Clone, Debug, PartialEq)]
pub struct MarketRate {
    pub hit_rate: Option<u32>,
    pub hits: usize,
    pub total: usize,
    /// The theoretical game count the window implies against the raw record
    /// list, before any other filter. A `total` smaller than this signals a
    /// reduced sample to the caller.
    pub expected_total: usize,
}

/// Reruns the aggregator for every profile. The selected market uses the
/// (possibly user-edited) active line; every other market uses its
/// profile's stored line. A profile with no line, or an empty sample,
/// yields `hit_rate: None`.
pub fn compute_market_hit_rates(
    filtered: &[GameRecord],
    raw: &[GameRecord],
    profiles: &[MarketProfile],
    selected: Market,
    active_line: Option<f64>,
    window: &GameWindow,
    current_opponent: &str,
) -> FxHashMap<Market, MarketRate> {
    let expected_total = window.expected_total(raw, current_opponent);
    profiles
        .iter()
        .map(|profile| {
            let line = if profile.market == selected {
                active_line
            } else {
                profile.line
            };
            let stats = compute_stats(filtered, profile.market, line);
            (
                profile.market,
                MarketRate {
                    hit_rate: stats.hit_rate,
                    hits: stats.hits,
                    total: stats.total,
                    expected_total,
                },
            )
        })
        .collect()
}
