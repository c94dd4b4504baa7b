//! A pure filter and hit-rate aggregation engine for player prop-bet
//! analytics. Takes a player's historical game log and a composable set of
//! filter predicates, and derives filtered samples, hit rates against a
//! line, and per-stat averages — the numbers behind a hit-rate drilldown.

pub mod data;
pub mod filter;
pub mod market;
pub mod matrix;
pub mod pipeline;
pub mod print;
pub mod stat;
pub mod summary;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
