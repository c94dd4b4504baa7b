//! The statistics aggregator: hit counts, hit rate and per-stat averages
//! over any (already filtered) record sample.

use crate::data::GameRecord;
use crate::market::Market;
use crate::stat::Stat;

/// Context averages always shown alongside a sample, line or no line. Each
/// is the mean of the values present in the sample, rounded to one decimal,
/// or `None` when no record carries the stat.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SampleAverages {
    pub minutes: Option<f64>,
    pub usage_pct: Option<f64>,
    pub points: Option<f64>,
    pub rebounds: Option<f64>,
    pub assists: Option<f64>,
    pub fg_attempted: Option<f64>,
    pub three_attempted: Option<f64>,
    pub three_made: Option<f64>,
    pub ft_attempted: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DerivedStats {
    /// Rounded percentage of games whose market value met or exceeded the
    /// line; `None` when there is no line or no games.
    pub hit_rate: Option<u32>,
    pub hits: usize,
    pub total: usize,
    /// Mean market value over the sample, rounded to one decimal.
    pub avg: Option<f64>,
    pub averages: SampleAverages,
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Mean of the present values for `stat`, rounded to one decimal. Records
/// missing the stat are skipped from both numerator and denominator.
pub fn mean(records: &[GameRecord], stat: Stat) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for record in records {
        if let Some(value) = stat.value(record) {
            sum += value;
            count += 1;
        }
    }
    if count == 0 {
        None
    } else {
        Some(round1(sum / count as f64))
    }
}

fn sample_averages(records: &[GameRecord]) -> SampleAverages {
    SampleAverages {
        minutes: mean(records, Stat::Minutes),
        usage_pct: mean(records, Stat::UsagePct),
        points: mean(records, Stat::Points),
        rebounds: mean(records, Stat::Rebounds),
        assists: mean(records, Stat::Assists),
        fg_attempted: mean(records, Stat::FgAttempted),
        three_attempted: mean(records, Stat::ThreeAttempted),
        three_made: mean(records, Stat::ThreeMade),
        ft_attempted: mean(records, Stat::FtAttempted),
    }
}

/// Derives the sample statistics for one market. The hit comparison is
/// inclusive: a value exactly on the line counts as a hit. With no line,
/// the averages are still computed so callers can show average-only context
/// before a line is set. A record missing the market's stat stays in
/// `total` but can never hit.
pub fn compute_stats(records: &[GameRecord], market: Market, line: Option<f64>) -> DerivedStats {
    let total = records.len();
    let stat = market.stat();
    let avg = mean(records, stat);
    let averages = sample_averages(records);

    let (hits, hit_rate) = match line {
        Some(line) if total > 0 => {
            let hits = records
                .iter()
                .filter(|record| stat.value(record).map_or(false, |value| value >= line))
                .count();
            let hit_rate = (hits as f64 / total as f64 * 100.0).round() as u32;
            (hits, Some(hit_rate))
        }
        _ => (0, None),
    };

    DerivedStats {
        hit_rate,
        hits,
        total,
        avg,
        averages,
    }
}
