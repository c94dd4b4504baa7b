//! Console table rendering of samples, summaries and the market strip.

use rustc_hash::FxHashMap;
use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Cell, Col, Row, Table};

use crate::data::{GameRecord, GameResult, Venue};
use crate::market::{Market, MarketProfile};
use crate::matrix::MarketRate;
use crate::stat::Stat;
use crate::summary::DerivedStats;

fn opt(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{value:.1}"),
        None => "-".into(),
    }
}

fn opt_pct(value: Option<u32>) -> String {
    match value {
        Some(value) => format!("{value}%"),
        None => "-".into(),
    }
}

const LOG_COLUMNS: &[Stat] = &[
    Stat::Minutes,
    Stat::Points,
    Stat::Rebounds,
    Stat::Assists,
    Stat::ThreeMade,
    Stat::PointsReboundsAssists,
];

pub fn tabulate_game_log(records: &[GameRecord]) -> Table {
    let mut table = Table::default().with_cols({
        let mut cols = vec![
            Col::new(Styles::default().with(MinWidth(10))),
            Col::new(Styles::default().with(MinWidth(5)).with(HAlign::Centred)),
            Col::new(Styles::default().with(MinWidth(3)).with(HAlign::Centred)),
            Col::new(Styles::default().with(MinWidth(4)).with(HAlign::Centred)),
            Col::new(Styles::default().with(MinWidth(6)).with(HAlign::Right)),
        ];
        for _ in LOG_COLUMNS {
            cols.push(Col::new(
                Styles::default().with(MinWidth(6)).with(HAlign::Right),
            ));
        }
        cols
    });

    table.push_row({
        let mut header_cells: Vec<Cell> = vec![
            "Date".into(),
            "Opp".into(),
            "H/A".into(),
            "Res".into(),
            "Margin".into(),
        ];
        for stat in LOG_COLUMNS {
            header_cells.push(stat.to_string().into());
        }
        Row::new(
            Styles::default().with(Header(true)).with(Separator(true)),
            header_cells,
        )
    });

    for record in records {
        let mut cells: Vec<Cell> = vec![
            record.date.to_string().into(),
            record.opponent_abbr.clone().into(),
            match record.venue {
                Venue::Home => "H".into(),
                Venue::Away => "A".into(),
            },
            match record.result {
                GameResult::Win => "W".into(),
                GameResult::Loss => "L".into(),
            },
            record
                .margin
                .map_or_else(|| "-".to_string(), |margin| format!("{margin:+}"))
                .into(),
        ];
        for stat in LOG_COLUMNS {
            cells.push(opt(stat.value(record)).into());
        }
        table.push_row(Row::new(Styles::default(), cells));
    }
    table
}

/// Baseline vs filtered, side by side, for the selected market.
pub fn tabulate_comparison(
    market: Market,
    line: Option<f64>,
    baseline: &DerivedStats,
    filtered: &DerivedStats,
) -> Table {
    let line_label = match line {
        Some(line) => format!("{market} {line}"),
        None => format!("{market} (no line)"),
    };
    Table::with_styles(Styles::default())
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(12))),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)).with(Separator(true)),
            vec![line_label.into(), "Baseline".into(), "Filtered".into()],
        ))
        .with_row(Row::new(
            Styles::default(),
            vec![
                "Games".into(),
                baseline.total.to_string().into(),
                filtered.total.to_string().into(),
            ],
        ))
        .with_row(Row::new(
            Styles::default(),
            vec![
                "Hits".into(),
                baseline.hits.to_string().into(),
                filtered.hits.to_string().into(),
            ],
        ))
        .with_row(Row::new(
            Styles::default(),
            vec![
                "Hit rate".into(),
                opt_pct(baseline.hit_rate).into(),
                opt_pct(filtered.hit_rate).into(),
            ],
        ))
        .with_row(Row::new(
            Styles::default(),
            vec![
                "Avg".into(),
                opt(baseline.avg).into(),
                opt(filtered.avg).into(),
            ],
        ))
        .with_row(Row::new(
            Styles::default(),
            vec![
                "Minutes".into(),
                opt(baseline.averages.minutes).into(),
                opt(filtered.averages.minutes).into(),
            ],
        ))
        .with_row(Row::new(
            Styles::default(),
            vec![
                "FGA".into(),
                opt(baseline.averages.fg_attempted).into(),
                opt(filtered.averages.fg_attempted).into(),
            ],
        ))
}

/// The market-selector strip: one column per profiled market. An asterisk
/// marks a sample smaller than the window's theoretical count.
pub fn tabulate_market_rates(
    profiles: &[MarketProfile],
    rates: &FxHashMap<Market, MarketRate>,
) -> Table {
    let mut table = Table::default().with_cols({
        let mut cols = vec![Col::new(Styles::default().with(MinWidth(9)))];
        for _ in profiles {
            cols.push(Col::new(
                Styles::default().with(MinWidth(8)).with(HAlign::Right),
            ));
        }
        cols
    });

    table.push_row({
        let mut header_cells: Vec<Cell> = vec!["Market".into()];
        for profile in profiles {
            header_cells.push(profile.market.to_string().into());
        }
        Row::new(
            Styles::default().with(Header(true)).with(Separator(true)),
            header_cells,
        )
    });

    let mut rate_cells: Vec<Cell> = vec!["Hit rate".into()];
    let mut sample_cells: Vec<Cell> = vec!["Sample".into()];
    for profile in profiles {
        match rates.get(&profile.market) {
            None => {
                rate_cells.push("-".into());
                sample_cells.push("-".into());
            }
            Some(rate) => {
                rate_cells.push(opt_pct(rate.hit_rate).into());
                let reduced = if rate.total < rate.expected_total { "*" } else { "" };
                sample_cells.push(format!("{}/{}{}", rate.hits, rate.total, reduced).into());
            }
        }
    }
    table.push_row(Row::new(Styles::default(), rate_cells));
    table.push_row(Row::new(Styles::default(), sample_cells));
    table
}

#[cfg(test)]
mod tests {
    use stanza::renderer::console::Console;
    use stanza::renderer::Renderer;

    use crate::summary::compute_stats;
    use crate::testing::scoring;

    use super::*;

    #[test]
    fn renders_game_log() {
        let records = vec![scoring(1, 25.0), scoring(2, 31.0)];
        let rendered = format!("{}", Console::default().render(&tabulate_game_log(&records)));
        assert!(rendered.contains("BOS"));
        assert!(rendered.contains("25.0"));
        assert!(rendered.contains("31.0"));
    }

    #[test]
    fn renders_comparison() {
        let records = vec![scoring(1, 20.0), scoring(2, 30.0)];
        let stats = compute_stats(&records, Market::Points, Some(25.0));
        let table = tabulate_comparison(Market::Points, Some(25.0), &stats, &stats);
        let rendered = format!("{}", Console::default().render(&table));
        assert!(rendered.contains("pts 25"));
        assert!(rendered.contains("50%"));
    }

    #[test]
    fn marks_reduced_samples() {
        let profiles = vec![MarketProfile::new(Market::Points, Some(25.0))];
        let mut rates = FxHashMap::default();
        rates.insert(
            Market::Points,
            MarketRate {
                hit_rate: Some(50),
                hits: 1,
                total: 2,
                expected_total: 5,
            },
        );
        let rendered = format!(
            "{}",
            Console::default().render(&tabulate_market_rates(&profiles, &rates))
        );
        assert!(rendered.contains("1/2*"));
    }
}
