use std::env;
use std::error::Error;
use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use propform::data::{read_sheet_from_file, PlayerSheet};
use propform::filter::injury::InjuryFilter;
use propform::filter::matchup::MatchupFilter;
use propform::filter::quick::QuickFilter;
use propform::filter::range::StatRange;
use propform::filter::window::GameWindow;
use propform::market::Market;
use propform::matrix::compute_market_hit_rates;
use propform::pipeline::{FilterSpec, PlayerContext};
use propform::print::{tabulate_comparison, tabulate_game_log, tabulate_market_rates};
use propform::stat::Stat;
use propform::summary::compute_stats;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// file to source the player sheet from
    #[clap(short = 'f', long)]
    file: PathBuf,

    /// market to drill into
    #[clap(short = 'm', long, default_value = "pts")]
    market: Market,

    /// override the stored line for the selected market
    #[clap(short = 'l', long)]
    line: Option<f64>,

    /// game window: l5, l10, l20, szn or h2h
    #[clap(short = 'w', long, default_value = "szn")]
    window: GameWindow,

    /// quick filter tags, e.g. home,win,dvpWeak
    #[clap(short = 'q', long, value_delimiter = ',')]
    quick: Vec<QuickFilter>,

    /// stat range constraints of the form <stat>:<min>..<max>
    #[clap(short = 'r', long, value_parser = parse_range)]
    range: Vec<(Stat, StatRange)>,

    /// injury context of the form with:<id>:<name> or without:<id>:<name>
    #[clap(short = 'i', long)]
    injury: Vec<InjuryFilter>,

    /// play-type matchup of the form <key>:<tier>
    #[clap(short = 'p', long)]
    play_type: Vec<MatchupFilter>,

    /// shot-zone matchup of the form <key>:<tier>
    #[clap(short = 'z', long)]
    shot_zone: Vec<MatchupFilter>,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if let Some(line) = self.line {
            if line < 0.0 {
                bail!("line cannot be negative");
            }
        }
        Ok(())
    }
}

fn parse_range(s: &str) -> anyhow::Result<(Stat, StatRange)> {
    let Some((stat, bounds)) = s.split_once(':') else {
        bail!("expected <stat>:<min>..<max>, got {s}");
    };
    let stat: Stat = stat.parse()?;
    let Some((min, max)) = bounds.split_once("..") else {
        bail!("expected <min>..<max> bounds in {s}");
    };
    let min = if min.is_empty() { None } else { Some(min.parse()?) };
    let max = if max.is_empty() { None } else { Some(max.parse()?) };
    let range = StatRange { min, max };
    if range.is_unbounded() {
        bail!("at least one bound must be given in {s}");
    }
    Ok((stat, range))
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let sheet = read_sheet_from_file(&args.file)?;
    info!(
        "{}: {} games logged, upcoming opponent {}",
        sheet.player_name,
        sheet.records.len(),
        sheet.current_opponent_abbr
    );

    let ctx = PlayerContext::from(&sheet);
    let spec = build_spec(&args);
    let filtered = spec.apply(&sheet.records, &ctx);
    let baseline = spec.baseline(&sheet.records, &ctx);

    let active_line = args.line.or_else(|| stored_line(&sheet, args.market));
    let filtered_stats = compute_stats(&filtered, args.market, active_line);
    let baseline_stats = compute_stats(&baseline, args.market, active_line);

    let log_table = tabulate_game_log(&filtered);
    info!("\n{}", Console::default().render(&log_table));

    let comparison = tabulate_comparison(args.market, active_line, &baseline_stats, &filtered_stats);
    info!("\n{}", Console::default().render(&comparison));

    if !sheet.profiles.is_empty() {
        let rates = compute_market_hit_rates(
            &filtered,
            &sheet.records,
            &sheet.profiles,
            args.market,
            active_line,
            &spec.window,
            &ctx.current_opponent_abbr,
        );
        let strip = tabulate_market_rates(&sheet.profiles, &rates);
        info!("\n{}", Console::default().render(&strip));
    }

    Ok(())
}

fn build_spec(args: &Args) -> FilterSpec {
    let mut spec = FilterSpec {
        injuries: args.injury.clone(),
        play_types: args.play_type.clone(),
        shot_zones: args.shot_zone.clone(),
        window: args.window,
        ..FilterSpec::default()
    };
    for &tag in &args.quick {
        spec.quick.insert(tag);
    }
    for &(stat, range) in &args.range {
        spec.ranges.set(stat, range);
    }
    spec
}

fn stored_line(sheet: &PlayerSheet, market: Market) -> Option<f64> {
    sheet
        .profiles
        .iter()
        .find(|profile| profile.market == market)
        .and_then(|profile| profile.line)
}
