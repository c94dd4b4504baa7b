use crate::filter::matchup::{DefenseTier, MatchupFilter};
use crate::filter::quick::QuickFilter;
use crate::filter::range::StatRange;
use crate::filter::window::GameWindow;
use crate::stat::Stat;
use crate::testing::{away_loss, blank, home_win};

use super::*;

#[test]
fn default_spec_is_noop() {
    let records = vec![home_win(1), away_loss(2), home_win(3)];
    let spec = FilterSpec::default();
    let ctx = PlayerContext::default();
    assert_eq!(records, spec.apply(&records, &ctx));
    assert_eq!(records, spec.baseline(&records, &ctx));
}

#[test]
fn window_caps_the_filtered_set_not_the_raw_set() {
    // 8 wins interleaved with losses; "last 5 wins" must be the 5 newest
    // wins, not the wins among the 5 newest games overall
    let mut records = vec![];
    for id in 1..=8 {
        records.push(home_win(id * 2));
        records.push(away_loss(id * 2 + 1));
    }

    let mut spec = FilterSpec::default();
    spec.quick.insert(QuickFilter::Win);
    spec.window = GameWindow::Last(5);
    let ctx = PlayerContext::default();

    let filtered = spec.apply(&records, &ctx);
    assert_eq!(
        vec![home_win(16), home_win(14), home_win(12), home_win(10), home_win(8)],
        filtered
    );
}

#[test]
fn baseline_skips_predicate_stages() {
    let records = vec![home_win(1), away_loss(2), home_win(3)];
    let mut spec = FilterSpec::default();
    spec.quick.insert(QuickFilter::Win);
    let ctx = PlayerContext::default();

    assert_eq!(2, spec.apply(&records, &ctx).len());
    assert_eq!(3, spec.baseline(&records, &ctx).len());
}

#[test]
fn h2h_baseline_restricts_to_current_opponent() {
    let mut vs_mil = home_win(1);
    vs_mil.opponent_abbr = "MIL".into();
    let records = vec![vs_mil.clone(), home_win(2), away_loss(3)];

    let mut spec = FilterSpec::default();
    spec.window = GameWindow::HeadToHead;
    let ctx = PlayerContext {
        current_opponent_abbr: "MIL".into(),
        ..PlayerContext::default()
    };

    assert_eq!(vec![vs_mil.clone()], spec.apply(&records, &ctx));
    assert_eq!(vec![vs_mil], spec.baseline(&records, &ctx));
}

#[test]
fn stages_compose() {
    // four games: one survives every stage
    let mut survivor = home_win(4);
    survivor.points = Some(30.0);
    survivor.opponent_team_id = 20;

    let mut wrong_venue = away_loss(3);
    wrong_venue.points = Some(35.0);
    wrong_venue.opponent_team_id = 20;

    let mut low_points = home_win(2);
    low_points.points = Some(10.0);
    low_points.opponent_team_id = 20;

    let mut teammate_played = home_win(1);
    teammate_played.points = Some(28.0);
    teammate_played.opponent_team_id = 20;

    let records = vec![
        survivor.clone(),
        wrong_venue,
        low_points,
        teammate_played.clone(),
    ];

    let mut ctx = PlayerContext::default();
    ctx.teammates_out.insert(&survivor.game_id, 101);
    ctx.play_type_ranks.insert(
        "isolation".into(),
        [(20u64, 25u32)].into_iter().collect(),
    );

    let mut spec = FilterSpec::default();
    spec.quick.insert(QuickFilter::Home);
    spec.ranges.set(Stat::Points, StatRange::at_least(20.0));
    spec.injuries
        .push(crate::filter::injury::InjuryFilter::without(101, "R. Lopez"));
    spec.play_types
        .push(MatchupFilter::new("isolation", DefenseTier::Favorable));
    spec.window = GameWindow::Last(5);

    assert_eq!(vec![survivor], spec.apply(&records, &ctx));
}

#[test]
fn empty_input_is_safe() {
    let mut spec = FilterSpec::default();
    spec.quick.insert(QuickFilter::Win);
    spec.window = GameWindow::Last(5);
    let ctx = PlayerContext::default();
    assert!(spec.apply(&[], &ctx).is_empty());
    assert!(spec.baseline(&[], &ctx).is_empty());
}

#[test]
fn context_from_sheet() {
    let json = r#"{
        "playerName": "J. Carter",
        "currentOpponentAbbr": "MIL",
        "currentOpponentTeamId": 15,
        "records": [],
        "dvpRanks": { "15": 8 },
        "teammatesOut": { "005": [101] }
    }"#;
    let sheet: PlayerSheet = serde_json::from_str(json).unwrap();
    let ctx = PlayerContext::from(&sheet);
    assert_eq!("MIL", ctx.current_opponent_abbr);
    assert_eq!(Some(&8), ctx.dvp_ranks.get(&15));
    assert!(ctx.teammates_out.is_out("5", 101));
}

#[test]
fn unused_stage_leaves_blanks_untouched() {
    // records with no box-score data pass every default stage
    let records = vec![blank(1), blank(2)];
    let spec = FilterSpec::default();
    assert_eq!(records, spec.apply(&records, &PlayerContext::default()));
}
