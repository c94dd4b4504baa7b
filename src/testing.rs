//! Game-record fixtures shared across test modules.

use chrono::{Days, NaiveDate};

use crate::data::{GameRecord, GameResult, Venue};

/// A bare record with no box-score data. Higher `id` means a later date, so
/// fixture lists built in ascending `id` order are oldest-first.
pub(crate) fn blank(id: u32) -> GameRecord {
    GameRecord {
        game_id: id.to_string(),
        date: NaiveDate::from_ymd_opt(2023, 10, 24).unwrap() + Days::new(id as u64),
        opponent_abbr: "BOS".into(),
        opponent_team_id: 2,
        venue: Venue::Home,
        result: GameResult::Win,
        margin: Some(5),
        primetime: false,
        minutes: None,
        usage_pct: None,
        points: None,
        rebounds: None,
        assists: None,
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
        pra: None,
        pr: None,
        pa: None,
        ra: None,
        stocks: None,
    }
}

pub(crate) fn home_win(id: u32) -> GameRecord {
    blank(id)
}

pub(crate) fn away_loss(id: u32) -> GameRecord {
    let mut record = blank(id);
    record.venue = Venue::Away;
    record.result = GameResult::Loss;
    record.margin = Some(-6);
    record
}

pub(crate) fn scoring(id: u32, points: f64) -> GameRecord {
    let mut record = blank(id);
    record.points = Some(points);
    record
}
