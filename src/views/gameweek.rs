use crate::api::models::GameweekOverview;
use crate::domain::models::Gameweek;
use chrono::{DateTime, Utc};

/// Pick the gameweek the dashboard should summarize.
///
/// Preference order: the current gameweek, then the next one, then the first
/// with a future deadline, then the first gameweek of the season (off-season
/// fallback). None only for an empty list.
pub fn select_active(gameweeks: &[Gameweek], now: DateTime<Utc>) -> Option<&Gameweek> {
    if let Some(gw) = gameweeks.iter().find(|gw| gw.is_current) {
        return Some(gw);
    }
    if let Some(gw) = gameweeks.iter().find(|gw| gw.is_next) {
        return Some(gw);
    }
    if let Some(gw) = gameweeks
        .iter()
        .find(|gw| gw.deadline_time.is_some_and(|deadline| deadline > now))
    {
        return Some(gw);
    }
    gameweeks.first()
}

pub fn overview(gameweeks: &[Gameweek], now: DateTime<Utc>) -> Option<GameweekOverview> {
    select_active(gameweeks, now).map(|gw| GameweekOverview {
        id: gw.id,
        name: gw.name.clone(),
        average_entry_score: gw.average_entry_score,
        highest_score: gw.highest_score,
        chip_plays: gw.chip_plays.clone(),
    })
}
