use crate::api::models::{NextFixtureItem, TeamTickerRow, TickerResponse, TickerSlot};
use crate::domain::models::{Fixture, Snapshot, Team};
use crate::views::gameweek;
use chrono::{DateTime, Utc};

/// Earliest gameweek that still has an unplayed fixture.
///
/// When the snapshot carries no usable fixture information the gameweek
/// selection rule decides the anchor instead. None only when the snapshot
/// has neither fixtures nor gameweeks.
pub fn first_unplayed_gameweek(snapshot: &Snapshot, now: DateTime<Utc>) -> Option<u64> {
    snapshot
        .fixtures
        .iter()
        .filter(|f| !f.finished)
        .map(|f| f.gameweek as u64)
        .min()
        .or_else(|| gameweek::select_active(&snapshot.gameweeks, now).map(|gw| gw.id as u64))
}

/// Rectangular team x gameweek ticker.
///
/// Every team gets exactly `count` slots covering the gameweeks starting at
/// `offset` past the anchor; a slot without a fixture stays None so the
/// layout survives bye weeks and offsets beyond the season horizon.
pub fn fixture_ticker(
    snapshot: &Snapshot,
    count: usize,
    offset: usize,
    now: DateTime<Utc>,
) -> Option<TickerResponse> {
    let start = first_unplayed_gameweek(snapshot, now)? + offset as u64;
    let gameweek_numbers: Vec<u64> = (start..start + count as u64).collect();

    let mut teams: Vec<&Team> = snapshot.teams.iter().collect();
    teams.sort_by(|a, b| a.name.cmp(&b.name));

    let rows = teams
        .into_iter()
        .map(|team| TeamTickerRow {
            team_name: team.name.clone(),
            fixtures: gameweek_numbers
                .iter()
                .map(|&gw| slot_for(snapshot, team, gw))
                .collect(),
        })
        .collect();

    Some(TickerResponse {
        gameweek_numbers,
        teams: rows,
    })
}

fn slot_for(snapshot: &Snapshot, team: &Team, gameweek: u64) -> Option<TickerSlot> {
    let fixture = snapshot.fixtures.iter().find(|f| {
        f.gameweek as u64 == gameweek
            && (f.home_team_id == team.id || f.away_team_id == team.id)
    })?;

    let home = fixture.home_team_id == team.id;
    let (opponent_id, difficulty) = if home {
        (fixture.away_team_id, fixture.home_difficulty)
    } else {
        (fixture.home_team_id, fixture.away_difficulty)
    };

    Some(TickerSlot {
        opponent: snapshot
            .team(opponent_id)
            .map(|t| t.short_name.clone())
            .unwrap_or_default(),
        home,
        difficulty,
    })
}

/// Fixtures of the earliest gameweek with an unplayed match, enriched with
/// team names and difficulties, in kickoff order.
pub fn next_fixtures(snapshot: &Snapshot, now: DateTime<Utc>) -> Option<Vec<NextFixtureItem>> {
    let anchor = first_unplayed_gameweek(snapshot, now)?;

    let mut fixtures: Vec<&Fixture> = snapshot
        .fixtures
        .iter()
        .filter(|f| f.gameweek as u64 == anchor)
        .collect();
    fixtures.sort_by_key(|f| (f.kickoff_time, f.id));

    Some(
        fixtures
            .into_iter()
            .map(|f| NextFixtureItem {
                home_team: snapshot.team_name(f.home_team_id).to_string(),
                away_team: snapshot.team_name(f.away_team_id).to_string(),
                kickoff_time: f.kickoff_time,
                home_difficulty: f.home_difficulty,
                away_difficulty: f.away_difficulty,
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn team(id: u32, name: &str, short: &str) -> Team {
        Team {
            id,
            name: name.to_string(),
            short_name: short.to_string(),
            strength: 3,
        }
    }

    fn fixture(id: u32, gw: u32, home: u32, away: u32, finished: bool) -> Fixture {
        Fixture {
            id,
            gameweek: gw,
            home_team_id: home,
            away_team_id: away,
            kickoff_time: None,
            home_difficulty: Some(2),
            away_difficulty: Some(4),
            finished,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 1, 12, 0, 0).unwrap()
    }

    fn three_team_snapshot() -> Snapshot {
        Snapshot::assemble(
            vec![],
            vec![
                team(1, "Arsenal", "ARS"),
                team(2, "Chelsea", "CHE"),
                team(3, "Liverpool", "LIV"),
            ],
            vec![],
            vec![
                fixture(100, 4, 1, 2, true),
                fixture(101, 5, 1, 2, false),
                fixture(102, 6, 3, 1, false),
            ],
        )
    }

    #[test]
    fn test_anchor_is_earliest_unplayed_gameweek() {
        let snap = three_team_snapshot();
        assert_eq!(first_unplayed_gameweek(&snap, now()), Some(5));
    }

    #[test]
    fn test_ticker_is_rectangular_with_placeholders() {
        let snap = three_team_snapshot();
        let ticker = fixture_ticker(&snap, 3, 0, now()).unwrap();

        assert_eq!(ticker.gameweek_numbers, vec![5, 6, 7]);
        assert_eq!(ticker.teams.len(), 3);
        for row in &ticker.teams {
            assert_eq!(row.fixtures.len(), 3);
        }

        // Liverpool only plays in gameweek 6
        let liv = ticker
            .teams
            .iter()
            .find(|r| r.team_name == "Liverpool")
            .unwrap();
        assert!(liv.fixtures[0].is_none());
        assert!(liv.fixtures[1].is_some());
        assert!(liv.fixtures[2].is_none());
    }

    #[test]
    fn test_ticker_resolves_sides_and_difficulty() {
        let snap = three_team_snapshot();
        let ticker = fixture_ticker(&snap, 2, 0, now()).unwrap();

        let ars = ticker
            .teams
            .iter()
            .find(|r| r.team_name == "Arsenal")
            .unwrap();

        // gameweek 5: Arsenal home to Chelsea, home-side difficulty
        let home_slot = ars.fixtures[0].as_ref().unwrap();
        assert_eq!(home_slot.opponent, "CHE");
        assert!(home_slot.home);
        assert_eq!(home_slot.difficulty, Some(2));

        // gameweek 6: Arsenal away at Liverpool, away-side difficulty
        let away_slot = ars.fixtures[1].as_ref().unwrap();
        assert_eq!(away_slot.opponent, "LIV");
        assert!(!away_slot.home);
        assert_eq!(away_slot.difficulty, Some(4));
    }

    #[test]
    fn test_offset_beyond_horizon_is_all_placeholders() {
        let snap = three_team_snapshot();
        let ticker = fixture_ticker(&snap, 2, 50, now()).unwrap();

        assert_eq!(ticker.gameweek_numbers, vec![55, 56]);
        for row in &ticker.teams {
            assert!(row.fixtures.iter().all(|slot| slot.is_none()));
        }
    }

    #[test]
    fn test_zero_count_gives_empty_rows() {
        let snap = three_team_snapshot();
        let ticker = fixture_ticker(&snap, 0, 0, now()).unwrap();

        assert!(ticker.gameweek_numbers.is_empty());
        assert_eq!(ticker.teams.len(), 3);
        assert!(ticker.teams.iter().all(|row| row.fixtures.is_empty()));
    }

    #[test]
    fn test_empty_snapshot_has_no_ticker() {
        let snap = Snapshot::assemble(vec![], vec![], vec![], vec![]);
        assert!(fixture_ticker(&snap, 6, 0, now()).is_none());
        assert!(next_fixtures(&snap, now()).is_none());
    }

    #[test]
    fn test_next_fixtures_covers_anchor_gameweek_only() {
        let snap = three_team_snapshot();
        let next = next_fixtures(&snap, now()).unwrap();

        assert_eq!(next.len(), 1);
        assert_eq!(next[0].home_team, "Arsenal");
        assert_eq!(next[0].away_team, "Chelsea");
        assert_eq!(next[0].home_difficulty, Some(2));
        assert_eq!(next[0].away_difficulty, Some(4));
    }

    #[test]
    fn test_next_fixtures_sorted_by_kickoff() {
        let mut early = fixture(200, 5, 1, 2, false);
        early.kickoff_time = Some(Utc.with_ymd_and_hms(2025, 9, 13, 11, 30, 0).unwrap());
        let mut late = fixture(201, 5, 3, 1, false);
        late.kickoff_time = Some(Utc.with_ymd_and_hms(2025, 9, 13, 16, 30, 0).unwrap());

        let snap = Snapshot::assemble(
            vec![],
            vec![
                team(1, "Arsenal", "ARS"),
                team(2, "Chelsea", "CHE"),
                team(3, "Liverpool", "LIV"),
            ],
            vec![],
            vec![late, early],
        );

        let next = next_fixtures(&snap, now()).unwrap();
        assert_eq!(next.len(), 2);
        assert_eq!(next[0].home_team, "Arsenal");
        assert_eq!(next[1].home_team, "Liverpool");
    }
}
