use crate::api::models::{DifferentialItem, PriceChangeItem, TopPlayerItem};
use crate::domain::models::{Player, Snapshot};

fn team_label(snapshot: &Snapshot, player: &Player) -> String {
    snapshot
        .team(player.team_id)
        .map(|t| t.short_name.clone())
        .unwrap_or_default()
}

/// Players whose price moved this window, biggest movers first.
///
/// Order: absolute delta descending, rises before equal falls, then id
/// ascending so the output is stable across refreshes.
pub fn price_changes(snapshot: &Snapshot, limit: usize) -> Vec<PriceChangeItem> {
    let mut movers: Vec<&Player> = snapshot
        .players
        .iter()
        .filter(|p| p.price_change != 0.0)
        .collect();

    movers.sort_by(|a, b| {
        b.price_change
            .abs()
            .total_cmp(&a.price_change.abs())
            .then(b.price_change.total_cmp(&a.price_change))
            .then(a.id.cmp(&b.id))
    });

    movers
        .into_iter()
        .take(limit)
        .map(|p| PriceChangeItem {
            id: p.id,
            name: p.name.clone(),
            team: team_label(snapshot, p),
            position: p.position,
            price: p.price,
            price_change: p.price_change,
            ownership: p.ownership,
        })
        .collect()
}

/// Low-owned players in form: ownership strictly below the ceiling, form at
/// or above the floor. An empty result is a valid answer.
pub fn differentials(
    snapshot: &Snapshot,
    max_ownership: f64,
    min_form: f64,
    limit: usize,
) -> Vec<DifferentialItem> {
    let mut picks: Vec<&Player> = snapshot
        .players
        .iter()
        .filter(|p| p.ownership < max_ownership && p.form >= min_form)
        .collect();

    picks.sort_by(|a, b| {
        b.form
            .total_cmp(&a.form)
            .then(b.points_per_game.total_cmp(&a.points_per_game))
            .then(a.id.cmp(&b.id))
    });

    picks
        .into_iter()
        .take(limit)
        .map(|p| DifferentialItem {
            id: p.id,
            name: p.name.clone(),
            team: team_label(snapshot, p),
            position: p.position,
            price: p.price,
            ownership: p.ownership,
            form: p.form,
            points_per_game: p.points_per_game,
        })
        .collect()
}

/// Season top scorers; ties resolved by ownership descending then id.
pub fn top_players(snapshot: &Snapshot, limit: usize) -> Vec<TopPlayerItem> {
    let mut ranked: Vec<&Player> = snapshot.players.iter().collect();

    ranked.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then(b.ownership.total_cmp(&a.ownership))
            .then(a.id.cmp(&b.id))
    });

    ranked
        .into_iter()
        .take(limit)
        .map(|p| TopPlayerItem {
            id: p.id,
            name: p.name.clone(),
            team: team_label(snapshot, p),
            position: p.position,
            price: p.price,
            total_points: p.total_points,
            ownership: p.ownership,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Position, Team};

    fn team(id: u32) -> Team {
        Team {
            id,
            name: format!("Team {}", id),
            short_name: format!("T{}", id),
            strength: 3,
        }
    }

    struct PlayerSpec {
        id: u32,
        price_change: f64,
        ownership: f64,
        form: f64,
        points_per_game: f64,
        total_points: i32,
    }

    impl Default for PlayerSpec {
        fn default() -> Self {
            Self {
                id: 1,
                price_change: 0.0,
                ownership: 10.0,
                form: 0.0,
                points_per_game: 0.0,
                total_points: 0,
            }
        }
    }

    fn player(spec: PlayerSpec) -> Player {
        Player {
            id: spec.id,
            name: format!("Player {}", spec.id),
            team_id: 1,
            position: Position::Midfielder,
            price: 5.0,
            ownership: spec.ownership,
            total_points: spec.total_points,
            form: spec.form,
            points_per_game: spec.points_per_game,
            price_change: spec.price_change,
        }
    }

    fn snapshot(players: Vec<Player>) -> Snapshot {
        Snapshot::assemble(vec![], vec![team(1)], players, vec![])
    }

    #[test]
    fn test_price_changes_excludes_unmoved_players() {
        let snap = snapshot(vec![
            player(PlayerSpec { id: 1, price_change: 0.1, ..Default::default() }),
            player(PlayerSpec { id: 2, price_change: 0.0, ..Default::default() }),
        ]);

        let movers = price_changes(&snap, 10);
        assert_eq!(movers.len(), 1);
        assert_eq!(movers[0].id, 1);
    }

    #[test]
    fn test_price_changes_orders_by_magnitude_with_tiebreaks() {
        let snap = snapshot(vec![
            player(PlayerSpec { id: 3, price_change: -0.1, ..Default::default() }),
            player(PlayerSpec { id: 1, price_change: 0.1, ..Default::default() }),
            player(PlayerSpec { id: 2, price_change: -0.3, ..Default::default() }),
            player(PlayerSpec { id: 4, price_change: 0.1, ..Default::default() }),
        ]);

        let ids: Vec<u32> = price_changes(&snap, 10).iter().map(|p| p.id).collect();
        // 0.3 fall first, then the two 0.1 rises by id, then the 0.1 fall
        assert_eq!(ids, vec![2, 1, 4, 3]);
    }

    #[test]
    fn test_price_changes_respects_limit() {
        let snap = snapshot(
            (1..=5)
                .map(|id| {
                    player(PlayerSpec {
                        id,
                        price_change: 0.1 * id as f64,
                        ..Default::default()
                    })
                })
                .collect(),
        );
        assert_eq!(price_changes(&snap, 2).len(), 2);
    }

    #[test]
    fn test_differentials_boundary_conditions() {
        let snap = snapshot(vec![
            player(PlayerSpec { id: 1, ownership: 9.9, form: 5.0, ..Default::default() }),
            player(PlayerSpec { id: 2, ownership: 10.0, form: 9.0, ..Default::default() }),
            player(PlayerSpec { id: 3, ownership: 1.0, form: 4.9, ..Default::default() }),
        ]);

        let picks = differentials(&snap, 10.0, 5.0, 10);
        let ids: Vec<u32> = picks.iter().map(|p| p.id).collect();

        // ownership 9.9 / form 5.0 qualifies; ownership at the ceiling and
        // form below the floor do not
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_differentials_order_by_form_then_ppg() {
        let snap = snapshot(vec![
            player(PlayerSpec { id: 1, ownership: 2.0, form: 5.0, points_per_game: 3.0, ..Default::default() }),
            player(PlayerSpec { id: 2, ownership: 2.0, form: 6.0, points_per_game: 1.0, ..Default::default() }),
            player(PlayerSpec { id: 3, ownership: 2.0, form: 5.0, points_per_game: 4.0, ..Default::default() }),
        ]);

        let ids: Vec<u32> = differentials(&snap, 5.0, 0.0, 10).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_differentials_empty_is_valid() {
        let snap = snapshot(vec![player(PlayerSpec { id: 1, ownership: 50.0, ..Default::default() })]);
        assert!(differentials(&snap, 5.0, 0.0, 10).is_empty());
    }

    #[test]
    fn test_top_players_ordering_and_truncation() {
        let snap = snapshot(vec![
            player(PlayerSpec { id: 1, total_points: 100, ownership: 20.0, ..Default::default() }),
            player(PlayerSpec { id: 2, total_points: 120, ownership: 5.0, ..Default::default() }),
            player(PlayerSpec { id: 3, total_points: 100, ownership: 30.0, ..Default::default() }),
            player(PlayerSpec { id: 4, total_points: 90, ownership: 1.0, ..Default::default() }),
        ]);

        let top = top_players(&snap, 3);
        let ids: Vec<u32> = top.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);

        // non-increasing points, ownership breaks the tie
        assert!(top.windows(2).all(|w| w[0].total_points >= w[1].total_points));
    }

    #[test]
    fn test_top_players_length_bounded_by_limit() {
        let snap = snapshot(vec![player(PlayerSpec::default())]);
        assert_eq!(top_players(&snap, 10).len(), 1);
        assert_eq!(top_players(&snap, 0).len(), 0);
    }
}
