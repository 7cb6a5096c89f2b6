use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};

/// Player position, derived from the FPL element type (1-4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Position {
    pub fn from_element_type(element_type: i32) -> Option<Self> {
        match element_type {
            1 => Some(Position::Goalkeeper),
            2 => Some(Position::Defender),
            3 => Some(Position::Midfielder),
            4 => Some(Position::Forward),
            _ => None,
        }
    }

    pub fn short_label(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "GKP",
            Position::Defender => "DEF",
            Position::Midfielder => "MID",
            Position::Forward => "FWD",
        }
    }
}

/// Player data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub team_id: u32,
    pub position: Position,
    /// Current price in millions
    pub price: f64,
    /// Ownership as a percentage of all entries
    pub ownership: f64,
    pub total_points: i32,
    pub form: f64,
    pub points_per_game: f64,
    /// Price movement in millions during the current change window
    pub price_change: f64,
}

/// Team data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    pub short_name: String,
    pub strength: i32,
}

/// A scheduled match between two teams
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fixture {
    pub id: u32,
    pub gameweek: u32,
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub kickoff_time: Option<DateTime<Utc>>,
    pub home_difficulty: Option<u8>,
    pub away_difficulty: Option<u8>,
    pub finished: bool,
}

/// One round of the competition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gameweek {
    pub id: u32,
    pub name: String,
    pub average_entry_score: i32,
    pub highest_score: Option<i32>,
    pub is_current: bool,
    pub is_next: bool,
    pub finished: bool,
    pub deadline_time: Option<DateTime<Utc>>,
    pub chip_plays: Vec<ChipPlay>,
}

/// How often a chip was played in a gameweek
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChipPlay {
    pub chip_name: String,
    pub num_played: u32,
}

/// Immutable point-in-time copy of the upstream reference data.
///
/// Built once per refresh; cross-references are validated during assembly so
/// downstream derivations can resolve team ids without failure paths.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub gameweeks: Vec<Gameweek>,
    pub teams: Vec<Team>,
    pub players: Vec<Player>,
    pub fixtures: Vec<Fixture>,
}

impl Snapshot {
    /// Assemble a snapshot from converted upstream records.
    ///
    /// Players and fixtures referencing unknown teams are dropped with a
    /// warning. If more than one gameweek claims the current flag, only the
    /// first keeps it.
    pub fn assemble(
        mut gameweeks: Vec<Gameweek>,
        teams: Vec<Team>,
        players: Vec<Player>,
        fixtures: Vec<Fixture>,
    ) -> Self {
        gameweeks.sort_by_key(|gw| gw.id);

        let mut seen_current = false;
        for gw in &mut gameweeks {
            if gw.is_current {
                if seen_current {
                    warn!("Multiple gameweeks flagged current, clearing flag on {}", gw.id);
                    gw.is_current = false;
                }
                seen_current = true;
            }
        }

        let known_team = |id: u32| teams.iter().any(|t| t.id == id);

        let players: Vec<Player> = players
            .into_iter()
            .filter(|p| {
                let ok = known_team(p.team_id);
                if !ok {
                    warn!("Dropping player {} with unknown team {}", p.id, p.team_id);
                }
                ok
            })
            .collect();

        let fixtures: Vec<Fixture> = fixtures
            .into_iter()
            .filter(|f| {
                let ok = known_team(f.home_team_id) && known_team(f.away_team_id);
                if !ok {
                    warn!("Dropping fixture {} with unknown team reference", f.id);
                }
                ok
            })
            .collect();

        Self {
            gameweeks,
            teams,
            players,
            fixtures,
        }
    }

    pub fn team(&self, id: u32) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn team_name(&self, id: u32) -> &str {
        self.team(id).map(|t| t.name.as_str()).unwrap_or("")
    }

    pub fn player(&self, id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }
}

// --- API Response Structures ---

/// Raw bootstrap-static response from the FPL API
#[derive(Debug, Deserialize)]
pub struct BootstrapResponse {
    pub events: Vec<EventResponse>,
    pub teams: Vec<TeamResponse>,
    pub elements: Vec<ElementResponse>,
}

#[derive(Debug, Deserialize)]
pub struct EventResponse {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub deadline_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub average_entry_score: i32,
    #[serde(default)]
    pub highest_score: Option<i32>,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub is_next: bool,
    #[serde(default)]
    pub finished: bool,
    #[serde(default)]
    pub chip_plays: Vec<ChipPlayResponse>,
}

#[derive(Debug, Deserialize)]
pub struct ChipPlayResponse {
    pub chip_name: String,
    pub num_played: u32,
}

impl EventResponse {
    pub fn into_gameweek(self) -> Gameweek {
        Gameweek {
            id: self.id,
            name: self.name,
            average_entry_score: self.average_entry_score,
            highest_score: self.highest_score,
            is_current: self.is_current,
            is_next: self.is_next,
            finished: self.finished,
            deadline_time: self.deadline_time,
            chip_plays: self
                .chip_plays
                .into_iter()
                .map(|c| ChipPlay {
                    chip_name: c.chip_name,
                    num_played: c.num_played,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TeamResponse {
    pub id: u32,
    pub name: String,
    pub short_name: String,
    #[serde(default)]
    pub strength: i32,
}

impl TeamResponse {
    pub fn into_team(self) -> Team {
        Team {
            id: self.id,
            name: self.name,
            short_name: self.short_name,
            strength: self.strength,
        }
    }
}

/// Raw player record from the FPL API.
///
/// Costs arrive in tenths of a million; several numeric stats arrive as
/// strings and unparseable values fall back to zero.
#[derive(Debug, Deserialize)]
pub struct ElementResponse {
    pub id: u32,
    pub first_name: String,
    pub second_name: String,
    pub team: u32,
    pub element_type: i32,
    pub now_cost: i32,
    #[serde(default)]
    pub cost_change_event: i32,
    #[serde(default)]
    pub selected_by_percent: String,
    #[serde(default)]
    pub form: String,
    #[serde(default)]
    pub points_per_game: String,
    #[serde(default)]
    pub total_points: i32,
}

impl ElementResponse {
    /// Convert to a domain player, or None for an unmapped element type.
    pub fn into_player(self) -> Option<Player> {
        let position = Position::from_element_type(self.element_type)?;
        Some(Player {
            id: self.id,
            name: format!("{} {}", self.first_name, self.second_name),
            team_id: self.team,
            position,
            price: self.now_cost as f64 / 10.0,
            ownership: parse_stat(&self.selected_by_percent),
            total_points: self.total_points,
            form: parse_stat(&self.form),
            points_per_game: parse_stat(&self.points_per_game),
            price_change: self.cost_change_event as f64 / 10.0,
        })
    }
}

/// Raw fixture record from the FPL API
#[derive(Debug, Deserialize)]
pub struct FixtureResponse {
    pub id: u32,
    /// Gameweek number; unscheduled fixtures have none
    pub event: Option<u32>,
    pub team_h: u32,
    pub team_a: u32,
    #[serde(default)]
    pub team_h_difficulty: Option<u8>,
    #[serde(default)]
    pub team_a_difficulty: Option<u8>,
    #[serde(default)]
    pub kickoff_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub finished: bool,
}

impl FixtureResponse {
    /// Convert to a domain fixture; unscheduled fixtures map to None.
    pub fn into_fixture(self) -> Option<Fixture> {
        let gameweek = self.event?;
        Some(Fixture {
            id: self.id,
            gameweek,
            home_team_id: self.team_h,
            away_team_id: self.team_a,
            kickoff_time: self.kickoff_time,
            home_difficulty: self.team_h_difficulty,
            away_difficulty: self.team_a_difficulty,
            finished: self.finished,
        })
    }
}

fn parse_stat(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}
