use crate::domain::models::{ChipPlay, Position};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary of the active gameweek
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameweekOverview {
    pub id: u32,
    pub name: String,
    pub average_entry_score: i32,
    pub highest_score: Option<i32>,
    pub chip_plays: Vec<ChipPlay>,
}

/// Player whose price moved during the current change window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceChangeItem {
    pub id: u32,
    pub name: String,
    pub team: String,
    pub position: Position,
    pub price: f64,
    pub price_change: f64,
    pub ownership: f64,
}

/// Low-owned player with strong recent form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DifferentialItem {
    pub id: u32,
    pub name: String,
    pub team: String,
    pub position: Position,
    pub price: f64,
    pub ownership: f64,
    pub form: f64,
    pub points_per_game: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopPlayerItem {
    pub id: u32,
    pub name: String,
    pub team: String,
    pub position: Position,
    pub price: f64,
    pub total_points: i32,
    pub ownership: f64,
}

/// One cell of the fixture ticker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickerSlot {
    pub opponent: String,
    pub home: bool,
    pub difficulty: Option<u8>,
}

/// One ticker row; a None slot is a bye week
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamTickerRow {
    pub team_name: String,
    pub fixtures: Vec<Option<TickerSlot>>,
}

/// Rectangular team x gameweek fixture ticker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickerResponse {
    pub gameweek_numbers: Vec<u64>,
    pub teams: Vec<TeamTickerRow>,
}

/// Fixture enriched with resolved team names and difficulties
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextFixtureItem {
    pub home_team: String,
    pub away_team: String,
    pub kickoff_time: Option<DateTime<Utc>>,
    pub home_difficulty: Option<u8>,
    pub away_difficulty: Option<u8>,
}
