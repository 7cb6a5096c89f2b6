use anyhow::{Context, Result};
use colored::Colorize;
use log::warn;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::api::models::{
    DifferentialItem, GameweekOverview, NextFixtureItem, PriceChangeItem, TickerResponse,
    TopPlayerItem,
};
use crate::client::display::{difficulty_color, kickoff_local};
use crate::client::state::{DashboardState, Section};

/// Consumer of the six dashboard endpoints
pub struct DashboardClient {
    http: Client,
    base_url: String,
}

impl DashboardClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn gameweek_overview(&self) -> Result<GameweekOverview> {
        self.get_json("/gameweek_overview", &[]).await
    }

    pub async fn price_changes(&self) -> Result<Vec<PriceChangeItem>> {
        self.get_json("/price_changes", &[]).await
    }

    pub async fn differentials(&self) -> Result<Vec<DifferentialItem>> {
        self.get_json("/differentials", &[]).await
    }

    pub async fn top_players(&self) -> Result<Vec<TopPlayerItem>> {
        self.get_json("/top_players", &[]).await
    }

    pub async fn fixtures(&self, count: usize, offset: usize) -> Result<TickerResponse> {
        self.get_json(
            "/fixtures",
            &[("count", count.to_string()), ("offset", offset.to_string())],
        )
        .await
    }

    pub async fn next_fixtures(&self) -> Result<Vec<NextFixtureItem>> {
        self.get_json("/next_fixtures", &[]).await
    }

    /// Fetch all six views concurrently.
    ///
    /// Each slot is filled as its own response arrives; a failed endpoint is
    /// logged and leaves its slot untouched so the rest of the dashboard
    /// still renders. The ticker response goes through the state's offset
    /// guard and may be discarded as stale.
    pub async fn refresh(&self, state: &Mutex<DashboardState>, count: usize, offset: usize) {
        tokio::join!(
            async {
                match self.gameweek_overview().await {
                    Ok(overview) => state.lock().await.overview = Some(overview),
                    Err(e) => warn!("gameweek_overview failed: {:#}", e),
                }
            },
            async {
                match self.price_changes().await {
                    Ok(movers) => state.lock().await.price_changes = Some(movers),
                    Err(e) => warn!("price_changes failed: {:#}", e),
                }
            },
            async {
                match self.differentials().await {
                    Ok(picks) => state.lock().await.differentials = Some(picks),
                    Err(e) => warn!("differentials failed: {:#}", e),
                }
            },
            async {
                match self.top_players().await {
                    Ok(ranked) => state.lock().await.top_players = Some(ranked),
                    Err(e) => warn!("top_players failed: {:#}", e),
                }
            },
            async {
                match self.fixtures(count, offset).await {
                    Ok(ticker) => {
                        if !state.lock().await.apply_ticker(offset, ticker) {
                            warn!("Discarded ticker response for superseded offset {}", offset);
                        }
                    }
                    Err(e) => warn!("fixtures failed: {:#}", e),
                }
            },
            async {
                match self.next_fixtures().await {
                    Ok(list) => state.lock().await.next_fixtures = Some(list),
                    Err(e) => warn!("next_fixtures failed: {:#}", e),
                }
            },
        );
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .with_context(|| format!("Failed to request {}", url))?;

        if !response.status().is_success() {
            anyhow::bail!("{} returned status: {}", url, response.status());
        }

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse response from {}", url))
    }
}

/// Print every dashboard section; empty slots render as a placeholder line.
pub fn render(state: &DashboardState, watched: &[u32], tz_offset_mins: i32) {
    render_overview(state.overview.as_ref());
    render_price_changes(state.price_changes.as_deref(), watched);
    render_differentials(state.differentials.as_deref(), watched);
    render_top_players(state.top_players.as_deref(), watched);
    render_ticker(state.ticker.as_ref());
    render_next_fixtures(state.next_fixtures.as_deref(), tz_offset_mins);
}

/// Print only the section the state is switched to.
pub fn render_active(state: &DashboardState, watched: &[u32], tz_offset_mins: i32) {
    match state.section {
        Section::Overview => render_overview(state.overview.as_ref()),
        Section::PriceChanges => render_price_changes(state.price_changes.as_deref(), watched),
        Section::Differentials => render_differentials(state.differentials.as_deref(), watched),
        Section::TopPlayers => render_top_players(state.top_players.as_deref(), watched),
        Section::FixtureTicker => render_ticker(state.ticker.as_ref()),
        Section::NextFixtures => render_next_fixtures(state.next_fixtures.as_deref(), tz_offset_mins),
    }
}

fn section_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

fn no_data() {
    println!("{}", "no data".dimmed());
}

fn watch_marker(watched: &[u32], id: u32) -> &'static str {
    if watched.contains(&id) { "*" } else { " " }
}

fn render_overview(overview: Option<&GameweekOverview>) {
    section_header("Gameweek overview");
    let Some(gw) = overview else {
        return no_data();
    };

    println!("{}", gw.name.bold());
    println!("Average score: {}", gw.average_entry_score);
    if let Some(highest) = gw.highest_score {
        println!("Highest score: {}", highest);
    }
    for chip in &gw.chip_plays {
        println!("{}: {} played", chip.chip_name, chip.num_played);
    }
}

fn render_price_changes(movers: Option<&[PriceChangeItem]>, watched: &[u32]) {
    section_header("Price changes");
    let Some(movers) = movers else {
        return no_data();
    };
    if movers.is_empty() {
        return no_data();
    }

    for p in movers {
        let delta = format!("{:+.1}", p.price_change);
        let delta = if p.price_change > 0.0 {
            delta.green()
        } else {
            delta.red()
        };
        println!(
            "{}{:<22} {:<4} {:<4} {:>5.1}  {}",
            watch_marker(watched, p.id),
            p.name,
            p.team,
            p.position.short_label(),
            p.price,
            delta
        );
    }
}

fn render_differentials(picks: Option<&[DifferentialItem]>, watched: &[u32]) {
    section_header("Differentials");
    let Some(picks) = picks else {
        return no_data();
    };
    if picks.is_empty() {
        return no_data();
    }

    for p in picks {
        println!(
            "{}{:<22} {:<4} {:<4} owned {:>4.1}%  form {:.1}  ppg {:.1}",
            watch_marker(watched, p.id),
            p.name,
            p.team,
            p.position.short_label(),
            p.ownership,
            p.form,
            p.points_per_game
        );
    }
}

fn render_top_players(ranked: Option<&[TopPlayerItem]>, watched: &[u32]) {
    section_header("Top players");
    let Some(ranked) = ranked else {
        return no_data();
    };

    for (i, p) in ranked.iter().enumerate() {
        println!(
            "{:>2}.{}{:<22} {:<4} {:<4} {:>4} pts  owned {:.1}%",
            i + 1,
            watch_marker(watched, p.id),
            p.name,
            p.team,
            p.position.short_label(),
            p.total_points,
            p.ownership
        );
    }
}

fn render_ticker(ticker: Option<&TickerResponse>) {
    section_header("Fixture ticker");
    let Some(ticker) = ticker else {
        return no_data();
    };

    let header: Vec<String> = ticker
        .gameweek_numbers
        .iter()
        .map(|gw| format!("{:^10}", format!("GW{}", gw)))
        .collect();
    println!("{:<18}{}", "", header.join(" "));

    for row in &ticker.teams {
        let cells: Vec<String> = row
            .fixtures
            .iter()
            .map(|slot| match slot {
                Some(slot) => {
                    let side = if slot.home { "H" } else { "A" };
                    let cell = format!("{:^10}", format!("{} ({})", slot.opponent, side));
                    cell.color(difficulty_color(slot.difficulty)).to_string()
                }
                None => format!("{:^10}", "-").dimmed().to_string(),
            })
            .collect();
        println!("{:<18}{}", row.team_name, cells.join(" "));
    }
}

fn render_next_fixtures(fixtures: Option<&[NextFixtureItem]>, tz_offset_mins: i32) {
    section_header("Upcoming matches");
    let Some(fixtures) = fixtures else {
        return no_data();
    };
    if fixtures.is_empty() {
        return no_data();
    }

    for f in fixtures {
        let home = f.home_team.color(difficulty_color(f.home_difficulty));
        let away = f.away_team.color(difficulty_color(f.away_difficulty));
        println!(
            "{:<18} {} v {}",
            kickoff_local(f.kickoff_time, tz_offset_mins),
            home,
            away
        );
    }
}
