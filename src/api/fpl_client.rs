use crate::config::settings::UpstreamSettings;
use crate::domain::models::{BootstrapResponse, FixtureResponse, Snapshot};
use crate::http::RateLimitedClient;
use anyhow::{Context, Result};
use log::info;

/// Client for the public Fantasy Premier League API
pub struct FplClient {
    client: RateLimitedClient,
    base_url: String,
}

impl FplClient {
    /// Create a new FPL API client
    pub fn new(settings: &UpstreamSettings) -> Result<Self> {
        let client = RateLimitedClient::new(
            settings.user_agent,
            settings.timeout_secs,
            settings.rate_limit_ms,
        )?;
        Ok(Self {
            client,
            base_url: settings.base_url.to_string(),
        })
    }

    /// Fetch both upstream endpoints and assemble a validated snapshot
    pub async fn fetch_snapshot(&self) -> Result<Snapshot> {
        let bootstrap = self.fetch_bootstrap().await?;
        let fixtures = self.fetch_fixtures().await?;

        let gameweeks = bootstrap
            .events
            .into_iter()
            .map(|e| e.into_gameweek())
            .collect();
        let teams = bootstrap.teams.into_iter().map(|t| t.into_team()).collect();
        let players = bootstrap
            .elements
            .into_iter()
            .filter_map(|e| e.into_player())
            .collect();
        let fixtures = fixtures.into_iter().filter_map(|f| f.into_fixture()).collect();

        let snapshot = Snapshot::assemble(gameweeks, teams, players, fixtures);
        info!(
            "Fetched snapshot: {} gameweeks, {} teams, {} players, {} fixtures",
            snapshot.gameweeks.len(),
            snapshot.teams.len(),
            snapshot.players.len(),
            snapshot.fixtures.len()
        );
        Ok(snapshot)
    }

    /// Fetch the bootstrap-static dataset (events, teams, players)
    pub async fn fetch_bootstrap(&self) -> Result<BootstrapResponse> {
        let url = self.build_bootstrap_url();
        info!("Fetching bootstrap data from {}", url);

        let response = self.client.get(&url).await?;

        if !response.status().is_success() {
            anyhow::bail!("API returned status: {}", response.status());
        }

        response
            .json()
            .await
            .context("Failed to parse bootstrap-static response")
    }

    /// Fetch the full fixture list
    pub async fn fetch_fixtures(&self) -> Result<Vec<FixtureResponse>> {
        let url = self.build_fixtures_url();
        info!("Fetching fixtures from {}", url);

        let response = self.client.get(&url).await?;

        if !response.status().is_success() {
            anyhow::bail!("API returned status: {}", response.status());
        }

        response
            .json()
            .await
            .context("Failed to parse fixtures response")
    }

    // --- Helper Methods ---

    fn build_bootstrap_url(&self) -> String {
        format!("{}/bootstrap-static/", self.base_url)
    }

    fn build_fixtures_url(&self) -> String {
        format!("{}/fixtures/", self.base_url)
    }
}
