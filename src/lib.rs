pub mod api;
pub mod cache;
pub mod cli;
pub mod client;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod rate_limiter;
pub mod services;
pub mod views;

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::api::FplClient;
use crate::cli::{Cli, Command, WatchAction};
use crate::client::state::Section;
use crate::client::{DashboardClient, DashboardState, JsonFileStore, Watchlist, dashboard};
use crate::config::AppConfig;
use crate::services::aggregator::Aggregator;
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_fetch() -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let client = FplClient::new(&config.upstream)?;
        client.fetch_snapshot().await?;
        Ok(())
    })
}

pub fn handle_dashboard(
    url: &str,
    count: usize,
    offset: usize,
    section: Option<&str>,
) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let client = DashboardClient::new(url, config.upstream.timeout_secs)?;

        let state = Arc::new(Mutex::new(DashboardState::new()));
        state.lock().await.set_ticker_offset(offset);
        client.refresh(&state, count, offset).await;

        let watchlist = Watchlist::open(JsonFileStore::new(JsonFileStore::default_path()))?;
        let watched: Vec<u32> = watchlist.entries().iter().map(|p| p.id).collect();

        let mut state = state.lock().await;
        match section {
            Some(name) => {
                let section = parse_section(name)
                    .ok_or_else(|| anyhow::anyhow!("Unknown section: {}", name))?;
                state.switch_section(section);
                dashboard::render_active(&state, &watched, config.display.timezone_offset_mins);
            }
            None => dashboard::render(&state, &watched, config.display.timezone_offset_mins),
        }
        Ok(())
    })
}

fn parse_section(name: &str) -> Option<Section> {
    match name {
        "overview" => Some(Section::Overview),
        "prices" => Some(Section::PriceChanges),
        "differentials" => Some(Section::Differentials),
        "top" => Some(Section::TopPlayers),
        "ticker" => Some(Section::FixtureTicker),
        "games" => Some(Section::NextFixtures),
        _ => None,
    }
}

pub fn handle_watch(action: &WatchAction) -> Result<()> {
    let store = JsonFileStore::new(JsonFileStore::default_path());
    let mut watchlist = Watchlist::open(store)?;

    match action {
        WatchAction::Add { player_id } => add_to_watchlist(&mut watchlist, *player_id),
        WatchAction::Remove { player_id } => {
            if watchlist.remove(*player_id)? {
                println!("Removed player {} from the watchlist", player_id);
            } else {
                println!("Player {} is not on the watchlist", player_id);
            }
            Ok(())
        }
        WatchAction::List => {
            if watchlist.is_empty() {
                println!("Watchlist is empty");
                return Ok(());
            }
            for p in watchlist.entries() {
                println!(
                    "{:<22} {:<4} {:>5.1}m  owned {:.1}%  {} pts",
                    p.name,
                    p.position.short_label(),
                    p.price,
                    p.ownership,
                    p.total_points
                );
            }
            Ok(())
        }
    }
}

fn add_to_watchlist(watchlist: &mut Watchlist<JsonFileStore>, player_id: u32) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let client = FplClient::new(&config.upstream)?;
        let aggregator = Aggregator::new(client, config);

        let snapshot = aggregator.snapshot().await?;
        let player = snapshot
            .player(player_id)
            .ok_or_else(|| anyhow::anyhow!("Player {} not found in current snapshot", player_id))?;

        if watchlist.add(player)? {
            println!("Added {} to the watchlist", player.name);
        } else {
            println!("{} is already on the watchlist", player.name);
        }
        Ok(())
    })
}
