use std::future::Future;
use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use log::warn;

use crate::api::FplClient;
use crate::api::models::{
    DifferentialItem, GameweekOverview, NextFixtureItem, PriceChangeItem, TickerResponse,
    TopPlayerItem,
};
use crate::cache::SnapshotCache;
use crate::config::AppConfig;
use crate::domain::models::Snapshot;
use crate::errors::AggregatorError;
use crate::views;

/// Where snapshots come from; the production impl is the FPL API client.
pub trait SnapshotSource {
    fn fetch(&self) -> impl Future<Output = Result<Snapshot>> + Send;
}

impl SnapshotSource for FplClient {
    fn fetch(&self) -> impl Future<Output = Result<Snapshot>> + Send {
        self.fetch_snapshot()
    }
}

/// Serves the six derived dashboard views from a cached snapshot,
/// refreshing from the source when the cache goes stale.
pub struct Aggregator<S> {
    source: S,
    cache: SnapshotCache,
    config: AppConfig,
}

pub type FplAggregator = Aggregator<FplClient>;

impl<S: SnapshotSource> Aggregator<S> {
    pub fn new(source: S, config: AppConfig) -> Self {
        let cache = SnapshotCache::new(config.cache.ttl);
        Self {
            source,
            cache,
            config,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Resolve a snapshot: fresh cache, else refetch, else stale fallback.
    ///
    /// A refresh failure is only an error when there is nothing cached at
    /// all; otherwise the stale snapshot is served and the failure logged.
    pub async fn snapshot(&self) -> Result<Arc<Snapshot>, AggregatorError> {
        if let Some(snapshot) = self.cache.fresh().await {
            return Ok(snapshot);
        }

        match self.source.fetch().await {
            Ok(snapshot) => Ok(self.cache.store(snapshot).await),
            Err(err) => match self.cache.any().await {
                Some(stale) => {
                    warn!("Upstream refresh failed, serving stale snapshot: {:#}", err);
                    Ok(stale)
                }
                None => Err(AggregatorError::UpstreamUnavailable(err)),
            },
        }
    }

    pub async fn gameweek_overview(&self) -> Result<GameweekOverview, AggregatorError> {
        let snapshot = self.snapshot().await?;
        views::gameweek::overview(&snapshot.gameweeks, Utc::now())
            .ok_or(AggregatorError::NotFound("no gameweeks in snapshot"))
    }

    pub async fn price_changes(
        &self,
        limit: Option<i64>,
    ) -> Result<Vec<PriceChangeItem>, AggregatorError> {
        let limit = self.resolve_limit(limit, self.config.views.price_change_limit)?;
        let snapshot = self.snapshot().await?;
        Ok(views::players::price_changes(&snapshot, limit))
    }

    pub async fn differentials(
        &self,
        max_ownership: Option<f64>,
        min_form: Option<f64>,
        limit: Option<i64>,
    ) -> Result<Vec<DifferentialItem>, AggregatorError> {
        let limit = self.resolve_limit(limit, self.config.views.differential_limit)?;
        let max_ownership = max_ownership.unwrap_or(self.config.views.differential_max_ownership);
        let min_form = min_form.unwrap_or(self.config.views.differential_min_form);
        let snapshot = self.snapshot().await?;
        Ok(views::players::differentials(
            &snapshot,
            max_ownership,
            min_form,
            limit,
        ))
    }

    pub async fn top_players(
        &self,
        limit: Option<i64>,
    ) -> Result<Vec<TopPlayerItem>, AggregatorError> {
        let limit = self.resolve_limit(limit, self.config.views.top_players_limit)?;
        let snapshot = self.snapshot().await?;
        Ok(views::players::top_players(&snapshot, limit))
    }

    pub async fn fixture_ticker(
        &self,
        count: Option<i64>,
        offset: Option<i64>,
    ) -> Result<TickerResponse, AggregatorError> {
        let count = non_negative("count", count, self.config.views.ticker_count)?;
        let offset = non_negative("offset", offset, 0)?;
        let snapshot = self.snapshot().await?;
        views::ticker::fixture_ticker(&snapshot, count, offset, Utc::now())
            .ok_or(AggregatorError::NotFound("no gameweeks in snapshot"))
    }

    pub async fn next_fixtures(&self) -> Result<Vec<NextFixtureItem>, AggregatorError> {
        let snapshot = self.snapshot().await?;
        views::ticker::next_fixtures(&snapshot, Utc::now())
            .ok_or(AggregatorError::NotFound("no gameweeks in snapshot"))
    }

    fn resolve_limit(
        &self,
        requested: Option<i64>,
        default: usize,
    ) -> Result<usize, AggregatorError> {
        let limit = match requested {
            None => return Ok(default),
            Some(value) => value,
        };
        if limit < 1 || limit > self.config.views.max_limit as i64 {
            return Err(AggregatorError::InvalidParameter(format!(
                "limit must be between 1 and {}, got {}",
                self.config.views.max_limit, limit
            )));
        }
        Ok(limit as usize)
    }
}

fn non_negative(
    name: &str,
    requested: Option<i64>,
    default: usize,
) -> Result<usize, AggregatorError> {
    match requested {
        None => Ok(default),
        Some(value) if value >= 0 => Ok(value as usize),
        Some(value) => Err(AggregatorError::InvalidParameter(format!(
            "{} must be non-negative, got {}",
            name, value
        ))),
    }
}
