use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{AppState, DifferentialParams, LimitParams, TickerParams, error_response};

pub async fn gameweek_overview(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.aggregator.gameweek_overview().await {
        Ok(overview) => Json(overview).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn price_changes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LimitParams>,
) -> impl IntoResponse {
    match state.aggregator.price_changes(params.limit).await {
        Ok(movers) => Json(movers).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn differentials(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DifferentialParams>,
) -> impl IntoResponse {
    let result = state
        .aggregator
        .differentials(params.max_ownership, params.min_form, params.limit)
        .await;
    match result {
        Ok(picks) => Json(picks).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn top_players(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LimitParams>,
) -> impl IntoResponse {
    match state.aggregator.top_players(params.limit).await {
        Ok(ranked) => Json(ranked).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn fixtures(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TickerParams>,
) -> impl IntoResponse {
    match state.aggregator.fixture_ticker(params.count, params.offset).await {
        Ok(ticker) => Json(ticker).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn next_fixtures(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.aggregator.next_fixtures().await {
        Ok(list) => Json(list).into_response(),
        Err(e) => error_response(e),
    }
}
