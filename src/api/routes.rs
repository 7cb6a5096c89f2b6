use axum::{Router, routing::get};
use std::sync::Arc;

use crate::api::handlers::{AppState, views};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/gameweek_overview", get(views::gameweek_overview))
        .route("/price_changes", get(views::price_changes))
        .route("/differentials", get(views::differentials))
        .route("/top_players", get(views::top_players))
        .route("/fixtures", get(views::fixtures))
        .route("/next_fixtures", get(views::next_fixtures))
        .with_state(state)
}
