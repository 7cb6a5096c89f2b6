use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::errors::AggregatorError;
use crate::services::aggregator::FplAggregator;

pub mod views;

pub struct AppState {
    pub aggregator: FplAggregator,
}

#[derive(Deserialize)]
pub struct LimitParams {
    pub limit: Option<i64>,
}

#[derive(Deserialize)]
pub struct DifferentialParams {
    pub limit: Option<i64>,
    pub max_ownership: Option<f64>,
    pub min_form: Option<f64>,
}

#[derive(Deserialize)]
pub struct TickerParams {
    pub count: Option<i64>,
    pub offset: Option<i64>,
}

pub fn error_response(err: AggregatorError) -> Response {
    let status = match &err {
        AggregatorError::UpstreamUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        AggregatorError::NotFound(_) => StatusCode::NOT_FOUND,
        AggregatorError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
    };
    (status, err.to_string()).into_response()
}
