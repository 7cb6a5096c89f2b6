use thiserror::Error;

/// Failures surfaced by the aggregation layer.
///
/// A failed refresh that can fall back to a stale snapshot is logged and
/// served, never surfaced through this type.
#[derive(Debug, Error)]
pub enum AggregatorError {
    #[error("upstream data unavailable: {0}")]
    UpstreamUnavailable(anyhow::Error),

    #[error("{0}")]
    NotFound(&'static str),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
