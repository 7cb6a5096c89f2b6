use std::time::Duration;
use tokio::time::{Instant, sleep_until};

/// Enforces a minimum interval between upstream requests.
///
/// The first request goes through immediately; later ones wait out the
/// remainder of the interval since the previous request.
pub struct RateLimiter {
    interval: Duration,
    next_allowed: Option<Instant>,
}

impl RateLimiter {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval: Duration::from_millis(interval_ms),
            next_allowed: None,
        }
    }

    pub async fn wait(&mut self) {
        if let Some(at) = self.next_allowed {
            sleep_until(at).await;
        }
        self.next_allowed = Some(Instant::now() + self.interval);
    }

    pub fn reset(&mut self) {
        self.next_allowed = None;
    }
}
