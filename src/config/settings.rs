use std::time::Duration;

pub struct UpstreamSettings {
    pub base_url: &'static str,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
    pub rate_limit_ms: u64,
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            base_url: "https://fantasy.premierleague.com/api",
            user_agent: "FplPulse/0.1",
            timeout_secs: 30,
            rate_limit_ms: 250, // 4 req/sec, the upstream throttles aggressively
        }
    }
}

pub struct CacheSettings {
    pub ttl: Duration,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
        }
    }
}

/// Defaults for the six derived views; all overridable per request
pub struct ViewSettings {
    pub price_change_limit: usize,
    pub differential_max_ownership: f64,
    pub differential_min_form: f64,
    pub differential_limit: usize,
    pub top_players_limit: usize,
    pub ticker_count: usize,
    pub max_limit: usize,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            price_change_limit: 20,
            differential_max_ownership: 5.0,
            differential_min_form: 0.0,
            differential_limit: 20,
            top_players_limit: 10,
            ticker_count: 6,
            max_limit: 500,
        }
    }
}

pub struct DisplaySettings {
    /// Fixed offset from UTC for rendered kickoff times
    pub timezone_offset_mins: i32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            timezone_offset_mins: 60,
        }
    }
}

#[derive(Default)]
pub struct AppConfig {
    pub upstream: UpstreamSettings,
    pub cache: CacheSettings,
    pub views: ViewSettings,
    pub display: DisplaySettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
