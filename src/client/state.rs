use crate::api::models::{
    DifferentialItem, GameweekOverview, NextFixtureItem, PriceChangeItem, TickerResponse,
    TopPlayerItem,
};

/// The switchable dashboard sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Overview,
    PriceChanges,
    Differentials,
    TopPlayers,
    FixtureTicker,
    NextFixtures,
}

/// Client-side view state.
///
/// Each slot fills independently as its response arrives; a slot left None
/// (endpoint failed, nothing fetched yet) renders as empty without taking
/// the rest of the dashboard down. Ticker data is guarded by the offset it
/// was requested for: a late response for a superseded offset is discarded.
#[derive(Default)]
pub struct DashboardState {
    pub section: Section,
    pub overview: Option<GameweekOverview>,
    pub price_changes: Option<Vec<PriceChangeItem>>,
    pub differentials: Option<Vec<DifferentialItem>>,
    pub top_players: Option<Vec<TopPlayerItem>>,
    pub ticker: Option<TickerResponse>,
    pub next_fixtures: Option<Vec<NextFixtureItem>>,
    ticker_offset: usize,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pure local state change, no network effect
    pub fn switch_section(&mut self, section: Section) {
        self.section = section;
    }

    pub fn ticker_offset(&self) -> usize {
        self.ticker_offset
    }

    /// Move the ticker to a new offset; responses for other offsets are
    /// stale from this point on.
    pub fn set_ticker_offset(&mut self, offset: usize) {
        self.ticker_offset = offset;
    }

    /// Apply a ticker response if it still matches the current offset.
    /// Returns false when the response was discarded as stale.
    pub fn apply_ticker(&mut self, requested_offset: usize, ticker: TickerResponse) -> bool {
        if requested_offset != self.ticker_offset {
            return false;
        }
        self.ticker = Some(ticker);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticker(first_gw: u64) -> TickerResponse {
        TickerResponse {
            gameweek_numbers: vec![first_gw, first_gw + 1],
            teams: vec![],
        }
    }

    #[test]
    fn test_section_switch_is_local() {
        let mut state = DashboardState::new();
        assert_eq!(state.section, Section::Overview);

        state.switch_section(Section::TopPlayers);
        assert_eq!(state.section, Section::TopPlayers);
    }

    #[test]
    fn test_matching_ticker_response_is_applied() {
        let mut state = DashboardState::new();
        state.set_ticker_offset(1);

        assert!(state.apply_ticker(1, ticker(6)));
        assert_eq!(state.ticker.as_ref().unwrap().gameweek_numbers[0], 6);
    }

    #[test]
    fn test_late_response_for_superseded_offset_is_discarded() {
        let mut state = DashboardState::new();

        // request for offset 0 goes out, user immediately pages to offset 1
        state.set_ticker_offset(0);
        state.set_ticker_offset(1);

        // offset 1 response lands first
        assert!(state.apply_ticker(1, ticker(6)));

        // the late offset 0 response must not overwrite it
        assert!(!state.apply_ticker(0, ticker(5)));
        assert_eq!(state.ticker.as_ref().unwrap().gameweek_numbers[0], 6);
    }
}
