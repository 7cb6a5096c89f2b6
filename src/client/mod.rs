pub mod dashboard;
pub mod display;
pub mod state;
pub mod watchlist;

pub use dashboard::DashboardClient;
pub use state::DashboardState;
pub use watchlist::{JsonFileStore, Watchlist};
