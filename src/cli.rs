use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "fpl-pulse dashboard backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the dashboard API server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Fetch a fresh snapshot from the FPL API and log what it contains
    Fetch,
    /// Fetch the six views from a running server and render them
    Dashboard {
        /// Base URL of the dashboard server
        #[arg(long, default_value = "http://localhost:3000")]
        url: String,
        /// Number of ticker gameweeks
        #[arg(long, default_value_t = 6)]
        count: usize,
        /// Ticker offset past the next gameweek
        #[arg(long, default_value_t = 0)]
        offset: usize,
        /// Render a single section (overview, prices, differentials, top, ticker, games)
        #[arg(long)]
        section: Option<String>,
    },
    /// Maintain the locally persisted player watchlist
    Watch {
        #[clap(subcommand)]
        action: WatchAction,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum WatchAction {
    /// Add a player to the watchlist by id
    Add { player_id: u32 },
    /// Remove a player from the watchlist by id
    Remove { player_id: u32 },
    /// List the watched players
    List,
}
