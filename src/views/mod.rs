pub mod gameweek;
pub mod players;
pub mod ticker;
