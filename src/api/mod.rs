pub mod fpl_client;
pub mod handlers;
pub mod models;
pub mod routes;

pub use fpl_client::FplClient;
