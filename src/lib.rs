pub mod app;
pub mod auth;
pub mod cli;
pub mod config;
pub mod database;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod templates;

pub use app::app;
pub use state::AppState;

#[cfg(test)]
pub mod testing;
