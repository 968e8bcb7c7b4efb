//! gateway-server
//!
//! HTTP anti-corruption layer: accepts JSON payments and answers with the
//! fixed-width record the legacy core banking system expects.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use state::AppState;
