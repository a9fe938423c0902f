//! Launchclock - A state-managed HTTP server that counts down to a launch instant
//!
//! This library provides a countdown controller that turns a fixed future
//! timestamp into a continuously updated remaining-time breakdown with a
//! single-fire completion signal, plus the HTTP surface that exposes it.

pub mod api;
pub mod config;
pub mod countdown;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use countdown::CountdownController;
pub use state::{AppState, CountdownSnapshot};
pub use tasks::spawn_countdown_ticker;
pub use utils::signals::shutdown_signal;
