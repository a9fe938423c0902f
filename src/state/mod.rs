//! State management module
//!
//! This module contains the shared application state and the serializable
//! countdown snapshot published on every tick.

pub mod app_state;
pub mod snapshot;

// Re-export main types
pub use app_state::AppState;
pub use snapshot::CountdownSnapshot;
