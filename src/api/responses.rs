//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::CountdownSnapshot;

/// Response for GET /countdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownResponse {
    pub status: String,
    pub target: DateTime<Utc>,
    pub countdown: CountdownSnapshot,
    pub uptime: String,
    pub timestamp: DateTime<Utc>,
}

impl CountdownResponse {
    /// Build a countdown response from the latest snapshot
    pub fn new(target: DateTime<Utc>, countdown: CountdownSnapshot, uptime: String) -> Self {
        let status = if countdown.is_complete {
            "complete"
        } else {
            "pending"
        };
        Self {
            status: status.to_string(),
            target,
            countdown,
            uptime,
            timestamp: Utc::now(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
