//! Configuration and CLI argument handling

use anyhow::Context;
use chrono::{DateTime, TimeZone, Utc};
use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser)]
#[command(name = "launchclock")]
#[command(about = "A state-managed HTTP server that counts down to a launch instant")]
#[command(version)]
pub struct Config {
    /// Launch instant to count down to (RFC 3339, or Unix epoch milliseconds)
    #[arg(short, long)]
    pub target: String,

    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Parse the target argument into a UTC instant.
    ///
    /// A target in the past is accepted: the countdown reports it as already
    /// complete. Only unparseable input is rejected here.
    pub fn target_time(&self) -> anyhow::Result<DateTime<Utc>> {
        if let Ok(millis) = self.target.parse::<i64>() {
            return Utc
                .timestamp_millis_opt(millis)
                .single()
                .with_context(|| format!("target milliseconds out of range: {}", millis));
        }

        DateTime::parse_from_rfc3339(&self.target)
            .map(|parsed| parsed.with_timezone(&Utc))
            .with_context(|| format!("invalid target time: {}", self.target))
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
