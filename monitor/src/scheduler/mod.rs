//! Monitoring loop driving discovery, sampling and evaluation
//!
//! One cycle runs:
//! - Peer discovery over the configured seeds
//! - Concurrent height sampling of every discovered peer
//! - Consensus aggregation over the successful samples
//! - A local height query, made last so a slow local node cannot skew the
//!   network height it is compared against
//! - Evaluation and publication of the GOOD/BAD status
//!
//! The loop then sleeps `check_interval_seconds` (fixed delay, measured
//! from the end of the cycle) and repeats for the lifetime of the process.
//!
//! # Configuration
//!
//! ```toml
//! seed_rpcs = ["https://rpc.example.com:443", "http://localhost:26657"]
//! peer_timeout_ms = 150
//! check_interval_seconds = 1
//! discovery_mode = "full"
//! ```

pub mod cycle;
pub use cycle::{CycleReport, HeightMonitor};

use serde::Serialize;
use std::fmt;

/// Where the monitoring loop currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MonitorPhase {
    #[default]
    Idle,
    Discovering,
    Sampling,
    Evaluating,
    Sleeping,
}

impl fmt::Display for MonitorPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MonitorPhase::Idle => "idle",
            MonitorPhase::Discovering => "discovering",
            MonitorPhase::Sampling => "sampling",
            MonitorPhase::Evaluating => "evaluating",
            MonitorPhase::Sleeping => "sleeping",
        };
        f.write_str(name)
    }
}
