//! Health monitoring types: peer addresses, height samples and status values

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::errors::RpcError;

/// Network address of a node (IP or hostname); its RPC port is implied
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeAddress(String);

impl NodeAddress {
    pub fn new(host: impl Into<String>) -> Self {
        Self(host.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeAddress {
    fn from(host: &str) -> Self {
        Self::new(host)
    }
}

/// Addresses found by one discovery pass, without duplicates
pub type PeerSet = BTreeSet<NodeAddress>;

/// How a single height query ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SampleOutcome {
    Success,
    Timeout,
    TransportError,
    ParseError,
}

/// One node's answer to a height query within one cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeightSample {
    source: NodeAddress,
    height: Option<u64>,
    outcome: SampleOutcome,
}

impl HeightSample {
    pub fn success(source: NodeAddress, height: u64) -> Self {
        Self {
            source,
            height: Some(height),
            outcome: SampleOutcome::Success,
        }
    }

    pub fn failed(source: NodeAddress, error: &RpcError) -> Self {
        let outcome = match error {
            RpcError::Timeout { .. } => SampleOutcome::Timeout,
            RpcError::Transport { .. } => SampleOutcome::TransportError,
            RpcError::Parse { .. } => SampleOutcome::ParseError,
        };
        Self {
            source,
            height: None,
            outcome,
        }
    }

    pub fn from_result(source: NodeAddress, result: Result<u64, RpcError>) -> Self {
        match result {
            Ok(height) => Self::success(source, height),
            Err(e) => Self::failed(source, &e),
        }
    }

    pub fn source(&self) -> &NodeAddress {
        &self.source
    }

    pub fn height(&self) -> Option<u64> {
        self.height
    }

    pub fn outcome(&self) -> SampleOutcome {
        self.outcome
    }

    pub fn is_success(&self) -> bool {
        self.outcome == SampleOutcome::Success
    }
}

/// Binary health signal published to load balancers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HealthStatus {
    #[default]
    Good,
    Bad,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Good => "GOOD",
            HealthStatus::Bad => "BAD",
        }
    }

    pub fn is_good(&self) -> bool {
        matches!(self, HealthStatus::Good)
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one evaluation, emitted for logging and served on /status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub highest_height: Option<u64>,
    pub local_height: u64,
    pub status: HealthStatus,
    /// Blocks the local node trails the network by; zero when level or ahead
    pub lag: u64,
    /// No peer produced a height this cycle
    pub isolated: bool,
    pub observed_at: DateTime<Utc>,
}
