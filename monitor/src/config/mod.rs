// File: monitor/src/config/mod.rs
pub mod manager;
use serde::{Deserialize, Serialize};
use std::time::Duration;
pub use manager::ConfigManager;

use crate::constants::{defaults, rpc};
use crate::errors::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub seed_rpcs: Vec<String>,
    #[serde(default = "default_local_rpc_url")]
    pub local_rpc_url: String,
    #[serde(default = "default_peer_rpc_scheme")]
    pub peer_rpc_scheme: String,
    #[serde(default = "default_peer_rpc_port")]
    pub peer_rpc_port: u16,
    #[serde(default = "default_peer_timeout_ms")]
    pub peer_timeout_ms: u64,
    #[serde(default = "default_net_info_timeout_ms")]
    pub net_info_timeout_ms: u64,
    #[serde(default = "default_local_timeout_seconds")]
    pub local_timeout_seconds: u64,
    #[serde(default = "default_check_interval_seconds")]
    pub check_interval_seconds: u64,
    #[serde(default)]
    pub discovery_mode: DiscoveryMode,
    #[serde(default = "default_discovery_concurrency")]
    pub discovery_concurrency: usize,
    pub max_peers: Option<usize>,
    #[serde(default)]
    pub isolation_policy: IsolationPolicy,
    // Serve 503 instead of 200 alongside a BAD body
    #[serde(default)]
    pub bad_status_code: bool,
}

/// How far peer discovery follows peer lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscoveryMode {
    /// Follow peer lists transitively until no new addresses appear
    #[default]
    Full,
    /// Only the peers advertised directly by the seeds
    FirstHop,
}

/// Status to report when the local height is known but no peer answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IsolationPolicy {
    #[default]
    AssumeGood,
    ReportBad,
}

fn default_host() -> String {
    defaults::HOST.to_string()
}

fn default_port() -> u16 {
    defaults::PORT
}

fn default_local_rpc_url() -> String {
    defaults::LOCAL_RPC_URL.to_string()
}

fn default_peer_rpc_scheme() -> String {
    rpc::DEFAULT_PEER_SCHEME.to_string()
}

fn default_peer_rpc_port() -> u16 {
    rpc::DEFAULT_PEER_PORT
}

fn default_peer_timeout_ms() -> u64 {
    defaults::PEER_TIMEOUT_MS
}

fn default_net_info_timeout_ms() -> u64 {
    defaults::NET_INFO_TIMEOUT_MS
}

fn default_local_timeout_seconds() -> u64 {
    defaults::LOCAL_TIMEOUT_SECONDS
}

fn default_check_interval_seconds() -> u64 {
    defaults::CHECK_INTERVAL_SECONDS
}

fn default_discovery_concurrency() -> usize {
    defaults::DISCOVERY_CONCURRENCY
}

impl Config {
    /// Config with defaults for everything but the seed list
    pub fn with_seeds(seed_rpcs: Vec<String>) -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            seed_rpcs,
            local_rpc_url: default_local_rpc_url(),
            peer_rpc_scheme: default_peer_rpc_scheme(),
            peer_rpc_port: default_peer_rpc_port(),
            peer_timeout_ms: default_peer_timeout_ms(),
            net_info_timeout_ms: default_net_info_timeout_ms(),
            local_timeout_seconds: default_local_timeout_seconds(),
            check_interval_seconds: default_check_interval_seconds(),
            discovery_mode: DiscoveryMode::default(),
            discovery_concurrency: default_discovery_concurrency(),
            max_peers: None,
            isolation_policy: IsolationPolicy::default(),
            bad_status_code: false,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.seed_rpcs.is_empty() {
            return Err(invalid("seed_rpcs", "at least one seed endpoint is required"));
        }
        if let Some(seed) = self.seed_rpcs.iter().find(|s| s.trim().is_empty()) {
            return Err(invalid("seed_rpcs", format!("empty seed endpoint '{}'", seed)));
        }
        if self.local_rpc_url.trim().is_empty() {
            return Err(invalid("local_rpc_url", "must not be empty"));
        }
        if self.peer_timeout_ms == 0 {
            return Err(invalid("peer_timeout_ms", "must be greater than zero"));
        }
        if self.net_info_timeout_ms == 0 {
            return Err(invalid("net_info_timeout_ms", "must be greater than zero"));
        }
        if self.local_timeout_seconds == 0 {
            return Err(invalid("local_timeout_seconds", "must be greater than zero"));
        }
        if self.check_interval_seconds == 0 {
            return Err(invalid("check_interval_seconds", "must be greater than zero"));
        }
        if self.discovery_concurrency == 0 {
            return Err(invalid("discovery_concurrency", "must be greater than zero"));
        }
        if self.max_peers == Some(0) {
            return Err(invalid("max_peers", "must be greater than zero when set"));
        }
        Ok(())
    }

    pub fn peer_timeout(&self) -> Duration {
        Duration::from_millis(self.peer_timeout_ms)
    }

    pub fn net_info_timeout(&self) -> Duration {
        Duration::from_millis(self.net_info_timeout_ms)
    }

    pub fn local_timeout(&self) -> Duration {
        Duration::from_secs(self.local_timeout_seconds)
    }

    pub fn check_interval(&self) -> Duration {
        Duration::from_secs(self.check_interval_seconds)
    }

    /// Seed endpoints without trailing slashes
    pub fn seed_endpoints(&self) -> Vec<String> {
        self.seed_rpcs
            .iter()
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .collect()
    }
}

fn invalid(field: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.into(),
    }
}
