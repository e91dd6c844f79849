//! Central repository for defaults, timeouts and wire constants
//!
//! Organized by category so config defaults, the RPC client and the
//! monitoring loop agree on a single source of truth.

use std::time::Duration;

/// Upstream RPC constants
pub mod rpc {
    use super::Duration;

    /// Default CometBFT RPC port implied for discovered peer addresses
    pub const DEFAULT_PEER_PORT: u16 = 26657;

    /// Default scheme used to reach discovered peer addresses
    pub const DEFAULT_PEER_SCHEME: &str = "http";

    /// Path of the peer list document
    pub const NET_INFO_PATH: &str = "/net_info";

    /// Path of the node status document
    pub const STATUS_PATH: &str = "/status";

    /// Connect timeout for the shared HTTP client; per-request bounds are
    /// applied by callers
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

    /// Pattern for an IPv4 dotted quad embedded in a peer URL. ASCII digits
    /// only; `\d` would also match other Unicode decimal digits.
    pub const IPV4_PATTERN: &str = r"[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}";
}

/// Default configuration values
pub mod defaults {
    /// Default bind address for the health server
    pub const HOST: &str = "0.0.0.0";

    /// Default port for the health server
    pub const PORT: u16 = 8080;

    /// Default local node RPC endpoint
    pub const LOCAL_RPC_URL: &str = "http://localhost:26657";

    /// Per-peer height query timeout in milliseconds
    pub const PEER_TIMEOUT_MS: u64 = 150;

    /// Per-node peer list query timeout in milliseconds
    pub const NET_INFO_TIMEOUT_MS: u64 = 800;

    /// Local height query timeout in seconds
    pub const LOCAL_TIMEOUT_SECONDS: u64 = 10;

    /// Delay between the end of one cycle and the start of the next
    pub const CHECK_INTERVAL_SECONDS: u64 = 1;

    /// Concurrent peer list queries per discovery level
    pub const DISCOVERY_CONCURRENCY: usize = 16;
}

/// Monitoring loop constants
pub mod cycle {
    /// Emit a heartbeat line every N cycles
    pub const HEARTBEAT_EVERY: u64 = 10;
}
