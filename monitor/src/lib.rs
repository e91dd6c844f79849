pub mod config;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod health;
pub mod rpc;
pub mod sampler;
pub mod scheduler;
pub mod web;

// Re-export commonly used types
pub use config::{Config, ConfigManager, DiscoveryMode, IsolationPolicy};
pub use health::{HealthStatus, SharedStatus};
pub use rpc::{HttpNodeRpc, NodeRpc};
pub use scheduler::HeightMonitor;
