//! This module provides reusable test utilities:
//! - Mock CometBFT RPC servers
//! - Test configuration builders

// Allow unused code in test fixtures - each test binary uses a subset
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod mock_rpc;
pub mod test_config;

// Re-export commonly used items
pub use mock_rpc::MockRpcServer;
pub use test_config::{TestConfig, TestConfigBuilder};
