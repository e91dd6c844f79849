//! Error types for the height monitor
//!
//! Per-node RPC failures are contained at the node level and turned into
//! sample outcomes or pruned discovery branches. Configuration errors abort
//! startup.

use std::fmt;

/// Failure of a single upstream RPC query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RpcError {
    /// No response within the configured bound
    Timeout { endpoint: String },

    /// Connection refused, reset, or non-success HTTP status
    Transport { endpoint: String, reason: String },

    /// Malformed JSON, missing field, or non-numeric height
    Parse { endpoint: String, reason: String },
}

/// Configuration error variants
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file
    LoadFailed { path: String, reason: String },

    /// Configuration parsing error
    ParseError { reason: String },

    /// Invalid configuration value
    InvalidValue { field: String, reason: String },
}

impl RpcError {
    pub fn timeout(endpoint: &str) -> Self {
        RpcError::Timeout {
            endpoint: endpoint.to_string(),
        }
    }

    pub fn transport(endpoint: &str, reason: impl fmt::Display) -> Self {
        RpcError::Transport {
            endpoint: endpoint.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn parse(endpoint: &str, reason: impl fmt::Display) -> Self {
        RpcError::Parse {
            endpoint: endpoint.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RpcError::Timeout { endpoint } => write!(f, "Request to {} timed out", endpoint),
            RpcError::Transport { endpoint, reason } => {
                write!(f, "Request to {} failed: {}", endpoint, reason)
            }
            RpcError::Parse { endpoint, reason } => {
                write!(f, "Invalid response from {}: {}", endpoint, reason)
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::LoadFailed { path, reason } => {
                write!(f, "Failed to load config from '{}': {}", path, reason)
            }
            ConfigError::ParseError { reason } => {
                write!(f, "Failed to parse config: {}", reason)
            }
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "Invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl std::error::Error for RpcError {}
impl std::error::Error for ConfigError {}
