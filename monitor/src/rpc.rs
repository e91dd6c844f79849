//! Upstream CometBFT RPC access: peer lists and block heights
//!
//! `NodeRpc` is the seam between the monitoring engine and the network.
//! `HttpNodeRpc` is the production implementation; tests substitute an
//! in-memory peer graph.

use anyhow::{anyhow, Result};
use regex::Regex;
use reqwest::Client;
use serde_json::Value;
use std::future::Future;
use std::sync::LazyLock;
use tracing::debug;

use crate::config::Config;
use crate::constants::rpc::{CONNECT_TIMEOUT, IPV4_PATTERN, NET_INFO_PATH, STATUS_PATH};
use crate::errors::RpcError;
use crate::health::types::NodeAddress;

static IPV4_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(IPV4_PATTERN).expect("IPv4 pattern is valid"));

/// Queries a node exposes to the monitor. Implementations do not apply
/// timeouts; callers bound each call.
pub trait NodeRpc: Send + Sync {
    /// Addresses advertised in `{endpoint}/net_info`
    fn peer_addresses(
        &self,
        endpoint: &str,
    ) -> impl Future<Output = Result<Vec<NodeAddress>, RpcError>> + Send;

    /// `sync_info.latest_block_height` from `{endpoint}/status`
    fn block_height(&self, endpoint: &str) -> impl Future<Output = Result<u64, RpcError>> + Send;
}

/// Scheme and port used to turn a discovered address into an RPC endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerTarget {
    pub scheme: String,
    pub port: u16,
}

impl PeerTarget {
    pub fn from_config(config: &Config) -> Self {
        Self {
            scheme: config.peer_rpc_scheme.clone(),
            port: config.peer_rpc_port,
        }
    }

    pub fn endpoint(&self, address: &NodeAddress) -> String {
        format!("{}://{}:{}", self.scheme, address, self.port)
    }
}

#[derive(Clone)]
pub struct HttpNodeRpc {
    client: Client,
}

impl HttpNodeRpc {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| anyhow!("Failed to create HTTP client: {}", e))?;
        Ok(Self { client })
    }

    async fn get_json(&self, url: &str) -> Result<Value, RpcError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| RpcError::transport(url, e))?;

        if !response.status().is_success() {
            return Err(RpcError::transport(
                url,
                format!("HTTP {}", response.status()),
            ));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| RpcError::transport(url, e))?;

        serde_json::from_slice(&body).map_err(|e| RpcError::parse(url, e))
    }
}

impl NodeRpc for HttpNodeRpc {
    async fn peer_addresses(&self, endpoint: &str) -> Result<Vec<NodeAddress>, RpcError> {
        let url = format!("{}{}", endpoint, NET_INFO_PATH);
        let json = self.get_json(&url).await?;
        let addresses = parse_peer_addresses(&json).map_err(|reason| RpcError::parse(&url, reason))?;
        debug!("{} advertises {} peer addresses", endpoint, addresses.len());
        Ok(addresses)
    }

    async fn block_height(&self, endpoint: &str) -> Result<u64, RpcError> {
        let url = format!("{}{}", endpoint, STATUS_PATH);
        let json = self.get_json(&url).await?;
        parse_block_height(&json).map_err(|reason| RpcError::parse(&url, reason))
    }
}

/// Real nodes wrap documents in a JSON-RPC `result` envelope; accept both
fn unwrap_result(json: &Value) -> &Value {
    match json.get("result") {
        Some(result) if result.is_object() => result,
        _ => json,
    }
}

/// Extract peer addresses from a net_info document. Entries without a url
/// or without an embedded IPv4 address are skipped.
pub fn parse_peer_addresses(json: &Value) -> Result<Vec<NodeAddress>, String> {
    let peers = unwrap_result(json)
        .get("peers")
        .and_then(Value::as_array)
        .ok_or_else(|| "peers list not found in net_info response".to_string())?;

    Ok(peers
        .iter()
        .filter_map(|peer| peer.get("url").and_then(Value::as_str))
        .filter_map(|url| IPV4_REGEX.find(url))
        .map(|m| NodeAddress::new(m.as_str()))
        .collect())
}

/// Extract `sync_info.latest_block_height` from a status document
pub fn parse_block_height(json: &Value) -> Result<u64, String> {
    let height_str = unwrap_result(json)
        .get("sync_info")
        .and_then(|s| s.get("latest_block_height"))
        .and_then(Value::as_str)
        .ok_or_else(|| "block height not found in status response".to_string())?;

    height_str
        .parse::<u64>()
        .map_err(|e| format!("invalid block height '{}': {}", height_str, e))
}
