//! Mock RPC server for testing blockchain node interactions
//!
//! This simulates CometBFT `/status` and `/net_info` responses without
//! requiring a real node.

use serde_json::json;
use std::time::Duration;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Mock RPC server that simulates blockchain node responses
pub struct MockRpcServer {
    pub server: MockServer,
    pub base_url: String,
}

impl MockRpcServer {
    /// Create a new mock RPC server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let base_url = server.uri();
        Self { server, base_url }
    }

    /// Port the mock listens on, for use as the implied peer RPC port
    pub fn port(&self) -> u16 {
        self.server.address().port()
    }

    fn status_body(latest_block: u64) -> serde_json::Value {
        json!({
            "node_info": {
                "network": "test-network",
                "moniker": "test-node"
            },
            "sync_info": {
                "latest_block_height": latest_block.to_string(),
                "catching_up": false
            }
        })
    }

    /// Mock /status with a bare sync_info document
    pub async fn mock_height(&self, latest_block: u64) {
        Mock::given(method("GET"))
            .and(path("/status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(Self::status_body(latest_block)))
            .mount(&self.server)
            .await;
    }

    /// Mock /status wrapped in a JSON-RPC result envelope
    pub async fn mock_height_rpc_envelope(&self, latest_block: u64) {
        Mock::given(method("GET"))
            .and(path("/status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": -1,
                "result": Self::status_body(latest_block)
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock /status answering only after `delay`
    pub async fn mock_slow_height(&self, latest_block: u64, delay: Duration) {
        Mock::given(method("GET"))
            .and(path("/status"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(Self::status_body(latest_block))
                    .set_delay(delay),
            )
            .mount(&self.server)
            .await;
    }

    /// Mock /net_info advertising the given peer urls
    pub async fn mock_peers(&self, urls: &[&str]) {
        let peers: Vec<_> = urls
            .iter()
            .map(|url| {
                json!({
                    "node_info": { "moniker": "peer" },
                    "url": url
                })
            })
            .collect();

        Mock::given(method("GET"))
            .and(path("/net_info"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "listening": true,
                "n_peers": peers.len().to_string(),
                "peers": peers
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock an HTTP error status on `endpoint_path`
    pub async fn mock_error(&self, endpoint_path: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(endpoint_path))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Mock a raw, possibly malformed, body on `endpoint_path`
    pub async fn mock_raw(&self, endpoint_path: &str, body: &str) {
        Mock::given(method("GET"))
            .and(path(endpoint_path))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&self.server)
            .await;
    }
}
