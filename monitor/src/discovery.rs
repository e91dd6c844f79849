//! Peer discovery by breadth-first traversal of `/net_info` peer lists
//!
//! Each level of the traversal is queried concurrently. An address is
//! queried at most once per pass, so cycles and duplicate entries in peer
//! lists cannot cause repeated work and the pass ends once the reachable
//! graph is saturated. Failing nodes only prune their own branch.
//!
//! Seed endpoints are not part of the result; a seed appears only when some
//! node advertises its address.

use futures::stream::{self, StreamExt};
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info};

use crate::config::{Config, DiscoveryMode};
use crate::errors::RpcError;
use crate::health::types::{NodeAddress, PeerSet};
use crate::rpc::{NodeRpc, PeerTarget};

#[derive(Debug, Clone)]
pub struct DiscoveryOptions {
    pub target: PeerTarget,
    pub mode: DiscoveryMode,
    pub query_timeout: Duration,
    pub concurrency: usize,
    pub max_peers: Option<usize>,
}

impl DiscoveryOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            target: PeerTarget::from_config(config),
            mode: config.discovery_mode,
            query_timeout: config.net_info_timeout(),
            concurrency: config.discovery_concurrency.max(1),
            max_peers: config.max_peers,
        }
    }
}

/// Outcome of one traversal
#[derive(Debug)]
struct Traversal {
    peers: PeerSet,
    levels: usize,
    pruned: usize,
}

/// Discover peer addresses reachable from `seeds`
pub async fn discover<R: NodeRpc>(
    rpc: &R,
    seeds: &[String],
    options: &DiscoveryOptions,
) -> PeerSet {
    let traversal = traverse(rpc, seeds, options).await;

    info!(
        "Discovered {} peers from {} seeds ({} levels, {} branches pruned)",
        traversal.peers.len(),
        seeds.len(),
        traversal.levels,
        traversal.pruned
    );

    traversal.peers
}

async fn traverse<R: NodeRpc>(rpc: &R, seeds: &[String], options: &DiscoveryOptions) -> Traversal {
    let mut visited = PeerSet::new();
    let mut frontier: Vec<String> = seeds.to_vec();
    let mut levels = 0usize;
    let mut pruned = 0usize;

    while !frontier.is_empty() {
        debug!(
            "Discovery level {}: querying {} endpoints",
            levels,
            frontier.len()
        );

        let query_timeout = options.query_timeout;
        let queries: Vec<_> = frontier
            .into_iter()
            .map(|endpoint| async move {
                let result = fetch_peers(rpc, &endpoint, query_timeout).await;
                (endpoint, result)
            })
            .collect();

        let results: Vec<(String, Result<Vec<NodeAddress>, RpcError>)> = stream::iter(queries)
            .buffer_unordered(options.concurrency)
            .collect()
            .await;
        levels += 1;

        let mut next = Vec::new();
        for (endpoint, result) in results {
            let addresses = match result {
                Ok(addresses) => addresses,
                Err(e) => {
                    debug!("Pruning discovery branch at {}: {}", endpoint, e);
                    pruned += 1;
                    continue;
                }
            };

            for address in addresses {
                if at_capacity(&visited, options.max_peers) {
                    break;
                }
                if !visited.contains(&address) {
                    next.push(options.target.endpoint(&address));
                    visited.insert(address);
                }
            }
        }

        if options.mode == DiscoveryMode::FirstHop || at_capacity(&visited, options.max_peers) {
            break;
        }

        frontier = next;
    }

    Traversal {
        peers: visited,
        levels,
        pruned,
    }
}

async fn fetch_peers<R: NodeRpc>(
    rpc: &R,
    endpoint: &str,
    bound: Duration,
) -> Result<Vec<NodeAddress>, RpcError> {
    timeout(bound, rpc.peer_addresses(endpoint))
        .await
        .map_err(|_| RpcError::timeout(endpoint))?
}

fn at_capacity(visited: &PeerSet, max_peers: Option<usize>) -> bool {
    max_peers.is_some_and(|max| visited.len() >= max)
}
