//! Concurrent, time-bounded block height sampling

use futures::future::join_all;
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

use crate::errors::RpcError;
use crate::health::types::{HeightSample, PeerSet};
use crate::rpc::{NodeRpc, PeerTarget};

/// Query every address once, concurrently. Completes when each query has
/// produced a sample, so a round takes roughly as long as its slowest query,
/// which is at most `per_request_timeout`. Sample order is unspecified.
pub async fn sample<R: NodeRpc>(
    rpc: &R,
    addresses: &PeerSet,
    target: &PeerTarget,
    per_request_timeout: Duration,
) -> Vec<HeightSample> {
    let queries = addresses.iter().map(|address| {
        let endpoint = target.endpoint(address);
        async move {
            let result = bounded_height(rpc, &endpoint, per_request_timeout).await;
            if let Err(e) = &result {
                debug!("No height from {}: {}", address, e);
            }
            HeightSample::from_result(address.clone(), result)
        }
    });

    join_all(queries).await
}

/// Height of the local node. Failures are logged and yield `None`.
pub async fn local_height<R: NodeRpc>(rpc: &R, endpoint: &str, bound: Duration) -> Option<u64> {
    match bounded_height(rpc, endpoint, bound).await {
        Ok(height) => Some(height),
        Err(e) => {
            debug!("Local height query failed: {}", e);
            None
        }
    }
}

async fn bounded_height<R: NodeRpc>(
    rpc: &R,
    endpoint: &str,
    bound: Duration,
) -> Result<u64, RpcError> {
    timeout(bound, rpc.block_height(endpoint))
        .await
        .map_err(|_| RpcError::timeout(endpoint))?
}
