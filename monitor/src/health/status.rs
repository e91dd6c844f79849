//! Shared health status handle
//!
//! Written once per cycle by the monitoring loop and read at any time by the
//! web server. All access goes through one `RwLock`, so a reader sees either
//! the previous snapshot or the new one, never a partial write.

use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::types::{HealthStatus, Observation};

#[derive(Debug, Clone, Default, Serialize)]
pub struct StatusSnapshot {
    pub status: HealthStatus,
    pub last_observation: Option<Observation>,
}

#[derive(Clone, Default)]
pub struct SharedStatus {
    inner: Arc<RwLock<StatusSnapshot>>,
}

impl SharedStatus {
    /// Starts GOOD with no observation
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn current(&self) -> HealthStatus {
        self.inner.read().await.status
    }

    /// `"GOOD"` or `"BAD"`
    pub async fn token(&self) -> &'static str {
        self.current().await.as_str()
    }

    pub async fn snapshot(&self) -> StatusSnapshot {
        self.inner.read().await.clone()
    }

    /// Replace the status, and the observation when one was made. Returns the
    /// previous status.
    pub async fn publish(
        &self,
        status: HealthStatus,
        observation: Option<Observation>,
    ) -> HealthStatus {
        let mut guard = self.inner.write().await;
        let previous = guard.status;
        guard.status = status;
        if observation.is_some() {
            guard.last_observation = observation;
        }
        previous
    }
}
