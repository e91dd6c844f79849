// File: monitor/src/web/mod.rs
pub mod handlers;
pub mod server;

pub use server::{create_router, start_web_server};

use serde::Serialize;
use std::sync::Arc;
use tokio::sync::watch;

use crate::config::Config;
use crate::health::{HealthStatus, Observation, SharedStatus};
use crate::scheduler::MonitorPhase;

// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub status: SharedStatus,
    pub phase: watch::Receiver<MonitorPhase>,
}

impl AppState {
    pub fn new(
        config: Arc<Config>,
        status: SharedStatus,
        phase: watch::Receiver<MonitorPhase>,
    ) -> Self {
        Self {
            config,
            status,
            phase,
        }
    }
}

// Operator view returned by /status
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub status: HealthStatus,
    pub phase: MonitorPhase,
    pub last_observation: Option<Observation>,
}
