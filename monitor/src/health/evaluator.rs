//! Comparison of the local height against the network height

use chrono::Utc;
use tracing::{info, warn};

use super::types::{HealthStatus, Observation};
use crate::config::IsolationPolicy;

/// Status after one evaluation and the observation to emit, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub status: HealthStatus,
    pub observation: Option<Observation>,
}

/// Next status given the local and network heights.
///
/// A missing local height keeps `current` (stale-on-failure). A missing
/// network height means the node cannot be shown to be behind, so it is GOOD.
pub fn evaluate(
    local_height: Option<u64>,
    consensus_height: Option<u64>,
    current: HealthStatus,
) -> HealthStatus {
    assess(
        local_height,
        consensus_height,
        current,
        IsolationPolicy::AssumeGood,
    )
    .status
}

/// Like [`evaluate`], with a configurable answer for the isolated case and
/// the observation describing the decision.
pub fn assess(
    local_height: Option<u64>,
    consensus_height: Option<u64>,
    current: HealthStatus,
    isolation_policy: IsolationPolicy,
) -> Assessment {
    let Some(local) = local_height else {
        return Assessment {
            status: current,
            observation: None,
        };
    };

    let status = match consensus_height {
        None => match isolation_policy {
            IsolationPolicy::AssumeGood => HealthStatus::Good,
            IsolationPolicy::ReportBad => HealthStatus::Bad,
        },
        Some(highest) if local >= highest => HealthStatus::Good,
        Some(_) => HealthStatus::Bad,
    };

    Assessment {
        status,
        observation: Some(Observation {
            highest_height: consensus_height,
            local_height: local,
            status,
            lag: consensus_height.map_or(0, |highest| highest.saturating_sub(local)),
            isolated: consensus_height.is_none(),
            observed_at: Utc::now(),
        }),
    }
}

/// Log an observation: GOOD at info, BAD and isolation at warn
pub fn emit(observation: &Observation) {
    if observation.isolated {
        warn!(
            status = %observation.status,
            local = observation.local_height,
            "No peer reported a height; node may be isolated"
        );
        return;
    }

    let highest = observation.highest_height.unwrap_or_default();
    match observation.status {
        HealthStatus::Good => info!(
            status = %observation.status,
            highest,
            local = observation.local_height,
            "GOOD    Highest: {} Ours: {}",
            highest,
            observation.local_height
        ),
        HealthStatus::Bad => warn!(
            status = %observation.status,
            highest,
            local = observation.local_height,
            lag = observation.lag,
            "BEHIND  Highest: {} Ours: {} ({} blocks)",
            highest,
            observation.local_height,
            observation.lag
        ),
    }
}
