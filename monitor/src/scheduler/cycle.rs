// File: monitor/src/scheduler/cycle.rs
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{sleep, Instant};
use tracing::{debug, info, warn};

use super::MonitorPhase;
use crate::config::Config;
use crate::constants::cycle::HEARTBEAT_EVERY;
use crate::discovery::{discover, DiscoveryOptions};
use crate::health::evaluator::{assess, emit};
use crate::health::{aggregate, HealthStatus, RoundSummary, SharedStatus};
use crate::rpc::{NodeRpc, PeerTarget};
use crate::sampler::{local_height, sample};

/// What one cycle saw and decided
#[derive(Debug, Clone)]
pub struct CycleReport {
    pub peers_discovered: usize,
    pub round: RoundSummary,
    pub consensus_height: Option<u64>,
    pub local_height: Option<u64>,
    pub status: HealthStatus,
    pub duration: Duration,
}

pub struct HeightMonitor<R> {
    config: Arc<Config>,
    rpc: R,
    status: SharedStatus,
    discovery: DiscoveryOptions,
    target: PeerTarget,
    phase_tx: watch::Sender<MonitorPhase>,
}

impl<R: NodeRpc> HeightMonitor<R> {
    pub fn new(config: Arc<Config>, rpc: R, status: SharedStatus) -> Self {
        let discovery = DiscoveryOptions::from_config(&config);
        let target = PeerTarget::from_config(&config);
        let (phase_tx, _) = watch::channel(MonitorPhase::Idle);

        Self {
            config,
            rpc,
            status,
            discovery,
            target,
            phase_tx,
        }
    }

    /// Receiver following the loop's phase
    pub fn phase(&self) -> watch::Receiver<MonitorPhase> {
        self.phase_tx.subscribe()
    }

    fn set_phase(&self, phase: MonitorPhase) {
        let previous = self.phase_tx.send_replace(phase);
        debug!("Monitor phase {} -> {}", previous, phase);
    }

    /// Run one discovery, sample, aggregate and evaluate pass and publish
    /// the resulting status
    pub async fn run_cycle(&self) -> CycleReport {
        let started = Instant::now();

        self.set_phase(MonitorPhase::Discovering);
        let seeds = self.config.seed_endpoints();
        let peers = discover(&self.rpc, &seeds, &self.discovery).await;

        self.set_phase(MonitorPhase::Sampling);
        let samples = sample(&self.rpc, &peers, &self.target, self.config.peer_timeout()).await;

        self.set_phase(MonitorPhase::Evaluating);
        let round = RoundSummary::from_samples(&samples);
        let consensus_height = aggregate(&samples);
        debug!(
            "Sampled {} peers: {} ok, {} timed out, {} transport errors, {} parse errors",
            round.polled, round.succeeded, round.timed_out, round.transport_errors, round.parse_errors
        );

        let local_endpoint = self.config.local_rpc_url.trim_end_matches('/');
        let local = local_height(&self.rpc, local_endpoint, self.config.local_timeout()).await;

        let current = self.status.current().await;
        let assessment = assess(
            local,
            consensus_height,
            current,
            self.config.isolation_policy,
        );

        match &assessment.observation {
            Some(observation) => emit(observation),
            None => warn!("Local height unavailable, keeping status {}", current),
        }

        let status = assessment.status;
        let previous = self.status.publish(status, assessment.observation).await;
        if previous != status {
            info!("Health status changed: {} -> {}", previous, status);
        }

        CycleReport {
            peers_discovered: peers.len(),
            round,
            consensus_height,
            local_height: local,
            status,
            duration: started.elapsed(),
        }
    }

    /// Run cycles forever with a fixed delay between them
    pub async fn run(self) {
        let interval = self.config.check_interval();
        let mut check_count = 0u64;

        info!(
            "Height monitoring started: {} seeds, {}ms peer timeout, {}s interval",
            self.config.seed_rpcs.len(),
            self.config.peer_timeout_ms,
            self.config.check_interval_seconds
        );

        loop {
            check_count += 1;
            let report = self.run_cycle().await;

            if check_count.is_multiple_of(HEARTBEAT_EVERY) {
                info!(
                    "Monitoring cycle #{}: {} peers, {}/{} answered, network {:?}, local {:?}, {} in {:?}",
                    check_count,
                    report.peers_discovered,
                    report.round.succeeded,
                    report.round.polled,
                    report.consensus_height,
                    report.local_height,
                    report.status,
                    report.duration
                );
            }

            self.set_phase(MonitorPhase::Sleeping);
            sleep(interval).await;
        }
    }
}
