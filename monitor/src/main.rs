// File: monitor/src/main.rs
use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use monitor::config::ConfigManager;
use monitor::health::SharedStatus;
use monitor::rpc::HttpNodeRpc;
use monitor::scheduler::HeightMonitor;
use monitor::web::{start_web_server, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::from_default_env()
        .add_directive("monitor=info".parse()?)
        .add_directive("tower_http=warn".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("reqwest=warn".parse()?);

    fmt().with_env_filter(env_filter).init();

    info!("Starting chain height monitor");

    let config_dir = std::env::args().nth(1).unwrap_or_else(|| "config".to_string());
    let config_manager = ConfigManager::new(config_dir).await?;
    let config = config_manager.get_current_config();
    info!(
        "Configuration loaded: {} seeds, local node {}, health server on {}:{}",
        config.seed_rpcs.len(),
        config.local_rpc_url,
        config.host,
        config.port
    );

    // Process-wide status, GOOD until the first evaluation says otherwise
    let status = SharedStatus::new();

    let rpc = HttpNodeRpc::new()?;
    let monitor = HeightMonitor::new(config.clone(), rpc, status.clone());
    let phase = monitor.phase();

    tokio::spawn(monitor.run());
    info!(
        "Background monitoring started with {}s interval",
        config.check_interval_seconds
    );

    start_web_server(AppState::new(config, status, phase)).await?;

    Ok(())
}
