// File: monitor/src/config/manager.rs
use super::Config;
use crate::errors::ConfigError;
use anyhow::Result;
use std::sync::Arc;
use tokio::fs;
use tracing::{debug, info};

pub struct ConfigManager {
    current_config: Arc<Config>,
}

impl ConfigManager {
    pub async fn new(config_dir: String) -> Result<Self> {
        let config = Self::load_configuration(&config_dir).await?;
        Ok(Self {
            current_config: Arc::new(config),
        })
    }

    pub fn get_current_config(&self) -> Arc<Config> {
        self.current_config.clone()
    }

    async fn load_configuration(config_dir: &str) -> Result<Config> {
        let main_config_path = format!("{}/main.toml", config_dir);
        debug!("Loading config: {}", main_config_path);

        let main_config_content = fs::read_to_string(&main_config_path).await.map_err(|e| {
            ConfigError::LoadFailed {
                path: main_config_path.clone(),
                reason: e.to_string(),
            }
        })?;

        let config = Self::parse(&main_config_content)?;

        info!(
            "Loaded {} seed endpoints, local node {}, {:?} discovery",
            config.seed_rpcs.len(),
            config.local_rpc_url,
            config.discovery_mode
        );

        Ok(config)
    }

    /// Parse and validate a main.toml document
    pub fn parse(content: &str) -> Result<Config, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }
}
