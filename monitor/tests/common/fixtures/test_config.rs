//! Test configuration builder for creating test configs programmatically

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Builder for a main.toml written into a temporary config directory
pub struct TestConfigBuilder {
    temp_dir: TempDir,
    seeds: Vec<String>,
    local_rpc_url: Option<String>,
    peer_rpc_port: Option<u16>,
    peer_timeout_ms: Option<u64>,
    port: u16,
    discovery_mode: Option<String>,
    isolation_policy: Option<String>,
    max_peers: Option<usize>,
    bad_status_code: bool,
}

impl TestConfigBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self {
            temp_dir,
            seeds: Vec::new(),
            local_rpc_url: None,
            peer_rpc_port: None,
            peer_timeout_ms: None,
            port: 8080,
            discovery_mode: None,
            isolation_policy: None,
            max_peers: None,
            bad_status_code: false,
        }
    }

    pub fn seed(mut self, url: &str) -> Self {
        self.seeds.push(url.to_string());
        self
    }

    pub fn local_rpc_url(mut self, url: &str) -> Self {
        self.local_rpc_url = Some(url.to_string());
        self
    }

    pub fn peer_rpc_port(mut self, port: u16) -> Self {
        self.peer_rpc_port = Some(port);
        self
    }

    pub fn peer_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.peer_timeout_ms = Some(timeout_ms);
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn discovery_mode(mut self, mode: &str) -> Self {
        self.discovery_mode = Some(mode.to_string());
        self
    }

    pub fn isolation_policy(mut self, policy: &str) -> Self {
        self.isolation_policy = Some(policy.to_string());
        self
    }

    pub fn max_peers(mut self, max: usize) -> Self {
        self.max_peers = Some(max);
        self
    }

    pub fn bad_status_code(mut self, enabled: bool) -> Self {
        self.bad_status_code = enabled;
        self
    }

    fn to_toml(&self) -> String {
        let seeds = self
            .seeds
            .iter()
            .map(|s| format!("\"{}\"", s))
            .collect::<Vec<_>>()
            .join(", ");

        let mut toml = format!(
            r#"
host = "127.0.0.1"
port = {}
seed_rpcs = [{}]
bad_status_code = {}
"#,
            self.port, seeds, self.bad_status_code
        );

        if let Some(url) = &self.local_rpc_url {
            toml.push_str(&format!("local_rpc_url = \"{}\"\n", url));
        }
        if let Some(port) = self.peer_rpc_port {
            toml.push_str(&format!("peer_rpc_port = {}\n", port));
        }
        if let Some(timeout_ms) = self.peer_timeout_ms {
            toml.push_str(&format!("peer_timeout_ms = {}\n", timeout_ms));
        }
        if let Some(mode) = &self.discovery_mode {
            toml.push_str(&format!("discovery_mode = \"{}\"\n", mode));
        }
        if let Some(policy) = &self.isolation_policy {
            toml.push_str(&format!("isolation_policy = \"{}\"\n", policy));
        }
        if let Some(max) = self.max_peers {
            toml.push_str(&format!("max_peers = {}\n", max));
        }

        toml
    }

    /// Write main.toml to the temp directory
    pub fn build(self) -> TestConfig {
        let config_dir = self.temp_dir.path().join("config");
        fs::create_dir_all(&config_dir).expect("Failed to create config dir");
        fs::write(config_dir.join("main.toml"), self.to_toml()).expect("Failed to write main.toml");

        TestConfig {
            _temp_dir: self.temp_dir,
            config_dir,
        }
    }
}

impl Default for TestConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Built test configuration with temp directory
pub struct TestConfig {
    _temp_dir: TempDir,
    pub config_dir: PathBuf,
}

impl TestConfig {
    /// Config directory as passed to `ConfigManager::new`
    pub fn config_dir_string(&self) -> String {
        self.config_dir.to_string_lossy().to_string()
    }
}
