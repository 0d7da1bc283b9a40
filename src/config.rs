//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.
//!
//! Network-specific values (full node URL, deployed journal package) live in
//! a `[networks.<name>]` table; `network` selects the active one.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::ledger::{ConnectorConfig, ObjectId, SuiRpcConfig};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Name of the active network
    #[serde(default = "default_network")]
    pub network: String,

    #[serde(default = "default_networks")]
    pub networks: BTreeMap<String, NetworkConfig>,

    #[serde(default)]
    pub ledger: LedgerConfig,

    #[serde(default)]
    pub wallet: WalletConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Per-network variables
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConfig {
    pub rpc_url: String,

    /// Address of the deployed journal package; empty until deployed
    #[serde(default)]
    pub journal_package_id: String,
}

impl NetworkConfig {
    fn new(rpc_url: &str) -> Self {
        Self {
            rpc_url: rpc_url.to_string(),
            journal_package_id: String::new(),
        }
    }
}

fn default_network() -> String {
    "testnet".to_string()
}

fn default_networks() -> BTreeMap<String, NetworkConfig> {
    BTreeMap::from([
        (
            "devnet".to_string(),
            NetworkConfig::new("https://fullnode.devnet.sui.io:443"),
        ),
        (
            "testnet".to_string(),
            NetworkConfig::new("https://fullnode.testnet.sui.io:443"),
        ),
        (
            "mainnet".to_string(),
            NetworkConfig::new("https://fullnode.mainnet.sui.io:443"),
        ),
    ])
}

/// Ledger client timing
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerConfig {
    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,

    #[serde(default = "default_wait_timeout")]
    pub wait_timeout_ms: u64,

    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,
}

fn default_request_timeout() -> u64 {
    10_000
}

fn default_wait_timeout() -> u64 {
    60_000 // 1 minute
}

fn default_poll_interval() -> u64 {
    2_000
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: default_request_timeout(),
            wait_timeout_ms: default_wait_timeout(),
            poll_interval_ms: default_poll_interval(),
        }
    }
}

/// Wallet connector configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WalletConfig {
    #[serde(default = "default_connector_url")]
    pub connector_url: String,

    #[serde(default = "default_sign_timeout")]
    pub request_timeout_ms: u64,
}

fn default_connector_url() -> String {
    "http://localhost:9000".to_string()
}

fn default_sign_timeout() -> u64 {
    120_000 // signing may wait on user approval
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            connector_url: default_connector_url(),
            request_timeout_ms: default_sign_timeout(),
        }
    }
}

/// Host API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory with the built UI bundle, served at `/` when set
    #[serde(default)]
    pub static_dir: Option<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8085
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: None,
        }
    }
}

impl ApiConfig {
    /// Socket address string to bind
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("sui-journal").join("config.toml")),
            Some(PathBuf::from("/etc/sui-journal/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Variables of the active network
    pub fn active_network(&self) -> Result<&NetworkConfig, ConfigError> {
        self.networks
            .get(&self.network)
            .ok_or_else(|| ConfigError::UnknownNetwork(self.network.clone()))
    }

    /// Journal package id of the active network
    pub fn package_id(&self) -> Result<ObjectId, ConfigError> {
        let network = self.active_network()?;
        if network.journal_package_id.trim().is_empty() {
            return Err(ConfigError::MissingPackageId(self.network.clone()));
        }
        ObjectId::parse(&network.journal_package_id)
            .map_err(|_| ConfigError::InvalidPackageId(network.journal_package_id.clone()))
    }

    /// JSON-RPC client settings for the active network
    pub fn rpc_config(&self) -> Result<SuiRpcConfig, ConfigError> {
        Ok(SuiRpcConfig {
            rpc_url: self.active_network()?.rpc_url.clone(),
            request_timeout_ms: self.ledger.request_timeout_ms,
            wait_timeout_ms: self.ledger.wait_timeout_ms,
            poll_interval_ms: self.ledger.poll_interval_ms,
        })
    }

    /// Wallet connector settings
    pub fn connector_config(&self) -> ConnectorConfig {
        ConnectorConfig {
            base_url: self.wallet.connector_url.clone(),
            request_timeout_ms: self.wallet.request_timeout_ms,
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply `JOURNAL_*` overrides read through `var`
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(network) = var("JOURNAL_NETWORK") {
            self.network = network;
        }

        // Network variable overrides target the active network
        if let Some(url) = var("JOURNAL_RPC_URL") {
            let network = self
                .networks
                .entry(self.network.clone())
                .or_insert_with(|| NetworkConfig::new(&url));
            network.rpc_url = url;
        }
        if let Some(package) = var("JOURNAL_PACKAGE_ID") {
            match self.networks.get_mut(&self.network) {
                Some(network) => network.journal_package_id = package,
                None => tracing::warn!(
                    "Ignoring JOURNAL_PACKAGE_ID: network {} has no rpc_url (set JOURNAL_RPC_URL)",
                    self.network
                ),
            }
        }

        if let Some(url) = var("JOURNAL_WALLET_URL") {
            self.wallet.connector_url = url;
        }

        if let Some(host) = var("JOURNAL_API_HOST") {
            self.api.host = host;
        }
        if let Some(port) = var("JOURNAL_API_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        if let Some(level) = var("JOURNAL_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("JOURNAL_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: default_network(),
            networks: default_networks(),
            ledger: LedgerConfig::default(),
            wallet: WalletConfig::default(),
            api: ApiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Unknown network: {0}")]
    UnknownNetwork(String),

    #[error("No journal package id configured for network {0}")]
    MissingPackageId(String),

    #[error("Invalid journal package id: {0}")]
    InvalidPackageId(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Sui Journal Configuration
#
# Environment variables override these settings:
# - JOURNAL_NETWORK
# - JOURNAL_RPC_URL       (active network)
# - JOURNAL_PACKAGE_ID    (active network)
# - JOURNAL_WALLET_URL
# - JOURNAL_API_HOST
# - JOURNAL_API_PORT
# - JOURNAL_LOG_LEVEL
# - JOURNAL_LOG_FORMAT

# Active network
network = "testnet"

[networks.devnet]
rpc_url = "https://fullnode.devnet.sui.io:443"
journal_package_id = ""

[networks.testnet]
rpc_url = "https://fullnode.testnet.sui.io:443"
# Address of the deployed journal package
journal_package_id = ""

[networks.mainnet]
rpc_url = "https://fullnode.mainnet.sui.io:443"
journal_package_id = ""

[ledger]
# Per-request timeout (ms)
request_timeout_ms = 10000

# How long to wait for a transaction to finalize (ms)
wait_timeout_ms = 60000

# Delay between finalization checks (ms)
poll_interval_ms = 2000

[wallet]
# Wallet connector that signs and executes transactions
connector_url = "http://localhost:9000"

# Signing may wait on user approval (ms)
request_timeout_ms = 120000

[api]
host = "127.0.0.1"
port = 8085

# Built UI bundle to serve at /
# static_dir = "./journal-ui/dist"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.network, "testnet");
        assert_eq!(config.networks.len(), 3);
        assert_eq!(
            config.active_network().unwrap().rpc_url,
            "https://fullnode.testnet.sui.io:443"
        );
        assert_eq!(config.ledger.wait_timeout_ms, 60_000);
        assert_eq!(config.api.addr(), "127.0.0.1:8085");
    }

    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.network, "testnet");
        assert_eq!(config.wallet.connector_url, "http://localhost:9000");
        assert!(matches!(
            config.package_id(),
            Err(ConfigError::MissingPackageId(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
network = "local"

[networks.local]
rpc_url = "http://127.0.0.1:9000"
journal_package_id = "0x42"
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.network, "local");
        assert_eq!(config.package_id().unwrap(), ObjectId::parse("0x42").unwrap());
        assert_eq!(config.rpc_config().unwrap().rpc_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn test_unknown_network() {
        let config = Config {
            network: "nowhere".to_string(),
            ..Config::default()
        };
        assert!(matches!(
            config.active_network(),
            Err(ConfigError::UnknownNetwork(_))
        ));
    }

    #[test]
    fn test_invalid_package_id() {
        let mut config = Config::default();
        config
            .networks
            .get_mut("testnet")
            .unwrap()
            .journal_package_id = "not-hex".to_string();

        assert!(matches!(
            config.package_id(),
            Err(ConfigError::InvalidPackageId(_))
        ));
    }

    fn overrides(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_overrides_on_loaded_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
network = "testnet"

[api]
port = 9999
"#
        )
        .unwrap();

        let mut config = Config::load(file.path()).unwrap();
        config.apply_overrides(overrides(&[
            ("JOURNAL_NETWORK", "devnet"),
            ("JOURNAL_PACKAGE_ID", "0x42"),
            ("JOURNAL_WALLET_URL", "http://wallet:9000"),
            ("JOURNAL_API_PORT", "8086"),
            ("JOURNAL_LOG_FORMAT", "json"),
        ]));

        assert_eq!(config.network, "devnet");
        assert_eq!(config.package_id().unwrap(), ObjectId::parse("0x42").unwrap());
        assert!(config.networks["testnet"].journal_package_id.is_empty());
        assert_eq!(config.wallet.connector_url, "http://wallet:9000");
        assert_eq!(config.api.port, 8086);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_overrides_define_new_network() {
        let mut config = Config::default();
        config.apply_overrides(overrides(&[
            ("JOURNAL_NETWORK", "localnet"),
            ("JOURNAL_RPC_URL", "http://127.0.0.1:9000"),
            ("JOURNAL_PACKAGE_ID", "0x42"),
        ]));

        assert_eq!(config.rpc_config().unwrap().rpc_url, "http://127.0.0.1:9000");
        assert_eq!(config.package_id().unwrap(), ObjectId::parse("0x42").unwrap());
    }

    #[test]
    fn test_package_override_without_network_is_ignored() {
        let mut config = Config::default();
        config.apply_overrides(overrides(&[
            ("JOURNAL_NETWORK", "localnet"),
            ("JOURNAL_PACKAGE_ID", "0x42"),
        ]));

        assert!(!config.networks.contains_key("localnet"));
        assert!(matches!(
            config.package_id(),
            Err(ConfigError::UnknownNetwork(_))
        ));
    }

    #[test]
    fn test_bad_port_override_keeps_value() {
        let mut config = Config::default();
        config.apply_overrides(overrides(&[("JOURNAL_API_PORT", "not-a-port")]));
        assert_eq!(config.api.port, 8085);
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
