//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::config::{ApiConfig, Config, ConfigError};
use crate::ledger::{LedgerClient, ObjectId, Wallet};

use super::error::ApiError;

/// Network variables exposed to the UI
#[derive(Debug, Clone)]
pub struct NetworkInfo {
    pub name: String,
    pub rpc_url: String,
    /// `None` until a journal package is configured for this network
    pub journal_package_id: Option<ObjectId>,
}

impl NetworkInfo {
    /// Resolve the active network; a missing package id is tolerated
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let network = config.active_network()?;
        let journal_package_id = match config.package_id() {
            Ok(id) => Some(id),
            Err(ConfigError::MissingPackageId(_)) => None,
            Err(e) => return Err(e),
        };

        Ok(Self {
            name: config.network.clone(),
            rpc_url: network.rpc_url.clone(),
            journal_package_id,
        })
    }
}

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Ledger reads
    pub client: Arc<dyn LedgerClient>,
    /// Signing and execution
    pub wallet: Arc<dyn Wallet>,
    /// Active network variables
    pub network: Arc<NetworkInfo>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(
        client: Arc<dyn LedgerClient>,
        wallet: Arc<dyn Wallet>,
        network: NetworkInfo,
        config: ApiConfig,
    ) -> Self {
        Self {
            client,
            wallet,
            network: Arc::new(network),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Package id for contract calls, or 503 when none is configured
    pub fn package_id(&self) -> Result<&ObjectId, ApiError> {
        self.network.journal_package_id.as_ref().ok_or_else(|| {
            ApiError::ServiceUnavailable(format!(
                "no journal package configured for network {}",
                self.network.name
            ))
        })
    }
}
