//! Journal API Server
//!
//! Run with: cargo run --bin journal-api
//!
//! # Configuration
//!
//! Config is read from `JOURNAL_CONFIG` when set, otherwise from the default
//! locations (see [`Config::load_default`]). `JOURNAL_*` environment variables
//! override file values; `RUST_LOG` overrides the log level.

use std::path::PathBuf;
use std::sync::Arc;

use sui_journal::api::{serve, AppState, NetworkInfo};
use sui_journal::config::Config;
use sui_journal::ledger::{ConnectorWallet, SuiRpcClient, Wallet};
use sui_journal::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::var("JOURNAL_CONFIG") {
        Ok(path) => Config::load_with_env(&PathBuf::from(path))?,
        Err(_) => Config::load_default(),
    };

    logging::init(&config.logging);

    tracing::info!("Starting Journal API server v{}", env!("CARGO_PKG_VERSION"));

    let network = NetworkInfo::from_config(&config)?;
    tracing::info!("Network: {} ({})", network.name, network.rpc_url);
    match &network.journal_package_id {
        Some(package) => tracing::info!("Journal package: {}", package),
        None => tracing::warn!(
            "No journal package configured for {} (set JOURNAL_PACKAGE_ID); create and append are disabled",
            network.name
        ),
    }

    let client = Arc::new(SuiRpcClient::new(config.rpc_config()?)?);
    let wallet = Arc::new(ConnectorWallet::new(config.connector_config())?);

    // Check wallet connector availability
    match wallet.current_account().await {
        Ok(Some(address)) => tracing::info!("Wallet account: {}", address),
        Ok(None) => tracing::warn!("Wallet connector has no connected account"),
        Err(e) => tracing::warn!("Wallet connector not available: {}", e),
    }

    let state = AppState::new(client, wallet, network, config.api.clone());
    serve(state).await?;

    tracing::info!("Journal API server stopped");
    Ok(())
}
