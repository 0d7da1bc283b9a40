//! # Sui Journal
//!
//! On-chain journaling front-end. Journals and their timestamped entries live
//! on the Sui ledger; this crate builds and submits the contract calls, waits
//! for them to finalize, and renders the re-read object state.
//!
//! ## Modules
//!
//! - [`ledger`]: JSON-RPC reads, wallet connector, transaction builder
//! - [`journal`]: the journal creator and viewer components
//! - [`api`]: host API for the browser UI, built with Axum
//! - [`config`]: TOML + environment configuration, per-network variables
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use sui_journal::config::Config;
//! use sui_journal::journal::JournalViewer;
//! use sui_journal::ledger::{ConnectorWallet, ObjectId, SuiRpcClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let client = Arc::new(SuiRpcClient::new(config.rpc_config()?)?);
//!     let wallet = Arc::new(ConnectorWallet::new(config.connector_config())?);
//!
//!     let id = ObjectId::parse("0xabc")?;
//!     let mut viewer = JournalViewer::new(id, config.package_id().ok(), wallet, client, || {});
//!     viewer.refresh().await;
//!
//!     println!("{}", viewer.display());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod journal;
pub mod ledger;
pub mod logging;

pub use api::{build_router, serve, ApiError, AppState, NetworkInfo};

pub use config::{Config, ConfigError, LoggingConfig};

pub use journal::{
    CreatePhase, Entry, JournalCreator, JournalError, JournalResult, JournalView, JournalViewer,
    ViewerDisplay,
};

pub use ledger::{
    Address, ConnectorWallet, Digest, LedgerClient, LedgerError, ObjectId, SuiRpcClient,
    Transaction, Wallet,
};
