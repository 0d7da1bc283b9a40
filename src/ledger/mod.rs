//! Ledger Access
//!
//! Everything the journal front-end needs from the Sui network.
//!
//! ## Architecture
//!
//! - **LedgerClient**: object reads and finalization waits over JSON-RPC
//! - **Wallet**: connected account plus sign-and-execute, delegated to a connector
//! - **Transaction**: command builder handed to the wallet
//!
//! Both seams are traits so the journal components can run against in-memory
//! fakes.

mod client;
mod error;
mod transaction;
mod types;
mod wallet;

pub use client::{LedgerClient, SuiRpcClient, SuiRpcConfig};
pub use error::{LedgerError, LedgerResult};
pub use transaction::{Argument, Command, PureValue, Transaction};
pub use types::{
    Address, Digest, ObjectContent, ObjectData, ObjectId, ObjectOptions, ObjectRef,
    ObjectResponse, OwnedObjectRef, ParseIdError, TransactionEffects, TransactionResponse,
};
pub use wallet::{ConnectorConfig, ConnectorWallet, ExecutionResult, Wallet};
