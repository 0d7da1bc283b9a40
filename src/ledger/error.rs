//! Ledger error types
//!
//! Everything that can go wrong talking to the full node or the wallet connector.

use thiserror::Error;

use super::types::Digest;

/// Errors raised by ledger reads and wallet submissions
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Transport-level failure
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The request did not complete within the client timeout
    #[error("Request timeout")]
    Timeout,

    /// Could not reach the endpoint; carries the transport message verbatim
    #[error("{0}")]
    Unavailable(String),

    /// JSON-RPC error object returned by the full node
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// Wallet connector refused or failed the submission
    #[error("Wallet error {status}: {message}")]
    Wallet { status: u16, message: String },

    /// Response body did not have the expected shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// Transaction never became readable within the wait budget
    #[error("Timed out waiting for transaction {0} to finalize")]
    FinalizationTimeout(Digest),
}

impl LedgerError {
    /// Classify a reqwest failure the same way for every endpoint
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LedgerError::Timeout
        } else if err.is_connect() {
            LedgerError::Unavailable(err.to_string())
        } else {
            LedgerError::Request(err)
        }
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::Decode(err.to_string())
    }
}

/// Result alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
