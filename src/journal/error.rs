//! Journal error types

use thiserror::Error;

use crate::ledger::{Digest, LedgerError, ParseIdError};

/// Errors surfaced by journal operations
#[derive(Error, Debug)]
pub enum JournalError {
    /// Ledger read or wallet submission failed
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// No account is connected to the wallet
    #[error("No wallet account connected")]
    NoAccount,

    /// Title or entry text is empty or whitespace
    #[error("Input must not be empty")]
    EmptyInput,

    /// The component is busy or has already completed its submission
    #[error("Submission is not available in the current state")]
    NotSubmittable,

    /// No journal package is configured, so contract calls cannot be built
    #[error("No journal package configured")]
    NoPackage,

    /// The create transaction finalized without creating an object
    #[error("Transaction {0} created no object")]
    MissingCreatedObject(Digest),

    /// Object id is not valid hex
    #[error(transparent)]
    InvalidId(#[from] ParseIdError),
}

/// Result alias for journal operations
pub type JournalResult<T> = Result<T, JournalError>;
