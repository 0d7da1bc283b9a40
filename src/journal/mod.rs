//! Journal Components
//!
//! The two user-facing pieces of the front-end and the contract calls behind them.
//!
//! ## Components
//!
//! - **JournalCreator**: title form submitting `journal::new_journal`
//! - **JournalViewer**: renders a journal and, for its owner, appends entries
//!   through `journal::add_entry`
//!
//! ## Flow
//!
//! 1. The creator submits a transaction through the [`Wallet`](crate::ledger::Wallet)
//! 2. It waits for finalization and reads the created object id from the effects
//! 3. The viewer reads that object and re-reads it after every append

mod creator;
mod error;
mod fields;
mod format;
mod ops;
mod viewer;

#[cfg(test)]
pub(crate) mod testing;

use serde::Serialize;
use std::fmt;

pub use creator::{CreatePhase, JournalCreator, OnCreated};
pub use error::{JournalError, JournalResult};
pub use fields::{journal_view, Entry, JournalView};
pub use format::{format_timestamp, INVALID_DATE, TIMESTAMP_FORMAT};
pub use ops::{
    add_entry_transaction, append_entry, create_journal, fetch_journal, new_journal_transaction,
    CreatedJournal, ADD_ENTRY, MODULE, NEW_JOURNAL,
};
pub use viewer::{
    AppendForm, EntryBlock, JournalPage, JournalViewer, OnBack, QueryState, ViewerDisplay,
};

/// Content of a submit button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum SubmitLabel {
    /// Operation in flight
    Spinner,
    Text(&'static str),
}

impl fmt::Display for SubmitLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitLabel::Spinner => write!(f, "..."),
            SubmitLabel::Text(text) => write!(f, "{}", text),
        }
    }
}
