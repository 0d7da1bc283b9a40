//! Journal contract calls
//!
//! Transaction construction for the two journal entry points, plus one-shot
//! operations that run a full submit / finalize round trip.

use serde::Serialize;

use crate::ledger::{
    Address, Digest, LedgerClient, LedgerResult, ObjectData, ObjectId, ObjectOptions, Transaction,
    Wallet,
};

use super::error::{JournalError, JournalResult};

/// Move module holding the journal entry points
pub const MODULE: &str = "journal";

/// Entry point creating a journal from a title
pub const NEW_JOURNAL: &str = "new_journal";

/// Entry point appending an entry to a journal
pub const ADD_ENTRY: &str = "add_entry";

/// `new_journal(title)` with the result transferred to `owner`
pub fn new_journal_transaction(package: &ObjectId, title: &str, owner: Address) -> Transaction {
    let mut tx = Transaction::new();
    let journal = tx.move_call(
        package,
        MODULE,
        NEW_JOURNAL,
        vec![Transaction::pure_string(title)],
    );
    tx.transfer_objects(vec![journal], owner);
    tx
}

/// `add_entry(journal, content, clock)`
pub fn add_entry_transaction(package: &ObjectId, journal: &ObjectId, content: &str) -> Transaction {
    let mut tx = Transaction::new();
    tx.move_call(
        package,
        MODULE,
        ADD_ENTRY,
        vec![
            Transaction::object(journal.clone()),
            Transaction::pure_string(content),
            Transaction::clock(),
        ],
    );
    tx
}

/// Read a journal object with content and owner; `None` when it does not exist
pub async fn fetch_journal(
    client: &dyn LedgerClient,
    id: &ObjectId,
) -> LedgerResult<Option<ObjectData>> {
    let response = client
        .get_object(id, ObjectOptions::content_and_owner())
        .await?;
    Ok(response.data)
}

/// A journal created on the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedJournal {
    pub id: ObjectId,
    pub digest: Digest,
}

/// Create a journal owned by the wallet's account and wait for it to finalize
pub async fn create_journal(
    wallet: &dyn Wallet,
    client: &dyn LedgerClient,
    package: &ObjectId,
    title: &str,
) -> JournalResult<CreatedJournal> {
    if title.trim().is_empty() {
        return Err(JournalError::EmptyInput);
    }

    let me = wallet.current_account().await?.ok_or(JournalError::NoAccount)?;
    let tx = new_journal_transaction(package, title, me);

    let executed = wallet.sign_and_execute(&tx).await?;
    let finalized = client.wait_for_transaction(&executed.digest).await?;

    let id = finalized
        .first_created()
        .cloned()
        .ok_or_else(|| JournalError::MissingCreatedObject(executed.digest.clone()))?;

    tracing::info!(journal = %id, digest = %executed.digest, "Journal created");
    Ok(CreatedJournal {
        id,
        digest: executed.digest,
    })
}

/// Append an entry and wait for it to finalize
pub async fn append_entry(
    wallet: &dyn Wallet,
    client: &dyn LedgerClient,
    package: &ObjectId,
    journal: &ObjectId,
    content: &str,
) -> JournalResult<Digest> {
    if content.trim().is_empty() {
        return Err(JournalError::EmptyInput);
    }

    let tx = add_entry_transaction(package, journal, content);
    let executed = wallet.sign_and_execute(&tx).await?;
    client.wait_for_transaction(&executed.digest).await?;

    tracing::info!(%journal, digest = %executed.digest, "Entry appended");
    Ok(executed.digest)
}
