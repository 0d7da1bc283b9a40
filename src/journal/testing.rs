//! In-memory ledger and wallet fakes for component tests

use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::ledger::{
    Address, Digest, ExecutionResult, LedgerClient, LedgerError, LedgerResult, ObjectData,
    ObjectId, ObjectOptions, ObjectResponse, Transaction, TransactionResponse, Wallet,
};

/// Build a journal-shaped object payload
pub(crate) fn journal_object(
    id: &str,
    owner: &str,
    title: &str,
    entries: &[(&str, &str)],
) -> ObjectData {
    let entries: Vec<_> = entries
        .iter()
        .map(|(content, ms)| {
            json!({
                "type": "0x42::journal::Entry",
                "fields": { "content": content, "create_at_ms": ms }
            })
        })
        .collect();

    serde_json::from_value(json!({
        "objectId": id,
        "version": "1",
        "owner": { "AddressOwner": owner },
        "content": {
            "dataType": "moveObject",
            "type": "0x42::journal::Journal",
            "fields": { "owner": owner, "title": title, "entries": entries }
        }
    }))
    .unwrap()
}

#[derive(Default)]
pub(crate) struct FakeLedger {
    objects: Mutex<HashMap<ObjectId, ObjectData>>,
    read_error: Mutex<Option<String>>,
    created: Mutex<Option<ObjectId>>,
    reads: AtomicUsize,
    waits: Mutex<Vec<Digest>>,
    fail_waits: AtomicBool,
}

impl FakeLedger {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&self, data: ObjectData) {
        self.objects
            .lock()
            .unwrap()
            .insert(data.object_id.clone(), data);
    }

    pub(crate) fn set_created(&self, id: ObjectId) {
        *self.created.lock().unwrap() = Some(id);
    }

    pub(crate) fn fail_reads(&self, message: &str) {
        *self.read_error.lock().unwrap() = Some(message.to_string());
    }

    pub(crate) fn fail_waits(&self) {
        self.fail_waits.store(true, Ordering::SeqCst);
    }

    pub(crate) fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub(crate) fn waits(&self) -> Vec<Digest> {
        self.waits.lock().unwrap().clone()
    }
}

#[async_trait]
impl LedgerClient for FakeLedger {
    async fn get_object(
        &self,
        id: &ObjectId,
        _options: ObjectOptions,
    ) -> LedgerResult<ObjectResponse> {
        self.reads.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = self.read_error.lock().unwrap().clone() {
            return Err(LedgerError::Unavailable(message));
        }

        Ok(ObjectResponse {
            data: self.objects.lock().unwrap().get(id).cloned(),
            error: None,
        })
    }

    async fn get_transaction(&self, digest: &Digest) -> LedgerResult<TransactionResponse> {
        let created: Vec<_> = self
            .created
            .lock()
            .unwrap()
            .iter()
            .map(|id| json!({ "owner": null, "reference": { "objectId": id, "version": 1 } }))
            .collect();

        Ok(serde_json::from_value(json!({
            "digest": digest,
            "effects": { "created": created }
        }))?)
    }

    async fn wait_for_transaction(&self, digest: &Digest) -> LedgerResult<TransactionResponse> {
        self.waits.lock().unwrap().push(digest.clone());

        if self.fail_waits.load(Ordering::SeqCst) {
            return Err(LedgerError::FinalizationTimeout(digest.clone()));
        }
        self.get_transaction(digest).await
    }
}

pub(crate) struct FakeWallet {
    account: Option<Address>,
    submitted: Mutex<Vec<Transaction>>,
    failure: Mutex<Option<String>>,
}

impl FakeWallet {
    pub(crate) fn connected(address: &str) -> Self {
        Self {
            account: Some(Address::parse(address).unwrap()),
            submitted: Mutex::new(Vec::new()),
            failure: Mutex::new(None),
        }
    }

    pub(crate) fn disconnected() -> Self {
        Self {
            account: None,
            submitted: Mutex::new(Vec::new()),
            failure: Mutex::new(None),
        }
    }

    pub(crate) fn reject_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    pub(crate) fn submitted(&self) -> Vec<Transaction> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl Wallet for FakeWallet {
    async fn current_account(&self) -> LedgerResult<Option<Address>> {
        Ok(self.account.clone())
    }

    async fn sign_and_execute(&self, transaction: &Transaction) -> LedgerResult<ExecutionResult> {
        let mut submitted = self.submitted.lock().unwrap();
        submitted.push(transaction.clone());

        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(LedgerError::Wallet {
                status: 400,
                message,
            });
        }

        Ok(ExecutionResult {
            digest: Digest::new(format!("digest-{}", submitted.len())),
        })
    }
}
