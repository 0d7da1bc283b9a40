//! Journal Creator
//!
//! Collects a title, submits `new_journal`, and reports the created object id
//! through the `on_created` callback once the transaction has finalized.

use std::fmt;
use std::sync::Arc;

use crate::ledger::{Digest, LedgerClient, ObjectId, Wallet};

use super::error::{JournalError, JournalResult};
use super::ops;
use super::SubmitLabel;

/// Callback receiving the id of the newly created journal
pub type OnCreated = Box<dyn FnMut(&ObjectId) + Send>;

/// Submission progress of a creator instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreatePhase {
    Idle,
    /// Waiting on the wallet to sign and execute
    Submitting,
    /// Executed; waiting for finalized effects
    Executed(Digest),
    Created(ObjectId),
}

/// Title form that creates a journal owned by the connected account
pub struct JournalCreator {
    package: ObjectId,
    wallet: Arc<dyn Wallet>,
    client: Arc<dyn LedgerClient>,
    title: String,
    phase: CreatePhase,
    on_created: OnCreated,
}

impl JournalCreator {
    pub const PLACEHOLDER: &'static str = "Enter journal title";
    pub const SUBMIT_TEXT: &'static str = "Create Journal";

    pub fn new(
        package: ObjectId,
        wallet: Arc<dyn Wallet>,
        client: Arc<dyn LedgerClient>,
        on_created: impl FnMut(&ObjectId) + Send + 'static,
    ) -> Self {
        Self {
            package,
            wallet,
            client,
            title: String::new(),
            phase: CreatePhase::Idle,
            on_created: Box::new(on_created),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn phase(&self) -> &CreatePhase {
        &self.phase
    }

    /// Whether the create control is enabled
    pub fn can_submit(&self) -> bool {
        self.phase == CreatePhase::Idle && !self.title.trim().is_empty()
    }

    /// Spinner from the moment of submission onwards, including after success
    pub fn submit_label(&self) -> SubmitLabel {
        match self.phase {
            CreatePhase::Idle => SubmitLabel::Text(Self::SUBMIT_TEXT),
            _ => SubmitLabel::Spinner,
        }
    }

    /// Create the journal and invoke `on_created` with its id.
    ///
    /// A wallet failure returns the creator to `Idle`. Once the wallet reports
    /// execution the creator stays disabled, even if reading the effects fails,
    /// since resubmitting would create a second journal.
    pub async fn submit(&mut self) -> JournalResult<ObjectId> {
        if !self.can_submit() {
            return Err(JournalError::NotSubmittable);
        }

        let me = self
            .wallet
            .current_account()
            .await?
            .ok_or(JournalError::NoAccount)?;

        self.phase = CreatePhase::Submitting;
        let tx = ops::new_journal_transaction(&self.package, &self.title, me);

        let executed = match self.wallet.sign_and_execute(&tx).await {
            Ok(executed) => executed,
            Err(e) => {
                tracing::warn!(error = %e, "Journal creation was not executed");
                self.phase = CreatePhase::Idle;
                return Err(e.into());
            }
        };

        self.phase = CreatePhase::Executed(executed.digest.clone());
        let finalized = self.client.wait_for_transaction(&executed.digest).await?;

        let id = finalized
            .first_created()
            .cloned()
            .ok_or_else(|| JournalError::MissingCreatedObject(executed.digest.clone()))?;

        tracing::info!(journal = %id, "Journal created");
        (self.on_created)(&id);
        self.phase = CreatePhase::Created(id.clone());
        Ok(id)
    }
}

impl fmt::Display for JournalCreator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = if self.title.is_empty() {
            Self::PLACEHOLDER
        } else {
            self.title.as_str()
        };
        let state = if self.can_submit() { "" } else { " (disabled)" };
        write!(f, "[{}] [{}]{}", title, self.submit_label(), state)
    }
}
