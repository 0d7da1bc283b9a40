//! Journal Viewer
//!
//! Reads a journal object, renders its entries, and lets the owner append new
//! ones. Displayed state is always the latest ledger read; nothing is patched
//! locally after an append.

use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use crate::ledger::{Address, Digest, LedgerClient, ObjectData, ObjectId, Wallet};

use super::error::{JournalError, JournalResult};
use super::fields::{journal_view, JournalView};
use super::format::format_timestamp;
use super::ops;
use super::SubmitLabel;

/// Callback for leaving the viewer
pub type OnBack = Box<dyn FnMut() + Send>;

/// Outcome of the most recent object read
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState {
    Loading,
    /// Read failed; message kept verbatim
    Failed(String),
    NotFound,
    Loaded(ObjectData),
}

/// What the viewer shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "page", rename_all = "snake_case")]
pub enum ViewerDisplay {
    Loading,
    Error(String),
    NotFound,
    Journal(JournalPage),
}

/// Rendered journal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JournalPage {
    pub title: String,
    pub entries: Vec<EntryBlock>,
    /// Present only when the current account owns the journal
    pub append_form: Option<AppendForm>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryBlock {
    pub timestamp: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppendForm {
    pub text: String,
    pub disabled: bool,
    pub submit_label: SubmitLabel,
}

/// Viewer for a single journal object
pub struct JournalViewer {
    id: ObjectId,
    /// Needed only to append; reads work without it
    package: Option<ObjectId>,
    wallet: Arc<dyn Wallet>,
    client: Arc<dyn LedgerClient>,
    query: QueryState,
    account: Option<Address>,
    entry_text: String,
    waiting: bool,
    on_back: OnBack,
}

impl JournalViewer {
    pub const DEFAULT_TITLE: &'static str = "Journal";
    pub const BACK_TEXT: &'static str = "Back to Journals";
    pub const PLACEHOLDER: &'static str = "Write your journal entry here...";
    pub const SUBMIT_TEXT: &'static str = "Add Entry";

    pub fn new(
        id: ObjectId,
        package: Option<ObjectId>,
        wallet: Arc<dyn Wallet>,
        client: Arc<dyn LedgerClient>,
        on_back: impl FnMut() + Send + 'static,
    ) -> Self {
        Self {
            id,
            package,
            wallet,
            client,
            query: QueryState::Loading,
            account: None,
            entry_text: String::new(),
            waiting: false,
            on_back: Box::new(on_back),
        }
    }

    pub fn id(&self) -> &ObjectId {
        &self.id
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn entry_text(&self) -> &str {
        &self.entry_text
    }

    pub fn set_entry_text(&mut self, text: impl Into<String>) {
        self.entry_text = text.into();
    }

    pub fn is_waiting(&self) -> bool {
        self.waiting
    }

    /// Typed fields of the loaded object, if it has the journal shape
    pub fn journal(&self) -> Option<JournalView> {
        match &self.query {
            QueryState::Loaded(data) => journal_view(data),
            _ => None,
        }
    }

    pub fn owned_by_me(&self) -> bool {
        self.journal()
            .map(|j| j.is_owned_by(self.account.as_ref()))
            .unwrap_or(false)
    }

    /// Whether the append control is enabled
    pub fn can_add_entry(&self) -> bool {
        !self.waiting && !self.entry_text.trim().is_empty()
    }

    /// Re-read the connected account and the journal object
    pub async fn refresh(&mut self) {
        self.account = match self.wallet.current_account().await {
            Ok(account) => account,
            Err(e) => {
                tracing::debug!(error = %e, "No wallet account available");
                None
            }
        };

        self.query = match ops::fetch_journal(self.client.as_ref(), &self.id).await {
            Ok(Some(data)) => QueryState::Loaded(data),
            Ok(None) => QueryState::NotFound,
            Err(e) => {
                tracing::warn!(journal = %self.id, error = %e, "Journal read failed");
                QueryState::Failed(e.to_string())
            }
        };
    }

    /// Append the current entry text, then re-read the journal and clear the input.
    ///
    /// Blank text is a no-op. On failure the in-flight flag is cleared and the
    /// text is kept.
    pub async fn add_entry(&mut self) -> JournalResult<Option<Digest>> {
        if self.entry_text.trim().is_empty() {
            return Ok(None);
        }
        if self.waiting || !self.owned_by_me() {
            return Err(JournalError::NotSubmittable);
        }
        let package = self.package.clone().ok_or(JournalError::NoPackage)?;

        self.waiting = true;
        let digest = match self.submit_entry(&package).await {
            Ok(digest) => digest,
            Err(e) => {
                tracing::warn!(journal = %self.id, error = %e, "Entry was not appended");
                self.waiting = false;
                return Err(e);
            }
        };

        self.refresh().await;
        self.waiting = false;
        self.entry_text.clear();
        Ok(Some(digest))
    }

    async fn submit_entry(&self, package: &ObjectId) -> JournalResult<Digest> {
        let tx = ops::add_entry_transaction(package, &self.id, &self.entry_text);
        let executed = self.wallet.sign_and_execute(&tx).await?;
        self.client.wait_for_transaction(&executed.digest).await?;
        Ok(executed.digest)
    }

    pub fn back(&mut self) {
        (self.on_back)();
    }

    pub fn display(&self) -> ViewerDisplay {
        match &self.query {
            QueryState::Loading => ViewerDisplay::Loading,
            QueryState::Failed(message) => ViewerDisplay::Error(message.clone()),
            QueryState::NotFound => ViewerDisplay::NotFound,
            QueryState::Loaded(_) => ViewerDisplay::Journal(self.page()),
        }
    }

    fn page(&self) -> JournalPage {
        let journal = self.journal();

        let title = journal
            .as_ref()
            .map(|j| j.title.clone())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_TITLE.to_string());

        let entries = journal
            .map(|j| {
                j.entries
                    .into_iter()
                    .map(|e| EntryBlock {
                        timestamp: format_timestamp(&e.create_at_ms),
                        content: e.content,
                    })
                    .collect()
            })
            .unwrap_or_default();

        let append_form = self.owned_by_me().then(|| AppendForm {
            text: self.entry_text.clone(),
            disabled: !self.can_add_entry(),
            submit_label: if self.waiting {
                SubmitLabel::Spinner
            } else {
                SubmitLabel::Text(Self::SUBMIT_TEXT)
            },
        });

        JournalPage {
            title,
            entries,
            append_form,
        }
    }
}

impl fmt::Display for ViewerDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewerDisplay::Loading => write!(f, "Loading..."),
            ViewerDisplay::Error(message) => write!(f, "Error: {}", message),
            ViewerDisplay::NotFound => write!(f, "Not found"),
            ViewerDisplay::Journal(page) => write!(f, "{}", page),
        }
    }
}

impl fmt::Display for JournalPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}  [{}]", self.title, JournalViewer::BACK_TEXT)?;
        writeln!(f)?;
        writeln!(f, "Past Entries")?;

        if self.entries.is_empty() {
            writeln!(f, "  No entries yet")?;
        }
        for entry in &self.entries {
            writeln!(f, "  {}", entry.timestamp)?;
            writeln!(f, "  {}", entry.content)?;
            writeln!(f)?;
        }

        if let Some(form) = &self.append_form {
            writeln!(f)?;
            writeln!(f, "Add New Entry")?;
            let text = if form.text.is_empty() {
                JournalViewer::PLACEHOLDER
            } else {
                form.text.as_str()
            };
            writeln!(f, "  [{}]", text)?;
            let state = if form.disabled { " (disabled)" } else { "" };
            writeln!(f, "  [{}]{}", form.submit_label, state)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::testing::{journal_object, FakeLedger, FakeWallet};
    use crate::ledger::{Command, Transaction};
    use std::sync::atomic::{AtomicUsize, Ordering};

    const JOURNAL: &str = "0xabc";
    const OWNER: &str = "0x1";

    fn viewer(ledger: &Arc<FakeLedger>, wallet: &Arc<FakeWallet>) -> JournalViewer {
        JournalViewer::new(
            ObjectId::parse(JOURNAL).unwrap(),
            Some(ObjectId::parse("0x42").unwrap()),
            wallet.clone(),
            ledger.clone(),
            || {},
        )
    }

    fn setup(entries: &[(&str, &str)], account: &str) -> (Arc<FakeLedger>, Arc<FakeWallet>) {
        let ledger = Arc::new(FakeLedger::new());
        ledger.insert(journal_object(JOURNAL, OWNER, "Travel", entries));
        (ledger, Arc::new(FakeWallet::connected(account)))
    }

    #[test]
    fn test_initially_loading() {
        let (ledger, wallet) = setup(&[], OWNER);
        let v = viewer(&ledger, &wallet);
        assert_eq!(v.display(), ViewerDisplay::Loading);
        assert_eq!(v.display().to_string(), "Loading...");
    }

    #[tokio::test]
    async fn test_renders_entries_in_order() {
        let entries = [
            ("one", "1700000000000"),
            ("two", "1700000001000"),
            ("three", "1700000002000"),
        ];
        let (ledger, wallet) = setup(&entries, OWNER);
        let mut v = viewer(&ledger, &wallet);
        v.refresh().await;

        let ViewerDisplay::Journal(page) = v.display() else {
            panic!("expected journal page");
        };
        assert_eq!(page.title, "Travel");
        assert_eq!(page.entries.len(), 3);
        let contents: Vec<_> = page.entries.iter().map(|e| e.content.as_str()).collect();
        assert_eq!(contents, vec!["one", "two", "three"]);
        assert_eq!(page.entries[0].timestamp, format_timestamp("1700000000000"));
    }

    #[tokio::test]
    async fn test_no_entries_text() {
        let (ledger, wallet) = setup(&[], OWNER);
        let mut v = viewer(&ledger, &wallet);
        v.refresh().await;

        assert!(v.display().to_string().contains("No entries yet"));
    }

    #[tokio::test]
    async fn test_form_visible_only_for_owner() {
        let (ledger, wallet) = setup(&[], OWNER);
        let mut v = viewer(&ledger, &wallet);
        v.refresh().await;
        let ViewerDisplay::Journal(page) = v.display() else {
            panic!("expected journal page");
        };
        assert!(page.append_form.is_some());

        let (ledger, wallet) = setup(&[], "0x2");
        let mut v = viewer(&ledger, &wallet);
        v.refresh().await;
        let ViewerDisplay::Journal(page) = v.display() else {
            panic!("expected journal page");
        };
        assert!(page.append_form.is_none());
        assert!(!v.display().to_string().contains("Add New Entry"));
    }

    #[tokio::test]
    async fn test_append_entry_round_trip() {
        let (ledger, wallet) = setup(&[], OWNER);
        let mut v = viewer(&ledger, &wallet);
        v.refresh().await;
        let reads_before = ledger.reads();

        v.set_entry_text("hello");
        let digest = v.add_entry().await.unwrap();

        assert!(digest.is_some());
        let submitted = wallet.submitted();
        assert_eq!(submitted.len(), 1);
        match &submitted[0].commands[0] {
            Command::MoveCall { target, arguments } => {
                assert!(target.ends_with("::journal::add_entry"));
                assert_eq!(
                    arguments,
                    &vec![
                        Transaction::object(ObjectId::parse(JOURNAL).unwrap()),
                        Transaction::pure_string("hello"),
                        Transaction::clock(),
                    ]
                );
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(ledger.waits().len(), 1);
        assert_eq!(ledger.reads(), reads_before + 1);
        assert_eq!(v.entry_text(), "");
        assert!(!v.is_waiting());
    }

    #[tokio::test]
    async fn test_append_blank_is_noop() {
        let (ledger, wallet) = setup(&[], OWNER);
        let mut v = viewer(&ledger, &wallet);
        v.refresh().await;

        v.set_entry_text("   ");
        assert!(!v.can_add_entry());
        assert_eq!(v.add_entry().await.unwrap(), None);
        assert!(wallet.submitted().is_empty());
    }

    #[tokio::test]
    async fn test_append_failure_clears_waiting() {
        let (ledger, wallet) = setup(&[], OWNER);
        wallet.reject_with("user rejected");
        let mut v = viewer(&ledger, &wallet);
        v.refresh().await;
        let reads_before = ledger.reads();

        v.set_entry_text("hello");
        assert!(v.add_entry().await.is_err());

        assert!(!v.is_waiting());
        assert_eq!(v.entry_text(), "hello");
        assert_eq!(ledger.reads(), reads_before);
        assert!(v.can_add_entry());
    }

    #[tokio::test]
    async fn test_query_error_verbatim() {
        let (ledger, wallet) = setup(&[], OWNER);
        ledger.fail_reads("network down");
        let mut v = viewer(&ledger, &wallet);
        v.refresh().await;

        assert_eq!(v.display().to_string(), "Error: network down");
    }

    #[tokio::test]
    async fn test_reads_without_package() {
        let (ledger, wallet) = setup(&[("one", "1700000000000")], OWNER);
        let mut v = JournalViewer::new(
            ObjectId::parse(JOURNAL).unwrap(),
            None,
            wallet.clone(),
            ledger.clone(),
            || {},
        );
        v.refresh().await;

        let ViewerDisplay::Journal(page) = v.display() else {
            panic!("expected journal page");
        };
        assert_eq!(page.entries.len(), 1);

        v.set_entry_text("hello");
        assert!(matches!(v.add_entry().await, Err(JournalError::NoPackage)));
        assert!(wallet.submitted().is_empty());
        assert!(!v.is_waiting());
        assert_eq!(v.entry_text(), "hello");
    }

    #[tokio::test]
    async fn test_refetch_failure_after_append_shows_error() {
        let (ledger, wallet) = setup(&[], OWNER);
        let mut v = viewer(&ledger, &wallet);
        v.refresh().await;

        v.set_entry_text("hello");
        ledger.fail_reads("network down");
        assert!(v.add_entry().await.unwrap().is_some());

        assert_eq!(v.display().to_string(), "Error: network down");
    }

    #[tokio::test]
    async fn test_not_found() {
        let ledger = Arc::new(FakeLedger::new());
        let wallet = Arc::new(FakeWallet::connected(OWNER));
        let mut v = viewer(&ledger, &wallet);
        v.refresh().await;

        assert_eq!(v.display(), ViewerDisplay::NotFound);
        assert_eq!(v.display().to_string(), "Not found");
    }

    #[tokio::test]
    async fn test_malformed_payload_renders_defaults() {
        let ledger = Arc::new(FakeLedger::new());
        ledger.insert(
            serde_json::from_value(serde_json::json!({
                "objectId": JOURNAL,
                "content": { "dataType": "package" }
            }))
            .unwrap(),
        );
        let wallet = Arc::new(FakeWallet::connected(OWNER));
        let mut v = viewer(&ledger, &wallet);
        v.refresh().await;

        let ViewerDisplay::Journal(page) = v.display() else {
            panic!("expected journal page");
        };
        assert_eq!(page.title, "Journal");
        assert!(page.entries.is_empty());
        assert!(page.append_form.is_none());
    }

    #[test]
    fn test_back_invokes_callback() {
        let (ledger, wallet) = setup(&[], OWNER);
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut v = JournalViewer::new(
            ObjectId::parse(JOURNAL).unwrap(),
            Some(ObjectId::parse("0x42").unwrap()),
            wallet,
            ledger,
            move || {
                counter.fetch_add(1, Ordering::SeqCst);
            },
        );

        v.back();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
