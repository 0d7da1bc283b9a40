//! Typed journal view over a raw object payload

use serde::{Deserialize, Deserializer, Serialize};

use crate::ledger::{Address, ObjectData};

/// A single journal entry as stored on the ledger
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Entry {
    pub content: String,
    /// Milliseconds since the epoch, kept as a decimal string
    #[serde(deserialize_with = "string_or_number")]
    pub create_at_ms: String,
}

/// Journal fields read from the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JournalView {
    pub owner: String,
    pub title: String,
    pub entries: Vec<Entry>,
}

impl JournalView {
    /// Whether `account` is the journal's owner
    pub fn is_owned_by(&self, account: Option<&Address>) -> bool {
        match (account, Address::parse(&self.owner)) {
            (Some(account), Ok(owner)) => *account == owner,
            _ => false,
        }
    }
}

#[derive(Deserialize)]
struct RawJournal {
    owner: String,
    title: String,
    entries: Vec<RawEntry>,
}

/// Nested structs come wrapped as `{ "type": ..., "fields": { ... } }`
#[derive(Deserialize)]
struct RawEntry {
    fields: Entry,
}

/// Derive a journal view from object data, or `None` if it is not a journal-shaped Move object
pub fn journal_view(data: &ObjectData) -> Option<JournalView> {
    let content = data.content.as_ref()?;
    if !content.is_move_object() {
        return None;
    }

    let raw: RawJournal = serde_json::from_value(content.fields.clone()?).ok()?;

    Some(JournalView {
        owner: raw.owner,
        title: raw.title,
        entries: raw.entries.into_iter().map(|e| e.fields).collect(),
    })
}

/// u64 fields may be rendered as strings or numbers depending on the node
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(u64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}
