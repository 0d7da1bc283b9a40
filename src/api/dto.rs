//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::journal::{journal_view, Entry};
use crate::ledger::{Address, Digest, ObjectData, ObjectId};

// ============================================
// JOURNAL DTOs
// ============================================

/// Create journal request
#[derive(Debug, Deserialize)]
pub struct CreateJournalRequest {
    pub title: String,
}

/// Append entry request
#[derive(Debug, Deserialize)]
pub struct AddEntryRequest {
    pub content: String,
}

/// Append entry response
#[derive(Debug, Serialize)]
pub struct AddEntryResponse {
    pub digest: Digest,
}

/// Journal read response.
///
/// `title` and `owner` are null and `entries` empty when the object exists but
/// is not journal-shaped.
#[derive(Debug, Serialize)]
pub struct JournalResponse {
    pub id: ObjectId,
    pub title: Option<String>,
    pub owner: Option<String>,
    pub entries: Vec<Entry>,
}

impl From<&ObjectData> for JournalResponse {
    fn from(data: &ObjectData) -> Self {
        match journal_view(data) {
            Some(view) => Self {
                id: data.object_id.clone(),
                title: Some(view.title),
                owner: Some(
                    Address::parse(&view.owner)
                        .map(String::from)
                        .unwrap_or(view.owner),
                ),
                entries: view.entries,
            },
            None => Self {
                id: data.object_id.clone(),
                title: None,
                owner: None,
                entries: Vec::new(),
            },
        }
    }
}

// ============================================
// NETWORK / ACCOUNT DTOs
// ============================================

/// Active network variables
#[derive(Debug, Serialize)]
pub struct NetworkResponse {
    pub network: String,
    pub rpc_url: String,
    pub journal_package_id: Option<ObjectId>,
}

/// Connected wallet account
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub address: Option<Address>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub network: String,
    pub uptime_seconds: u64,
    pub version: String,
}
