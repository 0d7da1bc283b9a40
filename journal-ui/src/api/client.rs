//! HTTP API Client
//!
//! Functions for communicating with the journal host API. The host owns the
//! ledger and wallet connections; the browser only sees these JSON routes.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8085/api/v1";

const API_URL_KEY: &str = "journal_api_url";

/// Get the API base URL from local storage (`journal_api_url`) or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct NetworkInfo {
    pub network: String,
    pub rpc_url: String,
    #[serde(default)]
    pub journal_package_id: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct AccountResponse {
    #[serde(default)]
    address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct CreatedJournal {
    pub id: String,
    pub digest: String,
}

/// Journal as returned by the host; null fields mean the object is not journal-shaped
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Journal {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Entry {
    pub content: String,
    pub create_at_ms: String,
}

#[derive(Debug, serde::Deserialize)]
struct AddEntryResponse {
    digest: String,
}

#[derive(Debug, serde::Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: Option<String>,
    message: String,
}

/// Host error codes reported after the wallet executed the transaction
const POST_EXECUTION_CODES: &[&str] = &["FINALIZATION_TIMEOUT", "MISSING_CREATED_OBJECT"];

/// A failed host call, with the host's error code when it sent one
#[derive(Debug, Clone, PartialEq)]
pub struct ApiFailure {
    pub code: Option<String>,
    pub message: String,
}

impl ApiFailure {
    fn transport(message: impl ToString) -> Self {
        Self {
            code: None,
            message: message.to_string(),
        }
    }

    /// The transaction executed even though the call failed; resubmitting would repeat it
    pub fn is_post_execution(&self) -> bool {
        self.code
            .as_deref()
            .is_some_and(|code| POST_EXECUTION_CODES.contains(&code))
    }
}

impl std::fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<ApiFailure> for String {
    fn from(failure: ApiFailure) -> Self {
        failure.message
    }
}

// ============ API Functions ============

/// Fetch the active network variables
pub async fn fetch_network() -> Result<NetworkInfo, String> {
    let response = Request::get(&format!("{}/network", get_api_base()))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    parse(response).await.map_err(String::from)
}

/// Fetch the wallet's connected account
pub async fn fetch_account() -> Result<Option<String>, String> {
    let response = Request::get(&format!("{}/account", get_api_base()))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let account: AccountResponse = parse(response).await?;
    Ok(account.address)
}

/// Create a journal; resolves once the transaction has finalized
pub async fn create_journal(title: &str) -> Result<CreatedJournal, ApiFailure> {
    #[derive(serde::Serialize)]
    struct CreateJournalRequest<'a> {
        title: &'a str,
    }

    let response = Request::post(&format!("{}/journals", get_api_base()))
        .json(&CreateJournalRequest { title })
        .map_err(|e| ApiFailure::transport(format!("Request build error: {}", e)))?
        .send()
        .await
        .map_err(ApiFailure::transport)?;

    parse(response).await
}

/// Read a journal; `Ok(None)` when the object does not exist
pub async fn fetch_journal(id: &str) -> Result<Option<Journal>, String> {
    let response = Request::get(&format!("{}/journals/{}", get_api_base(), id))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.status() == 404 {
        return Ok(None);
    }

    parse(response).await.map(Some).map_err(String::from)
}

/// Append an entry; resolves with the digest once finalized
pub async fn add_entry(id: &str, content: &str) -> Result<String, String> {
    #[derive(serde::Serialize)]
    struct AddEntryRequest<'a> {
        content: &'a str,
    }

    let response = Request::post(&format!("{}/journals/{}/entries", get_api_base(), id))
        .json(&AddEntryRequest { content })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let added: AddEntryResponse = parse(response).await?;
    Ok(added.digest)
}

/// Decode a success body, or surface the host's error message verbatim
async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiFailure> {
    if !response.ok() {
        let status = response.status();
        return Err(match response.json::<ApiError>().await {
            Ok(error) => ApiFailure {
                code: error.error.code,
                message: error.error.message,
            },
            Err(_) => ApiFailure::transport(format!("HTTP {}", status)),
        });
    }

    response
        .json()
        .await
        .map_err(|e| ApiFailure::transport(format!("Parse error: {}", e)))
}
