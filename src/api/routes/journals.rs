//! Journal Routes
//!
//! - POST /api/v1/journals - Create a journal owned by the wallet account
//! - GET /api/v1/journals/:id - Read a journal
//! - POST /api/v1/journals/:id/entries - Append an entry

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::api::dto::{AddEntryRequest, AddEntryResponse, CreateJournalRequest, JournalResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::journal::{self, CreatedJournal};
use crate::ledger::ObjectId;

fn parse_id(raw: &str) -> ApiResult<ObjectId> {
    ObjectId::parse(raw).map_err(|e| ApiError::Validation(e.to_string()))
}

/// POST /api/v1/journals
pub async fn create_journal(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateJournalRequest>,
) -> ApiResult<(StatusCode, Json<CreatedJournal>)> {
    if request.title.trim().is_empty() {
        return Err(ApiError::Validation("title must not be empty".to_string()));
    }
    let package = state.package_id()?;

    let created = journal::create_journal(
        state.wallet.as_ref(),
        state.client.as_ref(),
        package,
        &request.title,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/journals/:id
pub async fn get_journal(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<JournalResponse>> {
    let id = parse_id(&id)?;

    let data = journal::fetch_journal(state.client.as_ref(), &id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("journal {}", id)))?;

    Ok(Json(JournalResponse::from(&data)))
}

/// POST /api/v1/journals/:id/entries
pub async fn add_entry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(request): Json<AddEntryRequest>,
) -> ApiResult<(StatusCode, Json<AddEntryResponse>)> {
    let id = parse_id(&id)?;
    if request.content.trim().is_empty() {
        return Err(ApiError::Validation("content must not be empty".to_string()));
    }
    let package = state.package_id()?;

    let digest = journal::append_entry(
        state.wallet.as_ref(),
        state.client.as_ref(),
        package,
        &id,
        &request.content,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(AddEntryResponse { digest })))
}
