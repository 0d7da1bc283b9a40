//! Network and account routes
//!
//! - GET /api/v1/network - Active network variables for the UI
//! - GET /api/v1/account - Account connected to the wallet

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{AccountResponse, NetworkResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// GET /api/v1/network
pub async fn get_network(State(state): State<Arc<AppState>>) -> Json<NetworkResponse> {
    Json(NetworkResponse {
        network: state.network.name.clone(),
        rpc_url: state.network.rpc_url.clone(),
        journal_package_id: state.network.journal_package_id.clone(),
    })
}

/// GET /api/v1/account
pub async fn get_account(State(state): State<Arc<AppState>>) -> ApiResult<Json<AccountResponse>> {
    let address = state.wallet.current_account().await?;
    Ok(Json(AccountResponse { address }))
}
