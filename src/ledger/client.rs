//! Sui JSON-RPC client
//!
//! Read-side access to the ledger: fetch objects and wait for submitted
//! transactions to finalize.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use super::error::{LedgerError, LedgerResult};
use super::types::{Digest, ObjectId, ObjectOptions, ObjectResponse, TransactionResponse};

/// Read access to ledger state
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Fetch the current state of an object
    async fn get_object(&self, id: &ObjectId, options: ObjectOptions)
        -> LedgerResult<ObjectResponse>;

    /// Fetch a transaction and its effects; fails if not yet known to the node
    async fn get_transaction(&self, digest: &Digest) -> LedgerResult<TransactionResponse>;

    /// Block until the transaction is finalized and return its effects
    async fn wait_for_transaction(&self, digest: &Digest) -> LedgerResult<TransactionResponse>;
}

/// Configuration for the JSON-RPC client
#[derive(Debug, Clone)]
pub struct SuiRpcConfig {
    /// Full node URL (e.g. "https://fullnode.testnet.sui.io:443")
    pub rpc_url: String,
    /// Per-request timeout in milliseconds
    pub request_timeout_ms: u64,
    /// Total time to wait for finalization in milliseconds
    pub wait_timeout_ms: u64,
    /// Delay between finalization polls in milliseconds
    pub poll_interval_ms: u64,
}

impl Default for SuiRpcConfig {
    fn default() -> Self {
        Self {
            rpc_url: "https://fullnode.testnet.sui.io:443".to_string(),
            request_timeout_ms: 10_000,
            wait_timeout_ms: 60_000,
            poll_interval_ms: 2_000,
        }
    }
}

/// JSON-RPC 2.0 client for a Sui full node
pub struct SuiRpcClient {
    client: Client,
    config: SuiRpcConfig,
    next_id: AtomicU64,
}

impl SuiRpcClient {
    pub fn new(config: SuiRpcConfig) -> LedgerResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self {
            client,
            config,
            next_id: AtomicU64::new(1),
        })
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> LedgerResult<T> {
        let request = RpcRequest {
            jsonrpc: "2.0",
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            method,
            params,
        };

        tracing::debug!(method, id = request.id, "Sending RPC request");

        let response = self
            .client
            .post(&self.config.rpc_url)
            .json(&request)
            .send()
            .await
            .map_err(LedgerError::from_transport)?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(LedgerError::Rpc {
                code: i64::from(status.as_u16()),
                message: text,
            });
        }

        let body: serde_json::Value = response.json().await.map_err(LedgerError::from_transport)?;
        decode_rpc_response(body)
    }
}

#[async_trait]
impl LedgerClient for SuiRpcClient {
    async fn get_object(
        &self,
        id: &ObjectId,
        options: ObjectOptions,
    ) -> LedgerResult<ObjectResponse> {
        self.call("sui_getObject", serde_json::json!([id, options]))
            .await
    }

    async fn get_transaction(&self, digest: &Digest) -> LedgerResult<TransactionResponse> {
        self.call(
            "sui_getTransactionBlock",
            serde_json::json!([digest, { "showEffects": true }]),
        )
        .await
    }

    async fn wait_for_transaction(&self, digest: &Digest) -> LedgerResult<TransactionResponse> {
        let deadline = Instant::now() + Duration::from_millis(self.config.wait_timeout_ms);
        let interval = Duration::from_millis(self.config.poll_interval_ms);

        loop {
            match self.get_transaction(digest).await {
                Ok(response) => {
                    tracing::debug!(%digest, "Transaction finalized");
                    return Ok(response);
                }
                Err(e) => {
                    tracing::trace!(%digest, error = %e, "Transaction not yet available");
                }
            }

            if Instant::now() + interval > deadline {
                return Err(LedgerError::FinalizationTimeout(digest.clone()));
            }
            tokio::time::sleep(interval).await;
        }
    }
}

// ============================================
// JSON-RPC envelope
// ============================================

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct RpcEnvelope {
    #[serde(default)]
    result: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

/// Unwrap a JSON-RPC response body into its typed result
fn decode_rpc_response<T: DeserializeOwned>(body: serde_json::Value) -> LedgerResult<T> {
    let envelope: RpcEnvelope = serde_json::from_value(body)?;

    if let Some(error) = envelope.error {
        return Err(LedgerError::Rpc {
            code: error.code,
            message: error.message,
        });
    }

    let result = envelope
        .result
        .ok_or_else(|| LedgerError::Decode("response has neither result nor error".to_string()))?;

    Ok(serde_json::from_value(result)?)
}
