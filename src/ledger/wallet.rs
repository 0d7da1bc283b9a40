//! Wallet connector
//!
//! Signing and execution are owned by an external wallet service. This module
//! only knows how to ask it for the connected account and hand it a
//! [`Transaction`] to sign and execute.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::{LedgerError, LedgerResult};
use super::transaction::Transaction;
use super::types::{Address, Digest};

/// Outcome of a successful sign-and-execute
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExecutionResult {
    pub digest: Digest,
}

/// Account holder able to sign and execute transactions
#[async_trait]
pub trait Wallet: Send + Sync {
    /// Currently connected account, if any
    async fn current_account(&self) -> LedgerResult<Option<Address>>;

    /// Sign the transaction with the connected account and submit it
    async fn sign_and_execute(&self, transaction: &Transaction) -> LedgerResult<ExecutionResult>;
}

/// Configuration for the HTTP wallet connector
#[derive(Debug, Clone)]
pub struct ConnectorConfig {
    /// Base URL of the connector (e.g. "http://localhost:9000")
    pub base_url: String,
    /// Request timeout in milliseconds; signing may wait on user approval
    pub request_timeout_ms: u64,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:9000".to_string(),
            request_timeout_ms: 120_000,
        }
    }
}

/// Wallet backed by a connector service speaking JSON over HTTP
pub struct ConnectorWallet {
    client: Client,
    config: ConnectorConfig,
}

impl ConnectorWallet {
    pub fn new(config: ConnectorConfig) -> LedgerResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/v1/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn check(response: reqwest::Response) -> LedgerResult<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            Err(LedgerError::Wallet {
                status: status.as_u16(),
                message: text,
            })
        }
    }
}

#[derive(Debug, Deserialize)]
struct AccountResponse {
    #[serde(default)]
    address: Option<Address>,
}

#[derive(Debug, Serialize)]
struct SignAndExecuteRequest<'a> {
    transaction: &'a Transaction,
}

#[async_trait]
impl Wallet for ConnectorWallet {
    async fn current_account(&self) -> LedgerResult<Option<Address>> {
        let response = self
            .client
            .get(self.url("account"))
            .send()
            .await
            .map_err(LedgerError::from_transport)?;

        let account: AccountResponse = Self::check(response)
            .await?
            .json()
            .await
            .map_err(LedgerError::from_transport)?;

        Ok(account.address)
    }

    async fn sign_and_execute(&self, transaction: &Transaction) -> LedgerResult<ExecutionResult> {
        tracing::info!(commands = transaction.commands.len(), "Submitting transaction to wallet");

        let response = self
            .client
            .post(self.url("sign-and-execute"))
            .json(&SignAndExecuteRequest { transaction })
            .send()
            .await
            .map_err(LedgerError::from_transport)?;

        let result: ExecutionResult = Self::check(response)
            .await?
            .json()
            .await
            .map_err(LedgerError::from_transport)?;

        tracing::info!(digest = %result.digest, "Transaction executed");
        Ok(result)
    }
}
