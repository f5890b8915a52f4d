//! # Node Client
//!
//! The client struct, the shared request helpers, and the error pipeline
//! every operation funnels through.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use reqwest::Response;
use serde::de::DeserializeOwned;
use tokio::sync::OnceCell;
use tracing::error;

use crate::core::config::NodeConfig;
use crate::core::error::{ApiError, Result};
use crate::core::service::{LedgerRpc, Notification, NotificationSink, TokenInfoProvider};

use super::tokens::TokenRegistry;

/// Title of every notification raised by the error pipeline
pub const ERROR_NOTIFICATION_TITLE: &str = "Node Error";

/// HTTP client for a payment channel network node's REST API.
///
/// Owns the token registry cache and the memoized node address, and funnels
/// every failure through one logging-and-notification pipeline. All methods
/// take `&self`; the client is cheap to share behind an `Arc`.
pub struct NodeClient {
    pub(crate) http: reqwest::Client,
    pub(crate) config: NodeConfig,
    pub(crate) registry: TokenRegistry,
    pub(crate) notifier: Arc<dyn NotificationSink>,
    pub(crate) token_info: Arc<dyn TokenInfoProvider>,
    pub(crate) ledger: Arc<dyn LedgerRpc>,
    /// Outcome of the first `/address` request, replayed to later callers
    pub(crate) address: OnceCell<Result<String>>,
}

impl NodeClient {
    /// Create a builder for configuring the client.
    pub fn builder() -> super::NodeClientBuilder {
        super::NodeClientBuilder::default()
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    /// Absolute URL for an API path.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_base.trim_end_matches('/'), path)
    }

    /// Log and surface a failure, then hand it back for propagation.
    ///
    /// Every failed operation passes through here exactly once.
    pub(crate) fn fail(&self, error: ApiError) -> ApiError {
        let message = error.to_string();
        error!("{}", message);
        self.notifier
            .error(Notification::new(ERROR_NOTIFICATION_TITLE, message));
        error
    }

    /// Secondary shape validation for commands that inspect their success
    /// body. Failures notify under the command's own title instead of the
    /// generic pipeline, so the caller still sees exactly one notification.
    pub(crate) fn shape_failure(&self, action: &str, body: String) -> ApiError {
        error!("{} response had an unexpected shape: {}", action, body);
        self.notifier.error(Notification::new(action, body.clone()));
        ApiError::ShapeMismatch(body)
    }

    /// Issue a request, normalizing connection failures and non-success
    /// statuses. Success bodies are left untouched for the caller.
    pub(crate) async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response> {
        let response = request.send().await.map_err(|err| self.fail(err.into()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(self.fail(ApiError::from_response(status, &body)))
    }

    /// Decode a success body, turning undecodable payloads into normalized
    /// failures.
    pub(crate) async fn read_json<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let body = response.text().await.map_err(|err| self.fail(err.into()))?;
        serde_json::from_str(&body).map_err(|err| {
            self.fail(ApiError::ShapeMismatch(format!(
                "Failed to parse response: {}",
                err
            )))
        })
    }

    /// GET a JSON resource.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T> {
        let response = self.send(self.http.get(url)).await?;
        self.read_json(response).await
    }

    /// Scale a user-entered decimal amount into base units, normalizing
    /// rejected input.
    pub(crate) fn base_units(&self, amount: &str, decimals: u8) -> Result<u128> {
        shared::amount::to_base_units(amount, decimals)
            .map_err(|err| self.fail(ApiError::Validation(err.to_string())))
    }
}

// ==================== LEDGER WRAPPERS ====================
//
// Thin delegations to the injected ledger RPC. These do not raise
// notifications: they are queries on behalf of the UI, not node commands.

impl NodeClient {
    /// Current block height of the underlying ledger.
    pub async fn block_number(&self) -> Result<u64> {
        self.ledger.block_number().await.map_err(ApiError::from)
    }

    /// Resolve a block number to its timestamp.
    pub async fn block_to_date(&self, block: u64) -> Result<DateTime<Utc>> {
        let timestamp = self
            .ledger
            .block_timestamp(block)
            .await
            .map_err(ApiError::from)?;

        DateTime::<Utc>::from_timestamp(timestamp, 0).ok_or_else(|| {
            ApiError::Validation(format!(
                "block {} has an out-of-range timestamp: {}",
                block, timestamp
            ))
        })
    }

    /// Whether `address` carries a valid mixed-case checksum.
    pub fn check_checksum_address(&self, address: &str) -> bool {
        self.ledger.is_checksum_address(address)
    }

    /// Re-encode `address` with its canonical checksum.
    pub fn to_checksum_address(&self, address: &str) -> Result<String> {
        self.ledger
            .to_checksum_address(address)
            .map_err(ApiError::from)
    }
}
