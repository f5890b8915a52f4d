//! # Node API Client Module
//!
//! HTTP client for a payment channel network node's REST API.
//! Handles the token registry, channel composition, payments, swaps, and
//! network membership.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs          - Module exports and NodeClientBuilder
//! ├── client.rs       - NodeClient struct, error pipeline, ledger wrappers
//! ├── address.rs      - Memoized node address (GET /address)
//! ├── tokens.rs       - Token registry cache and refresh/register
//! ├── channels.rs     - Channel composition, open/deposit/close
//! ├── connections.rs  - Join and leave token networks
//! ├── payments.rs     - Payments and payment history
//! ├── swaps.rs        - Token swap negotiation
//! └── events.rs       - Blockchain event queries
//! ```

pub mod address;
pub mod channels;
pub mod client;
pub mod connections;
pub mod events;
pub mod payments;
pub mod swaps;
pub mod tokens;

#[cfg(test)]
mod tests;

pub use client::{NodeClient, ERROR_NOTIFICATION_TITLE};
pub use events::EventScope;
pub use payments::payment_identifier;
pub use tokens::TokenRegistry;

use std::sync::Arc;
use std::time::Duration;

use crate::core::config::NodeConfig;
use crate::core::service::{LedgerRpc, NotificationSink, TokenInfoProvider};

/// Builder for configuring a [`NodeClient`].
///
/// Endpoint and timeout fall back to [`NodeConfig::default`]; the three
/// collaborators are required.
#[derive(Clone, Default)]
pub struct NodeClientBuilder {
    config: NodeConfig,
    notifier: Option<Arc<dyn NotificationSink>>,
    token_info: Option<Arc<dyn TokenInfoProvider>>,
    ledger: Option<Arc<dyn LedgerRpc>>,
}

impl NodeClientBuilder {
    /// Use a prepared configuration, replacing endpoint and timeout.
    pub fn config(mut self, config: NodeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the node API base URL.
    pub fn api_base(mut self, url: impl Into<String>) -> Self {
        self.config.api_base = url.into();
        self
    }

    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Sink receiving user-facing notifications.
    pub fn notifier(mut self, notifier: Arc<dyn NotificationSink>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Provider resolving token metadata and balances in batch.
    pub fn token_info(mut self, provider: Arc<dyn TokenInfoProvider>) -> Self {
        self.token_info = Some(provider);
        self
    }

    /// Ledger RPC used for block and checksum queries.
    pub fn ledger(mut self, ledger: Arc<dyn LedgerRpc>) -> Self {
        self.ledger = Some(ledger);
        self
    }

    /// Build the [`NodeClient`] with the configured settings.
    pub fn build(self) -> anyhow::Result<NodeClient> {
        self.config
            .validate()
            .map_err(|message| anyhow::anyhow!(message))?;

        let notifier = self
            .notifier
            .ok_or_else(|| anyhow::anyhow!("a notification sink is required"))?;
        let token_info = self
            .token_info
            .ok_or_else(|| anyhow::anyhow!("a token info provider is required"))?;
        let ledger = self
            .ledger
            .ok_or_else(|| anyhow::anyhow!("a ledger RPC is required"))?;

        let http = reqwest::Client::builder()
            .timeout(self.config.timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(NodeClient {
            http,
            config: self.config,
            registry: TokenRegistry::new(),
            notifier,
            token_info,
            ledger,
            address: tokio::sync::OnceCell::new(),
        })
    }
}
