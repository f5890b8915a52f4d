//! # Token Registry
//!
//! The shared token cache and the operations that populate it.

use std::collections::HashMap;

use parking_lot::RwLock;
use serde_json::json;
use shared::dto::token::{Connection, TokenRecord};
use tracing::{debug, instrument};

use crate::core::error::{ApiError, Result};
use crate::core::service::Notification;

use super::client::NodeClient;

// ==================== TOKEN REGISTRY ====================

/// In-memory cache of every token the node has reported, keyed by address.
///
/// Refreshes only add or update entries. An address that drops out of a
/// later server response stays cached, so views built on the registry never
/// lose a token they have already shown.
#[derive(Default)]
pub struct TokenRegistry {
    records: RwLock<HashMap<String, TokenRecord>>,
}

impl TokenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached record for `address`, if any.
    pub fn get(&self, address: &str) -> Option<TokenRecord> {
        self.records.read().get(address).cloned()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// All cached records.
    pub fn snapshot(&self) -> Vec<TokenRecord> {
        self.records.read().values().cloned().collect()
    }

    /// Fold freshly fetched records into the cache under a single write
    /// lock.
    ///
    /// Fetched fields win over cached ones, except that `connected` is kept
    /// from the cache when the refresh did not fetch the connection summary.
    /// Entries are only ever added or updated, never removed.
    pub(crate) fn merge<I>(&self, fetched: I, overwrite_connected: bool)
    where
        I: IntoIterator<Item = TokenRecord>,
    {
        let mut records = self.records.write();
        for mut token in fetched {
            if !overwrite_connected {
                if let Some(cached) = records.get(&token.address) {
                    token.connected = cached.connected.clone();
                }
            }
            records.insert(token.address.clone(), token);
        }
    }
}

// ==================== TOKEN OPERATIONS ====================

impl NodeClient {
    /// Refresh the token registry from the node.
    ///
    /// Token metadata and, when `include_connections` is set, the
    /// connection summary are fetched concurrently; the registry is only
    /// touched once both have arrived, so a half-failed refresh leaves the
    /// cache as it was. Returns the full cache contents, not just the
    /// entries this refresh fetched.
    #[instrument(skip(self))]
    pub async fn refresh_tokens(&self, include_connections: bool) -> Result<Vec<TokenRecord>> {
        let our_address = self.our_address().await?;

        let metadata = async {
            let addresses: Vec<String> = self.get_json(self.url("tokens")).await?;
            self.token_info
                .token_infos(&addresses, &our_address)
                .await
                .map_err(|err| self.fail(err.into()))
        };
        let connections = async {
            if !include_connections {
                return Ok(None);
            }
            let summary: HashMap<String, Connection> =
                self.get_json(self.url("connections")).await?;
            Ok(Some(summary))
        };

        let (mut tokens, connections) = tokio::try_join!(metadata, connections)?;

        // A fetched summary is authoritative: tokens it does not mention
        // lose their cached connection state.
        if let Some(summary) = &connections {
            for (address, token) in tokens.iter_mut() {
                token.connected = summary.get(address).cloned();
            }
        }

        self.registry
            .merge(tokens.into_values(), connections.is_some());

        let snapshot = self.registry.snapshot();
        debug!(total = snapshot.len(), "token registry refreshed");
        Ok(snapshot)
    }

    /// Cached token record for `address`. Reads the registry only.
    pub fn token(&self, address: &str) -> Option<TokenRecord> {
        self.registry.get(address)
    }

    /// All cached token records.
    pub fn tokens(&self) -> Vec<TokenRecord> {
        self.registry.snapshot()
    }

    /// Register a token with the node.
    ///
    /// On success the record is re-read from the registry rather than the
    /// response body; an address the registry has never seen fails with a
    /// no-contract error.
    #[instrument(skip(self))]
    pub async fn register_token(&self, token_address: &str) -> Result<TokenRecord> {
        let url = self.url(&format!("tokens/{}", token_address));
        self.send(self.http.put(url).json(&json!({}))).await?;

        match self.token(token_address) {
            Some(token) => {
                self.notifier.success(Notification::new(
                    "Token registered",
                    format!("Your token was successfully registered: {}", token.address),
                ));
                Ok(token)
            }
            None => Err(self.fail(ApiError::Validation(format!(
                "No contract on address: {}",
                token_address
            )))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(address: &str, balance: u128) -> TokenRecord {
        TokenRecord {
            address: address.to_string(),
            symbol: "TST".to_string(),
            name: "Test Suite Token".to_string(),
            decimals: 8,
            balance,
            connected: None,
        }
    }

    fn connection(channels: u32) -> Connection {
        Connection {
            funds: 100,
            sum_deposits: 67,
            channels,
        }
    }

    #[test]
    fn test_merge_adds_new_records() {
        // Arrange
        let registry = TokenRegistry::new();

        // Act
        registry.merge([record("0xA", 10), record("0xB", 0)], false);

        // Assert
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("0xA").unwrap().balance, 10);
    }

    #[test]
    fn test_merge_updates_fetched_fields_in_place() {
        // Arrange
        let registry = TokenRegistry::new();
        registry.merge([record("0xA", 10)], false);

        // Act
        registry.merge([record("0xA", 25)], false);

        // Assert
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("0xA").unwrap().balance, 25);
    }

    #[test]
    fn test_merge_keeps_cached_connection_when_summary_not_fetched() {
        // Arrange
        let registry = TokenRegistry::new();
        let mut seeded = record("0xA", 10);
        seeded.connected = Some(connection(3));
        registry.merge([seeded], true);

        // Act
        registry.merge([record("0xA", 25)], false);

        // Assert
        let merged = registry.get("0xA").unwrap();
        assert_eq!(merged.balance, 25);
        assert_eq!(merged.connected, Some(connection(3)));
    }

    #[test]
    fn test_merge_overwrites_connection_when_summary_fetched() {
        // Arrange
        let registry = TokenRegistry::new();
        let mut seeded = record("0xA", 10);
        seeded.connected = Some(connection(3));
        registry.merge([seeded], true);

        // Act: a refresh that fetched the summary but saw no connection
        // for the token clears the cached one.
        registry.merge([record("0xA", 10)], true);

        // Assert
        assert_eq!(registry.get("0xA").unwrap().connected, None);
    }

    #[test]
    fn test_merge_never_drops_addresses() {
        // Arrange
        let registry = TokenRegistry::new();
        registry.merge([record("0xA", 10), record("0xB", 0)], false);

        // Act
        registry.merge([record("0xB", 7)], true);

        // Assert
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("0xA").unwrap().balance, 10);
        assert_eq!(registry.get("0xB").unwrap().balance, 7);
    }
}
