//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and
//! modularity.
//!
//! The client drives three collaborators it does not own: the batch
//! token-metadata retriever, the ledger RPC client, and the notification
//! surface of whatever UI embeds it. Each is consumed through a trait so
//! tests can substitute in-memory doubles.

use std::collections::HashMap;

use async_trait::async_trait;
use shared::dto::token::TokenRecord;

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Info,
    Error,
}

/// User-facing notification payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Sink for user-facing notifications.
///
/// Dispatch is synchronous and must not block; implementations that hand
/// off to a UI thread should enqueue instead (see
/// [`crate::services::notify::ChannelNotifier`]).
pub trait NotificationSink: Send + Sync {
    /// A command completed and the user asked for it explicitly
    fn success(&self, notification: Notification);

    /// State changed in a way the user should know about
    fn info(&self, notification: Notification);

    /// An operation failed; exactly one of these per failure
    fn error(&self, notification: Notification);
}

/// Batch retrieval of token metadata and balances.
///
/// This trait allows for dependency injection and mocking in tests.
#[async_trait]
pub trait TokenInfoProvider: Send + Sync {
    /// Resolve metadata and the balance of `our_address` for every entry
    /// of `addresses`, keyed by token address.
    ///
    /// Addresses the provider cannot resolve are simply absent from the
    /// result; they stay out of the registry until a later refresh finds
    /// them.
    async fn token_infos(
        &self,
        addresses: &[String],
        our_address: &str,
    ) -> anyhow::Result<HashMap<String, TokenRecord>>;
}

/// Ledger RPC operations the client exposes but does not implement.
///
/// This trait allows for dependency injection and mocking in tests.
#[async_trait]
pub trait LedgerRpc: Send + Sync {
    /// Current block height
    async fn block_number(&self) -> anyhow::Result<u64>;

    /// Unix timestamp (seconds) of the given block
    async fn block_timestamp(&self, block: u64) -> anyhow::Result<i64>;

    /// Whether `address` carries a valid mixed-case checksum
    fn is_checksum_address(&self, address: &str) -> bool;

    /// Re-encode `address` with its canonical checksum
    fn to_checksum_address(&self, address: &str) -> anyhow::Result<String>;
}
