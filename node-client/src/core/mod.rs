//! # Core Abstractions
//!
//! Foundational types shared by every part of the client:
//!
//! - **[`config`]**: Node endpoint configuration (`NodeConfig`)
//! - **[`error`]**: Unified error type (`ApiError`, `Result<T>`) and the
//!   normalization of the node's heterogeneous error bodies
//! - **[`service`]**: Collaborator traits for dependency injection
//!   (`TokenInfoProvider`, `LedgerRpc`, `NotificationSink`)
//!
//! ## Dependency Injection
//!
//! External subsystems the client depends on but does not own, such as the
//! batch token-metadata retriever, the ledger RPC client, and the UI's
//! notification surface, are consumed through the traits in [`service`].
//! Tests drive the client with in-memory doubles of the same traits.

pub mod config;
pub mod error;
pub mod service;

pub use config::NodeConfig;
pub use error::{ApiError, Result};
pub use service::{
    LedgerRpc, Notification, NotificationLevel, NotificationSink, TokenInfoProvider,
};
