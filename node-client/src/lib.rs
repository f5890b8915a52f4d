//! # Payment Channel Network Node Client - Library Root
//!
//! Client-side state synchronization layer between a user interface and a
//! payment channel network (PCN) node's REST API.
//!
//! The crate caches and reconciles registered tokens and open payment
//! channels, issues mutating commands (open, close, deposit, pay, swap,
//! join or leave a token network), and normalizes the node's heterogeneous
//! error shapes into a single user-facing error model.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              node-client (this crate)                  │
//! ├────────────────────────────────────────────────────────┤
//! │  NodeClient     - REST commands + queries               │
//! │  TokenRegistry  - cached tokens, merge on refresh       │
//! │  ApiError       - unified error normalization           │
//! │  Tokio          - async runtime                         │
//! │  Reqwest        - HTTP client                           │
//! └────────────────────────────────────────────────────────┘
//!    │                │                      │
//!    │ HTTP/JSON      │ trait calls          │ notifications
//!    ▼                ▼                      ▼
//! ┌──────────┐  ┌──────────────────┐  ┌──────────────────┐
//! │ PCN node │  │ TokenInfoProvider│  │ NotificationSink │
//! │ REST API │  │ LedgerRpc        │  │ (UI toasts etc.) │
//! └──────────┘  └──────────────────┘  └──────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **core**: Foundational abstractions
//!   - `config`: Node endpoint configuration (`NodeConfig`)
//!   - `error`: Unified error type (`ApiError`) and normalization
//!   - `service`: Collaborator traits for dependency injection
//!
//! - **services**: The client and its supporting plumbing
//!   - `api`: `NodeClient` with one file per API resource
//!   - `notify`: Channel-backed `NotificationSink` for event-driven UIs
//!
//! ## Core Concepts
//!
//! ### One notification per failure
//!
//! Every failed operation funnels through a single pipeline that logs the
//! normalized message and dispatches exactly one error notification before
//! the error is returned to the caller.
//!
//! ### Merge-on-refresh token cache
//!
//! Refreshing the token registry never drops addresses. Freshly fetched
//! fields overwrite cached ones; the joined-network summary survives
//! refreshes that skipped the `/connections` endpoint.
//!
//! ### Memoized node address
//!
//! The node's own address is fetched once per client and replayed to every
//! later caller, including the failure case.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use node_client::{ChannelNotifier, NodeClient};
//! # use node_client::{LedgerRpc, TokenInfoProvider};
//! # async fn example(
//! #     provider: Arc<dyn TokenInfoProvider>,
//! #     ledger: Arc<dyn LedgerRpc>,
//! # ) -> anyhow::Result<()> {
//! let (notifier, notifications) = ChannelNotifier::unbounded();
//! let client = NodeClient::builder()
//!     .api_base("http://localhost:5001/api/v1")
//!     .notifier(Arc::new(notifier))
//!     .token_info(provider)
//!     .ledger(ledger)
//!     .build()?;
//!
//! let tokens = client.refresh_tokens(true).await?;
//! let channels = client.channels().await?;
//! # Ok(())
//! # }
//! ```

// Re-export main modules for testing and integration
pub mod core;
pub mod services;

// Re-export commonly used types for convenience
// These are the types consumers of this library will need most often
pub use crate::core::config::NodeConfig;
pub use crate::core::error::{ApiError, Result};
pub use crate::core::service::{
    LedgerRpc, Notification, NotificationLevel, NotificationSink, TokenInfoProvider,
};
pub use crate::services::api::{EventScope, NodeClient, NodeClientBuilder};
pub use crate::services::notify::{ChannelNotifier, NotificationEvent};
