//! # Services Module
//!
//! The node client and its supporting plumbing.
//!
//! ## Module Overview
//!
//! ```text
//! services/
//! ├── api/        - NodeClient: REST commands and queries
//! │                 (tokens, channels, payments, swaps, events)
//! └── notify.rs   - ChannelNotifier: NotificationSink backed by an
//!                   async channel, for event-driven UIs
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                     Embedding UI                        │
//! │                                                         │
//! │   draws from                        calls into          │
//! │  ┌────────────────────┐      ┌──────────────────┐       │
//! │  │ NotificationEvent  │◄─────│  NodeClient      │       │
//! │  │ receiver (notify)  │      │  (api)           │       │
//! │  └────────────────────┘      └────────┬─────────┘       │
//! └───────────────────────────────────────┼─────────────────┘
//!                                         │ HTTP/JSON
//!                                         ▼
//!                              ┌─────────────────────┐
//!                              │     PCN node        │
//!                              │                     │
//!                              │  /address           │
//!                              │  /tokens            │
//!                              │  /connections       │
//!                              │  /channels          │
//!                              │  /payments          │
//!                              │  /token_swaps       │
//!                              └─────────────────────┘
//! ```

pub mod api;
pub mod notify;
