//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures used for communication with a
//! payment channel network node via its REST API.
//!
//! ## Module Organization
//!
//! - [`token`] - Registered tokens and joined-network connection summaries
//! - [`channel`] - Payment channels, open/patch command bodies
//! - [`payment`] - Payment command bodies, receipts, and history events
//! - [`swap`] - Token swap negotiation
//! - [`event`] - Raw blockchain events from the node's debug endpoint
//! - [`node`] - Node-level responses and the error payload envelope
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json` for JSON serialization:
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Enums**: Serialize to lowercase strings using `#[serde(rename_all = "lowercase")]`
//! - **Amounts**: `u128` base units on the wire, never decimal strings
//!
//! ## Example JSON Communication
//!
//! ### Request/Response Pair
//!
//! ```text
//! PUT /api/v1/channels
//! Content-Type: application/json
//!
//! {
//!   "token_address": "0x0f114A1E9Db192502E7856309cc899952b3db1ED",
//!   "partner_address": "0x774aFb0652ca2c711fD13e6E9d51620568f6Ca82",
//!   "settle_timeout": 500,
//!   "total_deposit": 100000000
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 201 Created
//! Content-Type: application/json
//!
//! {
//!   "channel_identifier": 1,
//!   "token_address": "0x0f114A1E9Db192502E7856309cc899952b3db1ED",
//!   "partner_address": "0x774aFb0652ca2c711fD13e6E9d51620568f6Ca82",
//!   "state": "opened",
//!   "settle_timeout": 500,
//!   "reveal_timeout": 50,
//!   "balance": 100000000,
//!   "total_deposit": 100000000
//! }
//! ```

pub mod channel;
pub mod event;
pub mod node;
pub mod payment;
pub mod swap;
pub mod token;

pub use channel::*;
pub use event::*;
pub use node::*;
pub use payment::*;
pub use swap::*;
pub use token::*;
