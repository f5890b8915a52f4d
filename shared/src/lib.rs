//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between a frontend and a payment channel
//! network (PCN) node's REST API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for node API communication
//!   - **[`dto::token`]**: Registered tokens and joined-network summaries
//!   - **[`dto::channel`]**: Payment channels and channel commands
//!   - **[`dto::payment`]**: Payment commands, receipts, and history events
//! - **[`amount`]**: Exact decimal-string to base-unit conversion
//!   - **[`amount::to_base_units`]**: Scale a user-entered decimal amount
//!   - **[`amount::to_decimal`]**: Render base units back for display
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case** in Rust, which maps to **snake_case** in JSON by default
//! - Optional fields are omitted from JSON when `None` (using `#[serde(skip_serializing_if = "Option::is_none")]`)
//! - Token and channel amounts are unsigned **base units** (`u128`); the node
//!   never sees decimal strings
//!
//! ## Usage
//!
//! ```rust
//! use shared::amount::{to_base_units, to_decimal};
//! use shared::dto::channel::OpenChannelRequest;
//!
//! let deposit = to_base_units("0.5", 18).unwrap();
//! let request = OpenChannelRequest {
//!     token_address: "0x0f114A1E9Db192502E7856309cc899952b3db1ED".to_string(),
//!     partner_address: "0x774aFb0652ca2c711fD13e6E9d51620568f6Ca82".to_string(),
//!     settle_timeout: 500,
//!     total_deposit: deposit,
//! };
//!
//! assert_eq!(to_decimal(request.total_deposit, 18), "0.5");
//! ```

pub mod amount;
pub mod dto;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use amount::*;
pub use dto::*;
