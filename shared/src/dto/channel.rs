use serde::{Deserialize, Serialize};

use crate::dto::token::TokenRecord;

/// Payment channel as reported by the node
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChannelRecord {
    pub channel_identifier: u64,
    pub token_address: String,
    pub partner_address: String,
    /// Node-defined lifecycle state ("opened", "closed", "settled", ...),
    /// treated as opaque except where a command checks for "closed"
    pub state: String,
    pub settle_timeout: u32,
    pub reveal_timeout: u32,
    pub balance: u128,
    pub total_deposit: u128,
    /// Registry decoration attached client-side, never on the wire
    #[serde(skip)]
    pub user_token: Option<TokenRecord>,
}

/// Body for `PUT /channels`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OpenChannelRequest {
    pub token_address: String,
    pub partner_address: String,
    pub settle_timeout: u32,
    pub total_deposit: u128,
}

/// Body for `PATCH /channels/{token}/{partner}`.
///
/// Each command sends exactly one field: deposits send `total_deposit`,
/// close sends `state`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChannelPatchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_deposit: Option<u128>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}
