use serde::{Deserialize, Serialize};

/// Joined-network summary for one token (entry of `GET /connections`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Connection {
    pub funds: u128,
    pub sum_deposits: u128,
    pub channels: u32,
}

/// A registered token enriched with metadata and the user's balance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenRecord {
    pub address: String,
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
    /// Balance in base units
    pub balance: u128,
    /// Present only while the user participates in this token's network
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connected: Option<Connection>,
}
