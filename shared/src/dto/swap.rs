use serde::{Deserialize, Serialize};

/// Which side of the swap this node takes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SwapRole {
    Maker,
    Taker,
}

/// A token swap negotiated with a partner node
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenSwap {
    pub partner_address: String,
    pub identifier: u64,
    pub role: SwapRole,
    pub sending_token: String,
    pub sending_amount: u128,
    pub receiving_token: String,
    pub receiving_amount: u128,
}

/// Body for `PUT /token_swaps/{partner}/{identifier}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenSwapRequest {
    pub role: SwapRole,
    pub sending_token: String,
    pub sending_amount: u128,
    pub receiving_token: String,
    pub receiving_amount: u128,
}

impl From<&TokenSwap> for TokenSwapRequest {
    fn from(swap: &TokenSwap) -> Self {
        Self {
            role: swap.role,
            sending_token: swap.sending_token.clone(),
            sending_amount: swap.sending_amount,
            receiving_token: swap.receiving_token.clone(),
            receiving_amount: swap.receiving_amount,
        }
    }
}
