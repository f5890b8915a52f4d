use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Body for `POST /payments/{token}/{target}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentRequest {
    /// Amount in base units
    pub amount: u128,
    pub identifier: u64,
}

/// Success shape of a payment command.
///
/// The node echoes more fields than these, but `target_address` and
/// `identifier` are the two that distinguish an accepted payment from a
/// degenerate 2xx body; anything else is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentReceipt {
    pub target_address: String,
    pub identifier: u64,
}

/// One entry of the payment history (`GET /payments/{token}`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentEvent {
    pub event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<u128>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initiator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<u64>,
    /// Node-local wall clock, no timezone on the wire
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_time: Option<NaiveDateTime>,
}

impl PaymentEvent {
    /// True when `address` appears as either side of the transfer
    pub fn involves(&self, address: &str) -> bool {
        self.initiator.as_deref() == Some(address) || self.target.as_deref() == Some(address)
    }
}
