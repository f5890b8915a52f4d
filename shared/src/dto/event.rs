use serde::{Deserialize, Serialize};

/// Raw blockchain event from the node's `_debug/blockchain_events` endpoints.
///
/// Payloads are server-defined and vary per event type, so everything beyond
/// the type tag and block number is kept as loose JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlockchainEvent {
    pub event_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_number: Option<u64>,
    #[serde(flatten)]
    pub data: serde_json::Map<String, serde_json::Value>,
}
