use serde::{Deserialize, Serialize};

/// Response of `GET /address`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddressResponse {
    pub our_address: String,
}

/// Body for `PUT /connections/{token}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectionRequest {
    /// Funds in base units to allocate across the token network
    pub funds: u128,
}

/// Error envelope returned by the node on failed requests
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiErrorBody {
    pub errors: ErrorDetail,
}

/// The node reports either a single message or a per-field mapping, where
/// each field carries one message or a list of messages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Fields(serde_json::Map<String, serde_json::Value>),
}
