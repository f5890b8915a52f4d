//! # Node API Error Types
//!
//! Unified error handling for every node API operation.
//!
//! The node reports failures in several shapes: a structured `errors`
//! payload (a plain message or a per-field mapping), a bare HTTP status, or
//! no response at all. [`ApiError::from_response`] flattens all of them into
//! a single human-readable message so that callers and the notification
//! pipeline only ever deal with one error model.
//!
//! ## Error Categories
//!
//! - **Server**: the node rejected the request with a structured `errors`
//!   payload, already flattened to one line per field
//! - **Transport**: an HTTP failure without a structured body
//! - **ShapeMismatch**: a success response whose body does not decode as
//!   the expected shape
//! - **Validation**: local validation failed before or after the request
//! - **Http**: connection-level failures and collaborator errors
//!
//! ## Usage Pattern
//!
//! ```rust
//! use node_client::core::error::{ApiError, Result};
//!
//! fn require_positive(amount: u128) -> Result<u128> {
//!     if amount == 0 {
//!         return Err(ApiError::Validation("Amount must be positive".to_string()));
//!     }
//!     Ok(amount)
//! }
//! ```

use reqwest::StatusCode;
use shared::dto::node::{ApiErrorBody, ErrorDetail};
use thiserror::Error;

/// Unified error for all node API operations.
///
/// Every variant carries a `String` payload, which keeps the type cheap to
/// clone; the memoized address session relies on that to replay failures to
/// later callers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Structured rejection reported by the node.
    ///
    /// The payload is the already-flattened message: a plain `errors`
    /// string verbatim, or one `field: message` line per entry of an
    /// `errors` mapping.
    #[error("{0}")]
    Server(String),

    /// HTTP failure without a structured body.
    #[error("{status} - {status_text} {body}")]
    Transport {
        status: u16,
        status_text: String,
        body: String,
    },

    /// Success response whose body does not decode as the expected shape.
    #[error("{0}")]
    ShapeMismatch(String),

    /// Local validation failure.
    #[error("{0}")]
    Validation(String),

    /// Connection-level failure, or any error without an HTTP response.
    #[error("{0}")]
    Http(String),
}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// Normalize a non-success HTTP response into a single message.
    ///
    /// Priority order:
    /// 1. body with a string `errors` field: used verbatim
    /// 2. body with an `errors` mapping: one `field: message` line per
    ///    entry, in the order the server declared them, several messages
    ///    per field joined with a comma
    /// 3. anything else: the raw status line and body
    ///
    /// ```rust
    /// use node_client::core::error::ApiError;
    /// use reqwest::StatusCode;
    ///
    /// let error = ApiError::from_response(
    ///     StatusCode::CONFLICT,
    ///     r#"{"errors": {"partner_address": ["Not a valid EIP55 encoded address"]}}"#,
    /// );
    /// assert_eq!(
    ///     error.to_string(),
    ///     "partner_address: Not a valid EIP55 encoded address"
    /// );
    /// ```
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        if let Ok(ApiErrorBody { errors }) = serde_json::from_str::<ApiErrorBody>(body) {
            return match errors {
                ErrorDetail::Message(message) => ApiError::Server(message),
                ErrorDetail::Fields(fields) => ApiError::Server(render_fields(&fields)),
            };
        }

        ApiError::Transport {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("").to_string(),
            body: body.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Http(err.to_string())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Http(err.to_string())
    }
}

/// One `field: message` line per entry, keeping the server's field order
fn render_fields(fields: &serde_json::Map<String, serde_json::Value>) -> String {
    let mut message = String::new();
    for (field, detail) in fields {
        if !message.is_empty() {
            message.push('\n');
        }
        message.push_str(field);
        message.push_str(": ");
        message.push_str(&render_detail(detail));
    }
    message
}

fn render_detail(detail: &serde_json::Value) -> String {
    match detail {
        serde_json::Value::String(message) => message.clone(),
        serde_json::Value::Array(messages) => messages
            .iter()
            .map(render_detail)
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}
