//! # Payments
//!
//! Sending payments and reading the per-token payment history.

use chrono::Utc;
use rand::Rng;
use shared::amount::to_decimal;
use shared::dto::payment::{PaymentEvent, PaymentReceipt, PaymentRequest};
use tracing::instrument;

use crate::core::error::Result;
use crate::core::service::Notification;

use super::client::NodeClient;

/// Identifier for a fresh payment: the current time bucketed to the
/// second, with a random component filling the millisecond digits.
pub fn payment_identifier() -> u64 {
    let bucket = (Utc::now().timestamp_millis() as u64 / 1000) * 1000;
    let jitter: u64 = rand::rng().random_range(0..1000);
    bucket + jitter
}

impl NodeClient {
    /// Send `amount` of a token to `target_address`.
    ///
    /// The amount is a decimal string, scaled with the token's `decimals`.
    /// The node's answer must carry the paid target and identifier back;
    /// anything else is treated as a failed payment even on HTTP success.
    #[instrument(skip(self))]
    pub async fn initiate_payment(
        &self,
        token_address: &str,
        target_address: &str,
        amount: &str,
        decimals: u8,
    ) -> Result<PaymentReceipt> {
        let base_amount = self.base_units(amount, decimals)?;
        let body = PaymentRequest {
            amount: base_amount,
            identifier: payment_identifier(),
        };
        let url = self.url(&format!("payments/{}/{}", token_address, target_address));
        let response = self.send(self.http.post(url).json(&body)).await?;

        let raw = response.text().await.map_err(|err| self.fail(err.into()))?;
        match serde_json::from_str::<PaymentReceipt>(&raw) {
            Ok(receipt) => {
                self.notifier.success(Notification::new(
                    "Transfer successful",
                    format!(
                        "A payment of {} was successfully sent to the partner {}",
                        to_decimal(base_amount, decimals),
                        target_address
                    ),
                ));
                Ok(receipt)
            }
            Err(_) => Err(self.shape_failure("Payment error", raw)),
        }
    }

    /// Payment events recorded for a token, optionally narrowed to the
    /// ones a single counterparty initiated or received.
    pub async fn payment_history(
        &self,
        token_address: &str,
        target_address: Option<&str>,
    ) -> Result<Vec<PaymentEvent>> {
        let url = self.url(&format!("payments/{}", token_address));
        let mut events: Vec<PaymentEvent> = self.get_json(url).await?;
        if let Some(target) = target_address {
            events.retain(|event| event.involves(target));
        }
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_buckets_by_second() {
        // Arrange
        let before = Utc::now().timestamp() as u64;

        // Act
        let identifier = payment_identifier();

        // Assert
        let after = Utc::now().timestamp() as u64;
        let bucket = identifier / 1000;
        assert!(bucket >= before && bucket <= after);
    }

    #[test]
    fn test_identifier_jitter_varies_in_millisecond_digits() {
        // Arrange / Act
        let identifiers: Vec<u64> = (0..64).map(|_| payment_identifier()).collect();

        // Assert: buckets are plausible unix seconds, jitter actually varies
        assert!(identifiers.iter().all(|id| id / 1000 > 1_600_000_000));
        let first_jitter = identifiers[0] % 1000;
        assert!(identifiers.iter().any(|id| id % 1000 != first_jitter));
    }
}
