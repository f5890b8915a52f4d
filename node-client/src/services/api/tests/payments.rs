//! # Payment Tests
//!
//! Sending payments and filtering the payment history.

use super::*;
use crate::core::error::ApiError;

fn payment_route() -> String {
    format!("POST /payments/{}/{}", TOKEN_ADDRESS, PARTNER_ADDRESS)
}

#[tokio::test]
async fn test_payment_success_notifies_transfer() {
    // Arrange
    let h = harness().await;
    h.node.respond(
        &payment_route(),
        200,
        json!({ "target_address": PARTNER_ADDRESS, "identifier": 1_599_999 }),
    );

    // Act
    let receipt = h
        .client
        .initiate_payment(TOKEN_ADDRESS, PARTNER_ADDRESS, "0.0000001", 8)
        .await
        .expect("payment");

    // Assert: scaled amount and a fresh identifier went on the wire
    let requests = h.node.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].body["amount"], json!(10));
    let identifier = requests[0].body["identifier"]
        .as_u64()
        .expect("numeric identifier");
    assert!(identifier > 1_600_000_000_000);

    assert_eq!(receipt.target_address, PARTNER_ADDRESS);
    let notifications = h.sink.notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].0, NotificationLevel::Success);
    assert_eq!(notifications[0].1.title, "Transfer successful");
    assert_eq!(
        notifications[0].1.description,
        format!(
            "A payment of 0.0000001 was successfully sent to the partner {}",
            PARTNER_ADDRESS
        )
    );
}

#[tokio::test]
async fn test_payment_shape_mismatch_raises_single_error() {
    // Arrange: HTTP success without the expected receipt fields
    let h = harness().await;
    h.node
        .respond(&payment_route(), 200, json!({ "amount": 10 }));

    // Act
    let result = h
        .client
        .initiate_payment(TOKEN_ADDRESS, PARTNER_ADDRESS, "0.0000001", 8)
        .await;

    // Assert
    assert!(matches!(result, Err(ApiError::ShapeMismatch(_))));
    let notifications = h.sink.notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].0, NotificationLevel::Error);
    assert_eq!(notifications[0].1.title, "Payment error");
    assert_eq!(notifications[0].1.description, r#"{"amount":10}"#);
}

#[tokio::test]
async fn test_history_filters_by_counterparty() {
    // Arrange
    let h = harness().await;
    h.node.respond(
        &format!("GET /payments/{}", TOKEN_ADDRESS),
        200,
        json!([
            {
                "event": "EventPaymentSentSuccess",
                "amount": 5,
                "initiator": OUR_ADDRESS,
                "target": PARTNER_ADDRESS,
                "identifier": 1,
                "log_time": "2021-01-01T00:00:00"
            },
            {
                "event": "EventPaymentReceivedSuccess",
                "amount": 7,
                "initiator": "0xFC57d325f23b9121a8488fFdE2E6b3ef1208a20b",
                "target": OUR_ADDRESS,
                "identifier": 2
            },
            { "event": "EventPaymentSentFailed" }
        ]),
    );

    // Act
    let filtered = h
        .client
        .payment_history(TOKEN_ADDRESS, Some(PARTNER_ADDRESS))
        .await
        .expect("filtered history");
    let all = h
        .client
        .payment_history(TOKEN_ADDRESS, None)
        .await
        .expect("full history");

    // Assert
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].identifier, Some(1));
    assert_eq!(all.len(), 3);
}
