//! # Node Client Tests
//!
//! End-to-end tests driving the client against an in-process mock node.

mod payments;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::{json, Value};
use shared::dto::token::TokenRecord;

use crate::core::service::{
    LedgerRpc, Notification, NotificationLevel, NotificationSink, TokenInfoProvider,
};

use super::{NodeClient, ERROR_NOTIFICATION_TITLE};

pub const OUR_ADDRESS: &str = "0x82641569b2062B545431cF6D7F0A418582865ba7";
pub const TOKEN_ADDRESS: &str = "0x0f114A1E9Db192502E7856309cc899952b3db1ED";
pub const PARTNER_ADDRESS: &str = "0x774aFb0652ca2c711fD13e6E9d51620568f6Ca82";

/// One request the mock node served.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: String,
    pub body: Value,
}

/// In-process stand-in for the node's REST API.
///
/// Routes are stubbed per `"METHOD /path"`; every served request is
/// recorded so tests can assert on ordering and request bodies.
#[derive(Clone, Default)]
pub struct MockNode {
    responses: Arc<Mutex<HashMap<String, (u16, Value)>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockNode {
    pub fn respond(&self, method_and_path: &str, status: u16, body: Value) {
        self.responses
            .lock()
            .insert(method_and_path.to_string(), (status, body));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    /// How many times a route was served.
    pub fn hits(&self, method_and_path: &str) -> usize {
        self.requests
            .lock()
            .iter()
            .filter(|request| format!("{} {}", request.method, request.path) == method_and_path)
            .count()
    }

    /// Index of the first request for a route, in arrival order.
    pub fn position(&self, method_and_path: &str) -> Option<usize> {
        self.requests
            .lock()
            .iter()
            .position(|request| format!("{} {}", request.method, request.path) == method_and_path)
    }

    /// Serve on an ephemeral port, returning the API base URL.
    pub async fn serve(&self) -> String {
        let app = Router::new().fallback(handle).with_state(self.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock node");
        let addr = listener.local_addr().expect("Failed to read mock node address");

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Failed to serve mock node");
        });

        format!("http://{}", addr)
    }
}

async fn handle(State(node): State<MockNode>, request: Request) -> impl IntoResponse {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let query = request.uri().query().unwrap_or_default().to_string();
    let bytes = axum::body::to_bytes(request.into_body(), usize::MAX)
        .await
        .unwrap_or_default();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    let key = format!("{} {}", method, path);
    node.requests.lock().push(RecordedRequest {
        method,
        path,
        query,
        body,
    });

    let stub = node.responses.lock().get(&key).cloned();
    match stub {
        Some((status, body)) => (
            StatusCode::from_u16(status).expect("Invalid stub status"),
            Json(body),
        ),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "errors": format!("no stub for {}", key) })),
        ),
    }
}

/// Notification sink recording every dispatch in order.
#[derive(Clone, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<(NotificationLevel, Notification)>>>,
}

impl RecordingSink {
    pub fn notifications(&self) -> Vec<(NotificationLevel, Notification)> {
        self.events.lock().clone()
    }

    pub fn errors(&self) -> Vec<Notification> {
        self.events
            .lock()
            .iter()
            .filter(|(level, _)| *level == NotificationLevel::Error)
            .map(|(_, notification)| notification.clone())
            .collect()
    }
}

impl NotificationSink for RecordingSink {
    fn success(&self, notification: Notification) {
        self.events
            .lock()
            .push((NotificationLevel::Success, notification));
    }

    fn info(&self, notification: Notification) {
        self.events
            .lock()
            .push((NotificationLevel::Info, notification));
    }

    fn error(&self, notification: Notification) {
        self.events
            .lock()
            .push((NotificationLevel::Error, notification));
    }
}

/// Token info provider answering from a fixed in-memory table.
#[derive(Clone, Default)]
pub struct StaticTokenInfo {
    records: Arc<Mutex<HashMap<String, TokenRecord>>>,
}

impl StaticTokenInfo {
    pub fn insert(&self, record: TokenRecord) {
        self.records.lock().insert(record.address.clone(), record);
    }

    pub fn set_balance(&self, address: &str, balance: u128) {
        if let Some(record) = self.records.lock().get_mut(address) {
            record.balance = balance;
        }
    }
}

#[async_trait]
impl TokenInfoProvider for StaticTokenInfo {
    async fn token_infos(
        &self,
        addresses: &[String],
        _our_address: &str,
    ) -> anyhow::Result<HashMap<String, TokenRecord>> {
        let records = self.records.lock();
        Ok(addresses
            .iter()
            .filter_map(|address| {
                records
                    .get(address)
                    .map(|record| (address.clone(), record.clone()))
            })
            .collect())
    }
}

/// Ledger RPC with canned block data.
pub struct StaticLedger {
    pub block: u64,
    pub timestamp: i64,
}

impl Default for StaticLedger {
    fn default() -> Self {
        Self {
            block: 1_234,
            // 2021-01-01T00:00:00Z
            timestamp: 1_609_459_200,
        }
    }
}

#[async_trait]
impl LedgerRpc for StaticLedger {
    async fn block_number(&self) -> anyhow::Result<u64> {
        Ok(self.block)
    }

    async fn block_timestamp(&self, _block: u64) -> anyhow::Result<i64> {
        Ok(self.timestamp)
    }

    fn is_checksum_address(&self, address: &str) -> bool {
        address.starts_with("0x")
    }

    fn to_checksum_address(&self, address: &str) -> anyhow::Result<String> {
        Ok(address.to_string())
    }
}

/// A client wired to a fresh mock node and recording doubles.
pub struct Harness {
    pub client: NodeClient,
    pub node: MockNode,
    pub sink: RecordingSink,
    pub provider: StaticTokenInfo,
}

/// Spin up a mock node and build a client against it.
pub async fn harness() -> Harness {
    let node = MockNode::default();
    let base = node.serve().await;
    let sink = RecordingSink::default();
    let provider = StaticTokenInfo::default();

    let client = NodeClient::builder()
        .api_base(base)
        .notifier(Arc::new(sink.clone()))
        .token_info(Arc::new(provider.clone()))
        .ledger(Arc::new(StaticLedger::default()))
        .build()
        .expect("Failed to build test client");

    Harness {
        client,
        node,
        sink,
        provider,
    }
}

pub fn test_token() -> TokenRecord {
    TokenRecord {
        address: TOKEN_ADDRESS.to_string(),
        symbol: "TST".to_string(),
        name: "Test Suite Token".to_string(),
        decimals: 8,
        balance: 20,
        connected: None,
    }
}

pub fn channel_json(identifier: u64, partner: &str, balance: u64) -> Value {
    json!({
        "channel_identifier": identifier,
        "token_address": TOKEN_ADDRESS,
        "partner_address": partner,
        "state": "opened",
        "settle_timeout": 500,
        "reveal_timeout": 600,
        "balance": balance,
        "total_deposit": 10,
    })
}

/// Stub the three requests a connection-inclusive refresh issues.
pub fn stub_refresh(harness: &Harness) {
    harness
        .node
        .respond("GET /address", 200, json!({ "our_address": OUR_ADDRESS }));
    harness
        .node
        .respond("GET /tokens", 200, json!([TOKEN_ADDRESS]));
    harness.node.respond("GET /connections", 200, json!({}));
    harness.provider.insert(test_token());
}
